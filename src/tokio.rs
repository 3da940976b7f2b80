//! Running read calls from asynchronous code.
//!
//! Reads are still blocking system calls; they are moved onto Tokio's blocking thread pool so that
//! they do not stall the executor. No readiness polling happens: a non-blocking descriptor with no
//! data yields [`Outcome::WouldBlock`] just like the synchronous version.

use crate::{
    error::{Operation, ReadnError},
    options::ReadOptions,
    outcome::Outcome,
};
use std::{
    io,
    os::fd::{AsFd, OwnedFd},
};

/// Performs [`ReadOptions::read`] on the blocking pool and hands the descriptor back afterwards.
///
/// The descriptor is lost only if the blocking task panics or is cancelled by runtime shutdown.
///
/// Buffered handles are not supported here, since they would have to be moved to another thread.
pub async fn read(
    fd: OwnedFd,
    options: ReadOptions,
) -> (Option<OwnedFd>, Result<Outcome, ReadnError>) {
    let task = ::tokio::task::spawn_blocking(move || {
        let rslt = options.read(fd.as_fd());
        (fd, rslt)
    });
    match task.await {
        Ok((fd, rslt)) => (Some(fd), rslt),
        Err(e) => (None, Err(ReadnError::new(Operation::Readn, io::Error::other(e)))),
    }
}
