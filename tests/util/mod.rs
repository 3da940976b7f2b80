//! Test utilities: scratch files, pipes, and a scripted stand-in for a descriptor.
#![allow(dead_code, unused_macros)]

#[macro_use]
mod eyre;
mod scripted;
mod xorshift;

#[allow(unused_imports)]
pub use {eyre::*, scripted::*, xorshift::*};

use crate::OrErrno;
use std::{
    fs::{File, OpenOptions},
    io::Write,
    os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd, OwnedFd},
    path::PathBuf,
};
use tempdir::TempDir;

pub fn test_wrapper(f: impl FnOnce() -> TestResult) -> TestResult {
    eyre::install();
    f()
}
/// For async tests, which cannot go through `test_wrapper`.
pub fn install_eyre() { eyre::install() }

/// A file with the given contents in a fresh temporary directory, which is removed on drop.
pub struct ScratchFile {
    _dir: TempDir,
    pub path: PathBuf,
}
impl ScratchFile {
    pub fn new(name: &str, contents: &[u8]) -> TestResult<Self> {
        let dir = TempDir::new(name).opname("temporary directory creation")?;
        let path = dir.path().join(name);
        File::create(&path)
            .and_then(|mut f| f.write_all(contents))
            .opname("scratch file creation")?;
        Ok(Self { _dir: dir, path })
    }
    pub fn open(&self) -> TestResult<File> { File::open(&self.path).opname("open") }
    pub fn open_rw(&self) -> TestResult<File> {
        OpenOptions::new().read(true).write(true).open(&self.path).opname("open")
    }
}

pub fn pipe() -> TestResult<(OwnedFd, OwnedFd)> {
    let mut fds = [0; 2];
    let success = unsafe { libc::pipe(fds.as_mut_ptr()) == 0 };
    success.true_val_or_errno(()).opname("pipe")?;
    // SAFETY: freshly created and not owned by anything else
    Ok(unsafe { (OwnedFd::from_raw_fd(fds[0]), OwnedFd::from_raw_fd(fds[1])) })
}

pub fn set_nonblocking(fd: BorrowedFd<'_>) -> TestResult {
    let flags = unsafe { libc::fcntl(fd.as_raw_fd(), libc::F_GETFL) };
    (flags != -1).true_val_or_errno(()).opname("F_GETFL")?;
    let success =
        unsafe { libc::fcntl(fd.as_raw_fd(), libc::F_SETFL, flags | libc::O_NONBLOCK) != -1 };
    success.true_val_or_errno(()).opname("F_SETFL")?;
    Ok(())
}

pub fn write_all(fd: &OwnedFd, data: &[u8]) -> TestResult {
    File::from(fd.try_clone().opname("dup")?)
        .write_all(data)
        .opname("write")
}

/// The OS-level cursor of a descriptor.
pub fn os_position(fd: impl AsFd) -> TestResult<u64> {
    crate::os::unix::current_position(fd.as_fd()).opname("lseek")
}
