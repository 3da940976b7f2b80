use super::{c_wrappers, unixprelude::*};
use std::{io, mem::MaybeUninit};

/// A source that a single `read(2)`/`pread(2)` call can be issued against.
///
/// A positional read (`offset` is `Some`) must leave any shared cursor untouched.
pub(crate) trait RawRead {
    fn raw_read(&mut self, buf: &mut [MaybeUninit<u8>], offset: Option<u64>) -> io::Result<usize>;
}

impl RawRead for BorrowedFd<'_> {
    fn raw_read(&mut self, buf: &mut [MaybeUninit<u8>], offset: Option<u64>) -> io::Result<usize> {
        let length_to_read = buf.len();
        let size_or_err = match offset {
            None => unsafe {
                libc::read(self.as_raw_fd(), buf.as_mut_ptr().cast(), length_to_read)
            },
            Some(offset) => {
                let offset = c_wrappers::to_off_t(offset)?;
                unsafe {
                    libc::pread(self.as_raw_fd(), buf.as_mut_ptr().cast(), length_to_read, offset)
                }
            }
        };
        #[allow(clippy::cast_sign_loss)] // only taken when non-negative
        let bytes_read = size_or_err as usize;
        ok_or_errno!(size_or_err >= 0 => bytes_read)
    }
}

/// Result of one attempt at a raw read.
#[derive(Debug)]
pub(crate) enum ReadStep {
    /// The call was interrupted by a signal before transferring anything.
    Retry,
    Done(io::Result<usize>),
}

pub(crate) fn read_step<R: RawRead + ?Sized>(
    src: &mut R,
    buf: &mut [MaybeUninit<u8>],
    offset: Option<u64>,
) -> ReadStep {
    match src.raw_read(buf, offset) {
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            log::trace!("read interrupted by a signal, retrying");
            ReadStep::Retry
        }
        rslt => ReadStep::Done(rslt),
    }
}

/// Issues reads until one of them is not interrupted. There is no limit on the number of retries.
pub(crate) fn read_retrying<R: RawRead + ?Sized>(
    src: &mut R,
    buf: &mut [MaybeUninit<u8>],
    offset: Option<u64>,
) -> io::Result<usize> {
    loop {
        match read_step(src, &mut *buf, offset) {
            ReadStep::Retry => continue,
            ReadStep::Done(rslt) => break rslt,
        }
    }
}
