use super::unixprelude::*;
use crate::OrErrno;
use std::{io, mem::MaybeUninit};

pub(crate) fn fstat(fd: BorrowedFd<'_>) -> io::Result<libc::stat> {
    let mut out = MaybeUninit::<libc::stat>::uninit();
    let success = unsafe { libc::fstat(fd.as_raw_fd(), out.as_mut_ptr()) != -1 };
    // SAFETY: fstat() fills the structure on success
    success.true_or_errno(|| unsafe { out.assume_init() })
}

/// Size of the file behind `fd` if it is a regular file. Failure to `fstat` is not an error here.
pub(crate) fn regular_file_size(fd: BorrowedFd<'_>) -> Option<u64> {
    let stat = fstat(fd).ok()?;
    if stat.st_mode & libc::S_IFMT != libc::S_IFREG {
        return None;
    }
    u64::try_from(stat.st_size).ok()
}

/// The OS-level cursor of the descriptor, as reported by `lseek(fd, 0, SEEK_CUR)`.
pub(crate) fn current_position(fd: BorrowedFd<'_>) -> io::Result<u64> {
    let pos = unsafe { libc::lseek(fd.as_raw_fd(), 0, libc::SEEK_CUR) };
    let pos = ok_or_errno!(pos != -1 => pos)?;
    u64::try_from(pos).map_err(|_| io::Error::from_raw_os_error(libc::EOVERFLOW))
}

pub(crate) fn to_off_t(offset: u64) -> io::Result<off_t> {
    off_t::try_from(offset).map_err(|_| io::Error::from_raw_os_error(libc::EINVAL))
}
