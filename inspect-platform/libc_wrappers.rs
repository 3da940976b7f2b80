use std::{
    io,
    os::fd::{AsRawFd, BorrowedFd},
};

pub fn lseek_cur(fd: BorrowedFd<'_>) -> io::Result<u64> {
    let pos = unsafe { libc::lseek(fd.as_raw_fd(), 0, libc::SEEK_CUR) };
    if pos == -1 {
        return Err(io::Error::last_os_error());
    }
    u64::try_from(pos).map_err(io::Error::other)
}

pub fn blksize(fd: BorrowedFd<'_>) -> io::Result<i64> {
    let mut st = std::mem::MaybeUninit::<libc::stat>::uninit();
    if unsafe { libc::fstat(fd.as_raw_fd(), st.as_mut_ptr()) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(unsafe { st.assume_init() }.st_blksize as i64)
}
