//! C stdio streams as buffered handles.
//!
//! [`StdioFile`] owns a `FILE*` created over a descriptor with `fdopen(3)`. Its read-ahead buffer
//! is maintained by the C library, which makes it the canonical example of a handle whose
//! cursor drifts away from the descriptor's when the descriptor is read directly.

use crate::{target::BufferedHandle, OrErrno};
use std::{
    ffi::CStr,
    fmt::{self, Debug, Formatter},
    io::{self, Read, Write},
    os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd, IntoRawFd, OwnedFd},
    ptr::NonNull,
};

/// An owned C stdio stream.
///
/// The stream is closed with `fclose(3)` on drop, which also closes the descriptor.
pub struct StdioFile(NonNull<libc::FILE>);
impl StdioFile {
    /// Wraps the descriptor in a stdio stream opened with the given `fopen(3)`-style mode, such
    /// as `c"r"` or `c"r+"`.
    ///
    /// On failure the descriptor is closed.
    pub fn from_fd(fd: OwnedFd, mode: &CStr) -> io::Result<Self> {
        let raw = fd.into_raw_fd();
        // SAFETY: raw is an open descriptor we own, and mode is NUL-terminated
        let fp = unsafe { libc::fdopen(raw, mode.as_ptr()) };
        match NonNull::new(fp) {
            Some(fp) => Ok(Self(fp)),
            None => {
                let e = io::Error::last_os_error();
                // SAFETY: fdopen() did not take ownership, so we still have it
                drop(unsafe { OwnedFd::from_raw_fd(raw) });
                Err(e)
            }
        }
    }

    /// The position of the stream as seen through its buffer (`ftello(3)`).
    pub fn tell(&mut self) -> io::Result<u64> {
        // SAFETY: the stream stays open for as long as self exists
        let pos = unsafe { libc::ftello(self.0.as_ptr()) };
        let pos = ok_or_errno!(pos != -1 => pos)?;
        u64::try_from(pos).map_err(|_| io::Error::from_raw_os_error(libc::EOVERFLOW))
    }

    /// Repositions the stream at an absolute offset (`fseeko(3)`), dropping buffered input.
    pub fn seek_to(&mut self, pos: u64) -> io::Result<()> {
        let pos = crate::os::unix::to_off_t(pos)?;
        // SAFETY: as above
        (unsafe { libc::fseeko(self.0.as_ptr(), pos, libc::SEEK_SET) } == 0).true_val_or_errno(())
    }

    fn error_flag(&self) -> bool {
        // SAFETY: the stream is open
        unsafe { libc::ferror(self.0.as_ptr()) != 0 }
    }
    fn clear_error(&mut self) {
        // SAFETY: the stream is open
        unsafe { libc::clearerr(self.0.as_ptr()) }
    }

    #[inline]
    fn as_ptr(&self) -> *mut libc::FILE { self.0.as_ptr() }
}

impl Read for StdioFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: buf is valid for buf.len() bytes of writes
        let n = unsafe { libc::fread(buf.as_mut_ptr().cast(), 1, buf.len(), self.as_ptr()) };
        if n == 0 && !buf.is_empty() && self.error_flag() {
            // fread() does not report errno itself, but the descriptor-level call leaves it set
            let e = io::Error::last_os_error();
            self.clear_error();
            return Err(e);
        }
        Ok(n)
    }
}
impl Write for StdioFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // SAFETY: buf is valid for buf.len() bytes of reads
        let n = unsafe { libc::fwrite(buf.as_ptr().cast(), 1, buf.len(), self.as_ptr()) };
        if n < buf.len() && self.error_flag() {
            let e = io::Error::last_os_error();
            self.clear_error();
            if n == 0 {
                return Err(e);
            }
        }
        Ok(n)
    }
    fn flush(&mut self) -> io::Result<()> {
        // SAFETY: the stream is open
        (unsafe { libc::fflush(self.as_ptr()) } == 0).true_val_or_errno(())
    }
}

impl BufferedHandle for StdioFile {
    #[inline]
    fn descriptor(&self) -> BorrowedFd<'_> { self.as_fd() }
    #[inline]
    fn flush_pending(&mut self) -> io::Result<()> { self.flush() }
    #[inline]
    fn buffered_position(&mut self) -> io::Result<u64> { self.tell() }
    #[inline]
    fn set_buffered_position(&mut self, pos: u64) -> io::Result<()> { self.seek_to(pos) }
}

impl AsFd for StdioFile {
    #[inline]
    fn as_fd(&self) -> BorrowedFd<'_> {
        // SAFETY: the stream is open
        let fd = unsafe { libc::fileno(self.as_ptr()) };
        // SAFETY: the stream owns the descriptor for as long as it is open
        unsafe { BorrowedFd::borrow_raw(fd) }
    }
}
impl AsRawFd for StdioFile {
    #[inline]
    fn as_raw_fd(&self) -> libc::c_int { self.as_fd().as_raw_fd() }
}
impl Debug for StdioFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdioFile").field("fd", &self.as_raw_fd()).finish()
    }
}
impl Drop for StdioFile {
    fn drop(&mut self) {
        // SAFETY: the stream is open and nothing uses it after this
        let success = unsafe { libc::fclose(self.as_ptr()) } == 0;
        debug_assert!(success, "fclose() failed: {}", io::Error::last_os_error());
    }
}
// SAFETY: stdio streams carry their own lock, and we only hand out `&mut` access anyway
unsafe impl Send for StdioFile {}
