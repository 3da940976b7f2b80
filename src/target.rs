//! What a read call reads from: a bare descriptor or a buffered handle wrapping one.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Seek, SeekFrom, Write},
    os::fd::{AsFd, BorrowedFd},
};

/// A handle which wraps a descriptor with its own buffer and cursor, like a C stdio stream.
///
/// Reads through [`Target::Handle`] go straight to the descriptor and bypass the handle's
/// buffer. Before the read, pending output is written out with
/// [`flush_pending`](Self::flush_pending); after a read at the current position, the handle's
/// cursor is moved to wherever the descriptor's cursor ended up with
/// [`set_buffered_position`](Self::set_buffered_position).
pub trait BufferedHandle {
    /// The descriptor underneath the handle.
    fn descriptor(&self) -> BorrowedFd<'_>;
    /// Writes out any buffered output and leaves the descriptor at the handle's logical
    /// position, giving back read-ahead data that was not consumed yet.
    ///
    /// Handles that are not open for writing may fail with `EBADF`; that error is ignored by
    /// the read call.
    fn flush_pending(&mut self) -> io::Result<()>;
    /// The position the handle believes it is at, accounting for its buffer.
    fn buffered_position(&mut self) -> io::Result<u64>;
    /// Moves the handle's cursor to the absolute position `pos`, discarding read-ahead data.
    fn set_buffered_position(&mut self, pos: u64) -> io::Result<()>;
}

// Seeking by zero drops the read-ahead and moves the file back to the reader's position.
derive_buffered_handle!(BufReader<File>, |slf| slf.seek(SeekFrom::Current(0)).map(drop));
derive_buffered_handle!(BufWriter<File>, |slf| slf.flush());

/// The source of a read call.
pub enum Target<'a> {
    /// A bare descriptor. Its cursor is the only position there is.
    Fd(BorrowedFd<'a>),
    /// A buffered handle whose cursor is kept in step with its descriptor.
    Handle(&'a mut dyn BufferedHandle),
}
impl Target<'_> {
    /// The descriptor that reads are issued against.
    #[inline]
    pub fn descriptor(&self) -> BorrowedFd<'_> {
        match self {
            Self::Fd(fd) => *fd,
            Self::Handle(h) => h.descriptor(),
        }
    }
    /// Whether this is a buffered handle.
    #[inline]
    pub fn is_handle(&self) -> bool { matches!(self, Self::Handle(..)) }
}
impl<'a> From<BorrowedFd<'a>> for Target<'a> {
    #[inline]
    fn from(fd: BorrowedFd<'a>) -> Self { Self::Fd(fd) }
}
impl<'a> From<&'a File> for Target<'a> {
    #[inline]
    fn from(file: &'a File) -> Self { Self::Fd(file.as_fd()) }
}
impl<'a, H: BufferedHandle> From<&'a mut H> for Target<'a> {
    #[inline]
    fn from(handle: &'a mut H) -> Self { Self::Handle(handle) }
}
impl std::fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::os::fd::AsRawFd;
        let kind = if self.is_handle() { "Handle" } else { "Fd" };
        f.debug_tuple(kind).field(&self.descriptor().as_raw_fd()).finish()
    }
}
