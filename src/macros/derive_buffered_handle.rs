//! Implements `BufferedHandle` for standard library wrappers over `File` which implement `Seek`.

macro_rules! derive_buffered_handle {
    ($ty:ty, |$slf:ident| $flush:expr) => {
        impl $crate::target::BufferedHandle for $ty {
            #[inline]
            fn descriptor(&self) -> ::std::os::fd::BorrowedFd<'_> {
                ::std::os::fd::AsFd::as_fd(self.get_ref())
            }
            #[inline]
            fn flush_pending(&mut self) -> ::std::io::Result<()> {
                let $slf = self;
                $flush
            }
            #[inline]
            fn buffered_position(&mut self) -> ::std::io::Result<u64> {
                ::std::io::Seek::stream_position(self)
            }
            // Seeking to an absolute position discards the read-ahead buffer (or writes out
            // the pending output) before repositioning the file.
            #[inline]
            fn set_buffered_position(&mut self, pos: u64) -> ::std::io::Result<()> {
                ::std::io::Seek::seek(self, ::std::io::SeekFrom::Start(pos)).map(drop)
            }
        }
    };
}
