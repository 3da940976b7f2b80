use std::{io, mem::MaybeUninit};

pub(crate) trait OrErrno<T>: Sized {
    fn true_or_errno(self, f: impl FnOnce() -> T) -> io::Result<T>;
    #[inline(always)]
    fn true_val_or_errno(self, value: T) -> io::Result<T> { self.true_or_errno(|| value) }
}
impl<B: ToBool, T> OrErrno<T> for B {
    #[inline]
    fn true_or_errno(self, f: impl FnOnce() -> T) -> io::Result<T> {
        if self.to_bool() {
            Ok(f())
        } else {
            Err(io::Error::last_os_error())
        }
    }
}

pub(crate) trait ToBool {
    fn to_bool(self) -> bool;
}
impl ToBool for bool {
    #[inline(always)]
    fn to_bool(self) -> bool { self }
}

pub(crate) trait RawOsErrorExt {
    fn eeq(self, other: i32) -> bool;
}
impl RawOsErrorExt for Option<i32> {
    #[inline(always)]
    fn eeq(self, other: i32) -> bool { self == Some(other) }
}

/// Whether the error is the "try again later" signal of a non-blocking descriptor.
// EAGAIN and EWOULDBLOCK are distinct values on a handful of platforms.
#[inline]
pub(crate) fn is_would_block(e: &io::Error) -> bool {
    let code = e.raw_os_error();
    code.eeq(libc::EAGAIN) || code.eeq(libc::EWOULDBLOCK)
}

#[inline]
pub(crate) fn enomem() -> io::Error { io::Error::from_raw_os_error(libc::ENOMEM) }

/// Shortens the slice to at most `len` elements.
#[inline(always)]
pub(crate) fn prefix_mut(s: &mut [MaybeUninit<u8>], len: usize) -> &mut [MaybeUninit<u8>] {
    let len = len.min(s.len());
    s.split_at_mut(len).0
}
