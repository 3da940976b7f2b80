//! Raw descriptor reads and the handful of `libc` calls around them.
//!
//! Nothing in here knows about buffered handles or read outcomes: a read either produces a
//! byte count or an OS error, and interruption by a signal is the only condition that is
//! handled locally.

mod c_wrappers;
mod fdops;

pub(crate) use {c_wrappers::*, fdops::*};

mod unixprelude {
    #[allow(unused_imports)]
    pub use {
        libc::{c_int, off_t},
        std::os::fd::{AsFd, AsRawFd, BorrowedFd, FromRawFd, OwnedFd},
    };
}
