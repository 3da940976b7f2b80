#![allow(clippy::exit, clippy::incompatible_msrv)]

#[macro_use]
mod util;
#[cfg(unix)]
mod libc_wrappers;
#[cfg(unix)]
mod unix;

use {std::ffi::c_int, util::*};

fn print_common_intro() {
    print_bitwidths(&bitwidths!(usize, isize, c_int, u64));
}

fn main() {
    print_common_intro();
    #[cfg(unix)]
    unix::main();
    #[cfg(not(unix))]
    println!("Not a Unix system, no further information will be gathered.");
}
