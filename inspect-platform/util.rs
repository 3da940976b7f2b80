#![cfg_attr(not(unix), allow(dead_code, unused_macros))]

use std::fmt::{self, Display};

macro_rules! bitwidths {
    ($($nam:ident),+ $(,)?) => {[$((stringify!($nam), $nam::BITS, $nam::MIN == 0)),+]};
}
fn maxlen3<T>(a: &[(&str, T, bool)]) -> usize {
    a.iter().map(|&(nm, _, _)| nm.len()).max().unwrap_or(0)
}

pub fn print_bitwidths(bw: &[(&str, u32, bool)]) {
    let width = maxlen3(bw);
    bw.iter().for_each(|&(nm, bw, un)| {
        println!("{nm:width$} : {bw:>2} bits {:>2}signed", val_if(un, "un"))
    });
}
#[allow(clippy::obfuscated_if_else)]
pub fn val_if<T: Default>(cond: bool, v: T) -> T { cond.then_some(v).unwrap_or_default() }

pub trait ResultExt: Sized {
    type Ok;
    type Err: Display;
    fn get_err(&self) -> Option<&Self::Err>;
    fn unwrap_or_else(self, f: impl FnOnce(Self::Err) -> Self::Ok) -> Self::Ok;

    fn report_error(self, msg: &str) -> Self {
        report_error_str(self.get_err(), msg);
        self
    }
    fn unwrap_or_exit(self, msg: &str) -> Self::Ok {
        report_error_str(self.get_err(), msg);
        self.unwrap_or_else(forget_error_and_die)
    }
}
#[inline(never)]
fn report_error_str<E: Display>(e: Option<&E>, msg: &str) {
    if let Some(e) = e {
        println!("{msg}: {e}");
    }
}
fn forget_error_and_die<T, E>(e: E) -> T {
    std::mem::forget(e);
    std::process::exit(1);
}
impl<T, E: Display> ResultExt for Result<T, E> {
    type Ok = T;
    type Err = E;
    fn get_err(&self) -> Option<&E> { self.as_ref().err() }
    fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T { self.unwrap_or_else(f) }
}

pub struct Cursors {
    pub stdio: u64,
    pub os: u64,
}
impl Display for Cursors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { stdio, os } = self;
        write!(f, "stdio cursor {stdio:>6}, descriptor cursor {os:>6}")?;
        if stdio != os {
            f.write_str(" (diverged)")?;
        }
        Ok(())
    }
}
