#![allow(unused_macros)]

macro_rules! make_macro_modules {
    ($($modname:ident),+ $(,)?) => {$(
        #[macro_use] mod $modname;
    )+};
}

make_macro_modules! {
    ok_or_ret_errno, derive_buffered_handle,
}
