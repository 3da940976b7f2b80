macro_rules! ok_or_errno {
    ($success:expr => $($scb:tt)+) => {
        if $success {
            Ok($($scb)+)
        } else {
            Err(::std::io::Error::last_os_error())
        }
    };
}
