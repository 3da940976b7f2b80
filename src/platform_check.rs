#[cfg(not(unix))]
compile_error!("readn operates on POSIX file descriptors and only supports Unix-like systems");

#[cfg(all(unix, target_pointer_width = "16"))]
compile_error!("16-bit platforms are not supported");
