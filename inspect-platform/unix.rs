use {
    super::{libc_wrappers::*, *},
    libc::{off_t, size_t, ssize_t},
    readn::{BufferedHandle, Outcome, StdioFile},
    std::{
        borrow::Cow,
        fs::File,
        io::{Read, Write},
        os::fd::AsFd,
        path::Path,
    },
};

pub(super) fn main() {
    print_bitwidths(&bitwidths!(off_t, ssize_t, size_t));
    let same = libc::EAGAIN == libc::EWOULDBLOCK;
    println!(
        "EAGAIN = {}, EWOULDBLOCK = {}{}",
        libc::EAGAIN,
        libc::EWOULDBLOCK,
        val_if(!same, " (distinct)")
    );
    println!("BUFSIZ = {}", libc::BUFSIZ);
    println!();

    inspect_stdio_cursor(&select_tmpdir());
}

fn inspect_stdio_cursor(tmpdir: &Path) {
    let path = tmpdir.join("readn-inspect-platform.bin");
    let content: Vec<u8> = (0..=255u8).cycle().take(256 * 1024).collect();
    File::create(&path)
        .and_then(|mut f| f.write_all(&content))
        .unwrap_or_exit("Failed to create scratch file");
    let file = File::open(&path).unwrap_or_exit("Failed to open scratch file");
    let _ = std::fs::remove_file(&path).report_error("Failed to remove scratch file");

    if let Ok(blksize) = blksize(file.as_fd()).report_error("Failed to fstat scratch file") {
        println!("Scratch file st_blksize = {blksize}");
    }
    let mut stdio =
        StdioFile::from_fd(file.into(), c"r").unwrap_or_exit("Failed to fdopen scratch file");
    let cursors = |stdio: &mut StdioFile| Cursors {
        stdio: stdio.buffered_position().unwrap_or_exit("ftello failed"),
        os: lseek_cur(stdio.as_fd()).unwrap_or_exit("lseek failed"),
    };

    let mut head = [0; 5];
    stdio.read_exact(&mut head).unwrap_or_exit("fread failed");
    println!("After buffered read of 5 bytes:  {}", cursors(&mut stdio));

    stdio.flush_pending().unwrap_or_exit("fflush failed");
    println!("After fflush:                    {}", cursors(&mut stdio));

    let _ = stdio.read_exact(&mut head).report_error("fread failed");
    match readn::readn(&mut stdio, Some(100), None).report_error("readn failed") {
        Ok(Outcome::Data(d)) => {
            println!("After readn of {:>3} bytes:        {}", d.len(), cursors(&mut stdio))
        }
        Ok(other) => println!("readn returned {other:?}"),
        Err(_) => {}
    }
}

fn select_tmpdir() -> Cow<'static, Path> {
    match std::env::var_os("TMPDIR") {
        Some(val) => Cow::Owned(val.into()),
        None => Cow::Borrowed(Path::new("/tmp")),
    }
}
