use crate::{readn, tests::util::*, Outcome, ReadOptions};
use std::os::fd::AsFd;

#[test]
fn empty_nonblocking_pipe_would_block() -> TestResult {
    test_wrapper(|| {
        let (r, _w) = pipe()?;
        set_nonblocking(r.as_fd())?;
        ensure_eq!(readn(r.as_fd(), Some(64), None).opname("bounded readn")?, Outcome::WouldBlock);
        ensure_eq!(readn(r.as_fd(), None, None).opname("unbounded readn")?, Outcome::WouldBlock);
        Ok(())
    })
}

#[test]
fn data_then_would_block_yields_data() -> TestResult {
    test_wrapper(|| {
        let (r, w) = pipe()?;
        set_nonblocking(r.as_fd())?;
        write_all(&w, b"partial")?;
        // the writer stays open, so the read after the data hits EAGAIN
        let out = readn(r.as_fd(), None, None).opname("readn")?;
        ensure_eq!(out, Outcome::Data(b"partial".to_vec()));
        ensure_eq!(readn(r.as_fd(), None, None).opname("readn")?.is_would_block(), true);

        write_all(&w, b"more")?;
        drop(w);
        ensure_eq!(readn(r.as_fd(), Some(2), None).opname("readn")?, Outcome::Data(b"mo".to_vec()));
        ensure_eq!(readn(r.as_fd(), Some(2), None).opname("readn")?, Outcome::Data(b"re".to_vec()));
        ensure_eq!(readn(r.as_fd(), Some(2), None).opname("readn")?, Outcome::Eof);
        Ok(())
    })
}

#[test]
fn positional_read_of_pipe_is_an_error() -> TestResult {
    test_wrapper(|| {
        let (r, _w) = pipe()?;
        let Err(e) = ReadOptions::new().count(8).offset(0).read(r.as_fd()) else {
            return fail("pread on a pipe succeeded");
        };
        ensure_eq!(e.raw_os_error(), Some(libc::ESPIPE));
        Ok(())
    })
}
