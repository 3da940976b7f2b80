use crate::os::unix::RawRead;
use std::{collections::VecDeque, io, mem::MaybeUninit};

#[derive(Clone, Debug)]
pub enum Step {
    /// Hands out up to this many bytes of the stream, less if the buffer is smaller.
    Bytes(usize),
    /// Fails with `EINTR` without transferring anything.
    Interrupt,
    /// Fails with the given error code.
    Fail(i32),
}

/// A stand-in for a descriptor which replays a script of read results over a byte stream.
///
/// Once the script runs out, the rest of the stream is served in full-buffer chunks and then
/// end of stream is reported.
#[derive(Debug)]
pub struct Scripted {
    data: Vec<u8>,
    cursor: usize,
    script: VecDeque<Step>,
    /// Buffer length and offset of every call, interrupted ones included.
    pub calls: Vec<(usize, Option<u64>)>,
}
impl Scripted {
    pub fn new(data: Vec<u8>, script: impl IntoIterator<Item = Step>) -> Self {
        Self { data, cursor: 0, script: script.into_iter().collect(), calls: Vec::new() }
    }
    pub fn calls_made(&self) -> usize { self.calls.len() }

    fn serve(&mut self, buf: &mut [MaybeUninit<u8>], offset: Option<u64>, max: usize) -> usize {
        let start = match offset {
            Some(o) => o as usize,
            None => self.cursor,
        };
        let avail = self.data.get(start..).unwrap_or_default();
        let n = avail.len().min(buf.len()).min(max);
        for (dst, &src) in buf.iter_mut().zip(&avail[..n]) {
            dst.write(src);
        }
        if offset.is_none() {
            self.cursor += n;
        }
        n
    }
}
impl RawRead for Scripted {
    fn raw_read(&mut self, buf: &mut [MaybeUninit<u8>], offset: Option<u64>) -> io::Result<usize> {
        self.calls.push((buf.len(), offset));
        match self.script.pop_front() {
            Some(Step::Bytes(max)) => Ok(self.serve(buf, offset, max)),
            Some(Step::Interrupt) => Err(io::Error::from_raw_os_error(libc::EINTR)),
            Some(Step::Fail(code)) => Err(io::Error::from_raw_os_error(code)),
            None => Ok(self.serve(buf, offset, usize::MAX)),
        }
    }
}
