//! Configuration of a read call and the [`readn()`] entry point.

use crate::{
    accumulate::read_to_end,
    bounded::read_bounded,
    error::{Operation, ReadnError},
    os::unix::regular_file_size,
    outcome::Outcome,
    resync::resync,
    target::Target,
    RawOsErrorExt,
};
use std::num::NonZeroUsize;

/// The size of the buffer an unbounded read starts with, and the amount it grows by each time it
/// fills up.
pub const DEFAULT_ALLOC_INCREMENT: NonZeroUsize = match NonZeroUsize::new(16 * 1024) {
    Some(n) => n,
    None => unreachable!(),
};

/// Reads from `target` with the default settings.
///
/// - With a nonzero `count`, at most `count` bytes are read with a single read call.
/// - With `count` of zero, the whole remaining stream is read.
/// - With no `count`, a regular file is read with its size as the count; anything else is read
///   to the end.
///
/// With an `offset`, the read is positional and neither the descriptor's nor the handle's
/// cursor moves. Without one, the read starts at the descriptor's cursor, and a buffered
/// handle's cursor is brought up to date afterwards.
///
/// See [`ReadOptions`] to configure the growth of the buffer in unbounded mode.
pub fn readn<'a>(
    target: impl Into<Target<'a>>,
    count: Option<usize>,
    offset: Option<u64>,
) -> Result<Outcome, ReadnError> {
    let mut options = ReadOptions::new();
    options.count = count;
    options.offset = offset;
    options.read(target)
}

/// Builder for read calls.
///
/// ## Example
/// ```no_run
/// use readn::{Outcome, ReadOptions};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let file = std::fs::File::open("/etc/hostname")?;
/// match ReadOptions::new().count(64).offset(0).read(&file)? {
///     Outcome::Data(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
///     Outcome::Eof => println!("empty file"),
///     Outcome::WouldBlock => unreachable!("regular files never block"),
/// }
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ReadOptions {
    count: Option<usize>,
    offset: Option<u64>,
    alloc_increment: NonZeroUsize,
}
impl ReadOptions {
    /// Creates a new builder with default options.
    pub const fn new() -> Self {
        Self { count: None, offset: None, alloc_increment: DEFAULT_ALLOC_INCREMENT }
    }
    /// Sets the maximum number of bytes to read. Zero means "read to the end".
    #[must_use = "builder setters take the entire structure and return the result"]
    pub const fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
    /// Makes the read positional, starting at the given absolute offset.
    #[must_use = "builder setters take the entire structure and return the result"]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
    /// Sets the initial size and growth step of the buffer used when reading to the end.
    ///
    /// Defaults to [`DEFAULT_ALLOC_INCREMENT`].
    #[must_use = "builder setters take the entire structure and return the result"]
    pub const fn alloc_increment(mut self, increment: NonZeroUsize) -> Self {
        self.alloc_increment = increment;
        self
    }

    /// Performs the read.
    pub fn read<'a>(&self, target: impl Into<Target<'a>>) -> Result<Outcome, ReadnError> {
        let mut target = target.into();

        if let Target::Handle(handle) = &mut target {
            if let Err(e) = handle.flush_pending() {
                // EBADF means the handle simply isn't open for writing
                if !e.raw_os_error().eeq(libc::EBADF) {
                    return Err(ReadnError::new(Operation::Readn, e));
                }
                log::debug!("ignoring flush failure of a read-only handle: {e}");
            }
        }

        let record = {
            let mut fd = target.descriptor();
            let count = match self.count {
                Some(count) => count,
                None => regular_file_size(fd)
                    .and_then(|size| usize::try_from(size).ok())
                    .unwrap_or(0),
            };
            if count > 0 {
                read_bounded(&mut fd, count, self.offset)?
            } else {
                read_to_end(&mut fd, self.offset, self.alloc_increment)?
            }
        };

        if let Target::Handle(handle) = &mut target {
            if self.offset.is_none() && !record.buf.is_empty() {
                resync(&mut **handle)?;
            }
        }
        record.classify()
    }
}
impl Default for ReadOptions {
    fn default() -> Self { Self::new() }
}
