//! Reading until end of stream into a buffer that grows by a fixed increment.

use crate::{
    error::{Operation, ReadnError},
    os::unix::{read_step, RawRead, ReadStep},
    outcome::ReadRecord,
    prefix_mut,
};
use std::num::NonZeroUsize;

/// Reads until a read returns zero bytes or fails.
///
/// The buffer starts out `increment` bytes long and is grown by `increment` whenever a read
/// fills it exactly, since a full buffer says nothing about whether the stream has more. With
/// an offset, reads are positional and start at `offset` plus whatever was read so far.
///
/// Failure to grow the buffer ends the loop with `ENOMEM` recorded next to the bytes already
/// read; the classifier decides which of the two the caller gets.
pub(crate) fn read_to_end<R: RawRead + ?Sized>(
    src: &mut R,
    offset: Option<u64>,
    increment: NonZeroUsize,
) -> Result<ReadRecord, ReadnError> {
    read_to_end_with(src, offset, increment, |buf, additional| {
        buf.try_reserve_exact(additional).is_ok()
    })
}

/// Same as [`read_to_end`], with buffer growth going through `grow`, which reserves room for
/// `additional` more bytes past the current length and reports whether it managed to.
pub(crate) fn read_to_end_with<R: RawRead + ?Sized>(
    src: &mut R,
    offset: Option<u64>,
    increment: NonZeroUsize,
    mut grow: impl FnMut(&mut Vec<u8>, usize) -> bool,
) -> Result<ReadRecord, ReadnError> {
    let increment = increment.get();
    let mut buf = Vec::new();
    buf.try_reserve_exact(increment)
        .map_err(|_| ReadnError::new(Operation::Readn, crate::enomem()))?;
    let mut buflen = increment;

    let err = loop {
        let total = buf.len();
        let pos = match offset.map(|o| o.checked_add(total as u64)) {
            Some(None) => break Some(std::io::Error::from_raw_os_error(libc::EOVERFLOW)),
            Some(Some(pos)) => Some(pos),
            None => None,
        };
        let spare = prefix_mut(buf.spare_capacity_mut(), buflen.saturating_sub(total));
        let n = match read_step(src, spare, pos) {
            ReadStep::Retry => continue,
            ReadStep::Done(Ok(0)) => break None,
            ReadStep::Done(Ok(n)) => n,
            ReadStep::Done(Err(e)) => break Some(e),
        };
        let total = total.saturating_add(n).min(buflen);
        // SAFETY: the read initialized the n bytes right after the previous total
        unsafe { buf.set_len(total) };

        if total == buflen {
            if !grow(&mut buf, increment) {
                log::debug!("could not grow the read buffer past {buflen} bytes");
                break Some(crate::enomem());
            }
            buflen = buflen.saturating_add(increment);
            log::trace!("read buffer full, grown to {buflen} bytes");
        }
    };
    Ok(ReadRecord { buf, err })
}
