//! Reading up to a fixed number of bytes with a single read call.

use crate::{
    error::{Operation, ReadnError},
    os::unix::{read_retrying, RawRead},
    outcome::ReadRecord,
    prefix_mut,
};

/// Reads at most `count` bytes with one call to `read(2)`, or `pread(2)` if an offset is given.
///
/// A short read is returned as-is; no attempt is made to fill the rest of the buffer. Interrupted
/// calls are retried. Failure to allocate the buffer is reported before anything is read.
pub(crate) fn read_bounded<R: RawRead + ?Sized>(
    src: &mut R,
    count: usize,
    offset: Option<u64>,
) -> Result<ReadRecord, ReadnError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(count)
        .map_err(|_| ReadnError::new(Operation::Readn, crate::enomem()))?;

    let spare = prefix_mut(buf.spare_capacity_mut(), count);
    let err = match read_retrying(src, spare, offset) {
        Ok(n) => {
            // SAFETY: the read initialized the first n bytes of the spare capacity
            unsafe { buf.set_len(n.min(count)) };
            None
        }
        Err(e) => Some(e),
    };
    Ok(ReadRecord { buf, err })
}
