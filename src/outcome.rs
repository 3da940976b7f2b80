//! The three non-error results of a read call, and how a finished read is turned into one.

use crate::{
    error::{Operation, ReadnError},
    is_would_block,
};
use std::io;

/// Successful result of a read call.
///
/// Errors are reported separately as [`ReadnError`]. A "would block" condition on a
/// non-blocking descriptor is not an error and shows up here as [`WouldBlock`](Self::WouldBlock).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// At least one byte was read.
    Data(Vec<u8>),
    /// The stream is exhausted and nothing was read.
    Eof,
    /// The descriptor is non-blocking and has no data right now.
    WouldBlock,
}
impl Outcome {
    /// Whether this is [`Eof`](Self::Eof).
    #[inline]
    pub fn is_eof(&self) -> bool { matches!(self, Self::Eof) }
    /// Whether this is [`WouldBlock`](Self::WouldBlock).
    #[inline]
    pub fn is_would_block(&self) -> bool { matches!(self, Self::WouldBlock) }
    /// The bytes read, if any.
    #[inline]
    pub fn data(&self) -> Option<&[u8]> {
        match self {
            Self::Data(d) => Some(d),
            _ => None,
        }
    }
    /// Takes the bytes read, if any.
    #[inline]
    pub fn into_data(self) -> Option<Vec<u8>> {
        match self {
            Self::Data(d) => Some(d),
            _ => None,
        }
    }
}

/// What a read loop ended with: the bytes accumulated so far and the error that stopped it,
/// if there was one.
#[derive(Debug, Default)]
pub(crate) struct ReadRecord {
    pub buf: Vec<u8>,
    pub err: Option<io::Error>,
}
impl ReadRecord {
    /// Decides the result of the call.
    ///
    /// Bytes take precedence over a recorded error: the error is dropped, and the next call on
    /// the same source will observe it with nothing read.
    pub fn classify(self) -> Result<Outcome, ReadnError> {
        let Self { buf, err } = self;
        if !buf.is_empty() {
            return materialize(buf).map(Outcome::Data);
        }
        match err {
            Some(e) if is_would_block(&e) => Ok(Outcome::WouldBlock),
            Some(e) => Err(ReadnError::new(Operation::Readn, e)),
            None => Ok(Outcome::Eof),
        }
    }
}

/// Copies the bytes into an exactly-sized vector unless the buffer already is one.
///
/// The copy is fallible; an allocation failure here becomes `ENOMEM` with the allocator's
/// explanation attached.
pub(crate) fn materialize(buf: Vec<u8>) -> Result<Vec<u8>, ReadnError> {
    if buf.capacity() == buf.len() {
        return Ok(buf);
    }
    let mut out = Vec::new();
    out.try_reserve_exact(buf.len()).map_err(|e| {
        ReadnError::with_message(Operation::Materialize, crate::enomem(), e.to_string())
    })?;
    out.extend_from_slice(&buf);
    Ok(out)
}
