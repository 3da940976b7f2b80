//! The error type of a read call.

use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
    io,
};

/// The step of a read call that failed, used as the label of a [`ReadnError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Flushing a buffered handle, allocating the read buffer, or the read itself.
    Readn,
    /// Realigning a buffered handle's cursor with its descriptor after a successful read.
    Sync,
    /// Turning the read buffer into the returned byte vector.
    Materialize,
}
impl Operation {
    /// The short label used when displaying the error.
    pub const fn label(self) -> &'static str {
        use Operation::*;
        match self {
            Readn => "readn",
            Sync => "readn.sync",
            Materialize => "read",
        }
    }
}
impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

/// Error returned by a read call: the OS error code together with the step that produced it.
///
/// "Would block" and end of stream are never reported through this type; see
/// [`Outcome`](crate::Outcome).
pub struct ReadnError {
    operation: Operation,
    source: io::Error,
    message: Option<Box<str>>,
}
impl ReadnError {
    pub(crate) fn new(operation: Operation, source: io::Error) -> Self {
        Self { operation, source, message: None }
    }
    pub(crate) fn with_message(
        operation: Operation,
        source: io::Error,
        message: impl Into<Box<str>>,
    ) -> Self {
        Self { operation, source, message: Some(message.into()) }
    }

    /// Which step of the call failed.
    #[inline]
    pub fn operation(&self) -> Operation { self.operation }
    /// The OS error code, if the underlying error carries one.
    #[inline]
    pub fn raw_os_error(&self) -> Option<i32> { self.source.raw_os_error() }
    /// The kind of the underlying I/O error.
    #[inline]
    pub fn kind(&self) -> io::ErrorKind { self.source.kind() }
    /// Additional free-text detail, present on materialization failures.
    #[inline]
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
    /// Returns the underlying I/O error, dropping the label.
    #[inline]
    pub fn into_io_error(self) -> io::Error { self.source }
}
impl Debug for ReadnError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadnError")
            .field("operation", &self.operation)
            .field("source", &self.source)
            .field("message", &self.message)
            .finish()
    }
}
impl Display for ReadnError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation, self.source)?;
        if let Some(msg) = &self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}
impl Error for ReadnError {
    fn source(&self) -> Option<&(dyn Error + 'static)> { Some(&self.source) }
}
impl From<ReadnError> for io::Error {
    /// Wraps the error, keeping its kind. The original can be recovered with
    /// [`io::Error::downcast`] or [`into_inner`](io::Error::into_inner).
    fn from(e: ReadnError) -> Self { io::Error::new(e.kind(), e) }
}
