//! Realigning a buffered handle with its descriptor after a raw read.

use crate::{
    error::{Operation, ReadnError},
    os::unix::current_position,
    target::BufferedHandle,
};

/// Moves the handle's cursor to the descriptor's current OS-level position.
///
/// A raw read advances the descriptor but not the handle, so without this the handle would go on
/// to serve stale read-ahead data or write at the wrong place.
pub(crate) fn resync(handle: &mut (dyn BufferedHandle + '_)) -> Result<(), ReadnError> {
    let sync_err = |e| ReadnError::new(Operation::Sync, e);
    let pos = current_position(handle.descriptor()).map_err(sync_err)?;
    handle.set_buffered_position(pos).map_err(sync_err)?;
    log::debug!("buffered handle resynchronized to offset {pos}");
    Ok(())
}
