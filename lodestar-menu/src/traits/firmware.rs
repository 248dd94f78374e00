use alloc::string::String;

use crate::error::Result;

/// Firmware services the selector boots through.
///
/// Entries are owned by the implementation and addressed by a zero-based
/// index; the selector never holds anything but that index.
pub trait BootFirmware {
    /// Number of bootable entries discovered before the menu starts.
    fn entry_count(&self) -> usize;

    /// Display name of entry `index`.
    ///
    /// Only defined for `index < self.entry_count()`.
    fn entry_name(&self, index: usize) -> String;

    /// Hand control to entry `index`.
    ///
    /// On success this normally never returns. `Ok(())` means the started
    /// image exited back to the caller.
    fn chainload_entry(&mut self, index: usize) -> Result<()>;
}

impl<T: BootFirmware + ?Sized> BootFirmware for &mut T {
    fn entry_count(&self) -> usize {
        (**self).entry_count()
    }

    fn entry_name(&self, index: usize) -> String {
        (**self).entry_name(index)
    }

    fn chainload_entry(&mut self, index: usize) -> Result<()> {
        (**self).chainload_entry(index)
    }
}
