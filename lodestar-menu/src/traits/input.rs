use crate::error::Result;

/// A single keypress as seen by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    Home,
    End,
    Left,
    Right,
    /// Any other printable character
    Char(char),
}

/// Blocking keyboard source.
///
/// Every physical keypress yields exactly one key; there is no timeout.
pub trait KeySource {
    /// Wait for the next key.
    fn read_key(&mut self) -> Result<Key>;
}

impl<T: KeySource + ?Sized> KeySource for &mut T {
    fn read_key(&mut self) -> Result<Key> {
        (**self).read_key()
    }
}
