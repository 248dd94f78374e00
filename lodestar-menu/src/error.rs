use core::fmt;

/// Unified error type for lodestar-menu.
///
/// The selector itself never fails; every variant is reported by one of the
/// capability providers it drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// No graphics output could be initialised
    DisplayUnavailable,
    /// The key source will never produce another key
    InputClosed,
    /// Writing to the text console failed
    Console,
    /// An entry index outside `[0, entry_count)` reached the firmware
    EntryOutOfRange(usize),
    /// Firmware refused to load or start the selected image
    Chainload {
        /// Which firmware call failed (`"device path"`, `"load_image"`, ...)
        stage: &'static str,
        /// Raw firmware status code
        status: usize,
    },
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::DisplayUnavailable => write!(f, "graphics output unavailable"),
            MenuError::InputClosed => write!(f, "input source closed"),
            MenuError::Console => write!(f, "console write failed"),
            MenuError::EntryOutOfRange(index) => write!(f, "boot entry {} does not exist", index),
            MenuError::Chainload { stage, status } => {
                write!(f, "chainload failed in {}: status {:#x}", stage, status)
            }
        }
    }
}

impl From<fmt::Error> for MenuError {
    fn from(_: fmt::Error) -> Self {
        MenuError::Console
    }
}

/// Convenience Result type alias.
pub type Result<T> = ::core::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::MenuError;

    #[test]
    fn test_chainload_error_message_names_stage() {
        let err = MenuError::Chainload {
            stage: "load_image",
            status: 0x8000_0000_0000_000e,
        };
        assert_eq!(
            err.to_string(),
            "chainload failed in load_image: status 0x800000000000000e"
        );
    }

    #[test]
    fn test_fmt_error_maps_to_console() {
        assert_eq!(MenuError::from(core::fmt::Error), MenuError::Console);
    }
}
