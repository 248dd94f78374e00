use core::fmt::{self, Write};

/// Firmware text output as a `core::fmt::Write` sink.
pub struct UefiConsole;

impl Write for UefiConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        uefi::system::with_stdout(|out| out.write_str(s))
    }
}
