//! Console fallback used when no graphics output is available.
//!
//! Entries are numbered from 1 and chosen with a single digit key; there is
//! no highlight and no Up/Down navigation.

use core::fmt::Write;

use alloc::string::String;
use log::info;

use crate::error::Result;
use crate::theme::Theme;
use crate::traits::input::Key;

/// Highest entry number reachable with one digit key.
pub const MAX_DIGIT_ENTRIES: usize = 9;

/// Print the numbered list followed by the prompt.
pub fn render_list<W: Write + ?Sized>(
    console: &mut W,
    theme: &Theme,
    names: &[String],
) -> Result<()> {
    writeln!(console, "{}", theme.title)?;
    writeln!(console)?;

    for (index, name) in names.iter().enumerate() {
        writeln!(console, "  {}. {}", index + 1, name)?;
    }

    writeln!(console)?;
    if names.len() > MAX_DIGIT_ENTRIES {
        info!(
            "{} boot entries found, only the first {} are selectable in text mode",
            names.len(),
            MAX_DIGIT_ENTRIES
        );
        writeln!(
            console,
            "  Only entries 1-{} can be selected from the keyboard.",
            MAX_DIGIT_ENTRIES
        )?;
    }
    write!(console, "{}", theme.prompt)?;
    Ok(())
}

/// Map a keypress to a zero-based entry index, if it picks one.
pub fn digit_choice(key: Key, count: usize) -> Option<usize> {
    let Key::Char(c) = key else {
        return None;
    };

    let digit = c.to_digit(10)? as usize;
    if digit == 0 || digit > count.min(MAX_DIGIT_ENTRIES) {
        return None;
    }
    Some(digit - 1)
}
