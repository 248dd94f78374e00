//! Recording fakes for the firmware capabilities and end-to-end menu sessions.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{MenuError, Result};
use crate::theme::Color;
use crate::traits::display::Screen;
use crate::traits::firmware::BootFirmware;
use crate::traits::input::{Key, KeySource};

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| String::from(*n)).collect()
}

/// Firmware with a fixed entry list that records every chainload request.
pub struct FakeFirmware {
    pub entries: Vec<String>,
    pub chainloads: Vec<usize>,
    pub fail_with: Option<MenuError>,
}

impl FakeFirmware {
    pub fn new(list: &[&str]) -> Self {
        Self {
            entries: names(list),
            chainloads: Vec::new(),
            fail_with: None,
        }
    }
}

impl BootFirmware for FakeFirmware {
    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn entry_name(&self, index: usize) -> String {
        self.entries[index].clone()
    }

    fn chainload_entry(&mut self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(MenuError::EntryOutOfRange(index));
        }
        self.chainloads.push(index);
        match self.fail_with.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Feeds a fixed key sequence, then reports the source as closed.
pub struct ScriptedKeys {
    script: VecDeque<Key>,
    pub reads: usize,
}

impl ScriptedKeys {
    pub fn new(keys: &[Key]) -> Self {
        Self {
            script: keys.iter().copied().collect(),
            reads: 0,
        }
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Result<Key> {
        self.reads += 1;
        self.script.pop_front().ok_or(MenuError::InputClosed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear(Color),
    Fill {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        color: Color,
    },
    Text {
        text: String,
        x: usize,
        y: usize,
        color: Color,
        scale: usize,
    },
}

/// A screen that remembers every drawing call.
pub struct RecordingScreen {
    width: usize,
    height: usize,
    cell_width: usize,
    cell_height: usize,
    available: bool,
    pub ops: Vec<DrawOp>,
}

impl RecordingScreen {
    pub fn new(width: usize, height: usize, cell_width: usize, cell_height: usize) -> Self {
        Self {
            width,
            height,
            cell_width,
            cell_height,
            available: true,
            ops: Vec::new(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(0, 0, 0, 0)
        }
    }
}

impl Screen for RecordingScreen {
    fn init(&mut self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(MenuError::DisplayUnavailable)
        }
    }

    fn screen_width(&self) -> usize {
        self.width
    }

    fn screen_height(&self) -> usize {
        self.height
    }

    fn font_cell_width(&self) -> usize {
        self.cell_width
    }

    fn font_cell_height(&self) -> usize {
        self.cell_height
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Color) {
        self.ops.push(DrawOp::Fill {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: usize, y: usize, color: Color, scale: usize) {
        self.ops.push(DrawOp::Text {
            text: String::from(text),
            x,
            y,
            color,
            scale,
        });
    }
}

mod test {
    use alloc::string::String;

    use super::{DrawOp, FakeFirmware, RecordingScreen, ScriptedKeys};
    use crate::error::MenuError;
    use crate::selector::{Outcome, Selector};
    use crate::theme::{Color, Theme};
    use crate::traits::display::Headless;
    use crate::traits::input::Key;

    fn row_draw_count(ops: &[DrawOp]) -> usize {
        ops.iter()
            .filter(|op| matches!(op, DrawOp::Text { scale: 1, y, .. } if *y < 700))
            .count()
    }

    #[test]
    fn test_navigate_then_boot_beta() {
        let theme = Theme::DEFAULT;
        let mut firmware = FakeFirmware::new(&["Alpha", "Beta", "Gamma"]);
        let mut keys = ScriptedKeys::new(&[Key::Down, Key::Down, Key::Up, Key::Enter]);
        let mut screen = RecordingScreen::new(1024, 768, 8, 16);
        let mut console = String::new();

        let outcome = Selector::new(&mut firmware, &mut keys, &mut screen, &mut console, &theme)
            .run()
            .unwrap();

        assert_eq!(outcome, Outcome::Returned { index: 1 });
        assert_eq!(firmware.chainloads, [1]);
        assert_eq!(keys.reads, 4);
        assert!(console.is_empty());
        // the last thing drawn before handing off is the black boot screen
        assert_eq!(screen.ops.last(), Some(&DrawOp::Clear(Color::BLACK)));
    }

    #[test]
    fn test_no_entries_reads_no_keys() {
        let theme = Theme::DEFAULT;
        let mut firmware = FakeFirmware::new(&[]);
        let mut keys = ScriptedKeys::new(&[Key::Enter]);
        let mut screen = RecordingScreen::new(1024, 768, 8, 16);
        let mut console = String::new();

        let outcome = Selector::new(&mut firmware, &mut keys, &mut screen, &mut console, &theme)
            .run()
            .unwrap();

        assert_eq!(outcome, Outcome::NoEntries);
        assert_eq!(console, "No bootable entries found.\n");
        assert!(firmware.chainloads.is_empty());
        assert_eq!(keys.reads, 0);
        assert!(screen.ops.is_empty());
    }

    #[test]
    fn test_text_fallback_boots_by_digit() {
        let theme = Theme::DEFAULT;
        let mut firmware = FakeFirmware::new(&["Arch", "Windows"]);
        let mut keys = ScriptedKeys::new(&[Key::Char('2')]);
        let mut console = String::new();

        let outcome = Selector::new(&mut firmware, &mut keys, Headless, &mut console, &theme)
            .run()
            .unwrap();

        assert_eq!(outcome, Outcome::Returned { index: 1 });
        assert_eq!(firmware.chainloads, [1]);
        assert!(console.contains("  1. Arch\n"));
        assert!(console.contains("  2. Windows\n"));
        assert!(console.ends_with("Select> \n"));
    }

    #[test]
    fn test_text_fallback_ignores_out_of_range_keys() {
        let theme = Theme::DEFAULT;
        let mut firmware = FakeFirmware::new(&["Arch", "Windows"]);
        let mut keys = ScriptedKeys::new(&[
            Key::Char('3'),
            Key::Char('0'),
            Key::Char('x'),
            Key::Down,
            Key::Enter,
        ]);
        let mut screen = RecordingScreen::unavailable();
        let mut console = String::new();

        let result = Selector::new(&mut firmware, &mut keys, &mut screen, &mut console, &theme)
            .run();

        // still waiting when the script runs dry
        assert_eq!(result, Err(MenuError::InputClosed));
        assert!(firmware.chainloads.is_empty());
        assert_eq!(keys.reads, 6);
        assert!(screen.ops.is_empty());
    }

    #[test]
    fn test_boundary_keys_do_not_redraw() {
        let theme = Theme::DEFAULT;
        let mut firmware = FakeFirmware::new(&["Alpha", "Beta"]);
        let mut keys = ScriptedKeys::new(&[Key::Up, Key::Escape, Key::Home]);
        let mut screen = RecordingScreen::new(1024, 768, 8, 16);
        let mut console = String::new();

        let result = Selector::new(&mut firmware, &mut keys, &mut screen, &mut console, &theme)
            .run();

        assert_eq!(result, Err(MenuError::InputClosed));
        // chrome plus a single pass over both rows
        assert_eq!(row_draw_count(&screen.ops), 2);
        assert!(firmware.chainloads.is_empty());
    }

    #[test]
    fn test_every_move_redraws_all_rows() {
        let theme = Theme::DEFAULT;
        let mut firmware = FakeFirmware::new(&["Alpha", "Beta", "Gamma"]);
        let mut keys = ScriptedKeys::new(&[Key::Down, Key::Down, Key::Down]);
        let mut screen = RecordingScreen::new(1024, 768, 8, 16);
        let mut console = String::new();

        let _ = Selector::new(&mut firmware, &mut keys, &mut screen, &mut console, &theme).run();

        // initial pass plus two moves; the third Down hits the end
        assert_eq!(row_draw_count(&screen.ops), 9);
    }

    #[test]
    fn test_boundary_redraw_matches_previous_frame() {
        let theme = Theme::DEFAULT;
        let mut before = RecordingScreen::new(1024, 768, 8, 16);
        let mut after = RecordingScreen::new(1024, 768, 8, 16);

        let mut firmware = FakeFirmware::new(&["Alpha", "Beta"]);
        let mut keys = ScriptedKeys::new(&[Key::Down]);
        let _ = Selector::new(&mut firmware, &mut keys, &mut before, String::new(), &theme).run();

        let mut keys = ScriptedKeys::new(&[Key::Down, Key::Down]);
        let _ = Selector::new(&mut firmware, &mut keys, &mut after, String::new(), &theme).run();

        assert_eq!(before.ops, after.ops);
    }

    #[test]
    fn test_chainload_failure_is_reported_once() {
        let theme = Theme::DEFAULT;
        let mut firmware = FakeFirmware::new(&["Alpha"]);
        firmware.fail_with = Some(MenuError::Chainload {
            stage: "load_image",
            status: 14,
        });
        let mut keys = ScriptedKeys::new(&[Key::Enter, Key::Enter]);
        let mut screen = RecordingScreen::new(1024, 768, 8, 16);

        let result = Selector::new(&mut firmware, &mut keys, &mut screen, String::new(), &theme)
            .run();

        assert_eq!(
            result,
            Err(MenuError::Chainload {
                stage: "load_image",
                status: 14,
            })
        );
        assert_eq!(firmware.chainloads, [0]);
        assert_eq!(keys.reads, 1);
    }

    #[test]
    fn test_long_list_scrolls_to_last_entry() {
        let theme = Theme::DEFAULT;
        let list: [&str; 30] = [
            "e00", "e01", "e02", "e03", "e04", "e05", "e06", "e07", "e08", "e09", "e10", "e11",
            "e12", "e13", "e14", "e15", "e16", "e17", "e18", "e19", "e20", "e21", "e22", "e23",
            "e24", "e25", "e26", "e27", "e28", "e29",
        ];
        let mut firmware = FakeFirmware::new(&list);
        let mut script = [Key::Down; 40];
        script[39] = Key::Enter;
        let mut keys = ScriptedKeys::new(&script);
        let mut screen = RecordingScreen::new(1024, 768, 8, 16);

        let outcome = Selector::new(&mut firmware, &mut keys, &mut screen, String::new(), &theme)
            .run()
            .unwrap();

        assert_eq!(outcome, Outcome::Returned { index: 29 });
        assert_eq!(firmware.chainloads, [29]);
        // nothing is ever drawn below the 23-row window
        assert!(screen.ops.iter().all(|op| match op {
            DrawOp::Fill { y, .. } => *y < 700,
            _ => true,
        }));
    }

    #[test]
    fn test_short_screen_falls_back_to_text() {
        let theme = Theme::DEFAULT;
        let mut firmware = FakeFirmware::new(&["Arch", "Windows"]);
        let mut keys = ScriptedKeys::new(&[Key::Down, Key::Char('2')]);
        let mut screen = RecordingScreen::new(640, 150, 8, 16);
        let mut console = String::new();

        let outcome = Selector::new(&mut firmware, &mut keys, &mut screen, &mut console, &theme)
            .run()
            .unwrap();

        assert_eq!(outcome, Outcome::Returned { index: 1 });
        assert_eq!(firmware.chainloads, [1]);
        assert!(console.contains("  2. Windows\n"));
        // no row is ever painted over the footer line
        assert!(screen.ops.is_empty());
    }
}
