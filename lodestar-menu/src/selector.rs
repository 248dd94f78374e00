use core::fmt::Write;

use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, info};

use crate::error::Result;
use crate::graphical::GraphicalMenu;
use crate::layout::Geometry;
use crate::state::{Mode, SelectionState, Transition};
use crate::text;
use crate::theme::Theme;
use crate::traits::display::Screen;
use crate::traits::firmware::BootFirmware;
use crate::traits::input::KeySource;

/// Message printed when discovery found nothing to boot.
pub const NO_ENTRIES_MESSAGE: &str = "No bootable entries found.";

/// How a menu session ended without the firmware taking over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to boot; no key was read
    NoEntries,
    /// Entry `index` was started and handed control back
    Returned { index: usize },
}

/// One boot menu session over a set of firmware capabilities.
pub struct Selector<'a, F, K, S, C>
where
    F: BootFirmware,
    K: KeySource,
    S: Screen,
    C: Write,
{
    firmware: F,
    keys: K,
    screen: S,
    console: C,
    theme: &'a Theme,
}

impl<'a, F, K, S, C> Selector<'a, F, K, S, C>
where
    F: BootFirmware,
    K: KeySource,
    S: Screen,
    C: Write,
{
    pub fn new(firmware: F, keys: K, screen: S, console: C, theme: &'a Theme) -> Self {
        Self {
            firmware,
            keys,
            screen,
            console,
            theme,
        }
    }

    /// Show the menu and block until an entry is booted.
    ///
    /// Returns only when there is nothing to boot, when the booted image
    /// exits back to us, or when a capability provider fails.
    pub fn run(&mut self) -> Result<Outcome> {
        let count = self.firmware.entry_count();
        if count == 0 {
            info!("no boot entries discovered");
            writeln!(self.console, "{}", NO_ENTRIES_MESSAGE)?;
            return Ok(Outcome::NoEntries);
        }

        let names: Vec<String> = (0..count).map(|i| self.firmware.entry_name(i)).collect();

        match self.select_mode() {
            Mode::Graphical => self.run_graphical(&names),
            Mode::Text => self.run_text(&names),
        }
    }

    fn select_mode(&mut self) -> Mode {
        match self.screen.init() {
            Ok(()) => {
                debug!(
                    "graphical menu on {}x{} screen",
                    self.screen.screen_width(),
                    self.screen.screen_height()
                );
                Mode::Graphical
            }
            Err(err) => {
                debug!("{}, using text menu", err);
                Mode::Text
            }
        }
    }

    fn run_graphical(&mut self, names: &[String]) -> Result<Outcome> {
        let geometry = Geometry::compute(&self.screen, self.theme);
        if geometry.visible_rows == 0 {
            debug!(
                "{}x{} screen has no room for menu rows, using text menu",
                geometry.screen_width, geometry.screen_height
            );
            return self.run_text(names);
        }

        let menu = GraphicalMenu::new(self.theme, geometry, names);
        let Some(mut state) = SelectionState::with_window(names.len(), geometry.visible_rows)
        else {
            return Ok(Outcome::NoEntries);
        };

        menu.draw_chrome(&mut self.screen);
        menu.draw_rows(&mut self.screen, &state);

        loop {
            let key = self.keys.read_key()?;
            match state.apply(key) {
                Transition::Moved => menu.draw_rows(&mut self.screen, &state),
                Transition::Unchanged => {}
                Transition::Boot(index) => {
                    self.screen.clear(self.theme.boot_background);
                    return self.boot(index, names);
                }
            }
        }
    }

    fn run_text(&mut self, names: &[String]) -> Result<Outcome> {
        text::render_list(&mut self.console, self.theme, names)?;

        loop {
            let key = self.keys.read_key()?;
            if let Some(index) = text::digit_choice(key, names.len()) {
                writeln!(self.console)?;
                return self.boot(index, names);
            }
        }
    }

    fn boot(&mut self, index: usize, names: &[String]) -> Result<Outcome> {
        info!("booting entry {} ({})", index, names[index]);
        self.firmware.chainload_entry(index)?;
        Ok(Outcome::Returned { index })
    }
}
