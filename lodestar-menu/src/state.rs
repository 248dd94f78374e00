use core::ops::Range;

use crate::traits::input::Key;

/// How the menu is presented for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Graphical,
    Text,
}

/// What a key did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The highlight moved; the rows must be redrawn
    Moved,
    /// Nothing changed; no redraw
    Unchanged,
    /// The operator confirmed entry `index`
    Boot(usize),
}

/// The highlighted entry and the window of rows currently on screen.
///
/// Invariants: `selected < count` and
/// `first_visible <= selected < first_visible + window`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: usize,
    count: usize,
    first_visible: usize,
    window: usize,
}

impl SelectionState {
    /// A state with every entry in view. `None` when there is nothing to select.
    pub fn new(count: usize) -> Option<Self> {
        Self::with_window(count, count)
    }

    /// A state that shows at most `window` rows at a time.
    pub fn with_window(count: usize, window: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }

        Some(Self {
            selected: 0,
            count,
            first_visible: 0,
            window: window.clamp(1, count),
        })
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Entry indices currently on screen, in drawing order.
    pub fn visible(&self) -> Range<usize> {
        self.first_visible..self.first_visible + self.window
    }

    /// Apply one key. Up/Down stop at the ends of the list.
    pub fn apply(&mut self, key: Key) -> Transition {
        match key {
            Key::Up if self.selected > 0 => {
                self.selected -= 1;
                if self.selected < self.first_visible {
                    self.first_visible = self.selected;
                }
                Transition::Moved
            }
            Key::Down if self.selected + 1 < self.count => {
                self.selected += 1;
                if self.selected >= self.first_visible + self.window {
                    self.first_visible = self.selected + 1 - self.window;
                }
                Transition::Moved
            }
            Key::Enter => Transition::Boot(self.selected),
            _ => Transition::Unchanged,
        }
    }
}
