//! Framebuffer rendering of the boot menu.
//!
//! Drawing is a pure function of the selection state, the geometry, the
//! theme and the entry names. The title, separator and footer are drawn once;
//! every navigation redraws all visible rows.

use alloc::string::String;

use crate::layout::Geometry;
use crate::state::SelectionState;
use crate::theme::Theme;
use crate::traits::display::Screen;

pub struct GraphicalMenu<'a> {
    theme: &'a Theme,
    geometry: Geometry,
    names: &'a [String],
}

impl<'a> GraphicalMenu<'a> {
    pub fn new(theme: &'a Theme, geometry: Geometry, names: &'a [String]) -> Self {
        Self {
            theme,
            geometry,
            names,
        }
    }

    /// Clear the screen and draw everything that does not depend on the selection.
    pub fn draw_chrome<S: Screen + ?Sized>(&self, screen: &mut S) {
        let theme = self.theme;
        let geometry = &self.geometry;

        screen.clear(theme.background);
        screen.draw_text(
            theme.title,
            geometry.padding,
            geometry.title_y,
            theme.text,
            geometry.title_scale,
        );
        screen.fill_rect(
            geometry.padding,
            geometry.separator_y,
            geometry.separator_width,
            1,
            theme.border,
        );
        screen.draw_text(
            theme.footer_hint,
            geometry.padding,
            geometry.footer_y,
            theme.text_dark,
            1,
        );
    }

    /// Redraw every row in the visible window.
    pub fn draw_rows<S: Screen + ?Sized>(&self, screen: &mut S, state: &SelectionState) {
        for (slot, index) in state.visible().enumerate() {
            self.draw_row(screen, slot, index, index == state.selected());
        }
    }

    fn draw_row<S: Screen + ?Sized>(
        &self,
        screen: &mut S,
        slot: usize,
        index: usize,
        highlighted: bool,
    ) {
        let theme = self.theme;
        let geometry = &self.geometry;

        let x = geometry.menu_x;
        let y = geometry.row_y(slot);
        let height = geometry.item_height.saturating_sub(theme.row_gap);
        let name = self.names.get(index).map(String::as_str).unwrap_or("?");
        let label = fit_label(name, geometry.label_columns);

        let label_color = if highlighted {
            screen.fill_rect(x, y, geometry.menu_width, height, theme.card);
            screen.fill_rect(x, y, theme.accent_width, height, theme.accent);
            theme.text
        } else {
            screen.fill_rect(x, y, geometry.menu_width, height, theme.background);
            theme.text_dim
        };

        screen.draw_text(
            label,
            x + theme.label_inset,
            y + theme.label_drop,
            label_color,
            1,
        );
    }
}

/// The longest prefix of `name` that fits in `columns` glyphs.
pub fn fit_label(name: &str, columns: usize) -> &str {
    match name.char_indices().nth(columns) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}
