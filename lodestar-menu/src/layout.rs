use crate::theme::Theme;
use crate::traits::display::Screen;

/// Pixel layout of the graphical menu, computed once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub screen_width: usize,
    pub screen_height: usize,
    pub cell_width: usize,
    pub cell_height: usize,

    pub padding: usize,
    pub title_y: usize,
    pub title_scale: usize,
    pub separator_y: usize,
    pub separator_width: usize,

    /// Top-left corner of the first row
    pub menu_x: usize,
    pub menu_y: usize,
    pub menu_width: usize,
    pub item_height: usize,

    pub footer_y: usize,

    /// How many rows fit between the separator and the footer; 0 when none do
    pub visible_rows: usize,
    /// How many glyphs of a label fit inside a row (at least 1)
    pub label_columns: usize,
}

impl Geometry {
    pub fn compute<S: Screen + ?Sized>(screen: &S, theme: &Theme) -> Self {
        let screen_width = screen.screen_width();
        let screen_height = screen.screen_height();
        let cell_width = screen.font_cell_width();
        let cell_height = screen.font_cell_height();

        let padding = theme.padding;
        let title_scale = theme.title_scale.max(1);
        let title_y = padding;
        let separator_y = title_y + cell_height * title_scale + theme.title_gap;

        let item_height = (cell_height + theme.row_padding).max(1);
        let menu_y = separator_y + theme.menu_gap;
        let menu_width = screen_width.saturating_sub(padding * 2);

        let footer_y = screen_height.saturating_sub(padding);

        // keep one empty row between the last entry and the footer
        let rows_bottom = footer_y.saturating_sub(item_height);
        let visible_rows = rows_bottom.saturating_sub(menu_y) / item_height;

        let label_columns =
            (menu_width.saturating_sub(theme.label_inset * 2) / cell_width.max(1)).max(1);

        Self {
            screen_width,
            screen_height,
            cell_width,
            cell_height,
            padding,
            title_y,
            title_scale,
            separator_y,
            separator_width: screen_width / 3,
            menu_x: padding,
            menu_y,
            menu_width,
            item_height,
            footer_y,
            visible_rows,
            label_columns,
        }
    }

    /// Top edge of the row drawn in window slot `slot`.
    pub fn row_y(&self, slot: usize) -> usize {
        self.menu_y + slot * self.item_height
    }
}

#[cfg(test)]
mod tests {
    use super::Geometry;
    use crate::tests::RecordingScreen;
    use crate::theme::Theme;

    #[test]
    fn test_geometry_for_xga_screen() {
        let screen = RecordingScreen::new(1024, 768, 8, 16);
        let geometry = Geometry::compute(&screen, &Theme::DEFAULT);

        assert_eq!(geometry.title_y, 40);
        assert_eq!(geometry.separator_y, 84);
        assert_eq!(geometry.separator_width, 341);
        assert_eq!(geometry.menu_y, 100);
        assert_eq!(geometry.menu_width, 944);
        assert_eq!(geometry.item_height, 26);
        assert_eq!(geometry.footer_y, 728);
        assert_eq!(geometry.visible_rows, 23);
        assert_eq!(geometry.label_columns, 115);
        assert_eq!(geometry.row_y(2), 152);
    }

    #[test]
    fn test_tiny_screen_has_no_rows() {
        let screen = RecordingScreen::new(64, 48, 8, 16);
        let geometry = Geometry::compute(&screen, &Theme::DEFAULT);

        assert_eq!(geometry.visible_rows, 0);
        assert_eq!(geometry.label_columns, 1);
        assert_eq!(geometry.footer_y, 8);
    }

    #[test]
    fn test_rows_never_reach_the_footer() {
        let screen = RecordingScreen::new(640, 150, 8, 16);
        let geometry = Geometry::compute(&screen, &Theme::DEFAULT);

        assert_eq!(geometry.footer_y, 110);
        assert_eq!(geometry.visible_rows, 0);

        let screen = RecordingScreen::new(640, 200, 8, 16);
        let geometry = Geometry::compute(&screen, &Theme::DEFAULT);

        assert_eq!(geometry.visible_rows, 1);
        assert!(geometry.row_y(geometry.visible_rows) <= geometry.footer_y);
    }
}
