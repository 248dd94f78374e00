//! Colour tones and layout constants for the boot menu.

/// A 24-bit `0xRRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);

    pub const fn rgb(value: u32) -> Self {
        Self(value & 0x00ff_ffff)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

/// Immutable look of the graphical menu and the text fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Heading shown above the entries in both modes
    pub title: &'static str,
    /// Key help drawn at the bottom of the graphical menu
    pub footer_hint: &'static str,
    /// Prompt printed after the text-mode list
    pub prompt: &'static str,

    pub background: Color,
    /// Highlighted row fill
    pub card: Color,
    /// Separator rule under the title
    pub border: Color,
    /// Title and highlighted label
    pub text: Color,
    /// Labels of rows that are not highlighted
    pub text_dim: Color,
    /// Footer hint
    pub text_dark: Color,
    /// Bar on the left edge of the highlighted row
    pub accent: Color,
    /// Screen colour left behind when an entry is booted
    pub boot_background: Color,

    /// Margin around the whole menu, in pixels
    pub padding: usize,
    pub title_scale: usize,
    /// Space between the title and the separator rule
    pub title_gap: usize,
    /// Space between the separator rule and the first row
    pub menu_gap: usize,
    /// Extra height added to a glyph cell to form one row
    pub row_padding: usize,
    /// Gap left between consecutive row backgrounds
    pub row_gap: usize,
    pub accent_width: usize,
    pub label_inset: usize,
    pub label_drop: usize,
}

impl Theme {
    pub const DEFAULT: Theme = Theme {
        title: "Lodestar",
        footer_hint: "Up/Down  Select    Enter  Boot",
        prompt: "Select> ",

        background: Color::rgb(0x0f0f12),
        card: Color::rgb(0x212126),
        border: Color::rgb(0x2e2e36),
        text: Color::rgb(0xe0e0e6),
        text_dim: Color::rgb(0x7a7a8a),
        text_dark: Color::rgb(0x4d4d59),
        accent: Color::rgb(0x8c8fa6),
        boot_background: Color::BLACK,

        padding: 40,
        title_scale: 2,
        title_gap: 12,
        menu_gap: 16,
        row_padding: 10,
        row_gap: 2,
        accent_width: 2,
        label_inset: 12,
        label_drop: 4,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn test_color_channels() {
        let color = Color::rgb(0x8c8fa6);
        assert_eq!(color.red(), 0x8c);
        assert_eq!(color.green(), 0x8f);
        assert_eq!(color.blue(), 0xa6);
    }

    #[test]
    fn test_color_drops_alpha_byte() {
        assert_eq!(Color::rgb(0xff40_8deb).value(), 0x40_8deb);
    }
}
