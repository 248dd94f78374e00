use log::LevelFilter;
use noto_sans_mono_bitmap::{FontWeight, RasterHeight};

// Self identification on the EFI System Partition

/// Our own vendor directory under `\EFI`, never offered as an entry
pub static OWN_DIRECTORY: &str = "lodestar";

/// Our own image name; a `\EFI\BOOT` holding it means we are the fallback loader
pub static OWN_IMAGE: &str = "lodestar.efi";

/// Root of the vendor directories scanned on every volume
pub static ESP_EFI_ROOT: &str = "\\EFI";

// Input

/// Delay between two keyboard polls, in microseconds
pub const KEY_POLL_INTERVAL_US: usize = 50_000;

// Graphics

pub const FONT_WEIGHT: FontWeight = FontWeight::Regular;
pub const FONT_HEIGHT: RasterHeight = RasterHeight::Size16;

/// Substitute for characters the font has no raster for
pub const FALLBACK_GLYPH: char = '?';

// Exit

/// How long a message stays on screen before we return to the firmware, in microseconds
pub const EXIT_STALL_US: usize = 5_000_000;

/// Log level; release builds stay quiet so log lines do not land on the text menu
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Info
} else {
    LevelFilter::Warn
};
