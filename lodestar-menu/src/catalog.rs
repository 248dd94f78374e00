//! Naming and ranking rules for boot loaders found on an EFI system partition.
//!
//! The loader walks `\EFI\<vendor>` directories; everything here is the pure
//! policy deciding which images become menu entries and what they are called.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Entry name for the removable-media fallback loader in `\EFI\BOOT`.
pub const FALLBACK_ENTRY_NAME: &str = "UEFI Default";

/// Loader file names in order of preference when a vendor ships several.
pub const KNOWN_LOADERS: &[&str] = &[
    "shimx64.efi",
    "shimia32.efi",
    "shimaa64.efi",
    "grubx64.efi",
    "grubia32.efi",
    "grubaa64.efi",
    "systemd-bootx64.efi",
    "systemd-bootia32.efi",
    "systemd-bootaa64.efi",
    "refind_x64.efi",
    "refind_ia32.efi",
    "refind_aa64.efi",
    "vmlinuz.efi",
    "bootmgfw.efi",
    "bootx64.efi",
    "bootia32.efi",
    "bootaa64.efi",
];

/// Helper images shipped next to real loaders that must never be offered.
pub const UTILITY_IMAGES: &[&str] = &[
    "mmx64.efi",
    "mmia32.efi",
    "mmaa64.efi",
    "fwupx64.efi",
    "fwupia32.efi",
    "fwupaa64.efi",
    "fbx64.efi",
    "fbia32.efi",
    "fbaa64.efi",
    "memtest86.efi",
    "memtest86plus.efi",
];

/// What a directory directly under `\EFI` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorDir {
    /// `.`, `..` or our own directory
    Skip,
    /// `\EFI\BOOT`, the removable-media fallback path
    Fallback,
    /// `\EFI\Linux`, one Unified Kernel Image per file
    Linux,
    /// A vendor directory such as `\EFI\debian`
    Vendor,
}

/// An `.efi` image found under a vendor directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub file_name: String,
    /// Full ESP path, e.g. `\EFI\debian\shimx64.efi`
    pub path: String,
}

impl Candidate {
    pub fn new(file_name: &str, path: String) -> Self {
        Self {
            file_name: String::from(file_name),
            path,
        }
    }
}

pub fn classify_vendor(name: &str, own_dir: &str) -> VendorDir {
    if name == "." || name == ".." || name.eq_ignore_ascii_case(own_dir) {
        VendorDir::Skip
    } else if name.eq_ignore_ascii_case("boot") {
        VendorDir::Fallback
    } else if name.eq_ignore_ascii_case("linux") {
        VendorDir::Linux
    } else {
        VendorDir::Vendor
    }
}

pub fn has_efi_extension(name: &str) -> bool {
    name.len() >= 5
        && name
            .get(name.len() - 4..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".efi"))
}

/// Whether `name` is a bootable image worth an entry.
pub fn is_boot_image(name: &str, own_image: &str) -> bool {
    has_efi_extension(name)
        && !name.eq_ignore_ascii_case(own_image)
        && !UTILITY_IMAGES.iter().any(|u| name.eq_ignore_ascii_case(u))
}

/// Path of `name` inside `\EFI\<vendor>` (and optional sub-directory).
pub fn esp_path(vendor: &str, sub_dir: Option<&str>, name: &str) -> String {
    match sub_dir {
        Some(sub) => format!("\\EFI\\{}\\{}\\{}", vendor, sub, name),
        None => format!("\\EFI\\{}\\{}", vendor, name),
    }
}

/// Pick the preferred loader, falling back to the first candidate.
pub fn pick_best_loader(candidates: &[Candidate]) -> Option<&Candidate> {
    KNOWN_LOADERS
        .iter()
        .find_map(|known| {
            candidates
                .iter()
                .find(|c| c.file_name.eq_ignore_ascii_case(known))
        })
        .or_else(|| candidates.first())
}

/// Upper-case the first ASCII letter.
pub fn capitalize(s: &str) -> String {
    let mut out = String::from(s);
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

/// Menu name for a vendor directory such as `debian` -> `Debian`.
pub fn vendor_display_name(vendor: &str) -> String {
    capitalize(vendor)
}

/// Menu name for a Unified Kernel Image in `\EFI\Linux`.
///
/// `arch-linux_lts.efi` becomes `Linux (Arch linux lts)`.
pub fn uki_display_name(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    };
    let cleaned: String = stem
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            _ => c,
        })
        .collect();
    format!("Linux ({})", capitalize(cleaned.trim()))
}

/// Drop entries whose name was already seen, keeping the first.
pub fn dedup_by_name<T, N>(entries: &mut Vec<T>, name: N)
where
    N: Fn(&T) -> &str,
{
    let mut seen: Vec<String> = Vec::new();
    entries.retain(|entry| {
        let key = name(entry);
        if seen.iter().any(|s| s == key) {
            false
        } else {
            seen.push(String::from(key));
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::*;

    fn candidates(names: &[&str]) -> Vec<Candidate> {
        names
            .iter()
            .map(|n| Candidate::new(n, esp_path("vendor", None, n)))
            .collect()
    }

    #[test]
    fn test_classify_vendor() {
        assert_eq!(classify_vendor(".", "lodestar"), VendorDir::Skip);
        assert_eq!(classify_vendor("Lodestar", "lodestar"), VendorDir::Skip);
        assert_eq!(classify_vendor("BOOT", "lodestar"), VendorDir::Fallback);
        assert_eq!(classify_vendor("Linux", "lodestar"), VendorDir::Linux);
        assert_eq!(classify_vendor("Microsoft", "lodestar"), VendorDir::Vendor);
    }

    #[test]
    fn test_boot_image_filter() {
        assert!(is_boot_image("grubx64.efi", "lodestar.efi"));
        assert!(is_boot_image("BOOTX64.EFI", "lodestar.efi"));
        assert!(!is_boot_image("mmx64.efi", "lodestar.efi"));
        assert!(!is_boot_image("LODESTAR.EFI", "lodestar.efi"));
        assert!(!is_boot_image("grub.cfg", "lodestar.efi"));
        assert!(!is_boot_image(".efi", "lodestar.efi"));
    }

    #[test]
    fn test_pick_prefers_shim_over_grub() {
        let list = candidates(&["mmx64.efi", "grubx64.efi", "shimx64.efi"]);
        let best = pick_best_loader(&list).unwrap();
        assert_eq!(best.path, "\\EFI\\vendor\\shimx64.efi");
    }

    #[test]
    fn test_pick_falls_back_to_first() {
        let list = candidates(&["custom.efi", "other.efi"]);
        assert_eq!(pick_best_loader(&list).unwrap().file_name, "custom.efi");
        assert!(pick_best_loader(&[]).is_none());
    }

    #[test]
    fn test_esp_paths() {
        assert_eq!(
            esp_path("Microsoft", Some("Boot"), "bootmgfw.efi"),
            "\\EFI\\Microsoft\\Boot\\bootmgfw.efi"
        );
        assert_eq!(esp_path("debian", None, "shimx64.efi"), "\\EFI\\debian\\shimx64.efi");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(vendor_display_name("debian"), "Debian");
        assert_eq!(vendor_display_name(""), "");
        assert_eq!(uki_display_name("arch-linux_lts.efi"), "Linux (Arch linux lts)");
        assert_eq!(uki_display_name("-fedora-.efi"), "Linux (Fedora)");
    }

    #[test]
    fn test_dedup_keeps_first() {
        let mut entries = vec![
            (String::from("Debian"), 0),
            (String::from("Ubuntu"), 1),
            (String::from("Debian"), 2),
        ];
        dedup_by_name(&mut entries, |e| e.0.as_str());
        assert_eq!(
            entries,
            vec![(String::from("Debian"), 0), (String::from("Ubuntu"), 1)]
        );
    }
}
