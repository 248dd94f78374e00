//! Boot entry discovery on every EFI System Partition the firmware exposes.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info, warn};
use lodestar_menu::catalog::{self, Candidate, VendorDir};
use uefi::boot::{self, SearchType};
use uefi::fs::FileSystem;
use uefi::proto::media::fs::SimpleFileSystem;
use uefi::{CString16, Handle};

use crate::config::{ESP_EFI_ROOT, OWN_DIRECTORY, OWN_IMAGE};

/// A bootable image found on a volume.
pub struct BootEntry {
    /// Display name shown in the boot menu
    pub name: String,
    /// Image path relative to the volume root, e.g. `\EFI\debian\shimx64.efi`
    pub path: String,
    /// Volume the image lives on
    pub device: Handle,
}

/// Scan every simple-file-system volume for loaders under `\EFI`.
pub fn discover_entries() -> Vec<BootEntry> {
    let handles: Vec<Handle> =
        match boot::locate_handle_buffer(SearchType::from_proto::<SimpleFileSystem>()) {
            Ok(buffer) => buffer.to_vec(),
            Err(err) => {
                warn!("no file system volumes: {:?}", err);
                return Vec::new();
            }
        };

    let mut entries = Vec::new();
    for handle in handles {
        let Ok(sfs) = boot::open_protocol_exclusive::<SimpleFileSystem>(handle) else {
            debug!("volume {:?} cannot be opened, skipping", handle);
            continue;
        };
        let mut fs = FileSystem::new(sfs);
        scan_volume(&mut fs, handle, &mut entries);
    }

    catalog::dedup_by_name(&mut entries, |entry| entry.name.as_str());
    for entry in &entries {
        info!("  {} -> {}", entry.name, entry.path);
    }
    entries
}

fn scan_volume(fs: &mut FileSystem, device: Handle, entries: &mut Vec<BootEntry>) {
    let Some(vendors) = list_dir(fs, ESP_EFI_ROOT) else {
        return;
    };

    for (vendor, is_dir) in &vendors {
        if !is_dir {
            continue;
        }

        let kind = catalog::classify_vendor(vendor, OWN_DIRECTORY);
        if kind == VendorDir::Skip {
            continue;
        }

        let Some(contents) = list_dir(fs, &format!("{}\\{}", ESP_EFI_ROOT, vendor)) else {
            continue;
        };

        if kind == VendorDir::Linux {
            for (file_name, is_dir) in &contents {
                if !is_dir && catalog::is_boot_image(file_name, OWN_IMAGE) {
                    entries.push(BootEntry {
                        name: catalog::uki_display_name(file_name),
                        path: catalog::esp_path(vendor, None, file_name),
                        device,
                    });
                }
            }
            continue;
        }

        let images = collect_images(fs, vendor, &contents);

        if kind == VendorDir::Fallback
            && images
                .iter()
                .any(|c| c.file_name.eq_ignore_ascii_case(OWN_IMAGE))
        {
            debug!("\\EFI\\{} holds our own image, not listing it", vendor);
            continue;
        }

        let bootable: Vec<Candidate> = images
            .into_iter()
            .filter(|c| catalog::is_boot_image(&c.file_name, OWN_IMAGE))
            .collect();

        if let Some(best) = catalog::pick_best_loader(&bootable) {
            let name = match kind {
                VendorDir::Fallback => String::from(catalog::FALLBACK_ENTRY_NAME),
                _ => catalog::vendor_display_name(vendor),
            };
            entries.push(BootEntry {
                name,
                path: best.path.clone(),
                device,
            });
        }
    }
}

/// Every `.efi` file in a vendor directory and one level of sub-directories.
fn collect_images(
    fs: &mut FileSystem,
    vendor: &str,
    contents: &[(String, bool)],
) -> Vec<Candidate> {
    let mut images = Vec::new();

    for (name, is_dir) in contents {
        if !is_dir {
            if catalog::has_efi_extension(name) {
                images.push(Candidate::new(name, catalog::esp_path(vendor, None, name)));
            }
            continue;
        }

        let sub_dir = format!("{}\\{}\\{}", ESP_EFI_ROOT, vendor, name);
        let Some(sub_contents) = list_dir(fs, &sub_dir) else {
            continue;
        };
        for (sub_name, sub_is_dir) in &sub_contents {
            if !sub_is_dir && catalog::has_efi_extension(sub_name) {
                images.push(Candidate::new(
                    sub_name,
                    catalog::esp_path(vendor, Some(name.as_str()), sub_name),
                ));
            }
        }
    }

    images
}

/// `(name, is_directory)` for each entry of `path`, without `.` and `..`.
fn list_dir(fs: &mut FileSystem, path: &str) -> Option<Vec<(String, bool)>> {
    let wide = CString16::try_from(path).ok()?;
    let iter = fs.read_dir(&*wide).ok()?;

    Some(
        iter.filter_map(|info| info.ok())
            .map(|info| (format!("{}", info.file_name()), info.is_directory()))
            .filter(|(name, _)| name != "." && name != "..")
            .collect(),
    )
}
