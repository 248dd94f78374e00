use alloc::string::String;
use alloc::vec::Vec;

use log::info;
use lodestar_menu::{BootFirmware, MenuError, Result};
use uefi::boot::{self, LoadImageSource, OpenProtocolAttributes, OpenProtocolParams};
use uefi::proto::BootPolicy;
use uefi::proto::device_path::DevicePath;
use uefi::proto::device_path::build::{self, DevicePathBuilder};
use uefi::{CString16, Handle, Status};

use crate::discovery::{self, BootEntry};

/// Boot entries of this machine plus the means to start them.
pub struct UefiFirmware {
    entries: Vec<BootEntry>,
}

impl UefiFirmware {
    pub fn discover() -> Self {
        Self {
            entries: discovery::discover_entries(),
        }
    }

    pub fn entry(&self, index: usize) -> Option<&BootEntry> {
        self.entries.get(index)
    }
}

impl BootFirmware for UefiFirmware {
    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn entry_name(&self, index: usize) -> String {
        self.entries
            .get(index)
            .map(|entry| entry.name.clone())
            .unwrap_or_else(|| String::from("?"))
    }

    fn chainload_entry(&mut self, index: usize) -> Result<()> {
        let entry = self
            .entries
            .get(index)
            .ok_or(MenuError::EntryOutOfRange(index))?;
        chainload(entry.device, &entry.path)
    }
}

fn chainload_error(stage: &'static str, err: uefi::Error) -> MenuError {
    MenuError::Chainload {
        stage,
        status: err.status().0,
    }
}

fn build_error(_: build::BuildError) -> MenuError {
    MenuError::Chainload {
        stage: "device path",
        status: Status::INVALID_PARAMETER.0,
    }
}

/// Load `path` from the volume behind `device` and start it.
///
/// The full device path is the volume's own path followed by a media file
/// path node for the image.
fn chainload(device: Handle, path: &str) -> Result<()> {
    let path_wide = CString16::try_from(path).map_err(|_| MenuError::Chainload {
        stage: "path encoding",
        status: Status::INVALID_PARAMETER.0,
    })?;

    let mut buf = Vec::new();
    let image = {
        // SAFETY: GetProtocol keeps the file system driver bound to the volume;
        // the path is copied into `buf` before the scope ends.
        let volume_path = unsafe {
            boot::open_protocol::<DevicePath>(
                OpenProtocolParams {
                    handle: device,
                    agent: boot::image_handle(),
                    controller: None,
                },
                OpenProtocolAttributes::GetProtocol,
            )
        }
        .map_err(|err| chainload_error("device path", err))?;

        let mut builder = DevicePathBuilder::with_vec(&mut buf);
        for node in volume_path.node_iter() {
            builder = builder.push(&node).map_err(build_error)?;
        }
        let full_path = builder
            .push(&build::media::FilePath {
                path_name: &path_wide,
            })
            .map_err(build_error)?
            .finalize()
            .map_err(build_error)?;

        info!("loading {}", path);
        boot::load_image(
            boot::image_handle(),
            LoadImageSource::FromDevicePath {
                device_path: full_path,
                boot_policy: BootPolicy::ExactMatch,
            },
        )
        .map_err(|err| chainload_error("load_image", err))?
    };

    boot::start_image(image).map_err(|err| chainload_error("start_image", err))
}
