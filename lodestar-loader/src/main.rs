//! Lodestar - graphical UEFI boot selector.
//!
//! Discovers loaders on every EFI System Partition, shows them in a
//! framebuffer menu (or a numbered text list when there is no graphics
//! output) and chainloads the one the operator picks.

#![no_main]
#![no_std]

extern crate alloc;

use log::{error, info, warn};
use lodestar_menu::{BootFirmware, Outcome, Selector, Theme};
use uefi::prelude::*;

mod config;
mod console;
mod discovery;
mod display;
mod firmware;
mod keyboard;

use config::{EXIT_STALL_US, LOG_LEVEL};
use console::UefiConsole;
use display::GopDisplay;
use firmware::UefiFirmware;
use keyboard::UefiKeyboard;

#[entry]
fn main() -> Status {
    if uefi::helpers::init().is_err() {
        return Status::ABORTED;
    }
    log::set_max_level(LOG_LEVEL);
    info!("Lodestar {} starting...", env!("CARGO_PKG_VERSION"));

    uefi::system::with_stdout(|out| {
        let _ = out.clear();
    });

    let mut firmware = UefiFirmware::discover();
    info!("{} boot entries discovered", firmware.entry_count());

    let theme = Theme::DEFAULT;
    let result = Selector::new(
        &mut firmware,
        UefiKeyboard,
        GopDisplay::default(),
        UefiConsole,
        &theme,
    )
    .run();

    let status = match result {
        Ok(Outcome::NoEntries) => Status::NOT_FOUND,
        Ok(Outcome::Returned { index }) => {
            let name = firmware.entry(index).map(|e| e.name.as_str()).unwrap_or("?");
            warn!("{} returned control to the boot selector", name);
            Status::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            Status::LOAD_ERROR
        }
    };

    uefi::boot::stall(EXIT_STALL_US);
    status
}
