use log::debug;
use lodestar_menu::{Key, KeySource, Result};
use uefi::proto::console::text::{Key as UefiKey, ScanCode};

use crate::config::KEY_POLL_INTERVAL_US;

const CARRIAGE_RETURN: u16 = 0x000D;

/// Firmware keyboard, polled until a key arrives.
pub struct UefiKeyboard;

impl KeySource for UefiKeyboard {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            match uefi::system::with_stdin(|stdin| stdin.read_key()) {
                Ok(Some(key)) => {
                    if let Some(key) = translate(key) {
                        return Ok(key);
                    }
                }
                Ok(None) => {}
                Err(err) => debug!("read_key failed: {:?}", err),
            }

            uefi::boot::stall(KEY_POLL_INTERVAL_US);
        }
    }
}

fn translate(key: UefiKey) -> Option<Key> {
    match key {
        UefiKey::Printable(c) if u16::from(c) == CARRIAGE_RETURN => Some(Key::Enter),
        UefiKey::Printable(c) => Some(Key::Char(char::from(c))),
        UefiKey::Special(ScanCode::UP) => Some(Key::Up),
        UefiKey::Special(ScanCode::DOWN) => Some(Key::Down),
        UefiKey::Special(ScanCode::ESCAPE) => Some(Key::Escape),
        UefiKey::Special(ScanCode::HOME) => Some(Key::Home),
        UefiKey::Special(ScanCode::END) => Some(Key::End),
        UefiKey::Special(ScanCode::LEFT) => Some(Key::Left),
        UefiKey::Special(ScanCode::RIGHT) => Some(Key::Right),
        // function keys, page up/down and friends
        UefiKey::Special(_) => None,
    }
}
