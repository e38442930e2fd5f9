#![no_main]

use libfuzzer_sys::fuzz_target;
use spotlight::{Spotlight, SpotlightConfig};
use spotlight_core::Rect;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic.
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = SpotlightConfig::from_json(raw) else {
        return;
    };
    assert!(config.validate().is_ok());

    // Whatever was accepted must lay out without panicking.
    let mut overlay = Spotlight::new().config(config);
    overlay.on_layout(Rect::new(0, 0, 1080, 1920));
    overlay.set_target(Some(Rect::new(500, 900, 80, 80).into()));
    overlay.start(None, false);
    overlay.end();
});
