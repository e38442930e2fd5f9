#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spotlight_core::{Rect, Sides, Size};
use spotlight_layout::{DefaultLayoutManager, IndicatorLayoutInfo, LayoutInput, LayoutManager};

#[derive(Debug, Arbitrary)]
struct Scene {
    container: (i16, i16, u16, u16),
    target: (i16, i16, u16, u16),
    insets: (u8, u8, u8, u8),
    reserved: (u8, u8, u8, u8),
    message: (u16, u16),
    indicator: (u8, u8, u8, u8),
    auto_resize: bool,
}

fn rect((x, y, w, h): (i16, i16, u16, u16)) -> Rect {
    Rect::new(x.into(), y.into(), w.into(), h.into())
}

fn sides((t, r, b, l): (u8, u8, u8, u8)) -> Sides {
    Sides::new(t.into(), r.into(), b.into(), l.into())
}

fuzz_target!(|scene: Scene| {
    let (start, end, max, min) = scene.indicator;
    let info = IndicatorLayoutInfo::new(start.into(), end.into(), max.max(min).into(), min.into());
    let manager = DefaultLayoutManager::new()
        .indicator(info)
        .auto_resize(scene.auto_resize);

    let input = LayoutInput {
        target: rect(scene.target),
        container: rect(scene.container),
        insets: sides(scene.insets),
        reserved: sides(scene.reserved),
        message_size: Size::new(scene.message.0.into(), scene.message.1.into()),
    };
    let gravity = manager.gravity_for(&input);
    let measure = |max: Size| Size::new(scene.message.0.into(), scene.message.1.into()).min(max);

    let Some(out) = manager.layout(gravity, &input, &measure) else {
        assert!(input.effective_container().is_empty());
        return;
    };

    // Post-conditions that must always hold:
    assert!(out.indicator_length >= 0 && out.indicator_length <= info.max_length);
    assert!(out.indicator.width >= 0 && out.indicator.height >= 0);
    assert!(out.margin_start >= 0 && out.margin_end >= 0);
    let effective = input.effective_container();
    if out.message.width <= effective.width && out.message.height <= effective.height {
        assert!(effective.contains_rect(&out.message), "message escaped container");
    }
});
