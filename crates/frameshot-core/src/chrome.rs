//! Browser content-area approximation and work-area clipping.
//!
//! Browsers draw their own tab strip and toolbar inside the window
//! frame. We cannot introspect that layout from outside, so we inset a
//! fixed number of device-independent pixels from the top edge for
//! processes known to be browsers. Coarse, but good enough to aim a
//! capture at the page content.

use crate::Rect;
use crate::config::ChromeConfig;

/// Reference DPI that inset constants are expressed against.
pub const BASE_DPI: u32 = 96;

/// Returns the content bounds for a window.
///
/// For processes matching a configured browser identifier, the top edge
/// moves down by the configured inset scaled to the window's DPI. All
/// other windows get their window bounds back unchanged.
pub fn content_bounds(window: Rect, process_name: &str, dpi: u32, config: &ChromeConfig) -> Rect {
    let name = process_name.to_lowercase();
    if !config.browsers.iter().any(|b| name.contains(b.as_str())) {
        return window;
    }

    let inset = scale_for_dpi(config.inset, dpi);
    Rect::new(window.x, window.y + inset, window.width, window.height - inset)
}

/// Clips a rectangle's bottom edge to the usable screen limit.
///
/// Heights never go negative: a window entirely below the limit is
/// reported with zero height. Only the bottom edge is clipped; windows
/// hanging off the sides keep their full width.
pub fn clip_to_limit(rect: Rect, limit: i32) -> Rect {
    let mut height = rect.height;
    if rect.y + height > limit {
        height = limit - rect.y;
    }
    if height < 0 {
        height = 0;
    }
    Rect { height, ..rect }
}

/// Scales a length expressed at [`BASE_DPI`] to the given DPI,
/// rounding to nearest (the `MulDiv` convention).
fn scale_for_dpi(value: i32, dpi: u32) -> i32 {
    let base = i64::from(BASE_DPI);
    ((i64::from(value) * i64::from(dpi) + base / 2) / base) as i32
}
