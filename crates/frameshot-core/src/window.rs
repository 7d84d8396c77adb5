use serde::Serialize;

use crate::Rect;

/// A boxed error type for window operations.
///
/// Any error type that implements the `Error` trait can be boxed into
/// this, which keeps the Win32 layer's `?` chains simple.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// One accepted window with its normalized geometry.
///
/// `window_bounds` is the compositor-visible frame; `client_bounds` is
/// the same frame with known browser chrome removed. Both are clipped
/// to the usable work area. Serialized with camelCase keys for the
/// consumers parsing this tool's JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowInfo {
    pub hwnd: usize,
    pub title: String,
    pub process_name: String,
    pub window_bounds: Rect,
    pub client_bounds: Rect,
}
