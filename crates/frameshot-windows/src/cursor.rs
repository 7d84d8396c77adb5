use frameshot_core::config::ChromeConfig;
use frameshot_core::selection;
use frameshot_core::{WindowInfo, WindowResult};

use windows::Win32::Foundation::POINT;
use windows::Win32::UI::WindowsAndMessaging::{
    GA_ROOT, GetAncestor, GetCursorPos, WindowFromPoint,
};

use crate::window::Window;
use crate::{enumerate, monitor};

/// Returns the top-level window under the mouse cursor.
///
/// `WindowFromPoint` can land on a child control inside the target, so
/// `GetAncestor(GA_ROOT)` walks up to the top-level frame. The result
/// goes through the same eligibility rules, chrome correction, and
/// work-area clipping as windows coming out of an enumeration pass:
/// title-less helpers and screen-sized picker overlays report as a
/// miss, not a hit.
pub fn window_at_cursor(chrome_config: &ChromeConfig) -> WindowResult<WindowInfo> {
    let screen = monitor::screen_metrics()?;

    let mut point = POINT::default();
    // SAFETY: GetCursorPos writes the current cursor position.
    unsafe { GetCursorPos(&mut point)? };

    // SAFETY: WindowFromPoint is a read-only hit test.
    let hwnd = unsafe { WindowFromPoint(point) };
    if hwnd.is_invalid() {
        return Err("no window under cursor".into());
    }

    // SAFETY: GetAncestor reads the window hierarchy; a null result
    // means hwnd was already top-level.
    let root = unsafe { GetAncestor(hwnd, GA_ROOT) };
    let hwnd = if root.is_invalid() { hwnd } else { root };

    let candidate =
        enumerate::resolve(Window::new(hwnd)).ok_or("window under cursor is not visible")?;

    selection::select_single(candidate, screen, chrome_config)
        .ok_or_else(|| "window under cursor is not capturable".into())
}
