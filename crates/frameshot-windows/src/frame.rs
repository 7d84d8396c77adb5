use std::mem;

use frameshot_core::WindowResult;
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::GetWindowRect;

/// Returns the visible bounds of a window using DWM extended frame bounds.
///
/// `GetWindowRect` includes the invisible drop-shadow borders Windows
/// 10/11 add around windows; `DWMWA_EXTENDED_FRAME_BOUNDS` reports what
/// is actually drawn on screen. Falls back to `GetWindowRect` when DWM
/// is unavailable; if that also fails the caller drops the window.
pub fn visible_rect(hwnd: HWND) -> WindowResult<RECT> {
    let mut frame = RECT::default();
    // SAFETY: DwmGetWindowAttribute writes a RECT of the declared size.
    let result = unsafe {
        DwmGetWindowAttribute(
            hwnd,
            DWMWA_EXTENDED_FRAME_BOUNDS,
            &mut frame as *mut RECT as *mut _,
            mem::size_of::<RECT>() as u32,
        )
    };

    if result.is_err() {
        // SAFETY: GetWindowRect fills the RECT for a valid HWND.
        unsafe { GetWindowRect(hwnd, &mut frame)? };
    }

    Ok(frame)
}
