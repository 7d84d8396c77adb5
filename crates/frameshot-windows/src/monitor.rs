use std::mem;

use frameshot_core::WindowResult;
use frameshot_core::selection::ScreenMetrics;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MONITOR_DEFAULTTOPRIMARY, MONITORINFO, MonitorFromWindow,
};
use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN};

/// Samples the primary screen's dimensions for one enumeration pass.
///
/// `width` is the full physical screen width; `limit` is the bottom of
/// the work area, which excludes the taskbar and docked toolbars — on a
/// 1080p screen with a standard taskbar this is typically 1032.
pub fn screen_metrics() -> WindowResult<ScreenMetrics> {
    // MonitorFromWindow with a null HWND and MONITOR_DEFAULTTOPRIMARY
    // returns the primary monitor handle.
    let monitor = unsafe { MonitorFromWindow(HWND::default(), MONITOR_DEFAULTTOPRIMARY) };

    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct with
    // monitor dimensions. We set cbSize as required by the API.
    let success = unsafe { GetMonitorInfoW(monitor, &mut info) };
    if !success.as_bool() {
        return Err("Failed to get monitor info".into());
    }

    // SAFETY: GetSystemMetrics is a stateless query.
    let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };

    Ok(ScreenMetrics {
        width,
        limit: info.rcWork.bottom,
    })
}
