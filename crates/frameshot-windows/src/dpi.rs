use frameshot_core::chrome::BASE_DPI;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, GetDpiForWindow, SetProcessDpiAwarenessContext,
};

/// Declares this process as per-monitor DPI aware (V2).
///
/// Without this, Windows scales coordinates for us based on the primary
/// monitor's DPI, which gives wrong positions on mixed-DPI setups. With
/// per-monitor awareness, every rectangle we report is in raw pixels.
///
/// Must be called once at process startup, before any Win32 call that
/// depends on DPI.
pub fn enable_dpi_awareness() {
    // SAFETY: SetProcessDpiAwarenessContext is safe to call once at startup.
    // If it fails (e.g. already set via manifest), we ignore the error.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}

/// Returns the window's effective DPI.
///
/// Degrades to the 96 DPI baseline when the query returns nothing
/// (invalid handles and some system surfaces report 0).
pub fn window_dpi(hwnd: HWND) -> u32 {
    // SAFETY: GetDpiForWindow is a read-only query.
    let dpi = unsafe { GetDpiForWindow(hwnd) };
    if dpi == 0 { BASE_DPI } else { dpi }
}
