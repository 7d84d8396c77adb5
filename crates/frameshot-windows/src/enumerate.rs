use frameshot_core::config::ChromeConfig;
use frameshot_core::selection::{self, Candidate};
use frameshot_core::{WindowInfo, WindowResult, log_info, log_warn};

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;
use windows::core::BOOL;

use crate::window::Window;
use crate::{dpi, monitor, process};

/// Enumerates all top-level windows in front-to-back Z order.
///
/// This calls the Win32 `EnumWindows` API, which visits every top-level
/// window — topmost first — and invokes a callback for each. We collect
/// the handles into a Vec so the selection pass can consume them as a
/// plain ordered sequence. The front-to-back order is what makes the
/// occlusion culling correct.
pub fn enumerate_windows() -> WindowResult<Vec<Window>> {
    let mut windows: Vec<Window> = Vec::new();

    // SAFETY: EnumWindows calls our callback for each top-level window.
    // We pass a pointer to our Vec as LPARAM (user data). The callback
    // casts it back to &mut Vec<Window> to collect results. This is safe
    // because EnumWindows runs synchronously — the Vec outlives the call.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut windows as *mut _ as isize),
        )?;
    }

    Ok(windows)
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Win32 can't call Rust closures directly: `extern "system"` (the
/// Windows calling convention) plus a pointer smuggled through `LPARAM`
/// stand in for a closure capture. Returning `TRUE` continues the
/// enumeration; we never stop early.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec<Window>, cast from enumerate_windows().
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Window>) };
    windows.push(Window::new(hwnd));
    BOOL(1) // TRUE — continue enumerating
}

/// Runs one full enumeration pass and returns the accepted windows.
///
/// Candidates flow classify → occlusion-cull → chrome-correct → clip,
/// in Z order. A window that fails an OS query drops out on its own;
/// an `EnumWindows` failure degrades to an empty result rather than an
/// error, since "no windows" is a valid answer for the caller.
pub fn list_windows(chrome: &ChromeConfig) -> WindowResult<Vec<WindowInfo>> {
    let screen = monitor::screen_metrics()?;

    let handles = match enumerate_windows() {
        Ok(handles) => handles,
        Err(e) => {
            log_warn!("EnumWindows failed: {e}");
            Vec::new()
        }
    };

    let candidates = handles.into_iter().filter_map(resolve);
    let accepted = selection::select_windows(candidates, screen, chrome);
    log_info!("pass complete: {} windows accepted", accepted.len());
    Ok(accepted)
}

/// Resolves a window handle into pipeline input.
///
/// Returns `None` for invisible or minimized windows and for windows
/// whose geometry cannot be read; those drop out without affecting the
/// rest of the pass.
pub(crate) fn resolve(window: Window) -> Option<Candidate> {
    if !window.is_visible() || window.is_minimized() {
        return None;
    }
    let bounds = window.visible_rect().ok()?;

    Some(Candidate {
        hwnd: window.raw(),
        title: window.title(),
        process_name: process::name_for_window(window.hwnd()),
        bounds,
        dpi: dpi::window_dpi(window.hwnd()),
    })
}
