use frameshot_core::{Rect, WindowResult};

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{GetWindowTextW, IsIconic, IsWindowVisible};

use crate::frame;

/// A top-level window, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle — a number that identifies a window to
/// the OS. It stays valid only while the window exists, so this struct
/// never outlives the enumeration pass that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// The handle as a pointer-sized integer, for output and logging.
    pub fn raw(&self) -> usize {
        self.hwnd.0 as usize
    }

    /// Returns whether the window is currently visible.
    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    /// Returns whether the window is minimized.
    pub fn is_minimized(&self) -> bool {
        // SAFETY: IsIconic is a simple query that returns a BOOL.
        unsafe { IsIconic(self.hwnd).as_bool() }
    }

    /// Returns the window title, read through a bounded 256-char buffer.
    ///
    /// Longer titles are truncated; title-less windows yield an empty
    /// string rather than an error.
    pub fn title(&self) -> String {
        let mut buffer = [0u16; 256];
        // SAFETY: GetWindowTextW writes at most buffer.len() u16s and
        // returns the number of characters copied.
        let copied = unsafe { GetWindowTextW(self.hwnd, &mut buffer) };
        String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
    }

    /// Returns the compositor-visible bounding rectangle.
    pub fn visible_rect(&self) -> WindowResult<Rect> {
        let frame = frame::visible_rect(self.hwnd)?;

        Ok(Rect::new(
            frame.left,
            frame.top,
            frame.right - frame.left,
            frame.bottom - frame.top,
        ))
    }
}
