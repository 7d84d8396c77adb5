/// Cursor-position window hit testing.
pub mod cursor;

/// Per-monitor DPI awareness and queries.
pub mod dpi;

/// Win32 window enumeration and the selection pass driver.
pub mod enumerate;

/// DWM extended-frame-bounds geometry.
pub mod frame;

/// Monitor and work-area queries.
pub mod monitor;

/// Process-name lookup.
pub mod process;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use cursor::window_at_cursor;
pub use enumerate::list_windows;
pub use window::Window;
