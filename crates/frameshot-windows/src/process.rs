use frameshot_core::log_debug;
use windows::Win32::Foundation::{CloseHandle, HWND};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
    QueryFullProcessImageNameW,
};
use windows::Win32::UI::WindowsAndMessaging::GetWindowThreadProcessId;
use windows::core::PWSTR;

/// Fallback name when the owning process cannot be resolved.
pub const UNKNOWN_PROCESS: &str = "unknown";

/// Resolves the short executable name of the process owning `hwnd`.
///
/// Never fails: elevated processes we cannot open, or processes that
/// exited mid-pass, resolve to `"unknown"` instead.
pub fn name_for_window(hwnd: HWND) -> String {
    let mut pid = 0u32;
    // SAFETY: GetWindowThreadProcessId writes the owning PID.
    unsafe { GetWindowThreadProcessId(hwnd, Some(&mut pid)) };
    if pid == 0 {
        return UNKNOWN_PROCESS.into();
    }

    image_name(pid).unwrap_or_else(|| {
        log_debug!("could not resolve image name for pid {pid}");
        UNKNOWN_PROCESS.into()
    })
}

/// Queries the full image path for a PID and strips the directory.
fn image_name(pid: u32) -> Option<String> {
    // SAFETY: PROCESS_QUERY_LIMITED_INFORMATION is the least-privilege
    // access right that still allows QueryFullProcessImageNameW.
    let handle = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) }.ok()?;

    let mut buffer = [0u16; 260];
    let mut size = buffer.len() as u32;
    // SAFETY: buffer/size describe a valid output buffer; size is
    // updated to the number of characters written.
    let result = unsafe {
        QueryFullProcessImageNameW(handle, PROCESS_NAME_WIN32, PWSTR(buffer.as_mut_ptr()), &mut size)
    };
    // SAFETY: the handle was only opened for the query above.
    unsafe {
        let _ = CloseHandle(handle);
    }
    result.ok()?;

    let path = String::from_utf16_lossy(&buffer[..size as usize]);
    let name = path.rsplit(['\\', '/']).next().unwrap_or(&path);
    Some(name.to_string())
}
