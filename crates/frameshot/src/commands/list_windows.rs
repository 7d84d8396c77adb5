use frameshot_core::{Config, WindowInfo, log_error};
use serde::Serialize;

use super::print_json;

/// JSON envelope for `list-windows`.
#[derive(Serialize)]
struct ListResponse {
    success: bool,
    windows: Vec<WindowInfo>,
}

/// Prints every visible window as a single JSON object on stdout.
///
/// An enumeration failure is reported as an empty window list, not as
/// an error: callers treat "no windows" as a normal answer.
pub fn execute(config: &Config) {
    let windows = match frameshot_windows::list_windows(&config.chrome) {
        Ok(windows) => windows,
        Err(e) => {
            log_error!("list-windows: {e}");
            Vec::new()
        }
    };

    print_json(&ListResponse {
        success: true,
        windows,
    });
}
