use frameshot_core::{Config, WindowInfo};
use serde::Serialize;

use super::print_json;

/// JSON envelope for a successful cursor hit.
#[derive(Serialize)]
struct HitResponse {
    success: bool,
    window: WindowInfo,
}

/// JSON envelope when no capturable window is under the cursor.
#[derive(Serialize)]
struct MissResponse {
    success: bool,
    error: String,
}

/// Prints the window under the mouse cursor as JSON.
///
/// A miss (no window, or an invisible/minimized one) reports
/// `"success": false` with exit code 0; the caller decides what a miss
/// means for its UI.
pub fn execute(config: &Config) {
    match frameshot_windows::window_at_cursor(&config.chrome) {
        Ok(window) => print_json(&HitResponse {
            success: true,
            window,
        }),
        Err(e) => print_json(&MissResponse {
            success: false,
            error: e.to_string(),
        }),
    }
}
