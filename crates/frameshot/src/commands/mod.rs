pub mod debug;
pub mod init;
pub mod list_windows;
pub mod window_at_cursor;

/// Prints a value as one line of JSON on stdout.
///
/// Serialization of these response types cannot realistically fail, but
/// stdout must always carry valid JSON, so the fallback is hand-rolled.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{{\"success\":false,\"error\":\"serialization failed\"}}"),
    }
}
