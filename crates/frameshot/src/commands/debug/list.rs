use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use frameshot_core::{Config, Rect};

/// Prints the selection pass's output as a human-readable table.
///
/// Same data as `list-windows`, for eyeballing what the pipeline keeps
/// and what it culls.
pub fn execute(config: &Config) {
    let windows =
        frameshot_windows::list_windows(&config.chrome).expect("failed to enumerate windows");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("Title"),
            Cell::new("Process"),
            Cell::new("Window bounds"),
            Cell::new("Client bounds"),
        ]);

    for info in &windows {
        table.add_row(vec![
            Cell::new(format!("0x{:X}", info.hwnd)),
            Cell::new(&info.title),
            Cell::new(&info.process_name),
            Cell::new(bounds(&info.window_bounds)),
            Cell::new(bounds(&info.client_bounds)),
        ]);
    }

    println!("{table}");
    println!("\n{} windows found", windows.len());
}

fn bounds(rect: &Rect) -> String {
    format!("{},{} {}x{}", rect.x, rect.y, rect.width, rect.height)
}
