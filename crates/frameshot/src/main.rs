mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "frameshot",
    version,
    about = "Enumerates visible windows and their on-screen geometry"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List visible windows as JSON, frontmost first
    ListWindows,
    /// Report the window under the mouse cursor as JSON
    GetWindowAtCursor,
    /// Debugging and inspection tools
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
}

#[derive(Subcommand)]
enum DebugCommands {
    /// Show the accepted windows as a human-readable table
    List,
}

fn main() {
    let cli = Cli::parse();

    let config = frameshot_core::config::load();
    frameshot_core::log::init(&config.log);

    // Per-monitor awareness must be set before any geometry query, or
    // Windows hands back virtualized coordinates on scaled monitors.
    frameshot_windows::dpi::enable_dpi_awareness();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::ListWindows => commands::list_windows::execute(&config),
        Commands::GetWindowAtCursor => commands::window_at_cursor::execute(&config),
        Commands::Debug { command } => match command {
            DebugCommands::List => commands::debug::list::execute(&config),
        },
    }
}
