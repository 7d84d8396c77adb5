pub mod chrome;
pub mod config;
pub mod log;
pub mod rect;
pub mod region;
pub mod selection;
pub mod window;

pub use config::Config;
pub use rect::Rect;
pub use region::Region;
pub use selection::{Candidate, OcclusionTracker, ScreenMetrics, select_single, select_windows};
pub use window::{WindowInfo, WindowResult};
