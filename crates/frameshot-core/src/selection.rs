//! The window-selection pipeline: classify, occlusion-cull, correct, clip.
//!
//! These are pure functions over already-resolved window data, making
//! them easy to unit-test without any Win32 dependency. The platform
//! layer resolves each top-level window into a [`Candidate`] and feeds
//! them here in front-to-back Z order.

use crate::Rect;
use crate::chrome;
use crate::config::ChromeConfig;
use crate::region::Region;
use crate::window::WindowInfo;

/// Screen dimensions sampled once per enumeration pass.
///
/// `limit` is the bottom of the primary work area (excluding the
/// taskbar); every emitted rectangle is clipped against it.
#[derive(Debug, Clone, Copy)]
pub struct ScreenMetrics {
    pub width: i32,
    pub limit: i32,
}

/// A visible, non-minimized top-level window, as resolved from the OS.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub hwnd: usize,
    pub title: String,
    pub process_name: String,
    pub bounds: Rect,
    pub dpi: u32,
}

/// Whether a candidate is worth considering at all.
///
/// Rejects title-less windows (almost always non-interactive helper
/// surfaces) and anything at least as large as the screen itself —
/// those are full-screen capture/picker overlays, never application
/// windows, regardless of their title or Z position.
pub fn is_eligible(title: &str, bounds: Rect, screen: ScreenMetrics) -> bool {
    if bounds.width >= screen.width && bounds.height >= screen.limit {
        return false;
    }
    !title.is_empty()
}

/// Tracks the screen area claimed by windows accepted so far.
///
/// Candidates must arrive in front-to-back Z order: the region only
/// grows, so a window lying entirely under earlier (more frontward)
/// windows tests as hidden. State is scoped to a single enumeration
/// pass; never reuse a tracker across passes.
#[derive(Debug, Default)]
pub struct OcclusionTracker {
    occupied: Region,
}

impl OcclusionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `bounds` is entirely hidden behind accepted windows.
    pub fn is_hidden(&self, bounds: Rect) -> bool {
        self.occupied.covers(bounds)
    }

    /// Claims `bounds` for an accepted window.
    ///
    /// The full rectangle is claimed even when parts of it were already
    /// covered: partially occluded windows still report (and occupy)
    /// their complete bounds, trading geometric precision for a simple
    /// region model.
    pub fn occupy(&mut self, bounds: Rect) {
        self.occupied.add(bounds);
    }
}

/// Finalizes an accepted candidate into its output record: browser
/// chrome removed from `client_bounds`, both rectangles clipped to the
/// work area.
fn finalize(candidate: Candidate, screen: ScreenMetrics, chrome: &ChromeConfig) -> WindowInfo {
    let content = chrome::content_bounds(
        candidate.bounds,
        &candidate.process_name,
        candidate.dpi,
        chrome,
    );
    WindowInfo {
        hwnd: candidate.hwnd,
        title: candidate.title,
        process_name: candidate.process_name,
        window_bounds: chrome::clip_to_limit(candidate.bounds, screen.limit),
        client_bounds: chrome::clip_to_limit(content, screen.limit),
    }
}

/// Classifies and finalizes a single candidate outside an enumeration
/// pass, e.g. for a cursor hit test.
///
/// The same eligibility rules as a full pass apply: title-less helper
/// windows and screen-sized picker overlays yield `None`. No occlusion
/// test runs — the window under the cursor is visible there by
/// definition.
pub fn select_single(
    candidate: Candidate,
    screen: ScreenMetrics,
    chrome: &ChromeConfig,
) -> Option<WindowInfo> {
    if !is_eligible(&candidate.title, candidate.bounds, screen) {
        return None;
    }
    Some(finalize(candidate, screen, chrome))
}

/// Runs a whole selection pass over candidates in front-to-back Z order.
///
/// Accepted windows come back in acceptance order (frontmost first),
/// with browser chrome removed from `client_bounds` and both rectangles
/// clipped to the work area. Rejected candidates are dropped silently;
/// an empty input yields an empty output.
pub fn select_windows(
    candidates: impl IntoIterator<Item = Candidate>,
    screen: ScreenMetrics,
    chrome: &ChromeConfig,
) -> Vec<WindowInfo> {
    let mut tracker = OcclusionTracker::new();
    let mut accepted = Vec::new();

    for candidate in candidates {
        if !is_eligible(&candidate.title, candidate.bounds, screen) {
            continue;
        }
        if tracker.is_hidden(candidate.bounds) {
            crate::log_debug!(
                "culled occluded window 0x{:X} \"{}\"",
                candidate.hwnd,
                candidate.title
            );
            continue;
        }
        tracker.occupy(candidate.bounds);
        accepted.push(finalize(candidate, screen, chrome));
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::BASE_DPI;

    const SCREEN: ScreenMetrics = ScreenMetrics {
        width: 1920,
        limit: 1032,
    };

    fn candidate(hwnd: usize, bounds: Rect) -> Candidate {
        Candidate {
            hwnd,
            title: format!("Window {hwnd}"),
            process_name: "app.exe".into(),
            bounds,
            dpi: BASE_DPI,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let result = select_windows([], SCREEN, &ChromeConfig::default());
        assert!(result.is_empty());
    }

    #[test]
    fn screen_sized_window_is_rejected_regardless_of_title() {
        assert!(!is_eligible(
            "Some Overlay",
            Rect::new(0, 0, 1920, 1080),
            SCREEN
        ));
        // One pixel narrower than the screen is fine again.
        assert!(is_eligible(
            "Some Overlay",
            Rect::new(0, 0, 1919, 1080),
            SCREEN
        ));
    }

    #[test]
    fn titleless_window_is_rejected() {
        assert!(!is_eligible("", Rect::new(0, 0, 800, 600), SCREEN));
    }

    #[test]
    fn contained_window_behind_is_culled() {
        let mut tracker = OcclusionTracker::new();
        let front = Rect::new(0, 0, 800, 600);
        let behind = Rect::new(100, 100, 200, 200);

        assert!(!tracker.is_hidden(front));
        tracker.occupy(front);
        assert!(tracker.is_hidden(behind));
    }

    #[test]
    fn partially_visible_window_is_kept_and_claims_full_bounds() {
        let mut tracker = OcclusionTracker::new();
        let front = Rect::new(0, 0, 800, 600);
        // Sticks out 100px to the right of `front`.
        let behind = Rect::new(700, 0, 200, 200);

        tracker.occupy(front);
        assert!(!tracker.is_hidden(behind));
        tracker.occupy(behind);

        // The full rect was claimed, so anything inside the union of
        // both windows is now hidden, including the overlap.
        assert!(tracker.is_hidden(Rect::new(700, 0, 200, 200)));
        assert!(tracker.is_hidden(Rect::new(0, 0, 900, 200)));
    }

    #[test]
    fn duplicate_geometry_is_culled_disjoint_is_kept() {
        // Two stacked 800x600 windows plus a disjoint third one: the
        // duplicate behind the first must disappear.
        let input = vec![
            candidate(1, Rect::new(0, 0, 800, 600)),
            candidate(2, Rect::new(0, 0, 800, 600)),
            candidate(3, Rect::new(900, 0, 200, 200)),
        ];

        let result = select_windows(
            input,
            ScreenMetrics {
                width: 1920,
                limit: 1000,
            },
            &ChromeConfig::default(),
        );

        let hwnds: Vec<usize> = result.iter().map(|w| w.hwnd).collect();
        assert_eq!(hwnds, vec![1, 3]);
    }

    #[test]
    fn output_preserves_z_order() {
        let input = vec![
            candidate(5, Rect::new(0, 0, 100, 100)),
            candidate(7, Rect::new(200, 0, 100, 100)),
            candidate(9, Rect::new(400, 0, 100, 100)),
        ];

        let result = select_windows(input, SCREEN, &ChromeConfig::default());
        let hwnds: Vec<usize> = result.iter().map(|w| w.hwnd).collect();
        assert_eq!(hwnds, vec![5, 7, 9]);
    }

    #[test]
    fn emitted_bounds_are_clipped_to_work_area() {
        let input = vec![candidate(1, Rect::new(0, 950, 300, 200))];

        let result = select_windows(input, SCREEN, &ChromeConfig::default());

        assert_eq!(result[0].window_bounds, Rect::new(0, 950, 300, 82));
        assert_eq!(result[0].client_bounds, Rect::new(0, 950, 300, 82));
    }

    #[test]
    fn emitted_rects_never_have_negative_dimensions() {
        // A window whose top edge already sits below the work area.
        let input = vec![
            candidate(1, Rect::new(0, 1050, 300, 200)),
            candidate(2, Rect::new(500, 500, 300, 300)),
        ];

        let result = select_windows(input, SCREEN, &ChromeConfig::default());

        for info in &result {
            assert!(info.window_bounds.width >= 0);
            assert!(info.window_bounds.height >= 0);
            assert!(info.client_bounds.width >= 0);
            assert!(info.client_bounds.height >= 0);

            // Clipping zeroes the height of a window starting below the
            // work area but leaves its y untouched, so the bottom-edge
            // bound only holds when the top edge is inside the limit.
            if info.window_bounds.y <= SCREEN.limit {
                assert!(info.window_bounds.y + info.window_bounds.height <= SCREEN.limit);
            }
            if info.client_bounds.y <= SCREEN.limit {
                assert!(info.client_bounds.y + info.client_bounds.height <= SCREEN.limit);
            }
        }

        // The window entirely below the work area flattens to zero height.
        let below = result.iter().find(|w| w.hwnd == 1).unwrap();
        assert_eq!(below.window_bounds.height, 0);
        assert_eq!(below.client_bounds.height, 0);
    }

    #[test]
    fn single_candidate_rejects_titleless_and_overlay() {
        let chrome = ChromeConfig::default();

        let mut titleless = candidate(1, Rect::new(0, 0, 800, 600));
        titleless.title = String::new();
        assert!(select_single(titleless, SCREEN, &chrome).is_none());

        let overlay = candidate(2, Rect::new(0, 0, 1920, 1080));
        assert!(select_single(overlay, SCREEN, &chrome).is_none());
    }

    #[test]
    fn single_candidate_gets_chrome_inset_and_clipping() {
        let input = Candidate {
            hwnd: 1,
            title: "Docs - Chromium".into(),
            process_name: "msedge.exe".into(),
            bounds: Rect::new(0, 900, 1200, 400),
            dpi: BASE_DPI,
        };

        let info = select_single(input, SCREEN, &ChromeConfig::default())
            .expect("ordinary window should be accepted");

        assert_eq!(info.window_bounds, Rect::new(0, 900, 1200, 132));
        assert_eq!(info.client_bounds, Rect::new(0, 980, 1200, 52));
    }

    #[test]
    fn browser_window_gets_chrome_inset_before_clipping() {
        let input = vec![Candidate {
            hwnd: 1,
            title: "Docs - Chromium".into(),
            process_name: "chrome.exe".into(),
            bounds: Rect::new(50, 40, 1200, 800),
            dpi: BASE_DPI,
        }];

        let result = select_windows(input, SCREEN, &ChromeConfig::default());

        let info = &result[0];
        assert_eq!(info.window_bounds, Rect::new(50, 40, 1200, 800));
        assert_eq!(info.client_bounds.y, info.window_bounds.y + 80);
        assert_eq!(info.client_bounds.height, info.window_bounds.height - 80);
    }
}
