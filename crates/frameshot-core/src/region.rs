//! Axis-aligned rectangle set algebra.
//!
//! Win32 models this with `HRGN` handles and `CombineRgn`; here it is a
//! plain value type so the occlusion logic stays pure and unit-testable.

use crate::Rect;

/// A set of screen-space rectangles supporting union and difference.
///
/// Member rectangles may overlap; the set answers coverage questions,
/// it does not maintain a minimal decomposition.
#[derive(Debug, Clone, Default)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rectangle to the covered area. Empty rectangles are ignored.
    pub fn add(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    /// Returns the parts of `rect` not covered by this region.
    ///
    /// The result is a list of disjoint rectangles; an empty list means
    /// `rect` is fully covered.
    pub fn subtract_from(&self, rect: Rect) -> Vec<Rect> {
        let mut remainder = if rect.is_empty() { Vec::new() } else { vec![rect] };

        for cover in &self.rects {
            let mut next = Vec::new();
            for piece in remainder {
                split_around(piece, cover, &mut next);
            }
            remainder = next;
            if remainder.is_empty() {
                break;
            }
        }
        remainder
    }

    /// Whether `rect` is entirely covered by this region.
    pub fn covers(&self, rect: Rect) -> bool {
        self.subtract_from(rect).is_empty()
    }
}

/// Splits `piece` around `cover`, pushing the up-to-four uncovered bands.
///
/// Top and bottom bands span the full width of `piece`; left and right
/// slivers are limited to the overlap's vertical span, so the output
/// rectangles never overlap each other.
fn split_around(piece: Rect, cover: &Rect, out: &mut Vec<Rect>) {
    let Some(overlap) = piece.intersection(cover) else {
        out.push(piece);
        return;
    };

    if overlap.y > piece.y {
        out.push(Rect::new(piece.x, piece.y, piece.width, overlap.y - piece.y));
    }
    if overlap.bottom() < piece.bottom() {
        out.push(Rect::new(
            piece.x,
            overlap.bottom(),
            piece.width,
            piece.bottom() - overlap.bottom(),
        ));
    }
    if overlap.x > piece.x {
        out.push(Rect::new(
            piece.x,
            overlap.y,
            overlap.x - piece.x,
            overlap.height,
        ));
    }
    if overlap.right() < piece.right() {
        out.push(Rect::new(
            overlap.right(),
            overlap.y,
            piece.right() - overlap.right(),
            overlap.height,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(rects: &[Rect]) -> i64 {
        rects
            .iter()
            .map(|r| i64::from(r.width) * i64::from(r.height))
            .sum()
    }

    #[test]
    fn empty_region_covers_nothing() {
        let region = Region::new();
        let rect = Rect::new(10, 10, 100, 100);

        assert!(!region.covers(rect));
        assert_eq!(region.subtract_from(rect), vec![rect]);
    }

    #[test]
    fn disjoint_rect_is_returned_whole() {
        let mut region = Region::new();
        region.add(Rect::new(0, 0, 50, 50));

        let rect = Rect::new(100, 100, 20, 20);
        assert_eq!(region.subtract_from(rect), vec![rect]);
    }

    #[test]
    fn contained_rect_is_fully_covered() {
        let mut region = Region::new();
        region.add(Rect::new(0, 0, 800, 600));

        assert!(region.covers(Rect::new(100, 100, 200, 200)));
        assert!(region.covers(Rect::new(0, 0, 800, 600)));
    }

    #[test]
    fn partial_overlap_leaves_remainder() {
        let mut region = Region::new();
        region.add(Rect::new(0, 0, 100, 100));

        // Right half is uncovered: 50..150 x 0..100 minus 0..100 cover.
        let remainder = region.subtract_from(Rect::new(50, 0, 100, 100));
        assert_eq!(area(&remainder), 50 * 100);
        assert_eq!(remainder, vec![Rect::new(100, 0, 50, 100)]);
    }

    #[test]
    fn corner_overlap_splits_into_bands() {
        let mut region = Region::new();
        region.add(Rect::new(0, 0, 50, 50));

        // Covers the top-left quarter of a 100x100 rect at the origin.
        let remainder = region.subtract_from(Rect::new(0, 0, 100, 100));
        assert_eq!(area(&remainder), 100 * 100 - 50 * 50);

        // The pieces must be disjoint.
        for (i, a) in remainder.iter().enumerate() {
            for b in remainder.iter().skip(i + 1) {
                assert!(a.intersection(b).is_none(), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn two_rects_jointly_cover() {
        let mut region = Region::new();
        region.add(Rect::new(0, 0, 50, 100));
        region.add(Rect::new(50, 0, 50, 100));

        // Neither rect alone covers it, together they do.
        assert!(region.covers(Rect::new(10, 10, 80, 80)));
    }

    #[test]
    fn empty_rects_are_ignored() {
        let mut region = Region::new();
        region.add(Rect::new(0, 0, 0, 100));
        region.add(Rect::new(0, 0, 100, 0));

        assert!(!region.covers(Rect::new(0, 0, 1, 1)));
        assert!(region.subtract_from(Rect::new(5, 5, 0, 10)).is_empty());
    }
}
