//! Accumulated graph polyline.
//!
//! Samples arrive once per frame but the graph advances only ~1.3 px per
//! second, so most samples land on the pixel of their predecessor. Those are
//! skipped on insert, which keeps a full heating and cooling run well inside
//! the fixed buffer.
//!
//! # Thinning
//!
//! If a very long run does fill the buffer, every second interior point is
//! dropped. The first and the newest point always survive, so the polyline
//! still spans the whole run, just with coarser segments.

use embedded_graphics::prelude::Point;
use heapless::Vec;

/// Maximum number of stored points before thinning kicks in.
pub const SERIES_CAPACITY: usize = 1024;

/// Ordered, append-only list of graph pixels.
#[derive(Clone, Debug, Default)]
pub struct GraphSeries {
    points: Vec<Point, SERIES_CAPACITY>,
}

impl GraphSeries {
    pub const fn new() -> Self { Self { points: Vec::new() } }

    /// Clear the series and start it at `anchor`.
    pub fn reset(
        &mut self,
        anchor: Point,
    ) {
        self.points.clear();
        self.points.push(anchor).ok();
    }

    /// Append a point unless it repeats the last one.
    ///
    /// Returns `true` if the point was stored.
    pub fn push(
        &mut self,
        point: Point,
    ) -> bool {
        if self.points.last() == Some(&point) {
            return false;
        }
        if self.points.is_full() {
            self.thin();
        }
        self.points.push(point).is_ok()
    }

    /// Drop every second interior point, keeping the first and last.
    fn thin(&mut self) {
        let len = self.points.len();
        if len < 3 {
            return;
        }

        let mut write = 1;
        for read in 1..len {
            if read % 2 == 0 || read == len - 1 {
                self.points[write] = self.points[read];
                write += 1;
            }
        }
        self.points.truncate(write);
    }

    /// Stored points, oldest first.
    #[inline]
    pub fn points(&self) -> &[Point] { &self.points }

    #[inline]
    pub fn len(&self) -> usize { self.points.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Most recent point.
    #[inline]
    pub fn last(&self) -> Option<Point> { self.points.last().copied() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_new_is_empty() {
        let series = GraphSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.last(), None);
    }

    #[test]
    fn test_reset_starts_at_anchor() {
        let mut series = GraphSeries::new();
        series.push(Point::new(1, 1));
        series.push(Point::new(2, 2));

        series.reset(Point::new(157, 190));
        assert_eq!(series.points(), &[Point::new(157, 190)]);
    }

    #[test]
    fn test_push_skips_repeated_pixel() {
        let mut series = GraphSeries::new();
        series.reset(Point::new(10, 10));

        assert!(!series.push(Point::new(10, 10)), "same pixel as anchor");
        assert!(series.push(Point::new(11, 10)));
        assert!(!series.push(Point::new(11, 10)));
        assert!(series.push(Point::new(10, 10)), "only consecutive repeats are skipped");
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut series = GraphSeries::new();
        for x in 0..5 {
            series.push(Point::new(x, 0));
        }
        let xs: Vec<i32, 8> = series.points().iter().map(|p| p.x).collect();
        assert_eq!(xs.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_full_series_is_thinned() {
        let mut series = GraphSeries::new();
        for x in 0..SERIES_CAPACITY as i32 {
            series.push(Point::new(x, 0));
        }
        assert_eq!(series.len(), SERIES_CAPACITY);

        assert!(series.push(Point::new(5_000, 0)));
        // first + 511 even interior points + last before push + new point
        assert_eq!(series.len(), SERIES_CAPACITY / 2 + 2);
        assert_eq!(series.points()[0], Point::new(0, 0), "first point survives thinning");
        assert_eq!(series.last(), Some(Point::new(5_000, 0)));
        assert!(
            series.points().windows(2).all(|w| w[0].x < w[1].x),
            "thinning keeps chronological order"
        );
    }

    #[test]
    fn test_thin_keeps_previous_last_point() {
        let mut series = GraphSeries::new();
        for x in 0..SERIES_CAPACITY as i32 {
            series.push(Point::new(x, 0));
        }
        series.push(Point::new(5_000, 0));

        let n = series.len();
        assert_eq!(series.points()[n - 2], Point::new(SERIES_CAPACITY as i32 - 1, 0));
    }
}
