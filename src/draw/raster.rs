//! Brush rasterization onto a [`PixelSurface`].
//!
//! All shapes are built from the square brush: a brush of side `size` placed
//! at pixel `(x, y)` covers `[x - size/2, x - size/2 + size)` on both axes.
//! Everything is clipped to the surface; nothing here can fail.

use rand::Rng;

use super::{Color, PixelSurface};
use crate::util::Rect;

/// Top-left pixel of a brush square of side `size` centered on `(x, y)`.
///
/// Saturates at the `i32` range; such squares are far off any surface anyway.
pub fn brush_origin(x: i32, y: i32, size: u32) -> (i32, i32) {
    let half = i32::try_from(size / 2).unwrap_or(i32::MAX);
    (x.saturating_sub(half), y.saturating_sub(half))
}

/// Stamps a filled brush square. Size 0 draws nothing.
pub fn stamp_square(
    surface: &mut PixelSurface,
    x: i32,
    y: i32,
    size: u32,
    color: Color,
) -> Option<Rect> {
    if size == 0 {
        return None;
    }
    let (x0, y0) = brush_origin(x, y, size);
    let side = i32::try_from(size).unwrap_or(i32::MAX);
    surface.fill_rect(x0, y0, side, side, color)
}

/// Integer Bresenham walk from `from` to `to`, both endpoints included.
///
/// Steps are computed lazily in `i64`, so any pair of `i32` endpoints is safe.
pub fn line_points(from: (i32, i32), to: (i32, i32)) -> LinePoints {
    let (x, y) = (i64::from(from.0), i64::from(from.1));
    let (x1, y1) = (i64::from(to.0), i64::from(to.1));
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    LinePoints {
        x,
        y,
        x1,
        y1,
        dx,
        dy,
        sx: if x < x1 { 1 } else { -1 },
        sy: if y < y1 { 1 } else { -1 },
        err: dx + dy,
        done: false,
    }
}

/// Iterator returned by [`line_points`].
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // Every visited point lies between two i32 endpoints
        let point = (self.x as i32, self.y as i32);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.x += self.sx;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }
        Some(point)
    }
}

/// Clips a segment to the inclusive box `min..=max` (Liang-Barsky).
///
/// Endpoints already inside the box are returned unchanged.
fn clip_segment(
    from: (i32, i32),
    to: (i32, i32),
    min: (i64, i64),
    max: (i64, i64),
) -> Option<((i32, i32), (i32, i32))> {
    let (x0, y0) = (f64::from(from.0), f64::from(from.1));
    let (dx, dy) = (f64::from(to.0) - x0, f64::from(to.1) - y0);
    let (min_x, min_y) = (min.0 as f64, min.1 as f64);
    let (max_x, max_y) = (max.0 as f64, max.1 as f64);

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in [
        (-dx, x0 - min_x),
        (dx, max_x - x0),
        (-dy, y0 - min_y),
        (dy, max_y - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| ((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
    let start = if t0 > 0.0 { at(t0) } else { from };
    let end = if t1 < 1.0 { at(t1) } else { to };
    Some((start, end))
}

/// Bounding box of a swept segment, clipped to a `width` x `height` surface.
pub fn segment_bounds(
    from: (i32, i32),
    to: (i32, i32),
    size: u32,
    width: u32,
    height: u32,
) -> Option<Rect> {
    if size == 0 {
        return None;
    }
    let half = i64::from(size / 2);
    let side = i64::from(size);
    let clamp = |v: i64, limit: u32| {
        i32::try_from(v.clamp(0, i64::from(limit))).unwrap_or(i32::MAX)
    };
    let min_x = i64::from(from.0.min(to.0)) - half;
    let min_y = i64::from(from.1.min(to.1)) - half;
    let max_x = i64::from(from.0.max(to.0)) - half + side;
    let max_y = i64::from(from.1.max(to.1)) - half + side;
    Rect::from_min_max(
        clamp(min_x, width),
        clamp(min_y, height),
        clamp(max_x, width),
        clamp(max_y, height),
    )
}

/// Draws a straight segment of stroke width `size` by sweeping the brush
/// square along the Bresenham path.
///
/// The path is first clipped to the surface grown by `size` on every side,
/// so far off-canvas endpoints cost no more than on-canvas ones.
/// A zero-length segment is a single stamp; width 0 draws nothing.
pub fn stroke_segment(
    surface: &mut PixelSurface,
    from: (i32, i32),
    to: (i32, i32),
    size: u32,
    color: Color,
) -> Option<Rect> {
    if size == 0 {
        return None;
    }
    let reach = i64::from(size);
    let (start, end) = clip_segment(
        from,
        to,
        (-reach, -reach),
        (
            i64::from(surface.width()) - 1 + reach,
            i64::from(surface.height()) - 1 + reach,
        ),
    )?;
    line_points(start, end).fold(None, |damage, (x, y)| {
        Rect::union_opt(damage, stamp_square(surface, x, y, size, color))
    })
}

/// Offsets of the brush square that fall inside its inscribed circle.
///
/// Offsets are relative to the brush center pixel and satisfy
/// `dx² + dy² <= (size/2)²`.
pub fn airbrush_offsets(size: u32) -> impl Iterator<Item = (i32, i32)> {
    let half = (size / 2) as i64;
    let lo = -half;
    let hi = size as i64 - half;
    (lo..hi).flat_map(move |dy| {
        (lo..hi)
            .filter(move |dx| dx * dx + dy * dy <= half * half)
            .map(move |dx| (dx as i32, dy as i32))
    })
}

/// Sprays single pixels inside the inscribed circle of the brush square.
///
/// Each qualifying offset is painted with probability `density`.
pub fn spray<R: Rng + ?Sized>(
    surface: &mut PixelSurface,
    x: i32,
    y: i32,
    size: u32,
    color: Color,
    density: f64,
    rng: &mut R,
) -> Option<Rect> {
    let mut damage = None;
    for (dx, dy) in airbrush_offsets(size) {
        if !rng.gen_bool(density) {
            continue;
        }
        let (Some(px), Some(py)) = (x.checked_add(dx), y.checked_add(dy)) else {
            continue;
        };
        if surface.put_clipped(px, py, color) {
            damage = Rect::union_opt(damage, Rect::new(px, py, 1, 1));
        }
    }
    damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn painted(surface: &PixelSurface) -> HashSet<(i32, i32)> {
        surface
            .pixels()
            .filter(|(_, _, c)| *c != WHITE)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn stamp_centers_on_pixel() {
        let mut surface = PixelSurface::new(10, 10, WHITE).unwrap();
        let damage = stamp_square(&mut surface, 5, 5, 2, BLACK);
        assert_eq!(damage, Rect::new(4, 4, 2, 2));
        let expected: HashSet<_> = [(4, 4), (5, 4), (4, 5), (5, 5)].into_iter().collect();
        assert_eq!(painted(&surface), expected);

        let mut surface = PixelSurface::new(10, 10, WHITE).unwrap();
        stamp_square(&mut surface, 5, 5, 3, BLACK);
        assert_eq!(painted(&surface).len(), 9);
        assert_eq!(surface.get(6, 6).unwrap(), BLACK);
    }

    #[test]
    fn stamp_of_size_zero_is_a_no_op() {
        let mut surface = PixelSurface::new(4, 4, WHITE).unwrap();
        assert!(stamp_square(&mut surface, 1, 1, 0, BLACK).is_none());
        assert!(stroke_segment(&mut surface, (0, 0), (3, 3), 0, BLACK).is_none());
        assert!(painted(&surface).is_empty());
    }

    #[test]
    fn line_points_cover_both_endpoints_without_gaps() {
        let points: Vec<_> = line_points((0, 0), (7, 3)).collect();
        assert_eq!(points.first(), Some(&(0, 0)));
        assert_eq!(points.last(), Some(&(7, 3)));
        assert_eq!(points.len(), 8);
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
        }
        assert_eq!(line_points((2, 2), (2, 2)).collect::<Vec<_>>(), vec![(2, 2)]);
        assert_eq!(line_points((3, 0), (0, 0)).count(), 4);
    }

    #[test]
    fn unit_diagonal_paints_exactly_the_diagonal() {
        let mut surface = PixelSurface::new(10, 10, WHITE).unwrap();
        let damage = stroke_segment(&mut surface, (0, 0), (9, 9), 1, BLACK);
        assert_eq!(damage, Rect::new(0, 0, 10, 10));
        let expected: HashSet<_> = (0..10).map(|i| (i, i)).collect();
        assert_eq!(painted(&surface), expected);
    }

    #[test]
    fn segment_bounds_match_painted_area() {
        let mut surface = PixelSurface::new(20, 20, WHITE).unwrap();
        let damage = stroke_segment(&mut surface, (12, 3), (4, 9), 3, BLACK);
        assert_eq!(damage, segment_bounds((12, 3), (4, 9), 3, 20, 20));
        assert_eq!(segment_bounds((1, 1), (1, 1), 0, 20, 20), None);
        assert_eq!(
            segment_bounds((-5, 2), (30, 2), 1, 20, 20),
            Rect::new(0, 2, 20, 1)
        );
    }

    #[test]
    fn segment_leaving_the_surface_is_clipped() {
        let mut surface = PixelSurface::new(5, 5, WHITE).unwrap();
        let damage = stroke_segment(&mut surface, (2, 2), (20, 2), 1, BLACK);
        assert_eq!(damage, Rect::new(2, 2, 3, 1));
        assert_eq!(painted(&surface).len(), 3);
    }

    #[test]
    fn line_points_handle_extreme_endpoints() {
        let mut walk = line_points((i32::MIN, 0), (i32::MAX, 0));
        assert_eq!(walk.next(), Some((i32::MIN, 0)));
        assert_eq!(walk.next(), Some((i32::MIN + 1, 0)));

        let mut walk = line_points((i32::MAX, i32::MIN), (i32::MIN, i32::MAX));
        assert_eq!(walk.next(), Some((i32::MAX, i32::MIN)));
        assert_eq!(walk.next(), Some((i32::MAX - 1, i32::MIN + 1)));
    }

    #[test]
    fn far_off_canvas_segments_are_clipped_first() {
        let mut surface = PixelSurface::new(10, 10, WHITE).unwrap();
        let damage = stroke_segment(&mut surface, (i32::MIN, 4), (i32::MAX, 4), 3, BLACK);
        assert_eq!(damage, Rect::new(0, 3, 10, 3));
        assert_eq!(painted(&surface).len(), 30);

        let mut surface = PixelSurface::new(10, 10, WHITE).unwrap();
        let damage = stroke_segment(&mut surface, (5, 5), (50_000_000, 5), 1, BLACK);
        assert_eq!(damage, Rect::new(5, 5, 5, 1));

        let mut surface = PixelSurface::new(10, 10, WHITE).unwrap();
        assert!(stroke_segment(&mut surface, (i32::MIN, i32::MIN), (i32::MIN, i32::MAX), 4, BLACK)
            .is_none());
        assert!(stroke_segment(&mut surface, (-40, 0), (0, -40), 2, BLACK).is_none());
        assert!(painted(&surface).is_empty());

        assert!(stamp_square(&mut surface, i32::MIN, i32::MAX, 7, BLACK).is_none());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(spray(&mut surface, i32::MAX, i32::MIN, 9, BLACK, 1.0, &mut rng).is_none());
    }

    #[test]
    fn clipped_diagonal_stays_on_its_path() {
        let mut surface = PixelSurface::new(10, 10, WHITE).unwrap();
        stroke_segment(&mut surface, (-1000, -1000), (1000, 1000), 1, BLACK);
        let expected: HashSet<_> = (0..10).map(|i| (i, i)).collect();
        assert_eq!(painted(&surface), expected);
    }

    #[test]
    fn airbrush_mask_is_the_inscribed_circle() {
        let offsets: HashSet<_> = airbrush_offsets(5).collect();
        assert_eq!(offsets.len(), 13);
        assert!(offsets.contains(&(0, -2)));
        assert!(offsets.contains(&(1, 1)));
        assert!(!offsets.contains(&(2, 2)));
        assert!(!offsets.contains(&(-2, 1)));

        assert_eq!(airbrush_offsets(1).collect::<Vec<_>>(), vec![(0, 0)]);
        assert_eq!(airbrush_offsets(0).count(), 0);
    }

    #[test]
    fn spray_never_leaves_the_mask() {
        let mask: HashSet<_> = airbrush_offsets(8).map(|(dx, dy)| (10 + dx, 10 + dy)).collect();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut surface = PixelSurface::new(20, 20, WHITE).unwrap();
            spray(&mut surface, 10, 10, 8, BLACK, 0.5, &mut rng);
            assert!(painted(&surface).is_subset(&mask));
        }
    }

    #[test]
    fn spray_density_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut surface = PixelSurface::new(20, 20, WHITE).unwrap();
        assert!(spray(&mut surface, 10, 10, 6, BLACK, 0.0, &mut rng).is_none());
        assert!(painted(&surface).is_empty());

        spray(&mut surface, 10, 10, 6, BLACK, 1.0, &mut rng);
        let mask: HashSet<_> = airbrush_offsets(6).map(|(dx, dy)| (10 + dx, 10 + dy)).collect();
        assert_eq!(painted(&surface), mask);
    }
}
