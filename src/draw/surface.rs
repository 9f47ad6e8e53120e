//! The committed pixel buffer.

use super::Color;
use crate::error::PaintError;
use crate::util::Rect;

/// Raw RGBA8 pixel data exchanged with the shell.
///
/// Image codecs live outside the core: a loader hands decoded pixels in as a
/// `RasterImage`, and a save operation receives one from
/// [`PixelSurface::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA bytes, `width * height * 4` long
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Color of pixel `(x, y)`, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some(Color::new(px[0], px[1], px[2], px[3]))
    }
}

/// Mutable width x height grid of RGBA colors.
///
/// Every in-range coordinate always holds a color. Dimensions change only by
/// swapping the whole buffer through [`replace`](Self::replace) or
/// [`replace_with_image`](Self::replace_with_image).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

/// Largest accepted surface width or height.
pub const MAX_DIMENSION: u32 = 8192;

fn check_dimensions(width: u32, height: u32) -> Result<usize, PaintError> {
    if width == 0 || height == 0 {
        return Err(PaintError::invalid(format!(
            "surface dimensions must be positive, got {width}x{height}"
        )));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(PaintError::invalid(format!(
            "surface {width}x{height} exceeds the {MAX_DIMENSION}x{MAX_DIMENSION} limit"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PaintError::invalid(format!("surface {width}x{height} is too large")))
}

impl PixelSurface {
    /// Creates a surface filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self, PaintError> {
        let len = check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Adopts decoded pixel data as-is.
    pub fn from_image(image: RasterImage) -> Result<Self, PaintError> {
        let len = check_dimensions(image.width, image.height)?;
        if image.data.len() != len * 4 {
            return Err(PaintError::invalid(format!(
                "raster data holds {} bytes, expected {} for {}x{} RGBA",
                image.data.len(),
                len * 4,
                image.width,
                image.height
            )));
        }
        let pixels = image
            .data
            .chunks_exact(4)
            .map(|px| Color::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width: image.width,
            height: image.height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whole-surface rectangle.
    pub fn bounds(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.width as i32,
            height: self.height as i32,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, PaintError> {
        if !self.contains(x, y) {
            return Err(PaintError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Reads pixel `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<Color, PaintError> {
        let i = self.index(x, y)?;
        Ok(self.pixels[i])
    }

    /// Overwrites pixel `(x, y)` without blending.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<(), PaintError> {
        let i = self.index(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Writes a pixel if it is inside the surface. Returns whether it was written.
    pub fn put_clipped(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Ok(i) => {
                self.pixels[i] = color;
                true
            }
            Err(_) => false,
        }
    }

    /// Fills a rectangle, silently clipped to the surface.
    ///
    /// Returns the clipped rectangle actually written, if any.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32, color: Color) -> Option<Rect> {
        let clipped = Rect::new(x0, y0, w, h)?.clip_to_bounds(self.width, self.height)?;
        let stride = self.width as usize;
        for y in clipped.y..clipped.y + clipped.height {
            let row = y as usize * stride;
            let start = row + clipped.x as usize;
            self.pixels[start..start + clipped.width as usize].fill(color);
        }
        Some(clipped)
    }

    /// Discards the buffer and allocates a new one filled with `fill`.
    ///
    /// On error the current buffer is left untouched.
    pub fn replace(&mut self, width: u32, height: u32, fill: Color) -> Result<(), PaintError> {
        *self = Self::new(width, height, fill)?;
        Ok(())
    }

    /// Discards the buffer and adopts `image`.
    ///
    /// On error the current buffer is left untouched.
    pub fn replace_with_image(&mut self, image: RasterImage) -> Result<(), PaintError> {
        *self = Self::from_image(image)?;
        Ok(())
    }

    /// Copies the committed pixels out as RGBA bytes.
    pub fn snapshot(&self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            data: self.pixels.iter().flat_map(|c| c.to_rgba()).collect(),
        }
    }

    /// Iterates over `(x, y, color)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        let width = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i % width) as i32, (i / width) as i32, *c))
    }

    /// Number of pixels whose color differs from `color`.
    pub fn count_not(&self, color: Color) -> usize {
        self.pixels.iter().filter(|c| **c != color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, RED, WHITE};

    #[test]
    fn set_then_get_returns_same_color() {
        let mut surface = PixelSurface::new(4, 3, WHITE).unwrap();
        for (x, y) in [(0, 0), (3, 2), (1, 2)] {
            surface.set(x, y, RED).unwrap();
            assert_eq!(surface.get(x, y).unwrap(), RED);
        }
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut surface = PixelSurface::new(4, 3, WHITE).unwrap();
        assert_eq!(
            surface.get(4, 0),
            Err(PaintError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(surface.get(-1, 0).is_err());
        assert!(surface.set(0, 3, RED).is_err());
        assert_eq!(surface.count_not(WHITE), 0);
    }

    #[test]
    fn fill_rect_clips_partial_overlap() {
        let mut surface = PixelSurface::new(5, 5, WHITE).unwrap();
        let written = surface.fill_rect(-1, 3, 3, 4, BLACK);
        assert_eq!(written, Rect::new(0, 3, 2, 2));
        assert_eq!(surface.count_not(WHITE), 4);
        assert_eq!(surface.get(1, 4).unwrap(), BLACK);
        assert!(surface.fill_rect(7, 7, 2, 2, BLACK).is_none());
        assert!(surface.fill_rect(1, 1, 0, 2, BLACK).is_none());
    }

    #[test]
    fn replace_fills_every_pixel() {
        let mut surface = PixelSurface::new(2, 2, WHITE).unwrap();
        surface.set(0, 0, RED).unwrap();
        surface.replace(3, 7, BLACK).unwrap();
        assert_eq!((surface.width(), surface.height()), (3, 7));
        assert!(surface.pixels().all(|(_, _, c)| c == BLACK));
    }

    #[test]
    fn failed_replace_keeps_old_buffer() {
        let mut surface = PixelSurface::new(2, 2, WHITE).unwrap();
        assert!(surface.replace(0, 5, BLACK).is_err());
        assert!(surface.replace(MAX_DIMENSION + 1, 1, BLACK).is_err());
        assert!(surface.replace(1, 100_000, BLACK).is_err());
        let bad = RasterImage {
            width: 2,
            height: 2,
            data: vec![0; 15],
        };
        assert!(matches!(
            surface.replace_with_image(bad),
            Err(PaintError::InvalidArgument(_))
        ));
        assert_eq!((surface.width(), surface.height()), (2, 2));
        assert_eq!(surface.count_not(WHITE), 0);
    }

    #[test]
    fn image_round_trips_through_snapshot() {
        let image = RasterImage {
            width: 2,
            height: 1,
            data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        };
        let mut surface = PixelSurface::new(9, 9, WHITE).unwrap();
        surface.replace_with_image(image.clone()).unwrap();
        assert_eq!(surface.get(1, 0).unwrap(), Color::new(5, 6, 7, 8));
        assert_eq!(surface.snapshot(), image);
        assert_eq!(image.pixel(0, 0), Some(Color::new(1, 2, 3, 4)));
        assert_eq!(image.pixel(2, 0), None);
    }
}
