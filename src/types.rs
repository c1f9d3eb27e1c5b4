//! Shared boundary types for the shape viewer.
//!
//! This module defines the two key data contracts:
//! - Scene → Renderer (in-memory): `DrawCmd`, the primitive commands a
//!   drawing context records
//! - Renderer → Viewer (in-memory): `Pixmap`, the rasterized RGBA frame

// ---------------------------------------------------------------------------
// Geometry primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

// ---------------------------------------------------------------------------
// Stroke style
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
}

/// Outline style applied to every primitive: solid, one pixel wide, no fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub color: Rgb,
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke { color: Rgb::BLACK }
    }
}

// ---------------------------------------------------------------------------
// Scene → Renderer boundary
// ---------------------------------------------------------------------------

/// One primitive draw command recorded by a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    Line {
        start: Point,
        end: Point,
        stroke: Stroke,
    },
    /// Outline of the rectangle spanning `origin` to `origin + size`.
    Rect {
        origin: Point,
        size: Size,
        stroke: Stroke,
    },
    /// Outline of the ellipse inscribed in that same bounding box.
    Ellipse {
        origin: Point,
        size: Size,
        stroke: Stroke,
    },
    /// Closed outline: the last point connects back to the first.
    Polygon {
        points: Vec<Point>,
        stroke: Stroke,
    },
}

/// Pixel dimensions of the target surface, shared by renderer and viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceContract {
    pub width: u32,
    pub height: u32,
}

// ---------------------------------------------------------------------------
// Renderer → Viewer boundary
// ---------------------------------------------------------------------------

/// Row-major RGBA8 pixel buffer.
///
/// Writes outside the surface are silently dropped; that bounds check is the
/// renderer's entire clipping discipline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Pixmap {
    pub fn filled(contract: SurfaceContract, color: Rgb) -> Self {
        let count = (contract.width * contract.height) as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
        Pixmap {
            width: contract.width,
            height: contract.height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 0xff]);
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        Some(Rgb {
            r: self.pixels[i],
            g: self.pixels[i + 1],
            b: self.pixels[i + 2],
        })
    }

    /// Raw RGBA bytes, row-major, for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get_round_trip() {
        let contract = SurfaceContract {
            width: 4,
            height: 3,
        };
        let mut pixmap = Pixmap::filled(contract, Rgb::WHITE);
        pixmap.put(2, 1, Rgb::BLACK);
        assert_eq!(pixmap.get(2, 1), Some(Rgb::BLACK));
        assert_eq!(pixmap.get(1, 1), Some(Rgb::WHITE));
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let contract = SurfaceContract {
            width: 4,
            height: 3,
        };
        let mut pixmap = Pixmap::filled(contract, Rgb::WHITE);
        pixmap.put(-1, 0, Rgb::BLACK);
        pixmap.put(4, 0, Rgb::BLACK);
        pixmap.put(0, 3, Rgb::BLACK);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(pixmap.get(x, y), Some(Rgb::WHITE));
            }
        }
        assert_eq!(pixmap.get(4, 0), None);
        assert_eq!(pixmap.get(0, -1), None);
    }
}
