//! Renderer — the deterministic software rasterizer.
//!
//! Takes recorded `DrawCmd`s (in-memory, from a canvas) and produces a
//! `Pixmap` (for the viewer to present).
//!
//! The renderer is pure and stateless. Given the same commands, it always
//! produces the same pixels. It knows nothing about shapes, windows, or
//! GPUs, and it never fails: out-of-bounds geometry is clipped per pixel,
//! degenerate geometry simply renders degenerately.

use crate::types::{DrawCmd, Pixmap, Point, Rgb, Size, SurfaceContract};

/// Background the frame is cleared to before any stroking.
const BACKGROUND: Rgb = Rgb::WHITE;

/// Chord count used to flatten an ellipse outline into a closed polyline.
const ELLIPSE_SEGMENTS: u32 = 64;

pub struct Renderer;

impl Renderer {
    /// Rasterize a command list onto a fresh frame of the given dimensions.
    pub fn render(cmds: &[DrawCmd], contract: SurfaceContract) -> Pixmap {
        let mut pixmap = Pixmap::filled(contract, BACKGROUND);
        for cmd in cmds {
            Self::rasterize(cmd, &mut pixmap);
        }
        pixmap
    }

    fn rasterize(cmd: &DrawCmd, pixmap: &mut Pixmap) {
        match cmd {
            DrawCmd::Line { start, end, stroke } => {
                Self::stroke_line(pixmap, *start, *end, stroke.color);
            }
            DrawCmd::Rect {
                origin,
                size,
                stroke,
            } => {
                Self::stroke_rect(pixmap, *origin, *size, stroke.color);
            }
            DrawCmd::Ellipse {
                origin,
                size,
                stroke,
            } => {
                let points = Self::ellipse_points(*origin, *size);
                Self::stroke_polygon(pixmap, &points, stroke.color);
            }
            DrawCmd::Polygon { points, stroke } => {
                Self::stroke_polygon(pixmap, points, stroke.color);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Primitive stroking
    // -----------------------------------------------------------------------

    /// Bresenham over all octants; both endpoints are painted.
    fn stroke_line(pixmap: &mut Pixmap, a: Point, b: Point, color: Rgb) {
        // i64 throughout so extreme endpoint pairs cannot overflow the error
        // terms; the plotted range stays within the i32 endpoints.
        let (mut x, mut y) = (i64::from(a.x), i64::from(a.y));
        let (bx, by) = (i64::from(b.x), i64::from(b.y));
        let dx = (bx - x).abs();
        let dy = -(by - y).abs();
        let sx = if x < bx { 1 } else { -1 };
        let sy = if y < by { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            pixmap.put(x as i32, y as i32, color);
            if x == bx && y == by {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Rectangle outline with inclusive edges, as a closed 4-corner polygon.
    fn stroke_rect(pixmap: &mut Pixmap, origin: Point, size: Size, color: Rgb) {
        let corners = [
            origin,
            Point::new(origin.x + size.width, origin.y),
            Point::new(origin.x + size.width, origin.y + size.height),
            Point::new(origin.x, origin.y + size.height),
        ];
        Self::stroke_polygon(pixmap, &corners, color);
    }

    /// Closed outline: each consecutive pair plus the edge back to the first
    /// point. A single point degenerates to one pixel.
    fn stroke_polygon(pixmap: &mut Pixmap, points: &[Point], color: Rgb) {
        if points.is_empty() {
            return;
        }
        for i in 0..points.len() {
            let next = points[(i + 1) % points.len()];
            Self::stroke_line(pixmap, points[i], next, color);
        }
    }

    /// Flatten the ellipse inscribed in the bounding box into a chord
    /// polyline. The four cardinal extremes of the box land exactly.
    fn ellipse_points(origin: Point, size: Size) -> Vec<Point> {
        let rx = f64::from(size.width) / 2.0;
        let ry = f64::from(size.height) / 2.0;
        let cx = f64::from(origin.x) + rx;
        let cy = f64::from(origin.y) + ry;

        (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let t = f64::from(i) / f64::from(ELLIPSE_SEGMENTS) * std::f64::consts::TAU;
                Point::new(
                    (cx + rx * t.cos()).round() as i32,
                    (cy + ry * t.sin()).round() as i32,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stroke;

    const CONTRACT: SurfaceContract = SurfaceContract {
        width: 380,
        height: 300,
    };

    fn assert_background(pixmap: &Pixmap, x: i32, y: i32) {
        assert_eq!(pixmap.get(x, y), Some(BACKGROUND), "pixel ({x},{y})");
    }

    fn assert_stroked(pixmap: &Pixmap, x: i32, y: i32) {
        assert_eq!(pixmap.get(x, y), Some(Rgb::BLACK), "pixel ({x},{y})");
    }

    #[test]
    fn no_commands_yields_an_all_background_frame() {
        let pixmap = Renderer::render(&[], CONTRACT);
        for y in 0..CONTRACT.height as i32 {
            for x in 0..CONTRACT.width as i32 {
                assert_eq!(pixmap.get(x, y), Some(BACKGROUND));
            }
        }
    }

    #[test]
    fn horizontal_line_paints_exactly_its_inclusive_span() {
        let cmd = DrawCmd::Line {
            start: Point::new(20, 20),
            end: Point::new(100, 20),
            stroke: Stroke::default(),
        };
        let pixmap = Renderer::render(&[cmd], CONTRACT);

        for x in 20..=100 {
            assert_stroked(&pixmap, x, 20);
        }
        assert_background(&pixmap, 19, 20);
        assert_background(&pixmap, 101, 20);
        assert_background(&pixmap, 60, 19);
        assert_background(&pixmap, 60, 21);
    }

    #[test]
    fn diagonal_line_paints_both_endpoints() {
        let cmd = DrawCmd::Line {
            start: Point::new(10, 30),
            end: Point::new(37, 5),
            stroke: Stroke::default(),
        };
        let pixmap = Renderer::render(&[cmd], CONTRACT);
        assert_stroked(&pixmap, 10, 30);
        assert_stroked(&pixmap, 37, 5);
    }

    #[test]
    fn rect_strokes_all_four_corners_and_leaves_the_interior_untouched() {
        let cmd = DrawCmd::Rect {
            origin: Point::new(10, 150),
            size: Size::new(100, 100),
            stroke: Stroke::default(),
        };
        let pixmap = Renderer::render(&[cmd], CONTRACT);

        assert_stroked(&pixmap, 10, 150);
        assert_stroked(&pixmap, 110, 150);
        assert_stroked(&pixmap, 110, 250);
        assert_stroked(&pixmap, 10, 250);
        // Edge midpoints.
        assert_stroked(&pixmap, 60, 150);
        assert_stroked(&pixmap, 10, 200);
        // Interior stays clear: outline only, no fill.
        assert_background(&pixmap, 60, 200);
    }

    #[test]
    fn ellipse_stays_inside_its_bounding_box_and_hits_the_extremes() {
        let cmd = DrawCmd::Ellipse {
            origin: Point::new(200, 10),
            size: Size::new(100, 100),
            stroke: Stroke::default(),
        };
        let pixmap = Renderer::render(&[cmd], CONTRACT);

        // Cardinal extremes of the 100x100 box centered at (250, 60).
        assert_stroked(&pixmap, 300, 60);
        assert_stroked(&pixmap, 200, 60);
        assert_stroked(&pixmap, 250, 10);
        assert_stroked(&pixmap, 250, 110);

        // Nothing outside the inclusive box.
        for y in 0..CONTRACT.height as i32 {
            for x in 0..CONTRACT.width as i32 {
                let inside = (200..=300).contains(&x) && (10..=110).contains(&y);
                if !inside {
                    assert_eq!(pixmap.get(x, y), Some(BACKGROUND), "pixel ({x},{y})");
                }
            }
        }

        // Center stays clear: outline only.
        assert_background(&pixmap, 250, 60);
    }

    #[test]
    fn polygon_strokes_include_the_closing_edge() {
        let cmd = DrawCmd::Polygon {
            points: vec![
                Point::new(150, 100),
                Point::new(180, 100),
                Point::new(150, 10),
            ],
            stroke: Stroke::default(),
        };
        let pixmap = Renderer::render(&[cmd], CONTRACT);

        assert_stroked(&pixmap, 150, 100);
        assert_stroked(&pixmap, 180, 100);
        assert_stroked(&pixmap, 150, 10);
        // Midpoint of the closing edge from (150,10) back to (150,100).
        assert_stroked(&pixmap, 150, 55);
    }

    #[test]
    fn geometry_outside_the_surface_is_clipped_silently() {
        let cmds = [
            DrawCmd::Line {
                start: Point::new(-50, -50),
                end: Point::new(500, 500),
                stroke: Stroke::default(),
            },
            DrawCmd::Rect {
                origin: Point::new(-100, -100),
                size: Size::new(50, 50),
                stroke: Stroke::default(),
            },
        ];
        let pixmap = Renderer::render(&cmds, CONTRACT);
        // The diagonal crosses the surface; the rectangle lies fully outside.
        assert_stroked(&pixmap, 100, 100);
        assert_background(&pixmap, 0, 30);
    }

    #[test]
    fn degenerate_geometry_renders_without_error() {
        let cmds = [
            DrawCmd::Line {
                start: Point::new(5, 5),
                end: Point::new(5, 5),
                stroke: Stroke::default(),
            },
            DrawCmd::Rect {
                origin: Point::new(40, 40),
                size: Size::new(0, 0),
                stroke: Stroke::default(),
            },
            DrawCmd::Rect {
                origin: Point::new(60, 60),
                size: Size::new(-10, -10),
                stroke: Stroke::default(),
            },
            DrawCmd::Ellipse {
                origin: Point::new(80, 80),
                size: Size::new(0, 12),
                stroke: Stroke::default(),
            },
            DrawCmd::Polygon {
                points: vec![],
                stroke: Stroke::default(),
            },
            DrawCmd::Polygon {
                points: vec![Point::new(90, 90)],
                stroke: Stroke::default(),
            },
        ];
        let pixmap = Renderer::render(&cmds, CONTRACT);
        // Point-like inputs collapse to single pixels.
        assert_stroked(&pixmap, 5, 5);
        assert_stroked(&pixmap, 40, 40);
        assert_stroked(&pixmap, 90, 90);
    }

    #[test]
    fn rendering_is_deterministic() {
        let cmds = [
            DrawCmd::Ellipse {
                origin: Point::new(200, 10),
                size: Size::new(100, 100),
                stroke: Stroke::default(),
            },
            DrawCmd::Line {
                start: Point::new(20, 20),
                end: Point::new(100, 20),
                stroke: Stroke::default(),
            },
        ];
        assert_eq!(
            Renderer::render(&cmds, CONTRACT),
            Renderer::render(&cmds, CONTRACT)
        );
    }
}
