//! Minimal boilerplate example — builds a scene programmatically and opens
//! it in a viewer window.
//!
//! Run with: cargo run --example custom

use shape_viewer::scene::shapes::{Ellipse, Line, Rect, Square, Trapezoid, Triangle};
use shape_viewer::scene::{Scene, Shape};
use shape_viewer::types::{Point, Size, SurfaceContract};
use shape_viewer::viewer::Viewer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut scene = Scene::new();

    // ── A little house ──────────────────────────────────────────────
    scene.push(Shape::Square(Square {
        origin: Point::new(120, 140),
        side: 120,
    }));
    scene.push(Shape::Triangle(Triangle {
        p1: Point::new(110, 140),
        p2: Point::new(250, 140),
        p3: Point::new(180, 70),
    }));
    scene.push(Shape::Rect(Rect {
        origin: Point::new(165, 190),
        size: Size::new(30, 70),
    }));

    // ── Sun, chimney, and ground line ───────────────────────────────
    scene.push(Shape::Ellipse(Ellipse {
        origin: Point::new(290, 20),
        size: Size::new(60, 60),
    }));
    scene.push(Shape::Trapezoid(Trapezoid {
        origin: Point::new(210, 90),
        base1: 22,
        base2: 16,
        height: 30,
    }));
    scene.push(Shape::Line(Line {
        start: Point::new(0, 260),
        end: Point::new(379, 260),
    }));

    let contract = SurfaceContract {
        width: 380,
        height: 300,
    };
    Viewer::new(scene, contract, "Shapes (custom scene)").run()
}
