use std::process;

use anyhow::Result;

use shape_viewer::scene::shapes::{Ellipse, Line, Rect, Square, Trapezoid, Triangle};
use shape_viewer::scene::{Scene, Shape};
use shape_viewer::types::{Point, Size, SurfaceContract};
use shape_viewer::viewer::Viewer;

/// Fixed size of the demo window, in logical pixels.
const WINDOW_WIDTH: u32 = 380;
const WINDOW_HEIGHT: u32 = 300;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut scene = Scene::new();
    scene.push(Shape::Line(Line {
        start: Point::new(20, 20),
        end: Point::new(100, 20),
    }));
    scene.push(Shape::Rect(Rect {
        origin: Point::new(150, 150),
        size: Size::new(200, 100),
    }));
    scene.push(Shape::Ellipse(Ellipse {
        origin: Point::new(200, 10),
        size: Size::new(100, 100),
    }));
    scene.push(Shape::Triangle(Triangle {
        p1: Point::new(150, 100),
        p2: Point::new(180, 100),
        p3: Point::new(150, 10),
    }));
    scene.push(Shape::Square(Square {
        origin: Point::new(10, 150),
        side: 100,
    }));
    scene.push(Shape::Trapezoid(Trapezoid {
        origin: Point::new(20, 40),
        base1: 100,
        base2: 80,
        height: 60,
    }));

    let contract = SurfaceContract {
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
    };
    Viewer::new(scene, contract, "Shapes").run()
}
