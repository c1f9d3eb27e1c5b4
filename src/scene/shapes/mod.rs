//! Shape variants and their draw implementations.
//!
//! Each variant lives in its own module with its struct definition and
//! `Draw` implementation side by side. Fields are plain value data: no
//! validation, no derived state, immutable after construction.

mod ellipse;
mod line;
mod rect;
mod square;
mod trapezoid;
mod triangle;

pub use ellipse::Ellipse;
pub use line::Line;
pub use rect::Rect;
pub use square::Square;
pub use trapezoid::Trapezoid;
pub use triangle::Triangle;

use crate::canvas::Canvas;

use super::Shape;

/// Record a shape's outline as primitive commands on the canvas.
pub trait Draw {
    fn draw(&self, canvas: &mut Canvas);
}

impl Draw for Shape {
    fn draw(&self, canvas: &mut Canvas) {
        match self {
            Shape::Line(o) => o.draw(canvas),
            Shape::Rect(o) => o.draw(canvas),
            Shape::Ellipse(o) => o.draw(canvas),
            Shape::Triangle(o) => o.draw(canvas),
            Shape::Square(o) => o.draw(canvas),
            Shape::Trapezoid(o) => o.draw(canvas),
        }
    }
}
