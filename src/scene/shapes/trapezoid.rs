use crate::canvas::Canvas;
use crate::types::Point;

use super::Draw;

/// Right-angled on the left: `base1` spans the top edge, `base2` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trapezoid {
    pub origin: Point,
    pub base1: i32,
    pub base2: i32,
    pub height: i32,
}

impl Draw for Trapezoid {
    fn draw(&self, canvas: &mut Canvas) {
        let Point { x, y } = self.origin;
        canvas.polygon(vec![
            Point::new(x, y),
            Point::new(x + self.base1, y),
            Point::new(x + self.base2, y + self.height),
            Point::new(x, y + self.height),
        ]);
    }
}
