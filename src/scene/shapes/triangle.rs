use crate::canvas::Canvas;
use crate::types::Point;

use super::Draw;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Draw for Triangle {
    fn draw(&self, canvas: &mut Canvas) {
        canvas.polygon(vec![self.p1, self.p2, self.p3]);
    }
}
