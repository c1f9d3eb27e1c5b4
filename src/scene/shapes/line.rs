use crate::canvas::Canvas;
use crate::types::Point;

use super::Draw;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Draw for Line {
    fn draw(&self, canvas: &mut Canvas) {
        canvas.line(self.start, self.end);
    }
}
