use crate::canvas::Canvas;
use crate::types::{Point, Size};

use super::Draw;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Draw for Rect {
    fn draw(&self, canvas: &mut Canvas) {
        canvas.rect(self.origin, self.size);
    }
}
