use crate::canvas::Canvas;
use crate::types::{Point, Size};

use super::Draw;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    pub origin: Point,
    pub side: i32,
}

impl Draw for Square {
    fn draw(&self, canvas: &mut Canvas) {
        canvas.rect(self.origin, Size::new(self.side, self.side));
    }
}
