//! Canvas — the per-paint drawing context.
//!
//! The host creates one canvas per paint event and hands it to the scene;
//! each shape draw call records exactly one primitive command. The canvas is
//! dropped when the paint completes and is never retained across events.
//!
//! Every command carries the same fixed stroke (solid black, one pixel, no
//! fill); no other style is ever constructed.

use crate::types::{DrawCmd, Point, Size, Stroke};

pub struct Canvas {
    stroke: Stroke,
    cmds: Vec<DrawCmd>,
}

impl Canvas {
    pub fn new() -> Self {
        Canvas {
            stroke: Stroke::default(),
            cmds: Vec::new(),
        }
    }

    pub fn line(&mut self, start: Point, end: Point) {
        self.cmds.push(DrawCmd::Line {
            start,
            end,
            stroke: self.stroke,
        });
    }

    pub fn rect(&mut self, origin: Point, size: Size) {
        self.cmds.push(DrawCmd::Rect {
            origin,
            size,
            stroke: self.stroke,
        });
    }

    pub fn ellipse(&mut self, origin: Point, size: Size) {
        self.cmds.push(DrawCmd::Ellipse {
            origin,
            size,
            stroke: self.stroke,
        });
    }

    pub fn polygon(&mut self, points: Vec<Point>) {
        self.cmds.push(DrawCmd::Polygon {
            points,
            stroke: self.stroke,
        });
    }

    /// Commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn into_commands(self) -> Vec<DrawCmd> {
        self.cmds
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new()
    }
}
