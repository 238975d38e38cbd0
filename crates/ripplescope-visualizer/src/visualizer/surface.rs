//! Drawing surface abstraction.
//!
//! The renderer only needs three primitives. Backends implement
//! [`DrawSurface`]; [`DrawList`] records the calls instead of rasterizing
//! them so frames can be inspected without a pixel buffer.

use ripplescope_core::{Color, ScreenPoint};

/// Target the renderer draws into.
pub trait DrawSurface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Anti-aliased one pixel line.
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color);

    /// Solid filled polygon, implicitly closed.
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color);
}

/// A recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        color: Color,
    },
    Polygon {
        points: Vec<ScreenPoint>,
        color: Color,
    },
}

/// Surface that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count()
    }
}

impl DrawSurface for DrawList {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        // Earlier calls are invisible once the surface is cleared.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new(10, 10);
        let red = Color::new(255, 0, 0);
        list.clear(Color::new(0, 0, 0));
        list.fill_polygon(
            &[
                ScreenPoint::new(0.0, 0.0),
                ScreenPoint::new(1.0, 0.0),
                ScreenPoint::new(1.0, 1.0),
            ],
            red,
        );
        list.draw_line(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(5.0, 5.0), red);

        assert_eq!(list.len(), 3);
        assert_eq!(list.polygon_count(), 1);
        assert_eq!(list.line_count(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::Clear(_)));
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut list = DrawList::new(4, 4);
        let c = Color::new(1, 2, 3);
        list.draw_line(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(1.0, 1.0), c);
        list.clear(c);
        assert_eq!(list.commands(), &[DrawCommand::Clear(c)]);
        assert_eq!(list.size(), (4, 4));
    }
}
