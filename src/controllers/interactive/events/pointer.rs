use crate::core::data::point::Point;

/// Primary-button pointer input, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Drag(Point),
    Release(Point),
}
