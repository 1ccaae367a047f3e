use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Gesture phase. A gesture is `Down`, any number of `Move`s, then `Up` or
/// `Cancel`. `Enter`/`Leave` are hover notifications outside that sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Up,
    Move,
    Cancel,
    Enter,
    Leave,
}

/// Touch event in the receiving widget's local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn touch(event: PointerEventKind, position: Vec2) -> Self {
        PointerEvent {
            id: PointerId(0),
            event,
            position,
        }
    }

    pub fn touch_down(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Down, Vec2 { x, y })
    }

    pub fn touch_move(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Move, Vec2 { x, y })
    }

    pub fn touch_up(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Up, Vec2 { x, y })
    }

    pub fn touch_cancel(x: f32, y: f32) -> Self {
        Self::touch(PointerEventKind::Cancel, Vec2 { x, y })
    }
}

/// What a widget did with an event. `Ignored` hands it back to the host's
/// default handling.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
