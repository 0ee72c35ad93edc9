//! Pointer events as delivered to a reveal container.
//!
//! Positions are in the container's own coordinate space. A gesture is
//! always `Down`, zero or more `Move`, then `Up` or `Cancel`.

use smallvec::SmallVec;
use swipe_reveal_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// True for the events that end a gesture.
    pub fn is_release(self) -> bool {
        matches!(self, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

/// A position batched into a move event between two deliveries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoricalSample {
    pub uptime_millis: u64,
    pub position: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub uptime_millis: u64,
    /// Older samples, oldest first, coalesced into this event.
    pub historical: SmallVec<[HistoricalSample; 4]>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_millis: 0,
            historical: SmallVec::new(),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y))
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_uptime(mut self, uptime_millis: u64) -> Self {
        self.uptime_millis = uptime_millis;
        self
    }

    pub fn with_historical(mut self, sample: HistoricalSample) -> Self {
        self.historical.push(sample);
        self
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Same pointer and position, re-labelled as a cancellation. Used when
    /// a parent steals a gesture from the child that owned it.
    pub fn to_cancel(&self) -> Self {
        Self {
            kind: PointerEventKind::Cancel,
            historical: SmallVec::new(),
            ..self.clone()
        }
    }

    /// Historical samples followed by the event's own position.
    pub fn samples(&self) -> impl Iterator<Item = HistoricalSample> + '_ {
        self.historical
            .iter()
            .copied()
            .chain(std::iter::once(HistoricalSample {
                uptime_millis: self.uptime_millis,
                position: self.position,
            }))
    }
}
