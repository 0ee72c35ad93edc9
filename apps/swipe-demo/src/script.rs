//! Scripted gestures replayed against the row list.

use anyhow::{Context, Result};
use swipe_reveal_foundation::PointerEvent;

use crate::rows::{RowList, ROW_HEIGHT};

pub const FRAME_MILLIS: u64 = 16;

/// One gesture in list coordinates.
#[derive(Debug, Clone, Copy)]
pub enum Gesture {
    /// Horizontal drag across a row.
    Swipe {
        row: usize,
        from_x: f32,
        to_x: f32,
        steps: usize,
    },
    /// Vertical drag starting on a row; the list keeps it.
    Scroll {
        row: usize,
        x: f32,
        dy: f32,
        steps: usize,
    },
    Tap { row: usize, x: f32 },
}

impl Gesture {
    pub fn swipe(row: usize, from_x: f32, to_x: f32, steps: usize) -> Self {
        Gesture::Swipe {
            row,
            from_x,
            to_x,
            steps,
        }
    }

    pub fn scroll(row: usize, x: f32, dy: f32, steps: usize) -> Self {
        Gesture::Scroll { row, x, dy, steps }
    }

    pub fn tap(row: usize, x: f32) -> Self {
        Gesture::Tap { row, x }
    }

    pub fn row(&self) -> usize {
        match *self {
            Gesture::Swipe { row, .. } | Gesture::Scroll { row, .. } | Gesture::Tap { row, .. } => {
                row
            }
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            Gesture::Swipe {
                row, from_x, to_x, ..
            } => format!("swipe row {row} from {from_x} to {to_x}"),
            Gesture::Scroll { row, dy, .. } => format!("scroll by {dy} from row {row}"),
            Gesture::Tap { row, x } => format!("tap row {row} at {x}"),
        }
    }
}

pub fn default_script() -> Vec<Gesture> {
    vec![
        Gesture::swipe(0, 320.0, 120.0, 8),
        Gesture::swipe(1, 320.0, 280.0, 4),
        Gesture::swipe(2, 300.0, 200.0, 6),
        Gesture::scroll(2, 200.0, 120.0, 6),
        Gesture::swipe(2, 200.0, 290.0, 6),
        Gesture::tap(0, 40.0),
        Gesture::swipe(0, 100.0, 340.0, 8),
    ]
}

/// Replays `gesture` on `list`, pumping a frame between pointer events,
/// then runs frames until every row is at rest.
pub fn replay(list: &mut RowList, gesture: Gesture) -> Result<usize> {
    let row = gesture.row();
    let center_y = row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0;
    let (start, points): (_, Vec<(f32, f32)>) = match gesture {
        Gesture::Swipe {
            from_x, to_x, steps, ..
        } => (
            (from_x, center_y),
            lerp_steps(steps, |t| (from_x + (to_x - from_x) * t, center_y)),
        ),
        Gesture::Scroll { x, dy, steps, .. } => (
            (x, center_y),
            lerp_steps(steps, |t| (x, center_y + dy * t)),
        ),
        Gesture::Tap { x, .. } => ((x, center_y), Vec::new()),
    };

    list.dispatch(row, PointerEvent::down(start.0, start.1))
        .with_context(|| gesture.describe())?;
    let mut last = start;
    for (x, y) in points {
        list.frame(FRAME_MILLIS);
        list.dispatch(row, PointerEvent::moved(x, y))?;
        last = (x, y);
    }
    list.dispatch(row, PointerEvent::up(last.0, last.1))?;

    let mut frames = 0;
    while list.frame(FRAME_MILLIS) {
        frames += 1;
    }
    Ok(frames)
}

fn lerp_steps(steps: usize, at: impl Fn(f32) -> (f32, f32)) -> Vec<(f32, f32)> {
    let steps = steps.max(1);
    (1..=steps).map(|i| at(i as f32 / steps as f32)).collect()
}
