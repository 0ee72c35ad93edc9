/// Logical settle state of a reveal container.
///
/// This is the *intended* resting position: it flips as soon as an
/// open/close animation starts, not when it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RevealState {
    #[default]
    Closed,
    Open,
}

impl RevealState {
    /// Scroll offset this state rests at for a right pane of `right_width`.
    pub fn rest_offset(self, right_width: i32) -> i32 {
        match self {
            RevealState::Closed => 0,
            RevealState::Open => right_width,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, RevealState::Open)
    }
}

impl std::fmt::Display for RevealState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevealState::Closed => f.pad("closed"),
            RevealState::Open => f.pad("open"),
        }
    }
}
