//! Swipe-to-reveal container for swipe-reveal
//!
//! `SwipeRevealLayout` lays out a main pane and a right "action" pane side
//! by side. Horizontal drags scroll the content to reveal the right pane;
//! releases snap open or closed with a hysteresis rule. The host framework
//! supplies pointer events, frame callbacks and the services behind
//! [`RevealHost`].

mod config;
mod gesture;
mod host;
mod snap;
mod state;
mod swipe_reveal;

pub use config::SwipeRevealConfig;
pub use gesture::{resolve_settle, resolve_settle_with_velocity};
pub use host::RevealHost;
pub use state::RevealState;
pub use swipe_reveal::SwipeRevealLayout;

pub use swipe_reveal_foundation::{ConfigError, PointerEvent, PointerEventKind};

pub mod prelude {
    pub use crate::config::SwipeRevealConfig;
    pub use crate::host::RevealHost;
    pub use crate::state::RevealState;
    pub use crate::swipe_reveal::SwipeRevealLayout;
    pub use swipe_reveal_foundation::prelude::*;
    pub use swipe_reveal_ui_layout::prelude::*;
}

#[cfg(test)]
mod tests;
