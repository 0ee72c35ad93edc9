//! The reveal container: construction, layout contract and accessors.
//!
//! Gesture handling lives in `gesture.rs`, snap animation in `snap.rs`.

use std::rc::Rc;

use swipe_reveal_animation::{FrameTimeSource, MonotonicClock, Scroller};
use swipe_reveal_foundation::ConfigError;
use swipe_reveal_ui_graphics::{Point, Rect};
use swipe_reveal_ui_layout::{Axis, ChildView, Dimension, LayoutParams};

use crate::config::SwipeRevealConfig;
use crate::gesture::{Motion, TouchTarget};
use crate::state::RevealState;

/// Index of the pane that fills the container.
const MAIN_PANE: usize = 0;
/// Index of the pane revealed by scrolling.
const RIGHT_PANE: usize = 1;

/// Horizontal two-pane container whose right pane is revealed by swiping.
///
/// Reveal handling is only active with exactly two children laid out
/// horizontally. Otherwise every gesture entry point falls back to the
/// host's default handling and nothing is intercepted.
pub struct SwipeRevealLayout {
    pub(crate) config: SwipeRevealConfig,
    /// Physical pixels, read once at construction.
    pub(crate) touch_slop: f32,
    pub(crate) orientation: Axis,
    pub(crate) children: Vec<ChildView>,
    pub(crate) right_pane: Option<usize>,

    pub(crate) state: RevealState,
    pub(crate) scroll_x: i32,
    pub(crate) motion: Motion,
    pub(crate) scroller: Scroller,

    /// Gesture origin as seen by the ancestor guard.
    pub(crate) dispatch_down: Option<Point>,
    /// Gesture origin as seen by the intercept decision.
    pub(crate) intercept_down: Option<Point>,
    pub(crate) touch_target: Option<TouchTarget>,

    pub(crate) on_state_change: Option<Box<dyn FnMut(RevealState)>>,
}

impl SwipeRevealLayout {
    /// Creates a container with the default configuration and a wall clock.
    pub fn new() -> Self {
        Self::build(SwipeRevealConfig::default(), Rc::new(MonotonicClock::new()))
    }

    pub fn with_config(config: SwipeRevealConfig) -> Result<Self, ConfigError> {
        Self::with_config_and_clock(config, Rc::new(MonotonicClock::new()))
    }

    /// Creates a container whose snap animations sample `clock`.
    pub fn with_config_and_clock(
        config: SwipeRevealConfig,
        clock: Rc<dyn FrameTimeSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: SwipeRevealConfig, clock: Rc<dyn FrameTimeSource>) -> Self {
        let scroller = Scroller::with_easing(clock, config.scroll_animation.easing);
        Self {
            touch_slop: config.view_configuration.scaled_touch_slop(),
            config,
            orientation: Axis::Horizontal,
            children: Vec::new(),
            right_pane: None,
            state: RevealState::Closed,
            scroll_x: 0,
            motion: Motion::Idle,
            scroller,
            dispatch_down: None,
            intercept_down: None,
            touch_target: None,
            on_state_change: None,
        }
    }

    pub fn set_orientation(&mut self, orientation: Axis) {
        self.orientation = orientation;
    }

    pub fn add_child(&mut self, child: ChildView) {
        self.children.push(child);
    }

    /// Applies the layout contract once all children are attached.
    ///
    /// With two horizontal children the main pane is stretched to fill the
    /// container (keeping its height request) and the second child becomes
    /// the right pane. Anything else leaves the container pass-through.
    pub fn finish_inflate(&mut self) {
        if !self.is_reveal_enabled() {
            log::warn!(
                "swipe reveal disabled: {} children, {:?} orientation (need 2, horizontal)",
                self.children.len(),
                self.orientation
            );
            self.right_pane = None;
            return;
        }

        let main = &mut self.children[MAIN_PANE];
        main.layout_params = Some(match main.layout_params {
            Some(params) => params.fill_width(),
            None => LayoutParams::new(Dimension::MatchParent, Dimension::WrapContent),
        });
        self.right_pane = Some(RIGHT_PANE);
    }

    /// Records a width produced by the host's layout pass.
    pub fn set_measured_width(&mut self, index: usize, width: i32) {
        match self.children.get_mut(index) {
            Some(child) => child.measured_width = Some(width),
            None => log::warn!("measured width for missing child {index}"),
        }
    }

    pub fn children(&self) -> &[ChildView] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&ChildView> {
        self.children.get(index)
    }

    /// True when the two-horizontal-children precondition holds.
    pub fn is_reveal_enabled(&self) -> bool {
        self.children.len() == 2 && self.orientation.is_horizontal()
    }

    /// Measured width of the right pane; 0 when absent or unmeasured.
    pub fn right_pane_width(&self) -> i32 {
        self.right_pane
            .and_then(|index| self.children.get(index))
            .map(ChildView::width)
            .unwrap_or(0)
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Current horizontal content offset in pixels.
    pub fn scroll_offset(&self) -> i32 {
        self.scroll_x
    }

    /// Translation the host applies to the children when drawing.
    pub fn content_offset(&self) -> Point {
        Point::new(-(self.scroll_x as f32), 0.0)
    }

    /// A child's bounds shifted by the current content offset.
    pub fn visible_bounds(&self, index: usize) -> Option<Rect> {
        let offset = self.content_offset();
        self.children
            .get(index)
            .and_then(|child| child.bounds)
            .map(|bounds| bounds.translate(offset.x, offset.y))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging(_))
    }

    pub fn is_animating(&self) -> bool {
        !self.scroller.is_finished()
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn config(&self) -> &SwipeRevealConfig {
        &self.config
    }

    /// Called with the new logical state every time an open/close
    /// operation sets it, including re-snaps to the same state.
    pub fn set_on_state_change(&mut self, listener: impl FnMut(RevealState) + 'static) {
        self.on_state_change = Some(Box::new(listener));
    }

    pub(crate) fn set_state(&mut self, state: RevealState) {
        if self.state != state {
            log::debug!("reveal state {} -> {}", self.state, state);
        }
        self.state = state;
        if let Some(listener) = self.on_state_change.as_mut() {
            listener(state);
        }
    }
}

impl Default for SwipeRevealLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SwipeRevealLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeRevealLayout")
            .field("state", &self.state)
            .field("scroll_x", &self.scroll_x)
            .field("motion", &self.motion)
            .field("children", &self.children.len())
            .field("orientation", &self.orientation)
            .field("scroller", &self.scroller)
            .finish()
    }
}
