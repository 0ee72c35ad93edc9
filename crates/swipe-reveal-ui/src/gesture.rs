//! Gesture arbitration: ancestor guard, self-intercept decision and the
//! drag handler, plus the release (settle) rule.

use swipe_reveal_foundation::{PointerEvent, PointerEventKind, VelocityTracker1D};
use swipe_reveal_ui_graphics::Point;

use crate::host::RevealHost;
use crate::state::RevealState;
use crate::swipe_reveal::SwipeRevealLayout;

/// What the container is doing with the current gesture.
#[derive(Debug, Clone, Default)]
pub(crate) enum Motion {
    /// No gesture seen by the drag handler.
    #[default]
    Idle,
    /// Pointer down, still inside the slop.
    Tracking(TouchSession),
    /// Movement is scrolling the content.
    Dragging(DragSession),
    /// A programmatic open/close ended the drag mid-gesture; the rest of
    /// the gesture is swallowed until the next DOWN.
    Settled,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TouchSession {
    /// Reference point for the slop check. Not advanced by moves that stay
    /// inside the slop or lean vertical.
    pub(crate) last: Point,
}

#[derive(Debug, Clone)]
pub(crate) struct DragSession {
    pub(crate) last_x: f32,
    pub(crate) velocity: VelocityTracker1D,
}

impl DragSession {
    fn track(&mut self, event: &PointerEvent) {
        for sample in event.samples() {
            self.velocity
                .add_data_point(sample.uptime_millis, sample.position.x);
        }
    }
}

/// Who receives the rest of a gesture routed by `dispatch_touch_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TouchTarget {
    Child,
    Container,
}

enum DragStep {
    Applied,
    /// At an edge and moving further out; the host's default handling
    /// gets the event.
    Deferred,
}

/// Release decision. The prior state makes it sticky: leaving OPEN needs
/// the offset below two thirds, leaving CLOSED needs it at one third.
pub fn resolve_settle(prior: RevealState, offset: i32, right_width: i32) -> RevealState {
    let threshold = match prior {
        RevealState::Open => right_width * 2 / 3,
        RevealState::Closed => right_width / 3,
    };
    if offset < threshold {
        RevealState::Closed
    } else {
        RevealState::Open
    }
}

/// Release decision for a fling-aware container. A release at or above
/// `min_velocity` settles in its direction (leftward opens); slower
/// releases use [`resolve_settle`].
pub fn resolve_settle_with_velocity(
    prior: RevealState,
    offset: i32,
    right_width: i32,
    velocity: f32,
    min_velocity: f32,
) -> RevealState {
    if velocity.abs() >= min_velocity && velocity != 0.0 {
        if velocity < 0.0 {
            RevealState::Open
        } else {
            RevealState::Closed
        }
    } else {
        resolve_settle(prior, offset, right_width)
    }
}

impl SwipeRevealLayout {
    /// Runs before any child or self processing of `event`.
    ///
    /// DOWN asks the ancestors not to steal the gesture. A MOVE that leans
    /// vertical and has left the slop hands it back, so a vertically
    /// scrolling ancestor can take over.
    pub fn dispatch_guard(&mut self, host: &mut dyn RevealHost, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => {
                self.dispatch_down = Some(event.position);
                host.request_disallow_intercept(true);
            }
            PointerEventKind::Move => {
                let Some(down) = self.dispatch_down else {
                    return;
                };
                let (dx, dy) = down.abs_delta_to(event.position);
                // Slop is measured on the vertical distance: (5, 20) must release.
                if dx <= dy && dy > self.touch_slop {
                    log::trace!("guard released: dx={dx} dy={dy}");
                    host.request_disallow_intercept(false);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.dispatch_down = None;
            }
        }
    }

    /// Whether the container takes the gesture away from its children.
    ///
    /// DOWN always passes through. A MOVE is intercepted once it is clearly
    /// horizontal and beyond the slop.
    pub fn on_intercept_touch_event(&mut self, event: &PointerEvent) -> bool {
        if !self.is_reveal_enabled() {
            return false;
        }
        match event.kind {
            PointerEventKind::Down => {
                self.intercept_down = Some(event.position);
                false
            }
            PointerEventKind::Move => {
                let Some(down) = self.intercept_down else {
                    return false;
                };
                let (dx, dy) = down.abs_delta_to(event.position);
                let intercepted = dx > dy && dx > self.touch_slop;
                if intercepted {
                    log::trace!("intercepting gesture: dx={dx} dy={dy}");
                }
                intercepted
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.intercept_down = None;
                false
            }
        }
    }

    /// Handles an event addressed to the container itself. Returns true if
    /// the event was consumed.
    pub fn on_touch_event(&mut self, host: &mut dyn RevealHost, event: &PointerEvent) -> bool {
        if !self.is_reveal_enabled() {
            return host.default_touch_event(event);
        }

        match event.kind {
            PointerEventKind::Down => {
                if !self.scroller.is_finished() {
                    log::trace!("touch down aborts snap animation at {}", self.scroll_x);
                    self.scroller.abort_animation();
                }
                self.motion = Motion::Tracking(TouchSession {
                    last: event.position,
                });
            }
            PointerEventKind::Move => return self.on_move(host, event),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.intercept_down = None;
                if let Motion::Dragging(session) = std::mem::take(&mut self.motion) {
                    self.settle(host, &session);
                }
            }
        }
        true
    }

    fn on_move(&mut self, host: &mut dyn RevealHost, event: &PointerEvent) -> bool {
        if let Motion::Dragging(session) = &mut self.motion {
            session.track(event);
            return match self.drag_to(host, event.x()) {
                DragStep::Applied => true,
                DragStep::Deferred => host.default_touch_event(event),
            };
        }

        let last = match self.motion {
            Motion::Settled => return true,
            Motion::Tracking(session) => session.last,
            Motion::Idle | Motion::Dragging(_) => {
                // DOWN went to a child; measure from where the gesture began.
                let last = self.intercept_down.unwrap_or(event.position);
                self.motion = Motion::Tracking(TouchSession { last });
                last
            }
        };

        let (dx, dy) = last.abs_delta_to(event.position);
        let past_slop = dx > self.touch_slop || dy > self.touch_slop;
        if past_slop && dx > dy {
            self.begin_drag(last.x, event);
            // The committing move scrolls too; the reference moves to it
            // even when an edge defers the step.
            self.drag_to(host, event.x());
            if let Motion::Dragging(session) = &mut self.motion {
                session.last_x = event.x();
            }
        }
        true
    }

    fn begin_drag(&mut self, from_x: f32, event: &PointerEvent) {
        if !self.scroller.is_finished() {
            self.scroller.abort_animation();
        }
        let mut session = DragSession {
            last_x: from_x,
            velocity: VelocityTracker1D::new(),
        };
        session.track(event);
        log::trace!("drag committed at x={} offset={}", event.x(), self.scroll_x);
        self.motion = Motion::Dragging(session);
    }

    /// Moves the content by the finger travel since the last applied step.
    fn drag_to(&mut self, host: &mut dyn RevealHost, x: f32) -> DragStep {
        let Motion::Dragging(session) = &self.motion else {
            return DragStep::Deferred;
        };
        let offset_x = x - session.last_x;
        let width = self.right_pane_width();
        let opening_past_edge = self.scroll_x >= width && offset_x <= 0.0;
        let closing_past_edge = self.scroll_x <= 0 && offset_x >= 0.0;
        if opening_past_edge || closing_past_edge {
            return DragStep::Deferred;
        }

        let scroll_to = ((self.scroll_x as f32 - offset_x) as i32).clamp(0, width);
        self.scroll_to(host, scroll_to);
        if let Motion::Dragging(session) = &mut self.motion {
            session.last_x = x;
        }
        DragStep::Applied
    }

    fn settle(&mut self, host: &mut dyn RevealHost, session: &DragSession) {
        let width = self.right_pane_width();
        let target = if self.config.fling_settle {
            let view_configuration = &self.config.view_configuration;
            let velocity = session
                .velocity
                .calculate_velocity_with_max(view_configuration.scaled_maximum_fling_velocity());
            resolve_settle_with_velocity(
                self.state,
                self.scroll_x,
                width,
                velocity,
                view_configuration.scaled_minimum_fling_velocity(),
            )
        } else {
            resolve_settle(self.state, self.scroll_x, width)
        };
        log::debug!(
            "release at {}/{} from {} settles {}",
            self.scroll_x,
            width,
            self.state,
            target
        );
        match target {
            RevealState::Open => self.smooth_open(host),
            RevealState::Closed => self.smooth_close(host),
        }
    }

    /// Routes one event the way a parent container would: guard, intercept
    /// decision, then either the children or the container's own handler.
    pub fn dispatch_touch_event(&mut self, host: &mut dyn RevealHost, event: &PointerEvent) -> bool {
        self.dispatch_guard(host, event);

        let handled = match event.kind {
            PointerEventKind::Down => {
                self.touch_target = None;
                if !self.on_intercept_touch_event(event) && host.dispatch_to_children(event) {
                    self.touch_target = Some(TouchTarget::Child);
                    true
                } else {
                    let handled = self.on_touch_event(host, event);
                    if handled {
                        self.touch_target = Some(TouchTarget::Container);
                    }
                    handled
                }
            }
            _ => match self.touch_target {
                Some(TouchTarget::Child) => {
                    if self.on_intercept_touch_event(event) {
                        host.dispatch_to_children(&event.to_cancel());
                        self.touch_target = Some(TouchTarget::Container);
                        true
                    } else {
                        host.dispatch_to_children(event)
                    }
                }
                Some(TouchTarget::Container) => self.on_touch_event(host, event),
                None => false,
            },
        };

        if event.kind.is_release() {
            self.touch_target = None;
        }
        handled
    }
}
