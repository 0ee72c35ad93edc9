//! A vertical list of swipeable rows, the usual home of a reveal container.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use swipe_reveal_animation::{FrameTimeSource, ManualClock};
use swipe_reveal_foundation::PointerEvent;
use swipe_reveal_ui::{RevealHost, RevealState, SwipeRevealConfig, SwipeRevealLayout};
use swipe_reveal_ui_graphics::{Point, Rect, Size};
use swipe_reveal_ui_layout::{ChildView, Dimension, LayoutParams};

pub const ROW_WIDTH: f32 = 360.0;
pub const ROW_HEIGHT: f32 = 72.0;
pub const ACTION_WIDTH: f32 = 160.0;

/// Host side of one row: the list is the ancestor that may want the
/// gesture back for vertical scrolling.
#[derive(Debug, Default)]
struct RowHost {
    list_may_intercept: bool,
    redraw_requested: bool,
}

impl RevealHost for RowHost {
    fn request_disallow_intercept(&mut self, disallow: bool) {
        self.list_may_intercept = !disallow;
    }

    fn invalidate(&mut self) {
        self.redraw_requested = true;
    }
}

pub struct Row {
    pub title: String,
    layout: SwipeRevealLayout,
    host: RowHost,
    opened: Rc<Cell<bool>>,
}

impl Row {
    fn new(
        title: &str,
        index: usize,
        config: SwipeRevealConfig,
        clock: &ManualClock,
    ) -> Result<Self> {
        let mut layout = SwipeRevealLayout::with_config_and_clock(config, Rc::new(clock.clone()))
            .with_context(|| format!("building row {title:?}"))?;
        let top = index as f32 * ROW_HEIGHT;
        layout.add_child(
            ChildView::new()
                .with_layout_params(LayoutParams::new(
                    Dimension::Exact(ROW_WIDTH as i32),
                    Dimension::Exact(ROW_HEIGHT as i32),
                ))
                .with_measured_width(ROW_WIDTH as i32)
                .with_bounds(Rect::from_size(Size::new(ROW_WIDTH, ROW_HEIGHT))),
        );
        layout.add_child(
            ChildView::new()
                .with_measured_width(ACTION_WIDTH as i32)
                .with_bounds(Rect::from_origin_size(
                    Point::new(ROW_WIDTH, 0.0),
                    Size::new(ACTION_WIDTH, ROW_HEIGHT),
                )),
        );
        layout.finish_inflate();
        if !layout.is_reveal_enabled() {
            bail!("row {title:?} has no action pane");
        }
        log::debug!("row {index} at y={top}");

        let opened = Rc::new(Cell::new(false));
        let flag = Rc::clone(&opened);
        layout.set_on_state_change(move |state| {
            if state == RevealState::Open {
                flag.set(true);
            }
        });

        Ok(Self {
            title: title.to_string(),
            layout,
            host: RowHost::default(),
            opened,
        })
    }

    pub fn state(&self) -> RevealState {
        self.layout.state()
    }

    pub fn offset(&self) -> i32 {
        self.layout.scroll_offset()
    }

    /// Portion of the action pane currently on screen.
    pub fn visible_action(&self) -> Option<Rect> {
        self.layout.visible_bounds(1)
    }

    pub fn list_may_intercept(&self) -> bool {
        self.host.list_may_intercept
    }
}

/// Rows stacked vertically; at most one is left open.
pub struct RowList {
    rows: Vec<Row>,
    clock: ManualClock,
}

impl RowList {
    pub fn new(titles: &[&str], config: SwipeRevealConfig) -> Result<Self> {
        let clock = ManualClock::new();
        let rows = titles
            .iter()
            .enumerate()
            .map(|(index, title)| Row::new(title, index, config, &clock))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows, clock })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Routes one list-space event to the row under it, translated into
    /// row coordinates.
    pub fn dispatch(&mut self, row: usize, event: PointerEvent) -> Result<bool> {
        let uptime = self.now_millis();
        let target = self
            .rows
            .get_mut(row)
            .with_context(|| format!("no row {row}"))?;
        let local = PointerEvent::new(
            event.kind,
            Point::new(event.x(), event.y() - row as f32 * ROW_HEIGHT),
        )
        .with_uptime(uptime);
        let handled = target.layout.dispatch_touch_event(&mut target.host, &local);
        if target.opened.replace(false) {
            self.close_others(row);
        }
        Ok(handled)
    }

    fn close_others(&mut self, keep: usize) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            if index != keep && row.state() == RevealState::Open {
                log::info!("closing {:?} because row {keep} opened", row.title);
                row.layout.quick_close(&mut row.host);
            }
        }
    }

    /// Advances one frame and steps every animating row. Returns true while
    /// any row still wants frames.
    pub fn frame(&mut self, frame_millis: u64) -> bool {
        self.clock.advance_millis(frame_millis);
        let mut animating = false;
        for row in &mut self.rows {
            row.host.redraw_requested = false;
            row.layout.compute_scroll(&mut row.host);
            animating |= row.host.redraw_requested;
        }
        log::trace!("frame at {}ms, animating={animating}", self.clock.now_millis());
        animating
    }
}
