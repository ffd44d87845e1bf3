use egui::{Context, Id, Response, Vec2};

use crate::model::ViewMode;
use crate::ui::theme;

/// Minimum drag distance before a release can fire a swipe.
pub const SWIPE_DISTANCE: f32 = 50.0;
/// Minimum pointer velocity (px/s) for a vertical mode-switch swipe.
pub const SWIPE_VELOCITY: f32 = 500.0;

/// Fraction of the page width past which a horizontal drag always pages.
const PAGE_FRACTION: f32 = 0.35;

const SNAP_BACK_SECS: f32 = 0.2;
const HEIGHT_ANIM_SECS: f32 = 0.3;

/// What a released pan gesture asks the app to do. Nothing is committed
/// mid-drag; the translation is feedback only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Swipe {
    #[default]
    None,
    /// Upward swipe: month → week.
    Up,
    /// Downward swipe: week → month.
    Down,
    /// Horizontal paging within the current window.
    PagePrev,
    PageNext,
}

/// Tracks the single continuous pan gesture over the calendar surface.
#[derive(Debug, Default)]
pub struct PanTracker {
    drag: Vec2,
    active: bool,
    last_release: Vec2,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the calendar surface's drag response for this frame. Returns the
    /// swipe fired by a release, if any.
    pub fn update(&mut self, response: &Response, page_width: f32, ctx: &Context) -> Swipe {
        if response.drag_started() {
            self.active = true;
            self.drag = Vec2::ZERO;
        }
        if response.dragged() {
            self.drag += response.drag_delta();
        }
        if response.drag_stopped() {
            self.active = false;
            self.last_release = self.drag;
            self.drag = Vec2::ZERO;
            let velocity = ctx.input(|i| i.pointer.velocity());
            return classify(self.last_release, velocity, page_width);
        }
        Swipe::None
    }

    /// Horizontal translation of the page strip: live while dragging,
    /// animating back to zero after release.
    pub fn offset_x(&self, ctx: &Context, id: Id) -> f32 {
        if self.active {
            ctx.animate_value_with_time(id, self.drag.x, 0.0)
        } else {
            ctx.animate_value_with_time(id, 0.0, SNAP_BACK_SECS)
        }
    }

    /// Vertical translation for mode-switch feedback, damped so the calendar
    /// only nudges rather than follows the finger.
    pub fn offset_y(&self, ctx: &Context, id: Id) -> f32 {
        if self.active {
            ctx.animate_value_with_time(id, (self.drag.y * 0.3).clamp(-40.0, 40.0), 0.0)
        } else {
            ctx.animate_value_with_time(id, 0.0, SNAP_BACK_SECS)
        }
    }

    /// After paging on release, shift the offset by one page width so the new
    /// current page starts where the drag left off, then let it settle to 0.
    pub fn rebase_x(&self, ctx: &Context, id: Id, page_delta: f32) {
        ctx.animate_value_with_time(id, self.last_release.x + page_delta, 0.0);
    }

    /// Start the offset at `from` and let it animate to zero. Used by header
    /// navigation so prev/next still slide.
    pub fn slide_from(&self, ctx: &Context, id: Id, from: f32) {
        ctx.animate_value_with_time(id, from, 0.0);
    }

    /// Kill any in-flight translation, e.g. after the window was replaced.
    pub fn reset(&self, ctx: &Context, id: Id) {
        ctx.animate_value_with_time(id, 0.0, 0.0);
    }
}

/// Animated calendar body height for the current view mode.
pub fn view_height(ctx: &Context, mode: ViewMode) -> f32 {
    let target = match mode {
        ViewMode::Month => theme::MONTH_VIEW_HEIGHT,
        ViewMode::Week => theme::WEEK_VIEW_HEIGHT,
    };
    ctx.animate_value_with_time(Id::new("calendar-body-height"), target, HEIGHT_ANIM_SECS)
}

/// Decide what a released drag does. Vertical mode switches take priority
/// over horizontal paging, matching the drag's dominant intent.
fn classify(drag: Vec2, velocity: Vec2, page_width: f32) -> Swipe {
    if drag.y < -SWIPE_DISTANCE && velocity.y < -SWIPE_VELOCITY {
        Swipe::Up
    } else if drag.y > SWIPE_DISTANCE && velocity.y > SWIPE_VELOCITY {
        Swipe::Down
    } else if drag.x < -page_width * PAGE_FRACTION
        || (drag.x < -SWIPE_DISTANCE && velocity.x < -SWIPE_VELOCITY)
    {
        Swipe::PageNext
    } else if drag.x > page_width * PAGE_FRACTION
        || (drag.x > SWIPE_DISTANCE && velocity.x > SWIPE_VELOCITY)
    {
        Swipe::PagePrev
    } else {
        Swipe::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: f32 = 400.0;

    #[test]
    fn fast_upward_swipe_fires() {
        let swipe = classify(Vec2::new(4.0, -60.0), Vec2::new(0.0, -800.0), PAGE);
        assert_eq!(swipe, Swipe::Up);
    }

    #[test]
    fn slow_upward_drag_does_not_fire() {
        // Past the distance threshold but under the velocity threshold.
        let swipe = classify(Vec2::new(0.0, -120.0), Vec2::new(0.0, -200.0), PAGE);
        assert_eq!(swipe, Swipe::None);
    }

    #[test]
    fn short_fast_flick_does_not_fire() {
        let swipe = classify(Vec2::new(0.0, 30.0), Vec2::new(0.0, 900.0), PAGE);
        assert_eq!(swipe, Swipe::None);
    }

    #[test]
    fn downward_swipe_fires() {
        let swipe = classify(Vec2::new(-10.0, 80.0), Vec2::new(0.0, 700.0), PAGE);
        assert_eq!(swipe, Swipe::Down);
    }

    #[test]
    fn long_horizontal_drag_pages_regardless_of_speed() {
        let swipe = classify(Vec2::new(-PAGE * 0.5, 0.0), Vec2::ZERO, PAGE);
        assert_eq!(swipe, Swipe::PageNext);
        let swipe = classify(Vec2::new(PAGE * 0.5, 0.0), Vec2::ZERO, PAGE);
        assert_eq!(swipe, Swipe::PagePrev);
    }

    #[test]
    fn quick_horizontal_flick_pages() {
        let swipe = classify(Vec2::new(-70.0, 5.0), Vec2::new(-900.0, 0.0), PAGE);
        assert_eq!(swipe, Swipe::PageNext);
    }

    #[test]
    fn vertical_swipe_wins_over_horizontal() {
        let swipe = classify(Vec2::new(-200.0, -90.0), Vec2::new(-600.0, -700.0), PAGE);
        assert_eq!(swipe, Swipe::Up);
    }
}
