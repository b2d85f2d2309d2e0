//! Pointer and scroll driven parallax for a single image.
//!
//! [`ParallaxState`] is a damped spring on the image translation plus an
//! exponential ease on its scale. It never touches the DOM: the browser driver
//! feeds it container geometry and writes [`ParallaxState::transform_css`]
//! back to the image once per animation frame while the state is
//! [`Phase::Animating`].

pub const DEFAULT_MAX_SCALE: f64 = 1.035;
pub const DEFAULT_SCROLL_ZOOM: f64 = 0.035;

const STRENGTH_X: f64 = 28.0;
const STRENGTH_Y: f64 = 12.0;
const FRICTION: f64 = 0.965;
const EASE: f64 = 0.02;
const SCALE_EASE: f64 = 0.03;

const VELOCITY_EPSILON: f64 = 0.005;
const POSITION_EPSILON: f64 = 0.05;
const SCALE_EPSILON: f64 = 0.0008;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Scale reached while the pointer is over the container.
    pub max_scale: f64,
    /// Extra scale once the container has scrolled to the top of the viewport.
    pub scroll_zoom: f64,
}

impl ParallaxConfig {
    pub fn new(max_scale: f64, scroll_zoom: f64) -> Self {
        Self {
            max_scale,
            scroll_zoom,
        }
    }

    fn hover_boost(&self) -> f64 {
        self.max_scale - 1.0
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SCALE, DEFAULT_SCROLL_ZOOM)
    }
}

/// Container box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxState {
    config: ParallaxConfig,
    x: f64,
    y: f64,
    scale: f64,
    target_x: f64,
    target_y: f64,
    target_scale: f64,
    velocity_x: f64,
    velocity_y: f64,
    scroll_boost: f64,
    hovering: bool,
    phase: Phase,
}

impl ParallaxState {
    pub fn new(config: ParallaxConfig) -> Self {
        Self {
            config,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            target_x: 0.0,
            target_y: 0.0,
            target_scale: 1.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            scroll_boost: 0.0,
            hovering: false,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn target(&self) -> (f64, f64, f64) {
        (self.target_x, self.target_y, self.target_scale)
    }

    /// Returns `true` when the caller has to schedule a frame.
    pub fn pointer_move(&mut self, bounds: &Bounds, client_x: f64, client_y: f64) -> bool {
        let (target_x, target_y) = pointer_offset(bounds, client_x, client_y);
        self.target_x = target_x;
        self.target_y = target_y;
        self.wake()
    }

    pub fn pointer_enter(&mut self) -> bool {
        self.hovering = true;
        self.target_scale = self.resting_scale();
        self.wake()
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.hovering = false;
        self.target_x = 0.0;
        self.target_y = 0.0;
        self.target_scale = self.resting_scale();
        self.wake()
    }

    pub fn scroll(&mut self, container_top: f64, viewport_height: f64) -> bool {
        self.scroll_boost = scroll_progress(container_top, viewport_height) * self.config.scroll_zoom;
        if !self.hovering {
            self.target_scale = self.resting_scale();
        }
        self.wake()
    }

    /// Advances one frame and reports the phase the state ends up in.
    pub fn step(&mut self) -> Phase {
        if self.phase == Phase::Idle {
            return Phase::Idle;
        }

        self.velocity_x += (self.target_x - self.x) * EASE;
        self.velocity_y += (self.target_y - self.y) * EASE;
        self.velocity_x *= FRICTION;
        self.velocity_y *= FRICTION;

        self.x += self.velocity_x;
        self.y += self.velocity_y;
        self.scale += (self.target_scale - self.scale) * SCALE_EASE;

        if self.is_settled() {
            self.x = self.target_x;
            self.y = self.target_y;
            self.scale = self.target_scale;
            self.velocity_x = 0.0;
            self.velocity_y = 0.0;
            self.phase = Phase::Idle;
        }

        self.phase
    }

    pub fn transform_css(&self) -> String {
        format_transform(self.x, self.y, self.scale)
    }

    fn resting_scale(&self) -> f64 {
        let hover = if self.hovering {
            self.config.hover_boost()
        } else {
            0.0
        };
        1.0 + self.scroll_boost + hover
    }

    fn is_settled(&self) -> bool {
        let velocity = self.velocity_x.abs() + self.velocity_y.abs();
        let position_gap = (self.target_x - self.x).abs() + (self.target_y - self.y).abs();
        let scale_gap = (self.target_scale - self.scale).abs();

        velocity <= VELOCITY_EPSILON && position_gap <= POSITION_EPSILON && scale_gap <= SCALE_EPSILON
    }

    fn wake(&mut self) -> bool {
        if self.phase == Phase::Animating || self.is_settled() {
            return false;
        }

        self.phase = Phase::Animating;
        true
    }
}

/// Target translation for a pointer at `(client_x, client_y)`.
pub fn pointer_offset(bounds: &Bounds, client_x: f64, client_y: f64) -> (f64, f64) {
    if !(bounds.width > 0.0 && bounds.height > 0.0) {
        return (0.0, 0.0);
    }

    let normalized_x = (client_x - bounds.left) / bounds.width - 0.5;
    let normalized_y = (client_y - bounds.top) / bounds.height - 0.5;

    (normalized_x * STRENGTH_X, normalized_y * STRENGTH_Y)
}

/// 0 while the container top sits at or below the viewport bottom, 1 once it
/// reaches the viewport top.
pub fn scroll_progress(container_top: f64, viewport_height: f64) -> f64 {
    if !(viewport_height > 0.0) {
        return 0.0;
    }

    1.0 - (container_top / viewport_height).clamp(0.0, 1.0)
}

pub fn neutral_transform_css() -> String {
    format_transform(0.0, 0.0, 1.0)
}

fn format_transform(x: f64, y: f64, scale: f64) -> String {
    format!("translate3d({x:.2}px, {y:.2}px, 0) scale({scale:.4})")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_SETTLE_FRAMES: usize = 600;

    fn bounds() -> Bounds {
        Bounds {
            left: 100.0,
            top: 50.0,
            width: 400.0,
            height: 300.0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9,
            "expected {expected} got {actual}"
        );
    }

    fn frames_until_idle(state: &mut ParallaxState) -> usize {
        for frame in 1..=MAX_SETTLE_FRAMES {
            if state.step() == Phase::Idle {
                return frame;
            }
        }
        panic!("parallax did not settle within {MAX_SETTLE_FRAMES} frames");
    }

    #[test]
    fn pointer_offset_is_linear_in_normalized_position() {
        let bounds = bounds();

        let (x, y) = pointer_offset(&bounds, 300.0, 200.0);
        assert_close(x, 0.0);
        assert_close(y, 0.0);

        let (x, y) = pointer_offset(&bounds, 100.0, 50.0);
        assert_close(x, -14.0);
        assert_close(y, -6.0);

        let (x, y) = pointer_offset(&bounds, 500.0, 350.0);
        assert_close(x, 14.0);
        assert_close(y, 6.0);

        let (x, y) = pointer_offset(&bounds, 200.0, 275.0);
        assert_close(x, (100.0 / 400.0 - 0.5) * 28.0);
        assert_close(y, (225.0 / 300.0 - 0.5) * 12.0);
    }

    #[test]
    fn collapsed_container_yields_no_offset() {
        let collapsed = Bounds {
            width: 0.0,
            ..bounds()
        };

        assert_eq!(pointer_offset(&collapsed, 120.0, 80.0), (0.0, 0.0));
    }

    #[test]
    fn scroll_progress_is_clamped_to_unit_range() {
        assert_close(scroll_progress(900.0, 800.0), 0.0);
        assert_close(scroll_progress(800.0, 800.0), 0.0);
        assert_close(scroll_progress(400.0, 800.0), 0.5);
        assert_close(scroll_progress(0.0, 800.0), 1.0);
        assert_close(scroll_progress(-250.0, 800.0), 1.0);
        assert_close(scroll_progress(100.0, 0.0), 0.0);
    }

    #[test]
    fn scroll_while_hovering_keeps_target_scale() {
        let mut state = ParallaxState::new(ParallaxConfig::default());

        state.scroll(400.0, 800.0);
        assert_close(state.target().2, 1.0 + 0.5 * DEFAULT_SCROLL_ZOOM);

        state.pointer_enter();
        let hovered = 1.0 + 0.5 * DEFAULT_SCROLL_ZOOM + (DEFAULT_MAX_SCALE - 1.0);
        assert_close(state.target().2, hovered);

        state.scroll(0.0, 800.0);
        assert_close(state.target().2, hovered);

        state.pointer_leave();
        assert_close(state.target().2, 1.0 + DEFAULT_SCROLL_ZOOM);
    }

    #[test]
    fn pointer_leave_recenters_and_drops_hover_zoom() {
        let mut state = ParallaxState::new(ParallaxConfig::default());
        state.scroll(400.0, 800.0);
        state.pointer_enter();
        state.pointer_move(&bounds(), 480.0, 90.0);

        state.pointer_leave();

        let (target_x, target_y, target_scale) = state.target();
        assert_close(target_x, 0.0);
        assert_close(target_y, 0.0);
        assert_close(target_scale, 1.0 + 0.5 * DEFAULT_SCROLL_ZOOM);
    }

    #[test]
    fn only_the_first_input_requests_a_frame() {
        let mut state = ParallaxState::new(ParallaxConfig::default());
        assert_eq!(state.phase(), Phase::Idle);

        assert!(state.pointer_enter());
        assert_eq!(state.phase(), Phase::Animating);
        assert!(!state.pointer_move(&bounds(), 480.0, 90.0));
        assert!(!state.scroll(200.0, 800.0));
    }

    #[test]
    fn input_that_leaves_state_at_rest_stays_idle() {
        let mut state = ParallaxState::new(ParallaxConfig::default());

        assert!(!state.scroll(900.0, 800.0));
        assert!(!state.pointer_leave());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn motion_settles_on_target_within_bounded_frames() {
        let mut state = ParallaxState::new(ParallaxConfig::default());
        state.scroll(0.0, 800.0);
        state.pointer_enter();
        state.pointer_move(&bounds(), 500.0, 350.0);

        frames_until_idle(&mut state);

        let (x, y) = state.position();
        let (target_x, target_y, target_scale) = state.target();
        assert_eq!(state.phase(), Phase::Idle);
        assert_close(x, target_x);
        assert_close(y, target_y);
        assert_close(state.scale(), target_scale);
    }

    #[test]
    fn reversing_from_one_corner_to_the_other_still_settles() {
        let mut state = ParallaxState::new(ParallaxConfig::default());
        state.pointer_enter();
        state.pointer_move(&bounds(), 500.0, 350.0);
        for _ in 0..40 {
            state.step();
        }

        state.pointer_move(&bounds(), 100.0, 50.0);
        frames_until_idle(&mut state);
        state.pointer_leave();
        frames_until_idle(&mut state);

        assert_eq!(state.position(), (0.0, 0.0));
        assert_close(state.scale(), 1.0);
    }

    #[test]
    fn motion_is_monotone_toward_scale_target() {
        let mut state = ParallaxState::new(ParallaxConfig::default());
        state.pointer_enter();

        let mut previous = state.scale();
        while state.step() == Phase::Animating {
            assert!(state.scale() >= previous);
            assert!(state.scale() <= DEFAULT_MAX_SCALE);
            previous = state.scale();
        }
    }

    #[test]
    fn idle_state_step_is_a_no_op() {
        let mut state = ParallaxState::new(ParallaxConfig::default());
        let before = state.clone();

        assert_eq!(state.step(), Phase::Idle);
        assert_eq!(state, before);
    }

    #[test]
    fn transform_css_rounds_translation_and_scale() {
        let mut state = ParallaxState::new(ParallaxConfig::default());
        state.pointer_enter();
        state.pointer_move(&bounds(), 500.0, 350.0);
        frames_until_idle(&mut state);

        assert_eq!(
            state.transform_css(),
            "translate3d(14.00px, 6.00px, 0) scale(1.0350)"
        );
        assert_eq!(
            neutral_transform_css(),
            "translate3d(0.00px, 0.00px, 0) scale(1.0000)"
        );
    }
}
