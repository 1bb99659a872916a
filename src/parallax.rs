use crate::scroll::{SectionGeometry, Viewport};

/// How far outside the viewport a slide keeps animating, in pixels.
pub const NEAR_VIEWPORT_MARGIN: f64 = 200.0;

/// Progress of a slide through the viewport.
///
/// 0 when the slide's top edge touches the viewport bottom, 1 when its bottom
/// edge touches the viewport top. Clamped to `[0, 1]`.
pub fn scroll_progress(slide: SectionGeometry, viewport: Viewport) -> f64 {
    let travel = viewport.client_height + slide.height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport.bottom() - slide.offset_top) / travel).clamp(0.0, 1.0)
}

pub fn is_near_viewport(slide: SectionGeometry, viewport: Viewport, margin: f64) -> bool {
    slide.offset_top < viewport.bottom() + margin && slide.bottom() > viewport.scroll_top - margin
}

/// Piecewise-linear mapping of `x` through ascending `input` stops onto `output`.
/// Values outside the input range clamp to the first or last output.
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    let (Some(first), Some(last)) = (input.first(), input.last()) else {
        return 0.0;
    };
    if x <= *first {
        return output[0];
    }
    if x >= *last {
        return output[output.len() - 1];
    }
    for i in 1..input.len() {
        if x <= input[i] {
            let span = input[i] - input[i - 1];
            if span <= 0.0 {
                return output[i];
            }
            let t = (x - input[i - 1]) / span;
            return output[i - 1] + (output[i] - output[i - 1]) * t;
        }
    }
    output[output.len() - 1]
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxFrame {
    pub offset_y: f64,
    pub blur: f64,
}

impl ParallaxFrame {
    pub fn transform(&self) -> String {
        format!("translate3d(0, {:.2}px, 0)", self.offset_y)
    }

    pub fn filter(&self) -> String {
        format!("blur({:.2}px)", self.blur)
    }
}

/// Background travel and blur for a parallax slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxConfig {
    /// Total vertical travel of the background across the whole progress range.
    pub travel: f64,
    /// Blur applied at the edges; the slide is sharp when centred.
    pub max_blur: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            travel: 240.0,
            max_blur: 3.0,
        }
    }
}

impl ParallaxConfig {
    pub fn frame(&self, progress: f64) -> ParallaxFrame {
        let centred = progress.clamp(0.0, 1.0) - 0.5;
        ParallaxFrame {
            offset_y: centred * self.travel,
            blur: centred.abs() * 2.0 * self.max_blur,
        }
    }
}

/// Foreground text transform of the interlude slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterludeFrame {
    pub opacity: f64,
    pub scale: f64,
    pub y: f64,
    pub blur: f64,
}

impl InterludeFrame {
    /// The text only lives around the middle of its slide.
    pub fn at(progress: f64) -> Self {
        Self {
            opacity: interpolate(progress, &[0.35, 0.48, 0.52, 0.65], &[0.0, 1.0, 1.0, 0.0]),
            scale: interpolate(progress, &[0.35, 0.5, 0.65], &[0.92, 1.0, 1.08]),
            y: interpolate(progress, &[0.35, 0.5, 0.65], &[40.0, 0.0, -40.0]),
            blur: interpolate(progress, &[0.35, 0.45, 0.55, 0.65], &[12.0, 0.0, 0.0, 12.0]),
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({:.2}px) scale({:.4})", self.y, self.scale)
    }

    pub fn filter(&self) -> String {
        format!("blur({:.2}px)", self.blur)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 120.0,
            damping: 20.0,
            mass: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

impl Spring {
    /// Longest step integrated at once; slower frames are split.
    const MAX_STEP: f64 = 1.0 / 60.0;
    const REST_EPSILON: f64 = 0.01;

    /// Advances `state` toward `target` by `dt` seconds (semi-implicit Euler).
    pub fn step(&self, state: SpringState, target: f64, dt: f64) -> SpringState {
        let mut state = state;
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(Self::MAX_STEP);
            let force = -self.stiffness * (state.position - target) - self.damping * state.velocity;
            state.velocity += force / self.mass * h;
            state.position += state.velocity * h;
            remaining -= h;
        }
        state
    }

    pub fn is_settled(&self, state: SpringState, target: f64) -> bool {
        (state.position - target).abs() < Self::REST_EPSILON
            && state.velocity.abs() < Self::REST_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        let slide = SectionGeometry::new(1000.0, 1000.0);
        // slide top at viewport bottom
        assert_eq!(scroll_progress(slide, Viewport::new(0.0, 1000.0)), 0.0);
        // slide centred
        assert_eq!(scroll_progress(slide, Viewport::new(1000.0, 1000.0)), 0.5);
        // slide bottom at viewport top
        assert_eq!(scroll_progress(slide, Viewport::new(2000.0, 1000.0)), 1.0);
        assert_eq!(scroll_progress(slide, Viewport::new(5000.0, 1000.0)), 1.0);
        assert_eq!(scroll_progress(slide, Viewport::new(0.0, 200.0)), 0.0);
    }

    #[test]
    fn test_near_viewport() {
        let slide = SectionGeometry::new(3000.0, 1000.0);
        assert!(!is_near_viewport(slide, Viewport::new(0.0, 1000.0), NEAR_VIEWPORT_MARGIN));
        assert!(is_near_viewport(slide, Viewport::new(1900.0, 1000.0), NEAR_VIEWPORT_MARGIN));
        assert!(is_near_viewport(slide, Viewport::new(3500.0, 1000.0), NEAR_VIEWPORT_MARGIN));
        assert!(!is_near_viewport(slide, Viewport::new(4300.0, 1000.0), NEAR_VIEWPORT_MARGIN));
    }

    #[test]
    fn test_interpolate() {
        let input = [0.0, 0.5, 1.0];
        let output = [0.0, 10.0, 0.0];
        assert_eq!(interpolate(-1.0, &input, &output), 0.0);
        assert_eq!(interpolate(0.25, &input, &output), 5.0);
        assert_eq!(interpolate(0.5, &input, &output), 10.0);
        assert_eq!(interpolate(0.75, &input, &output), 5.0);
        assert_eq!(interpolate(2.0, &input, &output), 0.0);
    }

    #[test]
    fn test_interlude_frame() {
        let centre = InterludeFrame::at(0.5);
        assert_eq!(centre.opacity, 1.0);
        assert_eq!(centre.scale, 1.0);
        assert_eq!(centre.y, 0.0);
        assert_eq!(centre.blur, 0.0);

        let before = InterludeFrame::at(0.1);
        assert_eq!(before.opacity, 0.0);
        assert_eq!(before.y, 40.0);
        assert_eq!(before.blur, 12.0);

        let after = InterludeFrame::at(0.9);
        assert_eq!(after.opacity, 0.0);
        assert_eq!(after.y, -40.0);
        assert_eq!(after.scale, 1.08);
    }

    #[test]
    fn test_parallax_frame() {
        let config = ParallaxConfig::default();
        assert_eq!(config.frame(0.5), ParallaxFrame::default());
        let start = config.frame(0.0);
        assert_eq!(start.offset_y, -120.0);
        assert_eq!(start.blur, 3.0);
        assert_eq!(config.frame(1.0).offset_y, 120.0);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let spring = Spring::default();
        let mut state = SpringState::default();
        for _ in 0..300 {
            state = spring.step(state, 100.0, 1.0 / 60.0);
        }
        assert!(spring.is_settled(state, 100.0), "{state:?}");
    }

    #[test]
    fn test_spring_splits_long_frames() {
        let spring = Spring::default();
        let state = spring.step(SpringState::default(), 50.0, 5.0);
        assert!(spring.is_settled(state, 50.0), "{state:?}");
        assert_eq!(spring.step(state, 50.0, 0.0), state);
    }
}
