//! Pointer-driven parallax.
//!
//! Pointer samples over the page container become a raw target offset, and a
//! set of damped springs chase that target at different paces so the
//! decorative layers drift apart slightly.

pub const POINTER_GAIN: f64 = 0.15;
/// Lowest allowed raw vertical offset. There is no matching upper bound.
pub const RAW_Y_MIN: f64 = -30.0;

const SPRING_SUBSTEP_SECS: f64 = 1.0 / 240.0;
const MAX_FRAME_SECS: f64 = 0.064;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.05;

pub const HEADING_SPRING: SpringConfig = SpringConfig::new(100.0, 30.0);
pub const ROSE_SPRING: SpringConfig = SpringConfig::new(80.0, 25.0);
pub const SKY_SPRING: SpringConfig = SpringConfig::new(90.0, 35.0);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub const ZERO: PointerOffset = PointerOffset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    fn is_degenerate(&self) -> bool {
        let finite = [self.left, self.top, self.width, self.height]
            .iter()
            .all(|value| value.is_finite());
        !finite || self.width <= 0.0 || self.height <= 0.0
    }
}

/// Offset of the pointer from the container center, scaled by
/// [`POINTER_GAIN`], with the vertical component floored at [`RAW_Y_MIN`].
pub fn raw_target(bounds: ContainerBounds, pointer_x: f64, pointer_y: f64) -> PointerOffset {
    if bounds.is_degenerate() || !pointer_x.is_finite() || !pointer_y.is_finite() {
        return PointerOffset::ZERO;
    }
    let center_x = bounds.width / 2.0;
    let center_y = bounds.height / 2.0;
    let dx = (pointer_x - bounds.left - center_x) * POINTER_GAIN;
    let dy = (pointer_y - bounds.top - center_y) * POINTER_GAIN;
    PointerOffset::new(dx, dy.max(RAW_Y_MIN))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Axis {
    value: f64,
    velocity: f64,
}

impl Axis {
    fn advance(&mut self, target: f64, config: SpringConfig, h: f64) {
        let force = -config.stiffness * (self.value - target) - config.damping * self.velocity;
        self.velocity += force * h;
        self.value += self.velocity * h;
    }

    fn settle(&mut self, target: f64) {
        if (self.value - target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.value = target;
            self.velocity = 0.0;
        }
    }
}

/// Unit-mass damped spring on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    target: PointerOffset,
    x: Axis,
    y: Axis,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            target: PointerOffset::ZERO,
            x: Axis::default(),
            y: Axis::default(),
        }
    }

    pub fn set_target(&mut self, target: PointerOffset) {
        self.target = target;
    }

    pub fn value(&self) -> PointerOffset {
        PointerOffset::new(self.x.value, self.y.value)
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.value == self.target.x
            && self.y.value == self.target.y
            && self.x.velocity == 0.0
            && self.y.velocity == 0.0
    }

    /// Advances by `dt` seconds and returns the new displayed offset.
    /// Oversized frame gaps are clamped rather than integrated.
    pub fn step(&mut self, dt: f64) -> PointerOffset {
        if self.is_at_rest() || !dt.is_finite() || dt <= 0.0 {
            return self.value();
        }
        let mut remaining = dt.min(MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SECS);
            self.x.advance(self.target.x, self.config, h);
            self.y.advance(self.target.y, self.config, h);
            remaining -= h;
        }
        self.x.settle(self.target.x);
        self.y.settle(self.target.y);
        self.value()
    }
}

/// Smoothed offsets for each decorative layer in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxFrame {
    pub heading: PointerOffset,
    pub rose: PointerOffset,
    pub sky: PointerOffset,
}

#[derive(Clone, Debug)]
pub struct ParallaxRig {
    heading: Spring,
    rose: Spring,
    sky: Spring,
}

impl Default for ParallaxRig {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallaxRig {
    pub fn new() -> Self {
        Self {
            heading: Spring::new(HEADING_SPRING),
            rose: Spring::new(ROSE_SPRING),
            sky: Spring::new(SKY_SPRING),
        }
    }

    pub fn set_target(&mut self, target: PointerOffset) {
        for spring in self.springs_mut() {
            spring.set_target(target);
        }
    }

    pub fn on_pointer_move(&mut self, bounds: ContainerBounds, pointer_x: f64, pointer_y: f64) {
        self.set_target(raw_target(bounds, pointer_x, pointer_y));
    }

    /// Advances every spring; returns `true` while any of them still moves.
    pub fn step(&mut self, dt: f64) -> bool {
        for spring in self.springs_mut() {
            spring.step(dt);
        }
        !self.is_at_rest()
    }

    pub fn is_at_rest(&self) -> bool {
        self.heading.is_at_rest() && self.rose.is_at_rest() && self.sky.is_at_rest()
    }

    pub fn frame(&self) -> ParallaxFrame {
        ParallaxFrame {
            heading: self.heading.value(),
            rose: self.rose.value(),
            sky: self.sky.value(),
        }
    }

    fn springs_mut(&mut self) -> [&mut Spring; 3] {
        [&mut self.heading, &mut self.rose, &mut self.sky]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f64) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::new(ROSE_SPRING);
        spring.set_target(PointerOffset::new(40.0, -30.0));
        run(&mut spring, 5.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), PointerOffset::new(40.0, -30.0));
    }

    #[test]
    fn long_frame_gap_is_clamped() {
        let mut spring = Spring::new(HEADING_SPRING);
        spring.set_target(PointerOffset::new(100.0, 0.0));
        let value = spring.step(10.0);
        assert!(value.x > 0.0 && value.x < 100.0);
    }

    #[test]
    fn idle_spring_ignores_bad_deltas() {
        let mut spring = Spring::new(SKY_SPRING);
        spring.set_target(PointerOffset::new(5.0, 5.0));
        assert_eq!(spring.step(f64::NAN), PointerOffset::ZERO);
        assert_eq!(spring.step(-1.0), PointerOffset::ZERO);
    }
}
