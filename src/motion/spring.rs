//! Damped spring smoothing for scroll-mapped values.
//!
//! Raw scroll deltas arrive in coarse jumps; feeding them straight into a
//! transform makes the motion visibly discontinuous. A [`Spring`] chases the
//! raw value in the time domain instead, so every mapped parameter settles
//! onto its target along a spring response.

/// Integration sub-step ceiling. Stiff springs go unstable with plain Euler
/// at large steps, so frames are subdivided.
const MAX_SUBSTEP: f64 = 1.0 / 120.0;

/// Frame delta ceiling; a backgrounded tab can report seconds between
/// frames.
const MAX_FRAME_DT: f64 = 1.0 / 15.0;

/// Displacement under which the spring is considered at rest.
pub const REST_DELTA: f64 = 0.001;

/// Velocity under which the spring is considered at rest.
const REST_SPEED: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringConfig {
    /// Damping at exactly `2·√k`, the fastest response with no overshoot.
    pub fn critically_damped(stiffness: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * stiffness.sqrt(),
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        // The response used by the site's parallax layers.
        Self {
            stiffness: 100.0,
            damping: 30.0,
        }
    }
}

/// One smoothed scalar: current value, current velocity, and the raw target
/// it chases. Owned exclusively by the view instance that renders it.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to `value` with no transient.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance the spring by `dt` seconds and return the new value.
    /// Settling snaps exactly onto the target so the motion terminates.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let mut remaining = dt.clamp(0.0, MAX_FRAME_DT);
        while remaining > 0.0 {
            let step = remaining.min(MAX_SUBSTEP);
            let accel = -self.config.stiffness * (self.value - self.target)
                - self.config.damping * self.velocity;
            self.velocity += accel * step;
            self.value += self.velocity * step;
            remaining -= step;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f64) -> f64 {
        let frames = (seconds * 60.0) as usize;
        let mut peak = spring.value();
        for _ in 0..frames {
            peak = peak.max(spring.tick(1.0 / 60.0));
        }
        peak
    }

    #[test]
    fn converges_onto_the_target() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        run(&mut spring, 5.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn critical_damping_does_not_overshoot() {
        let mut spring = Spring::new(0.0, SpringConfig::critically_damped(100.0));
        spring.set_target(1.0);
        let peak = run(&mut spring, 5.0);
        assert!(peak <= 1.0 + REST_DELTA, "peak {peak} overshot the target");
    }

    #[test]
    fn site_response_is_overdamped() {
        // stiffness 100 / damping 30 sits above critical (20), so the same
        // no-overshoot guarantee holds for the default config.
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        let peak = run(&mut spring, 5.0);
        assert!(peak <= 1.0 + REST_DELTA);
    }

    #[test]
    fn retargeting_midflight_keeps_integrating() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        run(&mut spring, 0.2);
        spring.set_target(-1.0);
        run(&mut spring, 5.0);
        assert_eq!(spring.value(), -1.0);
    }

    #[test]
    fn huge_frame_deltas_stay_stable() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        for _ in 0..100 {
            let value = spring.tick(3.0); // tab was parked in the background
            assert!(value.is_finite());
            assert!((-2.0..=2.0).contains(&value));
        }
    }

    #[test]
    fn snap_kills_the_transient() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        spring.tick(0.1);
        spring.snap_to(0.5);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 0.5);
    }
}
