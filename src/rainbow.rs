//! Sinusoidal color cycling for the cube tint.
//!
//! Each channel follows `(1 + sin θ) / 2` with its own phase angle `θ`
//! (degrees). Every frame each angle moves forward by a fixed step and snaps
//! back to zero once it has reached 360.

/// Three phase angles producing a slowly shifting RGB tint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rainbow {
    /// Phase of the red, green and blue channels, in degrees.
    pub phases: [f32; 3],
    /// Degrees added to every phase per frame.
    pub step: f32,
}

impl Default for Rainbow {
    fn default() -> Self {
        Self {
            phases: [0.0, 120.0, 240.0],
            step: 0.1,
        }
    }
}

impl Rainbow {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    /// Current tint, each channel in `[0, 1]`.
    pub fn color(&self) -> [f32; 3] {
        self.phases.map(channel)
    }

    /// Moves every phase forward by one step.
    pub fn advance(&mut self) {
        for theta in &mut self.phases {
            *theta = if *theta < 360.0 { *theta + self.step } else { 0.0 };
        }
    }
}

fn channel(theta_degrees: f32) -> f32 {
    (1.0 + theta_degrees.to_radians().sin()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn channel_range() {
        assert_abs_diff_eq!(channel(0.0), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(channel(90.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(channel(270.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn stays_in_unit_range_over_many_frames() {
        let mut rainbow = Rainbow::default();
        for _ in 0..10_000 {
            for c in rainbow.color() {
                assert!((0.0..=1.0).contains(&c));
            }
            rainbow.advance();
        }
    }

    #[test]
    fn phase_wraps_after_reaching_360() {
        let mut rainbow = Rainbow {
            phases: [359.95, 360.0, 0.0],
            step: 0.1,
        };
        rainbow.advance();
        assert_abs_diff_eq!(rainbow.phases[0], 360.05, epsilon = 1e-3);
        assert_eq!(rainbow.phases[1], 0.0);
        assert_abs_diff_eq!(rainbow.phases[2], 0.1, epsilon = 1e-6);

        rainbow.advance();
        assert_eq!(rainbow.phases[0], 0.0);
    }

    #[test]
    fn custom_step() {
        let mut rainbow = Rainbow::new(10.0);
        rainbow.advance();
        assert_eq!(rainbow.phases, [10.0, 130.0, 250.0]);
    }
}
