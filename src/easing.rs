use {lerp::Lerp, serde::Deserialize};

/// Curve applied to the linear time fraction of a committed page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Smoothstep ease-in/ease-out
    #[default]
    Smooth,
    /// Cosine ease for a softer start
    Cosine,
    /// Cubic ease-in-out
    Cubic,
    /// Perlin smootherstep (quintic)
    Perlin,
    /// Exponential ease-in-out
    Exponential,
}

impl Easing {
    /// Maps `t` in `[0, 1]` to an eased fraction in `[0, 1]`.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smooth => t * t * (3.0 - 2.0 * t),
            Self::Cosine => (1.0 - f32::cos(t * std::f32::consts::PI)) / 2.0,
            Self::Cubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let f = 2.0 * t - 2.0;
                    1.0 + f * f * f / 2.0
                }
            }
            Self::Perlin => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
            Self::Exponential => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    0.5 * f32::powf(2.0, 20.0 * t - 10.0)
                } else {
                    1.0 - 0.5 * f32::powf(2.0, -20.0 * t + 10.0)
                }
            }
        }
    }

    /// Eased position between `from` and `to` at time fraction `t`.
    pub fn between(self, from: f32, to: f32, t: f32) -> f32 {
        from.lerp(to, self.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assert2::check as assert};

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::Smooth,
        Easing::Cosine,
        Easing::Cubic,
        Easing::Perlin,
        Easing::Exponential,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for easing in ALL {
            assert!(easing.apply(-3.0).abs() < 1e-5);
            assert!((easing.apply(7.0) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in ALL {
            let mut last = 0.0_f32;
            for step in 0..=20 {
                let value = easing.apply(step as f32 / 20.0);
                assert!(value + 1e-5 >= last, "{easing:?} dipped at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn test_between_starts_from_drag_progress() {
        assert!((Easing::Linear.between(0.4, 1.0, 0.5) - 0.7).abs() < 1e-5);
        assert!((Easing::Smooth.between(0.4, 1.0, 0.0) - 0.4).abs() < 1e-5);
    }
}
