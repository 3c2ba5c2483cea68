//! Spring settling and fling distance for list scrolling.

/// Damped harmonic oscillator pulling a value towards its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub damping_ratio: f32,
    pub stiffness: f32,
}

impl Spring {
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;
    pub const STIFFNESS_LOW: f32 = 200.0;
    pub const STIFFNESS_HIGH: f32 = 10_000.0;

    /// Used to settle after a drag.
    pub const NO_BOUNCY_LOW: Spring = Spring {
        damping_ratio: Self::DAMPING_RATIO_NO_BOUNCY,
        stiffness: Self::STIFFNESS_LOW,
    };

    /// Used for key-driven moves between items.
    pub const NO_BOUNCY_HIGH: Spring = Spring {
        damping_ratio: Self::DAMPING_RATIO_NO_BOUNCY,
        stiffness: Self::STIFFNESS_HIGH,
    };

    /// Displacement from the target and velocity after `dt` seconds, given
    /// the current displacement and velocity (px and px/s).
    pub fn advance(&self, displacement: f32, velocity: f32, dt: f32) -> (f32, f32) {
        let x0 = displacement as f64;
        let v0 = velocity as f64;
        let t = dt as f64;
        let zeta = self.damping_ratio as f64;
        let omega = (self.stiffness as f64).sqrt();

        let (x, v) = if zeta > 1.0 {
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let gamma_plus = -zeta * omega + root;
            let gamma_minus = -zeta * omega - root;
            let coeff_b = (gamma_minus * x0 - v0) / (gamma_minus - gamma_plus);
            let coeff_a = x0 - coeff_b;
            let ea = (gamma_minus * t).exp();
            let eb = (gamma_plus * t).exp();
            (
                coeff_a * ea + coeff_b * eb,
                coeff_a * gamma_minus * ea + coeff_b * gamma_plus * eb,
            )
        } else if zeta == 1.0 {
            let coeff_a = x0;
            let coeff_b = v0 + omega * x0;
            let e = (-omega * t).exp();
            let x = (coeff_a + coeff_b * t) * e;
            (x, x * -omega + coeff_b * e)
        } else {
            let r = -zeta * omega;
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let cos_coeff = x0;
            let sin_coeff = (-r * x0 + v0) / damped;
            let e = (r * t).exp();
            let (s, c) = (damped * t).sin_cos();
            let x = e * (cos_coeff * c + sin_coeff * s);
            (x, x * r + e * (-damped * cos_coeff * s + damped * sin_coeff * c))
        };
        (x as f32, v as f32)
    }
}

const INFLEXION: f64 = 0.35;
const SCROLL_FRICTION: f64 = 0.015;
const GRAVITY_EARTH: f64 = 9.80665;
const INCHES_PER_METER: f64 = 39.37;

/// Distance a fling travels before friction stops it, using the spline
/// model Android scrollers use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingDecay {
    physical_coeff: f64,
}

impl FlingDecay {
    /// `density` is the display density multiplier (1.0 = 160 dpi).
    pub fn new(density: f32) -> Self {
        let density = if density > 0.0 { density as f64 } else { 1.0 };
        FlingDecay {
            physical_coeff: GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * 0.84,
        }
    }

    pub fn fling_distance(&self, velocity: f32) -> f32 {
        let speed = (velocity as f64).abs();
        if speed == 0.0 || !speed.is_finite() {
            return 0.0;
        }
        let deceleration_rate = 0.78f64.ln() / 0.9f64.ln();
        let scale = SCROLL_FRICTION * self.physical_coeff;
        let l = (INFLEXION * speed / scale).ln();
        (scale * (deceleration_rate / (deceleration_rate - 1.0) * l).exp()) as f32
    }

    /// Where a value moving at `velocity` px/s comes to rest.
    pub fn target_value(&self, initial: f32, velocity: f32) -> f32 {
        initial + self.fling_distance(velocity).copysign(velocity)
    }
}

impl Default for FlingDecay {
    fn default() -> Self {
        FlingDecay::new(1.0)
    }
}
