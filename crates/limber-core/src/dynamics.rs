//! Second-order dynamics: a spring-damper filter that makes a value chase a
//! target with configurable frequency, damping and initial response.

use std::f64::consts::PI;

/// Second-order system `y + k1*y' + k2*y'' = x + k3*x'`
///
/// - `frequency` (Hz): how fast the output responds to changes
/// - `zeta`: damping; 0 vibrates forever, 1 is critically damped
/// - `response`: < 0 anticipates, 0 eases in, 1 follows instantly, > 1 overshoots
#[derive(Debug, Clone)]
pub struct SecondOrderDynamics {
    /// Previous input, used to estimate the input velocity
    xp: f64,
    y: f64,
    yd: f64,
    k1: f64,
    k2: f64,
    k3: f64,
}

impl SecondOrderDynamics {
    /// Create a filter resting at zero
    pub fn new(frequency: f64, zeta: f64, response: f64) -> Self {
        Self::with_initial(frequency, zeta, response, 0.0)
    }

    /// Create a filter resting at `x0`
    pub fn with_initial(frequency: f64, zeta: f64, response: f64, x0: f64) -> Self {
        let w = 2.0 * PI * frequency;
        Self {
            xp: x0,
            y: x0,
            yd: 0.0,
            k1: zeta / (PI * frequency),
            k2: 1.0 / (w * w),
            k3: response * zeta / w,
        }
    }

    /// Current filtered value
    pub fn value(&self) -> f64 {
        self.y
    }

    /// Advance by `dt` towards input `x`.
    ///
    /// `xd` is the input velocity; when `None` it is estimated from the
    /// previous input.
    pub fn update(&mut self, dt: f64, x: f64, xd: Option<f64>) -> f64 {
        let xd = match xd {
            Some(v) => v,
            None => {
                let v = (x - self.xp) / dt;
                self.xp = x;
                v
            }
        };

        // Clamp k2 so large steps stay stable
        let k2_stable = self
            .k2
            .max(dt * dt / 2.0 + dt * self.k1 / 2.0)
            .max(dt * self.k1);

        self.y += dt * self.yd;
        self.yd += dt * (x + self.k3 * xd - self.y - self.k1 * self.yd) / k2_stable;

        self.y
    }
}
