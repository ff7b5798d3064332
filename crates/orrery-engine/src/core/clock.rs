use crate::core::body::CelestialBody;

/// Fixed nominal integration step per tick.
///
/// The simulation advances by this constant every frame rather than by
/// measured wall-clock delta, so simulation rate is tied to frame rate.
/// This matches the behavior the scene was tuned against and is kept
/// deliberately (see DESIGN.md).
pub const TIME_STEP: f32 = 0.01;

/// Discrete speed-adjustment commands, driven by key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedAdjust {
    /// Additive bump: rotation +0.1, orbit +0.05.
    Increase,
    /// Additive cut with floors 0.1 / 0.05.
    Decrease,
    /// Multiplicative x1.2 on both.
    SpeedUp,
    /// Multiplicative x0.8 with floors 0.05 / 0.025.
    SlowDown,
}

/// Global speed multipliers plus the fixed integration step.
///
/// Every body's effective speed is base x multiplier, computed fresh in
/// `advance`, so an adjustment takes effect on the very next tick for
/// every body at once.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    pub rotation_multiplier: f32,
    pub orbit_multiplier: f32,
    dt: f32,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            rotation_multiplier: 1.0,
            orbit_multiplier: 0.5,
            dt: TIME_STEP,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Advance both angles by one fixed step using the current multipliers.
    pub fn advance(&self, body: &mut CelestialBody) {
        body.orbit_angle += body.base_orbit_speed * self.orbit_multiplier * self.dt;
        body.rotation_angle += body.base_rotation_speed * self.rotation_multiplier * self.dt;
    }

    /// Apply a discrete adjustment. Floors keep the multipliers strictly
    /// positive so the simulation can neither freeze nor invert.
    pub fn adjust(&mut self, adjust: SpeedAdjust) {
        match adjust {
            SpeedAdjust::Increase => {
                self.rotation_multiplier += 0.1;
                self.orbit_multiplier += 0.05;
            }
            SpeedAdjust::Decrease => {
                self.rotation_multiplier = (self.rotation_multiplier - 0.1).max(0.1);
                self.orbit_multiplier = (self.orbit_multiplier - 0.05).max(0.05);
            }
            SpeedAdjust::SpeedUp => {
                self.rotation_multiplier *= 1.2;
                self.orbit_multiplier *= 1.2;
            }
            SpeedAdjust::SlowDown => {
                self.rotation_multiplier = (self.rotation_multiplier * 0.8).max(0.05);
                self.orbit_multiplier = (self.orbit_multiplier * 0.8).max(0.025);
            }
        }
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}
