use super::Frequency;
use crate::constants::{CAPACITANCE, MAX_FREQUENCY, STATIC_POWER};

/// CMOS-style power approximation: static leakage plus a dynamic term
/// proportional to `V² · f · activity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerModel {
    static_power: f64,
    capacitance: f64,
}

impl PowerModel {
    pub fn new(static_power: f64, capacitance: f64) -> Self {
        Self { static_power, capacitance }
    }

    /// Supply voltage scales linearly from 0.5 V (at 0 MHz) to 1.0 V (at 2000 MHz).
    pub fn voltage(frequency: Frequency) -> f64 {
        0.5 + (frequency as f64 / MAX_FREQUENCY as f64) * 0.5
    }

    /// Instantaneous power in watts. `frequency` is not range checked and
    /// `ratio` is expected in [0, 1].
    pub fn calculate_power(&self, frequency: Frequency, ratio: f64) -> f64 {
        let voltage = Self::voltage(frequency);
        let dynamic = self.capacitance * voltage * voltage * frequency as f64 * ratio;
        self.static_power + dynamic
    }
}

impl Default for PowerModel {
    fn default() -> Self {
        Self::new(STATIC_POWER, CAPACITANCE)
    }
}
