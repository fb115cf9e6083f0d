/// One point of the energy trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSample {
    pub time: f64,   // s since the run started
    pub energy: f64, // cumulative J
}

/// Cumulative energy samples in completion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyTrace {
    samples: Vec<TraceSample>,
}

impl EnergyTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, time: f64, energy: f64) {
        self.samples.push(TraceSample { time, energy });
    }

    pub fn samples(&self) -> &[TraceSample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&TraceSample> {
        self.samples.last()
    }

    /// Energy of the last sample, 0 before any task completes.
    pub fn final_energy(&self) -> f64 {
        self.last().map_or(0.0, |s| s.energy)
    }

    pub fn max_energy(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.energy).reduce(f64::max)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<TraceSample> {
        self.samples.iter()
    }
}
