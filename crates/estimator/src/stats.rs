use ising::C64;

/// Mean and spread of the real part of a set of local energies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyStats {
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    pub std_error: f64,
    pub count: usize,
}

impl EnergyStats {
    pub fn from_samples(energies: &[C64]) -> Option<Self> {
        if energies.is_empty() {
            return None;
        }

        let count = energies.len();
        let n = count as f64;

        let mut total = 0.0;
        for e in energies {
            total += e.re;
        }
        let mean = total / n;

        let mut sq = 0.0;
        for e in energies {
            sq += (e.re - mean) * (e.re - mean);
        }
        let variance = sq / n;

        Some(Self {
            mean,
            variance,
            std_error: (variance / n).sqrt(),
            count,
        })
    }
}
