use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// Deterministic SHAKE256 stream used to draw spin configurations.
///
/// The same seed always reproduces the same sequence, so sampled
/// configurations can be regenerated on any worker thread.
pub struct ONDRng {
    state: [u8; 32],
    step: u64,
}

impl ONDRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"OND_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Uniform draw in `[0, 1]`, domain-separated by `ctx`.
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        let mut out = [0u8; 8];
        self.advance(ctx, &mut out);
        (u64::from_be_bytes(out) as f64) / (u64::MAX as f64)
    }

    /// A single Pauli-Z eigenvalue, +1 or -1 with equal probability.
    pub fn next_spin(&mut self, ctx: &[u8]) -> i8 {
        let mut out = [0u8; 1];
        self.advance(ctx, &mut out);
        if out[0] & 1 == 0 {
            1
        } else {
            -1
        }
    }

    /// Uniformly random basis state of `n` sites.
    pub fn spin_config(&mut self, n: usize) -> Vec<i8> {
        (0..n).map(|_| self.next_spin(b"SPIN_CONFIG")).collect()
    }

    fn advance(&mut self, ctx: &[u8], out: &mut [u8]) {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        shake(&[&state, &step_bytes, b"QSIM"], &mut self.state);

        shake(&[&self.state, ctx], out);

        if self.state[0] < 16 {
            let state = self.state;
            shake(&[&state, b"SKIP"], &mut self.state);
        }
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
