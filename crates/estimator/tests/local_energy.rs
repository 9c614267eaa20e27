use estimator::{local_energies, local_energy, uniform_ratio, EnergyStats};
use ising::{state, Connection, IsingError, TransverseIsing, C64};
use rng::ONDRng;
use std::sync::atomic::{AtomicUsize, Ordering};

fn all_states(n: usize) -> Vec<Vec<i8>> {
    (0..(1u64 << n)).map(|bits| state::from_bits(bits, n).unwrap()).collect()
}

#[test]
fn uniform_state_local_energy_is_diagonal_minus_hn() {
    let h_field = 0.75;
    let h = TransverseIsing::new(5, h_field, true).unwrap();

    for s in all_states(5) {
        let e = local_energy(&h, &s, uniform_ratio).unwrap();
        let expected = h.diagonal(&s).unwrap() - h_field * 5.0;
        assert!((e.re - expected).abs() < 1e-12, "s = {:?}, e = {}", s, e);
        assert_eq!(e.im, 0.0);
    }
}

#[test]
fn uniform_state_exact_energy() {
    // <+|σzσz|+> = 0, so only the field term survives.
    for n in 2..=8 {
        for pbc in [false, true] {
            let h_field = 1.3;
            let h = TransverseIsing::new(n, h_field, pbc).unwrap();
            let energies = local_energies(&h, &all_states(n), uniform_ratio).unwrap();
            let stats = EnergyStats::from_samples(&energies).unwrap();

            let exact = -h_field * n as f64;
            assert!(
                (stats.mean - exact).abs() < 1e-12,
                "n = {}, pbc = {}, mean = {}",
                n,
                pbc,
                stats.mean
            );
        }
    }
}

#[test]
fn product_state_exact_energy() {
    // ψ(s) = Π_i (up if s_i = +1 else down)
    let (up, down) = (0.8f64, 0.35f64);
    let norm = up * up + down * down;
    let sx = 2.0 * up * down / norm;
    let sz = (up * up - down * down) / norm;

    let n = 6;
    let h_field = 0.9;

    for pbc in [false, true] {
        let h = TransverseIsing::new(n, h_field, pbc).unwrap();
        let ratio = |s: &[i8], c: Connection| {
            let k = c.flipped_sites()[0];
            if s[k] == 1 {
                C64::new(down / up, 0.0)
            } else {
                C64::new(up / down, 0.0)
            }
        };

        let mut weighted = 0.0;
        for s in all_states(n) {
            let p: f64 = s
                .iter()
                .map(|&x| if x == 1 { up * up / norm } else { down * down / norm })
                .product();
            weighted += p * local_energy(&h, &s, ratio).unwrap().re;
        }

        let exact = -h_field * n as f64 * sx - h.bonds().len() as f64 * sz * sz;
        assert!(
            (weighted - exact).abs() < 1e-12,
            "pbc = {}, weighted = {}, exact = {}",
            pbc,
            weighted,
            exact
        );
    }
}

#[test]
fn ratio_is_called_once_per_flip() {
    let h = TransverseIsing::new(7, 1.0, false).unwrap();
    let calls = AtomicUsize::new(0);

    let ratio = |_: &[i8], c: Connection| {
        assert!(!c.is_identity());
        calls.fetch_add(1, Ordering::Relaxed);
        C64::new(1.0, 0.0)
    };
    local_energy(&h, &state::neel(7), ratio).unwrap();

    assert_eq!(calls.load(Ordering::Relaxed), 7);
}

#[test]
fn parallel_batch_matches_sequential() {
    let h = TransverseIsing::new(12, 0.6, true).unwrap();
    let mut rng = ONDRng::new(b"batch");
    let samples: Vec<Vec<i8>> = (0..200).map(|_| rng.spin_config(12)).collect();

    let parallel = local_energies(&h, &samples, uniform_ratio).unwrap();
    let sequential: Vec<C64> = samples
        .iter()
        .map(|s| local_energy(&h, s, uniform_ratio).unwrap())
        .collect();

    assert_eq!(parallel, sequential);
}

#[test]
fn bad_sample_fails_the_batch() {
    let h = TransverseIsing::new(4, 0.6, false).unwrap();
    let samples = vec![state::all_up(4), vec![1, -1, 1], state::neel(4)];

    let err = local_energies(&h, &samples, uniform_ratio).unwrap_err();
    assert_eq!(err, IsingError::StateLength { expected: 4, got: 3 });
}
