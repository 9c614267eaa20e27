use ising::{Connection, IsingResult, LocalOperator, C64};
use rayon::prelude::*;

/// Local energy `E_loc(s) = Σ_s' <s'|H|s> ψ(s')/ψ(s)`.
///
/// `ratio(s, c)` must return `ψ(s')/ψ(s)` for the state `s'` reached from `s`
/// through `c`. It is never called for the diagonal term.
pub fn local_energy<O, F>(op: &O, state: &[i8], ratio: F) -> IsingResult<C64>
where
    O: LocalOperator + ?Sized,
    F: Fn(&[i8], Connection) -> C64,
{
    let elems = op.nonzero_elements(state)?;

    let mut e = C64::new(0.0, 0.0);
    for (amp, conn) in elems.iter() {
        if conn.is_identity() {
            e += amp;
        } else {
            e += amp * ratio(state, conn);
        }
    }

    Ok(e)
}

/// Local energies of a batch of configurations, evaluated in parallel.
/// Output order follows `samples`.
pub fn local_energies<O, F>(op: &O, samples: &[Vec<i8>], ratio: F) -> IsingResult<Vec<C64>>
where
    O: LocalOperator + Sync + ?Sized,
    F: Fn(&[i8], Connection) -> C64 + Sync,
{
    let energies = samples
        .par_iter()
        .map(|s| local_energy(op, s, &ratio))
        .collect::<IsingResult<Vec<C64>>>()?;

    tracing::debug!(
        samples = energies.len(),
        n_sites = op.n_sites(),
        "evaluated local energies"
    );

    Ok(energies)
}

/// `ψ(s')/ψ(s)` for the equal-amplitude state `|+...+>`.
pub fn uniform_ratio(_state: &[i8], _conn: Connection) -> C64 {
    C64::new(1.0, 0.0)
}
