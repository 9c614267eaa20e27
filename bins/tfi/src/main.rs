use anyhow::{ensure, Context, Result};
use clap::Parser;
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::filter::LevelFilter;

use estimator::{local_energies, uniform_ratio, EnergyStats};
use ising::{LocalOperator, NonzeroElements, TransverseIsing};
use rng::ONDRng;

/// Transverse-field Ising local operator: query and timing driver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chain length
    #[arg(long, default_value_t = 16)]
    n_spins: usize,

    /// Transverse field h
    #[arg(long, default_value_t = 1.0)]
    h_field: f64,

    /// Periodic boundary conditions
    #[arg(long)]
    pbc: bool,

    /// Number of random configurations to query
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "default-seed")]
    seed: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Print the result sets of the first N configurations
    #[arg(long, default_value_t = 1)]
    show: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = parse_level(&args.log_level);
    tracing_subscriber::fmt()
        .with_max_level(level.unwrap_or(LevelFilter::INFO))
        .with_target(false)
        .init();
    if level.is_none() {
        warn!(log_level = %args.log_level, "unrecognised log level, falling back to info");
    }

    ensure!(args.samples > 0, "samples must be > 0");

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    let h = TransverseIsing::new(args.n_spins, args.h_field, args.pbc)
        .context("invalid operator configuration")?;
    info!(
        n_spins = h.n_spins(),
        h_field = h.h_field(),
        pbc = h.is_pbc(),
        bonds = h.bonds().len(),
        "operator ready"
    );

    let mut rng = ONDRng::new(args.seed.as_bytes());
    let samples: Vec<Vec<i8>> = (0..args.samples)
        .map(|_| rng.spin_config(h.n_sites()))
        .collect();

    for s in samples.iter().take(args.show) {
        print_elements(s, &h.nonzero_elements(s)?);
    }

    // Sequential queries through one reused buffer.
    let mut buf = NonzeroElements::new();
    let mut diag_sum = 0.0;
    let start = Instant::now();
    for s in &samples {
        h.nonzero_elements_into(s, &mut buf)?;
        diag_sum += buf.diagonal().map_or(0.0, |d| d.re);
    }
    let elapsed = start.elapsed().as_secs_f64();
    info!(
        queries = samples.len(),
        ns_per_query = 1e9 * elapsed / samples.len() as f64,
        mean_diagonal = diag_sum / samples.len() as f64,
        "sequential queries"
    );

    let start = Instant::now();
    let energies = local_energies(&h, &samples, uniform_ratio)?;
    let elapsed = start.elapsed().as_secs_f64();
    debug!(threads = rayon::current_num_threads(), "parallel batch done");

    let stats = EnergyStats::from_samples(&energies).context("no local energies")?;
    println!(
        "E_loc(|+>) = {:.6} ± {:.6}  (exact {:.6}, samples = {}, {:.3} s)",
        stats.mean,
        stats.std_error,
        -h.h_field() * h.n_spins() as f64,
        stats.count,
        elapsed
    );

    Ok(())
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.parse::<LevelFilter>().ok()
}

fn print_elements(state: &[i8], elems: &NonzeroElements) {
    let spins: String = state
        .iter()
        .map(|&s| if s > 0 { '↑' } else { '↓' })
        .collect();
    println!("state {}", spins);
    for (amp, conn) in elems.iter() {
        println!("  {:?} -> {:.3}", conn, amp);
    }
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn known_levels_parse() {
        assert_eq!(parse_level("trace"), Some(LevelFilter::TRACE));
        assert_eq!(parse_level("warn"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
    }

    #[test]
    fn misspelled_level_is_reported_as_unknown() {
        assert_eq!(parse_level("tarce"), None);
        assert_eq!(parse_level("verbose"), None);
    }
}
