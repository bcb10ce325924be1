//! End-to-end test for the Normal-Inverse-Gamma Gibbs sampler: simulate data
//! with known parameters and check that the posterior concentrates on them.

use conjugate_mcmc::gibbs::{NormalInvGammaGibbs, NormalInvGammaPrior};
use conjugate_mcmc::stats::summarize;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

const TRUE_MU: f64 = 2.0;
const TRUE_SIGMA2: f64 = 1.5;
const N_OBS: usize = 100;
const N_STEPS: usize = 2_000;
const BURNIN: usize = 500;
const SEED: u64 = 42;

fn simulated_data() -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let noise = Normal::new(TRUE_MU, TRUE_SIGMA2.sqrt()).unwrap();
    (0..N_OBS).map(|_| noise.sample(&mut rng)).collect()
}

fn prior() -> NormalInvGammaPrior<f64> {
    NormalInvGammaPrior::new(2.0, 1.0, 0.0, 0.5).unwrap()
}

#[test]
fn posterior_recovers_simulated_parameters() {
    let y = simulated_data();
    let mut sampler = NormalInvGammaGibbs::new(&y, prior()).unwrap().set_seed(SEED);

    let draws = sampler.run(N_STEPS, BURNIN).unwrap();
    assert_eq!(draws.nrows(), N_STEPS - BURNIN);
    assert_eq!(draws.ncols(), 2);

    let mu = summarize(draws.column(0)).unwrap();
    let sigma2 = summarize(draws.column(1)).unwrap();

    assert!(
        (mu.mean - TRUE_MU).abs() < 0.5,
        "Posterior mean of mu ({}) deviates too much from {}",
        mu.mean,
        TRUE_MU
    );
    assert!(
        (mu.mean - TRUE_MU).abs() < 4.0 * mu.sd,
        "True mu {} lies outside four posterior standard deviations of {}",
        TRUE_MU,
        mu.mean
    );
    assert!(
        (sigma2.mean - TRUE_SIGMA2).abs() < 1.0,
        "Posterior mean of sigma^2 ({}) deviates too much from {}",
        sigma2.mean,
        TRUE_SIGMA2
    );

    // Credible intervals must be ordered and bracket the median.
    assert!(mu.q025 < mu.median && mu.median < mu.q975);
    assert!(sigma2.q025 < sigma2.median && sigma2.median < sigma2.q975);
}

#[test]
fn sigma2_history_is_strictly_positive() {
    let y = simulated_data();
    let mut sampler = NormalInvGammaGibbs::new(&y, prior()).unwrap().set_seed(SEED);
    let draws = sampler.run(N_STEPS, 0).unwrap();
    assert!(
        draws.column(1).iter().all(|&v| v > 0.0),
        "Expected the sigma^2 history to contain only strictly positive values."
    );
}

#[test]
fn repeated_seeded_runs_are_bit_identical() {
    let y = simulated_data();
    let mut a = NormalInvGammaGibbs::new(&y, prior()).unwrap().set_seed(SEED);
    let mut b = NormalInvGammaGibbs::new(&y, prior()).unwrap().set_seed(SEED);
    assert_eq!(
        a.run(N_STEPS, BURNIN).unwrap(),
        b.run(N_STEPS, BURNIN).unwrap()
    );
}
