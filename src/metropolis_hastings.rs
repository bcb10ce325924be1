/*!
# Metropolis-Hastings on the log scale

A random-walk Metropolis-Hastings sampler for a single parameter with
strictly positive support. Proposing directly on `theta` would generate
invalid non-positive candidates near the boundary, so the walk happens in
log space instead: `theta' = exp(Normal(ln(theta), step_sd))`. The walk is
symmetric in log space but not in `theta` space, which the acceptance ratio
corrects with the Jacobian term `-ln(theta)` on each side:

```text
log_alpha = [log_target(theta') - ln(theta)] - [log_target(theta) - ln(theta')]
accept if log_alpha >= ln(U),  U ~ Uniform(0, 1)
```

On rejection the chain records its previous value again; rejected proposals
never leave a gap in the draw history.

`step_sd` is a fixed tuning constant, never adapted. Aim for an acceptance
rate around 20-30% (see [`acceptance_rate`]): a tiny `step_sd` accepts
almost everything but mixes slowly, a huge one gets stuck rejecting.

[`acceptance_rate`]: MetropolisHastings::acceptance_rate

# Examples

```rust
use conjugate_mcmc::distributions::GammaTarget;
use conjugate_mcmc::metropolis_hastings::MetropolisHastings;

let target = GammaTarget::new(3.0, 1.0).unwrap();
let mut mh = MetropolisHastings::new(target, 0.8, 1.0).unwrap().set_seed(42);

let draws = mh.run(5_000, 1_000).unwrap();
assert_eq!(draws.nrows(), 4_000);
println!("acceptance rate: {:.2}", mh.acceptance_rate());
```
*/

use ndarray::{s, Array2};
use num_traits::Float;
use rand::rngs::SmallRng;
use rand::{thread_rng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::core::{check_run_args, run_chain, run_chain_with_progress, MarkovChain};
use crate::distributions::Target;

/// A single Metropolis-Hastings Markov chain over a strictly positive scalar.
///
/// The chain owns its RNG and carries an explicit seed; use
/// [`set_seed`](MetropolisHastings::set_seed) for bit-reproducible runs.
pub struct MetropolisHastings<T: Float, D> {
    /// The target distribution we want to sample from.
    pub target: D,

    /// Standard deviation of the Gaussian random walk in log space.
    pub step_sd: T,

    /// Current state of the Markov chain, a single positive scalar.
    pub current_state: Vec<T>,

    /// Random seed for reproducibility.
    pub seed: u64,

    /// RNG for this chain.
    pub rng: SmallRng,

    accepted: u64,
    proposed: u64,
}

impl<T, D> MetropolisHastings<T, D>
where
    T: Float,
    D: Target<T>,
    rand_distr::StandardNormal: Distribution<T>,
    rand_distr::Standard: Distribution<T>,
{
    /// Creates a new chain at `initial`, which must be strictly positive,
    /// with proposal standard deviation `step_sd > 0` in log space.
    pub fn new(target: D, step_sd: T, initial: T) -> Result<Self, String> {
        if step_sd <= T::zero() {
            return Err("Expected step_sd to be positive.".into());
        }
        if initial <= T::zero() {
            return Err("Expected the initial state to be positive.".into());
        }
        let seed = thread_rng().gen::<u64>();
        Ok(Self {
            target,
            step_sd,
            current_state: vec![initial],
            seed,
            rng: SmallRng::seed_from_u64(seed),
            accepted: 0,
            proposed: 0,
        })
    }

    /// Sets a new seed, reseeding the chain's RNG.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Fraction of proposals accepted so far. Zero before the first step.
    pub fn acceptance_rate(&self) -> f64 {
        if self.proposed == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.proposed as f64
    }

    /// Runs the chain for `n_steps` iterations, discarding the first
    /// `discard` rows as burn-in. Returns a one-column matrix of `theta`
    /// draws, one row per kept iteration.
    pub fn run(&mut self, n_steps: usize, discard: usize) -> Result<Array2<T>, String> {
        check_run_args(n_steps, discard)?;
        let samples = run_chain(self, n_steps);
        Ok(samples.slice(s![discard.., ..]).to_owned())
    }

    /// Same as [`run`](MetropolisHastings::run), with a progress bar.
    pub fn run_with_progress(&mut self, n_steps: usize, discard: usize) -> Result<Array2<T>, String> {
        check_run_args(n_steps, discard)?;
        let samples = run_chain_with_progress(self, n_steps);
        Ok(samples.slice(s![discard.., ..]).to_owned())
    }
}

impl<T, D> MarkovChain<T> for MetropolisHastings<T, D>
where
    T: Float,
    D: Target<T>,
    rand_distr::StandardNormal: Distribution<T>,
    rand_distr::Standard: Distribution<T>,
{
    /// Performs one accept/reject update in log space.
    fn step(&mut self) -> &Vec<T> {
        let current = self.current_state[0];
        let walk = Normal::new(current.ln(), self.step_sd)
            .expect("Expecting creation of normal distribution to succeed.");
        let proposed = walk.sample(&mut self.rng).exp();

        let log_accept_ratio = (self.target.unnorm_log_prob(proposed) - current.ln())
            - (self.target.unnorm_log_prob(current) - proposed.ln());

        self.proposed += 1;
        let u: T = self.rng.gen();
        if log_accept_ratio >= u.ln() {
            self.accepted += 1;
            self.current_state[0] = proposed;
        }
        &self.current_state
    }

    fn current_state(&self) -> &Vec<T> {
        &self.current_state
    }
}
