/*!
# Gibbs sampler for the Normal-Inverse-Gamma conjugate model

The model is `y_i ~ Normal(mu, sigma^2)` i.i.d. with the conjugate prior
`sigma^2 ~ InverseGamma(alpha, beta)` and `mu | sigma^2 ~ Normal(m, kappa * sigma^2)`.
Conjugacy makes both full conditionals available in closed form, so the
sampler alternates exact draws and never rejects:

- `mu | sigma^2, y ~ Normal(mu*, sigma^2 / (n + 1/kappa))` with
  `mu* = (n * ybar + m/kappa) / (n + 1/kappa)`,
- `sigma^2 | mu, y ~ InverseGamma(alpha + n/2, beta + sum((y_i - mu)^2) / 2)`,
  drawn as the reciprocal of a Gamma variate.

Each iteration updates `mu` from the previous `sigma^2` first, then `sigma^2`
from the freshly drawn `mu` (a sequential scan, not a simultaneous update).

# Examples

```rust
use conjugate_mcmc::gibbs::{NormalInvGammaGibbs, NormalInvGammaPrior};

let y = [1.2, 0.7, 2.3, 1.9, 1.4];
let prior = NormalInvGammaPrior::new(2.0, 1.0, 0.0, 0.5).unwrap();
let mut sampler = NormalInvGammaGibbs::new(&y, prior).unwrap().set_seed(42);

// 1,000 iterations, discarding the first 100 as burn-in.
let draws = sampler.run(1_000, 100).unwrap();
assert_eq!(draws.nrows(), 900);
assert_eq!(draws.ncols(), 2); // columns: [mu, sigma^2]
```
*/

use ndarray::{s, Array2};
use num_traits::Float;
use rand::rngs::SmallRng;
use rand::{thread_rng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::core::{check_run_args, run_chain, run_chain_with_progress, MarkovChain};
use crate::distributions::sample_inverse_gamma;

/// Hyperparameters of the Normal-Inverse-Gamma prior.
///
/// `alpha` and `beta` are the Inverse-Gamma shape and rate for `sigma^2`;
/// `m` and `kappa` are the mean and scale factor of the conditional Normal
/// prior on `mu`. All of `alpha`, `beta`, `kappa` must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalInvGammaPrior<T: Float> {
    pub alpha: T,
    pub beta: T,
    pub m: T,
    pub kappa: T,
}

impl<T: Float> NormalInvGammaPrior<T> {
    /// Validates the positivity constraints and builds the prior.
    pub fn new(alpha: T, beta: T, m: T, kappa: T) -> Result<Self, String> {
        if alpha <= T::zero() {
            return Err("Expected alpha to be positive.".into());
        }
        if beta <= T::zero() {
            return Err("Expected beta to be positive.".into());
        }
        if kappa <= T::zero() {
            return Err("Expected kappa to be positive.".into());
        }
        Ok(Self {
            alpha,
            beta,
            m,
            kappa,
        })
    }

    /// Mode of the InverseGamma(alpha, beta) marginal, `beta / (alpha + 1)`.
    /// Defined and positive for every valid prior, unlike the mean.
    fn sigma2_mode(&self) -> T {
        self.beta / (self.alpha + T::one())
    }
}

/**
The Gibbs sampler itself: one Markov chain over the state `[mu, sigma^2]`.

The chain owns its RNG and carries an explicit seed; use [`set_seed`] for
bit-reproducible runs. The chain starts at the empirical mean and unbiased
sample variance of the data, which sits near the posterior mode and keeps
burn-in short.

[`set_seed`]: NormalInvGammaGibbs::set_seed
*/
pub struct NormalInvGammaGibbs<T: Float> {
    /// The prior hyperparameters.
    pub prior: NormalInvGammaPrior<T>,

    /// The observations. Immutable once the sampler is built.
    pub data: Vec<T>,

    /// Current state of the Markov chain, laid out as `[mu, sigma^2]`.
    pub current_state: Vec<T>,

    /// Random seed for reproducibility.
    pub seed: u64,

    /// RNG for this chain.
    pub rng: SmallRng,

    // Quantities fixed for the lifetime of the chain, computed once.
    n: T,
    ybar: T,
    post_mean: T,  // mu*
    post_scale: T, // n + 1/kappa
    post_shape: T, // alpha + n/2
}

impl<T> NormalInvGammaGibbs<T>
where
    T: Float,
    rand_distr::StandardNormal: Distribution<T>,
    rand_distr::Exp1: Distribution<T>,
    rand_distr::Open01: Distribution<T>,
{
    /// Creates a new sampler for the given observations and prior.
    ///
    /// Fails fast on an empty observation vector; the prior is already
    /// validated by [`NormalInvGammaPrior::new`]. With a single observation
    /// the unbiased sample variance is undefined, so the chain starts
    /// `sigma^2` at the prior mode instead.
    pub fn new(data: &[T], prior: NormalInvGammaPrior<T>) -> Result<Self, String> {
        if data.is_empty() {
            return Err("Expected data to be non-empty.".into());
        }
        let n = T::from(data.len()).unwrap();
        let ybar = data.iter().fold(T::zero(), |acc, &y| acc + y) / n;

        let sigma2_0 = if data.len() > 1 {
            data.iter()
                .fold(T::zero(), |acc, &y| acc + (y - ybar) * (y - ybar))
                / (n - T::one())
        } else {
            T::zero()
        };
        // Degenerate data (a single point, or all points equal) would start
        // the chain at sigma^2 = 0, outside the Inverse-Gamma support.
        let sigma2_0 = if sigma2_0 > T::zero() {
            sigma2_0
        } else {
            prior.sigma2_mode()
        };

        let post_scale = n + T::one() / prior.kappa;
        let post_mean = (n * ybar + prior.m / prior.kappa) / post_scale;
        let post_shape = prior.alpha + n / T::from(2).unwrap();

        let seed = thread_rng().gen::<u64>();
        Ok(Self {
            prior,
            data: data.to_vec(),
            current_state: vec![ybar, sigma2_0],
            seed,
            rng: SmallRng::seed_from_u64(seed),
            n,
            ybar,
            post_mean,
            post_scale,
            post_shape,
        })
    }

    /// Sets a new seed, reseeding the chain's RNG.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Draws `mu` from its full conditional given `sigma2`.
    pub fn sample_mu_given(&mut self, sigma2: T) -> T {
        let sd = (sigma2 / self.post_scale).sqrt();
        let normal = Normal::new(self.post_mean, sd)
            .expect("Expecting creation of normal distribution to succeed.");
        normal.sample(&mut self.rng)
    }

    /// Draws `sigma^2` from its full conditional given `mu`, via the
    /// reciprocal of a Gamma(shape, rate) draw.
    pub fn sample_sigma2_given(&mut self, mu: T) -> T {
        let half = T::from(0.5).unwrap();
        let rss = self
            .data
            .iter()
            .fold(T::zero(), |acc, &y| acc + (y - mu) * (y - mu));
        let rate = self.prior.beta + half * rss;
        sample_inverse_gamma(&mut self.rng, self.post_shape, rate)
    }

    /// Runs the chain for `n_steps` iterations, discarding the first
    /// `discard` rows as burn-in. Returns a matrix with one row per kept
    /// iteration and columns `[mu, sigma^2]`.
    pub fn run(&mut self, n_steps: usize, discard: usize) -> Result<Array2<T>, String> {
        check_run_args(n_steps, discard)?;
        let samples = run_chain(self, n_steps);
        Ok(samples.slice(s![discard.., ..]).to_owned())
    }

    /// Same as [`run`](NormalInvGammaGibbs::run), with a progress bar.
    pub fn run_with_progress(&mut self, n_steps: usize, discard: usize) -> Result<Array2<T>, String> {
        check_run_args(n_steps, discard)?;
        let samples = run_chain_with_progress(self, n_steps);
        Ok(samples.slice(s![discard.., ..]).to_owned())
    }
}

impl<T> MarkovChain<T> for NormalInvGammaGibbs<T>
where
    T: Float,
    rand_distr::StandardNormal: Distribution<T>,
    rand_distr::Exp1: Distribution<T>,
    rand_distr::Open01: Distribution<T>,
{
    /// Performs one Gibbs sweep: `mu` is drawn from the previous `sigma^2`,
    /// then `sigma^2` from the freshly drawn `mu`.
    fn step(&mut self) -> &Vec<T> {
        let mu = self.sample_mu_given(self.current_state[1]);
        let sigma2 = self.sample_sigma2_given(mu);
        self.current_state[0] = mu;
        self.current_state[1] = sigma2;
        &self.current_state
    }

    fn current_state(&self) -> &Vec<T> {
        &self.current_state
    }
}
