use conjugate_mcmc::gibbs::{NormalInvGammaGibbs, NormalInvGammaPrior};
use conjugate_mcmc::stats::summarize;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn main() {
    // Simulate 100 observations from Normal(2, sqrt(1.5)).
    let mut rng = SmallRng::seed_from_u64(42);
    let noise = Normal::new(2.0, 1.5f64.sqrt()).unwrap();
    let y: Vec<f64> = (0..100).map(|_| noise.sample(&mut rng)).collect();

    // Weakly informative Normal-Inverse-Gamma prior.
    let prior = NormalInvGammaPrior::new(2.0, 1.0, 0.0, 0.5)
        .expect("Expected valid prior hyperparameters");
    let mut sampler = NormalInvGammaGibbs::new(&y, prior)
        .expect("Expected sampler construction to succeed")
        .set_seed(42);

    // 2,000 iterations, discarding the first 500 as burn-in.
    let draws = sampler
        .run_with_progress(2_000, 500)
        .expect("Expected sampling to succeed");

    let mu = summarize(draws.column(0)).unwrap();
    let sigma2 = summarize(draws.column(1)).unwrap();

    println!("parameter    mean     sd       2.5%     50%      97.5%");
    println!(
        "mu           {:<8.3} {:<8.3} {:<8.3} {:<8.3} {:<8.3}",
        mu.mean, mu.sd, mu.q025, mu.median, mu.q975
    );
    println!(
        "sigma^2      {:<8.3} {:<8.3} {:<8.3} {:<8.3} {:<8.3}",
        sigma2.mean, sigma2.sd, sigma2.q025, sigma2.median, sigma2.q975
    );
}
