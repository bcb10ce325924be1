use conjugate_mcmc::distributions::GammaTarget;
use conjugate_mcmc::metropolis_hastings::MetropolisHastings;
use conjugate_mcmc::stats::summarize;

fn main() {
    // Sample a Gamma(3, 1) density via a random walk on the log scale.
    let target = GammaTarget::new(3.0, 1.0).expect("Expected valid Gamma parameters");
    let mut mh = MetropolisHastings::new(target, 0.8, 3.0)
        .expect("Expected sampler construction to succeed")
        .set_seed(42);

    let draws = mh.run(10_000, 1_000).expect("Expected sampling to succeed");
    let summary = summarize(draws.column(0)).unwrap();

    println!("Kept {} draws", draws.nrows());
    println!("Acceptance rate: {:.2}", mh.acceptance_rate());
    println!(
        "mean={:.3} sd={:.3} (theoretical mean 3.000, sd {:.3})",
        summary.mean,
        summary.sd,
        3.0f64.sqrt()
    );
    println!(
        "95% interval: [{:.3}, {:.3}], median {:.3}",
        summary.q025, summary.q975, summary.median
    );
}
