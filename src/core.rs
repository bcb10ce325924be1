use indicatif::{ProgressBar, ProgressStyle};
use ndarray::{Array2, ArrayView1};
use num_traits::Zero;

pub trait MarkovChain<S> {
    /// Does one iteration of the chain, returning the new current state.
    fn step(&mut self) -> &Vec<S>;

    /// Returns the current state without stepping.
    fn current_state(&self) -> &Vec<S>;
}

/// Runs a chain for `n_steps` iterations, returning one row per iteration.
///
/// The output matrix is allocated up front with exactly `n_steps` rows and
/// one column per state coordinate, and is filled in iteration order.
pub fn run_chain<S, M>(chain: &mut M, n_steps: usize) -> Array2<S>
where
    M: MarkovChain<S>,
    S: Clone + Zero,
{
    let dim = chain.current_state().len();
    let mut out = Array2::<S>::zeros((n_steps, dim));

    for i in 0..n_steps {
        let state = chain.step();
        out.row_mut(i).assign(&ArrayView1::from(state.as_slice()));
    }

    out
}

/// Same as [`run_chain`], but renders a progress bar while sampling.
pub fn run_chain_with_progress<S, M>(chain: &mut M, n_steps: usize) -> Array2<S>
where
    M: MarkovChain<S>,
    S: Clone + Zero,
{
    let dim = chain.current_state().len();
    let mut out = Array2::<S>::zeros((n_steps, dim));

    let pb = ProgressBar::new(n_steps as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    for i in 0..n_steps {
        let state = chain.step();
        out.row_mut(i).assign(&ArrayView1::from(state.as_slice()));
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    out
}

/// Validates the iteration count and burn-in length shared by every sampler's
/// `run` method. Burn-in is explicit configuration, never a silent default.
pub(crate) fn check_run_args(n_steps: usize, discard: usize) -> Result<(), String> {
    if n_steps == 0 {
        return Err("Expected n_steps to be positive.".into());
    }
    if discard >= n_steps {
        return Err(format!(
            "Expected discard ({discard}) to be smaller than n_steps ({n_steps})."
        ));
    }
    Ok(())
}
