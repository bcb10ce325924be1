pub mod core;
pub mod distributions;
pub mod gibbs;
pub mod metropolis_hastings;
pub mod stats;
