//! Probability distributions.

/// Binomial distribution.
pub mod binomial;

pub use binomial::BinomialDistribution;
