//! Entity indices and statistics derived from a weekly schedule
//!
//! Both stages are pure functions of the schedule: running them again on
//! the same input gives the same output.

pub mod aggregator;
pub mod statistics;

#[cfg(test)]
pub mod tests;

pub use aggregator::aggregate;
pub use statistics::compute;
