//! Learning rate schedules
//!
//! Provides the cyclic cosine schedule in two forms:
//! - `cosine_learning_rates` - Pure generation of the full value sequence
//! - `CyclicCosineLR` - Steppable scheduler driven by a training loop
//!
//! The consuming loop is external to this crate: schedulers expose the
//! current value through [`LRScheduler`] and nothing else.

mod cyclic_cosine;


pub use cyclic_cosine::{cosine_learning_rates, CyclicCosineLR};

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Current learning rate
    fn get_lr(&self) -> f64;

    /// Advance the scheduler by one step (typically once per iteration)
    fn step(&mut self);
}
