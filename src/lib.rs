//! Cyclic cosine learning-rate schedule generation.
//!
//! This crate provides the schedule consumed by a training loop, in two
//! forms:
//! - Pure generation of the full value sequence (`cosine_learning_rates`)
//! - A steppable scheduler over the same curve (`CyclicCosineLR`)
//!
//! The schedule sweeps `frequency` full cosine cycles between `lr_max`
//! (peaks, including index 0) and `lr_min` (troughs) across evenly spaced
//! samples. Generation is deterministic and side-effect-free; the training
//! loop that consumes the values stays outside this crate.
//!
//! # Toyota Way Principles
//!
//! - **Heijunka**: Smooth, level oscillation between bounds instead of abrupt rate drops
//! - **Poka-Yoke**: Unsigned sample counts make invalid schedule lengths unrepresentable
//! - **Muda Elimination**: Lazy stepping avoids materializing values a loop never reaches

pub mod cli;
pub mod schedule;

pub use schedule::{cosine_learning_rates, CyclicCosineLR, LRScheduler};
