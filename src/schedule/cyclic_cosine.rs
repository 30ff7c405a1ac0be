//! Cyclic cosine learning rate schedule

use super::LRScheduler;
use std::f64::consts::PI;

/// Generate a learning rate schedule following a cosine oscillation of
/// frequency `frequency`.
///
/// Returns `num_samples` values, each in the interval `[lr_min, lr_max]`
/// when `lr_min <= lr_max` (reversed bounds simply invert the curve).
///
/// Formula: lr_i = lr_min + 0.5 * (1 + cos(2*pi * f * i / N)) * (lr_max - lr_min)
///
/// Where:
/// - i is the sample index
/// - N is the total number of samples
/// - f is the number of full cosine cycles swept as i runs from 0 to N
/// - lr_max is the value at every cosine peak, including i = 0
/// - lr_min is the value at every cosine trough
///
/// # Examples
///
/// ```
/// use ritmo::schedule::cosine_learning_rates;
///
/// // One full cycle over four samples: peak, midpoint, trough, midpoint.
/// let lrs = cosine_learning_rates(0.0, 1.0, 1.0, 4);
/// assert_eq!(lrs.len(), 4);
/// assert!((lrs[0] - 1.0).abs() < 1e-12);
/// assert!((lrs[1] - 0.5).abs() < 1e-12);
/// assert!((lrs[2] - 0.0).abs() < 1e-12);
/// ```
pub fn cosine_learning_rates(
    lr_min: f64,
    lr_max: f64,
    frequency: f64,
    num_samples: usize,
) -> Vec<f64> {
    // An empty range performs zero iterations; N = 0 never reaches the
    // division in the phase term.
    (0..num_samples)
        .map(|i| {
            let phase = frequency * i as f64 / num_samples as f64;
            let scaler = 0.5 * (1.0 + (2.0 * PI * phase).cos()); // [0, 1]
            lr_min + scaler * (lr_max - lr_min)
        })
        .collect()
}

/// Cyclic Cosine Learning Rate Scheduler
///
/// Steppable form of [`cosine_learning_rates`]: oscillates between lr_max
/// and lr_min over `frequency` full cosine cycles across `total_steps`
/// steps. Driving `step()`/`get_lr()` through the whole schedule visits
/// exactly the values the pure function returns, in the same order.
///
/// # Examples
///
/// ```
/// use ritmo::schedule::{CyclicCosineLR, LRScheduler};
///
/// let mut scheduler = CyclicCosineLR::new(0.0, 1.0, 1.0, 4);
/// assert!((scheduler.get_lr() - 1.0).abs() < 1e-12);
/// scheduler.step();
/// assert!((scheduler.get_lr() - 0.5).abs() < 1e-12);
/// ```
pub struct CyclicCosineLR {
    lr_min: f64,
    lr_max: f64,
    frequency: f64,
    total_steps: usize,
    current_step: usize,
}

impl CyclicCosineLR {
    /// Create a new cyclic cosine scheduler
    ///
    /// # Arguments
    /// * `lr_min` - Learning rate at cosine troughs
    /// * `lr_max` - Learning rate at cosine peaks (the initial value)
    /// * `frequency` - Number of full cycles across the schedule
    /// * `total_steps` - Total number of steps in the schedule
    pub fn new(lr_min: f64, lr_max: f64, frequency: f64, total_steps: usize) -> Self {
        Self {
            lr_min,
            lr_max,
            frequency,
            total_steps,
            current_step: 0,
        }
    }

    /// Learning rate at a given step index, independent of scheduler state.
    ///
    /// For `step < total_steps` this matches the value
    /// [`cosine_learning_rates`] places at that index. An empty schedule
    /// evaluates to `lr_min`.
    pub fn lr_at(&self, step: usize) -> f64 {
        if self.total_steps == 0 {
            return self.lr_min;
        }
        let phase = self.frequency * step as f64 / self.total_steps as f64;
        let scaler = 0.5 * (1.0 + (2.0 * PI * phase).cos());
        self.lr_min + scaler * (self.lr_max - self.lr_min)
    }

    /// Iterate over the schedule values in index order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.total_steps).map(|i| self.lr_at(i))
    }
}

impl LRScheduler for CyclicCosineLR {
    fn get_lr(&self) -> f64 {
        // Past the end the scheduler holds the final in-schedule value.
        let last = self.total_steps.saturating_sub(1);
        self.lr_at(self.current_step.min(last))
    }

    fn step(&mut self) {
        self.current_step += 1;
    }
}
