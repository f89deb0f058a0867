//! Random instance generation.
//!
//! Draws processing times, weights and outsourcing costs uniformly from
//! inclusive ranges. The budget is a fraction of the cost of outsourcing
//! every job, so instances range from "nothing affordable" (ratio 0) to
//! "everything affordable" (ratio 1).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Instance, Job};

/// Parameters for random instance generation.
///
/// # Example
/// ```
/// use u_flowshop::generate::InstanceGenerator;
///
/// let instance = InstanceGenerator::new(8).with_machine_count(3).with_seed(42).generate();
/// assert_eq!(instance.job_count(), 8);
/// assert!(instance.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceGenerator {
    /// Number of jobs.
    pub job_count: usize,
    /// Number of machine stages.
    pub machine_count: usize,
    /// Inclusive processing time range.
    pub processing_time: (i64, i64),
    /// Inclusive weight range.
    pub weight: (i64, i64),
    /// Inclusive outsourcing cost range.
    pub outsourcing_cost: (i64, i64),
    /// Budget as a fraction of the total outsourcing cost (0.0..=1.0).
    pub budget_ratio: f64,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl InstanceGenerator {
    /// Creates a generator for `job_count` jobs with default ranges.
    pub fn new(job_count: usize) -> Self {
        Self {
            job_count,
            machine_count: 2,
            processing_time: (1, 10),
            weight: (1, 10),
            outsourcing_cost: (10, 100),
            budget_ratio: 0.3,
            seed: None,
        }
    }

    /// Sets the machine count.
    pub fn with_machine_count(mut self, machine_count: usize) -> Self {
        self.machine_count = machine_count;
        self
    }

    /// Sets the processing time range.
    pub fn with_processing_time(mut self, min: i64, max: i64) -> Self {
        self.processing_time = (min, max);
        self
    }

    /// Sets the weight range.
    pub fn with_weight(mut self, min: i64, max: i64) -> Self {
        self.weight = (min, max);
        self
    }

    /// Sets the outsourcing cost range.
    pub fn with_outsourcing_cost(mut self, min: i64, max: i64) -> Self {
        self.outsourcing_cost = (min, max);
        self
    }

    /// Sets the budget ratio, clamped to `0.0..=1.0`.
    pub fn with_budget_ratio(mut self, ratio: f64) -> Self {
        self.budget_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates an instance.
    pub fn generate(&self) -> Instance {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.generate_with(&mut rng)
    }

    /// Generates an instance from the given RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Instance {
        let jobs: Vec<Job> = (0..self.job_count)
            .map(|id| {
                Job::new(
                    id,
                    sample(rng, self.processing_time),
                    sample(rng, self.weight),
                )
            })
            .collect();
        let costs: Vec<i64> = (0..self.job_count)
            .map(|_| sample(rng, self.outsourcing_cost))
            .collect();

        let instance = Instance::new(jobs, costs, self.machine_count, 0);
        let total = instance.total_outsourcing_cost();
        Instance {
            budget: (total as f64 * self.budget_ratio).floor() as i64,
            ..instance
        }
    }
}

/// Uniform draw from an inclusive range; a reversed range is swapped.
fn sample<R: Rng>(rng: &mut R, (a, b): (i64, i64)) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.random_range(lo..=hi)
}
