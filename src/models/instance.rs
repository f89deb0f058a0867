//! Problem instance model.
//!
//! An instance bundles the jobs, their index-aligned outsourcing costs,
//! the machine count and the outsourcing budget. It is the unit that the
//! CLI reads and writes as JSON.

use serde::{Deserialize, Serialize};

use super::Job;
use crate::validation::{validate_instance, ValidationResult};

/// A proportional flow-shop instance with budgeted outsourcing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Jobs to allocate.
    pub jobs: Vec<Job>,
    /// Outsourcing cost per job, index-aligned with `jobs`.
    pub outsourcing_costs: Vec<i64>,
    /// Number of machine stages (m).
    pub machine_count: usize,
    /// Maximum total outsourcing spend (U).
    pub budget: i64,
}

impl Instance {
    /// Creates a new instance.
    pub fn new(
        jobs: Vec<Job>,
        outsourcing_costs: Vec<i64>,
        machine_count: usize,
        budget: i64,
    ) -> Self {
        Self {
            jobs,
            outsourcing_costs,
            machine_count,
            budget,
        }
    }

    /// The three-job, two-machine example instance.
    ///
    /// Jobs `(p, w)`: (2, 4), (4, 1), (3, 2); costs 120, 30, 100; U = 100.
    pub fn demo() -> Self {
        Self::new(
            vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)],
            vec![120, 30, 100],
            2,
            100,
        )
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Cost of outsourcing every job, saturating at `i64::MAX`.
    pub fn total_outsourcing_cost(&self) -> i64 {
        self.outsourcing_costs
            .iter()
            .fold(0_i64, |total, &u| total.saturating_add(u))
    }

    /// Validates the instance; see [`validate_instance`].
    pub fn validate(&self) -> ValidationResult {
        validate_instance(
            &self.jobs,
            &self.outsourcing_costs,
            self.machine_count,
            self.budget,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_instance() {
        let inst = Instance::demo();
        assert_eq!(inst.job_count(), 3);
        assert_eq!(inst.total_outsourcing_cost(), 250);
        assert!(inst.validate().is_ok());
    }

    #[test]
    fn test_instance_json_round_trip() {
        let inst = Instance::demo();
        let json = serde_json::to_string(&inst).unwrap();
        assert!(json.contains("\"outsourcing_costs\":[120,30,100]"));
        let back: Instance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inst);
    }

    #[test]
    fn test_instance_from_json() {
        let json = r#"{
            "jobs": [{"id": 0, "p": 5, "w": 1}],
            "outsourcing_costs": [7],
            "machine_count": 3,
            "budget": 0
        }"#;
        let inst: Instance = serde_json::from_str(json).unwrap();
        assert_eq!(inst.jobs[0], Job::new(0, 5, 1));
        assert_eq!(inst.machine_count, 3);
    }

    #[test]
    fn test_total_cost_saturates() {
        let jobs = vec![Job::new(0, 1, 1), Job::new(1, 1, 1)];
        let inst = Instance::new(jobs, vec![i64::MAX, 1], 1, 0);
        assert_eq!(inst.total_outsourcing_cost(), i64::MAX);
    }

    #[test]
    fn test_invalid_instance() {
        let inst = Instance::new(vec![Job::new(0, 1, 1)], vec![], 2, 10);
        assert!(inst.validate().is_err());
    }
}
