//! Allocation result model.
//!
//! Records which jobs stay in-house (and in what order) and which are
//! outsourced, with the outsourcing spend and the in-house objective.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::job::{format_job_list, Job};
use super::solution::Solution;

/// The outcome of an in-house/outsource allocation.
///
/// Every job of the instance appears in exactly one of `in_house` and
/// `outsourced`. `objective` is the sequencer's objective for `in_house`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionResult {
    /// In-house jobs in processing order (possibly empty).
    pub in_house: Vec<Job>,
    /// Outsourced jobs, in instance order.
    pub outsourced: Vec<Job>,
    /// Sum of outsourcing costs over `outsourced`.
    pub outsourcing_cost: i64,
    /// Total weighted completion time of the in-house sequence.
    pub objective: i64,
}

impl PartitionResult {
    /// Creates a result from a sequenced in-house solution and the
    /// outsourced complement.
    pub fn new(solution: Solution, outsourced: Vec<Job>, outsourcing_cost: i64) -> Self {
        Self {
            in_house: solution.sequence,
            outsourced,
            outsourcing_cost,
            objective: solution.objective,
        }
    }

    /// The in-house sequence as a [`Solution`].
    pub fn solution(&self) -> Solution {
        Solution::new(self.in_house.clone(), self.objective)
    }

    /// In-house job ids in processing order.
    pub fn in_house_ids(&self) -> Vec<usize> {
        self.in_house.iter().map(|j| j.id).collect()
    }

    /// Outsourced job ids.
    pub fn outsourced_ids(&self) -> Vec<usize> {
        self.outsourced.iter().map(|j| j.id).collect()
    }

    /// Whether the outsourcing spend fits in `budget`.
    pub fn is_within_budget(&self, budget: i64) -> bool {
        self.outsourcing_cost <= budget
    }

    /// Whether `in_house` and `outsourced` partition `jobs` exactly:
    /// no job missing, none duplicated, none foreign.
    pub fn partitions(&self, jobs: &[Job]) -> bool {
        let expected: HashSet<usize> = jobs.iter().map(|j| j.id).collect();
        let mut seen = HashSet::new();
        for job in self.in_house.iter().chain(&self.outsourced) {
            if !expected.contains(&job.id) || !seen.insert(job.id) {
                return false;
            }
        }
        seen.len() == expected.len()
    }
}

impl fmt::Display for PartitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Objective: {}", self.objective)?;
        writeln!(f, "Outsourcing cost: {}", self.outsourcing_cost)?;
        writeln!(
            f,
            "In-house order: {}",
            format_job_list(&self.in_house, "(none)", " -> ")
        )?;
        write!(
            f,
            "Outsourced jobs: {}",
            format_job_list(&self.outsourced, "(none)", ", ")
        )
    }
}
