//! Sequence quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Completion time of the last job on the last stage |
//! | Total Weighted Completion | Σ w_j C_j (the objective) |
//! | Total Completion | Σ C_j |
//! | Avg Completion | Σ C_j / n |
//! | Total Weight | Σ w_j |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use super::completion::closed_form_completion_times;
use crate::models::Solution;

/// Sequence performance indicators on a proportional flow shop.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceKpi {
    /// Number of sequenced jobs.
    pub job_count: usize,
    /// Latest completion time on the last stage.
    pub makespan: i64,
    /// Σ w_j C_j.
    pub total_weighted_completion: i64,
    /// Σ C_j.
    pub total_completion: i64,
    /// Mean completion time (0.0 for an empty sequence).
    pub avg_completion: f64,
    /// Σ w_j.
    pub total_weight: i64,
}

impl SequenceKpi {
    /// Computes KPIs for a solution on `machine_count` stages.
    pub fn calculate(solution: &Solution, machine_count: usize) -> Self {
        let completions = closed_form_completion_times(&solution.sequence, machine_count);
        let job_count = completions.len();
        let total_completion: i64 = completions.iter().sum();
        let total_weighted_completion = completions
            .iter()
            .zip(&solution.sequence)
            .map(|(c, job)| job.w * c)
            .sum();

        let avg_completion = if job_count == 0 {
            0.0
        } else {
            total_completion as f64 / job_count as f64
        };

        Self {
            job_count,
            // Completion times are non-decreasing along the sequence.
            makespan: completions.last().copied().unwrap_or(0),
            total_weighted_completion,
            total_completion,
            avg_completion,
            total_weight: solution.sequence.iter().map(|j| j.w).sum(),
        }
    }
}
