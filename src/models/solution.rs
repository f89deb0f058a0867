//! Sequencing solution model.
//!
//! A solution is an ordered in-house job sequence together with its
//! objective, the total weighted completion time on the last machine.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::fmt;

use super::job::{format_job_list, Job};

/// An ordered job sequence and its objective `Σ w_r * C_r`.
///
/// Produced by a [`Sequencer`](crate::sequencing::Sequencer). The empty
/// solution (no jobs, objective 0) is the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Jobs in processing order.
    pub sequence: Vec<Job>,
    /// Total weighted completion time on the last machine.
    pub objective: i64,
}

/// One position of a sequence, with the quantities of the closed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based position in the sequence.
    pub position: usize,
    /// The job at this position.
    pub job: Job,
    /// Running sum of processing times up to this position.
    pub sum_p: i64,
    /// Running maximum processing time up to this position.
    pub max_p: i64,
    /// Completion time on the last machine.
    pub completion: i64,
    /// `w * completion`.
    pub weighted_completion: i64,
    /// Objective accumulated up to and including this position.
    pub cumulative_objective: i64,
}

impl Solution {
    /// Creates a solution from a sequence and its objective.
    pub fn new(sequence: Vec<Job>, objective: i64) -> Self {
        Self {
            sequence,
            objective,
        }
    }

    /// The empty solution: no jobs, objective 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the sequence has no jobs.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Number of sequenced jobs.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Job ids in processing order.
    pub fn job_ids(&self) -> Vec<usize> {
        self.sequence.iter().map(|j| j.id).collect()
    }

    /// Per-position breakdown of the closed-form completion times on
    /// `machine_count` stages.
    pub fn breakdown(&self, machine_count: usize) -> Vec<ScheduleRow> {
        let stages_after_first = machine_count.saturating_sub(1) as i64;
        let mut sum_p = 0;
        let mut max_p = 0;
        let mut cumulative = 0;

        self.sequence
            .iter()
            .enumerate()
            .map(|(i, &job)| {
                sum_p += job.p;
                max_p = max_p.max(job.p);
                let completion = sum_p + stages_after_first * max_p;
                let weighted = job.w * completion;
                cumulative += weighted;
                ScheduleRow {
                    position: i + 1,
                    job,
                    sum_p,
                    max_p,
                    completion,
                    weighted_completion: weighted,
                    cumulative_objective: cumulative,
                }
            })
            .collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (objective {})",
            format_job_list(&self.sequence, "(none)", " -> "),
            self.objective
        )
    }
}
