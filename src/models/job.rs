//! Job model.
//!
//! A job is a unit of work for a proportional flow shop: it visits every
//! machine stage in the same order and takes the same processing time on
//! each stage.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A job to be processed in-house or outsourced.
///
/// Jobs are immutable once created. Identity is the stable integer `id`;
/// two jobs with equal `p` and `w` but different ids are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Stable 0-based job identifier.
    pub id: usize,
    /// Processing time, identical on every machine stage.
    pub p: i64,
    /// Weight in the objective.
    pub w: i64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: usize, p: i64, w: i64) -> Self {
        Self { id, p, w }
    }

    /// Human-readable label (`J1` for id 0).
    pub fn label(&self) -> String {
        format!("J{}", self.id + 1)
    }

    /// Compares two jobs by WSPT priority.
    ///
    /// `Less` means `self` goes first: larger `w/p` ratio first, then
    /// smaller processing time. Ratios are compared by cross-multiplication
    /// in 128-bit arithmetic, so the comparison is exact.
    ///
    /// # Reference
    /// Smith (1956), "Various optimizers for single-stage production"
    pub fn wspt_cmp(&self, other: &Job) -> Ordering {
        let lhs = self.w as i128 * other.p as i128;
        let rhs = other.w as i128 * self.p as i128;
        rhs.cmp(&lhs).then_with(|| self.p.cmp(&other.p))
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "J{}", self.id + 1)
    }
}

/// Joins job labels with `separator`, or returns `empty` for no jobs.
pub fn format_job_list(jobs: &[Job], empty: &str, separator: &str) -> String {
    if jobs.is_empty() {
        return empty.to_string();
    }
    jobs.iter()
        .map(Job::label)
        .collect::<Vec<_>>()
        .join(separator)
}
