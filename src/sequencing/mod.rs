//! In-house sequencing for the proportional flow shop.
//!
//! Provides the [`Sequencer`] oracle interface consumed by the
//! partitioners, the WSPT-MCI heuristic implementing it, the closed-form
//! and recurrence completion-time evaluators, and sequence KPIs.
//!
//! # Usage
//!
//! ```
//! use u_flowshop::models::Job;
//! use u_flowshop::sequencing::{Sequencer, WsptMci};
//!
//! let jobs = vec![Job::new(0, 2, 4), Job::new(2, 3, 2)];
//! let solution = WsptMci::new().sequence(&jobs, 2).unwrap();
//! assert_eq!(solution.job_ids(), vec![0, 2]);
//! assert_eq!(solution.objective, 32);
//! ```
//!
//! # References
//!
//! - Smith (1956), "Various optimizers for single-stage production"
//! - Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//!   n-job flow-shop sequencing problem"

pub mod completion;
mod kpi;
mod wspt_mci;

pub use kpi::SequenceKpi;
pub use wspt_mci::{best_insertion, wspt_order, WsptMci};

use crate::models::{Job, Solution};
use crate::ScheduleError;
use std::fmt::Debug;

/// An oracle that orders a job subset and scores it.
///
/// Partitioners treat the sequencer as a black box: they only rely on the
/// returned objective being consistent with the returned order.
///
/// # Contract
/// - Fails with [`ScheduleError::InvalidArgument`] when `machine_count`
///   is zero or `jobs` is empty. Callers special-case the empty set
///   (objective 0); see [`sequence_or_empty`].
/// - The returned sequence is a permutation of `jobs`.
pub trait Sequencer: Debug {
    /// Sequencer name (e.g., "WSPT-MCI").
    fn name(&self) -> &'static str;

    /// Orders `jobs` and computes the objective on `machine_count` stages.
    fn sequence(&self, jobs: &[Job], machine_count: usize) -> Result<Solution, ScheduleError>;
}

impl<S: Sequencer + ?Sized> Sequencer for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn sequence(&self, jobs: &[Job], machine_count: usize) -> Result<Solution, ScheduleError> {
        (**self).sequence(jobs, machine_count)
    }
}

/// Runs `sequencer`, mapping the empty job set to the empty solution.
pub fn sequence_or_empty<S: Sequencer + ?Sized>(
    sequencer: &S,
    jobs: &[Job],
    machine_count: usize,
) -> Result<Solution, ScheduleError> {
    if jobs.is_empty() {
        crate::validation::validate_machine_count(machine_count)?;
        return Ok(Solution::empty());
    }
    sequencer.sequence(jobs, machine_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_or_empty() {
        let sol = sequence_or_empty(&WsptMci::new(), &[], 2).unwrap();
        assert!(sol.is_empty());
        assert_eq!(sol.objective, 0);
    }

    #[test]
    fn test_sequence_or_empty_still_checks_machines() {
        assert!(sequence_or_empty(&WsptMci::new(), &[], 0).is_err());
    }

    #[test]
    fn test_sequencer_by_reference() {
        let s = WsptMci::new();
        let by_ref: &dyn Sequencer = &s;
        assert_eq!(Sequencer::name(&by_ref), "WSPT-MCI");
        let sol = (&by_ref).sequence(&[Job::new(0, 3, 1)], 3).unwrap();
        assert_eq!(sol.objective, 9);
    }
}
