//! WSPT-MCI: weighted-shortest-processing-time order with minimum-cost
//! insertion.
//!
//! # Algorithm
//!
//! 1. Stable-sort jobs by non-increasing `w/p` (exact cross-multiplied
//!    comparison), ties by smaller `p`.
//! 2. Seed the sequence with the first sorted job.
//! 3. Insert each remaining job at the position with the smallest
//!    closed-form objective. Equal objectives resolve to the right-most
//!    position.
//! 4. Optionally verify the final objective against the recurrence.
//!
//! # Complexity
//! O(n³): n insertions × (k+1) positions × O(k) scoring.
//!
//! # Reference
//! Nawaz, Enscore & Ham (1983), insertion heuristic for flow shops

use super::completion::{closed_form_objective, objective_with_insertion, recurrence_objective};
use super::Sequencer;
use crate::models::{Job, Solution};
use crate::validation::{validate_machine_count, validate_objective_range, ValidationErrorKind};
use crate::ScheduleError;

/// WSPT-MCI sequencer.
///
/// # Example
/// ```
/// use u_flowshop::models::Job;
/// use u_flowshop::sequencing::{Sequencer, WsptMci};
///
/// let jobs = vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)];
/// let solution = WsptMci::new().sequence(&jobs, 2).unwrap();
/// assert_eq!(solution.job_ids(), vec![0, 2, 1]);
/// assert_eq!(solution.objective, 45);
/// ```
#[derive(Debug, Clone)]
pub struct WsptMci {
    verify: bool,
}

impl WsptMci {
    /// Creates a sequencer with recurrence verification enabled.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Enables or disables recurrence verification of every result.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Whether results are verified against the recurrence.
    pub fn verifies(&self) -> bool {
        self.verify
    }
}

impl Default for WsptMci {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer for WsptMci {
    fn name(&self) -> &'static str {
        "WSPT-MCI"
    }

    fn sequence(&self, jobs: &[Job], machine_count: usize) -> Result<Solution, ScheduleError> {
        validate_machine_count(machine_count)?;
        if jobs.is_empty() {
            return Err(ScheduleError::invalid(
                ValidationErrorKind::EmptyJobSet,
                "jobs list is empty",
            ));
        }
        validate_objective_range(jobs, machine_count)?;

        let order = wspt_order(jobs);
        let mut sequence = Vec::with_capacity(order.len());
        sequence.push(order[0]);

        for &job in &order[1..] {
            let (position, objective) = best_insertion(&sequence, job, machine_count);
            tracing::trace!(job = job.id, position, objective, "inserted job");
            sequence.insert(position, job);
        }

        let objective = closed_form_objective(&sequence, machine_count);

        if self.verify {
            verify_against_recurrence(&sequence, machine_count, objective)?;
        }

        Ok(Solution::new(sequence, objective))
    }
}

/// Fails with [`ScheduleError::ConsistencyFault`] unless the recurrence
/// reproduces `closed_form` for `sequence`.
fn verify_against_recurrence(
    sequence: &[Job],
    machine_count: usize,
    closed_form: i64,
) -> Result<(), ScheduleError> {
    let recurrence = recurrence_objective(sequence, machine_count);
    if recurrence != closed_form {
        return Err(ScheduleError::ConsistencyFault {
            closed_form,
            recurrence,
        });
    }
    Ok(())
}

/// Returns `jobs` in WSPT order (see [`Job::wspt_cmp`]).
///
/// The sort is stable: jobs with equal ratio and processing time keep
/// their input order.
pub fn wspt_order(jobs: &[Job]) -> Vec<Job> {
    let mut order = jobs.to_vec();
    order.sort_by(Job::wspt_cmp);
    order
}

/// Finds the insertion position of `job` into `sequence` minimizing the
/// closed-form objective.
///
/// Returns `(position, objective)`. On ties the right-most position wins.
pub fn best_insertion(sequence: &[Job], job: Job, machine_count: usize) -> (usize, i64) {
    let mut best_position = 0;
    let mut best_objective = i64::MAX;
    for position in 0..=sequence.len() {
        let objective = objective_with_insertion(sequence, job, position, machine_count);
        if objective <= best_objective {
            best_objective = objective;
            best_position = position;
        }
    }
    (best_position, best_objective)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn scenario_jobs() -> Vec<Job> {
        vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)]
    }

    fn random_jobs(rng: &mut SmallRng, n: usize) -> Vec<Job> {
        (0..n)
            .map(|id| Job::new(id, rng.random_range(1..=15), rng.random_range(1..=8)))
            .collect()
    }

    #[test]
    fn test_wspt_order_scenario() {
        // Ratios: J1 = 2.0, J2 = 0.25, J3 = 0.667
        let ids: Vec<usize> = wspt_order(&scenario_jobs()).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![0, 2, 1]);
    }

    #[test]
    fn test_wspt_order_stable() {
        let jobs = vec![
            Job::new(5, 2, 2),
            Job::new(3, 2, 2),
            Job::new(9, 1, 1), // same ratio, shorter → first
            Job::new(1, 2, 2),
        ];
        let ids: Vec<usize> = wspt_order(&jobs).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![9, 5, 3, 1]);
    }

    #[test]
    fn test_sequence_subset() {
        let jobs = vec![Job::new(0, 2, 4), Job::new(2, 3, 2)];
        let sol = WsptMci::new().sequence(&jobs, 2).unwrap();
        assert_eq!(sol.job_ids(), vec![0, 2]);
        assert_eq!(sol.objective, 32);
    }

    #[test]
    fn test_sequence_all_three() {
        // [J1, J3] then J2: positions score 74, 52, 45 → append
        let sol = WsptMci::new().sequence(&scenario_jobs(), 2).unwrap();
        assert_eq!(sol.job_ids(), vec![0, 2, 1]);
        assert_eq!(sol.objective, 45);
    }

    #[test]
    fn test_single_job() {
        let sol = WsptMci::new().sequence(&[Job::new(4, 3, 5)], 4).unwrap();
        assert_eq!(sol.job_ids(), vec![4]);
        // C = 3 + 3*3 = 12
        assert_eq!(sol.objective, 60);
    }

    #[test]
    fn test_tie_prefers_rightmost() {
        // Identical jobs: every position scores the same.
        let seq = [Job::new(0, 2, 1), Job::new(1, 2, 1)];
        let (position, _) = best_insertion(&seq, Job::new(2, 2, 1), 3);
        assert_eq!(position, 2);

        let sol = WsptMci::new()
            .sequence(&[Job::new(0, 2, 1), Job::new(1, 2, 1), Job::new(2, 2, 1)], 3)
            .unwrap();
        assert_eq!(sol.job_ids(), vec![0, 1, 2]);
    }

    #[test]
    fn test_invalid_arguments() {
        let err = WsptMci::new().sequence(&scenario_jobs(), 0).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidArgument {
                kind: ValidationErrorKind::InvalidMachineCount,
                ..
            }
        ));

        let err = WsptMci::new().sequence(&[], 2).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidArgument {
                kind: ValidationErrorKind::EmptyJobSet,
                ..
            }
        ));
    }

    #[test]
    fn test_output_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..50 {
            let n = rng.random_range(1..=10);
            let jobs = random_jobs(&mut rng, n);
            let sol = WsptMci::new().sequence(&jobs, rng.random_range(1..=5)).unwrap();

            let mut expected = jobs.clone();
            let mut actual = sol.sequence.clone();
            expected.sort_by_key(|j| j.id);
            actual.sort_by_key(|j| j.id);
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_objective_consistent_with_order() {
        let mut rng = SmallRng::seed_from_u64(23);
        for _ in 0..50 {
            let n = rng.random_range(1..=10);
            let m = rng.random_range(1..=5);
            let jobs = random_jobs(&mut rng, n);
            let sol = WsptMci::new().with_verification(false).sequence(&jobs, m).unwrap();
            assert_eq!(sol.objective, closed_form_objective(&sol.sequence, m));
        }
    }

    #[test]
    fn test_last_insertion_is_in_equilibrium() {
        let mut rng = SmallRng::seed_from_u64(31);
        for _ in 0..50 {
            let n = rng.random_range(2..=9);
            let m = rng.random_range(1..=4);
            let jobs = random_jobs(&mut rng, n);
            let sol = WsptMci::new().sequence(&jobs, m).unwrap();

            // Re-run the final insertion step against the output.
            let last = *wspt_order(&jobs).last().unwrap();
            let without: Vec<Job> = sol
                .sequence
                .iter()
                .copied()
                .filter(|j| j.id != last.id)
                .collect();
            let (_, best) = best_insertion(&without, last, m);
            assert_eq!(best, sol.objective);
        }
    }

    #[test]
    fn test_single_machine_matches_wspt() {
        // With one stage WSPT order is optimal, so MCI must reach its value.
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..50 {
            let n = rng.random_range(1..=8);
            let jobs = random_jobs(&mut rng, n);
            let sol = WsptMci::new().sequence(&jobs, 1).unwrap();
            assert_eq!(sol.objective, closed_form_objective(&wspt_order(&jobs), 1));
        }
    }

    #[test]
    fn test_verification_flag() {
        assert!(WsptMci::new().verifies());
        assert!(!WsptMci::default().with_verification(false).verifies());
    }

    #[test]
    fn test_recurrence_disagreement_is_fatal() {
        let seq = [Job::new(0, 2, 4), Job::new(2, 3, 2)];
        assert!(verify_against_recurrence(&seq, 2, 32).is_ok());
        assert_eq!(
            verify_against_recurrence(&seq, 2, 33),
            Err(ScheduleError::ConsistencyFault {
                closed_form: 33,
                recurrence: 32,
            })
        );
    }

    #[test]
    fn test_objective_overflow_rejected() {
        let jobs = [Job::new(0, 1 << 32, 1 << 32), Job::new(1, 1, 1)];
        let err = WsptMci::new().sequence(&jobs, 2).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidArgument {
                kind: ValidationErrorKind::ObjectiveOverflow,
                ..
            }
        ));

        // (2^31 + 1)² fits on one stage; (2^31 + 1)(2^32 + 1) on two does not.
        let jobs = [Job::new(0, 1 << 31, 1 << 31), Job::new(1, 1, 1)];
        let sol = WsptMci::new().sequence(&jobs, 1).unwrap();
        assert_eq!(sol.objective, closed_form_objective(&sol.sequence, 1));
        assert!(WsptMci::new().sequence(&jobs, 2).is_err());
    }
}
