//! Completion times in a proportional flow shop.
//!
//! # Closed Form
//!
//! When a job takes the same time `p` on every stage, the completion time
//! on the last of `m` stages of the job at position `r` is
//!
//! ```text
//! C_r = Σ_{k≤r} p_k + (m - 1) · max_{k≤r} p_k
//! ```
//!
//! # Recurrence
//!
//! The general flow-shop recurrence
//!
//! ```text
//! C[i][k] = max(C[i-1][k], C[i][k-1]) + p_i
//! ```
//!
//! is kept as a verification oracle: for proportional processing times the
//! two must agree exactly.
//!
//! Arithmetic is plain `i64`. Inputs accepted by
//! [`validate_objective_range`](crate::validation::validate_objective_range)
//! cannot overflow any function here.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 6.1: Flow Shops with Unlimited
//! Intermediate Storage

use crate::models::Job;

/// Completion times on the last stage via the closed form.
pub fn closed_form_completion_times(sequence: &[Job], machine_count: usize) -> Vec<i64> {
    let tail = machine_count.saturating_sub(1) as i64;
    let mut sum_p = 0;
    let mut max_p = 0;
    sequence
        .iter()
        .map(|job| {
            sum_p += job.p;
            max_p = max_p.max(job.p);
            sum_p + tail * max_p
        })
        .collect()
}

/// Objective `Σ w_r · C_r` via the closed form.
pub fn closed_form_objective(sequence: &[Job], machine_count: usize) -> i64 {
    let tail = machine_count.saturating_sub(1) as i64;
    let mut sum_p = 0;
    let mut max_p = 0;
    let mut objective = 0;
    for job in sequence {
        sum_p += job.p;
        max_p = max_p.max(job.p);
        objective += job.w * (sum_p + tail * max_p);
    }
    objective
}

/// Closed-form objective of `sequence` with `job` inserted before index
/// `position` (`position == sequence.len()` appends).
///
/// Scores the candidate without materializing it.
pub fn objective_with_insertion(
    sequence: &[Job],
    job: Job,
    position: usize,
    machine_count: usize,
) -> i64 {
    let (head, rest) = sequence.split_at(position);
    let tail = machine_count.saturating_sub(1) as i64;
    let mut sum_p = 0;
    let mut max_p = 0;
    let mut objective = 0;
    for j in head.iter().chain(std::iter::once(&job)).chain(rest) {
        sum_p += j.p;
        max_p = max_p.max(j.p);
        objective += j.w * (sum_p + tail * max_p);
    }
    objective
}

/// Completion times on the last stage via the two-dimensional recurrence.
///
/// Keeps a single row of `machine_count` entries, overwritten per job.
pub fn recurrence_completion_times(sequence: &[Job], machine_count: usize) -> Vec<i64> {
    let mut row = vec![0_i64; machine_count];
    let mut last_stage = Vec::with_capacity(sequence.len());

    for job in sequence {
        let mut left = 0;
        for cell in row.iter_mut() {
            // `*cell` still holds C[i-1][k]; `left` holds C[i][k-1].
            *cell = (*cell).max(left) + job.p;
            left = *cell;
        }
        last_stage.push(left);
    }
    last_stage
}

/// Objective `Σ w_r · C_r` via the recurrence.
pub fn recurrence_objective(sequence: &[Job], machine_count: usize) -> i64 {
    recurrence_completion_times(sequence, machine_count)
        .iter()
        .zip(sequence)
        .map(|(c, job)| job.w * c)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn scenario() -> Vec<Job> {
        vec![Job::new(0, 2, 4), Job::new(2, 3, 2)]
    }

    #[test]
    fn test_closed_form_scenario() {
        // C1 = 2 + 1*2 = 4, C2 = 5 + 1*3 = 8 → 4*4 + 2*8 = 32
        assert_eq!(closed_form_completion_times(&scenario(), 2), vec![4, 8]);
        assert_eq!(closed_form_objective(&scenario(), 2), 32);
    }

    #[test]
    fn test_recurrence_scenario() {
        assert_eq!(recurrence_completion_times(&scenario(), 2), vec![4, 8]);
        assert_eq!(recurrence_objective(&scenario(), 2), 32);
    }

    #[test]
    fn test_single_machine_is_prefix_sum() {
        let seq = vec![Job::new(0, 3, 1), Job::new(1, 1, 1), Job::new(2, 5, 1)];
        assert_eq!(closed_form_completion_times(&seq, 1), vec![3, 4, 9]);
        assert_eq!(recurrence_completion_times(&seq, 1), vec![3, 4, 9]);
    }

    #[test]
    fn test_long_job_first_blocks_later_stages() {
        // p = 5 then 1 on 3 stages: C2 = 6 + 2*5 = 16
        let seq = vec![Job::new(0, 5, 1), Job::new(1, 1, 1)];
        assert_eq!(closed_form_completion_times(&seq, 3), vec![15, 16]);
        assert_eq!(recurrence_completion_times(&seq, 3), vec![15, 16]);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(closed_form_objective(&[], 4), 0);
        assert_eq!(recurrence_objective(&[], 4), 0);
        assert!(recurrence_completion_times(&[], 4).is_empty());
    }

    #[test]
    fn test_insertion_matches_materialized() {
        let seq = scenario();
        let job = Job::new(1, 4, 1);
        for pos in 0..=seq.len() {
            let mut candidate = seq.clone();
            candidate.insert(pos, job);
            assert_eq!(
                objective_with_insertion(&seq, job, pos, 2),
                closed_form_objective(&candidate, 2)
            );
        }
        // [J1, J3, J2] → 16 + 16 + 13
        assert_eq!(objective_with_insertion(&seq, job, 2, 2), 45);
    }

    #[test]
    fn test_closed_form_equals_recurrence_random() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.random_range(1..=12);
            let m = rng.random_range(1..=6);
            let seq: Vec<Job> = (0..n)
                .map(|id| Job::new(id, rng.random_range(1..=20), rng.random_range(1..=10)))
                .collect();
            assert_eq!(
                closed_form_completion_times(&seq, m),
                recurrence_completion_times(&seq, m)
            );
            assert_eq!(closed_form_objective(&seq, m), recurrence_objective(&seq, m));
        }
    }
}
