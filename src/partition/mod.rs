//! In-house/outsource allocation under a budget.
//!
//! Both partitioners search the same decision space: each job is either
//! kept in-house (and sequenced by a [`Sequencer`]) or outsourced at its
//! cost, with total outsourcing spend at most the budget. They minimize
//! the in-house objective.
//!
//! | Partitioner | Search | Complexity |
//! |---|---|---|
//! | [`ExhaustivePartitioner`] | All 2ⁿ allocations | O(2ⁿ · n³) |
//! | [`DpPartitioner`] | Budget-indexed table | O(n · U · n³) |
//!
//! # Usage
//!
//! ```
//! use u_flowshop::models::Instance;
//! use u_flowshop::partition::{DpPartitioner, ExhaustivePartitioner, Partitioner};
//! use u_flowshop::sequencing::WsptMci;
//!
//! let instance = Instance::demo();
//! let exhaustive = ExhaustivePartitioner::new(WsptMci::new()).solve(&instance).unwrap();
//! let dp = DpPartitioner::new(WsptMci::new()).solve(&instance).unwrap();
//! assert_eq!(exhaustive.objective, 26);
//! assert_eq!(dp.objective, 26);
//! ```

mod compare;
mod dp;
mod exhaustive;

pub use compare::{compare_partitioners, PartitionComparison};
pub use dp::{BudgetSelection, DpPartitioner};
pub use exhaustive::{ExhaustivePartitioner, MAX_EXHAUSTIVE_JOBS};

use crate::models::{Instance, Job, PartitionResult};
use crate::sequencing::{sequence_or_empty, Sequencer};
use crate::validation::{validate_instance, ValidationErrorKind};
use crate::ScheduleError;
use std::fmt::Debug;

/// An allocation solver.
pub trait Partitioner: Debug {
    /// Partitioner name (e.g., "exhaustive", "dp").
    fn name(&self) -> &'static str;

    /// Finds the allocation minimizing the in-house objective with
    /// outsourcing spend at most `budget`.
    ///
    /// `outsourcing_costs` is index-aligned with `jobs`.
    fn partition(
        &self,
        jobs: &[Job],
        outsourcing_costs: &[i64],
        machine_count: usize,
        budget: i64,
    ) -> Result<PartitionResult, ScheduleError>;

    /// Solves an [`Instance`].
    fn solve(&self, instance: &Instance) -> Result<PartitionResult, ScheduleError> {
        self.partition(
            &instance.jobs,
            &instance.outsourcing_costs,
            instance.machine_count,
            instance.budget,
        )
    }
}

/// Boundary checks shared by both partitioners.
fn check_inputs(
    jobs: &[Job],
    outsourcing_costs: &[i64],
    machine_count: usize,
    budget: i64,
) -> Result<(), ScheduleError> {
    match validate_instance(jobs, outsourcing_costs, machine_count, budget) {
        Ok(()) => Ok(()),
        // Reports the first problem found.
        Err(errors) => match errors.into_iter().next() {
            Some(first) => Err(first.into()),
            None => Ok(()),
        },
    }
}

/// Sum of `costs`, or `None` when it does not fit in `i64`.
fn checked_total<'a>(costs: impl IntoIterator<Item = &'a i64>) -> Option<i64> {
    costs
        .into_iter()
        .try_fold(0_i64, |total, &u| total.checked_add(u))
}

/// Builds a result from an in-house selection (`in_house[i]` is true when
/// job `i` stays in-house), sequencing the in-house jobs with `sequencer`.
fn assemble_result<S: Sequencer + ?Sized>(
    sequencer: &S,
    jobs: &[Job],
    outsourcing_costs: &[i64],
    in_house: &[bool],
    machine_count: usize,
) -> Result<PartitionResult, ScheduleError> {
    let mut kept = Vec::new();
    let mut outsourced = Vec::new();
    let mut spent = Vec::new();
    for ((&job, u), &keep) in jobs.iter().zip(outsourcing_costs).zip(in_house) {
        if keep {
            kept.push(job);
        } else {
            outsourced.push(job);
            spent.push(u);
        }
    }
    let cost = checked_total(spent).ok_or_else(|| {
        ScheduleError::invalid(
            ValidationErrorKind::CostOverflow,
            format!("outsourcing {} jobs costs more than {}", outsourced.len(), i64::MAX),
        )
    })?;
    let solution = sequence_or_empty(sequencer, &kept, machine_count)?;
    Ok(PartitionResult::new(solution, outsourced, cost))
}

/// The degraded answer when no allocation fits the budget: outsource
/// everything and report objective 0.
fn all_outsourced(jobs: &[Job], outsourcing_costs: &[i64]) -> PartitionResult {
    tracing::warn!(
        jobs = jobs.len(),
        "no allocation fits the budget; reporting all jobs outsourced"
    );
    PartitionResult {
        in_house: Vec::new(),
        outsourced: jobs.to_vec(),
        outsourcing_cost: checked_total(outsourcing_costs).unwrap_or(i64::MAX),
        objective: 0,
    }
}
