//! Budget-indexed dynamic program for allocation.
//!
//! # State
//!
//! `dp[i][c]`: the best objective reachable after deciding the first `i`
//! jobs while spending at most `c`, with the in-house set achieving it.
//!
//! # Transition (job `i`, cost `u_i`)
//!
//! ```text
//! keep:      score(dp[i-1][c].set ∪ {i})      via the sequencer
//! outsource: dp[i-1][c - u_i]                  if c ≥ u_i
//! ```
//!
//! Keep is evaluated first and only replaced by a strictly smaller
//! outsource objective.
//!
//! Only two rows are kept alive. Sets are stored as job indices and the
//! winning set is re-sequenced at the end, so the reported order is the
//! sequencer's own.
//!
//! The table is `min(U, Σu) + 1` cells wide: past the total cost every
//! column of a row is identical.
//!
//! # Complexity
//! O(n · min(U, Σu)) cells, each needing at most one sequencer call. Identical
//! candidate sets within a row are scored once.

use std::collections::HashMap;

use super::{all_outsourced, assemble_result, check_inputs, Partitioner};
use crate::models::{Job, PartitionResult};
use crate::sequencing::Sequencer;
use crate::validation::ValidationErrorKind;
use crate::ScheduleError;

/// Which cell of the last row answers the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BudgetSelection {
    /// Minimum over `dp[n][c]` for every `c ≤ U`. On ties the larger `c`
    /// wins, so `dp[n][U]` is reported whenever it is minimal.
    #[default]
    BestWithinBudget,
    /// `dp[n][U]` only.
    ExactBudget,
}

#[derive(Debug, Clone)]
struct Cell {
    objective: i64,
    /// Indices into the job list, ascending.
    in_house: Vec<usize>,
}

/// Dynamic-programming partitioner, polynomial in jobs × budget.
#[derive(Debug, Clone)]
pub struct DpPartitioner<S> {
    sequencer: S,
    selection: BudgetSelection,
}

impl<S: Sequencer> DpPartitioner<S> {
    /// Creates a partitioner scoring in-house sets with `sequencer`.
    pub fn new(sequencer: S) -> Self {
        Self {
            sequencer,
            selection: BudgetSelection::default(),
        }
    }

    /// Sets how the answer is read from the last row.
    pub fn with_budget_selection(mut self, selection: BudgetSelection) -> Self {
        self.selection = selection;
        self
    }

    /// The sequencer used as oracle.
    pub fn sequencer(&self) -> &S {
        &self.sequencer
    }

    /// Scores `set` (non-empty), reusing earlier scores of the same row.
    fn score(
        &self,
        jobs: &[Job],
        set: &[usize],
        machine_count: usize,
        scored: &mut HashMap<Vec<usize>, i64>,
    ) -> Result<i64, ScheduleError> {
        if let Some(&objective) = scored.get(set) {
            return Ok(objective);
        }
        let subset: Vec<Job> = set.iter().map(|&k| jobs[k]).collect();
        let objective = self.sequencer.sequence(&subset, machine_count)?.objective;
        scored.insert(set.to_vec(), objective);
        Ok(objective)
    }
}

impl<S: Sequencer> Partitioner for DpPartitioner<S> {
    fn name(&self) -> &'static str {
        "dp"
    }

    fn partition(
        &self,
        jobs: &[Job],
        outsourcing_costs: &[i64],
        machine_count: usize,
        budget: i64,
    ) -> Result<PartitionResult, ScheduleError> {
        check_inputs(jobs, outsourcing_costs, machine_count, budget)?;
        // For c at or beyond the total cost of the first i jobs, every cell
        // of row i holds the same entry, so the table stops at that total.
        let total_cost = outsourcing_costs
            .iter()
            .fold(0_i64, |total, &u| total.saturating_add(u));
        let span = budget.min(total_cost);
        let too_large = || {
            ScheduleError::invalid(
                ValidationErrorKind::BudgetTooLarge,
                format!("budget {budget} cannot index a DP table"),
            )
        };
        let width = usize::try_from(span)
            .ok()
            .and_then(|u| u.checked_add(1))
            .ok_or_else(too_large)?;
        tracing::debug!(n = jobs.len(), budget, width, "dp table started");

        let mut prev: Vec<Option<Cell>> = Vec::new();
        prev.try_reserve_exact(width).map_err(|_| too_large())?;
        prev.resize(
            width,
            Some(Cell {
                objective: 0,
                in_house: Vec::new(),
            }),
        );
        let mut scored = HashMap::new();

        for (i, &cost) in outsourcing_costs.iter().enumerate() {
            // Costs are validated non-negative; a cost beyond usize never fits.
            let cost = usize::try_from(cost).ok();
            scored.clear();
            let mut curr: Vec<Option<Cell>> = Vec::new();
            curr.try_reserve_exact(width).map_err(|_| too_large())?;

            for c in 0..width {
                let mut cell = match &prev[c] {
                    Some(kept) => {
                        let mut set = kept.in_house.clone();
                        set.push(i);
                        let objective = self.score(jobs, &set, machine_count, &mut scored)?;
                        Some(Cell {
                            objective,
                            in_house: set,
                        })
                    }
                    None => None,
                };

                if let Some(u) = cost.filter(|&u| u <= c) {
                    if let Some(from) = &prev[c - u] {
                        if cell.as_ref().map_or(true, |k| from.objective < k.objective) {
                            cell = Some(from.clone());
                        }
                    }
                }
                curr.push(cell);
            }
            prev = curr;
        }

        let chosen = match self.selection {
            BudgetSelection::ExactBudget => prev[width - 1].as_ref(),
            BudgetSelection::BestWithinBudget => {
                let mut best: Option<&Cell> = None;
                for cell in prev.iter().rev().flatten() {
                    if best.map_or(true, |b| cell.objective < b.objective) {
                        best = Some(cell);
                    }
                }
                best
            }
        };

        let Some(cell) = chosen else {
            return Ok(all_outsourced(jobs, outsourcing_costs));
        };

        let mut keep = vec![false; jobs.len()];
        for &k in &cell.in_house {
            keep[k] = true;
        }
        let result = assemble_result(
            &self.sequencer,
            jobs,
            outsourcing_costs,
            &keep,
            machine_count,
        )?;
        tracing::debug!(
            objective = result.objective,
            outsourcing_cost = result.outsourcing_cost,
            "dp table finished"
        );
        Ok(result)
    }
}
