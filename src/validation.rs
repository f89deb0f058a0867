//! Input validation for flow-shop outsourcing problems.
//!
//! Checks structural integrity of an instance before any solver runs.
//! Detects:
//! - Duplicate job IDs
//! - Non-positive processing times or weights
//! - A zero machine count
//! - Cost lists that do not line up with the job list
//! - Negative outsourcing costs or budget
//! - Objectives too large for `i64`
//!
//! All problems are collected rather than stopping at the first one.

use std::collections::HashSet;

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job's processing time is zero or negative.
    NonPositiveProcessingTime,
    /// A job's weight is zero or negative.
    NonPositiveWeight,
    /// The machine count is zero.
    InvalidMachineCount,
    /// The job list is empty where jobs are required.
    EmptyJobSet,
    /// Outsourcing cost list length differs from the job count.
    CostLengthMismatch,
    /// An outsourcing cost is negative.
    NegativeCost,
    /// The budget is negative.
    NegativeBudget,
    /// Too many jobs for bitmask enumeration.
    TooManyJobs,
    /// The budget cannot size a DP table on this platform.
    BudgetTooLarge,
    /// The objective of keeping every job in-house does not fit in `i64`.
    ObjectiveOverflow,
    /// An outsourcing spend does not fit in `i64`.
    CostOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a machine count: at least one stage.
pub fn validate_machine_count(machine_count: usize) -> Result<(), ValidationError> {
    if machine_count == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidMachineCount,
            "machine count must be positive",
        ));
    }
    Ok(())
}

/// Checks that every objective over `jobs` on `machine_count` stages fits
/// in `i64`.
///
/// The bound `Σw · (Σp + (m - 1) · max p)` dominates the objective of any
/// subset in any order, and every partial sum and completion time along
/// the way. Expects positive `p` and `w`.
pub fn validate_objective_range(jobs: &[Job], machine_count: usize) -> Result<(), ValidationError> {
    let total_p: i128 = jobs.iter().map(|j| i128::from(j.p)).sum();
    let total_w: i128 = jobs.iter().map(|j| i128::from(j.w)).sum();
    let max_p = jobs.iter().map(|j| i128::from(j.p)).max().unwrap_or(0);
    let tail = i128::try_from(machine_count.saturating_sub(1)).unwrap_or(i128::MAX);

    let bound = tail
        .checked_mul(max_p)
        .and_then(|blocked| blocked.checked_add(total_p))
        .and_then(|last| last.checked_mul(total_w));
    match bound {
        Some(b) if b <= i128::from(i64::MAX) => Ok(()),
        _ => Err(ValidationError::new(
            ValidationErrorKind::ObjectiveOverflow,
            format!(
                "objective of {} jobs on {machine_count} machines exceeds {}",
                jobs.len(),
                i64::MAX
            ),
        )),
    }
}

/// Validates the jobs alone: unique ids, positive `p` and `w`.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for job in jobs {
        if !ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
        if job.p <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveProcessingTime,
                format!("Job {} has non-positive processing time {}", job.id, job.p),
            ));
        }
        if job.w <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveWeight,
                format!("Job {} has non-positive weight {}", job.id, job.w),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a full allocation instance.
///
/// Checks:
/// 1. Machine count is positive
/// 2. No duplicate job IDs, every `p > 0` and `w > 0`
/// 3. `outsourcing_costs.len() == jobs.len()`
/// 4. No negative outsourcing cost
/// 5. Budget is non-negative
/// 6. Objectives fit in `i64` (only once 1 and 2 pass)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(
    jobs: &[Job],
    outsourcing_costs: &[i64],
    machine_count: usize,
    budget: i64,
) -> ValidationResult {
    let mut errors = Vec::new();

    if let Err(e) = validate_machine_count(machine_count) {
        errors.push(e);
    }
    if let Err(job_errors) = validate_jobs(jobs) {
        errors.extend(job_errors);
    }

    if outsourcing_costs.len() != jobs.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::CostLengthMismatch,
            format!(
                "{} outsourcing costs given for {} jobs",
                outsourcing_costs.len(),
                jobs.len()
            ),
        ));
    }

    for (i, &cost) in outsourcing_costs.iter().enumerate() {
        if cost < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCost,
                format!("Outsourcing cost at index {i} is negative ({cost})"),
            ));
        }
    }

    if budget < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeBudget,
            format!("Budget is negative ({budget})"),
        ));
    }

    if machine_count > 0 && validate_jobs(jobs).is_ok() {
        if let Err(e) = validate_objective_range(jobs, machine_count) {
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
