//! Proportional flow-shop sequencing with budgeted outsourcing.
//!
//! Each job is either processed in-house on an `m`-stage proportional flow
//! shop (same processing time on every stage) or outsourced at a fixed
//! cost, with total outsourcing spend bounded by a budget. The goal is the
//! allocation and in-house order minimizing total weighted completion time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Solution`, `PartitionResult`, `Instance`
//! - **`sequencing`**: The `Sequencer` oracle, the WSPT-MCI heuristic and
//!   completion-time evaluation (closed form + recurrence check)
//! - **`partition`**: Exhaustive and budget-DP allocation, cross-validation
//! - **`validation`**: Input integrity checks
//! - **`generate`**: Seeded random instances
//!
//! # Example
//!
//! ```
//! use u_flowshop::models::Instance;
//! use u_flowshop::partition::compare_partitioners;
//! use u_flowshop::sequencing::WsptMci;
//!
//! let comparison = compare_partitioners(&Instance::demo(), &WsptMci::new()).unwrap();
//! assert_eq!(comparison.objective(), 26);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Smith (1956), "Various optimizers for single-stage production"
//! - Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//!   n-job flow-shop sequencing problem"

mod error;
pub mod generate;
pub mod models;
pub mod partition;
pub mod sequencing;
pub mod validation;

pub use error::ScheduleError;
