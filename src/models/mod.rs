//! Flow-shop outsourcing domain models.
//!
//! Provides the data types for the problem (jobs, instance) and for its
//! answers (sequenced solution, allocation result).
//!
//! # Domain Mappings
//!
//! | u-flowshop | Manufacturing | Logistics |
//! |------------|--------------|-----------|
//! | Job | Order | Shipment |
//! | Machine stage | Production step | Handling station |
//! | Outsourcing cost | Subcontract price | Third-party carrier fee |
//! | Budget | Subcontracting allowance | Carrier spend cap |

mod instance;
mod job;
mod partition;
mod solution;

pub use instance::Instance;
pub use job::{format_job_list, Job};
pub use partition::PartitionResult;
pub use solution::{ScheduleRow, Solution};
