//! Non-preemptive priority scheduling and KPI evaluation.
//!
//! `PriorityScheduler` orders a batch of road projects by a multi-factor
//! priority score and derives waiting and completion times under a single
//! construction crew. `ScheduleKpi` computes summary metrics from a
//! scheduled batch.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3
//! - Silberschatz et al., "Operating System Concepts" (priority scheduling)

mod kpi;
mod priority;

pub use kpi::ScheduleKpi;
pub use priority::PriorityScheduler;
