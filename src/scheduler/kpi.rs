//! Schedule quality metrics (KPIs).
//!
//! Summary indicators computed from a scheduled batch of roads.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Waiting | Mean time before construction starts |
//! | Avg Turnaround | Mean completion time |
//! | Total Lateness | Sum of max(0, completion - deadline) |
//! | Max Lateness | Largest single delay |
//! | On-Time Rate | Fraction of roads meeting their deadline |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::Road;

/// Performance indicators for a scheduled batch.
///
/// All time values share the batch's time unit. Only meaningful when
/// computed after [`crate::scheduler::PriorityScheduler::schedule`] has
/// filled in the timing fields.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Latest completion time across the batch.
    pub makespan: i64,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean completion time.
    pub average_turnaround_time: f64,
    /// Sum of lateness across all roads.
    pub total_lateness: i64,
    /// Largest lateness of any single road.
    pub max_lateness: i64,
    /// Fraction of roads completing by their deadline (0.0..1.0).
    pub on_time_rate: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a scheduled batch.
    ///
    /// An empty batch yields zero makespan and lateness, zero averages,
    /// and an on-time rate of 1.0.
    pub fn calculate(roads: &[Road]) -> Self {
        if roads.is_empty() {
            return Self {
                makespan: 0,
                average_waiting_time: 0.0,
                average_turnaround_time: 0.0,
                total_lateness: 0,
                max_lateness: 0,
                on_time_rate: 1.0,
            };
        }

        let mut makespan = 0i64;
        let mut total_waiting = 0i64;
        let mut total_turnaround = 0i64;
        let mut total_lateness = 0i64;
        let mut max_lateness = 0i64;
        let mut on_time = 0usize;

        for road in roads {
            makespan = makespan.max(road.completion_time);
            total_waiting += road.waiting_time;
            total_turnaround += road.completion_time;

            let lateness = (road.completion_time - road.deadline).max(0);
            total_lateness += lateness;
            max_lateness = max_lateness.max(lateness);
            if lateness == 0 {
                on_time += 1;
            }
        }

        let count = roads.len() as f64;
        Self {
            makespan,
            average_waiting_time: total_waiting as f64 / count,
            average_turnaround_time: total_turnaround as f64 / count,
            total_lateness,
            max_lateness,
            on_time_rate: on_time as f64 / count,
        }
    }
}
