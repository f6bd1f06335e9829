//! Road (construction project) model.
//!
//! A road is the unit of scheduling: a set of weighted input attributes
//! plus the timing fields the scheduler computes for it.
//!
//! # Time Representation
//! All durations and deadlines share one time unit (days in the original
//! planning workflow); distances are in kilometers. The consumer defines
//! the units — the engines only require that they are consistent.

use serde::{Deserialize, Serialize};

/// A road construction project to be scheduled.
///
/// `distance` is typically sourced from [`crate::routing::RoadNetwork`];
/// `priority`, `waiting_time`, and `completion_time` are zero until
/// [`crate::scheduler::PriorityScheduler::schedule`] runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    /// Caller-assigned identifier, used for reporting and sequence output.
    pub id: i64,
    /// Route distance (non-negative), usually a shortest-path result.
    pub distance: i64,
    /// Utility value of the finished road (non-negative).
    pub utility: i64,
    /// Traffic impact while under construction (non-negative).
    pub traffic: i64,
    /// Estimated construction duration (positive).
    pub estimated_time: i64,
    /// Latest acceptable completion time (positive).
    pub deadline: i64,
    /// Scheduler-computed priority score (higher = scheduled earlier).
    pub priority: i64,
    /// Scheduler-computed time spent waiting before construction starts.
    pub waiting_time: i64,
    /// Scheduler-computed completion time (`waiting_time + estimated_time`).
    pub completion_time: i64,
}

impl Road {
    /// Creates a road with the given ID and all attributes zeroed.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            distance: 0,
            utility: 0,
            traffic: 0,
            estimated_time: 0,
            deadline: 0,
            priority: 0,
            waiting_time: 0,
            completion_time: 0,
        }
    }

    /// Sets the route distance.
    pub fn with_distance(mut self, distance: i64) -> Self {
        self.distance = distance;
        self
    }

    /// Sets the utility value.
    pub fn with_utility(mut self, utility: i64) -> Self {
        self.utility = utility;
        self
    }

    /// Sets the traffic impact.
    pub fn with_traffic(mut self, traffic: i64) -> Self {
        self.traffic = traffic;
        self
    }

    /// Sets the estimated construction duration.
    pub fn with_estimated_time(mut self, estimated_time: i64) -> Self {
        self.estimated_time = estimated_time;
        self
    }

    /// Sets the completion deadline.
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = deadline;
        self
    }

    /// Whether the computed completion time meets the deadline.
    ///
    /// Only meaningful after scheduling has run.
    pub fn meets_deadline(&self) -> bool {
        self.completion_time <= self.deadline
    }
}
