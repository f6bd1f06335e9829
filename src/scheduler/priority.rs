//! Non-preemptive priority scheduler for road construction batches.
//!
//! # Algorithm
//!
//! 1. Score every road: `priority = utility·100 + traffic·10 - distance`,
//!    with saturating arithmetic. Utility dominates, traffic is secondary,
//!    and distance penalizes — farther projects are deprioritized.
//! 2. Order roads by descending priority (ties by descending road id) and
//!    run them back to back on a single crew: each road's waiting time is
//!    the sum of the estimated times of everything ordered before it, and
//!    its completion time follows immediately.
//!
//! Priorities are a pure function of the input attributes, so calling
//! [`PriorityScheduler::schedule`] again on an unmodified batch reproduces
//! the same result.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 3: Single Machine Models

use std::cmp::Ordering;

use crate::models::Road;

/// Weight applied to a road's utility in the priority score.
const UTILITY_WEIGHT: i64 = 100;
/// Weight applied to a road's traffic impact in the priority score.
const TRAFFIC_WEIGHT: i64 = 10;

/// Non-preemptive single-crew priority scheduler.
///
/// Roads are kept in insertion order; scheduling fills in their
/// `priority`, `waiting_time`, and `completion_time` fields without
/// reordering the batch.
///
/// # Example
///
/// ```
/// use roadplan::models::Road;
/// use roadplan::scheduler::PriorityScheduler;
///
/// let mut scheduler = PriorityScheduler::new();
/// scheduler.add_road(Road::new(1).with_utility(5).with_traffic(2)
///     .with_distance(10).with_estimated_time(10).with_deadline(25));
/// scheduler.add_road(Road::new(2).with_utility(3).with_traffic(1)
///     .with_distance(20).with_estimated_time(5).with_deadline(25));
/// scheduler.schedule();
///
/// assert_eq!(scheduler.optimal_sequence(), vec![1, 2]);
/// assert_eq!(scheduler.roads()[0].waiting_time, 0);
/// assert_eq!(scheduler.roads()[1].waiting_time, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriorityScheduler {
    roads: Vec<Road>,
}

impl PriorityScheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self { roads: Vec::new() }
    }

    /// Appends a road to the batch.
    pub fn add_road(&mut self, road: Road) {
        self.roads.push(road);
    }

    /// The batch, in insertion order.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Number of roads in the batch.
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Removes all roads.
    pub fn clear(&mut self) {
        self.roads.clear();
    }

    /// Runs the two scheduling phases: priority scoring, then timing.
    ///
    /// An empty batch is a no-op, never an error.
    pub fn schedule(&mut self) {
        self.compute_priorities();
        self.compute_times();
    }

    /// Priority score for a single road.
    pub fn priority_score(road: &Road) -> i64 {
        road.utility
            .saturating_mul(UTILITY_WEIGHT)
            .saturating_add(road.traffic.saturating_mul(TRAFFIC_WEIGHT))
            .saturating_sub(road.distance)
    }

    /// Whether every road's computed completion time meets its deadline.
    pub fn check_deadlines(&self) -> bool {
        self.roads.iter().all(Road::meets_deadline)
    }

    /// Road ids ordered by descending priority (ties by descending id).
    pub fn optimal_sequence(&self) -> Vec<i64> {
        self.execution_order()
            .into_iter()
            .map(|i| self.roads[i].id)
            .collect()
    }

    /// Mean waiting time over the batch, `0.0` when empty.
    pub fn average_waiting_time(&self) -> f64 {
        if self.roads.is_empty() {
            return 0.0;
        }
        let total: i64 = self.roads.iter().map(|r| r.waiting_time).sum();
        total as f64 / self.roads.len() as f64
    }

    /// Mean turnaround (completion) time over the batch, `0.0` when empty.
    ///
    /// All roads conceptually start at time 0, so turnaround equals
    /// completion time.
    pub fn average_turnaround_time(&self) -> f64 {
        if self.roads.is_empty() {
            return 0.0;
        }
        let total: i64 = self.roads.iter().map(|r| r.completion_time).sum();
        total as f64 / self.roads.len() as f64
    }

    fn compute_priorities(&mut self) {
        for road in &mut self.roads {
            road.priority = Self::priority_score(road);
        }
    }

    fn compute_times(&mut self) {
        let order = self.execution_order();
        let mut current_time = 0i64;
        for i in order {
            let road = &mut self.roads[i];
            road.waiting_time = current_time;
            current_time += road.estimated_time;
            road.completion_time = current_time;
        }
    }

    /// Batch indices in execution order: descending priority, ties broken
    /// by descending road id.
    fn execution_order(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.roads.len()).collect();
        indices.sort_by(|&a, &b| {
            let ra = &self.roads[a];
            let rb = &self.roads[b];
            match rb.priority.cmp(&ra.priority) {
                Ordering::Equal => rb.id.cmp(&ra.id),
                other => other,
            }
        });
        indices
    }
}
