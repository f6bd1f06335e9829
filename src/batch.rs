//! Plain-text batch input and planning orchestration.
//!
//! The batch format is the one semi-structured external format the
//! planning workflow consumes: a whitespace-separated integer stream.
//!
//! ```text
//! <project count>
//! per project:
//!   <city count> <route count>
//!   <city1> <city2> <distance>   (route count times)
//!   <start city> <end city>
//!   <utility> <traffic> <estimated time> <deadline>
//! ```
//!
//! `Planner` then orchestrates the engines the way an interactive caller
//! would: build a `RoadNetwork` per project, query the shortest route
//! between the project's endpoints, combine the resulting distance with
//! the manual attributes into a `Road`, and schedule the whole batch.
//! The engines themselves stay file- and log-unaware; an optionally
//! injected `Logger` records progress around the engine calls.

use thiserror::Error;

use crate::logging::Logger;
use crate::models::Road;
use crate::routing::RoadNetwork;
use crate::scheduler::PriorityScheduler;
use crate::PlanError;

/// One parsed project record from a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Number of cities in the project's network.
    pub cities: usize,
    /// Undirected routes as `(city1, city2, distance)` triples.
    pub routes: Vec<(usize, usize, i64)>,
    /// Route query start city.
    pub start: usize,
    /// Route query end city.
    pub end: usize,
    /// Utility value of the road.
    pub utility: i64,
    /// Traffic impact of the road.
    pub traffic: i64,
    /// Estimated construction duration.
    pub estimated_time: i64,
    /// Completion deadline.
    pub deadline: i64,
}

/// Errors from batch parsing and planning.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input ended before all declared records were read.
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEnd {
        /// What was being read when the input ran out.
        context: &'static str,
    },

    /// A token could not be parsed as an integer.
    #[error("invalid token '{token}' while reading {context}")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// What was being read.
        context: &'static str,
    },

    /// A count field is negative or too large for an in-memory batch.
    #[error("invalid count {value} for {context}")]
    InvalidCount {
        /// The parsed value.
        value: i64,
        /// Which count field.
        context: &'static str,
    },

    /// A project's endpoints are not connected.
    #[error("project {project}: no route between city {start} and city {end}")]
    NoRoute {
        /// 1-based project number.
        project: usize,
        /// Start city index.
        start: usize,
        /// End city index.
        end: usize,
    },

    /// An engine rejected the record's indices or weights.
    #[error("project {project}: {source}")]
    Engine {
        /// 1-based project number.
        project: usize,
        /// The underlying engine error.
        source: PlanError,
    },
}

/// Sanity cap on parsed counts; a batch is an in-memory data set.
const MAX_COUNT: i64 = 1_000_000;

struct TokenReader<'a> {
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> TokenReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
        }
    }

    fn next_i64(&mut self, context: &'static str) -> Result<i64, BatchError> {
        let token = self
            .tokens
            .next()
            .ok_or(BatchError::UnexpectedEnd { context })?;
        token.parse().map_err(|_| BatchError::InvalidToken {
            token: token.to_string(),
            context,
        })
    }

    fn next_count(&mut self, context: &'static str) -> Result<usize, BatchError> {
        let value = self.next_i64(context)?;
        if !(0..=MAX_COUNT).contains(&value) {
            return Err(BatchError::InvalidCount { value, context });
        }
        Ok(value as usize)
    }
}

/// Parses a whole batch from its text form.
///
/// # Errors
/// `UnexpectedEnd`, `InvalidToken`, or `InvalidCount` when the integer
/// stream does not match the declared structure. City indices are only
/// range-checked later, by the engines.
pub fn parse_batch(input: &str) -> Result<Vec<ProjectRecord>, BatchError> {
    let mut reader = TokenReader::new(input);
    let project_count = reader.next_count("project count")?;
    let mut records = Vec::with_capacity(project_count);

    for _ in 0..project_count {
        let cities = reader.next_count("city count")?;
        let route_count = reader.next_count("route count")?;

        let mut routes = Vec::with_capacity(route_count);
        for _ in 0..route_count {
            let city1 = reader.next_count("route city")?;
            let city2 = reader.next_count("route city")?;
            let distance = reader.next_i64("route distance")?;
            routes.push((city1, city2, distance));
        }

        records.push(ProjectRecord {
            cities,
            routes,
            start: reader.next_count("start city")?,
            end: reader.next_count("end city")?,
            utility: reader.next_i64("utility")?,
            traffic: reader.next_i64("traffic")?,
            estimated_time: reader.next_i64("estimated time")?,
            deadline: reader.next_i64("deadline")?,
        });
    }

    Ok(records)
}

/// Orchestrates routing and scheduling over a parsed batch.
///
/// # Example
///
/// ```
/// use roadplan::batch::{parse_batch, Planner};
///
/// let input = "1  3 2  0 1 4  1 2 5  0 2  5 2 10 25";
/// let records = parse_batch(input).unwrap();
/// let scheduler = Planner::new().plan(&records).unwrap();
///
/// assert_eq!(scheduler.roads()[0].distance, 9);
/// assert_eq!(scheduler.roads()[0].completion_time, 10);
/// ```
#[derive(Debug, Default)]
pub struct Planner {
    logger: Option<Logger>,
}

impl Planner {
    /// Creates a planner with no diagnostic sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a diagnostic sink; progress is logged around engine calls.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds and schedules a `Road` batch from parsed records.
    ///
    /// Road ids are assigned 1-based in record order.
    ///
    /// # Errors
    /// `Engine` when a record holds out-of-range cities or non-positive
    /// distances; `NoRoute` when a project's endpoints are not connected.
    pub fn plan(&self, records: &[ProjectRecord]) -> Result<PriorityScheduler, BatchError> {
        let mut scheduler = PriorityScheduler::new();

        for (index, record) in records.iter().enumerate() {
            let project = index + 1;
            if let Some(logger) = &self.logger {
                logger.log_algorithm_start(
                    "shortest path",
                    &format!("project={project} cities={}", record.cities),
                );
            }

            let route = self.solve_route(record).map_err(|source| BatchError::Engine {
                project,
                source,
            })?;
            let Some(route) = route else {
                if let Some(logger) = &self.logger {
                    logger.error(&format!(
                        "project {project}: cities {} and {} are not connected",
                        record.start, record.end
                    ));
                }
                return Err(BatchError::NoRoute {
                    project,
                    start: record.start,
                    end: record.end,
                });
            };

            scheduler.add_road(
                Road::new(project as i64)
                    .with_distance(route.distance)
                    .with_utility(record.utility)
                    .with_traffic(record.traffic)
                    .with_estimated_time(record.estimated_time)
                    .with_deadline(record.deadline),
            );
        }

        if let Some(logger) = &self.logger {
            logger.log_algorithm_start("priority scheduling", &format!("roads={}", records.len()));
        }
        scheduler.schedule();
        if let Some(logger) = &self.logger {
            logger.info(&format!(
                "batch planned: sequence={:?} deadlines_met={}",
                scheduler.optimal_sequence(),
                scheduler.check_deadlines()
            ));
        }

        Ok(scheduler)
    }

    /// Parses and plans in one step.
    pub fn plan_text(&self, input: &str) -> Result<PriorityScheduler, BatchError> {
        let records = parse_batch(input)?;
        self.plan(&records)
    }

    fn solve_route(
        &self,
        record: &ProjectRecord,
    ) -> Result<Option<crate::routing::Route>, PlanError> {
        let mut network = RoadNetwork::new(record.cities);
        for &(city1, city2, distance) in &record.routes {
            network.add_edge(city1, city2, distance)?;
        }
        network.shortest_path(record.start, record.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PROJECTS: &str = "\
        2\n\
        3 3\n\
        0 1 4\n\
        1 2 5\n\
        0 2 20\n\
        0 2\n\
        5 2 10 25\n\
        2 1\n\
        0 1 20\n\
        0 1\n\
        3 1 5 25\n";

    #[test]
    fn test_parse_batch() {
        let records = parse_batch(TWO_PROJECTS).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cities, 3);
        assert_eq!(records[0].routes, vec![(0, 1, 4), (1, 2, 5), (0, 2, 20)]);
        assert_eq!(records[0].start, 0);
        assert_eq!(records[0].end, 2);
        assert_eq!(records[0].utility, 5);
        assert_eq!(records[1].routes, vec![(0, 1, 20)]);
        assert_eq!(records[1].deadline, 25);
    }

    #[test]
    fn test_parse_truncated_input() {
        let err = parse_batch("1  3 2  0 1 4").unwrap_err();
        assert!(matches!(err, BatchError::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_parse_bad_token() {
        let err = parse_batch("1  three 2").unwrap_err();
        match err {
            BatchError::InvalidToken { token, .. } => assert_eq!(token, "three"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_negative_count() {
        let err = parse_batch("-1").unwrap_err();
        assert!(matches!(err, BatchError::InvalidCount { value: -1, .. }));
    }

    #[test]
    fn test_plan_two_projects() {
        let records = parse_batch(TWO_PROJECTS).unwrap();
        let scheduler = Planner::new().plan(&records).unwrap();

        let roads = scheduler.roads();
        assert_eq!(roads.len(), 2);
        // Project 1: shortest route 0->1->2 = 9 km.
        assert_eq!(roads[0].distance, 9);
        // Project 2: direct route, 20 km.
        assert_eq!(roads[1].distance, 20);

        // Priorities 511 and 290 → project 1 first.
        assert_eq!(scheduler.optimal_sequence(), vec![1, 2]);
        assert_eq!(roads[0].waiting_time, 0);
        assert_eq!(roads[1].waiting_time, 10);
        assert!(scheduler.check_deadlines());
    }

    #[test]
    fn test_plan_disconnected_endpoints() {
        // Two cities, no routes between them.
        let input = "1  2 0  0 1  1 1 1 10";
        let err = Planner::new().plan_text(input).unwrap_err();
        match err {
            BatchError::NoRoute {
                project,
                start,
                end,
            } => {
                assert_eq!(project, 1);
                assert_eq!(start, 0);
                assert_eq!(end, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_plan_out_of_range_city() {
        // Route references city 5 in a 2-city network.
        let input = "1  2 1  0 5 3  0 1  1 1 1 10";
        let err = Planner::new().plan_text(input).unwrap_err();
        match err {
            BatchError::Engine { project, source } => {
                assert_eq!(project, 1);
                assert_eq!(source, PlanError::OutOfRangeIndex { index: 5, limit: 2 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_plan_empty_batch() {
        let scheduler = Planner::new().plan_text("0").unwrap();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.average_waiting_time(), 0.0);
    }
}
