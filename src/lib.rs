//! Road construction planning toolkit.
//!
//! Provides the three algorithmic engines behind a road construction
//! planning workflow, plus the small collaborators that drive them.
//!
//! # Modules
//!
//! - **`routing`**: `RoadNetwork` — weighted undirected city network with
//!   Dijkstra shortest-path queries
//! - **`scheduler`**: `PriorityScheduler` — non-preemptive priority
//!   scheduling of construction projects, plus `ScheduleKpi` metrics
//! - **`safety`**: `SafetyChecker` — Banker's Algorithm deadlock-avoidance
//!   verification for resource allocation across concurrent projects
//! - **`models`**: Domain types — `Road`
//! - **`batch`**: Plain-text batch input format and the `Planner`
//!   orchestration layer
//! - **`config`** / **`logging`** / **`bench`** / **`queue`**: supporting
//!   utilities (key/value settings, diagnostic sink, timing statistics,
//!   bounded queue)
//!
//! # Architecture
//!
//! The engines are independent, synchronous, in-memory computations and do
//! not call each other. A caller (typically the `batch::Planner`) derives a
//! route distance from `routing`, combines it with manual attributes into a
//! `Road`, and feeds the batch to `scheduler`; `safety` is consulted
//! separately for resource allocation questions. Collaborators are injected
//! explicitly — the engines never touch configuration, logging, or I/O.
//!
//! # References
//!
//! - Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"
//! - Dijkstra (1965), "EWD-108" (Banker's Algorithm)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod batch;
pub mod bench;
pub mod config;
mod error;
pub mod logging;
pub mod models;
pub mod queue;
pub mod routing;
pub mod safety;
pub mod scheduler;

pub use error::PlanError;
