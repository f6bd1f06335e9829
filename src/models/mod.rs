//! Planning domain models.
//!
//! Core data types shared by the engines. A `Road` is one construction
//! project: the routing engine supplies its distance, the caller supplies
//! the remaining attributes, and the scheduler fills in the computed
//! timing fields.

mod road;

pub use road::Road;
