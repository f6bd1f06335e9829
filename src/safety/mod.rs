//! Resource-allocation safety verification (Banker's Algorithm).
//!
//! Verifies that a proposed allocation of single-unit resource types across
//! concurrent construction projects cannot deadlock: a state is safe when
//! some completion order exists under which every project's remaining need
//! can always be met from available-plus-reclaimed resources.
//!
//! # Algorithm
//!
//! The standard safety algorithm: a working copy of the available vector
//! and a finished flag per process. Repeated full passes in process-index
//! order mark every currently satisfiable process, reclaiming its
//! allocation into the working vector; a pass with no progress while
//! unfinished processes remain means no safe sequence exists. O(P²·R)
//! worst case. The returned sequence is the deterministic one produced by
//! this scan order; safe states may admit other orders too.
//!
//! # Reference
//! Dijkstra (1965), "EWD-108"; Silberschatz et al., "Operating System
//! Concepts", Ch. 8 (Deadlock Avoidance)

use crate::PlanError;

/// Banker's Algorithm safety checker.
///
/// Holds the allocation/maximum matrices and the available vector for a
/// fixed number of processes (roads) and resource types. The derived need
/// matrix (`maximum - allocation`) is recomputed whenever allocation or
/// maximum changes.
///
/// # Example
///
/// ```
/// use roadplan::safety::SafetyChecker;
///
/// let mut checker = SafetyChecker::new(3, 3);
/// checker.set_allocation(vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 2]]).unwrap();
/// checker.set_maximum(vec![vec![7, 5, 3], vec![3, 2, 2], vec![9, 0, 2]]).unwrap();
/// checker.set_available(vec![7, 4, 3]).unwrap();
///
/// assert!(checker.is_safe());
/// assert_eq!(checker.find_safe_sequence().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SafetyChecker {
    processes: usize,
    resources: usize,
    allocation: Vec<Vec<i64>>,
    maximum: Vec<Vec<i64>>,
    need: Vec<Vec<i64>>,
    available: Vec<i64>,
}

impl SafetyChecker {
    /// Creates a checker for `processes` projects and `resources` resource
    /// types, with all matrices zeroed.
    pub fn new(processes: usize, resources: usize) -> Self {
        Self {
            processes,
            resources,
            allocation: vec![vec![0; resources]; processes],
            maximum: vec![vec![0; resources]; processes],
            need: vec![vec![0; resources]; processes],
            available: vec![0; resources],
        }
    }

    /// Number of processes (projects).
    pub fn process_count(&self) -> usize {
        self.processes
    }

    /// Number of resource types.
    pub fn resource_count(&self) -> usize {
        self.resources
    }

    /// Sets the allocation matrix and recomputes the need matrix.
    ///
    /// # Errors
    /// `InvalidDimension` if the matrix is not `processes × resources`.
    pub fn set_allocation(&mut self, allocation: Vec<Vec<i64>>) -> Result<(), PlanError> {
        self.check_matrix(&allocation)?;
        self.allocation = allocation;
        self.recompute_need();
        Ok(())
    }

    /// Sets the maximum-need matrix and recomputes the need matrix.
    ///
    /// # Errors
    /// `InvalidDimension` if the matrix is not `processes × resources`.
    pub fn set_maximum(&mut self, maximum: Vec<Vec<i64>>) -> Result<(), PlanError> {
        self.check_matrix(&maximum)?;
        self.maximum = maximum;
        self.recompute_need();
        Ok(())
    }

    /// Sets the available-resources vector.
    ///
    /// # Errors
    /// `InvalidDimension` if the vector length is not `resources`.
    pub fn set_available(&mut self, available: Vec<i64>) -> Result<(), PlanError> {
        if available.len() != self.resources {
            return Err(PlanError::InvalidDimension {
                expected: self.resources,
                actual: available.len(),
            });
        }
        self.available = available;
        Ok(())
    }

    /// Current allocation matrix.
    pub fn allocation(&self) -> &[Vec<i64>] {
        &self.allocation
    }

    /// Current maximum-need matrix.
    pub fn maximum(&self) -> &[Vec<i64>] {
        &self.maximum
    }

    /// Derived need matrix (`maximum - allocation`).
    pub fn need(&self) -> &[Vec<i64>] {
        &self.need
    }

    /// Current available-resources vector.
    pub fn available(&self) -> &[i64] {
        &self.available
    }

    /// Finds a safe completion order over all processes.
    ///
    /// Returns the empty vector when no safe sequence exists; a partial
    /// order is never reported.
    pub fn find_safe_sequence(&self) -> Vec<usize> {
        let mut sequence = Vec::with_capacity(self.processes);
        let mut work = self.available.clone();
        let mut finished = vec![false; self.processes];

        let mut completed = 0;
        while completed < self.processes {
            let mut progressed = false;

            for p in 0..self.processes {
                if finished[p] || !self.satisfiable(p, &work) {
                    continue;
                }
                // Simulate completion: the process releases everything it holds.
                for r in 0..self.resources {
                    work[r] += self.allocation[p][r];
                }
                sequence.push(p);
                finished[p] = true;
                progressed = true;
                completed += 1;
            }

            if !progressed {
                return Vec::new();
            }
        }

        sequence
    }

    /// Whether the current state admits any safe completion order.
    pub fn is_safe(&self) -> bool {
        !self.find_safe_sequence().is_empty()
    }

    fn satisfiable(&self, process: usize, work: &[i64]) -> bool {
        (0..self.resources).all(|r| self.need[process][r] <= work[r])
    }

    fn recompute_need(&mut self) {
        for p in 0..self.processes {
            for r in 0..self.resources {
                self.need[p][r] = self.maximum[p][r] - self.allocation[p][r];
            }
        }
    }

    fn check_matrix(&self, matrix: &[Vec<i64>]) -> Result<(), PlanError> {
        if matrix.len() != self.processes {
            return Err(PlanError::InvalidDimension {
                expected: self.processes,
                actual: matrix.len(),
            });
        }
        for row in matrix {
            if row.len() != self.resources {
                return Err(PlanError::InvalidDimension {
                    expected: self.resources,
                    actual: row.len(),
                });
            }
        }
        Ok(())
    }
}
