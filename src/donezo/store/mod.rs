//! # Store Layer
//!
//! [`TaskStore`] owns the in-memory task collection and is the sole
//! authority for reads and writes to its backing storage. Persistence is
//! abstracted behind the [`Backend`] trait so the same store logic runs
//! against the filesystem in production and against memory in tests.
//!
//! ## Write Discipline
//!
//! Every mutating operation ends with a full rewrite of the entire
//! collection through [`Backend::save`]. There are no incremental writes,
//! so a successful operation leaves the in-memory and persisted views
//! identical. A mutation that fails (bad title, unknown ID) returns before
//! anything is written.
//!
//! ## ID Allocation
//!
//! The next ID is recomputed as `max(existing ids) + 1` at allocation time
//! rather than kept as a stored counter. Deleting the highest-numbered task
//! frees that exact ID for the next add; lower freed IDs are never handed
//! out again while larger ones exist.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production JSON file storage
//! - [`memory::InMemoryBackend`]: in-memory storage for testing

use crate::error::{DonezoError, Result};
use crate::model::{Stats, Task};

pub mod fs;
pub mod memory;

/// Abstract interface for task persistence.
pub trait Backend {
    /// Load the previously persisted collection. Absent prior state loads
    /// as an empty collection; only genuine I/O failures are errors.
    fn load(&self) -> Result<Vec<Task>>;

    /// Rewrite the full collection.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}

/// The owner of the task collection and its persisted form.
///
/// Exactly one store instance is expected to own a given storage location
/// at a time; there is no cross-process coordination.
pub struct TaskStore<B: Backend> {
    backend: B,
    tasks: Vec<Task>,
}

impl<B: Backend> TaskStore<B> {
    /// Construct a store against a backend, loading whatever state it holds.
    pub fn open(backend: B) -> Result<Self> {
        let tasks = backend.load()?;
        Ok(Self { backend, tasks })
    }

    /// Add a task and return its ID. The title is trimmed; an empty or
    /// whitespace-only title is rejected and leaves the collection
    /// untouched.
    pub fn add(&mut self, title: &str) -> Result<u64> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DonezoError::InvalidTitle);
        }
        let id = self.next_id();
        let title = title.to_string();
        self.mutate(|tasks| {
            tasks.push(Task::new(id, title));
            Ok(())
        })?;
        Ok(id)
    }

    /// A copy of the current tasks, in insertion order.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn find_by_id(&self, id: u64) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(DonezoError::NotFound(id))
    }

    /// Mark a task as completed. Idempotent: completing an already-completed
    /// task succeeds silently.
    pub fn complete(&mut self, id: u64) -> Result<()> {
        self.mutate(|tasks| {
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(DonezoError::NotFound(id))?;
            task.completed = true;
            Ok(())
        })
    }

    /// Remove a task permanently.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.mutate(|tasks| {
            let pos = tasks
                .iter()
                .position(|t| t.id == id)
                .ok_or(DonezoError::NotFound(id))?;
            tasks.remove(pos);
            Ok(())
        })
    }

    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        Stats {
            total,
            completed,
            pending: total - completed,
            completion_rate,
        }
    }

    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    /// Run a mutation and persist the full collection only when it
    /// succeeded. A failed mutation returns before any write happens.
    fn mutate<T>(&mut self, op: impl FnOnce(&mut Vec<Task>) -> Result<T>) -> Result<T> {
        let value = op(&mut self.tasks)?;
        self.backend.save(&self.tasks)?;
        Ok(value)
    }
}
