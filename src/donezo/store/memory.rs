use super::Backend;
use crate::error::Result;
use crate::model::Task;

/// In-memory backend for testing and development.
/// Does NOT persist data beyond its own lifetime.
#[derive(Default)]
pub struct InMemoryBackend {
    tasks: Vec<Task>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-seeded records, as if a prior run had saved them.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl Backend for InMemoryBackend {
    fn load(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        self.tasks = tasks.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::TaskStore;

    /// A store pre-populated with `count` pending tasks named
    /// "Test Task 1..count".
    pub fn store_with_tasks(count: usize) -> TaskStore<InMemoryBackend> {
        let mut store = TaskStore::open(InMemoryBackend::new()).unwrap();
        for i in 1..=count {
            store.add(&format!("Test Task {}", i)).unwrap();
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskStore;

    #[test]
    fn seeded_backend_resumes_id_allocation_after_the_maximum() {
        let backend = InMemoryBackend::with_tasks(vec![
            Task::new(4, "Old".into()),
            Task::new(9, "Older".into()),
        ]);
        let mut store = TaskStore::open(backend).unwrap();
        assert_eq!(store.add("New").unwrap(), 10);
    }

    #[test]
    fn fixture_counts_match() {
        let store = fixtures::store_with_tasks(3);
        assert_eq!(store.list().len(), 3);
        assert_eq!(store.stats().pending, 3);
    }
}
