//! Repository layer holding the in-memory book store

pub mod books;

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

pub use books::Shelf;

/// Main repository handle, cheap to clone and shared by every service
#[derive(Clone, Default)]
pub struct Repository {
    shelf: Arc<Mutex<Shelf>>,
}

impl Repository {
    /// Create a repository over an empty shelf
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the shelf. The guard must be held for the whole operation so that
    /// a lookup and the mutation that follows it see the same state.
    pub async fn lock(&self) -> MutexGuard<'_, Shelf> {
        self.shelf.lock().await
    }
}
