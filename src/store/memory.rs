use super::SnapshotStore;
use anyhow::Result;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// In-memory store, used where no cache file should be touched.
#[derive(Default)]
pub struct MemoryStore {
    body: Mutex<Option<Vec<u8>>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out holding `body`, as if a previous run had cached it.
    pub fn with_body(body: &[u8]) -> Self {
        Self {
            body: Mutex::new(Some(body.to_vec())),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        let body = self
            .body
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))?;
        debug!(hit = body.is_some(), "Memory store read");
        Ok(body.clone())
    }

    fn write(&self, body: &[u8]) -> Result<()> {
        let mut current = self
            .body
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))?;
        *current = Some(body.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        debug!("Memory store PUT");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_read_write() {
        let store = MemoryStore::new();
        assert!(store.read().unwrap().is_none());

        store.write(b"first").unwrap();
        store.write(b"second").unwrap();

        assert_eq!(store.read().unwrap(), Some(b"second".to_vec()));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_memory_store_with_body() {
        let store = MemoryStore::with_body(b"cached");
        assert_eq!(store.read().unwrap(), Some(b"cached".to_vec()));
        assert_eq!(store.write_count(), 0);
    }
}
