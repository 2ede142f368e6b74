pub mod disk;
pub mod memory;

use anyhow::Result;

pub use disk::DiskStore;
pub use memory::MemoryStore;

/// Holds the single cached response body.
pub trait SnapshotStore: Send + Sync {
    /// Returns `None` when nothing has been cached yet.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replaces any previous content with `body`, verbatim.
    fn write(&self, body: &[u8]) -> Result<()>;
}
