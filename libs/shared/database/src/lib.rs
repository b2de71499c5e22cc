pub mod error;
pub mod memory;
pub mod seed;
pub mod storage;

pub use error::StorageError;
pub use memory::MemStorage;
pub use storage::Storage;

#[cfg(feature = "mock")]
pub use storage::MockStorage;
