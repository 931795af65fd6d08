pub mod entities;
pub mod error;
pub mod mock_persistence;
pub mod persistence_manager;
pub mod traits;

pub use mock_persistence::MemoryPersistence;
pub use persistence_manager::PersistenceManager;
