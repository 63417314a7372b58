pub mod memory;
pub mod mongo;
pub mod storage;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use storage::CatalogStore;
