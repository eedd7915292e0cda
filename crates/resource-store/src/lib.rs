pub mod error;
pub mod memory;
pub mod store;

pub use common::ResourceId;
pub use error::{Result, StoreError};
pub use memory::InMemoryRepository;
pub use store::{Entity, Repository};
