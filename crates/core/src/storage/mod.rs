//! Repository abstraction over the remote event collection.

mod error;
mod memory;
mod traits;

pub use error::{repository_error_to_status_code, RepositoryError, Result};
pub use memory::MemoryRepository;
pub use traits::EventRepository;
