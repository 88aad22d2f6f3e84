pub mod api;
pub mod store;

pub use api::{AstroService, BirthSubmission, LineCount, LineRecord, ServiceError, Submitted};
pub use store::{BirthRecord, LineStore, MemoryStore, StoreError, StoredLine};
