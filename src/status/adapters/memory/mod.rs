//! In-memory status adapters.

mod status;

pub use status::InMemoryStatusRepository;
