pub mod backend;
pub mod client;
pub mod mock;

pub use backend::{BackendError, BackendResponse, Endpoint, HttpBackend, ReviewBackend};
pub use client::{ApiClient, ApiError};
pub use mock::MockBackend;
