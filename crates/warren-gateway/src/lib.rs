//! Thin HTTP transport over the warren slug store.
//!
//! All invariants live in `warren-core`/`warren-store`; this crate only
//! routes requests, validates externally supplied slugs at the edge, and
//! maps store errors onto HTTP statuses.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::router;
pub use error::AppError;
pub use state::AppState;
