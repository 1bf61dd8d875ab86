pub mod summary;
pub mod url;

pub use summary::summary_handler;
pub use url::{create_handler, resolve_handler};
