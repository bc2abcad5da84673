pub mod openapi;

pub use openapi::{docs_router, ApiDoc};
