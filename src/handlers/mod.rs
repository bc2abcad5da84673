// handlers/mod.rs
//
// portfolio: the /portfolio CRUD resource, mounted under the configured base path
// system:    service info, health check and the JSON 404 fallback
pub mod portfolio;
pub mod system;
