// handlers/portfolio - the /portfolio resource
pub mod create;
pub mod delete;
pub mod list;
pub mod payload;
pub mod update;

// Re-export handler functions for use in routing
pub use create::add_stock;
pub use delete::{delete_stock, delete_without_id};
pub use list::list_stocks;
pub use update::update_stock;
