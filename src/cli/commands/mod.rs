pub mod init_db;
pub mod openapi;
pub mod serve;
