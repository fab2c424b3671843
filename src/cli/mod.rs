pub mod database;
pub mod plan;
pub mod server;
