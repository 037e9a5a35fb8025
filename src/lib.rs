pub mod columns;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod project;
pub mod record;
pub mod reshape;
pub mod store;
pub mod table;
