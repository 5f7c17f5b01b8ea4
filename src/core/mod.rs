pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod paths;
pub mod payload;
pub mod request;
