pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod pages;
pub mod routes;
pub mod state;
