pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod security;
pub mod state;
