pub mod config;
pub mod error;
pub mod response;
pub mod routes;
pub mod validation;
pub mod middleware;
pub mod handlers;
