pub mod constants;
pub mod controller;
pub mod error;
pub mod routes;
pub mod session;
pub mod types;
