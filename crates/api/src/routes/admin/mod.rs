pub mod handlers;
pub mod interfaces;
pub mod middleware;
pub mod service;
