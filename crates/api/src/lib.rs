pub mod discovery;
pub mod routes;
pub mod state;
