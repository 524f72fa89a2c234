pub mod errors;
pub mod openapi;
pub mod payloads;
pub mod routes;
pub mod startup;
pub mod state;
pub mod validation;

pub use startup::run;
pub use state::AppState;
