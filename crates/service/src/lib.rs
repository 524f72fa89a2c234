//! Clinic business rules on top of the `models` entities.
//! - `repository` abstracts record storage (SeaORM or in-process).
//! - `services` validate, normalize and delegate to a repository.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod services;
pub mod text;

#[cfg(test)]
mod test_support;
