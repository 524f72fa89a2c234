//! Persistence models: sea-orm entities for the clinic tables, the `Gender`
//! active enum shared by storage and the HTTP surface, and connection helpers.

pub mod errors;
pub mod db;
pub mod gender;
pub mod animal_type;
pub mod animal;
pub mod medical_record;

pub use gender::Gender;
