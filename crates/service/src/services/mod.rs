pub mod animal_service;
pub mod animal_type_service;
pub mod medical_record_service;

pub use animal_service::AnimalService;
pub use animal_type_service::AnimalTypeService;
pub use medical_record_service::MedicalRecordService;
