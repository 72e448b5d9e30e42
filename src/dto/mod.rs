pub mod application_dto;
pub mod envelope;
pub mod form_dto;
pub mod job_dto;
