//! Custom request extractors.

mod employee_upload;
mod validated_json;

pub use employee_upload::EmployeeUpload;
pub use validated_json::ValidatedJson;
