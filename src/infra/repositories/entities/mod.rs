//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod employee;
pub mod ex_employee;
pub mod hr_user;
pub mod payroll;

use sea_orm::prelude::Json;

use crate::errors::{AppError, AppResult};

/// Parse an enumeration stored as text. A bad value means the row was
/// written outside this service.
fn stored_enum<T>(raw: &str) -> AppResult<T>
where
    T: std::str::FromStr<Err = AppError>,
{
    raw.parse()
        .map_err(|_| AppError::internal(format!("unexpected stored value {:?}", raw)))
}

fn skills_from_json(raw: Option<Json>) -> AppResult<Option<Vec<String>>> {
    raw.filter(|v| !v.is_null())
        .map(|v| {
            serde_json::from_value(v)
                .map_err(|e| AppError::internal(format!("stored skills are malformed: {}", e)))
        })
        .transpose()
}

fn skills_to_json(skills: Option<Vec<String>>) -> Option<Json> {
    skills.map(Json::from)
}

fn json_list<T: serde::de::DeserializeOwned>(raw: Json, column: &str) -> AppResult<T> {
    serde_json::from_value(raw)
        .map_err(|e| AppError::internal(format!("stored {} is malformed: {}", column, e)))
}
