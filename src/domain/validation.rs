//! Field-level rules shared by employee registration, update and archiving.

use chrono::{DateTime, NaiveDate};
use validator::ValidateEmail;

use crate::config::{MAX_SKILLS, PHONE_DIGITS};
use crate::errors::{AppError, AppResult};

/// Skills as they arrive on the wire: repeated form fields or one serialized string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillsInput {
    List(Vec<String>),
    Text(String),
}

impl SkillsInput {
    /// Add another occurrence of the form field.
    pub fn push(self, value: String) -> Self {
        match self {
            SkillsInput::List(mut items) => {
                items.push(value);
                SkillsInput::List(items)
            }
            SkillsInput::Text(first) => SkillsInput::List(vec![first, value]),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            SkillsInput::List(items) => items.is_empty(),
            SkillsInput::Text(text) => text.trim().is_empty(),
        }
    }
}

/// How to treat a skills string that is not valid JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillsMode {
    /// Reject with `Invalid skills format` (registration).
    Strict,
    /// Fall back to a comma separated list (update).
    Lenient,
}

const SKILLS_LIMIT_MESSAGE: &str = "Skills must be an array with a maximum of 5 items";

/// Parse the skills field. `None` means the caller sent nothing usable.
pub fn parse_skills(input: &SkillsInput, mode: SkillsMode) -> AppResult<Option<Vec<String>>> {
    if input.is_blank() {
        return Ok(None);
    }

    let skills = match input {
        SkillsInput::List(items) => items.clone(),
        SkillsInput::Text(text) => match serde_json::from_str::<serde_json::Value>(text) {
            Ok(serde_json::Value::Array(values)) => values
                .into_iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => Ok(s),
                    _ => Err(AppError::validation(SKILLS_LIMIT_MESSAGE)),
                })
                .collect::<AppResult<Vec<_>>>()?,
            Ok(_) => return Err(AppError::validation(SKILLS_LIMIT_MESSAGE)),
            Err(_) => match mode {
                SkillsMode::Strict => return Err(AppError::validation("Invalid skills format")),
                SkillsMode::Lenient => text
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
        },
    };

    check_skills(&skills)?;
    Ok(Some(skills))
}

/// Skills list length rule.
pub fn check_skills(skills: &[String]) -> AppResult<()> {
    if skills.len() > MAX_SKILLS {
        return Err(AppError::validation(SKILLS_LIMIT_MESSAGE));
    }
    Ok(())
}

/// Parse a calendar date given as `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Exactly eleven ASCII digits.
pub fn check_phone(field: &str, value: &str) -> AppResult<()> {
    if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{} must be exactly {} digits",
            field, PHONE_DIGITS
        )))
    }
}

/// Empty, or exactly eleven ASCII digits.
pub fn check_optional_phone(field: &str, value: Option<&str>) -> AppResult<()> {
    match value {
        None | Some("") => Ok(()),
        Some(v) => check_phone(field, v).map_err(|_| {
            AppError::validation(format!(
                "{} must be empty or exactly {} digits",
                field, PHONE_DIGITS
            ))
        }),
    }
}

pub fn check_email(value: &str) -> AppResult<()> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(AppError::validation("Invalid email format"))
    }
}
