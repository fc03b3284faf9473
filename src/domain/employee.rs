//! Employee and ex-employee records and the form that creates or patches them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::image::serialize_data_uri;
use super::validation::{
    check_email, check_optional_phone, check_phone, check_skills, parse_date, parse_skills,
    SkillsInput, SkillsMode,
};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum PostAppliedFor {
    Employee,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum HasDisease {
    Yes,
    No,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl PostAppliedFor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostAppliedFor::Employee => "Employee",
            PostAppliedFor::Internship => "Internship",
        }
    }
}

impl HasDisease {
    pub fn as_str(&self) -> &'static str {
        match self {
            HasDisease::Yes => "Yes",
            HasDisease::No => "No",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            _ => Err(AppError::validation("gender must be Male or Female")),
        }
    }
}

impl std::str::FromStr for PostAppliedFor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Employee" => Ok(PostAppliedFor::Employee),
            "Internship" => Ok(PostAppliedFor::Internship),
            _ => Err(AppError::validation(
                "post_applied_for must be Employee or Internship",
            )),
        }
    }
}

impl std::str::FromStr for HasDisease {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(HasDisease::Yes),
            "No" => Ok(HasDisease::No),
            _ => Err(AppError::validation("has_disease must be Yes or No")),
        }
    }
}

/// Business fields shared by live and archived employees.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmployeeDetails {
    pub employee_id: String,
    pub registration_date: NaiveDate,
    pub joining_date: NaiveDate,
    pub post_applied_for: PostAppliedFor,
    pub full_name: String,
    pub gender: Gender,
    pub cnic: String,
    pub dob: NaiveDate,
    pub permanent_address: String,
    pub contact_number: String,
    pub email: String,
    pub position: Option<String>,
    pub organization: Option<String>,
    pub degree: String,
    pub institute: String,
    pub grade: String,
    pub year: i32,
    pub teaching_subjects: Option<String>,
    pub teaching_institute: Option<String>,
    pub teaching_contact: Option<String>,
    pub skills: Option<Vec<String>>,
    pub description: Option<String>,
    pub in_time: String,
    pub out_time: String,
    #[serde(rename = "Salary_Cap")]
    pub salary_cap: i32,
    pub guardian_phone: String,
    pub reference_name: Option<String>,
    pub reference_contact: Option<String>,
    pub has_disease: HasDisease,
    pub disease_description: Option<String>,
    /// JPEG bytes, rendered as a `data:image/jpeg;base64,...` URI
    #[serde(serialize_with = "serialize_data_uri")]
    #[schema(value_type = Option<String>)]
    pub image: Option<Vec<u8>>,
}

impl EmployeeDetails {
    /// Check every record-level invariant.
    pub fn validate(&self) -> AppResult<()> {
        check_disease(self.has_disease, self.disease_description.as_deref())?;
        check_email(&self.email)?;
        check_phone("guardian_phone", &self.guardian_phone)?;
        check_optional_phone("reference_contact", self.reference_contact.as_deref())?;
        check_optional_phone("teaching_contact", self.teaching_contact.as_deref())?;
        if let Some(skills) = &self.skills {
            check_skills(skills)?;
        }
        if self.salary_cap < 0 {
            return Err(AppError::validation("Salary_Cap must not be negative"));
        }
        Ok(())
    }
}

fn check_disease(flag: HasDisease, description: Option<&str>) -> AppResult<()> {
    let described = description.map(|d| !d.trim().is_empty()).unwrap_or(false);
    if flag == HasDisease::Yes && !described {
        return Err(AppError::validation(
            "Disease description is required when has_disease is Yes",
        ));
    }
    Ok(())
}

/// A live employee.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Employee {
    pub id: i32,
    #[serde(flatten)]
    pub details: EmployeeDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An archived employee.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExEmployee {
    pub id: i32,
    #[serde(flatten)]
    pub details: EmployeeDetails,
    pub exit_date: DateTime<Utc>,
}

/// Field order used by the required-field check.
pub const REQUIRED_FIELDS: &[&str] = &[
    "employee_id",
    "registration_date",
    "joining_date",
    "post_applied_for",
    "full_name",
    "gender",
    "cnic",
    "dob",
    "permanent_address",
    "contact_number",
    "email",
    "degree",
    "institute",
    "grade",
    "year",
    "in_time",
    "out_time",
    "Salary_Cap",
    "guardian_phone",
    "has_disease",
];

/// Raw text fields of an employee form (multipart).
///
/// Every field is optional here; registration demands the required ones,
/// update falls back to the stored value for anything left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_id: Option<String>,
    pub registration_date: Option<String>,
    pub joining_date: Option<String>,
    pub post_applied_for: Option<String>,
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub cnic: Option<String>,
    pub dob: Option<String>,
    pub permanent_address: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub organization: Option<String>,
    pub degree: Option<String>,
    pub institute: Option<String>,
    pub grade: Option<String>,
    pub year: Option<String>,
    pub teaching_subjects: Option<String>,
    pub teaching_institute: Option<String>,
    pub teaching_contact: Option<String>,
    pub skills: Option<SkillsInput>,
    pub description: Option<String>,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub salary_cap: Option<String>,
    pub guardian_phone: Option<String>,
    pub reference_name: Option<String>,
    pub reference_contact: Option<String>,
    pub has_disease: Option<String>,
    pub disease_description: Option<String>,
    /// Only read when creating an archive row directly
    pub exit_date: Option<String>,
}

impl EmployeeForm {
    /// Store a named form field. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        let slot = match name {
            "skills" | "skills[]" => {
                self.skills = Some(match self.skills.take() {
                    Some(existing) => existing.push(value),
                    None if name == "skills[]" => SkillsInput::List(vec![value]),
                    None => SkillsInput::Text(value),
                });
                return;
            }
            "employee_id" => &mut self.employee_id,
            "registration_date" => &mut self.registration_date,
            "joining_date" => &mut self.joining_date,
            "post_applied_for" => &mut self.post_applied_for,
            "full_name" => &mut self.full_name,
            "gender" => &mut self.gender,
            "cnic" => &mut self.cnic,
            "dob" => &mut self.dob,
            "permanent_address" => &mut self.permanent_address,
            "contact_number" => &mut self.contact_number,
            "email" => &mut self.email,
            "position" => &mut self.position,
            "organization" => &mut self.organization,
            "degree" => &mut self.degree,
            "institute" => &mut self.institute,
            "grade" => &mut self.grade,
            "year" => &mut self.year,
            "teaching_subjects" => &mut self.teaching_subjects,
            "teaching_institute" => &mut self.teaching_institute,
            "teaching_contact" => &mut self.teaching_contact,
            "description" => &mut self.description,
            "in_time" => &mut self.in_time,
            "out_time" => &mut self.out_time,
            "Salary_Cap" | "salary_cap" => &mut self.salary_cap,
            "guardian_phone" => &mut self.guardian_phone,
            "reference_name" => &mut self.reference_name,
            "reference_contact" => &mut self.reference_contact,
            "has_disease" => &mut self.has_disease,
            "disease_description" => &mut self.disease_description,
            "exit_date" => &mut self.exit_date,
            _ => return,
        };
        *slot = Some(value);
    }

    fn required_value(&self, name: &str) -> Option<&str> {
        let value = match name {
            "employee_id" => &self.employee_id,
            "registration_date" => &self.registration_date,
            "joining_date" => &self.joining_date,
            "post_applied_for" => &self.post_applied_for,
            "full_name" => &self.full_name,
            "gender" => &self.gender,
            "cnic" => &self.cnic,
            "dob" => &self.dob,
            "permanent_address" => &self.permanent_address,
            "contact_number" => &self.contact_number,
            "email" => &self.email,
            "degree" => &self.degree,
            "institute" => &self.institute,
            "grade" => &self.grade,
            "year" => &self.year,
            "in_time" => &self.in_time,
            "out_time" => &self.out_time,
            "Salary_Cap" => &self.salary_cap,
            "guardian_phone" => &self.guardian_phone,
            "has_disease" => &self.has_disease,
            _ => return None,
        };
        filled(value)
    }

    /// First missing required field wins.
    pub fn check_required(&self) -> AppResult<()> {
        match REQUIRED_FIELDS
            .iter()
            .find(|name| self.required_value(name).is_none())
        {
            Some(name) => Err(AppError::validation(format!("{} is required", name))),
            None => Ok(()),
        }
    }

    /// Disease rule on the raw form, checked before anything touches storage.
    pub fn check_disease(&self) -> AppResult<()> {
        match filled(&self.has_disease) {
            Some(flag) => check_disease(flag.parse()?, self.disease_description.as_deref()),
            None => Ok(()),
        }
    }

    /// Build a full record for a new employee. Run `check_required` first.
    pub fn into_details(self, image: Option<Vec<u8>>) -> AppResult<EmployeeDetails> {
        let skills = match &self.skills {
            Some(raw) => parse_skills(raw, SkillsMode::Strict)?,
            None => None,
        };

        let (registration_date, joining_date, dob) = match (
            filled(&self.registration_date).and_then(parse_date),
            filled(&self.joining_date).and_then(parse_date),
            filled(&self.dob).and_then(parse_date),
        ) {
            (Some(r), Some(j), Some(d)) => (r, j, d),
            _ => return Err(AppError::validation("Invalid date format")),
        };

        let details = EmployeeDetails {
            employee_id: required(&self.employee_id, "employee_id")?,
            registration_date,
            joining_date,
            post_applied_for: required(&self.post_applied_for, "post_applied_for")?.parse()?,
            full_name: required(&self.full_name, "full_name")?,
            gender: required(&self.gender, "gender")?.parse()?,
            cnic: required(&self.cnic, "cnic")?,
            dob,
            permanent_address: required(&self.permanent_address, "permanent_address")?,
            contact_number: required(&self.contact_number, "contact_number")?,
            email: required(&self.email, "email")?,
            position: optional(&self.position),
            organization: optional(&self.organization),
            degree: required(&self.degree, "degree")?,
            institute: required(&self.institute, "institute")?,
            grade: required(&self.grade, "grade")?,
            year: parse_year(&required(&self.year, "year")?)?,
            teaching_subjects: optional(&self.teaching_subjects),
            teaching_institute: optional(&self.teaching_institute),
            teaching_contact: optional(&self.teaching_contact),
            skills,
            description: optional(&self.description),
            in_time: required(&self.in_time, "in_time")?,
            out_time: required(&self.out_time, "out_time")?,
            salary_cap: parse_salary_cap(&required(&self.salary_cap, "Salary_Cap")?)?,
            guardian_phone: required(&self.guardian_phone, "guardian_phone")?,
            reference_name: optional(&self.reference_name),
            reference_contact: optional(&self.reference_contact),
            has_disease: required(&self.has_disease, "has_disease")?.parse()?,
            disease_description: optional(&self.disease_description),
            image,
        };

        details.validate()?;
        Ok(details)
    }

    /// Overlay this patch on a stored record.
    ///
    /// Empty or missing patch values keep the stored value; a new image
    /// replaces the old one, no image keeps it. The merged record must still
    /// satisfy every invariant.
    pub fn merge(
        &self,
        existing: &EmployeeDetails,
        image: Option<Vec<u8>>,
    ) -> AppResult<EmployeeDetails> {
        let skills = match &self.skills {
            Some(raw) => parse_skills(raw, SkillsMode::Lenient)?.or_else(|| existing.skills.clone()),
            None => existing.skills.clone(),
        };

        let date_or = |patch: &Option<String>, current: NaiveDate| match filled(patch) {
            Some(raw) => parse_date(raw),
            None => Some(current),
        };
        let (registration_date, joining_date, dob) = match (
            date_or(&self.registration_date, existing.registration_date),
            date_or(&self.joining_date, existing.joining_date),
            date_or(&self.dob, existing.dob),
        ) {
            (Some(r), Some(j), Some(d)) => (r, j, d),
            _ => return Err(AppError::validation("Invalid date format")),
        };

        let text_or = |patch: &Option<String>, current: &String| {
            filled(patch).map(str::to_string).unwrap_or_else(|| current.clone())
        };
        let optional_or = |patch: &Option<String>, current: &Option<String>| {
            optional(patch).or_else(|| current.clone())
        };

        let merged = EmployeeDetails {
            employee_id: text_or(&self.employee_id, &existing.employee_id),
            registration_date,
            joining_date,
            post_applied_for: match filled(&self.post_applied_for) {
                Some(v) => v.parse()?,
                None => existing.post_applied_for,
            },
            full_name: text_or(&self.full_name, &existing.full_name),
            gender: match filled(&self.gender) {
                Some(v) => v.parse()?,
                None => existing.gender,
            },
            cnic: text_or(&self.cnic, &existing.cnic),
            dob,
            permanent_address: text_or(&self.permanent_address, &existing.permanent_address),
            contact_number: text_or(&self.contact_number, &existing.contact_number),
            email: text_or(&self.email, &existing.email),
            position: optional_or(&self.position, &existing.position),
            organization: optional_or(&self.organization, &existing.organization),
            degree: text_or(&self.degree, &existing.degree),
            institute: text_or(&self.institute, &existing.institute),
            grade: text_or(&self.grade, &existing.grade),
            year: match filled(&self.year) {
                Some(v) => parse_year(v)?,
                None => existing.year,
            },
            teaching_subjects: optional_or(&self.teaching_subjects, &existing.teaching_subjects),
            teaching_institute: optional_or(
                &self.teaching_institute,
                &existing.teaching_institute,
            ),
            teaching_contact: optional_or(&self.teaching_contact, &existing.teaching_contact),
            skills,
            description: optional_or(&self.description, &existing.description),
            in_time: text_or(&self.in_time, &existing.in_time),
            out_time: text_or(&self.out_time, &existing.out_time),
            salary_cap: match filled(&self.salary_cap) {
                Some(v) => parse_salary_cap(v)?,
                None => existing.salary_cap,
            },
            guardian_phone: text_or(&self.guardian_phone, &existing.guardian_phone),
            reference_name: optional_or(&self.reference_name, &existing.reference_name),
            reference_contact: optional_or(&self.reference_contact, &existing.reference_contact),
            has_disease: match filled(&self.has_disease) {
                Some(v) => v.parse()?,
                None => existing.has_disease,
            },
            disease_description: optional_or(
                &self.disease_description,
                &existing.disease_description,
            ),
            image: image.or_else(|| existing.image.clone()),
        };

        merged.validate()?;
        Ok(merged)
    }

    /// Exit date for a directly created archive row; defaults to now.
    pub fn exit_date(&self) -> AppResult<DateTime<Utc>> {
        match filled(&self.exit_date) {
            None => Ok(Utc::now()),
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    parse_date(raw)
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| dt.and_utc())
                })
                .ok_or_else(|| AppError::validation("Invalid date format")),
        }
    }
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn optional(value: &Option<String>) -> Option<String> {
    filled(value).map(str::to_string)
}

fn required(value: &Option<String>, name: &str) -> AppResult<String> {
    filled(value)
        .map(str::to_string)
        .ok_or_else(|| AppError::validation(format!("{} is required", name)))
}

fn parse_year(raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation("year must be a number"))
}

fn parse_salary_cap(raw: &str) -> AppResult<i32> {
    match raw.trim().parse::<i32>() {
        Ok(v) if v >= 0 => Ok(v),
        _ => Err(AppError::validation(
            "Salary_Cap must be a non-negative whole number",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> EmployeeForm {
        let mut form = EmployeeForm::default();
        for (name, value) in [
            ("employee_id", "EMP-001"),
            ("registration_date", "2024-01-10"),
            ("joining_date", "2024-02-01"),
            ("post_applied_for", "Employee"),
            ("full_name", "Ayesha Khan"),
            ("gender", "Female"),
            ("cnic", "35202-1234567-8"),
            ("dob", "1998-05-20"),
            ("permanent_address", "12 Mall Road, Lahore"),
            ("contact_number", "03001234567"),
            ("email", "ayesha@example.com"),
            ("degree", "BSCS"),
            ("institute", "FAST"),
            ("grade", "A"),
            ("year", "2020"),
            ("in_time", "09:00"),
            ("out_time", "17:00"),
            ("Salary_Cap", "120000"),
            ("guardian_phone", "03111234567"),
            ("has_disease", "No"),
        ] {
            form.set(name, value.to_string());
        }
        form
    }

    #[test]
    fn complete_form_builds_a_record() {
        let details = complete_form().into_details(None).unwrap();
        assert_eq!(details.gender, Gender::Female);
        assert_eq!(details.salary_cap, 120000);
        assert_eq!(details.dob, NaiveDate::from_ymd_opt(1998, 5, 20).unwrap());
        assert_eq!(details.skills, None);
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut form = complete_form();
        form.full_name = None;
        form.email = Some(String::new());
        let err = form.check_required().unwrap_err();
        assert_eq!(err.to_string(), "full_name is required");
    }

    #[test]
    fn salary_cap_is_required_under_its_wire_name() {
        let mut form = complete_form();
        form.salary_cap = None;
        assert_eq!(form.check_required().unwrap_err().to_string(), "Salary_Cap is required");
    }

    #[test]
    fn disease_description_required_only_when_flagged() {
        let mut form = complete_form();
        form.set("disease_description", "   ".to_string());
        assert!(form.check_disease().is_ok());

        form.set("has_disease", "Yes".to_string());
        assert!(form.check_disease().is_err());

        form.set("disease_description", "Asthma".to_string());
        assert!(form.check_disease().is_ok());
    }

    #[test]
    fn one_bad_date_fails_all_dates() {
        let mut form = complete_form();
        form.set("dob", "20-05-1998".to_string());
        let err = form.into_details(None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format");
    }

    #[test]
    fn unknown_gender_is_rejected() {
        let mut form = complete_form();
        form.set("gender", "Other".to_string());
        assert!(form.into_details(None).is_err());
    }

    #[test]
    fn short_guardian_phone_is_rejected() {
        let mut form = complete_form();
        form.set("guardian_phone", "0311123".to_string());
        assert!(form.into_details(None).is_err());
    }

    #[test]
    fn negative_salary_cap_is_rejected() {
        let mut form = complete_form();
        form.set("Salary_Cap", "-1".to_string());
        assert!(form.into_details(None).is_err());
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let existing = complete_form().into_details(Some(vec![1, 2, 3])).unwrap();
        let merged = EmployeeForm::default().merge(&existing, None).unwrap();
        assert_eq!(merged, existing);
    }

    #[test]
    fn patch_overrides_only_filled_fields() {
        let existing = complete_form().into_details(None).unwrap();
        let mut patch = EmployeeForm::default();
        patch.set("full_name", "Ayesha K.".to_string());
        patch.set("position", String::new());
        patch.set("skills", "rust, sql".to_string());

        let merged = patch.merge(&existing, Some(vec![9])).unwrap();
        assert_eq!(merged.full_name, "Ayesha K.");
        assert_eq!(merged.position, None);
        assert_eq!(merged.skills, Some(vec!["rust".to_string(), "sql".to_string()]));
        assert_eq!(merged.image, Some(vec![9]));
        assert_eq!(merged.cnic, existing.cnic);
    }

    #[test]
    fn merged_record_keeps_the_disease_rule() {
        let existing = complete_form().into_details(None).unwrap();
        let mut patch = EmployeeForm::default();
        patch.set("has_disease", "Yes".to_string());
        assert!(patch.merge(&existing, None).is_err());
    }

    #[test]
    fn patch_with_bad_date_is_rejected() {
        let existing = complete_form().into_details(None).unwrap();
        let mut patch = EmployeeForm::default();
        patch.set("joining_date", "tomorrow".to_string());
        let err = patch.merge(&existing, None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format");
    }

    #[test]
    fn exit_date_defaults_to_now() {
        let before = Utc::now();
        let exit = EmployeeForm::default().exit_date().unwrap();
        assert!(exit >= before);

        let mut form = EmployeeForm::default();
        form.set("exit_date", "2024-06-30".to_string());
        assert_eq!(form.exit_date().unwrap().date_naive().to_string(), "2024-06-30");
    }

    #[test]
    fn image_renders_as_data_uri() {
        let details = complete_form().into_details(Some(vec![0xFF, 0xD8])).unwrap();
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["image"], "data:image/jpeg;base64,/9g=");
        assert_eq!(json["Salary_Cap"], 120000);
    }
}
