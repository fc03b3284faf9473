//! Archived employee database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use super::{skills_from_json, skills_to_json, stored_enum};
use crate::domain::{EmployeeDetails, ExEmployee};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ex_employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub employee_id: String,
    pub registration_date: Date,
    pub joining_date: Date,
    pub post_applied_for: String,
    pub full_name: String,
    pub gender: String,
    #[sea_orm(unique)]
    pub cnic: String,
    pub dob: Date,
    pub permanent_address: String,
    pub contact_number: String,
    #[sea_orm(unique)]
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
    pub skills: Option<Json>,
    pub description: Option<String>,
    pub in_time: String,
    pub out_time: String,
    pub salary_cap: i32,
    pub guardian_phone: String,
    pub reference_name: Option<String>,
    pub reference_contact: Option<String>,
    pub has_disease: String,
    pub disease_description: Option<String>,
    pub image: Option<Vec<u8>>,
    pub exit_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for ExEmployee {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(ExEmployee {
            id: model.id,
            details: EmployeeDetails {
                employee_id: model.employee_id,
                registration_date: model.registration_date,
                joining_date: model.joining_date,
                post_applied_for: stored_enum(&model.post_applied_for)?,
                full_name: model.full_name,
                gender: stored_enum(&model.gender)?,
                cnic: model.cnic,
                dob: model.dob,
                permanent_address: model.permanent_address,
                contact_number: model.contact_number,
                email: model.email,
                position: model.position,
                organization: model.organization,
                degree: model.degree,
                institute: model.institute,
                grade: model.grade,
                year: model.year,
                teaching_subjects: model.teaching_subjects,
                teaching_institute: model.teaching_institute,
                teaching_contact: model.teaching_contact,
                skills: skills_from_json(model.skills)?,
                description: model.description,
                in_time: model.in_time,
                out_time: model.out_time,
                salary_cap: model.salary_cap,
                guardian_phone: model.guardian_phone,
                reference_name: model.reference_name,
                reference_contact: model.reference_contact,
                has_disease: stored_enum(&model.has_disease)?,
                disease_description: model.disease_description,
                image: model.image,
            },
            exit_date: model.exit_date,
        })
    }
}

impl ActiveModel {
    /// Overwrite every business column from a domain record.
    pub fn set_details(&mut self, details: EmployeeDetails) {
        self.employee_id = Set(details.employee_id);
        self.registration_date = Set(details.registration_date);
        self.joining_date = Set(details.joining_date);
        self.post_applied_for = Set(details.post_applied_for.as_str().to_string());
        self.full_name = Set(details.full_name);
        self.gender = Set(details.gender.as_str().to_string());
        self.cnic = Set(details.cnic);
        self.dob = Set(details.dob);
        self.permanent_address = Set(details.permanent_address);
        self.contact_number = Set(details.contact_number);
        self.email = Set(details.email);
        self.position = Set(details.position);
        self.organization = Set(details.organization);
        self.degree = Set(details.degree);
        self.institute = Set(details.institute);
        self.grade = Set(details.grade);
        self.year = Set(details.year);
        self.teaching_subjects = Set(details.teaching_subjects);
        self.teaching_institute = Set(details.teaching_institute);
        self.teaching_contact = Set(details.teaching_contact);
        self.skills = Set(skills_to_json(details.skills));
        self.description = Set(details.description);
        self.in_time = Set(details.in_time);
        self.out_time = Set(details.out_time);
        self.salary_cap = Set(details.salary_cap);
        self.guardian_phone = Set(details.guardian_phone);
        self.reference_name = Set(details.reference_name);
        self.reference_contact = Set(details.reference_contact);
        self.has_disease = Set(details.has_disease.as_str().to_string());
        self.disease_description = Set(details.disease_description);
        self.image = Set(details.image);
    }
}
