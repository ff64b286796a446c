//! QMS form handling: the catalog listing, placeholder resolution for form
//! generation, and schema validation of submissions. Filling the actual
//! Word/Excel files is outside this service; it only supplies the values.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use sea_orm::{ActiveEnum, DatabaseConnection};

use entity::form_submission::SubmissionStatus;

use crate::model::form::{
    CreateFormSubmissionDto, FormCategoryDto, FormField, FormSubmissionDto, FormSummaryDto,
    FormTemplateDto, GenerateFormDto, GeneratedFormDto,
};
use crate::server::catalog::Catalog;
use crate::server::data::application::ApplicationRepository;
use crate::server::data::certificate::CertificateRepository;
use crate::server::data::crew::CrewRepository;
use crate::server::data::form::{FormSubmissionRepository, FormTemplateRepository};
use crate::server::error::Error;
use crate::server::service::approval::parse_metadata;

/// The form catalog grouped by department, for the form list endpoint.
pub fn forms_by_category(catalog: &Catalog) -> Vec<FormCategoryDto> {
    let mut groups: BTreeMap<String, Vec<FormSummaryDto>> = BTreeMap::new();

    for form in &catalog.forms {
        groups
            .entry(form.category.clone())
            .or_default()
            .push(FormSummaryDto {
                code: form.code.clone(),
                title: form.title.clone(),
                pages: form.pages,
            });
    }

    groups
        .into_iter()
        .map(|(category, forms)| FormCategoryDto { category, forms })
        .collect()
}

/// Validates a submission's value map against the template's field schema.
/// Unknown fields, missing required fields and type mismatches all fail.
pub fn validate_form_data(
    fields: &[FormField],
    data: &BTreeMap<String, serde_json::Value>,
) -> Result<(), Error> {
    for name in data.keys() {
        if !fields.iter().any(|field| field.name() == name) {
            return Err(Error::Validation(format!("Unknown form field {name}")));
        }
    }

    for field in fields {
        let value = data.get(field.name());

        let Some(value) = value.filter(|v| !v.is_null()) else {
            if field.required() {
                return Err(Error::Validation(format!(
                    "Missing required form field {}",
                    field.name()
                )));
            }
            continue;
        };

        match field {
            FormField::Text { name, .. } => {
                if !value.is_string() {
                    return Err(Error::Validation(format!("Field {name} must be a string")));
                }
            }
            FormField::Date { name, .. } => {
                let ok = value
                    .as_str()
                    .is_some_and(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok());
                if !ok {
                    return Err(Error::Validation(format!(
                        "Field {name} must be a YYYY-MM-DD date"
                    )));
                }
            }
            FormField::Number { name, .. } => {
                if !value.is_number() {
                    return Err(Error::Validation(format!("Field {name} must be a number")));
                }
            }
            FormField::Checkbox { name, .. } => {
                if !value.is_boolean() {
                    return Err(Error::Validation(format!("Field {name} must be a boolean")));
                }
            }
            FormField::Select { name, options, .. } => {
                let ok = value
                    .as_str()
                    .is_some_and(|raw| options.iter().any(|option| option == raw));
                if !ok {
                    return Err(Error::Validation(format!(
                        "Field {name} must be one of the listed options"
                    )));
                }
            }
        }
    }

    Ok(())
}

pub struct FormService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormService<'a> {
    /// Creates a new instance of [`FormService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn template(&self, code: &str) -> Result<FormTemplateDto, Error> {
        let repository = FormTemplateRepository::new(self.db);
        let template = repository
            .get_by_code(code)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Form template {code}")))?;

        let fields: Vec<FormField> = serde_json::from_str(&template.fields)?;

        Ok(FormTemplateDto::from_model(template, fields))
    }

    /// Resolves a crew member's data into the template's placeholder map.
    /// Placeholders with no source value are reported in `missing`.
    pub async fn generate(&self, dto: GenerateFormDto) -> Result<GeneratedFormDto, Error> {
        let template_repo = FormTemplateRepository::new(self.db);
        let template = template_repo
            .get_by_code(&dto.code)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Form template {}", dto.code)))?;
        let fields: Vec<FormField> = serde_json::from_str(&template.fields)?;

        let crew_repo = CrewRepository::new(self.db);
        let crew = crew_repo
            .get_by_id(dto.crew_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Crew {}", dto.crew_id)))?;

        let application_repo = ApplicationRepository::new(self.db);
        let application = application_repo.latest_for_crew(crew.id).await?;
        let metadata = application
            .as_ref()
            .map(|app| parse_metadata(app.notes.as_deref()))
            .transpose()?
            .flatten();

        let certificate_repo = CertificateRepository::new(self.db);
        let certificates = certificate_repo.list(Some(crew.id)).await?;
        let certificate = |type_code: &str| {
            certificates
                .iter()
                .find(|cert| cert.r#type == type_code)
        };

        let mut values = BTreeMap::new();
        let mut missing = Vec::new();

        for field in &fields {
            let value = match field.name() {
                "full_name" => Some(json_string(&crew.full_name)),
                "crew_code" => Some(json_string(&crew.crew_code)),
                "rank" => Some(json_string(&crew.rank)),
                "vessel" => crew.vessel.as_deref().map(json_string),
                "date_of_birth" => crew.date_of_birth.map(json_date),
                "place_of_birth" => crew.place_of_birth.as_deref().map(json_string),
                "nationality" => crew.nationality.as_deref().map(json_string),
                "religion" => crew.religion.as_deref().map(json_string),
                "marital_status" => crew.marital_status.as_deref().map(json_string),
                "address" => crew.address.as_deref().map(json_string),
                "phone" => crew.phone.as_deref().map(json_string),
                "email" => crew.email.as_deref().map(json_string),
                "applied_rank" => application
                    .as_ref()
                    .map(|app| json_string(&app.applied_rank)),
                "available_date" => metadata
                    .as_ref()
                    .and_then(|m| m.available_date)
                    .map(json_date),
                "expected_salary" => metadata
                    .as_ref()
                    .and_then(|m| m.expected_salary)
                    .map(|salary| serde_json::Value::from(salary)),
                "passport_number" => certificate("PASSPORT")
                    .and_then(|cert| cert.certificate_number.as_deref())
                    .map(json_string),
                "passport_expiry" => certificate("PASSPORT")
                    .and_then(|cert| cert.expiry_date)
                    .map(json_date),
                "seaman_book_number" => certificate("SEAMAN_BOOK")
                    .and_then(|cert| cert.certificate_number.as_deref())
                    .map(json_string),
                "seaman_book_expiry" => certificate("SEAMAN_BOOK")
                    .and_then(|cert| cert.expiry_date)
                    .map(json_date),
                "medical_expiry" => certificate("MEDICAL")
                    .and_then(|cert| cert.expiry_date)
                    .map(json_date),
                _ => None,
            };

            match value {
                Some(value) => {
                    values.insert(field.name().to_string(), value);
                }
                None => missing.push(field.name().to_string()),
            }
        }

        Ok(GeneratedFormDto {
            code: template.code,
            title: template.title,
            values,
            missing,
        })
    }

    pub async fn create_submission(
        &self,
        dto: CreateFormSubmissionDto,
    ) -> Result<FormSubmissionDto, Error> {
        let template_repo = FormTemplateRepository::new(self.db);
        let template = template_repo
            .get_by_code(&dto.template_code)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Form template {}", dto.template_code)))?;

        let fields: Vec<FormField> = serde_json::from_str(&template.fields)?;
        validate_form_data(&fields, &dto.form_data)?;

        let status = match dto.status.as_deref() {
            None => SubmissionStatus::Draft,
            Some(raw) => SubmissionStatus::try_from_value(&raw.to_string())
                .map_err(|_| Error::Validation(format!("Unknown submission status {raw}")))?,
        };

        if let Some(crew_id) = dto.crew_id {
            let crew_repo = CrewRepository::new(self.db);
            crew_repo
                .get_by_id(crew_id)
                .await?
                .ok_or_else(|| Error::NotFound(format!("Crew {crew_id}")))?;
        }

        let repository = FormSubmissionRepository::new(self.db);
        let submission = repository
            .create(
                template.id,
                dto.crew_id,
                dto.application_id,
                status,
                serde_json::to_string(&dto.form_data)?,
            )
            .await?;

        Ok(FormSubmissionDto::from_model(
            submission,
            Some(template.code),
            dto.form_data,
        ))
    }

    pub async fn list_submissions(
        &self,
        crew_id: Option<i32>,
    ) -> Result<Vec<FormSubmissionDto>, Error> {
        let repository = FormSubmissionRepository::new(self.db);

        repository
            .list_with_template(crew_id)
            .await?
            .into_iter()
            .map(|(submission, template)| {
                let form_data = serde_json::from_str(&submission.form_data)?;
                Ok(FormSubmissionDto::from_model(
                    submission,
                    template.map(|t| t.code),
                    form_data,
                ))
            })
            .collect()
    }
}

fn json_string(value: &str) -> serde_json::Value {
    serde_json::Value::String(value.to_string())
}

fn json_date(date: NaiveDate) -> serde_json::Value {
    serde_json::Value::String(date.format("%Y-%m-%d").to_string())
}
