use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::draft::{list_items, JobDraft, JobField, SalaryType};
use crate::errors::ValidationErrors;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 120;
pub const DESCRIPTION_MIN_CHARS: usize = 30;

/// How strictly a save attempt validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaveMode {
    /// Save as draft: only what is needed to keep a consistent record.
    Draft,
    /// Publish or save a live posting: every required field.
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// Admin editors must pick the company the posting belongs to.
    pub require_company: bool,
    /// Expiry dates must fall after this day.
    pub today: NaiveDate,
}

/// Validates `draft`, producing errors in form order.
pub fn validate(draft: &JobDraft, mode: SaveMode, ctx: &ValidationContext) -> ValidationErrors {
    let strict = mode == SaveMode::Submit;
    let mut errors = ValidationErrors::new();
    let mut fail = |field: JobField, message: String| errors.insert(field.as_str(), message);

    let title = draft.title.trim();
    let title_len = title.chars().count();
    if title.is_empty() {
        fail(JobField::Title, "Job title is required".to_string());
    } else if strict && title_len < TITLE_MIN_CHARS {
        fail(
            JobField::Title,
            format!("Job title must be at least {TITLE_MIN_CHARS} characters"),
        );
    } else if title_len > TITLE_MAX_CHARS {
        fail(
            JobField::Title,
            format!("Job title must be at most {TITLE_MAX_CHARS} characters"),
        );
    }

    if strict && ctx.require_company && is_blank(draft.company_id.as_deref()) {
        fail(JobField::CompanyId, "Select the company for this job".to_string());
    }
    if strict && draft.category_id.trim().is_empty() {
        fail(JobField::CategoryId, "Select a category".to_string());
    }

    if strict && !draft.is_remote && draft.location.trim().is_empty() {
        fail(
            JobField::Location,
            "Location is required for on-site jobs".to_string(),
        );
    }
    if let Some(raw) = draft.expires_at.as_deref().filter(|s| !s.trim().is_empty()) {
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Err(_) => fail(
                JobField::ExpiresAt,
                "Expiry date must look like YYYY-MM-DD".to_string(),
            ),
            Ok(date) if strict && date <= ctx.today => fail(
                JobField::ExpiresAt,
                "Expiry date must be in the future".to_string(),
            ),
            Ok(_) => {}
        }
    }

    validate_salary(draft, strict, &mut fail);

    if strict {
        if draft.description.trim().chars().count() < DESCRIPTION_MIN_CHARS {
            fail(
                JobField::Description,
                format!("Description must be at least {DESCRIPTION_MIN_CHARS} characters"),
            );
        }
        if list_items(&draft.responsibilities).is_empty() {
            fail(
                JobField::Responsibilities,
                "Add at least one responsibility".to_string(),
            );
        }
        if list_items(&draft.requirements).is_empty() {
            fail(
                JobField::Requirements,
                "Add at least one requirement".to_string(),
            );
        }
    }

    errors
}

fn validate_salary(draft: &JobDraft, strict: bool, fail: &mut impl FnMut(JobField, String)) {
    match draft.salary_type {
        SalaryType::Range => {
            for (field, value) in [
                (JobField::SalaryMin, draft.salary_min),
                (JobField::SalaryMax, draft.salary_max),
            ] {
                match value {
                    Some(v) if v <= 0 => fail(field, format!("{} must be positive", field.label())),
                    None if strict => fail(field, format!("{} is required", field.label())),
                    _ => {}
                }
            }
            if let (Some(min), Some(max)) = (draft.salary_min, draft.salary_max) {
                if min > 0 && max > 0 && min >= max {
                    fail(
                        JobField::SalaryMin,
                        "Minimum salary must be less than maximum salary".to_string(),
                    );
                }
            }
        }
        SalaryType::Specific => match draft.specific_salary {
            Some(v) if v <= 0 => fail(JobField::SpecificSalary, "Salary must be positive".to_string()),
            None if strict => fail(JobField::SpecificSalary, "Salary is required".to_string()),
            _ => {}
        },
        SalaryType::Negotiable | SalaryType::NotDisclosed => {}
    }

    if strict && draft.salary_type.shows_amount() && !is_currency_code(&draft.currency) {
        fail(
            JobField::Currency,
            "Currency must be a 3-letter code such as USD".to_string(),
        );
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}
