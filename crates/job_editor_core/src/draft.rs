use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::{section_for_field, JobEditorSection};

/// The in-progress job posting being edited.
///
/// Field names serialize in camelCase so stored records and error keys share
/// one vocabulary (`salaryMin`, `expiresAt`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDraft {
    pub title: String,
    pub company_id: Option<String>,
    pub category_id: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub location: String,
    pub is_remote: bool,
    /// `YYYY-MM-DD`, kept as typed text until validation.
    pub expires_at: Option<String>,
    pub salary_type: SalaryType,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub specific_salary: Option<i64>,
    pub currency: String,
    pub benefits: String,
    pub description: String,
    pub responsibilities: String,
    pub requirements: String,
    pub nice_to_have: String,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            company_id: None,
            category_id: String::new(),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Mid,
            location: String::new(),
            is_remote: false,
            expires_at: None,
            salary_type: SalaryType::Range,
            salary_min: None,
            salary_max: None,
            specific_salary: None,
            currency: "USD".to_string(),
            benefits: String::new(),
            description: String::new(),
            responsibilities: String::new(),
            requirements: String::new(),
            nice_to_have: String::new(),
        }
    }
}

impl JobDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field` as display text.
    pub fn field_text(&self, field: JobField) -> String {
        fn opt_num(value: Option<i64>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }
        match field {
            JobField::Title => self.title.clone(),
            JobField::CompanyId => self.company_id.clone().unwrap_or_default(),
            JobField::CategoryId => self.category_id.clone(),
            JobField::Type => self.job_type.as_str().to_string(),
            JobField::ExperienceLevel => self.experience_level.as_str().to_string(),
            JobField::Location => self.location.clone(),
            JobField::IsRemote => self.is_remote.to_string(),
            JobField::ExpiresAt => self.expires_at.clone().unwrap_or_default(),
            JobField::SalaryType => self.salary_type.as_str().to_string(),
            JobField::SalaryMin => opt_num(self.salary_min),
            JobField::SalaryMax => opt_num(self.salary_max),
            JobField::SpecificSalary => opt_num(self.specific_salary),
            JobField::Currency => self.currency.clone(),
            JobField::Benefits => self.benefits.clone(),
            JobField::Description => self.description.clone(),
            JobField::Responsibilities => self.responsibilities.clone(),
            JobField::Requirements => self.requirements.clone(),
            JobField::NiceToHave => self.nice_to_have.clone(),
        }
    }
}

/// Splits a newline-delimited list field into its trimmed, non-blank items.
pub fn list_items(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
    Freelance,
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
        JobType::Temporary,
        JobType::Freelance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "FULL_TIME",
            JobType::PartTime => "PART_TIME",
            JobType::Contract => "CONTRACT",
            JobType::Internship => "INTERNSHIP",
            JobType::Temporary => "TEMPORARY",
            JobType::Freelance => "FREELANCE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Temporary => "Temporary",
            JobType::Freelance => "Freelance",
        }
    }
}

impl FromStr for JobType {
    type Err = ChangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChangeParseError::UnknownOption {
                field: JobField::Type,
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 6] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
        ExperienceLevel::Executive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "ENTRY",
            ExperienceLevel::Junior => "JUNIOR",
            ExperienceLevel::Mid => "MID",
            ExperienceLevel::Senior => "SENIOR",
            ExperienceLevel::Lead => "LEAD",
            ExperienceLevel::Executive => "EXECUTIVE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry level",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Lead => "Lead",
            ExperienceLevel::Executive => "Executive",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = ChangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceLevel::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChangeParseError::UnknownOption {
                field: JobField::ExperienceLevel,
                value: s.to_string(),
            })
    }
}

/// Which salary numbers are meaningful for a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryType {
    Range,
    Specific,
    Negotiable,
    NotDisclosed,
}

impl SalaryType {
    pub const ALL: [SalaryType; 4] = [
        SalaryType::Range,
        SalaryType::Specific,
        SalaryType::Negotiable,
        SalaryType::NotDisclosed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SalaryType::Range => "RANGE",
            SalaryType::Specific => "SPECIFIC",
            SalaryType::Negotiable => "NEGOTIABLE",
            SalaryType::NotDisclosed => "NOT_DISCLOSED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalaryType::Range => "Salary range",
            SalaryType::Specific => "Specific salary",
            SalaryType::Negotiable => "Negotiable",
            SalaryType::NotDisclosed => "Not disclosed",
        }
    }

    /// True when the posting shows a number (and therefore a currency).
    pub fn shows_amount(self) -> bool {
        matches!(self, SalaryType::Range | SalaryType::Specific)
    }
}

impl FromStr for SalaryType {
    type Err = ChangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SalaryType::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChangeParseError::UnknownOption {
                field: JobField::SalaryType,
                value: s.to_string(),
            })
    }
}

/// Every editable field of a [`JobDraft`], identified by its wire id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobField {
    Title,
    CompanyId,
    CategoryId,
    Type,
    ExperienceLevel,
    Location,
    IsRemote,
    ExpiresAt,
    SalaryType,
    SalaryMin,
    SalaryMax,
    SpecificSalary,
    Currency,
    Benefits,
    Description,
    Responsibilities,
    Requirements,
    NiceToHave,
}

impl JobField {
    /// All fields in form order.
    pub const ALL: [JobField; 18] = [
        JobField::Title,
        JobField::CompanyId,
        JobField::CategoryId,
        JobField::Type,
        JobField::ExperienceLevel,
        JobField::Location,
        JobField::IsRemote,
        JobField::ExpiresAt,
        JobField::SalaryType,
        JobField::SalaryMin,
        JobField::SalaryMax,
        JobField::SpecificSalary,
        JobField::Currency,
        JobField::Benefits,
        JobField::Description,
        JobField::Responsibilities,
        JobField::Requirements,
        JobField::NiceToHave,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::CompanyId => "companyId",
            JobField::CategoryId => "categoryId",
            JobField::Type => "type",
            JobField::ExperienceLevel => "experienceLevel",
            JobField::Location => "location",
            JobField::IsRemote => "isRemote",
            JobField::ExpiresAt => "expiresAt",
            JobField::SalaryType => "salaryType",
            JobField::SalaryMin => "salaryMin",
            JobField::SalaryMax => "salaryMax",
            JobField::SpecificSalary => "specificSalary",
            JobField::Currency => "currency",
            JobField::Benefits => "benefits",
            JobField::Description => "description",
            JobField::Responsibilities => "responsibilities",
            JobField::Requirements => "requirements",
            JobField::NiceToHave => "niceToHave",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobField::Title => "Job title",
            JobField::CompanyId => "Company",
            JobField::CategoryId => "Category",
            JobField::Type => "Employment type",
            JobField::ExperienceLevel => "Experience level",
            JobField::Location => "Location",
            JobField::IsRemote => "Remote",
            JobField::ExpiresAt => "Expires on",
            JobField::SalaryType => "Salary type",
            JobField::SalaryMin => "Minimum salary",
            JobField::SalaryMax => "Maximum salary",
            JobField::SpecificSalary => "Salary",
            JobField::Currency => "Currency",
            JobField::Benefits => "Benefits",
            JobField::Description => "Description",
            JobField::Responsibilities => "Responsibilities",
            JobField::Requirements => "Requirements",
            JobField::NiceToHave => "Nice to have",
        }
    }

    pub fn section(self) -> JobEditorSection {
        section_for_field(self.as_str())
    }

    /// Newline-delimited list fields.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            JobField::Benefits
                | JobField::Responsibilities
                | JobField::Requirements
                | JobField::NiceToHave
        )
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobField {
    type Err = ChangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        JobField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ChangeParseError::UnknownField(wanted.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeParseError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("`{value}` is not a valid option for {field}")]
    UnknownOption { field: JobField, value: String },
    #[error("{field} expects a whole number, got `{value}`")]
    NotANumber { field: JobField, value: String },
    #[error("{field} expects yes/no, got `{value}`")]
    NotABool { field: JobField, value: String },
}

/// One field mutation, forwarded from the editor to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftChange {
    Title(String),
    CompanyId(Option<String>),
    CategoryId(String),
    Type(JobType),
    ExperienceLevel(ExperienceLevel),
    Location(String),
    IsRemote(bool),
    ExpiresAt(Option<String>),
    SalaryType(SalaryType),
    SalaryMin(Option<i64>),
    SalaryMax(Option<i64>),
    SpecificSalary(Option<i64>),
    Currency(String),
    Benefits(String),
    Description(String),
    Responsibilities(String),
    Requirements(String),
    NiceToHave(String),
}

impl DraftChange {
    pub fn field(&self) -> JobField {
        match self {
            DraftChange::Title(_) => JobField::Title,
            DraftChange::CompanyId(_) => JobField::CompanyId,
            DraftChange::CategoryId(_) => JobField::CategoryId,
            DraftChange::Type(_) => JobField::Type,
            DraftChange::ExperienceLevel(_) => JobField::ExperienceLevel,
            DraftChange::Location(_) => JobField::Location,
            DraftChange::IsRemote(_) => JobField::IsRemote,
            DraftChange::ExpiresAt(_) => JobField::ExpiresAt,
            DraftChange::SalaryType(_) => JobField::SalaryType,
            DraftChange::SalaryMin(_) => JobField::SalaryMin,
            DraftChange::SalaryMax(_) => JobField::SalaryMax,
            DraftChange::SpecificSalary(_) => JobField::SpecificSalary,
            DraftChange::Currency(_) => JobField::Currency,
            DraftChange::Benefits(_) => JobField::Benefits,
            DraftChange::Description(_) => JobField::Description,
            DraftChange::Responsibilities(_) => JobField::Responsibilities,
            DraftChange::Requirements(_) => JobField::Requirements,
            DraftChange::NiceToHave(_) => JobField::NiceToHave,
        }
    }

    /// Applies the change. Switching the salary type drops the numbers the
    /// new type does not use, so only one salary shape is ever stored.
    pub fn apply(self, draft: &mut JobDraft) {
        match self {
            DraftChange::Title(v) => draft.title = v,
            DraftChange::CompanyId(v) => draft.company_id = v,
            DraftChange::CategoryId(v) => draft.category_id = v,
            DraftChange::Type(v) => draft.job_type = v,
            DraftChange::ExperienceLevel(v) => draft.experience_level = v,
            DraftChange::Location(v) => draft.location = v,
            DraftChange::IsRemote(v) => draft.is_remote = v,
            DraftChange::ExpiresAt(v) => draft.expires_at = v,
            DraftChange::SalaryType(v) => {
                draft.salary_type = v;
                if v != SalaryType::Range {
                    draft.salary_min = None;
                    draft.salary_max = None;
                }
                if v != SalaryType::Specific {
                    draft.specific_salary = None;
                }
            }
            DraftChange::SalaryMin(v) => draft.salary_min = v,
            DraftChange::SalaryMax(v) => draft.salary_max = v,
            DraftChange::SpecificSalary(v) => draft.specific_salary = v,
            DraftChange::Currency(v) => draft.currency = v,
            DraftChange::Benefits(v) => draft.benefits = v,
            DraftChange::Description(v) => draft.description = v,
            DraftChange::Responsibilities(v) => draft.responsibilities = v,
            DraftChange::Requirements(v) => draft.requirements = v,
            DraftChange::NiceToHave(v) => draft.nice_to_have = v,
        }
    }

    /// Builds a change from raw input text, as typed into a form control.
    ///
    /// List fields accept `\n` escapes so a single input line can carry
    /// several items. Blank text clears optional fields.
    pub fn parse(field: JobField, raw: &str) -> Result<DraftChange, ChangeParseError> {
        let trimmed = raw.trim();
        let optional_text = || {
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        let number = || -> Result<Option<i64>, ChangeParseError> {
            if trimmed.is_empty() {
                return Ok(None);
            }
            let digits: String = trimmed.chars().filter(|c| *c != ',' && *c != '_').collect();
            digits
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ChangeParseError::NotANumber {
                    field,
                    value: raw.to_string(),
                })
        };
        let list = || raw.replace("\\n", "\n");

        let change = match field {
            JobField::Title => DraftChange::Title(raw.to_string()),
            JobField::CompanyId => DraftChange::CompanyId(optional_text()),
            JobField::CategoryId => DraftChange::CategoryId(trimmed.to_string()),
            JobField::Type => DraftChange::Type(trimmed.parse()?),
            JobField::ExperienceLevel => DraftChange::ExperienceLevel(trimmed.parse()?),
            JobField::Location => DraftChange::Location(raw.to_string()),
            JobField::IsRemote => DraftChange::IsRemote(parse_bool(field, trimmed)?),
            JobField::ExpiresAt => DraftChange::ExpiresAt(optional_text()),
            JobField::SalaryType => DraftChange::SalaryType(trimmed.parse()?),
            JobField::SalaryMin => DraftChange::SalaryMin(number()?),
            JobField::SalaryMax => DraftChange::SalaryMax(number()?),
            JobField::SpecificSalary => DraftChange::SpecificSalary(number()?),
            JobField::Currency => DraftChange::Currency(trimmed.to_ascii_uppercase()),
            JobField::Benefits => DraftChange::Benefits(list()),
            JobField::Description => DraftChange::Description(list()),
            JobField::Responsibilities => DraftChange::Responsibilities(list()),
            JobField::Requirements => DraftChange::Requirements(list()),
            JobField::NiceToHave => DraftChange::NiceToHave(list()),
        };
        Ok(change)
    }

    /// The change that empties `field` (or resets it to its default choice).
    pub fn cleared(field: JobField) -> DraftChange {
        let defaults = JobDraft::default();
        match field {
            JobField::Title => DraftChange::Title(String::new()),
            JobField::CompanyId => DraftChange::CompanyId(None),
            JobField::CategoryId => DraftChange::CategoryId(String::new()),
            JobField::Type => DraftChange::Type(defaults.job_type),
            JobField::ExperienceLevel => DraftChange::ExperienceLevel(defaults.experience_level),
            JobField::Location => DraftChange::Location(String::new()),
            JobField::IsRemote => DraftChange::IsRemote(false),
            JobField::ExpiresAt => DraftChange::ExpiresAt(None),
            JobField::SalaryType => DraftChange::SalaryType(defaults.salary_type),
            JobField::SalaryMin => DraftChange::SalaryMin(None),
            JobField::SalaryMax => DraftChange::SalaryMax(None),
            JobField::SpecificSalary => DraftChange::SpecificSalary(None),
            JobField::Currency => DraftChange::Currency(String::new()),
            JobField::Benefits => DraftChange::Benefits(String::new()),
            JobField::Description => DraftChange::Description(String::new()),
            JobField::Responsibilities => DraftChange::Responsibilities(String::new()),
            JobField::Requirements => DraftChange::Requirements(String::new()),
            JobField::NiceToHave => DraftChange::NiceToHave(String::new()),
        }
    }
}

fn parse_bool(field: JobField, value: &str) -> Result<bool, ChangeParseError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" | "" => Ok(false),
        _ => Err(ChangeParseError::NotABool {
            field,
            value: value.to_string(),
        }),
    }
}
