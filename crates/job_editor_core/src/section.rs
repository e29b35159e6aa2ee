use serde::{Deserialize, Serialize};

use crate::errors::ValidationErrors;

/// The four groupings of form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobEditorSection {
    #[default]
    Basic,
    Location,
    Salary,
    Content,
}

impl JobEditorSection {
    pub const ALL: [JobEditorSection; 4] = [
        JobEditorSection::Basic,
        JobEditorSection::Location,
        JobEditorSection::Salary,
        JobEditorSection::Content,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobEditorSection::Basic => "basic",
            JobEditorSection::Location => "location",
            JobEditorSection::Salary => "salary",
            JobEditorSection::Content => "content",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobEditorSection::Basic => "Basic",
            JobEditorSection::Location => "Location",
            JobEditorSection::Salary => "Salary",
            JobEditorSection::Content => "Content",
        }
    }

    pub fn parse(name: &str) -> Option<JobEditorSection> {
        let name = name.trim();
        JobEditorSection::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(name))
    }
}

const BASIC_FIELDS: &[&str] = &["title", "companyId", "categoryId", "type", "experienceLevel"];
const LOCATION_FIELDS: &[&str] = &["location", "isRemote", "expiresAt"];
const SALARY_FIELDS: &[&str] = &[
    "salaryType",
    "salaryMin",
    "salaryMax",
    "specificSalary",
    "currency",
    "benefits",
];
const CONTENT_FIELDS: &[&str] = &["description", "responsibilities", "requirements", "niceToHave"];

/// Section owning `field`. Anything not claimed by basic/location/salary lands
/// in `Content`, including keys no section declares (see [`is_routed_field`]).
pub fn section_for_field(field: &str) -> JobEditorSection {
    if BASIC_FIELDS.contains(&field) {
        JobEditorSection::Basic
    } else if LOCATION_FIELDS.contains(&field) {
        JobEditorSection::Location
    } else if SALARY_FIELDS.contains(&field) {
        JobEditorSection::Salary
    } else {
        JobEditorSection::Content
    }
}

/// True when some section explicitly declares `field`.
pub fn is_routed_field(field: &str) -> bool {
    [BASIC_FIELDS, LOCATION_FIELDS, SALARY_FIELDS, CONTENT_FIELDS]
        .iter()
        .any(|fields| fields.contains(&field))
}

/// Error keys that only reached `Content` through the fallback.
pub fn unrouted_fields(errors: &ValidationErrors) -> Vec<&str> {
    errors
        .fields()
        .filter(|field| !is_routed_field(field))
        .collect()
}

/// Error count per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionCounts {
    pub basic: usize,
    pub location: usize,
    pub salary: usize,
    pub content: usize,
}

impl SectionCounts {
    pub fn get(&self, section: JobEditorSection) -> usize {
        match section {
            JobEditorSection::Basic => self.basic,
            JobEditorSection::Location => self.location,
            JobEditorSection::Salary => self.salary,
            JobEditorSection::Content => self.content,
        }
    }

    fn bump(&mut self, section: JobEditorSection) {
        match section {
            JobEditorSection::Basic => self.basic += 1,
            JobEditorSection::Location => self.location += 1,
            JobEditorSection::Salary => self.salary += 1,
            JobEditorSection::Content => self.content += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.basic + self.location + self.salary + self.content
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobEditorSection, usize)> + '_ {
        JobEditorSection::ALL
            .into_iter()
            .map(move |section| (section, self.get(section)))
    }
}

pub fn count_errors_by_section(errors: &ValidationErrors) -> SectionCounts {
    let mut counts = SectionCounts::default();
    for field in errors.fields() {
        counts.bump(section_for_field(field));
    }
    counts
}
