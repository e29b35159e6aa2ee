//! Form controls rendered inside each editor section.

use crate::container::SectionBodies;
use crate::draft::{ExperienceLevel, JobDraft, JobField, JobType, SalaryType};
use crate::errors::ValidationErrors;
use crate::section::JobEditorSection;
use crate::state::{Category, CompanyOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Multi-line text, one item per line.
    List,
    TextArea,
    Number,
    Date,
    Checkbox,
    Select(Vec<SelectOption>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: JobField,
    /// Element id; equal to the field name so errors can target it.
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub error: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionBody {
    pub fields: Vec<FieldView>,
}

impl SectionBody {
    pub fn field(&self, field: JobField) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fields.iter().any(|view| view.id == id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormContext<'a> {
    pub categories: &'a [Category],
    pub companies: &'a [CompanyOption],
    pub show_company: bool,
}

/// Fields rendered for `draft`, in form order.
pub fn visible_fields(draft: &JobDraft, show_company: bool) -> Vec<JobField> {
    JobField::ALL
        .into_iter()
        .filter(|field| match field {
            JobField::CompanyId => show_company,
            JobField::SalaryMin | JobField::SalaryMax => draft.salary_type == SalaryType::Range,
            JobField::SpecificSalary => draft.salary_type == SalaryType::Specific,
            _ => true,
        })
        .collect()
}

pub fn build_section_bodies(
    draft: &JobDraft,
    errors: &ValidationErrors,
    ctx: &FormContext<'_>,
) -> SectionBodies<SectionBody> {
    let mut bodies = SectionBodies {
        basic: SectionBody::default(),
        location: SectionBody::default(),
        salary: SectionBody::default(),
        content: SectionBody::default(),
    };
    for field in visible_fields(draft, ctx.show_company) {
        let view = FieldView {
            field,
            id: field.as_str(),
            label: field.label(),
            kind: field_kind(field, ctx),
            value: draft.field_text(field),
            error: errors.get(field.as_str()).map(ToOwned::to_owned),
            required: is_required(field, draft),
        };
        let body = match field.section() {
            JobEditorSection::Basic => &mut bodies.basic,
            JobEditorSection::Location => &mut bodies.location,
            JobEditorSection::Salary => &mut bodies.salary,
            JobEditorSection::Content => &mut bodies.content,
        };
        body.fields.push(view);
    }
    bodies
}

fn field_kind(field: JobField, ctx: &FormContext<'_>) -> FieldKind {
    match field {
        JobField::CompanyId => FieldKind::Select(
            ctx.companies
                .iter()
                .map(|c| option(&c.id, &c.name))
                .collect(),
        ),
        JobField::CategoryId => FieldKind::Select(
            ctx.categories
                .iter()
                .map(|c| option(&c.id, &c.name))
                .collect(),
        ),
        JobField::Type => FieldKind::Select(
            JobType::ALL
                .iter()
                .map(|t| option(t.as_str(), t.label()))
                .collect(),
        ),
        JobField::ExperienceLevel => FieldKind::Select(
            ExperienceLevel::ALL
                .iter()
                .map(|l| option(l.as_str(), l.label()))
                .collect(),
        ),
        JobField::SalaryType => FieldKind::Select(
            SalaryType::ALL
                .iter()
                .map(|s| option(s.as_str(), s.label()))
                .collect(),
        ),
        JobField::IsRemote => FieldKind::Checkbox,
        JobField::ExpiresAt => FieldKind::Date,
        JobField::SalaryMin | JobField::SalaryMax | JobField::SpecificSalary => FieldKind::Number,
        JobField::Description => FieldKind::TextArea,
        f if f.is_list() => FieldKind::List,
        _ => FieldKind::Text,
    }
}

fn is_required(field: JobField, draft: &JobDraft) -> bool {
    match field {
        JobField::Title
        | JobField::CompanyId
        | JobField::CategoryId
        | JobField::Description
        | JobField::Responsibilities
        | JobField::Requirements => true,
        JobField::Location => !draft.is_remote,
        JobField::SalaryMin | JobField::SalaryMax | JobField::SpecificSalary => true,
        JobField::Currency => draft.salary_type.shows_amount(),
        _ => false,
    }
}

fn option(value: &str, label: &str) -> SelectOption {
    SelectOption {
        value: value.to_string(),
        label: label.to_string(),
    }
}
