use job_editor_core::{
    count_errors_by_section, first_error_field, is_routed_field, section_for_field,
    unrouted_fields, JobEditorSection, JobField, SectionCounts, ValidationErrors,
};

#[test]
fn declared_fields_route_to_their_sections() {
    for field in ["title", "companyId", "categoryId", "type", "experienceLevel"] {
        assert_eq!(section_for_field(field), JobEditorSection::Basic, "{field}");
    }
    for field in ["location", "isRemote", "expiresAt"] {
        assert_eq!(section_for_field(field), JobEditorSection::Location, "{field}");
    }
    for field in [
        "salaryType",
        "salaryMin",
        "salaryMax",
        "specificSalary",
        "currency",
        "benefits",
    ] {
        assert_eq!(section_for_field(field), JobEditorSection::Salary, "{field}");
    }
    for field in ["description", "responsibilities", "requirements", "niceToHave"] {
        assert_eq!(section_for_field(field), JobEditorSection::Content, "{field}");
    }
}

#[test]
fn unknown_fields_fall_back_to_content_but_are_detectable() {
    assert_eq!(section_for_field("titel"), JobEditorSection::Content);
    assert_eq!(section_for_field(""), JobEditorSection::Content);
    assert!(!is_routed_field("titel"));
    assert!(is_routed_field("description"));

    let errors = ValidationErrors::new()
        .with("titel", "typo")
        .with("title", "required")
        .with("applyUrl", "bad url");
    assert_eq!(unrouted_fields(&errors), vec!["titel", "applyUrl"]);
}

#[test]
fn every_job_field_is_declared() {
    for field in JobField::ALL {
        assert!(is_routed_field(field.as_str()), "{field} has no section");
    }
}

#[test]
fn empty_errors_count_zero_everywhere() {
    let counts = count_errors_by_section(&ValidationErrors::new());
    assert_eq!(counts, SectionCounts::default());
    for section in JobEditorSection::ALL {
        assert_eq!(counts.get(section), 0);
    }
}

#[test]
fn counts_sum_to_error_count() {
    let samples = [
        vec!["title"],
        vec!["title", "salaryMin", "salaryMax", "description", "location"],
        vec!["unknownKey", "anotherOne", "isRemote"],
        vec!["benefits", "currency", "companyId", "niceToHave", "expiresAt", "type"],
    ];
    for fields in samples {
        let errors: ValidationErrors = fields.iter().map(|f| (*f, "bad")).collect();
        let counts = count_errors_by_section(&errors);
        assert_eq!(counts.total(), errors.len());
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), errors.len());
    }
}

#[test]
fn counts_land_in_owning_sections() {
    let errors = ValidationErrors::new()
        .with("title", "required")
        .with("salaryMin", "too big")
        .with("salaryMax", "too small")
        .with("mystery", "who owns me");
    let counts = count_errors_by_section(&errors);
    assert_eq!(
        counts,
        SectionCounts {
            basic: 1,
            location: 0,
            salary: 2,
            content: 1,
        }
    );
}

#[test]
fn first_error_follows_insertion_order() {
    assert_eq!(first_error_field(&ValidationErrors::new()), None);

    let mut errors = ValidationErrors::new()
        .with("salaryMin", "first")
        .with("title", "second");
    assert_eq!(first_error_field(&errors), Some("salaryMin"));

    // Re-inserting keeps the key in place.
    errors.insert("salaryMin", "updated");
    assert_eq!(errors.len(), 2);
    assert_eq!(first_error_field(&errors), Some("salaryMin"));
    assert_eq!(errors.get("salaryMin"), Some("updated"));
}

#[test]
fn section_names_parse_case_insensitively() {
    assert_eq!(
        JobEditorSection::parse("Salary"),
        Some(JobEditorSection::Salary)
    );
    assert_eq!(JobEditorSection::parse(" basic "), Some(JobEditorSection::Basic));
    assert_eq!(JobEditorSection::parse("misc"), None);
}
