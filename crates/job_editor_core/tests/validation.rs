use chrono::NaiveDate;
use job_editor_core::{
    count_errors_by_section, list_items, validate, DraftChange, JobDraft, JobField, SalaryType,
    SaveMode, ValidationContext,
};
use pretty_assertions::assert_eq;

fn ctx() -> ValidationContext {
    ValidationContext {
        require_company: false,
        today: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
    }
}

fn complete_draft() -> JobDraft {
    JobDraft {
        title: "Senior Backend Engineer".to_string(),
        category_id: "engineering".to_string(),
        location: "Berlin".to_string(),
        expires_at: Some("2026-12-01".to_string()),
        salary_type: SalaryType::Range,
        salary_min: Some(70_000),
        salary_max: Some(95_000),
        description: "Own the services behind our hiring platform end to end.".to_string(),
        responsibilities: "Design APIs\nReview code".to_string(),
        requirements: "5 years of backend work".to_string(),
        ..JobDraft::default()
    }
}

fn fields(errors: &job_editor_core::ValidationErrors) -> Vec<&str> {
    errors.fields().collect()
}

#[test]
fn complete_draft_passes_both_modes() {
    assert!(validate(&complete_draft(), SaveMode::Draft, &ctx()).is_empty());
    assert!(validate(&complete_draft(), SaveMode::Submit, &ctx()).is_empty());
}

#[test]
fn empty_draft_only_needs_title_in_draft_mode() {
    let errors = validate(&JobDraft::default(), SaveMode::Draft, &ctx());
    assert_eq!(fields(&errors), vec!["title"]);
}

#[test]
fn empty_draft_submit_errors_are_in_form_order() {
    let errors = validate(&JobDraft::default(), SaveMode::Submit, &ctx());
    assert_eq!(
        fields(&errors),
        vec![
            "title",
            "categoryId",
            "location",
            "salaryMin",
            "salaryMax",
            "description",
            "responsibilities",
            "requirements",
        ]
    );
    assert_eq!(count_errors_by_section(&errors).total(), errors.len());
}

#[test]
fn salary_min_must_be_below_max() {
    let draft = JobDraft {
        salary_min: Some(120_000),
        salary_max: Some(90_000),
        ..complete_draft()
    };
    for mode in [SaveMode::Draft, SaveMode::Submit] {
        let errors = validate(&draft, mode, &ctx());
        assert_eq!(fields(&errors), vec!["salaryMin"]);
        assert_eq!(
            errors.get("salaryMin"),
            Some("Minimum salary must be less than maximum salary")
        );
    }
}

#[test]
fn specific_salary_required_on_submit_only() {
    let draft = JobDraft {
        salary_type: SalaryType::Specific,
        salary_min: None,
        salary_max: None,
        ..complete_draft()
    };
    assert!(validate(&draft, SaveMode::Draft, &ctx()).is_empty());
    assert_eq!(
        fields(&validate(&draft, SaveMode::Submit, &ctx())),
        vec!["specificSalary"]
    );
}

#[test]
fn negotiable_salary_needs_no_numbers_or_currency() {
    let draft = JobDraft {
        salary_type: SalaryType::Negotiable,
        salary_min: None,
        salary_max: None,
        currency: String::new(),
        ..complete_draft()
    };
    assert!(validate(&draft, SaveMode::Submit, &ctx()).is_empty());
}

#[test]
fn currency_checked_when_amount_shown() {
    let draft = JobDraft {
        currency: "usd".to_string(),
        ..complete_draft()
    };
    assert_eq!(
        fields(&validate(&draft, SaveMode::Submit, &ctx())),
        vec!["currency"]
    );
}

#[test]
fn remote_jobs_need_no_location() {
    let draft = JobDraft {
        location: String::new(),
        is_remote: true,
        ..complete_draft()
    };
    assert!(validate(&draft, SaveMode::Submit, &ctx()).is_empty());
}

#[test]
fn expiry_must_parse_and_be_in_the_future_on_submit() {
    let garbled = JobDraft {
        expires_at: Some("next friday".to_string()),
        ..complete_draft()
    };
    assert_eq!(
        fields(&validate(&garbled, SaveMode::Draft, &ctx())),
        vec!["expiresAt"]
    );

    let past = JobDraft {
        expires_at: Some("2026-10-17".to_string()),
        ..complete_draft()
    };
    assert!(validate(&past, SaveMode::Draft, &ctx()).is_empty());
    assert_eq!(
        fields(&validate(&past, SaveMode::Submit, &ctx())),
        vec!["expiresAt"]
    );
}

#[test]
fn company_required_for_admin_submit() {
    let admin = ValidationContext {
        require_company: true,
        ..ctx()
    };
    let errors = validate(&complete_draft(), SaveMode::Submit, &admin);
    assert_eq!(fields(&errors), vec!["companyId"]);

    let with_company = JobDraft {
        company_id: Some("acme".to_string()),
        ..complete_draft()
    };
    assert!(validate(&with_company, SaveMode::Submit, &admin).is_empty());
    assert!(validate(&complete_draft(), SaveMode::Draft, &admin).is_empty());
}

#[test]
fn blank_list_lines_do_not_count_as_items() {
    assert_eq!(list_items("  \n first \n\n second\n  "), vec!["first", "second"]);
    let draft = JobDraft {
        requirements: " \n \n".to_string(),
        ..complete_draft()
    };
    assert_eq!(
        fields(&validate(&draft, SaveMode::Submit, &ctx())),
        vec!["requirements"]
    );
}

#[test]
fn switching_salary_type_clears_unused_amounts() {
    let mut draft = complete_draft();
    DraftChange::SalaryType(SalaryType::Specific).apply(&mut draft);
    assert_eq!((draft.salary_min, draft.salary_max), (None, None));

    DraftChange::SpecificSalary(Some(80_000)).apply(&mut draft);
    DraftChange::SalaryType(SalaryType::NotDisclosed).apply(&mut draft);
    assert_eq!(draft.specific_salary, None);
}

#[test]
fn raw_input_parses_into_typed_changes() {
    assert_eq!(
        DraftChange::parse(JobField::SalaryMin, "85,000"),
        Ok(DraftChange::SalaryMin(Some(85_000)))
    );
    assert_eq!(
        DraftChange::parse(JobField::SalaryMax, " "),
        Ok(DraftChange::SalaryMax(None))
    );
    assert_eq!(
        DraftChange::parse(JobField::SalaryType, "not_disclosed"),
        Ok(DraftChange::SalaryType(SalaryType::NotDisclosed))
    );
    assert_eq!(
        DraftChange::parse(JobField::IsRemote, "yes"),
        Ok(DraftChange::IsRemote(true))
    );
    assert_eq!(
        DraftChange::parse(JobField::Requirements, "Rust\\nSQL"),
        Ok(DraftChange::Requirements("Rust\nSQL".to_string()))
    );
    assert!(DraftChange::parse(JobField::SalaryMin, "lots").is_err());
    assert!("salary".parse::<JobField>().is_err());
    assert_eq!("SALARYMIN".parse::<JobField>(), Ok(JobField::SalaryMin));
}

#[test]
fn draft_serializes_with_wire_field_names() {
    let json = serde_json::to_value(complete_draft()).unwrap();
    assert_eq!(json["salaryMin"], 70_000);
    assert_eq!(json["type"], "FULL_TIME");
    assert_eq!(json["salaryType"], "RANGE");
    assert_eq!(json["isRemote"], false);

    let parsed: JobDraft = serde_json::from_str(r#"{"title":"Only a title"}"#).unwrap();
    assert_eq!(parsed.title, "Only a title");
    assert_eq!(parsed.currency, "USD");
}
