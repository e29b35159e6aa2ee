use job_editor_core::{
    Category, CompanyOption, EditorProps, EditorState, FieldKind, JobDraft, JobEditorSection,
    JobField, SalaryType, SectionBody, UserRole, ValidationErrors,
};

fn body(state: &EditorState, section: JobEditorSection) -> SectionBody {
    state
        .view()
        .sections
        .panes
        .into_iter()
        .find(|pane| pane.section == section)
        .map(|pane| pane.body)
        .expect("section pane")
}

fn props_with_salary(salary_type: SalaryType) -> EditorProps {
    EditorProps {
        initial_data: JobDraft {
            salary_type,
            ..JobDraft::default()
        },
        ..EditorProps::default()
    }
}

#[test]
fn negotiable_and_undisclosed_hide_all_salary_numbers() {
    for salary_type in [SalaryType::Negotiable, SalaryType::NotDisclosed] {
        let state = EditorState::new(props_with_salary(salary_type));
        let salary = body(&state, JobEditorSection::Salary);
        for hidden in ["salaryMin", "salaryMax", "specificSalary"] {
            assert!(!salary.contains(hidden), "{hidden} shown for {salary_type:?}");
        }
        assert!(salary.contains("salaryType"));
        assert!(salary.contains("benefits"));
    }
}

#[test]
fn range_shows_bounds_and_specific_shows_single_amount() {
    let range = body(
        &EditorState::new(props_with_salary(SalaryType::Range)),
        JobEditorSection::Salary,
    );
    assert!(range.contains("salaryMin") && range.contains("salaryMax"));
    assert!(!range.contains("specificSalary"));
    assert_eq!(range.field(JobField::SalaryMin).map(|f| &f.kind), Some(&FieldKind::Number));

    let specific = body(
        &EditorState::new(props_with_salary(SalaryType::Specific)),
        JobEditorSection::Salary,
    );
    assert!(specific.contains("specificSalary"));
    assert!(!specific.contains("salaryMin") && !specific.contains("salaryMax"));
}

#[test]
fn company_selector_hidden_for_non_admins_regardless_of_role() {
    for role in UserRole::ALL.into_iter().map(Some).chain([None]) {
        let state = EditorState::new(EditorProps {
            is_admin: false,
            user_role: role,
            ..EditorProps::default()
        });
        assert!(
            !body(&state, JobEditorSection::Basic).contains("companyId"),
            "company shown for {role:?}"
        );
    }
}

#[test]
fn company_selector_requires_privileged_role() {
    let companies = vec![CompanyOption {
        id: "c-1".to_string(),
        name: "Acme".to_string(),
    }];
    for (role, shown) in [
        (UserRole::SuperAdmin, true),
        (UserRole::HrManager, true),
        (UserRole::Moderator, true),
        (UserRole::Recruiter, false),
        (UserRole::Employer, false),
    ] {
        let state = EditorState::new(EditorProps {
            is_admin: true,
            user_role: Some(role),
            companies: companies.clone(),
            ..EditorProps::default()
        });
        let basic = body(&state, JobEditorSection::Basic);
        assert_eq!(basic.contains("companyId"), shown, "{role:?}");
        if shown {
            let field = basic.field(JobField::CompanyId).expect("company field");
            match &field.kind {
                FieldKind::Select(options) => {
                    assert_eq!(options.len(), 1);
                    assert_eq!(options[0].label, "Acme");
                }
                other => panic!("unexpected kind {other:?}"),
            }
        }
    }
}

#[test]
fn fields_carry_values_and_errors() {
    let state = EditorState::new(EditorProps {
        initial_data: JobDraft {
            title: "Data Analyst".to_string(),
            category_id: "cat-2".to_string(),
            ..JobDraft::default()
        },
        categories: vec![
            Category {
                id: "cat-1".to_string(),
                name: "Engineering".to_string(),
            },
            Category {
                id: "cat-2".to_string(),
                name: "Analytics".to_string(),
            },
        ],
        errors: ValidationErrors::new().with("title", "Job title is required"),
        ..EditorProps::default()
    });
    let basic = body(&state, JobEditorSection::Basic);
    let title = basic.field(JobField::Title).expect("title");
    assert_eq!(title.value, "Data Analyst");
    assert_eq!(title.error.as_deref(), Some("Job title is required"));
    assert!(title.required);

    let category = basic.field(JobField::CategoryId).expect("category");
    assert_eq!(category.value, "cat-2");
    assert!(category.error.is_none());
}

#[test]
fn sections_hold_their_declared_fields() {
    let state = EditorState::default();
    for section in JobEditorSection::ALL {
        for field in body(&state, section).fields {
            assert_eq!(field.field.section(), section);
            assert_eq!(field.id, field.field.as_str());
        }
    }
}
