use chrono::NaiveDate;
use job_editor_core::{AutosaveState, DraftChange, JobDraft, SalaryType, SaveMode, UserRole};
use job_editor_host::{draft_fingerprint, DraftSession, EditorProfile, JobStatus, StoredJob};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn stored(id: u64, job: JobDraft, status: JobStatus) -> StoredJob {
    StoredJob {
        id,
        status,
        revision: draft_fingerprint(&job),
        saved_at: today().and_hms_opt(11, 15, 0).unwrap(),
        job,
    }
}

fn fill_for_submit(session: &mut DraftSession) {
    for change in [
        DraftChange::Title("Warehouse Lead".to_string()),
        DraftChange::CategoryId("logistics".to_string()),
        DraftChange::Location("Rotterdam".to_string()),
        DraftChange::SalaryType(SalaryType::Negotiable),
        DraftChange::Description("Run the night shift for our main distribution hub.".to_string()),
        DraftChange::Responsibilities("Plan shifts".to_string()),
        DraftChange::Requirements("Forklift licence".to_string()),
    ] {
        session.apply(change);
    }
}

#[test]
fn new_session_is_clean() {
    let session = DraftSession::new(EditorProfile::default(), today());
    assert!(!session.is_dirty());
    assert!(session.errors().is_empty());
    let props = session.props();
    assert!(!props.is_edit);
    assert_eq!(props.autosave_state, AutosaveState::Idle);
}

#[test]
fn edits_make_dirty_and_reverting_makes_clean() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    session.apply(DraftChange::Title("Chef".to_string()));
    assert!(session.is_dirty());
    session.apply(DraftChange::Title(String::new()));
    assert!(!session.is_dirty());
}

#[test]
fn edits_do_not_validate_before_first_attempt() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    session.apply(DraftChange::SalaryMin(Some(-5)));
    assert!(session.errors().is_empty());
}

#[test]
fn rejected_submit_records_errors_and_later_edits_revalidate() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    let errors = session.begin_save(SaveMode::Submit).unwrap_err();
    assert_eq!(errors.fields().next(), Some("title"));
    assert_eq!(session.errors(), &errors);
    assert!(!session.props().saving_primary);

    session.apply(DraftChange::Title("Barista".to_string()));
    assert!(!session.errors().contains("title"));
    assert!(session.errors().contains("categoryId"));
}

#[test]
fn successful_save_resets_dirty_and_tracks_job() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    fill_for_submit(&mut session);

    let draft = session.begin_save(SaveMode::Submit).expect("valid");
    assert!(session.props().saving_primary);
    assert!(session.is_saving());

    let saved = stored(3, draft, JobStatus::Published);
    session.finish_save(SaveMode::Submit, &saved);

    let props = session.props();
    assert!(!props.saving_primary);
    assert!(!props.is_dirty);
    assert!(props.is_edit);
    assert_eq!(props.autosave_state, AutosaveState::Saved);
    assert_eq!(props.last_saved_at, Some(saved.saved_at));
    assert_eq!(session.job_id(), Some(3));
    assert_eq!(session.status(), Some(JobStatus::Published));
}

#[test]
fn edits_during_save_stay_dirty() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    session.apply(DraftChange::Title("Cook".to_string()));
    let draft = session.begin_save(SaveMode::Draft).expect("valid draft");

    session.apply(DraftChange::Title("Head Cook".to_string()));
    session.finish_save(SaveMode::Draft, &stored(1, draft, JobStatus::Draft));

    let props = session.props();
    assert!(props.is_dirty);
    assert_eq!(props.autosave_state, AutosaveState::Saved);
}

#[test]
fn failed_save_clears_busy_flag_only() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    session.apply(DraftChange::Title("Cook".to_string()));
    session.begin_save(SaveMode::Draft).expect("valid draft");
    session.fail_save(SaveMode::Draft);
    let props = session.props();
    assert!(!props.saving_draft);
    assert!(props.is_dirty);
    assert!(!props.is_edit);
}

#[test]
fn autosave_skips_clean_invalid_and_busy_drafts() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    assert_eq!(session.begin_autosave(), None, "clean");

    session.apply(DraftChange::Location("Lisbon".to_string()));
    assert_eq!(session.begin_autosave(), None, "title missing");
    assert!(session.errors().is_empty(), "autosave never surfaces errors");

    session.apply(DraftChange::Title("Tour Guide".to_string()));
    session.begin_save(SaveMode::Draft).expect("valid draft");
    assert_eq!(session.begin_autosave(), None, "manual save running");
}

#[test]
fn autosave_lifecycle_updates_badge_state() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    session.apply(DraftChange::Title("Tour Guide".to_string()));

    let draft = session.begin_autosave().expect("autosave starts");
    assert_eq!(session.autosave_state(), AutosaveState::Saving);
    assert_eq!(session.begin_autosave(), None, "no overlapping autosave");

    session.finish_autosave(&stored(5, draft, JobStatus::Draft));
    assert_eq!(session.autosave_state(), AutosaveState::Saved);
    assert!(!session.is_dirty());

    session.apply(DraftChange::Title("Senior Tour Guide".to_string()));
    session.begin_autosave().expect("second autosave");
    session.fail_autosave();
    assert_eq!(session.autosave_state(), AutosaveState::Error);
    assert!(session.is_dirty());
}

#[test]
fn published_jobs_are_not_autosaved() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    session.load(stored(
        9,
        JobDraft {
            title: "Live posting".to_string(),
            ..JobDraft::default()
        },
        JobStatus::Published,
    ));
    session.apply(DraftChange::Title("Live posting (edited)".to_string()));
    assert!(session.is_dirty());
    assert_eq!(session.begin_autosave(), None);
}

#[test]
fn admin_profiles_must_choose_a_company() {
    let profile = EditorProfile {
        is_admin: true,
        user_role: Some(UserRole::HrManager),
        ..EditorProfile::default()
    };
    let mut session = DraftSession::new(profile, today());
    fill_for_submit(&mut session);
    let errors = session.begin_save(SaveMode::Submit).unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["companyId"]);

    session.apply(DraftChange::CompanyId(Some("acme".to_string())));
    assert!(session.errors().is_empty());
    assert!(session.begin_save(SaveMode::Submit).is_ok());
}

#[test]
fn loading_a_job_replaces_the_session() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    session.apply(DraftChange::Title("Unsaved".to_string()));
    let _ = session.begin_save(SaveMode::Submit);

    let job = JobDraft {
        title: "Stored".to_string(),
        ..JobDraft::default()
    };
    session.load(stored(4, job.clone(), JobStatus::Draft));

    let props = session.props();
    assert_eq!(props.initial_data, job);
    assert!(props.errors.is_empty());
    assert!(!props.is_dirty);
    assert!(props.is_edit);
}

#[test]
fn loading_starts_a_new_generation_and_drops_running_saves() {
    let mut session = DraftSession::new(EditorProfile::default(), today());
    session.apply(DraftChange::Title("Night Porter".to_string()));
    assert!(session.begin_save(SaveMode::Draft).is_ok());
    let before = session.generation();
    assert!(session.is_saving());

    session.load(stored(7, JobDraft::default(), JobStatus::Draft));

    assert_ne!(session.generation(), before);
    assert!(!session.is_saving());
    assert_eq!(session.job_id(), Some(7));
    assert!(!session.props().saving_draft);
}
