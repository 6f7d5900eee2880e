//! Integration tests for the session-side directory state.
//! Tests: load lifecycle, optimistic submit, upload reconciliation, search.

use supplier_directory::{
    DirectorySession, SearchOutcome, SubmitOutcome, SupplierRecord, UploadResponse, UploadedFile,
};

fn record(company: &str, job_type: &str, created_at: &str) -> SupplierRecord {
    SupplierRecord {
        id: 1,
        company_name: company.to_string(),
        job_type: job_type.to_string(),
        contact_info: String::new(),
        job_responsibilities: String::new(),
        company_logo_url: String::new(),
        created_at: created_at.to_string(),
    }
}

fn fill_form(session: &mut DirectorySession, company: &str) {
    session.form.company_name = company.to_string();
    session.form.job_type = "งานไอที".to_string();
    session.form.contact_info = "line: acme".to_string();
    session.form.job_responsibilities = "IT support".to_string();
}

#[test]
fn load_ok_sorts_newest_first_and_clears_loading() {
    let mut session = DirectorySession::new();
    assert!(session.is_loading());

    session.load_ok(vec![
        record("Oldest", "งานขาย", "2023-01-01T00:00:00.000Z"),
        record("Newest", "งานขาย", "2024-06-01T00:00:00.000Z"),
        record("Broken timestamp", "งานขาย", "not-a-date"),
        record("Middle", "งานขาย", "2023-06-01T00:00:00.000Z"),
    ]);

    assert!(!session.is_loading());
    let names: Vec<_> = session
        .suppliers()
        .iter()
        .map(|r| r.company_name.as_str())
        .collect();
    assert_eq!(names, ["Newest", "Middle", "Oldest", "Broken timestamp"]);
}

#[test]
fn load_err_keeps_empty_list_and_surfaces_message() {
    let mut session = DirectorySession::new();
    session.load_err("connection refused");

    assert!(!session.is_loading());
    assert!(session.suppliers().is_empty());
    let message = session.message().expect("load failure must surface a message");
    assert!(message.contains("connection refused"));

    // The form is not blocked by a failed load.
    fill_form(&mut session, "ACME Corp");
    assert!(matches!(session.submit(), SubmitOutcome::Added { .. }));
    assert_eq!(session.suppliers().len(), 1);
}

#[test]
fn submit_without_required_fields_is_rejected() {
    let mut session = DirectorySession::new();
    session.load_ok(Vec::new());

    session.form.company_name = "ACME Corp".to_string();
    session.form.job_type = "   ".to_string();
    assert!(matches!(session.submit(), SubmitOutcome::Rejected));
    assert!(session.suppliers().is_empty(), "blocked submit must not append");
    assert!(session.message().is_some());
    assert_eq!(
        session.form.company_name, "ACME Corp",
        "rejected submit keeps the form contents"
    );
}

#[test]
fn submit_without_logo_appends_immediately_with_empty_logo_url() {
    let mut session = DirectorySession::new();
    session.load_ok(vec![record("Existing", "งานขาย", "2023-01-01T00:00:00.000Z")]);

    fill_form(&mut session, "ACME Corp");
    let SubmitOutcome::Added { pending } = session.submit() else {
        panic!("expected Added");
    };
    assert!(pending.is_none(), "no logo attached, nothing to upload");

    assert_eq!(session.suppliers().len(), 2);
    assert_eq!(session.suppliers()[0].company_name, "ACME Corp");
    assert_eq!(session.suppliers()[0].company_logo_url, "");
    assert_eq!(session.message(), Some("Added new supplier successfully!"));
    assert_eq!(session.form.company_name, "", "form clears on success");
}

#[test]
fn submit_with_logo_returns_pending_upload_carrying_the_payload() {
    let mut session = DirectorySession::new();
    session.load_ok(Vec::new());

    fill_form(&mut session, "ACME Corp");
    session.form.attach_logo(
        UploadedFile {
            name: "logo.png".to_string(),
            bytes: vec![1, 2, 3],
        },
        "data:image/png;base64,...",
    );

    let SubmitOutcome::Added { pending } = session.submit() else {
        panic!("expected Added");
    };
    let pending = pending.expect("logo attached, upload must be pending");
    assert_eq!(pending.record_id(), session.suppliers()[0].id);
    let submission = pending.submission();
    assert_eq!(submission.company_name, "ACME Corp");
    assert_eq!(submission.logo.as_ref().unwrap().bytes, vec![1, 2, 3]);

    // Optimistic record renders without a logo until the upload resolves.
    assert_eq!(session.suppliers()[0].company_logo_url, "");
}

#[test]
fn successful_upload_reconciles_the_optimistic_record() {
    let mut session = DirectorySession::new();
    session.load_ok(Vec::new());
    fill_form(&mut session, "ACME Corp");
    session.form.attach_logo(
        UploadedFile {
            name: "logo.png".to_string(),
            bytes: vec![1],
        },
        "preview",
    );
    let SubmitOutcome::Added { pending: Some(pending) } = session.submit() else {
        panic!("expected pending upload");
    };

    let response = UploadResponse::ok(
        "Supplier registered and logo stored.",
        "/image/1700000000000-42-logo.png",
    );
    session.resolve_upload(&pending, &response);

    assert_eq!(
        session.suppliers()[0].company_logo_url,
        "/image/1700000000000-42-logo.png"
    );
}

#[test]
fn failed_upload_surfaces_message_and_keeps_empty_logo() {
    let mut session = DirectorySession::new();
    session.load_ok(Vec::new());
    fill_form(&mut session, "ACME Corp");
    session.form.attach_logo(
        UploadedFile {
            name: "logo.png".to_string(),
            bytes: vec![1],
        },
        "preview",
    );
    let SubmitOutcome::Added { pending: Some(pending) } = session.submit() else {
        panic!("expected pending upload");
    };

    session.resolve_upload(&pending, &UploadResponse::err("disk full"));

    assert_eq!(session.suppliers()[0].company_logo_url, "");
    let message = session.message().expect("upload failure surfaces a message");
    assert!(message.contains("disk full"));
}

#[test]
fn blank_search_is_inactive_even_over_an_empty_list() {
    let mut session = DirectorySession::new();
    session.load_ok(Vec::new());

    session.set_search_term("   ");
    session.set_job_type_filter("");
    assert_eq!(session.run_search(), SearchOutcome::Inactive);
    assert!(session.search_results().is_empty());
    assert!(session.message().is_none(), "inactive search clears the message");
}

#[test]
fn company_name_match_is_case_insensitive_substring() {
    let mut session = DirectorySession::new();
    session.load_ok(vec![
        record("ACME Corp", "งานไฟฟ้า", "2024-01-01T00:00:00.000Z"),
        record("Other", "งานไฟฟ้า", "2024-01-02T00:00:00.000Z"),
    ]);

    session.set_search_term("acme");
    let SearchOutcome::Matches(results) = session.run_search() else {
        panic!("search with a term is active");
    };
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].company_name, "ACME Corp");
    assert_eq!(session.message(), Some("Found 1 matching suppliers."));
}

#[test]
fn job_type_match_is_exact() {
    let mut session = DirectorySession::new();
    session.load_ok(vec![
        record("Sparks Ltd", "งานไฟฟ้า", "2024-01-01T00:00:00.000Z"),
        record("Cement Bros", "งานโยธา", "2024-01-02T00:00:00.000Z"),
    ]);

    session.set_job_type_filter("งานไฟฟ้า");
    let SearchOutcome::Matches(results) = session.run_search() else {
        panic!("active search");
    };
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].company_name, "Sparks Ltd");
}

#[test]
fn both_predicates_must_hold() {
    let mut session = DirectorySession::new();
    session.load_ok(vec![
        record("ACME Corp", "งานไฟฟ้า", "2024-01-01T00:00:00.000Z"),
        record("ACME Civil", "งานโยธา", "2024-01-02T00:00:00.000Z"),
    ]);

    session.set_search_term("acme");
    session.set_job_type_filter("งานโยธา");
    let SearchOutcome::Matches(results) = session.run_search() else {
        panic!("active search");
    };
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].company_name, "ACME Civil");
}

#[test]
fn zero_matches_is_distinct_from_inactive() {
    let mut session = DirectorySession::new();
    session.load_ok(vec![record("ACME Corp", "งานไฟฟ้า", "2024-01-01T00:00:00.000Z")]);

    session.set_search_term("no such supplier");
    let outcome = session.run_search();
    assert_eq!(outcome, SearchOutcome::Matches(Vec::new()));
    assert_eq!(session.message(), Some("Found 0 matching suppliers."));
}
