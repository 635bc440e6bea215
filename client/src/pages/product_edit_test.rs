use super::*;

#[test]
fn save_notice_reports_success() {
    let notice = SaveNotice::from_result(&Ok(()));
    assert_eq!(notice, SaveNotice::Saved);
    assert_eq!(notice.class(), "notice notice--success");
    assert_eq!(notice.text(), "Saved");
}

#[test]
fn save_notice_surfaces_the_failure() {
    let notice = SaveNotice::from_result(&Err(ApiError::Status(400)));
    assert_eq!(notice.class(), "notice notice--error");
    assert_eq!(notice.text(), "Save failed: The request was refused (400).");
}
