use super::*;

#[test]
fn status_badge_class_composes_modifier() {
    assert_eq!(status_badge_class(ApprovalStatus::Pending), "status-badge status-badge--pending");
    assert_eq!(status_badge_class(ApprovalStatus::Approved), "status-badge status-badge--approved");
    assert_eq!(status_badge_class(ApprovalStatus::Rejected), "status-badge status-badge--rejected");
}

#[test]
fn avatar_initial_uppercases_first_letter() {
    assert_eq!(avatar_initial("sara"), "S");
    assert_eq!(avatar_initial("  ali"), "A");
    assert_eq!(avatar_initial("مریم"), "م");
    assert_eq!(avatar_initial("   "), "?");
}
