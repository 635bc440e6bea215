use super::*;

// =============================================================
// Filter → query string
// =============================================================

#[test]
fn approval_flag_mode_maps_filters_as_the_backend_expects() {
    let mode = CommentQueryMode::ApprovalFlag;
    assert_eq!(comment_list_query(CommentFilter::All, mode), None);
    assert_eq!(comment_list_query(CommentFilter::Approved, mode).as_deref(), Some("is_approved=true"));
    assert_eq!(comment_list_query(CommentFilter::Pending, mode).as_deref(), Some("is_approved=false"));
    assert_eq!(comment_list_query(CommentFilter::Rejected, mode).as_deref(), Some("is_approved=false"));
}

#[test]
fn status_mode_sends_tri_state_parameter() {
    let mode = CommentQueryMode::Status;
    assert_eq!(comment_list_query(CommentFilter::All, mode), None);
    assert_eq!(comment_list_query(CommentFilter::Pending, mode).as_deref(), Some("status=pending"));
    assert_eq!(comment_list_query(CommentFilter::Approved, mode).as_deref(), Some("status=approved"));
    assert_eq!(comment_list_query(CommentFilter::Rejected, mode).as_deref(), Some("status=rejected"));
}

#[test]
fn list_endpoint_omits_query_for_all() {
    assert_eq!(
        comment_list_endpoint(CommentFilter::All, CommentQueryMode::ApprovalFlag),
        "/api/admin/comments/"
    );
    assert_eq!(
        comment_list_endpoint(CommentFilter::Approved, CommentQueryMode::ApprovalFlag),
        "/api/admin/comments/?is_approved=true"
    );
}

#[test]
fn query_mode_parse_round_trips() {
    for mode in [CommentQueryMode::ApprovalFlag, CommentQueryMode::Status] {
        assert_eq!(CommentQueryMode::parse(mode.as_str()), Some(mode));
    }
    assert_eq!(CommentQueryMode::parse("boolean"), None);
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn action_endpoints_format_expected_paths() {
    assert_eq!(
        comment_action_endpoint("42", ModerationAction::Approve),
        "/api/admin/comments/42/approve/"
    );
    assert_eq!(
        comment_action_endpoint("42", ModerationAction::Reject),
        "/api/admin/comments/42/reject/"
    );
}

#[test]
fn path_segments_are_percent_encoded() {
    assert_eq!(encode_path_segment("a/b c"), "a%2Fb%20c");
    assert_eq!(product_endpoint("../x"), "/api/admin/products/..%2Fx/");
    assert_eq!(product_endpoint("p-1_2.3~"), "/api/admin/products/p-1_2.3~/");
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn unwrap_envelope_rejects_unsuccessful_bodies() {
    assert_eq!(unwrap_envelope(Envelope { success: true, data: 5 }), Ok(5));
    assert_eq!(
        unwrap_envelope(Envelope { success: false, data: 5 }),
        Err(ApiError::Malformed("success: false".to_owned()))
    );
}
