use super::*;

// =============================================================
// ApprovalStatus
// =============================================================

#[test]
fn approval_status_from_flag_maps_tri_state() {
    assert_eq!(ApprovalStatus::from_flag(None), ApprovalStatus::Pending);
    assert_eq!(ApprovalStatus::from_flag(Some(true)), ApprovalStatus::Approved);
    assert_eq!(ApprovalStatus::from_flag(Some(false)), ApprovalStatus::Rejected);
}

#[test]
fn approval_status_flag_is_inverse_of_from_flag() {
    for status in [ApprovalStatus::Pending, ApprovalStatus::Approved, ApprovalStatus::Rejected] {
        assert_eq!(ApprovalStatus::from_flag(status.as_flag()), status);
    }
}

#[test]
fn approval_status_tokens_are_lowercase() {
    assert_eq!(ApprovalStatus::Pending.as_str(), "pending");
    assert_eq!(ApprovalStatus::Approved.as_str(), "approved");
    assert_eq!(ApprovalStatus::Rejected.as_str(), "rejected");
}

// =============================================================
// Comment decoding
// =============================================================

#[test]
fn comment_decodes_full_payload_with_numeric_id() {
    let raw = serde_json::json!({
        "id": 42,
        "user_name": "Sara",
        "user_avatar": "https://cdn.example.com/a.png",
        "review_title": "Great kettle",
        "product_title": "Steel Kettle 2L",
        "text": "Agreed, boils fast.",
        "is_approved": null,
        "created_at": "2024-03-01T10:15:00Z",
        "parent": { "id": 7, "user_name": "Ali", "text": "Does it whistle?" }
    });
    let comment: Comment = serde_json::from_value(raw).unwrap();
    assert_eq!(comment.id, "42");
    assert_eq!(comment.status(), ApprovalStatus::Pending);
    let parent = comment.parent.unwrap();
    assert_eq!(parent.id, "7");
    assert_eq!(parent.user_name, "Ali");
}

#[test]
fn comment_defaults_optional_fields() {
    let raw = serde_json::json!({ "id": "c-1", "is_approved": false });
    let comment: Comment = serde_json::from_value(raw).unwrap();
    assert_eq!(comment.id, "c-1");
    assert_eq!(comment.user_avatar, None);
    assert_eq!(comment.parent, None);
    assert!(comment.review_title.is_empty());
    assert_eq!(comment.status(), ApprovalStatus::Rejected);
}

#[test]
fn comment_rejects_missing_or_invalid_id() {
    assert!(serde_json::from_value::<Comment>(serde_json::json!({ "text": "x" })).is_err());
    assert!(serde_json::from_value::<Comment>(serde_json::json!({ "id": -3 })).is_err());
    assert!(serde_json::from_value::<Comment>(serde_json::json!({ "id": "" })).is_err());
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_decodes_result_page_in_server_order() {
    let raw = serde_json::json!({
        "success": true,
        "data": { "results": [ { "id": 3 }, { "id": 1 }, { "id": 2 } ] }
    });
    let envelope: Envelope<ResultPage<Comment>> = serde_json::from_value(raw).unwrap();
    assert!(envelope.success);
    let ids: Vec<_> = envelope.data.results.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);
}

#[test]
fn envelope_tolerates_missing_results() {
    let raw = serde_json::json!({ "success": true, "data": {} });
    let envelope: Envelope<ResultPage<Comment>> = serde_json::from_value(raw).unwrap();
    assert!(envelope.data.results.is_empty());
}

#[test]
fn one_unaddressable_comment_fails_the_whole_page() {
    for bad_id in [serde_json::json!(-3), serde_json::json!(""), serde_json::json!(null)] {
        let raw = serde_json::json!({
            "success": true,
            "data": { "results": [ { "id": 1 }, { "id": bad_id } ] }
        });
        assert!(serde_json::from_value::<Envelope<ResultPage<Comment>>>(raw).is_err());
    }

    let ok = serde_json::json!({ "success": true, "data": { "results": [ { "id": 1 }, { "id": "c-2" } ] } });
    let page: Envelope<ResultPage<Comment>> = serde_json::from_value(ok).unwrap();
    assert_eq!(page.data.results.len(), 2);
}
