use super::*;

#[test]
fn empty_message_names_the_active_filter() {
    assert_eq!(empty_message(CommentFilter::All), "No comments yet.");
    assert_eq!(empty_message(CommentFilter::Pending), "No pending comments.");
    assert_eq!(empty_message(CommentFilter::Rejected), "No rejected comments.");
}
