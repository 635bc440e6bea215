use super::*;

#[test]
fn from_document_reads_mode_and_locale() {
    let config = ClientConfig::from_document(Some("status"), Some("fa-IR"));
    assert_eq!(config.query_mode, CommentQueryMode::Status);
    assert_eq!(config.locale, Locale::Fa);
}

#[test]
fn from_document_falls_back_to_defaults() {
    assert_eq!(ClientConfig::from_document(None, None), ClientConfig::default());
    let config = ClientConfig::from_document(Some("bogus"), Some("de"));
    assert_eq!(config.query_mode, CommentQueryMode::ApprovalFlag);
    assert_eq!(config.locale, Locale::En);
}
