use super::*;

#[test]
fn new_trims_trailing_slashes_from_base_url() {
    let client = ApiClient::new("http://127.0.0.1:8000/");
    assert_eq!(
        client.words_url("abc", 0, 50),
        "http://127.0.0.1:8000/api/texts/abc/?offset=0&limit=50"
    );
}

#[test]
fn words_url_carries_offset_and_limit() {
    let client = ApiClient::new("http://example.test");
    assert_eq!(
        client.words_url("doc-1", 150, 50),
        "http://example.test/api/texts/doc-1/?offset=150&limit=50"
    );
}

#[test]
fn status_error_message_contains_the_code() {
    let error = ApiError::Status(404);
    assert!(error.to_string().contains("404"));
}
