use super::*;

#[test]
fn resolve_base_url_defaults_to_relative_api_path() {
    assert_eq!(resolve_base_url(None), "/api");
}

#[test]
fn resolve_base_url_prefers_environment_override() {
    assert_eq!(
        resolve_base_url(Some("https://finance.example.com/api")),
        "https://finance.example.com/api"
    );
}

#[test]
fn resolve_base_url_ignores_blank_override() {
    assert_eq!(resolve_base_url(Some("")), "/api");
    assert_eq!(resolve_base_url(Some("   ")), "/api");
}

#[test]
fn request_url_joins_base_and_path() {
    assert_eq!(request_url("/transactions"), "/api/transactions");
    assert_eq!(request_url("/analytics/balance"), "/api/analytics/balance");
}

#[test]
fn no_response_normalizes_to_network_message() {
    assert_eq!(
        normalize_failure(None, None),
        "Network error occurred. Please check your connection."
    );
}

#[test]
fn status_404_without_message_field_normalizes_to_not_found() {
    assert_eq!(normalize_failure(Some(404), None), "Resource not found.");
    assert_eq!(
        normalize_failure(Some(404), Some(r#"{"error":"Category not found"}"#)),
        "Resource not found."
    );
}

#[test]
fn status_500_without_message_field_normalizes_to_server_error() {
    assert_eq!(
        normalize_failure(Some(500), None),
        "Server error occurred. Please try again later."
    );
}

#[test]
fn server_supplied_message_wins_regardless_of_status() {
    let body = r#"{"message":"Cannot delete category with existing transactions"}"#;
    for status in [400, 404, 409, 500, 503] {
        assert_eq!(
            normalize_failure(Some(status), Some(body)),
            "Cannot delete category with existing transactions"
        );
    }
}

#[test]
fn other_statuses_without_message_field_normalize_to_generic_message() {
    for status in [400, 401, 403, 409, 418, 502, 503] {
        assert_eq!(
            normalize_failure(Some(status), None),
            "An error occurred. Please try again."
        );
    }
}

#[test]
fn non_string_message_field_falls_back_to_status_branch() {
    assert_eq!(
        normalize_failure(Some(404), Some(r#"{"message":42}"#)),
        "Resource not found."
    );
}

#[test]
fn unparsable_body_falls_back_to_status_branch() {
    assert_eq!(
        normalize_failure(Some(500), Some("<html>Internal Server Error</html>")),
        "Server error occurred. Please try again later."
    );
}

#[test]
fn api_error_displays_its_message() {
    let err = ApiError::new("Resource not found.");
    assert_eq!(err.message(), "Resource not found.");
    assert_eq!(err.to_string(), "Resource not found.");
    assert_eq!(err.into_message(), "Resource not found.");
}
