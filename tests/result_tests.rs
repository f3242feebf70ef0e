//! Behavioral tests for the result model: explicit success/failure
//! propagation, the exception-style boundary, and pagination values.

use serde_json::json;

use polar_api::{ErrorKind, Page, PolarApiError, PolarError, PolarResult};

fn not_found() -> PolarError {
    PolarError::new(ErrorKind::NotFound, 404, "Product not found")
}

// ============================================================================
// PolarResult propagation
// ============================================================================

#[test]
fn test_success_and_failure_are_mutually_exclusive() {
    let success: PolarResult<u32> = PolarResult::success(7);
    assert!(success.is_success());
    assert!(!success.is_failure());

    let failure: PolarResult<u32> = PolarResult::failure(not_found());
    assert!(failure.is_failure());
    assert!(!failure.is_success());
}

#[test]
fn test_map_transforms_only_the_success_value() {
    let success: PolarResult<u32> = PolarResult::success(7);
    assert_eq!(success.map(|n| n * 2).ok(), Some(14));

    let failure: PolarResult<u32> = PolarResult::failure(not_found());
    let mapped = failure.map(|n| n * 2);
    assert_eq!(mapped.err().map(|e| e.kind), Some(ErrorKind::NotFound));
}

#[test]
fn test_error_value_survives_propagation_unchanged() {
    let original = PolarError::with_detail(
        ErrorKind::Validation,
        422,
        "name required",
        json!({"field": "name"}),
    );

    let result: PolarResult<()> = PolarResult::failure(original.clone());
    let propagated = result.map(|()| 0).err().unwrap();

    assert_eq!(propagated, original);
}

// ============================================================================
// The exception-style boundary
// ============================================================================

#[test]
fn test_ensure_success_unwraps_a_success() {
    let result: PolarResult<String> = PolarResult::success("p1".to_string());
    assert_eq!(result.ensure_success().unwrap(), "p1");
}

#[test]
fn test_ensure_success_raises_a_failure() {
    let result: PolarResult<String> = PolarResult::failure(not_found());

    let error: PolarApiError = result.ensure_success().unwrap_err();

    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(error.status_code(), 404);
    assert_eq!(error.error().message, "Product not found");
}

#[test]
fn test_api_error_works_with_question_mark() {
    fn lookup(found: bool) -> Result<String, PolarApiError> {
        let result: PolarResult<String> = if found {
            PolarResult::success("p1".to_string())
        } else {
            PolarResult::failure(not_found())
        };
        let id = result.ensure_success()?;
        Ok(id)
    }

    assert_eq!(lookup(true).unwrap(), "p1");
    assert_eq!(lookup(false).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_api_error_displays_the_underlying_message() {
    let error = PolarApiError::from(not_found());
    assert!(error.to_string().contains("Product not found"));
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_page_deserializes_the_wire_shape() {
    let page: Page<serde_json::Value> = serde_json::from_value(json!({
        "items": [{"id": "p1"}],
        "pagination": {"page": 2, "limit": 10, "total_count": 25, "max_page": 3}
    }))
    .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.pagination.page, 2);
    assert!(page.has_next());
    assert_eq!(page.next_page(), Some(3));
}

#[test]
fn test_last_page_has_no_next() {
    let page: Page<serde_json::Value> = serde_json::from_value(json!({
        "items": [],
        "pagination": {"page": 3, "limit": 10, "total_count": 25, "max_page": 3}
    }))
    .unwrap();

    assert!(page.is_last());
    assert_eq!(page.next_page(), None);
}

#[test]
fn test_page_iterates_over_items() {
    let page: Page<serde_json::Value> = serde_json::from_value(json!({
        "items": [{"id": "p1"}, {"id": "p2"}],
        "pagination": {"page": 1, "limit": 10, "total_count": 2, "max_page": 1}
    }))
    .unwrap();

    let ids: Vec<String> = page
        .into_items()
        .into_iter()
        .filter_map(|item| item.get("id").and_then(|id| id.as_str()).map(String::from))
        .collect();

    assert_eq!(ids, vec!["p1", "p2"]);
}
