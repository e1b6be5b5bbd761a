//! API Module Tests
//!
//! Exercises the core operations and the HTTP handlers end to end against an
//! in-memory store.
//!
//! ## Test Scopes
//! - **Service**: Create/fetch/delete lifecycle, input policy and query operations.
//! - **Protocol**: Conversion of raw filter parameters into validated predicates.
//! - **Handlers**: Status codes and response bodies, invoked directly with extractors.

#[cfg(test)]
mod tests {
    use crate::analysis::analyzer::content_hash;
    use crate::api::handlers::*;
    use crate::api::protocol::{
        CreateStringRequest, FilterParams, NATURAL_LANGUAGE_SEGMENT, NaturalLanguageParams,
    };
    use crate::api::service::StringService;
    use crate::error::AnalyzerError;
    use crate::query::types::PredicateSet;
    use crate::storage::memory::RecordStore;
    use axum::Json;
    use axum::body::to_bytes;
    use axum::response::Response;
    use axum::extract::{Extension, Path, Query};
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn service() -> Arc<StringService> {
        Arc::new(StringService::new(Arc::new(RecordStore::new())))
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn seeded(values: &[&str]) -> Arc<StringService> {
        let service = service();
        for value in values {
            service.analyze_and_store(value).unwrap();
        }
        service
    }

    // ============================================================
    // SERVICE TESTS - lifecycle
    // ============================================================

    #[test]
    fn test_analyze_and_store_returns_record() {
        let service = service();
        let record = service.analyze_and_store("racecar").unwrap();

        assert_eq!(record.id, content_hash("racecar"));
        assert_eq!(record.value, "racecar");
        assert!(record.properties.is_palindrome);
        assert_eq!(service.store().len(), 1);
    }

    #[test]
    fn test_analyze_and_store_rejects_blank_values() {
        let service = service();

        for blank in ["", "   ", "\t\n"] {
            let result = service.analyze_and_store(blank);
            assert!(
                matches!(result, Err(AnalyzerError::InvalidInput(_))),
                "{:?} should be rejected",
                blank
            );
        }
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_analyze_and_store_duplicate_is_conflict() {
        let service = service();
        service.analyze_and_store("abc").unwrap();

        assert_eq!(service.analyze_and_store("abc"), Err(AnalyzerError::Conflict));
    }

    #[test]
    fn test_fetch_by_value() {
        let service = seeded(&["abc"]);

        let record = service.fetch("abc").unwrap();
        assert_eq!(record.value, "abc");
        assert_eq!(service.fetch("abd"), Err(AnalyzerError::NotFound));
    }

    #[test]
    fn test_fetch_after_delete_is_not_found() {
        let service = seeded(&["abc"]);

        service.delete("abc").unwrap();
        assert_eq!(service.fetch("abc"), Err(AnalyzerError::NotFound));
        assert_eq!(service.delete("abc"), Err(AnalyzerError::NotFound));
    }

    // ============================================================
    // SERVICE TESTS - queries
    // ============================================================

    #[test]
    fn test_filter_echoes_applied_predicates() {
        let service = seeded(&["aba", "hello", "abcddcba"]);
        let predicates = PredicateSet {
            is_palindrome: Some(true),
            min_length: Some(4),
            ..PredicateSet::default()
        };

        let outcome = service.filter(predicates.clone()).unwrap();
        assert_eq!(outcome.count, 1);
        assert_eq!(outcome.data[0].value, "abcddcba");
        assert_eq!(outcome.filters_applied, predicates);
    }

    #[test]
    fn test_filter_without_predicates_lists_everything() {
        let service = seeded(&["one", "two", "three"]);

        let outcome = service.filter(PredicateSet::default()).unwrap();
        assert_eq!(outcome.count, 3);
        assert!(outcome.filters_applied.is_empty());
    }

    #[test]
    fn test_filter_rejects_zero_bounds() {
        let service = seeded(&["one"]);
        let predicates = PredicateSet {
            word_count: Some(0),
            ..PredicateSet::default()
        };

        assert!(matches!(
            service.filter(predicates),
            Err(AnalyzerError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_natural_language_query() {
        let service = seeded(&["level", "refer", "hello world", "a"]);

        let outcome = service
            .query_natural_language("single word palindromic strings longer than 4")
            .unwrap();

        assert_eq!(outcome.count, 2);
        let values: Vec<&str> = outcome.data.iter().map(|r| r.value.as_str()).collect();
        assert!(values.contains(&"level"));
        assert!(values.contains(&"refer"));
        assert_eq!(
            outcome.interpreted_query.original,
            "single word palindromic strings longer than 4"
        );
        assert_eq!(outcome.interpreted_query.parsed_filters.min_length, Some(5));
    }

    #[test]
    fn test_natural_language_query_negative_length_matches_all() {
        let service = seeded(&["a", "level", "hello world"]);

        let outcome = service
            .query_natural_language("strings longer than -3 characters")
            .unwrap();
        assert_eq!(outcome.count, 3);
        assert_eq!(outcome.interpreted_query.parsed_filters.min_length, Some(0));
    }

    #[test]
    fn test_natural_language_query_unparseable() {
        let service = seeded(&["level"]);

        assert!(matches!(
            service.query_natural_language("gibberish query"),
            Err(AnalyzerError::UnparseableQuery(_))
        ));
    }

    // ============================================================
    // PROTOCOL TESTS
    // ============================================================

    #[test]
    fn test_filter_params_conversion() {
        let params = FilterParams {
            is_palindrome: Some(false),
            contains_character: Some("Q".to_string()),
            ..FilterParams::default()
        };

        let predicates = PredicateSet::try_from(params).unwrap();
        assert_eq!(predicates.is_palindrome, Some(false));
        assert_eq!(predicates.contains_character, Some('Q'));
        assert_eq!(predicates.len(), 2);
    }

    #[test]
    fn test_filter_params_reject_multi_character() {
        for raw in ["", "ab"] {
            let params = FilterParams {
                contains_character: Some(raw.to_string()),
                ..FilterParams::default()
            };
            assert!(matches!(
                PredicateSet::try_from(params),
                Err(AnalyzerError::InvalidFilter(_))
            ));
        }
    }

    #[test]
    fn test_filter_params_reject_zero_min_length() {
        let params = FilterParams {
            min_length: Some(0),
            ..FilterParams::default()
        };
        assert!(PredicateSet::try_from(params).is_err());
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_create_string_created() {
        let service = service();

        let result = handle_create_string(
            Extension(service.clone()),
            Json(CreateStringRequest {
                value: "hello world".to_string(),
            }),
        )
        .await;

        let (status, Json(record)) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record.properties.word_count, 2);
    }

    #[tokio::test]
    async fn test_handle_create_string_errors() {
        let service = seeded(&["taken"]);

        let (status, Json(body)) = handle_create_string(
            Extension(service.clone()),
            Json(CreateStringRequest {
                value: "taken".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.detail, "String already exists in the system");

        let (status, _) = handle_create_string(
            Extension(service),
            Json(CreateStringRequest {
                value: "  ".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handle_get_and_delete() {
        let service = seeded(&["keep me"]);

        let Json(record) = handle_get_string(Extension(service.clone()), Path("keep me".to_string()))
            .await
            .unwrap();
        assert_eq!(record.value, "keep me");

        let status = handle_delete_string(Extension(service.clone()), Path("keep me".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = handle_get_string(Extension(service.clone()), Path("keep me".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = handle_delete_string(Extension(service), Path("keep me".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_handle_filter_strings_response_shape() {
        let service = seeded(&["aba", "hello"]);

        let Json(outcome) = handle_filter_strings(
            Extension(service),
            Query(FilterParams {
                is_palindrome: Some(true),
                ..FilterParams::default()
            }),
        )
        .await
        .unwrap();

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["value"], "aba");
        assert_eq!(json["filters_applied"], serde_json::json!({"is_palindrome": true}));
    }

    #[tokio::test]
    async fn test_handle_filter_strings_invalid() {
        let service = seeded(&["aba"]);

        let (status, _) = handle_filter_strings(
            Extension(service),
            Query(FilterParams {
                max_length: Some(0),
                ..FilterParams::default()
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handle_natural_language_filter() {
        let service = seeded(&["zebra", "apple"]);

        let response = match handle_natural_language_filter(
            Extension(service.clone()),
            Query(NaturalLanguageParams {
                query: Some("strings containing the letter z".to_string()),
            }),
        )
        .await
        {
            Ok(response) => response,
            Err((status, _)) => panic!("Unexpected status {}", status),
        };
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["count"], 1);
        assert_eq!(
            json["interpreted_query"]["parsed_filters"],
            serde_json::json!({"contains_character": "z"})
        );

        let Err((status, Json(body))) = handle_natural_language_filter(
            Extension(service),
            Query(NaturalLanguageParams {
                query: Some("nothing useful".to_string()),
            }),
        )
        .await
        else {
            panic!("Query without recognized filters should fail");
        };
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.detail.contains("no recognized filters"));
    }

    #[tokio::test]
    async fn test_handle_natural_language_filter_negative_length() {
        let service = seeded(&["a", "hello", "hello world"]);

        let Ok(response) = handle_natural_language_filter(
            Extension(service),
            Query(NaturalLanguageParams {
                query: Some("strings longer than -3 characters".to_string()),
            }),
        )
        .await
        else {
            panic!("Negative length should still be a recognized filter");
        };

        let json = json_body(response).await;
        assert_eq!(json["count"], 3);
        assert_eq!(json["interpreted_query"]["parsed_filters"]["min_length"], 0);
    }

    #[tokio::test]
    async fn test_value_matching_natural_language_segment_is_reachable() {
        let service = seeded(&[NATURAL_LANGUAGE_SEGMENT]);

        // GET without a query fetches the stored value
        let Ok(response) = handle_natural_language_filter(
            Extension(service.clone()),
            Query(NaturalLanguageParams::default()),
        )
        .await
        else {
            panic!("Stored segment value should be fetchable");
        };
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["value"], NATURAL_LANGUAGE_SEGMENT);

        let status = handle_delete_natural_language_segment(Extension(service.clone()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(service.store().is_empty());

        let Err((status, _)) = handle_natural_language_filter(
            Extension(service.clone()),
            Query(NaturalLanguageParams::default()),
        )
        .await
        else {
            panic!("Deleted segment value should not be found");
        };
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = handle_delete_natural_language_segment(Extension(service))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_handle_health() {
        let service = seeded(&["a", "b"]);

        let Json(health) = handle_health(Extension(service)).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.records, 2);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&AnalyzerError::Conflict), StatusCode::CONFLICT);
        assert_eq!(status_for(&AnalyzerError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&AnalyzerError::InvalidInput(String::new())),
            StatusCode::BAD_REQUEST
        );
    }
}
