//! Property-Based Tests for the Validation Module
//!
//! Uses proptest to check the story rules over generated bodies.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::from_fn_with_state,
    routing::post,
    Router,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use crate::api::AppState;
use crate::error::StoryError;
use crate::models::StoryBody;
use crate::validation::{
    check_story, check_story_changes, validate_story, validate_story_changes, StoryRule,
    RECOGNIZED_FIELDS,
};

// == Strategies ==
/// Generates keys that never collide with a recognized field
fn extra_key_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}".prop_map(|s| s)
}

/// Generates arbitrary JSON values; their content never matters
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,32}".prop_map(Value::from),
        Just(json!([1, 2, 3])),
        Just(json!({ "nested": true })),
    ]
}

/// Generates a subset of the recognized fields as a presence mask
fn field_mask_strategy() -> impl Strategy<Value = [bool; 4]> {
    any::<[bool; 4]>()
}

/// Generates a list of unrecognized entries
fn extras_strategy() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::vec((extra_key_strategy(), value_strategy()), 0..8)
}

fn build_body(mask: [bool; 4], extras: &[(String, Value)], value: &Value) -> StoryBody {
    let mut body = StoryBody::new();
    for (field, present) in RECOGNIZED_FIELDS.iter().zip(mask) {
        if present {
            body.insert(field.to_string(), value.clone());
        }
    }
    for (key, value) in extras {
        body.insert(key.clone(), value.clone());
    }
    body
}

fn test_app() -> Router {
    let state = AppState::new(64 * 1024);
    Router::new()
        .route(
            "/full",
            post(|| async { StatusCode::OK })
                .route_layer(from_fn_with_state(state.clone(), validate_story)),
        )
        .route(
            "/changes",
            post(|| async { StatusCode::OK })
                .route_layer(from_fn_with_state(state, validate_story_changes)),
        )
}

fn status_through_router(uri: &str, body: &StoryBody) -> StatusCode {
    let payload = serde_json::to_vec(body).unwrap();
    tokio_test::block_on(async {
        test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A body carrying every recognized field passes full validation,
    // whatever extra keys it carries.
    #[test]
    fn prop_full_story_passes(extras in extras_strategy(), value in value_strategy()) {
        let body = build_body([true; 4], &extras, &value);
        prop_assert_eq!(check_story(&body), Ok(()));
    }

    // A body missing any recognized field fails full validation.
    #[test]
    fn prop_incomplete_story_fails(
        mask in field_mask_strategy().prop_filter("must miss a field", |m| m.contains(&false)),
        extras in extras_strategy(),
        value in value_strategy(),
    ) {
        let body = build_body(mask, &extras, &value);
        prop_assert_eq!(check_story(&body), Err(StoryError::InvalidStory));
    }

    // At least one recognized field is enough for an update.
    #[test]
    fn prop_changes_with_field_pass(
        mask in field_mask_strategy().prop_filter("must hold a field", |m| m.contains(&true)),
        extras in extras_strategy(),
        value in value_strategy(),
    ) {
        let body = build_body(mask, &extras, &value);
        prop_assert_eq!(check_story_changes(&body), Ok(()));
    }

    // Without a recognized field an update is rejected, including `{}`.
    #[test]
    fn prop_changes_without_field_fail(extras in extras_strategy()) {
        let body = build_body([false; 4], &extras, &Value::Null);
        prop_assert_eq!(check_story_changes(&body), Err(StoryError::InvalidStoryChanges));
    }

    // Repeated checks of one body always agree.
    #[test]
    fn prop_checks_are_idempotent(
        mask in field_mask_strategy(),
        extras in extras_strategy(),
        value in value_strategy(),
    ) {
        let body = build_body(mask, &extras, &value);
        for rule in [StoryRule::Full, StoryRule::Changes] {
            let first = rule.check(&body);
            prop_assert_eq!(rule.check(&body), first);
            prop_assert_eq!(rule.check(&body), first);
        }
    }

    // Inserting the same entries in any order gives the same decision.
    #[test]
    fn prop_key_order_is_irrelevant(
        (entries, shuffled) in prop::collection::vec(
            (
                prop_oneof![
                    prop::sample::select(RECOGNIZED_FIELDS.to_vec()).prop_map(String::from),
                    extra_key_strategy(),
                ],
                value_strategy(),
            ),
            0..10,
        )
        .prop_flat_map(|entries| (Just(entries.clone()), Just(entries).prop_shuffle())),
    ) {
        let original: StoryBody = entries.into_iter().collect();
        let permuted: StoryBody = shuffled.into_iter().collect();
        prop_assert_eq!(check_story(&original), check_story(&permuted));
        prop_assert_eq!(check_story_changes(&original), check_story_changes(&permuted));
    }

    // The middleware forwards exactly the bodies the pure checks accept.
    #[test]
    fn prop_middleware_matches_checks(
        mask in field_mask_strategy(),
        extras in extras_strategy(),
        value in value_strategy(),
    ) {
        let body = build_body(mask, &extras, &value);

        let expected = if check_story(&body).is_ok() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };
        prop_assert_eq!(status_through_router("/full", &body), expected);

        let expected = if check_story_changes(&body).is_ok() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };
        prop_assert_eq!(status_through_router("/changes", &body), expected);
    }
}
