//! Integration tests for the paginated admin client against a mocked backend

mod common;

use common::*;
use leo_client::resources::{Businesses, ReferralProfiles, Users};
use leo_client::{
    AdminApi, FieldValue, FilterValue, ItemKey, ListController, ReferralProfileUpdate,
};
use leo_core::types::{EnrollmentStatus, PayoutItem};
use leo_core::Error;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

/// Envelope fetch populates items, pager math, and query parameters
#[tokio::test]
async fn test_envelope_fetch_and_query_params() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(1, 10, 25, business_rows(10, 0))),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Businesses>::new(backend.client("tok"));
    controller.refresh().await.unwrap();

    // 25 items at limit 10 paginate into 3 pages
    assert_eq!(controller.items().len(), 10);
    let pager = controller.pager();
    assert_eq!(pager.total_pages(), Some(3));
    assert!(pager.has_next());
    assert!(!pager.has_prev());
    assert!(!controller.is_loading());
    assert!(controller.last_error().is_none());
}

/// Every successful fetch satisfies the page invariants
#[tokio::test]
async fn test_page_invariants() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(1, 10, 7, business_rows(7, 0))),
        )
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Businesses>::new(backend.client("tok"));
    controller.refresh().await.unwrap();

    let page = controller.current_page().unwrap();
    assert!(page.len() <= page.limit as usize);
    assert!(page.page >= 1);
}

/// Legacy endpoints returning bare arrays still normalize into a page
#[tokio::test]
async fn test_legacy_array_endpoint() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_json("u_1", "a@example.com"),
            user_json("u_2", "b@example.com"),
        ])))
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Users>::new(backend.client("tok"));
    controller.refresh().await.unwrap();

    assert_eq!(controller.items().len(), 2);
    let pager = controller.pager();
    assert_eq!(pager.total, None);
    // Two of ten requested: the has-next heuristic reports no further pages
    assert!(!pager.has_next());
}

/// Submitted search text is sent; untouched filters stay absent
#[tokio::test]
async fn test_search_param_sent_and_filters_absent() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .and(query_param("search", "acme"))
        .and(query_param_is_missing("approved"))
        .and(query_param_is_missing("is_featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(1, 10, 1, business_rows(1, 0))))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Businesses>::new(backend.client("tok"));
    controller.set_search("acme");
    controller.refresh().await.unwrap();

    assert_eq!(controller.items().len(), 1);
}

/// A filter explicitly set to `false` must not narrow the result set
#[tokio::test]
async fn test_false_filter_omitted_from_request() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .and(query_param("approved", "true"))
        .and(query_param_is_missing("is_featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(1, 10, 0, vec![])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Businesses>::new(backend.client("tok"));
    controller.set_filter("approved", FilterValue::Flag(true));
    controller.set_filter("is_featured", FilterValue::Flag(false));
    controller.refresh().await.unwrap();
}

/// A failed fetch keeps the previous page and settles the loading flag
#[tokio::test]
async fn test_fetch_failure_keeps_previous_page() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(1, 10, 25, business_rows(10, 0))),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "database exploded"})),
        )
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Businesses>::new(backend.client("tok"));
    controller.refresh().await.unwrap();
    assert_eq!(controller.items().len(), 10);

    let err = controller.next_page().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    // Previous page still rendered; loading settled; error recorded
    assert_eq!(controller.items().len(), 10);
    assert!(!controller.is_loading());
    assert!(controller.last_error().unwrap().contains("database exploded"));
}

/// Server `{message}` bodies surface in the error
#[tokio::test]
async fn test_error_message_parsed_from_body() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "malformed filter"})),
        )
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Businesses>::new(backend.client("tok"));
    let err = controller.refresh().await.unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "malformed filter");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// A 401 triggers exactly one silent refresh-and-retry
#[tokio::test]
async fn test_unauthorized_triggers_single_refresh_retry() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .and(header("Authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "expired"})))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .and(header("Authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(1, 10, 1, business_rows(1, 0))))
        .expect(1)
        .mount(&backend.server)
        .await;

    let provider = Arc::new(RotatingTokenProvider::new("stale", &["fresh"]));
    let mut controller = ListController::<Businesses>::new(backend.client_with_provider(provider));

    controller.refresh().await.unwrap();
    assert_eq!(controller.items().len(), 1);
}

/// A second 401 after the refresh propagates instead of looping
#[tokio::test]
async fn test_second_unauthorized_propagates() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "still expired"})))
        .expect(2)
        .mount(&backend.server)
        .await;

    let provider = Arc::new(RotatingTokenProvider::new("stale", &["fresh"]));
    let mut controller = ListController::<Businesses>::new(backend.client_with_provider(provider));

    let err = controller.refresh().await.unwrap_err();
    assert!(err.is_auth());
}

/// Idempotence: an unchanged query fetched twice reports the same total
#[tokio::test]
async fn test_unchanged_query_is_idempotent() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(1, 10, 25, business_rows(10, 0))),
        )
        .expect(2)
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Businesses>::new(backend.client("tok"));
    controller.refresh().await.unwrap();
    let first_total = controller.pager().total;

    controller.refresh().await.unwrap();
    assert_eq!(controller.pager().total, first_total);
}

/// The older of two racing fetches is discarded, not applied last
#[tokio::test]
async fn test_stale_response_discarded_in_race() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(1, 10, 25, business_rows(10, 0))),
        )
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(2, 10, 25, business_rows(10, 10))),
        )
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Businesses>::new(backend.client("tok"));

    // F1 begins on page 1, then the user navigates and F2 begins on page 2
    let f1 = controller.begin_fetch();
    let f1_result = controller.fetch().await;

    controller.set_page(2);
    let f2 = controller.begin_fetch();
    let f2_result = controller.fetch().await;

    // Responses arrive out of order: F2 first, then the slow F1
    assert!(controller.complete_fetch(f2, f2_result).unwrap());
    assert!(!controller.complete_fetch(f1, f1_result).unwrap());

    // The newer request's page is displayed; the stale one was dropped
    assert_eq!(controller.pager().page, 2);
    assert_eq!(controller.items()[0].auth_id, "uid_10");
}

/// Optimistic toggle confirms with a partial-field body and keeps the value
#[tokio::test]
async fn test_optimistic_mutation_round_trip() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            1,
            10,
            1,
            vec![business_json("uid_0", "Acme", false)],
        )))
        .up_to_n_times(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/admins/businesses/uid_0"))
        .and(body_json(json!({"approved": true})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(business_json("uid_0", "Acme", true)),
        )
        .expect(1)
        .mount(&backend.server)
        .await;
    // A fresh fetch after the toggle reflects the confirmed value
    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            1,
            10,
            1,
            vec![business_json("uid_0", "Acme", true)],
        )))
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Businesses>::new(backend.client("tok"));
    controller.refresh().await.unwrap();
    assert!(!controller.items()[0].approved);

    let key = ItemKey::Document("uid_0".to_string());
    controller
        .mutate_field(&key, "approved", FieldValue::Bool(true))
        .await
        .unwrap();

    // Applied locally without waiting for a refetch
    assert!(controller.items()[0].approved);

    // No lost write: the server state matches after a fresh fetch
    controller.refresh().await.unwrap();
    assert!(controller.items()[0].approved);
}

/// A rejected mutation rolls the field back to its prior value
#[tokio::test]
async fn test_rejected_mutation_rolls_back() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            1,
            10,
            1,
            vec![business_json("uid_0", "Acme", false)],
        )))
        .mount(&backend.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/admins/businesses/uid_0"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "approval cascade failed"})),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<Businesses>::new(backend.client("tok"));
    controller.refresh().await.unwrap();

    let key = ItemKey::Document("uid_0".to_string());
    let err = controller
        .mutate_field(&key, "approved", FieldValue::Bool(true))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    // Settled state shows the pre-toggle value
    assert!(!controller.items()[0].approved);
    // The failure is not fatal to the view
    assert_eq!(controller.items().len(), 1);
}

/// Session establishment caches the admin role record
#[tokio::test]
async fn test_establish_session_caches_admin() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/admins/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(admin_json("admin_1")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let http = backend.client("tok");
    let api = AdminApi::new(http.clone());

    assert!(!http.session().is_established());
    let admin = api.establish_session().await.unwrap();
    assert_eq!(admin.auth_id, "admin_1");
    assert!(http.session().is_established());

    // Logout invalidates: further authenticated calls fail fast
    http.session().invalidate();
    assert!(api.get_stats().await.is_err());
}

/// Pending balances list plus payout execution acknowledgement
#[tokio::test]
async fn test_payout_balances_and_execution() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/payouts/balances"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            1,
            20,
            2,
            vec![
                wallet_balance_json("uid_1", 150.0),
                wallet_balance_json("uid_2", 45.5),
            ],
        )))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/payouts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let api = AdminApi::new(backend.client("tok"));

    let balances = api.pending_balances(1, 20).await.unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances.total, Some(2));

    let items: Vec<PayoutItem> = balances
        .items
        .iter()
        .map(|b| PayoutItem {
            auth_id: b.auth_id.clone(),
            amount: b.current_balance,
            related_id: "admin_1".to_string(),
        })
        .collect();

    assert!(api.execute_payouts(&items).await.unwrap());
}

/// Empty payout batches are rejected before any request is made
#[tokio::test]
async fn test_empty_payout_batch_rejected() {
    init_test_logging();
    let backend = TestBackend::start().await;

    let api = AdminApi::new(backend.client("tok"));
    let err = api.execute_payouts(&[]).await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

/// Referral status update sends only the changed fields
#[tokio::test]
async fn test_referral_status_update() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("PATCH"))
        .and(path("/referralProfiles/uid_9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(referral_profile_json("uid_9", "approved")),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let api = AdminApi::new(backend.client("tok"));
    let update = ReferralProfileUpdate {
        enrollment_status: Some(EnrollmentStatus::Approved),
        approved_at: Some(chrono::Utc::now()),
        ..ReferralProfileUpdate::default()
    };

    let profile = api.update_referral_status("uid_9", &update).await.unwrap();
    assert_eq!(profile.enrollment_status, EnrollmentStatus::Approved);
}

/// Enum-status mutation through the generic controller
#[tokio::test]
async fn test_referral_profile_status_toggle_in_list() {
    init_test_logging();
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/referralProfiles"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            1,
            20,
            1,
            vec![referral_profile_json("uid_9", "pending")],
        )))
        .mount(&backend.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/referralProfiles/uid_9"))
        .and(body_json(json!({"enrollment_status": "approved"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(referral_profile_json("uid_9", "approved")),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut controller = ListController::<ReferralProfiles>::new(backend.client("tok"));
    controller.refresh().await.unwrap();

    let key = ItemKey::Document("uid_9".to_string());
    controller
        .mutate_field(&key, "enrollment_status", FieldValue::Text("approved".to_string()))
        .await
        .unwrap();

    assert_eq!(
        controller.items()[0].enrollment_status,
        EnrollmentStatus::Approved
    );
}
