use axum::extract::Query;
use pitwall::{model::pilot::ProfileQuery, server::controller::profile::get_profile};

use super::*;

fn query(customer_id: Option<&str>) -> Query<ProfileQuery> {
    Query(ProfileQuery {
        customer_id: customer_id.map(str::to_string),
    })
}

#[tokio::test]
/// Expect 200 with the decoded profile and progress fields
async fn returns_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customer_endpoint(
            21,
            Some(factory::customer(
                21,
                Some("Oscar"),
                &[
                    ("xp", "7250"),
                    ("avatar_url", "https://cdn.example.com/oscar.png"),
                    ("car_image_url", ""),
                ],
            )),
            1,
        )
        .build()
        .await?;

    let result = get_profile(State(test.into_app_state()), query(Some("21"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert_eq!(body["id"], "gid://shopify/Customer/21");
    assert_eq!(body["username"], "Oscar");
    assert_eq!(body["level"], 8);
    assert_eq!(body["tier"], "Advanced");
    assert_eq!(body["tierNumber"], 2);
    assert_eq!(body["nextLevelXp"], 8000);
    assert_eq!(body["xpProgressPercent"], 25.0);
    assert_eq!(body["avatarUrl"], "https://cdn.example.com/oscar.png");
    assert!(body["carImageUrl"].is_null());
    assert_eq!(body["achievements"], serde_json::json!([]));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 without a store call when the customer ID is missing
async fn bad_request_without_customer_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customer_endpoint(21, None, 0)
        .build()
        .await?;

    let result = get_profile(State(test.into_app_state()), query(None)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 when the store has no such customer
async fn not_found_for_unknown_customer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customer_endpoint(22, None, 1)
        .build()
        .await?;

    let result = get_profile(State(test.into_app_state()), query(Some("22"))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 500 with a generic message when stored achievements are corrupted
async fn internal_error_for_malformed_achievements() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customer_endpoint(
            23,
            Some(factory::customer(23, None, &[("achievements", "not json")])),
            1,
        )
        .build()
        .await?;

    let result = get_profile(State(test.into_app_state()), query(Some("23"))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(resp).await;
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}
