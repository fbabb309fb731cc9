use pitwall::server::controller::leaderboard::get_leaderboard;

use super::*;

#[tokio::test]
/// Expect 200 with ranked camelCase entries and the total
async fn returns_ranked_leaderboard() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customers_endpoint(
            vec![
                factory::customer(1, Some("Slow"), &[("xp", "900"), ("country", "BR")]),
                factory::customer(2, Some("Fast"), &[("xp", "21000"), ("victories", "12")]),
                factory::customer(3, Some("Idle"), &[]),
            ],
            1,
        )
        .build()
        .await?;

    let result = get_leaderboard(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert_eq!(body["total"], 2);
    let first = &body["leaderboard"][0];
    assert_eq!(first["rank"], 1);
    assert_eq!(first["username"], "Fast");
    assert_eq!(first["level"], 22);
    assert_eq!(first["tier"], "Legend");
    assert_eq!(first["tierNumber"], 5);
    assert_eq!(first["faction"], "Independent");
    assert!(first["createdAt"].is_string());
    let second = &body["leaderboard"][1];
    assert_eq!(second["rank"], 2);
    assert_eq!(second["country"], "BR");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 200 with an empty list when nobody has progress
async fn returns_empty_leaderboard() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customers_endpoint(vec![factory::customer(1, None, &[])], 1)
        .build()
        .await?;

    let resp = get_leaderboard(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    let body = response_json(resp).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["leaderboard"], serde_json::json!([]));

    Ok(())
}

#[tokio::test]
/// Expect 502 with upstream details when the store returns errors
async fn bad_gateway_when_store_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_error_endpoint(operation::CUSTOMERS, &["Throttled"], 1)
        .build()
        .await?;

    let result = get_leaderboard(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(resp).await;
    assert!(body["details"].as_str().unwrap().contains("Throttled"));
    test.assert_mocks();

    Ok(())
}
