use pitwall::server::{data::store::RemoteStore, error::store::StoreError};

use super::*;

/// Expect customers to be returned in store order with their metafields flattened
#[tokio::test]
async fn returns_customers_in_store_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customers_endpoint(
            vec![
                factory::customer(1, Some("Ace"), &[("xp", "1200"), ("country", "IT")]),
                factory::customer(2, None, &[]),
            ],
            1,
        )
        .build()
        .await?;
    let store = test.store_client();

    let records = store.fetch_batch(250, TEST_NAMESPACE).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, factory::customer_gid(1));
    assert_eq!(records[0].display_name(), Some("Ace"));
    assert_eq!(records[0].attributes["xp"], "1200");
    assert_eq!(records[0].attributes["country"], "IT");
    assert_eq!(records[1].id, factory::customer_gid(2));
    assert!(records[1].attributes.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Expect the requested count and namespace to be sent as query variables
#[tokio::test]
async fn sends_count_and_namespace() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/admin/api/2024-10/graphql.json")
                .match_body(mockito::Matcher::PartialJsonString(
                    r#"{"variables":{"first":25,"namespace":"pitwall"}}"#.to_string(),
                ))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(factory::customers_response(Vec::new()).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let store = test.store_client();

    let records = store.fetch_batch(25, TEST_NAMESPACE).await.unwrap();

    assert!(records.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect counts above the store's page limit to be clamped
#[tokio::test]
async fn clamps_count_to_page_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/admin/api/2024-10/graphql.json")
                .match_body(mockito::Matcher::PartialJsonString(
                    r#"{"variables":{"first":250}}"#.to_string(),
                ))
                .with_status(200)
                .with_body(factory::customers_response(Vec::new()).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let store = test.store_client();

    store.fetch_batch(1000, TEST_NAMESPACE).await.unwrap();

    test.assert_mocks();

    Ok(())
}

/// Expect top-level GraphQL errors to surface with their messages
#[tokio::test]
async fn error_on_graphql_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_error_endpoint(operation::CUSTOMERS, &["Throttled"], 1)
        .build()
        .await?;
    let store = test.store_client();

    let result = store.fetch_batch(250, TEST_NAMESPACE).await;

    assert!(matches!(
        result,
        Err(StoreError::GraphQl(messages)) if messages == vec!["Throttled".to_string()]
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect non-2xx responses to surface with their status code
#[tokio::test]
async fn error_on_unexpected_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_status_error_endpoint(operation::CUSTOMERS, 503, 1)
        .build()
        .await?;
    let store = test.store_client();

    let result = store.fetch_batch(250, TEST_NAMESPACE).await;

    assert!(matches!(
        result,
        Err(StoreError::UnexpectedStatus { status: 503, .. })
    ));
    test.assert_mocks();

    Ok(())
}

/// Expect a request failure when the store cannot be reached
#[tokio::test]
async fn error_when_store_unreachable() -> Result<(), TestError> {
    let store = pitwall::server::data::store::client::StoreClient::builder()
        .store_url("http://127.0.0.1:1")
        .access_token(TEST_ACCESS_TOKEN)
        .api_version(TEST_API_VERSION)
        .build()
        .unwrap();

    let result = store.fetch_batch(250, TEST_NAMESPACE).await;

    assert!(matches!(result, Err(StoreError::RequestFailed(_))));

    Ok(())
}
