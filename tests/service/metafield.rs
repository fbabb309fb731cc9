use std::collections::BTreeMap;

use pitwall::server::{
    error::{metafield::MetafieldError, Error},
    model::store::MetafieldValue,
    service::metafield::MetafieldService,
};

use super::*;

fn updates() -> BTreeMap<String, MetafieldValue> {
    BTreeMap::from([
        ("level".to_string(), MetafieldValue::Integer(4)),
        ("xp".to_string(), MetafieldValue::Integer(3200)),
    ])
}

/// Expect the global ID back when the store accepts every field
#[tokio::test]
async fn applies_updates() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_metafields_set_endpoint(5, Vec::new(), 1)
        .build()
        .await?;
    let store = test.store_client();
    let config = test.config();

    let customer_id = MetafieldService::new(&store, &config)
        .apply_updates("5", &updates())
        .await
        .unwrap();

    assert_eq!(customer_id, factory::customer_gid(5));
    test.assert_mocks();

    Ok(())
}

/// Expect every user error from the store in one aggregated failure
#[tokio::test]
async fn aggregates_user_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_metafields_set_endpoint(
            5,
            vec![
                factory::user_error(&["metafields", "0", "value"], "Level too high"),
                factory::user_error(&["metafields", "1", "value"], "XP too high"),
            ],
            1,
        )
        .build()
        .await?;
    let store = test.store_client();
    let config = test.config();

    let result = MetafieldService::new(&store, &config)
        .apply_updates("5", &updates())
        .await;

    let Err(Error::MetafieldError(MetafieldError::FieldWrite { errors, .. })) = result else {
        panic!("expected field write error");
    };
    let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["Level too high", "XP too high"]);
    test.assert_mocks();

    Ok(())
}

/// Expect initialized customers skipped and only the others written, in fetch order
#[tokio::test]
async fn bulk_initializes_uninitialized_customers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customers_endpoint(
            vec![
                factory::customer(1, Some("Has Level"), &[("level", "3")]),
                factory::customer(2, Some("Fresh"), &[]),
                factory::customer(3, None, &[("xp", "50")]),
            ],
            1,
        )
        .with_metafields_set_endpoint(1, Vec::new(), 0)
        .with_metafields_set_endpoint(2, Vec::new(), 1)
        .with_metafields_set_endpoint(3, Vec::new(), 1)
        .build()
        .await?;
    let store = test.store_client();
    let config = test.config();

    let report = MetafieldService::new(&store, &config)
        .bulk_initialize()
        .await
        .unwrap();

    assert_eq!(report.processed, 3);
    assert_eq!(report.skipped, 1);
    let results: Vec<_> = report
        .results
        .iter()
        .map(|r| (r.id.clone(), r.name.as_str(), r.success))
        .collect();
    assert_eq!(
        results,
        vec![
            (factory::customer_gid(2), "Fresh", true),
            (factory::customer_gid(3), "Pilot", true),
        ]
    );
    test.assert_mocks();

    Ok(())
}

/// Expect a failed write to mark only that customer as failed
#[tokio::test]
async fn bulk_initialize_records_write_failures() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customers_endpoint(
            vec![factory::customer(1, None, &[]), factory::customer(2, None, &[])],
            1,
        )
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/admin/api/2024-10/graphql.json")
                .match_body(mockito::Matcher::Regex(
                    r#""ownerId":"gid://shopify/Customer/1""#.to_string(),
                ))
                .with_status(500)
                .with_body("upstream exploded")
                .expect(1)
                .create()
        })
        .with_metafields_set_endpoint(2, Vec::new(), 1)
        .build()
        .await?;
    let store = test.store_client();
    let config = test.config();

    let report = MetafieldService::new(&store, &config)
        .bulk_initialize()
        .await
        .unwrap();

    assert!(!report.results[0].success);
    assert!(report.results[1].success);
    assert_eq!(report.failed(), 1);
    test.assert_mocks();

    Ok(())
}
