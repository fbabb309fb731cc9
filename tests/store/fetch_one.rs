use pitwall::server::{data::store::RemoteStore, error::store::StoreError};

use super::*;

/// Expect the requested customer to be returned with its metafields
#[tokio::test]
async fn returns_customer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customer_endpoint(
            7,
            Some(factory::customer(7, Some("Kimi"), &[("level", "4")])),
            1,
        )
        .build()
        .await?;
    let store = test.store_client();

    let record = store
        .fetch_one(&factory::customer_gid(7), TEST_NAMESPACE)
        .await
        .unwrap();

    assert_eq!(record.id, factory::customer_gid(7));
    assert_eq!(record.display_name(), Some("Kimi"));
    assert_eq!(record.attributes["level"], "4");
    test.assert_mocks();

    Ok(())
}

/// Expect a null customer to map to not found
#[tokio::test]
async fn not_found_for_null_customer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customer_endpoint(8, None, 1)
        .build()
        .await?;
    let store = test.store_client();

    let result = store.fetch_one(&factory::customer_gid(8), TEST_NAMESPACE).await;

    assert!(matches!(
        result,
        Err(StoreError::CustomerNotFound(id)) if id == factory::customer_gid(8)
    ));
    test.assert_mocks();

    Ok(())
}
