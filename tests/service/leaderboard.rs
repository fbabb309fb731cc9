use pitwall::server::{
    error::{store::StoreError, Error},
    model::tier::Tier,
    service::leaderboard::LeaderboardService,
};

use super::*;

/// Expect inactive pilots dropped and the rest ranked by XP with ties kept in fetch order
#[tokio::test]
async fn ranks_active_pilots() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customers_endpoint(
            vec![
                factory::customer(1, Some("First"), &[("xp", "100")]),
                factory::customer(2, None, &[]),
                factory::customer(3, Some("Third"), &[("xp", "100")]),
                factory::customer(4, None, &[("username", "Champ"), ("level", "20"), ("xp", "500")]),
            ],
            1,
        )
        .build()
        .await?;
    let store = test.store_client();
    let config = test.config();

    let entries = LeaderboardService::new(&store, &config)
        .get_leaderboard()
        .await
        .unwrap();

    let ranking: Vec<_> = entries
        .iter()
        .map(|e| (e.rank, e.profile.username.as_str()))
        .collect();
    assert_eq!(ranking, vec![(1, "Champ"), (2, "First"), (3, "Third")]);
    assert_eq!(entries[0].profile.tier, Tier::Legend);
    assert_eq!(entries[1].profile.tier, Tier::Recruit);
    test.assert_mocks();

    Ok(())
}

/// Expect no partial leaderboard when the batch fetch fails
#[tokio::test]
async fn error_when_fetch_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_graphql_error_endpoint(operation::CUSTOMERS, &["Internal error"], 1)
        .build()
        .await?;
    let store = test.store_client();
    let config = test.config();

    let result = LeaderboardService::new(&store, &config)
        .get_leaderboard()
        .await;

    assert!(matches!(result, Err(Error::StoreError(StoreError::GraphQl(_)))));
    test.assert_mocks();

    Ok(())
}
