//! Independent concurrent searches through one shared gateway.

use std::sync::Arc;

use tubefind_search::{MockProvider, SearchGateway};

#[tokio::test]
async fn test_concurrent_searches_share_one_gateway() {
    let mock = MockProvider::with_titles(&["Cat A", "Cat B"]);
    let gateway = SearchGateway::new(Arc::new(mock.clone()));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let gateway = gateway.clone();
            tokio::spawn(async move { gateway.search(&format!("cats {i}")).await })
        })
        .collect();

    for handle in handles {
        let results = handle.await.unwrap().unwrap();
        assert_eq!(results.len(), 2);
    }

    assert_eq!(mock.call_count(), 16);
    let mut queries: Vec<_> = mock.calls().into_iter().map(|c| c.query).collect();
    queries.sort();
    queries.dedup();
    assert_eq!(queries.len(), 16);
}
