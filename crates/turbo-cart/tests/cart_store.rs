//! End-to-end cart scenarios against an in-memory catalog and store.

use std::sync::Arc;

use turbo_cache::Cache;
use turbo_cart::prelude::*;
use turbo_cart::OUT_OF_STOCK_NOTICE;

type TestStore = CartStore<StaticCatalog, Arc<NoticeQueue>>;

fn product(id: u64) -> Product {
    Product::new(ProductId::new(id), format!("Tênis {}", id), 139.9)
        .with_image(format!("https://img.example/{}.jpg", id))
}

fn held(id: u64, amount: i64) -> Product {
    product(id).with_amount(amount)
}

/// Store over `cache` whose persisted cart is seeded with `items`.
fn seeded(
    catalog: StaticCatalog,
    cache: &Cache,
    items: Vec<Product>,
) -> (TestStore, Arc<NoticeQueue>) {
    let config = CartConfig::default();
    let seed = CartState::from_items(items).unwrap();
    cache.set(&config.storage_key(), &seed).unwrap();

    let notices = Arc::new(NoticeQueue::new());
    let store = CartStore::open(catalog, cache.clone(), notices.clone(), &config).unwrap();
    (store, notices)
}

fn persisted(cache: &Cache) -> CartState {
    cache
        .get(&CartConfig::default().storage_key())
        .unwrap()
        .unwrap_or_default()
}

#[tokio::test]
async fn test_add_to_empty_cart() {
    let cache = Cache::memory();
    let catalog = StaticCatalog::new()
        .with_product(product(1))
        .with_stock(ProductId::new(1), 5);
    let (mut store, notices) = seeded(catalog, &cache, vec![]);

    let cart = store.add_product(ProductId::new(1)).await.unwrap();

    assert_eq!(cart.len(), 1);
    let entry = cart.get(ProductId::new(1)).unwrap();
    assert_eq!(entry.amount, 1);
    assert_eq!(entry.title, "Tênis 1");
    assert_eq!(persisted(&cache), *cart);
    assert!(notices.is_empty());
}

#[tokio::test]
async fn test_add_beyond_stock_is_rejected() {
    let cache = Cache::memory();
    let catalog = StaticCatalog::new()
        .with_product(product(1))
        .with_stock(ProductId::new(1), 1);
    let (mut store, notices) = seeded(catalog, &cache, vec![held(1, 1)]);
    let before = store.cart();

    let err = store.add_product(ProductId::new(1)).await.unwrap_err();

    assert!(matches!(err, CartError::OutOfStock { requested: 2, available: 1, .. }));
    assert_eq!(store.cart(), before);
    assert_eq!(store.cart().amount_of(ProductId::new(1)), 1);
    assert_eq!(persisted(&cache), *before);
    assert_eq!(notices.drain(), vec![OUT_OF_STOCK_NOTICE]);
}

#[tokio::test]
async fn test_add_with_zero_stock_never_fetches_product() {
    let cache = Cache::memory();
    let catalog = StaticCatalog::new()
        .with_product(product(4))
        .with_stock(ProductId::new(4), 0);
    let (mut store, notices) = seeded(catalog, &cache, vec![]);

    let err = store.add_product(ProductId::new(4)).await.unwrap_err();

    assert!(matches!(err, CartError::OutOfStock { .. }));
    assert!(store.cart().is_empty());
    assert_eq!(store.catalog().product_lookups(), 0);
    assert_eq!(notices.len(), 1);
}

#[tokio::test]
async fn test_add_with_failed_stock_lookup() {
    let cache = Cache::memory();
    let (mut store, notices) = seeded(StaticCatalog::new(), &cache, vec![held(2, 1)]);

    let err = store.add_product(ProductId::new(7)).await.unwrap_err();

    assert!(matches!(err, CartError::OperationFailed(_)));
    assert_eq!(store.cart().len(), 1);
    assert_eq!(notices.drain(), vec!["Error adding product"]);
}

#[tokio::test]
async fn test_add_appends_in_order() {
    let cache = Cache::memory();
    let catalog = StaticCatalog::new()
        .with_product(product(1))
        .with_stock(ProductId::new(1), 5)
        .with_stock(ProductId::new(2), 5);
    let (mut store, _) = seeded(catalog, &cache, vec![held(2, 1)]);

    let cart = store.add_product(ProductId::new(1)).await.unwrap();

    let ids: Vec<u64> = cart.iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_update_within_stock() {
    let cache = Cache::memory();
    let catalog = StaticCatalog::new().with_stock(ProductId::new(2), 10);
    let (mut store, notices) = seeded(catalog, &cache, vec![held(2, 3)]);

    let cart = store
        .update_product_amount(ProductId::new(2), 5)
        .await
        .unwrap();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.amount_of(ProductId::new(2)), 5);
    assert_eq!(persisted(&cache).amount_of(ProductId::new(2)), 5);
    assert!(notices.is_empty());
}

#[tokio::test]
async fn test_update_to_exact_stock() {
    let cache = Cache::memory();
    let catalog = StaticCatalog::new().with_stock(ProductId::new(2), 10);
    let (mut store, _) = seeded(catalog, &cache, vec![held(2, 3)]);

    let cart = store
        .update_product_amount(ProductId::new(2), 10)
        .await
        .unwrap();

    assert_eq!(cart.amount_of(ProductId::new(2)), 10);
}

#[tokio::test]
async fn test_update_non_positive_amounts() {
    let cache = Cache::memory();
    let catalog = StaticCatalog::new().with_stock(ProductId::new(2), 10);
    let (mut store, notices) = seeded(catalog, &cache, vec![held(2, 3)]);

    for amount in [0, -1] {
        let err = store
            .update_product_amount(ProductId::new(2), amount)
            .await
            .unwrap_err();
        assert_eq!(err, CartError::InvalidAmount(amount));
    }

    assert_eq!(store.cart().amount_of(ProductId::new(2)), 3);
    assert_eq!(store.catalog().stock_lookups(), 0);
    assert_eq!(
        notices.drain(),
        vec![
            "Error updating product quantity",
            "Error updating product quantity"
        ]
    );
}

#[tokio::test]
async fn test_update_with_failed_stock_lookup() {
    let cache = Cache::memory();
    let (mut store, notices) = seeded(StaticCatalog::new(), &cache, vec![held(2, 3)]);

    let err = store
        .update_product_amount(ProductId::new(2), 4)
        .await
        .unwrap_err();

    assert!(matches!(err, CartError::OperationFailed(_)));
    assert_eq!(store.cart().amount_of(ProductId::new(2)), 3);
    assert_eq!(notices.drain(), vec!["Error updating product quantity"]);
}

#[tokio::test]
async fn test_remove_last_entry() {
    let cache = Cache::memory();
    let (mut store, notices) = seeded(StaticCatalog::new(), &cache, vec![held(3, 1)]);

    let cart = store.remove_product(ProductId::new(3)).unwrap();

    assert!(cart.is_empty());
    assert!(persisted(&cache).is_empty());
    assert!(notices.is_empty());
}

#[tokio::test]
async fn test_remove_missing_twice() {
    let cache = Cache::memory();
    let (mut store, notices) = seeded(StaticCatalog::new(), &cache, vec![held(3, 1)]);
    let before = store.cart();

    let first = store.remove_product(ProductId::new(9)).unwrap_err();
    let second = store.remove_product(ProductId::new(9)).unwrap_err();

    assert_eq!(first, CartError::NotFound(ProductId::new(9)));
    assert_eq!(first, second);
    assert_eq!(store.cart(), before);
    assert_eq!(
        notices.drain(),
        vec!["Error removing product", "Error removing product"]
    );
}

#[tokio::test]
async fn test_reload_restores_snapshot() {
    let cache = Cache::memory();
    let catalog = StaticCatalog::new()
        .with_product(product(1))
        .with_product(product(2))
        .with_stock(ProductId::new(1), 3)
        .with_stock(ProductId::new(2), 3);
    let (mut store, _) = seeded(catalog, &cache, vec![]);

    store.add_product(ProductId::new(2)).await.unwrap();
    store.add_product(ProductId::new(1)).await.unwrap();
    store.add_product(ProductId::new(2)).await.unwrap();
    let saved = store.cart();
    drop(store);

    let reopened = CartStore::open(
        StaticCatalog::new(),
        cache.clone(),
        TracingNotifier,
        &CartConfig::default(),
    )
    .unwrap();

    assert_eq!(reopened.cart(), saved);
    let ids: Vec<(u64, i64)> = reopened.cart().iter().map(|p| (p.id.get(), p.amount)).collect();
    assert_eq!(ids, vec![(2, 2), (1, 1)]);
}

#[tokio::test]
async fn test_namespaces_are_isolated() {
    let cache = Cache::memory();
    let catalog = StaticCatalog::new()
        .with_product(product(2))
        .with_stock(ProductId::new(2), 4);
    let (_store, _) = seeded(StaticCatalog::new(), &cache, vec![held(1, 2)]);
    let before = persisted(&cache);

    let mut other = CartStore::open(
        catalog,
        cache.clone(),
        TracingNotifier,
        &CartConfig::new("@Other"),
    )
    .unwrap();
    assert_eq!(other.storage_key(), "@Other:cart");
    assert!(other.cart().is_empty());

    other.add_product(ProductId::new(2)).await.unwrap();

    assert_eq!(persisted(&cache), before);
    assert_eq!(persisted(&cache).amount_of(ProductId::new(1)), 2);
    let saved: CartState = cache.get("@Other:cart").unwrap().unwrap();
    assert_eq!(saved.amount_of(ProductId::new(2)), 1);
    assert!(!saved.contains(ProductId::new(1)));
}
