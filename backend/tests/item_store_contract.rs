//! Integration tests for the listing store contract.
//!
//! These tests drive the seeded in-memory store exclusively through the
//! public [`ItemRepository`] port, covering the documented behaviour of
//! every operation.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use backend::domain::ports::ItemRepository;
use backend::domain::{Item, ItemDraft, ItemId, ListingFilter, items_from_seeds};
use backend::example_listings::{ExampleListingsSettings, build_seeded_store};
use backend::outbound::persistence::MemoryItemRepository;
use example_listings::{Catalog, ListingArchetype, SeedPlan, generate_listings};

const SEEDED_COUNT: usize = 60;

#[fixture]
fn store() -> Arc<MemoryItemRepository> {
    let settings = ExampleListingsSettings {
        count: Some(SEEDED_COUNT),
        seed: Some(2026),
    };
    build_seeded_store(&settings, Arc::new(DefaultClock)).expect("seeding succeeds")
}

fn id_multiset(items: &[Item]) -> Vec<ItemId> {
    let mut ids: Vec<_> = items.iter().map(|item| item.id).collect();
    ids.sort_unstable_by_key(|id| *id.as_uuid());
    ids
}

fn draft() -> ItemDraft {
    ItemDraft {
        title_fa: "گلدان سفالی".to_owned(),
        title_en: "Clay Vase".to_owned(),
        price: 350,
        currency: "AFN".to_owned(),
        category: "لوازم خانه".to_owned(),
        province: "بامیان".to_owned(),
        image: "https://picsum.photos/400/300?random=9000".to_owned(),
        description: Some("Hand made".to_owned()),
    }
}

#[rstest]
#[tokio::test]
async fn seeding_produces_the_configured_count_with_distinct_ids(
    store: Arc<MemoryItemRepository>,
) {
    let items = store.list_all().await.expect("list succeeds");

    assert_eq!(items.len(), SEEDED_COUNT);
    let ids: HashSet<_> = items.iter().map(|item| *item.id.as_uuid()).collect();
    assert_eq!(ids.len(), items.len(), "ids must be pairwise distinct");
    assert!(items.iter().all(|item| item.currency == "AFN"));
}

#[rstest]
#[tokio::test]
async fn find_by_id_agrees_with_list_all(store: Arc<MemoryItemRepository>) {
    let items = store.list_all().await.expect("list succeeds");

    for item in &items {
        let found = store.find_by_id(&item.id).await.expect("lookup succeeds");
        assert_eq!(found.as_ref(), Some(item));
    }

    let absent = store
        .find_by_id(&ItemId::random())
        .await
        .expect("lookup succeeds");
    assert!(absent.is_none());
}

#[rstest]
#[tokio::test]
async fn sentinel_filters_return_the_full_multiset(store: Arc<MemoryItemRepository>) {
    let all = store.list_all().await.expect("list succeeds");
    let by_province = store
        .list_by_province(&ListingFilter::from_param("all"))
        .await
        .expect("filter succeeds");
    let by_category = store
        .list_by_category(&ListingFilter::from_param("all"))
        .await
        .expect("filter succeeds");

    assert_eq!(id_multiset(&by_province), id_multiset(&all));
    assert_eq!(id_multiset(&by_category), id_multiset(&all));
}

#[rstest]
#[tokio::test]
async fn province_filter_is_exact_and_order_preserving(store: Arc<MemoryItemRepository>) {
    let all = store.list_all().await.expect("list succeeds");
    let province = all
        .first()
        .map(|item| item.province.clone())
        .expect("seeded store is non-empty");

    let matched = store
        .list_by_province(&ListingFilter::from_param(province.clone()))
        .await
        .expect("filter succeeds");

    assert!(!matched.is_empty());
    assert!(matched.iter().all(|item| item.province == province));

    let expected: Vec<_> = all
        .iter()
        .filter(|item| item.province == province)
        .map(|item| item.id)
        .collect();
    let actual: Vec<_> = matched.iter().map(|item| item.id).collect();
    assert_eq!(actual, expected, "filtering must preserve insertion order");
}

#[rstest]
#[tokio::test]
async fn unknown_province_yields_an_empty_result(store: Arc<MemoryItemRepository>) {
    let matched = store
        .list_by_province(&ListingFilter::from_param("Atlantis"))
        .await
        .expect("filter succeeds");

    assert!(matched.is_empty());
}

#[rstest]
#[tokio::test]
async fn create_echoes_the_draft_and_is_retrievable(store: Arc<MemoryItemRepository>) {
    let started_at = Utc::now();
    let before: HashSet<_> = store
        .list_all()
        .await
        .expect("list succeeds")
        .into_iter()
        .map(|item| *item.id.as_uuid())
        .collect();

    let created = store.create(draft()).await.expect("create succeeds");

    assert!(!before.contains(created.id.as_uuid()), "id must be fresh");
    assert!(created.created_at >= started_at);
    let expected = Item::from_draft(draft(), created.id, created.created_at);
    assert_eq!(created, expected, "all draft fields must be echoed");

    let fetched = store
        .find_by_id(&created.id)
        .await
        .expect("lookup succeeds");
    assert_eq!(fetched, Some(created.clone()));

    let listed = store.list_all().await.expect("list succeeds");
    assert_eq!(listed.last(), Some(&created), "created items append at the end");
    assert_eq!(listed.len(), SEEDED_COUNT + 1);
}

#[tokio::test]
async fn single_archetype_scenario_flows_through_the_store() {
    let catalog = Catalog::new(
        vec!["P".to_owned()],
        vec![ListingArchetype::new("ایکس", "X", "C", 10, 20)],
    )
    .expect("valid catalog");
    let seeds = generate_listings(&catalog, &SeedPlan::new(4, 1)).expect("generation succeeds");
    let clock: Arc<dyn mockable::Clock> = Arc::new(DefaultClock);
    let items = items_from_seeds(seeds, clock.as_ref());
    let store = MemoryItemRepository::with_items(items, clock).expect("seed succeeds");

    let matched = store
        .list_by_category(&ListingFilter::from_param("C"))
        .await
        .expect("filter succeeds");
    assert_eq!(matched.len(), 1);
    let item = matched.first().expect("one item");
    assert_eq!(item.category, "C");
    assert_eq!(item.province, "P");
    assert!((10..20).contains(&item.price));

    let unmatched = store
        .list_by_category(&ListingFilter::from_param("Z"))
        .await
        .expect("filter succeeds");
    assert!(unmatched.is_empty());
}
