use std::sync::Arc;

use hearth_testkit::{ListingFixture, MemoryListingStore, ScriptedChat};

use super::{mixed_inventory, service_with};

#[tokio::test]
async fn featured_returns_only_flagged_listings() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let response = service.featured().await.unwrap();

	assert_eq!(response.items.len(), 1);
	assert_eq!(response.items[0].id, 3);
}

#[tokio::test]
async fn featured_caps_at_configured_count() {
	let listings = (1..=9)
		.map(|id| ListingFixture::new(id, &format!("Featured {id}")).featured().build())
		.collect();
	let service =
		service_with(MemoryListingStore::new(listings), Arc::new(ScriptedChat::replying("ok")));

	let response = service.featured().await.unwrap();

	// Default featured_count is 6, newest first.
	assert_eq!(response.items.len(), 6);
	assert_eq!(response.items[0].id, 9);
}

#[tokio::test]
async fn latest_caps_at_configured_count_newest_first() {
	let listings = (1..=12).map(|id| ListingFixture::new(id, &format!("Home {id}")).build()).collect();
	let service =
		service_with(MemoryListingStore::new(listings), Arc::new(ScriptedChat::replying("ok")));

	let response = service.latest().await.unwrap();
	let ids: Vec<i64> = response.items.iter().map(|item| item.id).collect();

	assert_eq!(ids, vec![12, 11, 10, 9, 8, 7, 6, 5]);
}

#[tokio::test]
async fn detail_returns_full_summary_with_display_labels() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let summary = service.listing(3).await.unwrap().expect("listing 3 is active");

	assert_eq!(summary.title, "Beachfront Villa");
	assert_eq!(summary.property_type, "Villa");
	assert_eq!(summary.listing_type, "Sale");
	assert_eq!(summary.agent_name, "Alex Agent");
	assert!(summary.is_featured);
}

#[tokio::test]
async fn detail_hides_inactive_and_unknown_listings() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	assert!(service.listing(5).await.unwrap().is_none());
	assert!(service.listing(404).await.unwrap().is_none());
}
