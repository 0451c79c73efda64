use std::sync::Arc;

use hearth_domain::intent::QueryIntent;
use hearth_testkit::{ListingFixture, MemoryListingStore, ScriptedChat};

use super::{mixed_inventory, service_with};

#[tokio::test]
async fn snapshot_carries_inventory_statistics() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let context = service.retrieve_context(QueryIntent::default()).await.unwrap();

	assert!(context.snapshot.starts_with("=== HEARTH LISTINGS CONTEXT ==="));
	assert!(context.snapshot.contains("- Total Active Listings: 4"));
	assert!(context.snapshot.contains("- Listings For Sale: 2"));
	assert!(context.snapshot.contains("- Listings For Rent: 2"));
	assert!(context.snapshot.contains("AVAILABLE CATEGORIES: Residential, Luxury"));
	assert!(context.snapshot.contains("AVAILABLE AMENITIES: Pool, Garage"));
	assert!(context.snapshot.contains("PRICE RANGE: $1,800 - $2,400,000"));
	assert!(context.snapshot.contains("AVAILABLE CITIES: Miami, Springfield"));
}

#[tokio::test]
async fn snapshot_lists_matching_listings_with_details() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let intent = QueryIntent::derive("villas for sale");
	let context = service.retrieve_context(intent).await.unwrap();

	assert!(context.snapshot.contains("=== RELEVANT LISTINGS (1 found) ==="));
	assert!(context.snapshot.contains("[Listing ID: 3]"));
	assert!(context.snapshot.contains("- Title: Beachfront Villa"));
	assert!(context.snapshot.contains("- Price: $2,400,000"));
	assert!(context.snapshot.contains("- Type: Villa (Sale)"));
	assert!(context.snapshot.contains("- Featured: Yes"));
	assert_eq!(context.listings.len(), 1);
}

#[tokio::test]
async fn snapshot_caps_listing_blocks_at_ten() {
	let listings =
		(1..=37).map(|id| ListingFixture::new(id, &format!("Home {id}")).build()).collect();
	let service = service_with(
		MemoryListingStore::new(listings),
		Arc::new(ScriptedChat::replying("ok")),
	);

	let context = service.retrieve_context(QueryIntent::default()).await.unwrap();

	assert!(context.snapshot.contains("=== RELEVANT LISTINGS (10 found) ==="));
	assert_eq!(context.snapshot.matches("[Listing ID: ").count(), 10);
	assert!(context.snapshot.contains("- Total Active Listings: 37"));
}

#[tokio::test]
async fn long_descriptions_are_previewed() {
	let long = "A".repeat(400);
	let listings = vec![ListingFixture::new(1, "Wordy Home").description(&long).build()];
	let service = service_with(
		MemoryListingStore::new(listings),
		Arc::new(ScriptedChat::replying("ok")),
	);

	let context = service.retrieve_context(QueryIntent::default()).await.unwrap();
	let expected = format!("- Description: {}...", "A".repeat(200));

	assert!(context.snapshot.contains(&expected));
	assert!(!context.snapshot.contains(&"A".repeat(201)));
}

#[tokio::test]
async fn empty_inventory_still_produces_a_snapshot() {
	let service = service_with(
		MemoryListingStore::new(Vec::new()),
		Arc::new(ScriptedChat::replying("ok")),
	);

	let context = service.retrieve_context(QueryIntent::default()).await.unwrap();

	assert!(context.snapshot.contains("- Total Active Listings: 0"));
	assert!(context.snapshot.contains("- Average Price: $0"));
	assert!(!context.snapshot.contains("=== RELEVANT LISTINGS"));
	assert!(context.listings.is_empty());
}

#[tokio::test]
async fn missing_category_renders_as_not_available() {
	let listings = vec![ListingFixture::new(1, "Uncategorized Home").build()];
	let service = service_with(
		MemoryListingStore::new(listings),
		Arc::new(ScriptedChat::replying("ok")),
	);

	let context = service.retrieve_context(QueryIntent::default()).await.unwrap();

	assert!(context.snapshot.contains("- Category: N/A"));
}
