use std::sync::Arc;

use rust_decimal::Decimal;

use hearth_domain::criteria::SearchCriteria;
use hearth_testkit::ScriptedChat;

use super::{mixed_inventory, service_with};

#[tokio::test]
async fn unconstrained_search_returns_all_active_newest_first() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let response = service.search(SearchCriteria::default()).await.unwrap();
	let ids: Vec<i64> = response.items.iter().map(|item| item.id).collect();

	// Listing 5 is sold; fixture ids double as recency order.
	assert_eq!(ids, vec![4, 3, 2, 1]);
}

#[tokio::test]
async fn present_constraints_combine_with_and() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let criteria = SearchCriteria {
		listing_kind: Some("rent".to_string()),
		city: Some("Miami".to_string()),
		max_price: Some(Decimal::new(2_000, 0)),
		..SearchCriteria::default()
	};
	let response = service.search(criteria).await.unwrap();

	assert_eq!(response.items.len(), 1);
	assert_eq!(response.items[0].id, 2);
	assert_eq!(response.items[0].listing_type, "Rent");
}

#[tokio::test]
async fn keyword_matches_case_insensitively_across_text_fields() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let criteria =
		SearchCriteria { keyword: Some("SUBURBAN".to_string()), ..SearchCriteria::default() };
	let response = service.search(criteria).await.unwrap();

	assert_eq!(response.items.len(), 1);
	assert_eq!(response.items[0].title, "Cozy Suburban House");
}

#[tokio::test]
async fn inactive_listings_never_surface() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let criteria =
		SearchCriteria { keyword: Some("Bungalow".to_string()), ..SearchCriteria::default() };
	let response = service.search(criteria).await.unwrap();

	assert!(response.items.is_empty());
}

#[tokio::test]
async fn city_and_kind_filters_still_respect_status() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	// Three Miami rentals exist, one delisted; only the two active ones show.
	let criteria = SearchCriteria {
		listing_kind: Some("rent".to_string()),
		city: Some("Miami".to_string()),
		..SearchCriteria::default()
	};
	let response = service.search(criteria).await.unwrap();
	let ids: Vec<i64> = response.items.iter().map(|item| item.id).collect();

	assert_eq!(ids, vec![4, 2]);
}

#[tokio::test]
async fn unrecognized_kind_values_degrade_to_unconstrained() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let criteria = SearchCriteria {
		property_kind: Some("castle".to_string()),
		listing_kind: Some("lease".to_string()),
		..SearchCriteria::default()
	};
	let response = service.search(criteria).await.unwrap();

	assert_eq!(response.items.len(), 4);
}

#[tokio::test]
async fn bedroom_bounds_are_inclusive() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let criteria = SearchCriteria {
		min_bedrooms: Some(2),
		max_bedrooms: Some(3),
		..SearchCriteria::default()
	};
	let response = service.search(criteria).await.unwrap();
	let ids: Vec<i64> = response.items.iter().map(|item| item.id).collect();

	assert_eq!(ids, vec![4, 1]);
}

#[tokio::test]
async fn price_bounds_are_inclusive() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let criteria = SearchCriteria {
		min_price: Some(Decimal::new(1_800, 0)),
		max_price: Some(Decimal::new(450_000, 0)),
		..SearchCriteria::default()
	};
	let response = service.search(criteria).await.unwrap();
	let ids: Vec<i64> = response.items.iter().map(|item| item.id).collect();

	assert_eq!(ids, vec![4, 2, 1]);
}
