use std::sync::Arc;

use hearth_providers::chat::NOT_CONFIGURED_MESSAGE;
use hearth_service::{
	APOLOGY_MESSAGE, ChatMessageRequest, HearthService, Providers, ServiceError,
};
use hearth_testkit::{FailingListingStore, ListingFixture, MemoryListingStore, ScriptedChat};

use super::{chat_provider, mixed_inventory, service_with, test_config};

fn request(message: &str) -> ChatMessageRequest {
	ChatMessageRequest { message: message.to_string(), context: None }
}

#[tokio::test]
async fn blank_message_is_rejected_before_any_work() {
	let chat = Arc::new(ScriptedChat::replying("should not be called"));
	let service = service_with(mixed_inventory(), chat.clone());

	let err = service.process_message(request("   ")).await.unwrap_err();

	assert!(matches!(err, ServiceError::InvalidRequest { .. }));
	assert_eq!(chat.call_count(), 0);
}

#[tokio::test]
async fn successful_pipeline_returns_reply_and_suggestions() {
	let chat = Arc::new(ScriptedChat::replying("Here are some great rentals!"));
	let service = service_with(mixed_inventory(), chat.clone());

	let response = service.process_message(request("apartments for rent")).await.unwrap();

	assert!(response.success);
	assert_eq!(response.response, "Here are some great rentals!");
	assert_eq!(chat.call_count(), 1);

	// Suggestions come from the store via the derived intent, not from the
	// generated text: "rent" plus "apartment" leaves only listing 2.
	let ids: Vec<i64> = response.suggested_properties.iter().map(|item| item.id).collect();

	assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn suggestions_ignore_generated_text_entirely() {
	let chat = Arc::new(ScriptedChat::replying(
		"Check out [Listing ID: 999] and [Listing ID: 1000], absolute steals!",
	));
	let service = service_with(mixed_inventory(), chat);

	let response = service.process_message(request("anything for rent?")).await.unwrap();
	let ids: Vec<i64> = response.suggested_properties.iter().map(|item| item.id).collect();

	assert_eq!(ids, vec![4, 2]);
}

#[tokio::test]
async fn suggestions_cap_at_five() {
	let listings =
		(1..=9).map(|id| ListingFixture::new(id, &format!("Home {id}")).build()).collect();
	let service = service_with(
		MemoryListingStore::new(listings),
		Arc::new(ScriptedChat::replying("plenty to choose from")),
	);

	let response = service.process_message(request("show me homes")).await.unwrap();

	assert_eq!(response.suggested_properties.len(), 5);
	assert_eq!(response.suggested_properties[0].id, 9);
}

#[tokio::test]
async fn cheap_query_orders_suggestions_price_ascending() {
	let service =
		service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("budget picks")));

	let response = service.process_message(request("something cheap")).await.unwrap();
	let ids: Vec<i64> = response.suggested_properties.iter().map(|item| item.id).collect();

	assert_eq!(ids, vec![2, 4, 1, 3]);
}

#[tokio::test]
async fn bedroom_phrase_filters_suggestions() {
	let service = service_with(mixed_inventory(), Arc::new(ScriptedChat::replying("ok")));

	let response =
		service.process_message(request("a place with 2 bedrooms please")).await.unwrap();
	let ids: Vec<i64> = response.suggested_properties.iter().map(|item| item.id).collect();

	assert_eq!(ids, vec![4]);
}

#[tokio::test]
async fn provider_failure_yields_apology_without_leaking_detail() {
	let chat = Arc::new(ScriptedChat::failing(500, "upstream exploded: secret-dsn"));
	let service = service_with(mixed_inventory(), chat.clone());

	let response = service.process_message(request("find me a house")).await.unwrap();

	assert!(!response.success);
	assert_eq!(response.response, APOLOGY_MESSAGE);
	assert!(response.suggested_properties.is_empty());
	assert!(!response.response.contains("secret-dsn"));
	assert_eq!(chat.call_count(), 1);
}

#[tokio::test]
async fn store_failure_yields_apology_not_an_error() {
	let chat = Arc::new(ScriptedChat::replying("never reached"));
	let service = service_with(FailingListingStore, chat.clone());

	let response = service.process_message(request("find me a house")).await.unwrap();

	assert!(!response.success);
	assert_eq!(response.response, APOLOGY_MESSAGE);
	assert!(response.suggested_properties.is_empty());
	// Context retrieval fails before the generation call is made.
	assert_eq!(chat.call_count(), 0);
}

#[tokio::test]
async fn missing_credential_disables_chatbot_without_network() {
	let mut cfg = test_config();

	cfg.providers.chat = chat_provider("");

	// Default providers with an unroutable endpoint: a fixed reply proves the
	// gateway short-circuited before any request was built.
	let service =
		HearthService::with_parts(cfg, Arc::new(mixed_inventory()), Providers::default());

	let response = service.process_message(request("hello")).await.unwrap();

	assert!(response.success);
	assert_eq!(response.response, NOT_CONFIGURED_MESSAGE);
}
