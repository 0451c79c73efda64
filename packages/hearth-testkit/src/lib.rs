//! Hermetic test doubles for the listing store and the chat provider.
//! `MemoryListingStore` mirrors the Postgres predicate semantics so
//! acceptance tests exercise the real service logic without a database.

use std::{
	cmp::Ordering,
	sync::atomic::{AtomicUsize, Ordering as AtomicOrdering},
};

use color_eyre::eyre;
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime, macros::datetime};

use hearth_config::ChatProviderConfig;
use hearth_domain::{
	criteria::{ListingOrder, ListingQuery},
	listing::{ListingKind, ListingStatus, PropertyKind},
};
use hearth_service::{BoxFuture, ChatProvider, ListingStore};
use hearth_storage::models::ListingRecord;

const FIXTURE_EPOCH: OffsetDateTime = datetime!(2026-01-01 00:00:00 UTC);

/// Builder for listing rows with sensible defaults: an active three-bedroom
/// house for sale in Springfield.
#[derive(Debug, Clone)]
pub struct ListingFixture {
	record: ListingRecord,
}
impl ListingFixture {
	pub fn new(id: i64, title: &str) -> Self {
		Self {
			record: ListingRecord {
				id,
				title: title.to_string(),
				description: String::new(),
				price: Decimal::new(250_000, 0),
				address: format!("{id} Main St"),
				city: "Springfield".to_string(),
				state: "IL".to_string(),
				zip_code: "62701".to_string(),
				country: "USA".to_string(),
				bedrooms: 3,
				bathrooms: 2,
				square_feet: Decimal::new(1_500, 0),
				year_built: None,
				property_kind: PropertyKind::House.as_str().to_string(),
				listing_kind: ListingKind::Sale.as_str().to_string(),
				status: ListingStatus::Active.as_str().to_string(),
				main_image_url: None,
				is_featured: false,
				// Higher ids default to newer listings.
				created_at: FIXTURE_EPOCH + Duration::hours(id),
				category_name: None,
				owner_name: "Alex Agent".to_string(),
				owner_email: Some("alex@hearth.estate".to_string()),
				owner_phone: None,
				amenities: Vec::new(),
			},
		}
	}

	pub fn description(mut self, description: &str) -> Self {
		self.record.description = description.to_string();

		self
	}

	pub fn price(mut self, price: i64) -> Self {
		self.record.price = Decimal::new(price, 0);

		self
	}

	pub fn address(mut self, address: &str) -> Self {
		self.record.address = address.to_string();

		self
	}

	pub fn city(mut self, city: &str) -> Self {
		self.record.city = city.to_string();

		self
	}

	pub fn bedrooms(mut self, bedrooms: i32) -> Self {
		self.record.bedrooms = bedrooms;

		self
	}

	pub fn property_kind(mut self, kind: PropertyKind) -> Self {
		self.record.property_kind = kind.as_str().to_string();

		self
	}

	pub fn listing_kind(mut self, kind: ListingKind) -> Self {
		self.record.listing_kind = kind.as_str().to_string();

		self
	}

	pub fn status(mut self, status: ListingStatus) -> Self {
		self.record.status = status.as_str().to_string();

		self
	}

	pub fn featured(mut self) -> Self {
		self.record.is_featured = true;

		self
	}

	pub fn created_at(mut self, created_at: OffsetDateTime) -> Self {
		self.record.created_at = created_at;

		self
	}

	pub fn category(mut self, name: &str) -> Self {
		self.record.category_name = Some(name.to_string());

		self
	}

	pub fn amenities(mut self, names: &[&str]) -> Self {
		self.record.amenities = names.iter().map(|name| name.to_string()).collect();

		self
	}

	pub fn build(self) -> ListingRecord {
		self.record
	}
}

#[derive(Default)]
pub struct MemoryListingStore {
	listings: Vec<ListingRecord>,
	categories: Vec<String>,
	amenities: Vec<String>,
}
impl MemoryListingStore {
	pub fn new(listings: Vec<ListingRecord>) -> Self {
		Self { listings, categories: Vec::new(), amenities: Vec::new() }
	}

	pub fn with_catalog(mut self, categories: &[&str], amenities: &[&str]) -> Self {
		self.categories = categories.iter().map(|name| name.to_string()).collect();
		self.amenities = amenities.iter().map(|name| name.to_string()).collect();

		self
	}

	fn active(&self) -> impl Iterator<Item = &ListingRecord> {
		self.listings
			.iter()
			.filter(|listing| listing.status == ListingStatus::Active.as_str())
	}

	fn select(&self, query: &ListingQuery) -> Vec<ListingRecord> {
		let mut matched: Vec<ListingRecord> =
			self.active().filter(|listing| matches(listing, query)).cloned().collect();

		matched.sort_by(|a, b| compare(a, b, query.order));

		if let Some(limit) = query.limit {
			matched.truncate(limit as usize);
		}

		matched
	}
}
impl ListingStore for MemoryListingStore {
	fn find_active<'a>(
		&'a self,
		query: &'a ListingQuery,
	) -> BoxFuture<'a, color_eyre::Result<Vec<ListingRecord>>> {
		Box::pin(async move { Ok(self.select(query)) })
	}

	fn find_by_id(&self, id: i64) -> BoxFuture<'_, color_eyre::Result<Option<ListingRecord>>> {
		Box::pin(async move { Ok(self.active().find(|listing| listing.id == id).cloned()) })
	}

	fn count_active(
		&self,
		listing_kind: Option<ListingKind>,
	) -> BoxFuture<'_, color_eyre::Result<i64>> {
		Box::pin(async move {
			let count = self
				.active()
				.filter(|listing| {
					listing_kind
						.map(|kind| listing.listing_kind == kind.as_str())
						.unwrap_or(true)
				})
				.count();

			Ok(count as i64)
		})
	}

	fn active_prices(&self) -> BoxFuture<'_, color_eyre::Result<Vec<Decimal>>> {
		Box::pin(async move { Ok(self.active().map(|listing| listing.price).collect()) })
	}

	fn distinct_cities(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>> {
		Box::pin(async move {
			let mut cities: Vec<String> =
				self.active().map(|listing| listing.city.clone()).collect();

			cities.sort();
			cities.dedup();

			Ok(cities)
		})
	}

	fn active_category_names(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>> {
		Box::pin(async move { Ok(self.categories.clone()) })
	}

	fn active_amenity_names(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>> {
		Box::pin(async move { Ok(self.amenities.clone()) })
	}
}

/// A store whose every method fails, for exercising the data-access failure
/// path.
pub struct FailingListingStore;
impl ListingStore for FailingListingStore {
	fn find_active<'a>(
		&'a self,
		_query: &'a ListingQuery,
	) -> BoxFuture<'a, color_eyre::Result<Vec<ListingRecord>>> {
		Box::pin(async { Err(eyre::eyre!("listing store is unreachable")) })
	}

	fn find_by_id(&self, _id: i64) -> BoxFuture<'_, color_eyre::Result<Option<ListingRecord>>> {
		Box::pin(async { Err(eyre::eyre!("listing store is unreachable")) })
	}

	fn count_active(
		&self,
		_listing_kind: Option<ListingKind>,
	) -> BoxFuture<'_, color_eyre::Result<i64>> {
		Box::pin(async { Err(eyre::eyre!("listing store is unreachable")) })
	}

	fn active_prices(&self) -> BoxFuture<'_, color_eyre::Result<Vec<Decimal>>> {
		Box::pin(async { Err(eyre::eyre!("listing store is unreachable")) })
	}

	fn distinct_cities(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>> {
		Box::pin(async { Err(eyre::eyre!("listing store is unreachable")) })
	}

	fn active_category_names(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>> {
		Box::pin(async { Err(eyre::eyre!("listing store is unreachable")) })
	}

	fn active_amenity_names(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>> {
		Box::pin(async { Err(eyre::eyre!("listing store is unreachable")) })
	}
}

/// Scripted chat provider: replays a fixed outcome and counts invocations.
pub struct ScriptedChat {
	script: ScriptedOutcome,
	calls: AtomicUsize,
}

#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
	Reply(String),
	Fail { status: u16, body: String },
}

impl ScriptedChat {
	pub fn replying(text: &str) -> Self {
		Self { script: ScriptedOutcome::Reply(text.to_string()), calls: AtomicUsize::new(0) }
	}

	pub fn failing(status: u16, body: &str) -> Self {
		Self {
			script: ScriptedOutcome::Fail { status, body: body.to_string() },
			calls: AtomicUsize::new(0),
		}
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(AtomicOrdering::SeqCst)
	}
}
impl ChatProvider for ScriptedChat {
	fn complete<'a>(
		&'a self,
		_cfg: &'a ChatProviderConfig,
		_system_prompt: &'a str,
		_user_message: &'a str,
	) -> BoxFuture<'a, hearth_providers::Result<String>> {
		Box::pin(async move {
			self.calls.fetch_add(1, AtomicOrdering::SeqCst);

			match self.script.clone() {
				ScriptedOutcome::Reply(text) => Ok(text),
				ScriptedOutcome::Fail { status, body } =>
					Err(hearth_providers::Error::Generation { status, body }),
			}
		})
	}
}

fn matches(listing: &ListingRecord, query: &ListingQuery) -> bool {
	if let Some(keyword) = &query.keyword {
		let needle = keyword.to_lowercase();
		let haystack = [&listing.title, &listing.description, &listing.address];

		if !haystack.iter().any(|field| field.to_lowercase().contains(&needle)) {
			return false;
		}
	}
	if let Some(kind) = query.property_kind
		&& listing.property_kind != kind.as_str()
	{
		return false;
	}
	if let Some(kind) = query.listing_kind
		&& listing.listing_kind != kind.as_str()
	{
		return false;
	}
	if let Some(city) = &query.city
		&& !listing.city.to_lowercase().contains(&city.to_lowercase())
	{
		return false;
	}
	if let Some(min_price) = query.min_price
		&& listing.price < min_price
	{
		return false;
	}
	if let Some(max_price) = query.max_price
		&& listing.price > max_price
	{
		return false;
	}
	if let Some(bedrooms) = query.bedrooms
		&& listing.bedrooms != bedrooms
	{
		return false;
	}
	if let Some(min_bedrooms) = query.min_bedrooms
		&& listing.bedrooms < min_bedrooms
	{
		return false;
	}
	if let Some(max_bedrooms) = query.max_bedrooms
		&& listing.bedrooms > max_bedrooms
	{
		return false;
	}
	if query.featured_only && !listing.is_featured {
		return false;
	}

	true
}

fn compare(a: &ListingRecord, b: &ListingRecord, order: ListingOrder) -> Ordering {
	let primary = match order {
		ListingOrder::CreatedDesc => b.created_at.cmp(&a.created_at),
		ListingOrder::PriceAsc => a.price.cmp(&b.price),
		ListingOrder::PriceDesc => b.price.cmp(&a.price),
	};

	primary.then_with(|| b.id.cmp(&a.id))
}
