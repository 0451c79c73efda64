pub mod chat;
pub mod prompt;
pub mod search;
pub mod snapshot;

use std::{future::Future, pin::Pin, sync::Arc};

use rust_decimal::Decimal;

pub use chat::{APOLOGY_MESSAGE, ChatMessageRequest, ChatMessageResponse};
pub use search::{ListingCard, ListingSummary, SearchResponse};

use hearth_config::{ChatProviderConfig, Config};
use hearth_domain::{
	criteria::ListingQuery,
	listing::{ListingKind, PropertyKind},
};
use hearth_providers::chat as chat_provider;
use hearth_storage::{db::Db, models::ListingRecord, queries};

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Snapshot detail blocks and the heuristic retrieval set are both capped at
/// 10 to bound prompt size; suggestion cards handed to the caller at 5.
pub const RETRIEVAL_LIMIT: u32 = 10;
pub const SNAPSHOT_LISTING_LIMIT: usize = 10;
pub const SUGGESTION_LIMIT: usize = 5;
pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Read-only query surface over the listing inventory. The marketplace CRUD
/// layer owns writes; this subsystem never issues any.
pub trait ListingStore
where
	Self: Send + Sync,
{
	fn find_active<'a>(
		&'a self,
		query: &'a ListingQuery,
	) -> BoxFuture<'a, color_eyre::Result<Vec<ListingRecord>>>;

	fn find_by_id(&self, id: i64) -> BoxFuture<'_, color_eyre::Result<Option<ListingRecord>>>;

	fn count_active(
		&self,
		listing_kind: Option<ListingKind>,
	) -> BoxFuture<'_, color_eyre::Result<i64>>;

	fn active_prices(&self) -> BoxFuture<'_, color_eyre::Result<Vec<Decimal>>>;

	fn distinct_cities(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>>;

	fn active_category_names(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>>;

	fn active_amenity_names(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>>;
}

pub trait ChatProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a ChatProviderConfig,
		system_prompt: &'a str,
		user_message: &'a str,
	) -> BoxFuture<'a, hearth_providers::Result<String>>;
}

#[derive(Clone)]
pub struct Providers {
	pub chat: Arc<dyn ChatProvider>,
}
impl Providers {
	pub fn new(chat: Arc<dyn ChatProvider>) -> Self {
		Self { chat }
	}
}
impl Default for Providers {
	fn default() -> Self {
		Self { chat: Arc::new(DefaultProviders { client: reqwest::Client::new() }) }
	}
}

/// Default provider set. Holds the process-wide HTTP client so generation
/// calls reuse connections instead of building a client per request.
struct DefaultProviders {
	client: reqwest::Client,
}
impl ChatProvider for DefaultProviders {
	fn complete<'a>(
		&'a self,
		cfg: &'a ChatProviderConfig,
		system_prompt: &'a str,
		user_message: &'a str,
	) -> BoxFuture<'a, hearth_providers::Result<String>> {
		Box::pin(chat_provider::complete(&self.client, cfg, system_prompt, user_message))
	}
}

/// Postgres-backed listing store.
pub struct PgListingStore {
	db: Db,
}
impl PgListingStore {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
impl ListingStore for PgListingStore {
	fn find_active<'a>(
		&'a self,
		query: &'a ListingQuery,
	) -> BoxFuture<'a, color_eyre::Result<Vec<ListingRecord>>> {
		Box::pin(queries::find_active(&self.db, query))
	}

	fn find_by_id(&self, id: i64) -> BoxFuture<'_, color_eyre::Result<Option<ListingRecord>>> {
		Box::pin(queries::find_by_id(&self.db, id))
	}

	fn count_active(
		&self,
		listing_kind: Option<ListingKind>,
	) -> BoxFuture<'_, color_eyre::Result<i64>> {
		Box::pin(queries::count_active(&self.db, listing_kind))
	}

	fn active_prices(&self) -> BoxFuture<'_, color_eyre::Result<Vec<Decimal>>> {
		Box::pin(queries::active_prices(&self.db))
	}

	fn distinct_cities(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>> {
		Box::pin(queries::distinct_cities(&self.db))
	}

	fn active_category_names(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>> {
		Box::pin(queries::active_category_names(&self.db))
	}

	fn active_amenity_names(&self) -> BoxFuture<'_, color_eyre::Result<Vec<String>>> {
		Box::pin(queries::active_amenity_names(&self.db))
	}
}

pub struct HearthService {
	pub cfg: Config,
	pub store: Arc<dyn ListingStore>,
	pub providers: Providers,
}
impl HearthService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, store: Arc::new(PgListingStore::new(db)), providers: Providers::default() }
	}

	pub fn with_parts(cfg: Config, store: Arc<dyn ListingStore>, providers: Providers) -> Self {
		Self { cfg, store, providers }
	}
}

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String },
	Storage { message: String },
	Provider { message: String },
}
impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message } => write!(f, "Invalid request: {message}"),
			Self::Storage { message } => write!(f, "Storage error: {message}"),
			Self::Provider { message } => write!(f, "Provider error: {message}"),
		}
	}
}
impl std::error::Error for ServiceError {}
impl From<color_eyre::Report> for ServiceError {
	fn from(err: color_eyre::Report) -> Self {
		Self::Storage { message: err.to_string() }
	}
}
impl From<hearth_providers::Error> for ServiceError {
	fn from(err: hearth_providers::Error) -> Self {
		Self::Provider { message: err.to_string() }
	}
}

pub(crate) fn property_kind_label(raw: &str) -> String {
	PropertyKind::parse(raw).map(|kind| kind.label().to_string()).unwrap_or_else(|| raw.to_string())
}

pub(crate) fn listing_kind_label(raw: &str) -> String {
	ListingKind::parse(raw).map(|kind| kind.label().to_string()).unwrap_or_else(|| raw.to_string())
}
