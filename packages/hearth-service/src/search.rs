use rust_decimal::Decimal;

use hearth_domain::criteria::{ListingQuery, SearchCriteria};
use hearth_storage::models::ListingRecord;

use crate::{HearthService, ServiceResult, listing_kind_label, property_kind_label};

/// Compact listing view for search results and browse pages.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingCard {
	pub id: i64,
	pub title: String,
	pub price: Decimal,
	pub address: String,
	pub city: String,
	pub state: String,
	pub bedrooms: i32,
	pub bathrooms: i32,
	pub square_feet: Decimal,
	pub main_image_url: Option<String>,
	pub property_type: String,
	pub listing_type: String,
}
impl ListingCard {
	pub fn from_record(record: &ListingRecord) -> Self {
		Self {
			id: record.id,
			title: record.title.clone(),
			price: record.price,
			address: record.address.clone(),
			city: record.city.clone(),
			state: record.state.clone(),
			bedrooms: record.bedrooms,
			bathrooms: record.bathrooms,
			square_feet: record.square_feet,
			main_image_url: record.main_image_url.clone(),
			property_type: property_kind_label(&record.property_kind),
			listing_type: listing_kind_label(&record.listing_kind),
		}
	}
}

/// Full listing view: the card fields plus owner contact, category, and
/// amenities. Used for suggestion cards and the detail endpoint.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
	pub id: i64,
	pub title: String,
	pub description: String,
	pub price: Decimal,
	pub address: String,
	pub city: String,
	pub state: String,
	pub bedrooms: i32,
	pub bathrooms: i32,
	pub square_feet: Decimal,
	pub main_image_url: Option<String>,
	pub property_type: String,
	pub listing_type: String,
	pub is_featured: bool,
	pub category_name: Option<String>,
	pub agent_name: String,
	pub agent_email: Option<String>,
	pub agent_phone: Option<String>,
	pub amenities: Vec<String>,
}
impl ListingSummary {
	pub fn from_record(record: &ListingRecord) -> Self {
		Self {
			id: record.id,
			title: record.title.clone(),
			description: record.description.clone(),
			price: record.price,
			address: record.address.clone(),
			city: record.city.clone(),
			state: record.state.clone(),
			bedrooms: record.bedrooms,
			bathrooms: record.bathrooms,
			square_feet: record.square_feet,
			main_image_url: record.main_image_url.clone(),
			property_type: property_kind_label(&record.property_kind),
			listing_type: listing_kind_label(&record.listing_kind),
			is_featured: record.is_featured,
			category_name: record.category_name.clone(),
			agent_name: record.owner_name.clone(),
			agent_email: record.owner_email.clone(),
			agent_phone: record.owner_phone.clone(),
			amenities: record.amenities.clone(),
		}
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub items: Vec<ListingCard>,
}

impl HearthService {
	/// Multi-criteria search: active listings satisfying every present
	/// constraint, newest first. Malformed filter fields have already
	/// degraded to "unconstrained" during criteria normalization.
	pub async fn search(&self, criteria: SearchCriteria) -> ServiceResult<SearchResponse> {
		let query = criteria.into_query();
		let listings = self.store.find_active(&query).await?;

		Ok(SearchResponse { items: listings.iter().map(ListingCard::from_record).collect() })
	}

	pub async fn featured(&self) -> ServiceResult<SearchResponse> {
		let query = ListingQuery {
			featured_only: true,
			limit: Some(self.cfg.listings.featured_count),
			..ListingQuery::default()
		};
		let listings = self.store.find_active(&query).await?;

		Ok(SearchResponse { items: listings.iter().map(ListingCard::from_record).collect() })
	}

	pub async fn latest(&self) -> ServiceResult<SearchResponse> {
		let query =
			ListingQuery { limit: Some(self.cfg.listings.latest_count), ..ListingQuery::default() };
		let listings = self.store.find_active(&query).await?;

		Ok(SearchResponse { items: listings.iter().map(ListingCard::from_record).collect() })
	}

	pub async fn listing(&self, id: i64) -> ServiceResult<Option<ListingSummary>> {
		let record = self.store.find_by_id(id).await?;

		Ok(record.as_ref().map(ListingSummary::from_record))
	}
}
