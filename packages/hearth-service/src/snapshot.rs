//! Context retrieval for the chatbot: turns a derived query intent into a
//! textual knowledge snapshot grounded in live inventory, plus the matching
//! listings themselves.

use rust_decimal::prelude::ToPrimitive;

use hearth_domain::{format, intent::QueryIntent, listing::ListingKind};
use hearth_storage::models::ListingRecord;

use crate::{
	DESCRIPTION_PREVIEW_CHARS, HearthService, RETRIEVAL_LIMIT, SNAPSHOT_LISTING_LIMIT,
	ServiceResult, listing_kind_label, property_kind_label,
};

const SNAPSHOT_HEADER: &str = "=== HEARTH LISTINGS CONTEXT ===";

#[derive(Debug)]
pub struct RetrievedContext {
	pub snapshot: String,
	pub listings: Vec<ListingRecord>,
}

impl HearthService {
	/// Builds the knowledge snapshot fresh on every call; nothing is cached.
	/// A store failure propagates as an error — a fabricated empty snapshot
	/// would make the language model hallucinate inventory.
	pub async fn retrieve_context(&self, intent: QueryIntent) -> ServiceResult<RetrievedContext> {
		let total = self.store.count_active(None).await?;
		let for_sale = self.store.count_active(Some(ListingKind::Sale)).await?;
		let for_rent = self.store.count_active(Some(ListingKind::Rent)).await?;
		let prices = self.store.active_prices().await?;
		let categories = self.store.active_category_names().await?;
		let amenities = self.store.active_amenity_names().await?;
		let listings = self.store.find_active(&intent.to_query(RETRIEVAL_LIMIT)).await?;
		let cities = self.store.distinct_cities().await?;

		// Average, min, and max are computed here from the fetched price list
		// rather than with SQL aggregates; every store implementation then
		// shares one definition of the statistics.
		let average = if prices.is_empty() {
			0.0
		} else {
			prices.iter().filter_map(|price| price.to_f64()).sum::<f64>() / prices.len() as f64
		};
		let min_price = prices.iter().min().copied().unwrap_or_default();
		let max_price = prices.iter().max().copied().unwrap_or_default();

		let mut text = String::new();

		text.push_str(SNAPSHOT_HEADER);
		text.push_str("\n\nOVERALL STATISTICS:\n");
		text.push_str(&format!("- Total Active Listings: {total}\n"));
		text.push_str(&format!("- Listings For Sale: {for_sale}\n"));
		text.push_str(&format!("- Listings For Rent: {for_rent}\n"));
		text.push_str(&format!("- Average Price: {}\n", format::usd_f64(average)));
		text.push_str(&format!("\nAVAILABLE CATEGORIES: {}\n", categories.join(", ")));
		text.push_str(&format!("\nAVAILABLE AMENITIES: {}\n", amenities.join(", ")));

		if !listings.is_empty() {
			text.push_str(&format!("\n=== RELEVANT LISTINGS ({} found) ===\n", listings.len()));

			for listing in listings.iter().take(SNAPSHOT_LISTING_LIMIT) {
				text.push_str(&render_listing(listing));
			}
		}

		text.push_str(&format!(
			"\nPRICE RANGE: {} - {}\n",
			format::usd(min_price),
			format::usd(max_price)
		));
		text.push_str(&format!("\nAVAILABLE CITIES: {}\n", cities.join(", ")));

		Ok(RetrievedContext { snapshot: text, listings })
	}
}

fn render_listing(listing: &ListingRecord) -> String {
	let mut block = String::new();

	block.push_str(&format!("\n[Listing ID: {}]\n", listing.id));
	block.push_str(&format!("- Title: {}\n", listing.title));
	block.push_str(&format!("- Price: {}\n", format::usd(listing.price)));
	block.push_str(&format!(
		"- Type: {} ({})\n",
		property_kind_label(&listing.property_kind),
		listing_kind_label(&listing.listing_kind)
	));
	block.push_str(&format!(
		"- Location: {}, {}, {}\n",
		listing.address, listing.city, listing.state
	));
	block.push_str(&format!(
		"- Bedrooms: {}, Bathrooms: {}\n",
		listing.bedrooms, listing.bathrooms
	));
	block.push_str(&format!("- Size: {} sqft\n", format::grouped(listing.square_feet)));
	block.push_str(&format!(
		"- Category: {}\n",
		listing.category_name.as_deref().unwrap_or("N/A")
	));
	block.push_str(&format!(
		"- Featured: {}\n",
		if listing.is_featured { "Yes" } else { "No" }
	));

	if !listing.description.is_empty() {
		block.push_str(&format!(
			"- Description: {}\n",
			format::preview(&listing.description, DESCRIPTION_PREVIEW_CHARS)
		));
	}
	if !listing.amenities.is_empty() {
		block.push_str(&format!("- Amenities: {}\n", listing.amenities.join(", ")));
	}

	block
}
