use rust_decimal::Decimal;
use time::OffsetDateTime;

/// A fully joined listing row: the listing itself plus its category name and
/// owner contact fields. Amenity names are attached after the main fetch.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ListingRecord {
	pub id: i64,
	pub title: String,
	pub description: String,
	pub price: Decimal,
	pub address: String,
	pub city: String,
	pub state: String,
	pub zip_code: String,
	pub country: String,
	pub bedrooms: i32,
	pub bathrooms: i32,
	pub square_feet: Decimal,
	pub year_built: Option<i32>,
	pub property_kind: String,
	pub listing_kind: String,
	pub status: String,
	pub main_image_url: Option<String>,
	pub is_featured: bool,
	pub created_at: OffsetDateTime,
	pub category_name: Option<String>,
	pub owner_name: String,
	pub owner_email: Option<String>,
	pub owner_phone: Option<String>,
	#[sqlx(default)]
	pub amenities: Vec<String>,
}
