use rust_decimal::Decimal;

use crate::listing::{ListingKind, PropertyKind};

/// Raw search form input as it arrives from the outside. Every field is
/// independently optional; kind fields are kept as strings so that a bad
/// value degrades to "unconstrained" instead of failing the request.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
	pub keyword: Option<String>,
	pub property_kind: Option<String>,
	pub listing_kind: Option<String>,
	pub city: Option<String>,
	pub min_price: Option<Decimal>,
	pub max_price: Option<Decimal>,
	pub min_bedrooms: Option<i32>,
	pub max_bedrooms: Option<i32>,
}
impl SearchCriteria {
	/// Normalizes into the store predicate. Blank strings and unparsable
	/// enum values drop to `None`; present constraints combine with AND.
	pub fn into_query(self) -> ListingQuery {
		ListingQuery {
			keyword: non_blank(self.keyword),
			property_kind: self.property_kind.as_deref().and_then(PropertyKind::parse),
			listing_kind: self.listing_kind.as_deref().and_then(ListingKind::parse),
			city: non_blank(self.city),
			min_price: self.min_price,
			max_price: self.max_price,
			min_bedrooms: self.min_bedrooms,
			max_bedrooms: self.max_bedrooms,
			..ListingQuery::default()
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingOrder {
	#[default]
	CreatedDesc,
	PriceAsc,
	PriceDesc,
}

/// The single predicate type every listing store implementation consumes.
/// Semantics: listings are always restricted to `active` status; each present
/// field ANDs a further constraint; `keyword` and `city` are case-insensitive
/// substring matches; numeric bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
	pub keyword: Option<String>,
	pub property_kind: Option<PropertyKind>,
	pub listing_kind: Option<ListingKind>,
	pub city: Option<String>,
	pub min_price: Option<Decimal>,
	pub max_price: Option<Decimal>,
	pub min_bedrooms: Option<i32>,
	pub max_bedrooms: Option<i32>,
	pub bedrooms: Option<i32>,
	pub featured_only: bool,
	pub order: ListingOrder,
	pub limit: Option<u32>,
}

fn non_blank(value: Option<String>) -> Option<String> {
	value.and_then(|raw| {
		let trimmed = raw.trim();

		if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
	})
}
