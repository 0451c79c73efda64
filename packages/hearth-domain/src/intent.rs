//! Heuristic query-intent derivation for the chatbot retriever.
//!
//! Each category is an ordered rule table evaluated top to bottom with
//! first-match-wins semantics; categories are independent of each other.

use crate::{
	criteria::{ListingOrder, ListingQuery},
	listing::{ListingKind, PropertyKind},
};

const LISTING_KIND_RULES: &[(&[&str], ListingKind)] =
	&[(&["sale", "buy"], ListingKind::Sale), (&["rent"], ListingKind::Rent)];

const FEATURED_TERMS: &[&str] = &["featured", "best", "top"];

const PROPERTY_KIND_RULES: &[(&[&str], PropertyKind)] = &[
	(&["house", "home"], PropertyKind::House),
	(&["apartment", "apt"], PropertyKind::Apartment),
	(&["condo"], PropertyKind::Condo),
	(&["villa"], PropertyKind::Villa),
];

const ORDER_RULES: &[(&[&str], ListingOrder)] = &[
	(&["cheap", "affordable", "budget"], ListingOrder::PriceAsc),
	(&["luxury", "expensive", "premium"], ListingOrder::PriceDesc),
];

const MAX_BEDROOM_SCAN: i32 = 10;

/// Filter set inferred from a free-text query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryIntent {
	pub listing_kind: Option<ListingKind>,
	pub featured_only: bool,
	pub property_kind: Option<PropertyKind>,
	pub bedrooms: Option<i32>,
	pub order: ListingOrder,
}
impl QueryIntent {
	pub fn derive(query: &str) -> Self {
		let text = query.to_lowercase();

		Self {
			listing_kind: first_match(&text, LISTING_KIND_RULES),
			featured_only: FEATURED_TERMS.iter().any(|term| text.contains(term)),
			property_kind: first_match(&text, PROPERTY_KIND_RULES),
			bedrooms: scan_bedrooms(&text),
			order: first_match(&text, ORDER_RULES).unwrap_or_default(),
		}
	}

	pub fn to_query(self, limit: u32) -> ListingQuery {
		ListingQuery {
			listing_kind: self.listing_kind,
			featured_only: self.featured_only,
			property_kind: self.property_kind,
			bedrooms: self.bedrooms,
			order: self.order,
			limit: Some(limit),
			..ListingQuery::default()
		}
	}
}

fn first_match<T: Copy>(text: &str, rules: &[(&[&str], T)]) -> Option<T> {
	rules
		.iter()
		.find(|(terms, _)| terms.iter().any(|term| text.contains(term)))
		.map(|(_, effect)| *effect)
}

/// Picks the smallest bedroom count in 1..=10 whose phrase appears.
fn scan_bedrooms(text: &str) -> Option<i32> {
	(1..=MAX_BEDROOM_SCAN).find(|n| {
		[format!("{n} bed"), format!("{n}bed"), format!("{n} bedroom")]
			.iter()
			.any(|phrase| text.contains(phrase.as_str()))
	})
}
