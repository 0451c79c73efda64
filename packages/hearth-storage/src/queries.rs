//! Read-only listing queries. The marketplace CRUD surface owns all writes;
//! nothing in this module mutates data.

use std::collections::HashMap;

use color_eyre::Result;
use rust_decimal::Decimal;
use sqlx::QueryBuilder;

use hearth_domain::{
	criteria::{ListingOrder, ListingQuery},
	listing::ListingKind,
};

use crate::{db::Db, models::ListingRecord};

const LISTING_SELECT: &str = "\
SELECT
	l.id,
	l.title,
	l.description,
	l.price,
	l.address,
	l.city,
	l.state,
	l.zip_code,
	l.country,
	l.bedrooms,
	l.bathrooms,
	l.square_feet,
	l.year_built,
	l.property_kind,
	l.listing_kind,
	l.status,
	l.main_image_url,
	l.is_featured,
	l.created_at,
	c.name AS category_name,
	u.display_name AS owner_name,
	u.email AS owner_email,
	u.phone AS owner_phone
FROM listings l
JOIN users u ON u.id = l.owner_id
LEFT JOIN categories c ON c.id = l.category_id
WHERE l.status = 'active'";

pub async fn find_active(db: &Db, query: &ListingQuery) -> Result<Vec<ListingRecord>> {
	let mut builder = QueryBuilder::new(LISTING_SELECT);

	if let Some(keyword) = &query.keyword {
		let pattern = format!("%{keyword}%");

		builder.push(" AND (l.title ILIKE ");
		builder.push_bind(pattern.clone());
		builder.push(" OR l.description ILIKE ");
		builder.push_bind(pattern.clone());
		builder.push(" OR l.address ILIKE ");
		builder.push_bind(pattern);
		builder.push(")");
	}
	if let Some(kind) = query.property_kind {
		builder.push(" AND l.property_kind = ");
		builder.push_bind(kind.as_str());
	}
	if let Some(kind) = query.listing_kind {
		builder.push(" AND l.listing_kind = ");
		builder.push_bind(kind.as_str());
	}
	if let Some(city) = &query.city {
		builder.push(" AND l.city ILIKE ");
		builder.push_bind(format!("%{city}%"));
	}
	if let Some(min_price) = query.min_price {
		builder.push(" AND l.price >= ");
		builder.push_bind(min_price);
	}
	if let Some(max_price) = query.max_price {
		builder.push(" AND l.price <= ");
		builder.push_bind(max_price);
	}
	if let Some(bedrooms) = query.bedrooms {
		builder.push(" AND l.bedrooms = ");
		builder.push_bind(bedrooms);
	}
	if let Some(min_bedrooms) = query.min_bedrooms {
		builder.push(" AND l.bedrooms >= ");
		builder.push_bind(min_bedrooms);
	}
	if let Some(max_bedrooms) = query.max_bedrooms {
		builder.push(" AND l.bedrooms <= ");
		builder.push_bind(max_bedrooms);
	}
	if query.featured_only {
		builder.push(" AND l.is_featured");
	}

	builder.push(match query.order {
		ListingOrder::CreatedDesc => " ORDER BY l.created_at DESC, l.id DESC",
		ListingOrder::PriceAsc => " ORDER BY l.price ASC, l.id DESC",
		ListingOrder::PriceDesc => " ORDER BY l.price DESC, l.id DESC",
	});

	if let Some(limit) = query.limit {
		builder.push(" LIMIT ");
		builder.push_bind(limit as i64);
	}

	let mut listings: Vec<ListingRecord> = builder.build_query_as().fetch_all(&db.pool).await?;

	attach_amenities_slice(db, &mut listings).await?;

	Ok(listings)
}

pub async fn find_by_id(db: &Db, id: i64) -> Result<Option<ListingRecord>> {
	let mut builder = QueryBuilder::new(LISTING_SELECT);

	builder.push(" AND l.id = ");
	builder.push_bind(id);

	let record: Option<ListingRecord> = builder.build_query_as().fetch_optional(&db.pool).await?;
	let Some(mut record) = record else {
		return Ok(None);
	};

	attach_amenities_slice(db, std::slice::from_mut(&mut record)).await?;

	Ok(Some(record))
}

pub async fn count_active(db: &Db, listing_kind: Option<ListingKind>) -> Result<i64> {
	let mut builder =
		QueryBuilder::new("SELECT COUNT(*) FROM listings WHERE status = 'active'");

	if let Some(kind) = listing_kind {
		builder.push(" AND listing_kind = ");
		builder.push_bind(kind.as_str());
	}

	let count: i64 = builder.build_query_scalar().fetch_one(&db.pool).await?;

	Ok(count)
}

/// Prices of every active listing. Average, min, and max are computed by the
/// caller over this list rather than with SQL aggregates, so all store
/// implementations share one definition of the statistics.
pub async fn active_prices(db: &Db) -> Result<Vec<Decimal>> {
	let prices: Vec<Decimal> =
		sqlx::query_scalar("SELECT price FROM listings WHERE status = 'active'")
			.fetch_all(&db.pool)
			.await?;

	Ok(prices)
}

pub async fn distinct_cities(db: &Db) -> Result<Vec<String>> {
	let cities: Vec<String> = sqlx::query_scalar(
		"SELECT DISTINCT city FROM listings WHERE status = 'active' ORDER BY city",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(cities)
}

pub async fn active_category_names(db: &Db) -> Result<Vec<String>> {
	let names: Vec<String> =
		sqlx::query_scalar("SELECT name FROM categories WHERE is_active ORDER BY name")
			.fetch_all(&db.pool)
			.await?;

	Ok(names)
}

pub async fn active_amenity_names(db: &Db) -> Result<Vec<String>> {
	let names: Vec<String> =
		sqlx::query_scalar("SELECT name FROM amenities WHERE is_active ORDER BY name")
			.fetch_all(&db.pool)
			.await?;

	Ok(names)
}

async fn attach_amenities_slice(db: &Db, listings: &mut [ListingRecord]) -> Result<()> {
	if listings.is_empty() {
		return Ok(());
	}

	let ids: Vec<i64> = listings.iter().map(|listing| listing.id).collect();
	let rows: Vec<(i64, String)> = sqlx::query_as(
		"\
SELECT la.listing_id, a.name
FROM listing_amenities la
JOIN amenities a ON a.id = la.amenity_id
WHERE la.listing_id = ANY($1)
ORDER BY a.name",
	)
	.bind(&ids)
	.fetch_all(&db.pool)
	.await?;
	let mut by_listing: HashMap<i64, Vec<String>> = HashMap::new();

	for (listing_id, name) in rows {
		by_listing.entry(listing_id).or_default().push(name);
	}

	for listing in listings {
		if let Some(names) = by_listing.remove(&listing.id) {
			listing.amenities = names;
		}
	}

	Ok(())
}
