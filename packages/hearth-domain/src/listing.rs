//! Listing enumerations with total string conversion. Parsing never fails
//! hard: an unrecognized value yields `None`, which every consumer treats as
//! "unconstrained" rather than rejecting the whole request.

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
	House,
	Apartment,
	Condo,
	Townhouse,
	Villa,
	Land,
	Commercial,
	Other,
}
impl PropertyKind {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.trim().to_lowercase().as_str() {
			"house" => Some(Self::House),
			"apartment" => Some(Self::Apartment),
			"condo" => Some(Self::Condo),
			"townhouse" => Some(Self::Townhouse),
			"villa" => Some(Self::Villa),
			"land" => Some(Self::Land),
			"commercial" => Some(Self::Commercial),
			"other" => Some(Self::Other),
			_ => None,
		}
	}

	/// Storage representation.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::House => "house",
			Self::Apartment => "apartment",
			Self::Condo => "condo",
			Self::Townhouse => "townhouse",
			Self::Villa => "villa",
			Self::Land => "land",
			Self::Commercial => "commercial",
			Self::Other => "other",
		}
	}

	/// Display form used in prompts, deep links, and cards.
	pub fn label(self) -> &'static str {
		match self {
			Self::House => "House",
			Self::Apartment => "Apartment",
			Self::Condo => "Condo",
			Self::Townhouse => "Townhouse",
			Self::Villa => "Villa",
			Self::Land => "Land",
			Self::Commercial => "Commercial",
			Self::Other => "Other",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
	Sale,
	Rent,
}
impl ListingKind {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.trim().to_lowercase().as_str() {
			"sale" => Some(Self::Sale),
			"rent" => Some(Self::Rent),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Sale => "sale",
			Self::Rent => "rent",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Sale => "Sale",
			Self::Rent => "Rent",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
	Pending,
	Active,
	Sold,
	Rented,
	Inactive,
}
impl ListingStatus {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.trim().to_lowercase().as_str() {
			"pending" => Some(Self::Pending),
			"active" => Some(Self::Active),
			"sold" => Some(Self::Sold),
			"rented" => Some(Self::Rented),
			"inactive" => Some(Self::Inactive),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Pending => "pending",
			Self::Active => "active",
			Self::Sold => "sold",
			Self::Rented => "rented",
			Self::Inactive => "inactive",
		}
	}
}
