// The filter engine: free-text search plus per-field criteria over the
// in-memory listing set. Pure functions, recomputed per request.

use serde::{Deserialize, Serialize};

use crate::models::Listing;

// One string per filter key, empty string meaning "no constraint".
// Field names follow the Romanian query-string parameters of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "pret_min", default)]
    pub price_min: String,
    #[serde(rename = "pret_max", default)]
    pub price_max: String,
    #[serde(rename = "categorie", default)]
    pub category: String,
    #[serde(rename = "marca", default)]
    pub brand: String,
    #[serde(rename = "an_min", default)]
    pub year_min: String,
    #[serde(rename = "an_max", default)]
    pub year_max: String,
    #[serde(rename = "km_max", default)]
    pub mileage_max: String,
    #[serde(rename = "locatie", default)]
    pub location: String,
    #[serde(rename = "combustibil", default)]
    pub fuel: String,
    #[serde(rename = "transmisie", default)]
    pub transmission: String,
    #[serde(rename = "motor_min", default)]
    pub engine_min: String,
    #[serde(rename = "motor_max", default)]
    pub engine_max: String,
    #[serde(rename = "stare", default)]
    pub condition: String,
    #[serde(rename = "vanzator", default)]
    pub seller_type: String,
    #[serde(rename = "disponibilitate", default)]
    pub availability: String,
}

impl FilterCriteria {
    pub const KEYS: &'static [&'static str] = &[
        "pret_min",
        "pret_max",
        "categorie",
        "marca",
        "an_min",
        "an_max",
        "km_max",
        "locatie",
        "combustibil",
        "transmisie",
        "motor_min",
        "motor_max",
        "stare",
        "vanzator",
        "disponibilitate",
    ];

    pub fn is_empty(&self) -> bool {
        Self::KEYS.iter().all(|k| self.get(k).is_empty())
    }

    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    pub fn get(&self, key: &str) -> &str {
        match key {
            "pret_min" => &self.price_min,
            "pret_max" => &self.price_max,
            "categorie" => &self.category,
            "marca" => &self.brand,
            "an_min" => &self.year_min,
            "an_max" => &self.year_max,
            "km_max" => &self.mileage_max,
            "locatie" => &self.location,
            "combustibil" => &self.fuel,
            "transmisie" => &self.transmission,
            "motor_min" => &self.engine_min,
            "motor_max" => &self.engine_max,
            "stare" => &self.condition,
            "vanzator" => &self.seller_type,
            "disponibilitate" => &self.availability,
            _ => "",
        }
    }

    // Returns false for an unknown key, leaving the criteria untouched.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let slot = match key {
            "pret_min" => &mut self.price_min,
            "pret_max" => &mut self.price_max,
            "categorie" => &mut self.category,
            "marca" => &mut self.brand,
            "an_min" => &mut self.year_min,
            "an_max" => &mut self.year_max,
            "km_max" => &mut self.mileage_max,
            "locatie" => &mut self.location,
            "combustibil" => &mut self.fuel,
            "transmisie" => &mut self.transmission,
            "motor_min" => &mut self.engine_min,
            "motor_max" => &mut self.engine_max,
            "stare" => &mut self.condition,
            "vanzator" => &mut self.seller_type,
            "disponibilitate" => &mut self.availability,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

// Sort keys selectable on the page. Absent selection keeps backend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    PriceAsc,
    PriceDesc,
    YearDesc,
    MileageAsc,
}

pub const SORT_ORDERS: &[SortOrder] = &[
    SortOrder::Newest,
    SortOrder::PriceAsc,
    SortOrder::PriceDesc,
    SortOrder::YearDesc,
    SortOrder::MileageAsc,
];

impl SortOrder {
    pub fn from_param(s: &str) -> Option<SortOrder> {
        match s {
            "recente" => Some(SortOrder::Newest),
            "pret_asc" => Some(SortOrder::PriceAsc),
            "pret_desc" => Some(SortOrder::PriceDesc),
            "an_desc" => Some(SortOrder::YearDesc),
            "km_asc" => Some(SortOrder::MileageAsc),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Newest => "recente",
            SortOrder::PriceAsc => "pret_asc",
            SortOrder::PriceDesc => "pret_desc",
            SortOrder::YearDesc => "an_desc",
            SortOrder::MileageAsc => "km_asc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Cel mai recent",
            SortOrder::PriceAsc => "Preț: Crescător",
            SortOrder::PriceDesc => "Preț: Descrescător",
            SortOrder::YearDesc => "An: Cel mai nou",
            SortOrder::MileageAsc => "Kilometraj: Cel mai mic",
        }
    }
}

// A non-numeric bound is treated as unset, matching everything.
fn parse_bound(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

fn matches_exact(filter: &str, value: &str) -> bool {
    filter.is_empty() || filter.to_lowercase() == value.to_lowercase()
}

fn matches_substring(filter: &str, value: &str) -> bool {
    filter.is_empty() || value.to_lowercase().contains(&filter.to_lowercase())
}

fn matches_min(filter: &str, value: u32) -> bool {
    parse_bound(filter).map_or(true, |min| value >= min)
}

fn matches_max(filter: &str, value: u32) -> bool {
    parse_bound(filter).map_or(true, |max| value <= max)
}

// Free-text search: OR across the searchable fields.
pub fn matches_search(listing: &Listing, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [
        &listing.title,
        &listing.brand,
        &listing.model,
        &listing.category,
        &listing.location,
        &listing.seller,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

// Field criteria: AND across every constraint.
pub fn matches_criteria(listing: &Listing, criteria: &FilterCriteria) -> bool {
    matches_min(&criteria.price_min, listing.price)
        && matches_max(&criteria.price_max, listing.price)
        && matches_exact(&criteria.category, &listing.category)
        && matches_exact(&criteria.brand, &listing.brand)
        && matches_min(&criteria.year_min, listing.year)
        && matches_max(&criteria.year_max, listing.year)
        && matches_max(&criteria.mileage_max, listing.mileage)
        && matches_substring(&criteria.location, &listing.location)
        && matches_exact(&criteria.fuel, &listing.fuel)
        && matches_exact(&criteria.transmission, &listing.transmission)
        && matches_min(&criteria.engine_min, listing.engine)
        && matches_max(&criteria.engine_max, listing.engine)
        && matches_exact(&criteria.condition, &listing.condition)
        && (criteria.seller_type.is_empty()
            || criteria.seller_type == listing.seller_type.as_str())
        && (criteria.availability.is_empty()
            || criteria.availability == listing.availability.as_str())
}

// Order-preserving filter over the loaded set.
pub fn filter_listings<'a>(
    listings: &'a [Listing],
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|l| matches_search(l, query) && matches_criteria(l, criteria))
        .collect()
}

// Stable sort of the filtered sequence, applied before pagination.
pub fn sort_listings(listings: &mut [&Listing], order: SortOrder) {
    match order {
        SortOrder::Newest => listings.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::PriceAsc => listings.sort_by_key(|l| l.price),
        SortOrder::PriceDesc => listings.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::YearDesc => listings.sort_by(|a, b| b.year.cmp(&a.year)),
        SortOrder::MileageAsc => listings.sort_by_key(|l| l.mileage),
    }
}
