// Data structures for marketplace listings.
// RawListing mirrors the backend row shape; Listing is the normalized
// display shape the filter engine and templates work with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Shown when a listing has no photos or the images column is null.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/2116475/pexels-photo-2116475.jpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerType {
    Individual,
    Dealer,
}

impl SellerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SellerType::Individual => "individual",
            SellerType::Dealer => "dealer",
        }
    }
}

// Stock status for dealer listings. The backend stores the Romanian values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "pe_stoc")]
    InStock,
    #[serde(rename = "la_comanda")]
    OnOrder,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "pe_stoc",
            Availability::OnOrder => "la_comanda",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::InStock => "Pe stoc",
            Availability::OnOrder => "La comandă",
        }
    }
}

// A listing row as returned by the backend REST endpoint.
// Image array and counters are nullable there, hence the Options.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListing {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub year: u32,
    pub mileage: u32,
    pub location: String,
    pub images: Option<Vec<String>>,
    pub seller_name: String,
    pub seller_id: String,
    pub seller_type: SellerType,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub engine_capacity: u32,
    pub fuel_type: String,
    pub transmission: String,
    pub condition: String,
    pub featured: Option<bool>,
    pub views_count: Option<u32>,
    pub favorites_count: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub availability: Option<Availability>,
}

// Normalized listing used everywhere past the fetch boundary.
// Immutable once loaded; a reload replaces the whole set.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub year: u32,
    pub mileage: u32,
    pub location: String,
    pub image: String,
    pub seller: String,
    pub seller_id: String,
    pub seller_type: SellerType,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub engine: u32,
    pub fuel: String,
    pub transmission: String,
    pub condition: String,
    pub featured: bool,
    pub views_count: u32,
    pub favorites_count: u32,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub availability: Availability,
}

impl Listing {
    pub fn from_raw(raw: RawListing) -> Self {
        let image = raw
            .images
            .as_ref()
            .and_then(|imgs| imgs.first().cloned())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        Listing {
            id: raw.id,
            title: raw.title,
            price: raw.price,
            year: raw.year,
            mileage: raw.mileage,
            location: raw.location,
            image,
            seller: raw.seller_name,
            seller_id: raw.seller_id,
            seller_type: raw.seller_type,
            category: raw.category,
            brand: raw.brand,
            model: raw.model,
            engine: raw.engine_capacity,
            fuel: raw.fuel_type,
            transmission: raw.transmission,
            condition: raw.condition,
            featured: raw.featured.unwrap_or(false),
            views_count: raw.views_count.unwrap_or(0),
            favorites_count: raw.favorites_count.unwrap_or(0),
            created_at: raw.created_at,
            status: raw.status,
            availability: raw.availability.unwrap_or(Availability::InStock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_json() -> serde_json::Value {
        json!({
            "id": "lst-1",
            "title": "Yamaha MT-07",
            "price": 6500,
            "year": 2021,
            "mileage": 12000,
            "location": "Cluj-Napoca",
            "images": ["https://img.example/mt07.jpg", "https://img.example/mt07-2.jpg"],
            "seller_name": "Moto Center",
            "seller_id": "usr-9",
            "seller_type": "dealer",
            "category": "naked",
            "brand": "Yamaha",
            "model": "MT-07",
            "engine_capacity": 689,
            "fuel_type": "Benzină",
            "transmission": "Manuală",
            "condition": "Excelentă",
            "featured": true,
            "views_count": 42,
            "favorites_count": 3,
            "created_at": "2025-05-10T09:30:00Z",
            "status": "active",
            "availability": "la_comanda"
        })
    }

    #[test]
    fn raw_listing_deserializes_and_normalizes() {
        let raw: RawListing = serde_json::from_value(raw_json()).unwrap();
        let listing = Listing::from_raw(raw);
        assert_eq!(listing.image, "https://img.example/mt07.jpg");
        assert_eq!(listing.seller, "Moto Center");
        assert_eq!(listing.engine, 689);
        assert_eq!(listing.availability, Availability::OnOrder);
        assert!(listing.featured);
    }

    #[test]
    fn normalization_applies_defaults() {
        let mut value = raw_json();
        let obj = value.as_object_mut().unwrap();
        obj.insert("images".into(), json!(null));
        obj.insert("featured".into(), json!(null));
        obj.insert("views_count".into(), json!(null));
        obj.insert("favorites_count".into(), json!(null));
        obj.insert("availability".into(), json!(null));

        let raw: RawListing = serde_json::from_value(value).unwrap();
        let listing = Listing::from_raw(raw);
        assert_eq!(listing.image, PLACEHOLDER_IMAGE);
        assert!(!listing.featured);
        assert_eq!(listing.views_count, 0);
        assert_eq!(listing.favorites_count, 0);
        assert_eq!(listing.availability, Availability::InStock);
    }

    #[test]
    fn empty_image_array_falls_back_to_placeholder() {
        let mut value = raw_json();
        value
            .as_object_mut()
            .unwrap()
            .insert("images".into(), json!([]));
        let raw: RawListing = serde_json::from_value(value).unwrap();
        assert_eq!(Listing::from_raw(raw).image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn seller_type_and_availability_wire_values() {
        assert_eq!(
            serde_json::from_value::<SellerType>(json!("individual")).unwrap(),
            SellerType::Individual
        );
        assert_eq!(SellerType::Dealer.as_str(), "dealer");
        assert_eq!(Availability::InStock.as_str(), "pe_stoc");
        assert_eq!(
            serde_json::from_value::<Availability>(json!("pe_stoc")).unwrap(),
            Availability::InStock
        );
    }
}
