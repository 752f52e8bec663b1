//! Hotel summary shapes.

use serde::{Deserialize, Deserializer, Serialize};

use super::HotelId;

/// Read a number that may have been stored as `null`.
///
/// serde_json writes NaN and infinities as `null`, so a record holding one
/// reads back with the field's default instead of failing the whole slot.
fn number_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// A record that can live in a deduplicated hotel list.
pub trait ListEntry {
    /// The key used for duplicate detection and removal.
    fn hotel_id(&self) -> HotelId;
}

/// The hotel shape stored in the favorites list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSummary {
    /// Unique hotel ID.
    pub id: HotelId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Human readable location.
    #[serde(default)]
    pub location: String,
    /// Guest review rating.
    #[serde(default, deserialize_with = "number_or_default")]
    pub rating: f64,
    /// Star classification, possibly fractional.
    #[serde(default, deserialize_with = "number_or_default")]
    pub star_rating: f64,
}

impl HotelSummary {
    /// Create a summary with only the required fields set.
    pub fn new(id: impl Into<HotelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            location: String::new(),
            rating: 0.0,
            star_rating: 0.0,
        }
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the guest rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the star classification.
    pub fn with_stars(mut self, stars: f64) -> Self {
        self.star_rating = stars;
        self
    }
}

impl ListEntry for HotelSummary {
    fn hotel_id(&self) -> HotelId {
        self.id
    }
}

/// The richer hotel shape stored in the comparison list.
///
/// Serializes with the same keys as [`HotelSummary`] plus the optional
/// pricing and review fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonHotel {
    #[serde(flatten)]
    pub summary: HotelSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Discount in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_score: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub perks: Vec<String>,
}

impl ComparisonHotel {
    /// Wrap a summary with no comparison details.
    pub fn new(summary: HotelSummary) -> Self {
        Self {
            summary,
            review_label: None,
            review_count: None,
            price: None,
            original_price: None,
            discount: None,
            location_score: None,
            features: Vec::new(),
            perks: Vec::new(),
        }
    }

    /// Get the hotel ID.
    pub fn id(&self) -> HotelId {
        self.summary.id
    }

    /// Set the nightly price and, optionally, the pre-discount price.
    pub fn with_price(mut self, price: f64, original_price: Option<f64>) -> Self {
        self.price = Some(price);
        self.original_price = original_price;
        self
    }

    /// Set the review label and count.
    pub fn with_reviews(mut self, label: impl Into<String>, count: u32) -> Self {
        self.review_label = Some(label.into());
        self.review_count = Some(f64::from(count));
        self
    }

    /// Add features.
    pub fn with_features(mut self, features: Vec<impl Into<String>>) -> Self {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Add perks.
    pub fn with_perks(mut self, perks: Vec<impl Into<String>>) -> Self {
        self.perks = perks.into_iter().map(Into::into).collect();
        self
    }
}

impl From<HotelSummary> for ComparisonHotel {
    fn from(summary: HotelSummary) -> Self {
        Self::new(summary)
    }
}

impl ListEntry for ComparisonHotel {
    fn hotel_id(&self) -> HotelId {
        self.summary.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_camel_case_keys() {
        let hotel = HotelSummary::new(7, "Harbour View").with_stars(4.0);
        let json = serde_json::to_value(&hotel).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["starRating"], 4.0);
        assert!(json.get("star_rating").is_none());
    }

    #[test]
    fn summary_defaults_display_fields() {
        let hotel: HotelSummary = serde_json::from_str(r#"{"id": 3, "name": "Inn"}"#).unwrap();

        assert_eq!(hotel.id, HotelId(3));
        assert!(hotel.location.is_empty());
        assert_eq!(hotel.rating, 0.0);
    }

    #[test]
    fn summary_requires_id() {
        let result = serde_json::from_str::<HotelSummary>(r#"{"name": "Nameless"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn comparison_hotel_flattens_summary() {
        let hotel = ComparisonHotel::new(HotelSummary::new(9, "Cliff House"))
            .with_price(180.0, Some(240.0))
            .with_reviews("Excellent", 812);
        let json = serde_json::to_value(&hotel).unwrap();

        assert_eq!(json["id"], 9);
        assert_eq!(json["name"], "Cliff House");
        assert_eq!(json["originalPrice"], 240.0);
        assert_eq!(json["reviewLabel"], "Excellent");
        assert!(json.get("summary").is_none());
        assert!(json.get("discount").is_none());
    }

    #[test]
    fn comparison_hotel_reads_browser_shape() {
        let json = r#"{
            "id": 12,
            "name": "Old Town Suites",
            "location": "Prague",
            "rating": 8.9,
            "starRating": 4,
            "price": 129.5,
            "discount": 15,
            "locationScore": 9.4,
            "features": ["Free WiFi", "Spa"],
            "perks": ["Free cancellation"]
        }"#;
        let hotel: ComparisonHotel = serde_json::from_str(json).unwrap();

        assert_eq!(hotel.id(), HotelId(12));
        assert_eq!(hotel.summary.location, "Prague");
        assert_eq!(hotel.discount, Some(15.0));
        assert_eq!(hotel.features, vec!["Free WiFi", "Spa"]);
        assert!(hotel.review_label.is_none());
    }

    #[test]
    fn non_finite_rating_reads_back_as_default() {
        let hotel = HotelSummary::new(2, "Foggy Lodge").with_rating(f64::NAN);
        let json = serde_json::to_string(&hotel).unwrap();
        assert!(json.contains(r#""rating":null"#));

        let back: HotelSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, HotelId(2));
        assert_eq!(back.rating, 0.0);
    }

    #[test]
    fn comparison_hotel_tolerates_loose_display_fields() {
        let json = r#"{
            "id": 21,
            "rating": null,
            "starRating": 4.5,
            "discount": -5,
            "reviewCount": 310,
            "price": null
        }"#;
        let hotel: ComparisonHotel = serde_json::from_str(json).unwrap();

        assert_eq!(hotel.id(), HotelId(21));
        assert!(hotel.summary.name.is_empty());
        assert_eq!(hotel.summary.rating, 0.0);
        assert_eq!(hotel.summary.star_rating, 4.5);
        assert_eq!(hotel.discount, Some(-5.0));
        assert_eq!(hotel.review_count, Some(310.0));
        assert!(hotel.price.is_none());
    }

    #[test]
    fn list_entry_ids_match() {
        let summary = HotelSummary::new(5, "A");
        let comparison = ComparisonHotel::from(summary.clone());
        assert_eq!(summary.hotel_id(), comparison.hotel_id());
    }
}
