//! Shared display helpers for hotel listings.

use crate::hotel::{ComparisonHotel, HotelSummary};
use crate::ui::{Align, Table};

/// Render a star classification as glyphs, `-` for unrated.
///
/// A fractional part of one half or more shows as `½`. Values above five
/// are capped.
pub fn stars(count: f64) -> String {
    if !count.is_finite() || count <= 0.0 {
        return "-".to_string();
    }

    let count = count.min(5.0);
    let whole = count.trunc();
    let mut glyphs = "★".repeat(whole as usize);
    if count - whole >= 0.5 {
        glyphs.push('½');
    }
    glyphs
}

/// Render an optional price with two decimals.
pub fn price(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

/// Render a guest rating, `-` for unrated.
pub fn rating(value: f64) -> String {
    if value > 0.0 {
        format!("{:.1}", value)
    } else {
        "-".to_string()
    }
}

/// Build the table for the favorites listing.
pub fn favorites_table(hotels: &[HotelSummary]) -> Table {
    let mut table = Table::new(vec!["ID", "Name", "Location", "Stars", "Rating"])
        .align(0, Align::Right)
        .align(4, Align::Right);

    for hotel in hotels {
        table.add_row(vec![
            hotel.id.to_string(),
            hotel.name.clone(),
            hotel.location.clone(),
            stars(hotel.star_rating),
            rating(hotel.rating),
        ]);
    }

    table
}

/// Build the table for the comparison listing.
pub fn comparison_table(hotels: &[ComparisonHotel]) -> Table {
    let mut table = Table::new(vec![
        "ID", "Name", "Stars", "Rating", "Reviews", "Price", "Was", "Discount", "Location",
        "Features",
    ])
    .align(0, Align::Right)
    .align(3, Align::Right)
    .align(5, Align::Right)
    .align(6, Align::Right)
    .align(7, Align::Right)
    .align(8, Align::Right);

    for hotel in hotels {
        let reviews = match (&hotel.review_label, hotel.review_count) {
            (Some(label), Some(count)) => format!("{} ({})", label, count),
            (Some(label), None) => label.clone(),
            (None, Some(count)) => count.to_string(),
            (None, None) => "-".to_string(),
        };

        table.add_row(vec![
            hotel.id().to_string(),
            hotel.summary.name.clone(),
            stars(hotel.summary.star_rating),
            rating(hotel.summary.rating),
            reviews,
            price(hotel.price),
            price(hotel.original_price),
            hotel
                .discount
                .map(|d| format!("{}%", d))
                .unwrap_or_else(|| "-".to_string()),
            hotel
                .location_score
                .map(|s| format!("{:.1}", s))
                .unwrap_or_else(|| "-".to_string()),
            hotel.features.join(", "),
        ]);
    }

    table
}
