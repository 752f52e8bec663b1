//! Library integration tests.

use std::rc::Rc;

use stayshelf::hotel::{ComparisonHotel, HotelId, HotelSummary};
use stayshelf::lists::{
    AddOutcome, ComparisonStore, FavoritesStore, COMPARISON_KEY, FAVORITES_KEY, MAX_HOTELS,
};
use stayshelf::storage::{FileStorage, MemoryStorage, SlotStorage};
use stayshelf::StayshelfError;
use tempfile::TempDir;

fn summary(id: i64) -> HotelSummary {
    HotelSummary::new(id, format!("Hotel {}", id))
        .with_location("Vienna")
        .with_rating(8.0)
        .with_stars(3.0)
}

fn comparison(id: i64) -> ComparisonHotel {
    ComparisonHotel::new(summary(id)).with_price(90.0, Some(120.0))
}

#[test]
fn error_types_are_public() {
    let err = StayshelfError::InvalidSlotKey { key: "x".into() };
    assert!(err.to_string().contains("x"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> stayshelf::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn favorites_round_trip_through_files() {
    let temp = TempDir::new().unwrap();

    {
        let mut store = FavoritesStore::open(FileStorage::new(temp.path()));
        store.add_favorite(summary(3));
        store.add_favorite(summary(1));
        store.add_favorite(summary(2));
    }

    let store = FavoritesStore::open(FileStorage::new(temp.path()));
    assert_eq!(store.favorites(), &[summary(3), summary(1), summary(2)]);
}

#[test]
fn comparison_round_trip_through_files() {
    let temp = TempDir::new().unwrap();

    {
        let mut store = ComparisonStore::open(FileStorage::new(temp.path()));
        for id in [30, 10, 20] {
            assert_eq!(store.add_hotel(comparison(id)), AddOutcome::Added);
        }
    }

    let store = ComparisonStore::open(FileStorage::new(temp.path()));
    assert_eq!(
        store.hotels(),
        &[comparison(30), comparison(10), comparison(20)]
    );
}

#[test]
fn stores_share_one_backend_without_interfering() {
    let storage = Rc::new(MemoryStorage::new());
    let mut favorites = FavoritesStore::open(Rc::clone(&storage));
    let mut compared = ComparisonStore::open(Rc::clone(&storage));

    favorites.add_favorite(summary(1));
    compared.add_hotel(comparison(2));

    assert!(favorites.is_favorite(HotelId(1)));
    assert!(!favorites.is_favorite(HotelId(2)));
    assert!(compared.is_in_comparison(HotelId(2)));
    assert!(!compared.is_in_comparison(HotelId(1)));
    assert!(storage.contains(FAVORITES_KEY));
    assert!(storage.contains(COMPARISON_KEY));
}

#[test]
fn comparison_capacity_is_four() {
    let storage = MemoryStorage::new();
    let mut store = ComparisonStore::open(&storage);

    for id in 1..=(MAX_HOTELS as i64) {
        store.add_hotel(comparison(id));
    }

    assert_eq!(store.add_hotel(comparison(99)), AddOutcome::Full);
    assert_eq!(store.count(), 4);
    assert!(!store.can_add_more());

    store.clear_all();
    assert!(store.can_add_more());
    assert!(!store.is_in_comparison(HotelId(1)));
}

#[test]
fn corrupt_slots_recover_asymmetrically() {
    let storage = MemoryStorage::new()
        .with_slot(FAVORITES_KEY, "{{{")
        .with_slot(COMPARISON_KEY, "{{{");

    let favorites = FavoritesStore::open(&storage);
    let compared = ComparisonStore::open(&storage);

    assert_eq!(favorites.count(), 0);
    assert_eq!(compared.count(), 0);
    assert_eq!(storage.read(FAVORITES_KEY).unwrap(), Some("{{{".to_string()));
    assert!(storage.read(COMPARISON_KEY).unwrap().is_none());
}

#[test]
fn corrupt_comparison_file_is_removed() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    storage.write(COMPARISON_KEY, "[{\"id\": \"not a number\"}]").unwrap();

    let store = ComparisonStore::open(&storage);

    assert_eq!(store.count(), 0);
    assert!(!storage.slot_path(COMPARISON_KEY).unwrap().exists());
}

#[test]
fn persisted_slot_is_plain_json_array() {
    let storage = MemoryStorage::new();
    let mut store = FavoritesStore::open(&storage);
    store.add_favorite(HotelSummary::new(5, "Plain"));

    let raw = storage.read(FAVORITES_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(value.is_array());
    assert_eq!(value[0]["id"], 5);
    assert_eq!(value[0]["starRating"], 0.0);
}

#[test]
fn slots_written_by_a_browser_are_readable() {
    let raw = r#"[
        {"id": 1, "name": "Alpha", "image": "/a.jpg", "location": "Oslo", "rating": 9.2, "starRating": 5},
        {"id": 2, "name": "Beta", "image": "/b.jpg", "location": "Bergen", "rating": 8.1, "starRating": 4}
    ]"#;
    let storage = MemoryStorage::new().with_slot(FAVORITES_KEY, raw);

    let store = FavoritesStore::open(&storage);

    assert_eq!(store.count(), 2);
    assert_eq!(store.favorites()[1].location, "Bergen");
    assert_eq!(store.favorites()[0].star_rating, 5.0);
}

#[test]
fn loose_browser_comparison_slot_is_kept() {
    let raw = r#"[
        {"id": 1, "name": "Alpha", "starRating": 4.5, "price": 140},
        {"id": 2, "starRating": 3, "discount": -5},
        {"id": 3, "name": "Gamma", "rating": null, "reviewCount": 12}
    ]"#;
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    storage.write(COMPARISON_KEY, raw).unwrap();

    let store = ComparisonStore::open(&storage);

    assert_eq!(store.count(), 3);
    assert_eq!(store.hotels()[0].summary.star_rating, 4.5);
    assert!(store.hotels()[1].summary.name.is_empty());
    assert_eq!(store.hotels()[1].discount, Some(-5.0));
    assert!(storage.slot_path(COMPARISON_KEY).unwrap().exists());
}

#[test]
fn non_finite_rating_survives_reopen_from_disk() {
    let temp = TempDir::new().unwrap();
    {
        let storage = FileStorage::new(temp.path());
        let mut favorites = FavoritesStore::open(&storage);
        favorites.add_favorite(HotelSummary::new(1, "A").with_rating(9.0));
        favorites.add_favorite(HotelSummary::new(2, "B").with_rating(f64::NAN));
        favorites.add_favorite(HotelSummary::new(3, "C").with_rating(f64::INFINITY));

        let mut compared = ComparisonStore::open(&storage);
        compared.add_hotel(ComparisonHotel::from(HotelSummary::new(1, "A").with_rating(f64::NAN)));
        compared.add_hotel(
            ComparisonHotel::from(HotelSummary::new(2, "B")).with_price(f64::NAN, None),
        );
    }

    let storage = FileStorage::new(temp.path());
    let favorites = FavoritesStore::open(&storage);
    let compared = ComparisonStore::open(&storage);

    let ids: Vec<i64> = favorites.favorites().iter().map(|h| h.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(favorites.favorites()[1].rating, 0.0);
    assert_eq!(compared.count(), 2);
    assert!(compared.hotels()[1].price.is_none());
}
