//! Hotel records stored by the favorites and comparison lists.
//!
//! Both lists key their entries on [`HotelId`]; every other field is
//! display data that the stores carry through untouched.

mod id;
mod summary;

pub use id::HotelId;
pub use summary::{ComparisonHotel, HotelSummary, ListEntry};
