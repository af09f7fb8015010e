pub mod accommodation;
pub mod address;
pub mod category;
pub mod sanitize;
pub mod support;

pub use accommodation::{format_accommodation, AccommodationViewModel};
pub use address::format_address;
pub use category::{format_category, rotate_days_from, CategoryViewModel};
pub use sanitize::clean;
pub use support::support_type_label;
