//! Directory API response types.
//!
//! ## Observed shape
//!
//! All fields arrive camelCase. Boolean-ish facts on accommodation
//! `features` and `pricingAndRequirements` arrive as numeric `0`/`1`
//! flags, not JSON booleans — they are coerced during formatting, not
//! here. Text fields may carry HTML entities and lightweight markup
//! straight from the CMS; they pass through raw and are sanitized by the
//! formatter.
//!
//! The accommodation payload is wrapped in a `{ "data": { ... } }`
//! envelope. The `pricingAndRequirements`, `supportProvided` and
//! `residentCriteria` sections may be `null` for sparse records, so they
//! are modelled as `Option`.
//!
//! The category listing returns `daysServices` ordered Monday-first
//! (`monday == 0` upstream); rotation to "today first" happens in the
//! formatter.

use serde::Deserialize;

/// Top-level envelope for `GET {base}/accommodation/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccommodationResponse {
    pub data: AccommodationDetail,
}

/// Full detail for a single accommodation record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationDetail {
    pub name: String,
    pub address: Address,
    pub contact_information: ContactInformation,
    pub general_info: GeneralInfo,
    pub features: Features,
    #[serde(default)]
    pub pricing_and_requirements: Option<PricingAndRequirements>,
    #[serde(default)]
    pub support_provided: Option<SupportProvided>,
    #[serde(default)]
    pub resident_criteria: Option<ResidentCriteria>,
}

/// Postal address plus the coordinate used to centre the map widget.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street1: Option<String>,
    #[serde(default)]
    pub street2: Option<String>,
    #[serde(default)]
    pub street3: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postcode: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Free-text CMS field; may contain markup.
    #[serde(default)]
    pub additional_info: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInfo {
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub description: String,
}

/// Amenity flags for an accommodation record, `1` = offered.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default)]
    pub accepts_pets: u8,
    #[serde(default)]
    pub has_disabled_access: u8,
    #[serde(default)]
    pub has_single_rooms: u8,
    #[serde(default)]
    pub has_shared_rooms: u8,
    #[serde(default)]
    pub has_shower_bathroom_facilities: u8,
    #[serde(default)]
    pub has_access_to_kitchen: u8,
    #[serde(default)]
    pub has_flexible_meal_times: u8,
    #[serde(default)]
    pub has_lounge: u8,
    #[serde(default)]
    pub has_laundry_facilities: u8,
    #[serde(default)]
    pub provides_clean_bedding: u8,
    #[serde(default)]
    pub allows_visitors: u8,
    /// Free-text CMS field; may contain markup.
    #[serde(default)]
    pub additional_features: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingAndRequirements {
    #[serde(default)]
    pub food_is_included: u8,
    #[serde(default)]
    pub features_available_at_additional_cost: String,
    #[serde(default)]
    pub referral_notes: String,
    #[serde(default)]
    pub availability_of_meals: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportProvided {
    /// Enumerated support-type keys (e.g. `"alcohol"`, `"mental health"`)
    /// mapped to display names during formatting.
    #[serde(default)]
    pub support_offered: Vec<String>,
    #[serde(default)]
    pub support_info: String,
    #[serde(default)]
    pub has_on_site_manager: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentCriteria {
    #[serde(default)]
    pub accepts_men: bool,
    #[serde(default)]
    pub accepts_women: bool,
    #[serde(default)]
    pub accepts_couples: bool,
    #[serde(default)]
    pub accepts_young_people: bool,
}

/// Response from `GET {base}/category-services-by-day/{category}[...]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryServices {
    #[serde(default)]
    pub days_services: Vec<DayServices>,
}

/// One weekday's worth of service providers, Monday-based upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayServices {
    pub name: String,
    #[serde(default)]
    pub service_providers: Vec<ServiceProvider>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    pub name: String,
    /// Free-text CMS field; may contain markup.
    #[serde(default)]
    pub info: String,
    pub opening_times: OpeningTimes,
}

/// Opening window as zero-padded `HH:MM` strings, e.g. `"09:30"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningTimes {
    pub start_time: String,
    pub end_time: String,
}
