//! Accommodation-detail view models.
//!
//! Each section of the raw API payload is reshaped into a new view-model
//! struct: CMS text sanitized, numeric flags coerced to booleans, and
//! `has_content` presence flags derived so templates can skip empty
//! sections. Formatting never mutates its input.

use serde::Serialize;

use streetaid_client::{
    AccommodationDetail, Address, ContactInformation, Features, GeneralInfo,
    PricingAndRequirements, ResidentCriteria, SupportProvided,
};

use crate::address::format_address;
use crate::sanitize::clean;
use crate::support::support_type_label;

/// Render-ready accommodation detail, one per page load.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationViewModel {
    pub name: String,
    pub address: AddressView,
    pub contact_information: ContactInformationView,
    pub general_info: GeneralInfoView,
    pub features: FeaturesView,
    pub pricing_and_requirements: Option<PricingView>,
    pub support_provided: Option<SupportView>,
    pub resident_criteria: Option<ResidentCriteriaView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressView {
    pub formatted_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformationView {
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub additional_info: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInfoView {
    pub synopsis: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesView {
    pub accepts_pets: bool,
    pub has_disabled_access: bool,
    pub has_single_rooms: bool,
    pub has_shared_rooms: bool,
    pub has_shower_bathroom_facilities: bool,
    pub has_access_to_kitchen: bool,
    pub has_flexible_meal_times: bool,
    pub has_lounge: bool,
    pub has_laundry_facilities: bool,
    pub provides_clean_bedding: bool,
    pub allows_visitors: bool,
    pub additional_features: String,
    pub has_individual_features: bool,
    pub has_content: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingView {
    pub food_is_included: bool,
    pub features_available_at_additional_cost: String,
    pub referral_notes: String,
    pub availability_of_meals: String,
    pub has_content: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportView {
    pub support_offered: Vec<String>,
    pub support_info: String,
    pub has_on_site_manager: bool,
    pub has_content: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentCriteriaView {
    pub accepts_men: bool,
    pub accepts_women: bool,
    pub accepts_couples: bool,
    pub accepts_young_people: bool,
    pub has_content: bool,
}

/// Format a full accommodation record for rendering.
#[must_use]
pub fn format_accommodation(raw: AccommodationDetail) -> AccommodationViewModel {
    AccommodationViewModel {
        name: raw.name,
        address: format_address_view(&raw.address),
        contact_information: format_contact_information(raw.contact_information),
        general_info: format_general_info(raw.general_info),
        features: format_features(raw.features),
        pricing_and_requirements: raw
            .pricing_and_requirements
            .map(format_pricing_and_requirements),
        support_provided: raw.support_provided.map(format_support_provided),
        resident_criteria: raw.resident_criteria.map(format_resident_criteria),
    }
}

fn format_address_view(address: &Address) -> AddressView {
    AddressView {
        formatted_address: format_address(address),
        latitude: address.latitude,
        longitude: address.longitude,
    }
}

fn format_contact_information(raw: ContactInformation) -> ContactInformationView {
    ContactInformationView {
        telephone: raw.telephone,
        email: raw.email,
        additional_info: clean(&raw.additional_info),
    }
}

fn format_general_info(raw: GeneralInfo) -> GeneralInfoView {
    GeneralInfoView {
        synopsis: clean(&raw.synopsis),
        description: clean(&raw.description),
    }
}

fn format_features(raw: Features) -> FeaturesView {
    let flags = [
        raw.accepts_pets,
        raw.has_disabled_access,
        raw.has_single_rooms,
        raw.has_shared_rooms,
        raw.has_shower_bathroom_facilities,
        raw.has_access_to_kitchen,
        raw.has_flexible_meal_times,
        raw.has_lounge,
        raw.has_laundry_facilities,
        raw.provides_clean_bedding,
        raw.allows_visitors,
    ];
    let has_individual_features = flags.iter().any(|&flag| flag == 1);
    let additional_features = clean(&raw.additional_features);
    let has_content = has_individual_features || !additional_features.is_empty();

    FeaturesView {
        accepts_pets: raw.accepts_pets == 1,
        has_disabled_access: raw.has_disabled_access == 1,
        has_single_rooms: raw.has_single_rooms == 1,
        has_shared_rooms: raw.has_shared_rooms == 1,
        has_shower_bathroom_facilities: raw.has_shower_bathroom_facilities == 1,
        has_access_to_kitchen: raw.has_access_to_kitchen == 1,
        has_flexible_meal_times: raw.has_flexible_meal_times == 1,
        has_lounge: raw.has_lounge == 1,
        has_laundry_facilities: raw.has_laundry_facilities == 1,
        provides_clean_bedding: raw.provides_clean_bedding == 1,
        allows_visitors: raw.allows_visitors == 1,
        additional_features,
        has_individual_features,
        has_content,
    }
}

fn format_pricing_and_requirements(raw: PricingAndRequirements) -> PricingView {
    let food_is_included = raw.food_is_included == 1;
    let features_available_at_additional_cost = clean(&raw.features_available_at_additional_cost);
    let referral_notes = clean(&raw.referral_notes);
    let availability_of_meals = clean(&raw.availability_of_meals);

    let has_content = food_is_included
        || !features_available_at_additional_cost.is_empty()
        || !referral_notes.is_empty()
        || !availability_of_meals.is_empty();

    PricingView {
        food_is_included,
        features_available_at_additional_cost,
        referral_notes,
        availability_of_meals,
        has_content,
    }
}

fn format_support_provided(raw: SupportProvided) -> SupportView {
    // Unmapped keys are a data error; log and skip so one bad code does
    // not take the whole page down.
    let support_offered: Vec<String> = raw
        .support_offered
        .iter()
        .filter_map(|key| match support_type_label(key) {
            Some(label) => Some(label.to_owned()),
            None => {
                tracing::warn!(key = %key, "unknown support type key; skipping");
                None
            }
        })
        .collect();

    let support_info = clean(&raw.support_info);
    let has_content =
        !support_offered.is_empty() || !support_info.is_empty() || raw.has_on_site_manager;

    SupportView {
        support_offered,
        support_info,
        has_on_site_manager: raw.has_on_site_manager,
        has_content,
    }
}

fn format_resident_criteria(raw: ResidentCriteria) -> ResidentCriteriaView {
    let has_content =
        raw.accepts_men || raw.accepts_women || raw.accepts_couples || raw.accepts_young_people;

    ResidentCriteriaView {
        accepts_men: raw.accepts_men,
        accepts_women: raw.accepts_women,
        accepts_couples: raw.accepts_couples,
        accepts_young_people: raw.accepts_young_people,
        has_content,
    }
}
