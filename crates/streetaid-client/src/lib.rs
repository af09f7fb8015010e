pub mod client;
pub mod error;
pub mod types;

pub use client::DirectoryClient;
pub use error::FetchError;
pub use types::{
    AccommodationDetail, AccommodationResponse, Address, CategoryServices, ContactInformation,
    DayServices, Features, GeneralInfo, OpeningTimes, PricingAndRequirements, ResidentCriteria,
    ServiceProvider, SupportProvided,
};
