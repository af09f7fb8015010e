//! Location resolution behind a provider seam.
//!
//! A page load makes at most one location request, with fixed options
//! and a 5-second budget enforced by the provider itself. There is no
//! retry: a timeout or denial surfaces to the controller, which falls
//! back to an un-located fetch.

use streetaid_core::Coordinate;
use thiserror::Error;

/// Options for a single location request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequest {
    pub high_accuracy: bool,
    pub maximum_age_ms: u64,
    pub timeout_ms: u64,
}

impl LocationRequest {
    /// The fixed options every page load uses: high accuracy, no cached
    /// result, 5-second timeout.
    #[must_use]
    pub fn page_load() -> Self {
        Self {
            high_accuracy: true,
            maximum_age_ms: 0,
            timeout_ms: 5_000,
        }
    }
}

#[derive(Debug, Error)]
pub enum LocationError {
    /// The platform exposes no location capability.
    #[error("location capability unavailable")]
    Unavailable,

    /// The request did not resolve within its timeout budget.
    #[error("location request timed out")]
    TimedOut,

    /// The user or platform denied the request.
    #[error("location request denied")]
    Denied,
}

/// A source of the device's current position.
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    /// Whether the platform exposes a location capability at all.
    fn is_available(&self) -> bool;

    /// Resolve the current position once. No retry on failure.
    async fn locate(&self, request: &LocationRequest) -> Result<Coordinate, LocationError>;
}

/// The no-capability provider: `is_available` is `false` and `locate`
/// always errors. Used where no live geolocation exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unavailable;

impl LocationProvider for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    async fn locate(&self, _request: &LocationRequest) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unavailable)
    }
}
