//! Page-shell side effects.
//!
//! Everything a controller does to the page outside the rendered
//! output element goes through this seam: the loading spinner,
//! navigation, and the post-render widget hooks (map, share buttons,
//! accordion). Tests substitute a recording implementation.

use streetaid_core::Coordinate;

pub trait PageShell {
    /// Show the loading indicator.
    fn loading(&mut self);

    /// Hide the loading indicator.
    fn loaded(&mut self);

    /// Navigate to another route (used for the error page).
    fn redirect(&mut self, route: &str);

    /// Initialize the map widget centred on the given coordinate.
    fn init_map(&mut self, centre: Coordinate);

    /// Enable the share controls.
    fn init_share(&mut self);

    /// Wire up the results accordion.
    fn init_accordion(&mut self);
}

/// Shell implementation for headless use: every effect is logged and
/// nothing else happens.
#[derive(Debug, Default)]
pub struct TracingShell {
    redirected_to: Option<String>,
}

impl TracingShell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the page was redirected, if anywhere.
    #[must_use]
    pub fn redirected_to(&self) -> Option<&str> {
        self.redirected_to.as_deref()
    }
}

impl PageShell for TracingShell {
    fn loading(&mut self) {
        tracing::info!("loading indicator shown");
    }

    fn loaded(&mut self) {
        tracing::info!("loading indicator stopped");
    }

    fn redirect(&mut self, route: &str) {
        tracing::info!(route, "redirecting");
        self.redirected_to = Some(route.to_owned());
    }

    fn init_map(&mut self, centre: Coordinate) {
        tracing::info!(
            latitude = centre.latitude,
            longitude = centre.longitude,
            "map initialized"
        );
    }

    fn init_share(&mut self) {
        tracing::info!("share controls enabled");
    }

    fn init_accordion(&mut self) {
        tracing::info!("accordion wired up");
    }
}
