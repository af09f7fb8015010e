//! Category-by-day page controller.
//!
//! Orchestrates one page load: read query parameters, resolve a
//! coordinate (named location, live resolution, or none), fetch the
//! category listing once, format it, render the results or no-results
//! template, then run the post-render effects.

use chrono::Datelike;
use serde_json::json;

use streetaid_client::DirectoryClient;
use streetaid_core::{named_location, Coordinate};
use streetaid_format::format_category;
use streetaid_render::{render_into, Document};

use crate::error::PageError;
use crate::location::{LocationProvider, LocationRequest};
use crate::query::PageQuery;
use crate::shell::PageShell;
use crate::state::{advance, PageState};

pub const RESULTS_TEMPLATE_ID: &str = "js-category-result-tpl";
pub const NO_RESULTS_TEMPLATE_ID: &str = "js-category-no-results-result-tpl";
pub const OUTPUT_ID: &str = "js-category-result-output";

/// Monday-based offset of the current weekday, as the day-rotation
/// expects it.
#[must_use]
pub fn today_offset() -> i64 {
    i64::from(chrono::Local::now().weekday().num_days_from_monday())
}

/// Run the category-by-day page load to completion.
///
/// Returns [`PageState::Done`] on success. Any fetch or render failure
/// redirects the shell to `error_route` and returns
/// [`PageState::Failed`]; a location failure merely degrades to an
/// un-located fetch.
pub async fn run_category_page<P, S>(
    client: &DirectoryClient,
    provider: &P,
    shell: &mut S,
    doc: &mut Document,
    address: &str,
    today_offset: i64,
    error_route: &str,
) -> PageState
where
    P: LocationProvider,
    S: PageShell,
{
    let mut state = PageState::Loading;
    shell.loading();

    match execute(client, provider, shell, doc, address, today_offset, &mut state).await {
        Ok(()) => {
            advance(&mut state, PageState::Done);
            state
        }
        Err(error) => {
            tracing::error!(%error, "category page load failed");
            shell.redirect(error_route);
            advance(&mut state, PageState::Failed);
            state
        }
    }
}

async fn execute<P, S>(
    client: &DirectoryClient,
    provider: &P,
    shell: &mut S,
    doc: &mut Document,
    address: &str,
    today_offset: i64,
    state: &mut PageState,
) -> Result<(), PageError>
where
    P: LocationProvider,
    S: PageShell,
{
    let query = PageQuery::from_address(address);
    let category = query.parameter("category").to_owned();

    let coordinate = resolve_coordinate(provider, query.parameter("location"), state).await;

    advance(state, PageState::Fetching);
    let services = client
        .category_services_by_day(&category, coordinate)
        .await?;

    advance(state, PageState::Formatting);
    let view = format_category(services, today_offset);
    let has_results = !view.days_services.is_empty();
    let template_id = if has_results {
        RESULTS_TEMPLATE_ID
    } else {
        NO_RESULTS_TEMPLATE_ID
    };
    let data = json!({ "organisations": serde_json::to_value(&view)? });

    advance(state, PageState::Rendering);
    render_into(doc, template_id, &data, OUTPUT_ID, || {
        if has_results {
            shell.init_accordion();
        }
    })?;

    shell.loaded();
    shell.init_share();
    Ok(())
}

/// Pick the coordinate for this page load.
///
/// A known named location short-circuits the provider entirely. An
/// unmatched `location` key falls through to live resolution, and a
/// resolution failure degrades to no coordinate at all.
async fn resolve_coordinate<P: LocationProvider>(
    provider: &P,
    location_key: &str,
    state: &mut PageState,
) -> Option<Coordinate> {
    if !location_key.is_empty() {
        if let Some(named) = named_location(location_key) {
            tracing::debug!(key = location_key, "using named location");
            return Some(named.coordinate());
        }
        tracing::debug!(
            key = location_key,
            "unknown location key; trying live resolution"
        );
    }

    if !provider.is_available() {
        return None;
    }

    advance(state, PageState::LocationResolving);
    match provider.locate(&LocationRequest::page_load()).await {
        Ok(coordinate) => Some(coordinate),
        Err(error) => {
            tracing::warn!(%error, "location resolution failed; continuing un-located");
            None
        }
    }
}
