//! Accommodation-detail page controller.

use serde_json::to_value;

use streetaid_client::DirectoryClient;
use streetaid_core::Coordinate;
use streetaid_format::format_accommodation;
use streetaid_render::{render_into, Document};

use crate::error::PageError;
use crate::query::PageQuery;
use crate::shell::PageShell;
use crate::state::{advance, PageState};

pub const TEMPLATE_ID: &str = "js-template";
pub const OUTPUT_ID: &str = "js-template-placeholder";

/// Run the accommodation-detail page load to completion.
///
/// Returns [`PageState::Done`] on success. Any fetch or render failure
/// redirects the shell to `error_route` and returns
/// [`PageState::Failed`].
pub async fn run_accommodation_page<S>(
    client: &DirectoryClient,
    shell: &mut S,
    doc: &mut Document,
    address: &str,
    error_route: &str,
) -> PageState
where
    S: PageShell,
{
    let mut state = PageState::Loading;
    shell.loading();

    match execute(client, shell, doc, address, &mut state).await {
        Ok(()) => {
            advance(&mut state, PageState::Done);
            state
        }
        Err(error) => {
            tracing::error!(%error, "accommodation page load failed");
            shell.redirect(error_route);
            advance(&mut state, PageState::Failed);
            state
        }
    }
}

async fn execute<S>(
    client: &DirectoryClient,
    shell: &mut S,
    doc: &mut Document,
    address: &str,
    state: &mut PageState,
) -> Result<(), PageError>
where
    S: PageShell,
{
    let query = PageQuery::from_address(address);
    let id = query.parameter("id").to_owned();

    advance(state, PageState::Fetching);
    let detail = client.accommodation(&id).await?;

    advance(state, PageState::Formatting);
    let view = format_accommodation(detail);
    let centre = Coordinate {
        latitude: view.address.latitude,
        longitude: view.address.longitude,
    };
    let data = to_value(&view)?;

    advance(state, PageState::Rendering);
    render_into(doc, TEMPLATE_ID, &data, OUTPUT_ID, || {
        shell.loaded();
        shell.init_map(centre);
    })?;

    Ok(())
}
