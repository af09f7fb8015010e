use thiserror::Error;

/// Internal pipeline failure for a page load.
///
/// Controllers consume this themselves: any variant ends the page load
/// in [`crate::PageState::Failed`] after redirecting to the error
/// route.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] streetaid_client::FetchError),

    #[error(transparent)]
    Render(#[from] streetaid_render::RenderError),

    #[error("view model serialization failed: {0}")]
    ViewModel(#[from] serde_json::Error),
}
