pub mod document;
pub mod error;
pub mod render;
pub mod template;

pub use document::Document;
pub use error::RenderError;
pub use render::render_into;
pub use template::Template;
