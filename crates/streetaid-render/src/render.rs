//! The render contract: template id + data + output target + callback.

use serde_json::Value;

use crate::document::Document;
use crate::error::RenderError;
use crate::template::Template;

/// Look up a template by id, compile it, render it against `data`,
/// write the markup into the output element, then invoke `on_complete`.
///
/// The template is recompiled on every call — no cross-call cache —
/// and the document mutation happens synchronously before the callback
/// runs.
///
/// # Errors
///
/// Returns [`RenderError::TemplateMissing`], [`RenderError::Syntax`] or
/// [`RenderError::OutputMissing`]; on error the callback is not
/// invoked.
pub fn render_into<F>(
    doc: &mut Document,
    template_id: &str,
    data: &Value,
    output_id: &str,
    on_complete: F,
) -> Result<(), RenderError>
where
    F: FnOnce(),
{
    let source = doc.template_source(template_id)?.to_owned();
    let template = Template::compile(&source)?;
    let markup = template.render(data);

    tracing::debug!(template_id, output_id, "rendering template");
    doc.set_content(output_id, markup)?;
    on_complete();
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn render_into_writes_output_then_runs_callback() {
        let mut doc = Document::new();
        doc.insert_template("greeting-tpl", "<p>Hello {{name}}</p>");
        doc.insert_element("out");

        let mut callback_ran = false;
        render_into(
            &mut doc,
            "greeting-tpl",
            &json!({ "name": "Leeds" }),
            "out",
            || callback_ran = true,
        )
        .expect("render should succeed");

        assert_eq!(doc.content("out"), Some("<p>Hello Leeds</p>"));
        assert!(callback_ran);
    }

    #[test]
    fn render_into_missing_template_skips_callback() {
        let mut doc = Document::new();
        doc.insert_element("out");

        let mut callback_ran = false;
        let err = render_into(&mut doc, "nope", &json!({}), "out", || callback_ran = true)
            .unwrap_err();

        assert!(matches!(err, RenderError::TemplateMissing(_)));
        assert!(!callback_ran);
    }

    #[test]
    fn render_into_missing_output_is_error() {
        let mut doc = Document::new();
        doc.insert_template("tpl", "x");

        let err = render_into(&mut doc, "tpl", &json!({}), "missing", || {}).unwrap_err();
        assert!(matches!(err, RenderError::OutputMissing(_)));
    }
}
