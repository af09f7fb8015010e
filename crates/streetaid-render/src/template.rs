//! Mustache-style template compilation and rendering.
//!
//! Supports the subset the page templates use:
//!
//! - `{{path}}` — interpolate, HTML-escaped
//! - `{{{path}}}` / `{{& path}}` — interpolate raw (pre-sanitized HTML)
//! - `{{#path}}…{{/path}}` — section: arrays iterate, other truthy
//!   values render once with the value pushed onto the context stack
//! - `{{^path}}…{{/path}}` — inverted section: renders when the value
//!   is missing or falsy
//! - `{{! …}}` — comment, ignored
//!
//! Paths are dot-separated and resolve against the context stack from
//! the innermost scope outwards; `.` names the current scope. Falsiness
//! follows the source templating engine: `null`, `false`, `0`, `""` and
//! `[]` are falsy.

use serde_json::Value;

use crate::error::RenderError;

/// A compiled template, ready to render against JSON data.
#[derive(Debug)]
pub struct Template {
    nodes: Vec<Node>,
}

#[derive(Debug)]
enum Node {
    Text(String),
    Variable { path: String, raw: bool },
    Section {
        path: String,
        inverted: bool,
        children: Vec<Node>,
    },
}

impl Template {
    /// Compile a template source.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Syntax`] for unclosed tags and mismatched
    /// sections.
    pub fn compile(source: &str) -> Result<Self, RenderError> {
        // Each open section pushes a frame; its children accumulate in
        // `current` until the matching close tag pops the frame.
        let mut stack: Vec<(String, bool, Vec<Node>)> = Vec::new();
        let mut current: Vec<Node> = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                current.push(Node::Text(rest[..open].to_owned()));
            }
            let tail = &rest[open + 2..];

            // Triple stache: raw interpolation.
            if let Some(inner) = tail.strip_prefix('{') {
                let close = inner.find("}}}").ok_or_else(|| RenderError::Syntax {
                    detail: "unclosed {{{ tag".to_owned(),
                })?;
                current.push(Node::Variable {
                    path: inner[..close].trim().to_owned(),
                    raw: true,
                });
                rest = &inner[close + 3..];
                continue;
            }

            let close = tail.find("}}").ok_or_else(|| RenderError::Syntax {
                detail: "unclosed {{ tag".to_owned(),
            })?;
            let tag = tail[..close].trim();
            rest = &tail[close + 2..];

            match tag.chars().next() {
                Some('#') => {
                    stack.push((
                        tag[1..].trim().to_owned(),
                        false,
                        std::mem::take(&mut current),
                    ));
                }
                Some('^') => {
                    stack.push((
                        tag[1..].trim().to_owned(),
                        true,
                        std::mem::take(&mut current),
                    ));
                }
                Some('/') => {
                    let closing = tag[1..].trim();
                    let Some((path, inverted, mut parent)) = stack.pop() else {
                        return Err(RenderError::Syntax {
                            detail: format!("unexpected section close: {closing}"),
                        });
                    };
                    if path != closing {
                        return Err(RenderError::Syntax {
                            detail: format!("section mismatch: opened {path}, closed {closing}"),
                        });
                    }
                    parent.push(Node::Section {
                        path,
                        inverted,
                        children: std::mem::take(&mut current),
                    });
                    current = parent;
                }
                Some('&') => {
                    current.push(Node::Variable {
                        path: tag[1..].trim().to_owned(),
                        raw: true,
                    });
                }
                Some('!') => {} // comment
                _ => {
                    current.push(Node::Variable {
                        path: tag.to_owned(),
                        raw: false,
                    });
                }
            }
        }

        if let Some((path, _, _)) = stack.pop() {
            return Err(RenderError::Syntax {
                detail: format!("unclosed section: {path}"),
            });
        }

        if !rest.is_empty() {
            current.push(Node::Text(rest.to_owned()));
        }

        Ok(Self { nodes: current })
    }

    /// Render the template against `data`.
    #[must_use]
    pub fn render(&self, data: &Value) -> String {
        let mut out = String::new();
        render_nodes(&self.nodes, &mut vec![data], &mut out);
        out
    }
}

fn render_nodes<'a>(nodes: &'a [Node], contexts: &mut Vec<&'a Value>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Variable { path, raw } => {
                if let Some(value) = lookup(contexts, path) {
                    let text = stringify(value);
                    if *raw {
                        out.push_str(&text);
                    } else {
                        push_escaped(out, &text);
                    }
                }
            }
            Node::Section {
                path,
                inverted,
                children,
            } => {
                let value = lookup(contexts, path);
                if *inverted {
                    if value.is_none_or(is_falsy) {
                        render_nodes(children, contexts, out);
                    }
                    continue;
                }
                match value {
                    Some(Value::Array(items)) => {
                        for item in items {
                            contexts.push(item);
                            render_nodes(children, contexts, out);
                            contexts.pop();
                        }
                    }
                    Some(value) if !is_falsy(value) => {
                        contexts.push(value);
                        render_nodes(children, contexts, out);
                        contexts.pop();
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Resolve a dotted path against the context stack, innermost first.
fn lookup<'a>(contexts: &[&'a Value], path: &str) -> Option<&'a Value> {
    if path == "." {
        return contexts.last().copied();
    }
    contexts
        .iter()
        .rev()
        .find_map(|context| resolve(context, path))
}

fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn render(source: &str, data: &Value) -> String {
        Template::compile(source)
            .expect("template should compile")
            .render(data)
    }

    #[test]
    fn interpolates_escaped_variable() {
        let out = render("Hello {{name}}", &json!({ "name": "A & B" }));
        assert_eq!(out, "Hello A &amp; B");
    }

    #[test]
    fn interpolates_raw_variable() {
        let data = json!({ "info": "<p>ok</p>" });
        assert_eq!(render("{{{info}}}", &data), "<p>ok</p>");
        assert_eq!(render("{{& info}}", &data), "<p>ok</p>");
    }

    #[test]
    fn missing_variable_renders_empty() {
        assert_eq!(render("[{{nope}}]", &json!({})), "[]");
    }

    #[test]
    fn dotted_path_resolves_nested_value() {
        let data = json!({ "address": { "city": "Leeds" } });
        assert_eq!(render("{{address.city}}", &data), "Leeds");
    }

    #[test]
    fn section_iterates_arrays_with_item_context() {
        let data = json!({ "days": [ { "name": "Mon" }, { "name": "Tue" } ] });
        assert_eq!(render("{{#days}}{{name}};{{/days}}", &data), "Mon;Tue;");
    }

    #[test]
    fn section_skipped_for_falsy_values() {
        for data in [
            json!({ "flag": false }),
            json!({ "flag": 0 }),
            json!({ "flag": "" }),
            json!({ "flag": [] }),
            json!({}),
        ] {
            assert_eq!(render("{{#flag}}yes{{/flag}}", &data), "", "data: {data}");
        }
    }

    #[test]
    fn section_renders_once_for_truthy_scalar() {
        assert_eq!(
            render("{{#hasContent}}shown{{/hasContent}}", &json!({ "hasContent": true })),
            "shown"
        );
    }

    #[test]
    fn section_pushes_object_scope_with_parent_fallback() {
        let data = json!({ "title": "Page", "features": { "note": "Pets ok" } });
        assert_eq!(
            render("{{#features}}{{note}} on {{title}}{{/features}}", &data),
            "Pets ok on Page"
        );
    }

    #[test]
    fn inverted_section_renders_for_empty_array() {
        let data = json!({ "daysServices": [] });
        assert_eq!(
            render("{{^daysServices}}none{{/daysServices}}", &data),
            "none"
        );
    }

    #[test]
    fn dot_names_the_current_scope() {
        let data = json!({ "supportOffered": ["Alcohol", "Mental Health"] });
        assert_eq!(
            render("{{#supportOffered}}[{{.}}]{{/supportOffered}}", &data),
            "[Alcohol][Mental Health]"
        );
    }

    #[test]
    fn comment_tags_are_ignored() {
        assert_eq!(render("a{{! note to self }}b", &json!({})), "ab");
    }

    #[test]
    fn unclosed_section_is_syntax_error() {
        let err = Template::compile("{{#open}}body").unwrap_err();
        assert!(matches!(err, RenderError::Syntax { ref detail } if detail.contains("open")));
    }

    #[test]
    fn mismatched_section_close_is_syntax_error() {
        let err = Template::compile("{{#a}}{{/b}}").unwrap_err();
        assert!(matches!(err, RenderError::Syntax { ref detail } if detail.contains("mismatch")));
    }
}
