//! CSS custom properties and style sheet export.
//!
//! Color tokens are published as custom properties named `--color-<key>`,
//! where `<key>` is the serialized palette key (`primary`, ..., `textAlt`).
//! The same naming is used by [`ThemeContext`](crate::ThemeContext) when it
//! writes to a sink and by the exported style sheets here, so external
//! style sheets can rely on one fixed set of names.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::collection::Collection;
use crate::error::ThemeError;
use crate::theme::{resolve_collection, Colors, ThemeConfig};

const STYLESHEET_TEMPLATE: &str = r#"/* {{ name }} */
{{ root_selector }} {
{%- for property in properties %}
  {{ property.name }}: {{ property.value }};
{%- endfor %}
}
body.{{ scope }} {
  font-family: {{ font_family }};
  font-weight: {{ body_weight }};
  line-height: {{ line_height }};
  background-color: var(--color-background);
  color: var(--color-text);
}
body.{{ scope }} h1, body.{{ scope }} h2, body.{{ scope }} h3 {
  font-weight: {{ heading_weight }};
}
body.{{ scope }} img {
  filter: {{ filter }};
}
"#;

/// A CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomProperty {
    pub name: String,
    pub value: String,
}

/// Returns the custom property name for a palette key.
///
/// ```rust
/// assert_eq!(bear_theme::color_variable("textAlt"), "--color-textAlt");
/// ```
pub fn color_variable(key: &str) -> String {
    format!("--color-{}", key)
}

/// Returns the custom property names for every palette key.
pub fn color_variable_names() -> Vec<String> {
    Colors::KEYS.iter().map(|key| color_variable(key)).collect()
}

/// Returns one custom property per palette color, in palette key order.
pub fn color_properties(theme: &ThemeConfig) -> Vec<CustomProperty> {
    theme
        .colors
        .entries()
        .into_iter()
        .map(|(key, value)| CustomProperty {
            name: color_variable(key),
            value: value.to_string(),
        })
        .collect()
}

fn environment() -> Result<Environment<'static>, ThemeError> {
    let mut env = Environment::new();
    env.add_template("collection.css", STYLESHEET_TEMPLATE)?;
    Ok(env)
}

fn render_block(
    env: &Environment<'static>,
    collection: Collection,
    theme: &ThemeConfig,
    root_selector: &str,
) -> Result<String, ThemeError> {
    let tmpl = env.get_template("collection.css")?;
    let rendered = tmpl.render(context! {
        name => theme.name,
        root_selector => root_selector,
        scope => collection.scope_marker(),
        properties => color_properties(theme),
        font_family => theme.font_family,
        body_weight => theme.typography.body_weight,
        heading_weight => theme.typography.heading_weight,
        line_height => theme.typography.line_height.to_string(),
        filter => theme.imagery.filter,
    })?;
    Ok(rendered)
}

/// Renders the style sheet for one collection.
///
/// Color properties are declared on `:root`, matching what a theme context
/// writes; typography and imagery rules are scoped by the collection's
/// style-scope marker.
///
/// # Errors
///
/// Returns [`ThemeError::Template`] if the template fails to render.
pub fn render_stylesheet(collection: Collection, theme: &ThemeConfig) -> Result<String, ThemeError> {
    let env = environment()?;
    render_block(&env, collection, theme, ":root")
}

/// Renders a style sheet covering every collection.
///
/// Each collection's color properties are declared under its scope marker
/// (`body.collection-<id>`) instead of `:root`, so the sheet can be served
/// statically and switched by changing the marker alone.
pub fn render_all() -> Result<String, ThemeError> {
    let env = environment()?;
    let mut blocks = Vec::with_capacity(Collection::ALL.len());
    for collection in Collection::ALL {
        let theme = resolve_collection(collection);
        let selector = format!("body.{}", collection.scope_marker());
        blocks.push(render_block(&env, collection, &theme, &selector)?);
    }
    Ok(blocks.join("\n"))
}
