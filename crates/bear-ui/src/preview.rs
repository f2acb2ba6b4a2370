//! Commands behind the `bear-preview` binary.
//!
//! Each command returns the text to print, so the binary stays a thin
//! argument parser and the commands can be tested directly.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bear_theme::{
    parse_hex, render_all, render_stylesheet, resolve, rgb_to_ansi256, Collection, MemorySink,
    ThemeContext,
};
use clap::ValueEnum;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Yaml,
    Css,
}

fn lookup(id: &str, strict: bool) -> Result<Collection> {
    if strict {
        Ok(id.parse::<Collection>()?)
    } else {
        Ok(Collection::from_id_or_default(id))
    }
}

/// Prints the resolved theme for `id`.
///
/// With `strict`, unknown identifiers are an error instead of falling back.
pub fn show(id: &str, format: Format, strict: bool) -> Result<String> {
    let collection = lookup(id, strict)?;
    let theme = resolve(collection.id());
    let out = match format {
        Format::Json => serde_json::to_string_pretty(&theme).context("serializing theme")?,
        Format::Yaml => serde_yaml::to_string(&theme).context("serializing theme")?,
        Format::Css => render_stylesheet(collection, &theme)?,
    };
    Ok(out)
}

/// One line per palette color, with a terminal swatch.
pub fn swatches(id: &str, strict: bool) -> Result<String> {
    let collection = lookup(id, strict)?;
    let theme = resolve(collection.id());
    let mut out = String::new();
    writeln!(out, "{} ({})", theme.name, collection.scope_marker())?;
    for (key, value) in theme.colors.entries() {
        let swatch = match parse_hex(value) {
            Some(rgb) => console::style("    ").on_color256(rgb_to_ansi256(rgb)).to_string(),
            None => "    ".to_string(),
        };
        writeln!(out, "{} {:<10} {}", swatch, key, value)?;
    }
    Ok(out)
}

/// Replays selections against an in-memory surface and prints the result.
pub fn sequence(ids: &[String]) -> Result<String> {
    let mut ctx = ThemeContext::new(MemorySink::new());
    for id in ids {
        let selected = ctx.select_collection(id)?;
        tracing::info!(requested = %id, selected = selected.id(), "selected");
    }
    let sink = ctx.sink();
    let mut out = sink.to_css();
    writeln!(out, "/* {} style commits */", sink.commits())?;
    Ok(out)
}

/// Renders the style sheet for every collection, optionally writing it to
/// `output`.
pub fn export(output: Option<&Path>) -> Result<String> {
    let css = render_all()?;
    if let Some(path) = output {
        fs::write(path, &css).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "style sheet written");
    }
    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_json_has_camel_case_keys() {
        let out = show("techno", Format::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["colors"]["textAlt"], "#9595B5");
        assert_eq!(value["borderRadius"]["pill"], "9999px");
    }

    #[test]
    fn test_show_yaml() {
        let out = show("ethereal", Format::Yaml, false).unwrap();
        assert!(out.contains("name: Ethereal"));
        assert!(out.contains("heroMotion: float"));
    }

    #[test]
    fn test_show_css() {
        let out = show("primal", Format::Css, false).unwrap();
        assert!(out.contains("--color-accent: #FF3A00;"));
    }

    #[test]
    fn test_show_strict_rejects_unknown() {
        assert!(show("bogus", Format::Json, true).is_err());
        let lenient = show("bogus", Format::Json, false).unwrap();
        assert_eq!(lenient, show("primal", Format::Json, false).unwrap());
    }

    #[test]
    fn test_swatches_lists_palette() {
        let out = swatches("ethereal", false).unwrap();
        assert!(out.starts_with("Ethereal (collection-ethereal)"));
        assert_eq!(out.lines().count(), 8);
        assert!(out.contains("textAlt"));
        assert!(out.contains("#6F7C94"));
    }

    #[test]
    fn test_sequence_final_surface() {
        let ids: Vec<String> = ["techno", "ethereal", "bogus"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let out = sequence(&ids).unwrap();
        assert!(out.contains("/* scope: collection-primal */"));
        assert!(out.contains("--color-primary: #2D1E0F;"));
        assert!(!out.contains("#F0B9DD"));
        assert!(out.contains("/* 4 style commits */"));
    }
}
