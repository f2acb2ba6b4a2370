//! Integration tests for style sheet export and themed components together.

use bear_theme::{Collection, MemorySink, ThemeContext};
use bear_ui::layout::Shell;
use bear_ui::preview::export;
use bear_ui::{ButtonProps, ButtonStyle, InputProps, InputStyle};

#[test]
fn test_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collections.css");

    let css = export(Some(&path)).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();

    assert_eq!(css, written);
    for collection in Collection::ALL {
        assert!(written.contains(&format!("body.{} {{", collection.scope_marker())));
    }
}

#[test]
fn test_export_to_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("collections.css");
    let err = export(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("writing"));
}

#[test]
fn test_components_follow_navigation() {
    let mut shell = Shell::new(MemorySink::new(), "/");
    let _scope = shell.context().enter();

    let before = ButtonStyle::current(ButtonProps::default()).unwrap();
    assert_eq!(before.style.get("background-color"), Some("#2D1E0F"));

    shell.navigate("/collection/techno").unwrap();
    let after = ButtonStyle::current(ButtonProps::default()).unwrap();
    let input = InputStyle::current(InputProps::default()).unwrap();
    assert_eq!(after.style.get("background-color"), Some("#00F0FF"));
    assert_eq!(input.focus.border_color.as_deref(), Some("#FFF500"));
}

#[test]
fn test_components_fail_after_session_closes() {
    let mut ctx = ThemeContext::new(MemorySink::new());
    let _scope = ctx.enter();
    ctx.teardown();
    assert!(ButtonStyle::current(ButtonProps::default()).is_err());
}
