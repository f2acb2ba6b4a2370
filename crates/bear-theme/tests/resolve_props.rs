//! Property tests for identifier resolution.

use bear_theme::{resolve, Collection};
use proptest::prelude::*;

fn known(id: &str) -> bool {
    Collection::ALL.iter().any(|c| c.id() == id)
}

proptest! {
    #[test]
    fn unknown_ids_resolve_to_primal(id in ".{0,24}") {
        prop_assume!(!known(&id));
        prop_assert_eq!(resolve(&id), resolve("primal"));
    }

    #[test]
    fn resolution_is_deterministic(id in prop_oneof![
        Just("primal".to_string()),
        Just("ethereal".to_string()),
        Just("techno".to_string()),
        "[a-z]{0,10}",
    ]) {
        let first = resolve(&id);
        let mut second = resolve(&id);
        prop_assert_eq!(&first, &second);

        second.colors.accent.push_str("-changed");
        second.spacing.md = "0".to_string();
        prop_assert_ne!(&first, &second);
        prop_assert_eq!(first, resolve(&id));
    }

    #[test]
    fn base_namespaces_never_vary(id in "[a-z]{0,10}") {
        let theme = resolve(&id);
        prop_assert_eq!(theme.base(), bear_theme::theme::base_tokens());
    }
}
