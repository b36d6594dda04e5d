//! Property-based tests for theme merging
//!
//! Uses proptest to verify properties that should hold for all themes.

use proptest::prelude::*;
use stylecfg::theme::{ThemeConfig, TokenValue, merge};

fn leaf() -> impl Strategy<Value = TokenValue> {
    prop_oneof![
        "#[0-9a-f]{6}".prop_map(TokenValue::from),
        (0i64..1000).prop_map(TokenValue::Integer),
    ]
}

fn tree() -> impl Strategy<Value = TokenValue> {
    leaf().prop_recursive(3, 32, 4, |inner| {
        prop::collection::btree_map("[a-c]|[1-4]00|DEFAULT", inner, 0..4).prop_map(TokenValue::Map)
    })
}

fn theme() -> impl Strategy<Value = ThemeConfig> {
    prop::collection::btree_map("colors|spacing|backgroundImage", tree(), 0..3)
        .prop_map(ThemeConfig::from_map)
}

proptest! {
    /// Merging an empty extension changes nothing
    #[test]
    fn empty_extension_is_identity(base in theme()) {
        prop_assert_eq!(merge(&base, &ThemeConfig::new()), base);
    }

    /// Re-applying an extension is a no-op
    #[test]
    fn merge_is_idempotent(base in theme(), ext in theme()) {
        let once = merge(&base, &ext);
        prop_assert_eq!(merge(&once, &ext), once);
    }

    /// Every extension leaf is present, unchanged, in the result
    #[test]
    fn extension_leaves_win(base in theme(), ext in theme()) {
        let merged = merge(&base, &ext);
        for token in ext.tokens() {
            let path: Vec<&str> = token.path.iter().map(String::as_str).collect();
            prop_assert_eq!(merged.get_path(&path), Some(&token.value));
        }
    }

    /// Base leaves whose path the extension never touches survive
    #[test]
    fn untouched_base_leaves_survive(base in theme(), ext in theme()) {
        let merged = merge(&base, &ext);
        for token in base.tokens() {
            let path: Vec<&str> = token.path.iter().map(String::as_str).collect();
            let touched = (1..=path.len()).any(|n| ext.get_path(&path[..n]).is_some());
            if !touched {
                prop_assert_eq!(merged.get_path(&path), Some(&token.value));
            }
        }
    }
}
