//! Integration tests for the argument registry.

use rstest::rstest;
use scrycards::parser::SyntaxKind;
use scrycards::registry::{
    self, ArgKind, OperatorClass, SettingKey, all_arguments, arg_type_from_arg,
    canonical_arguments, detail_from_arg, node_from_arg, setting_from_arg,
};

// =============================================================================
// TOTALITY
// =============================================================================

#[test]
fn test_every_alias_resolves_everywhere() {
    for alias in all_arguments() {
        assert!(registry::is_argument(alias), "{alias} not recognized");
        assert!(arg_type_from_arg(alias).is_some(), "{alias} has no kind");
        assert!(detail_from_arg(alias).is_some(), "{alias} has no detail");
        assert!(node_from_arg(alias).is_some(), "{alias} has no node");
    }
}

#[test]
fn test_every_kind_has_an_alias() {
    for kind in ArgKind::ALL {
        assert!(
            all_arguments().any(|alias| arg_type_from_arg(alias) == Some(kind)),
            "{kind} is unreachable"
        );
    }
}

#[test]
fn test_aliases_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for alias in all_arguments() {
        assert!(seen.insert(alias), "duplicate alias {alias}");
    }
}

#[test]
fn test_help_text_is_present() {
    for (alias, detail) in canonical_arguments() {
        assert!(!detail.detail.is_empty(), "{alias} has empty detail");
        assert!(!detail.info.is_empty(), "{alias} has empty info");
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

#[rstest]
#[case("t", ArgKind::Type)]
#[case("TYPE", ArgKind::Type)]
#[case("e", ArgKind::Set)]
#[case("mv", ArgKind::Cmc)]
#[case("ci", ArgKind::Color)]
#[case("year", ArgKind::Date)]
#[case("function", ArgKind::Otag)]
#[case("direction", ArgKind::Dir)]
fn test_alias_kinds(#[case] alias: &str, #[case] expected: ArgKind) {
    assert_eq!(arg_type_from_arg(alias), Some(expected));
}

#[rstest]
#[case("")]
#[case("zz")]
#[case("types")]
#[case("-t")]
fn test_unknown_aliases(#[case] alias: &str) {
    assert!(!registry::is_argument(alias));
    assert_eq!(arg_type_from_arg(alias), None);
    assert_eq!(node_from_arg(alias), None);
}

// =============================================================================
// OPERATOR CLASSES AND SETTINGS
// =============================================================================

#[test]
fn test_only_setting_kinds_carry_a_setting() {
    for kind in ArgKind::ALL {
        let has_setting = kind.setting_key().is_some();
        let is_setting_kind = matches!(kind, ArgKind::Unique | ArgKind::Order | ArgKind::Dir);
        assert_eq!(has_setting, is_setting_kind, "{kind}");
        if has_setting {
            assert_eq!(kind.operator_class(), OperatorClass::Assign, "{kind}");
        }
    }
}

#[rstest]
#[case("order", Some(SettingKey::Order))]
#[case("dir", Some(SettingKey::Dir))]
#[case("direction", Some(SettingKey::Dir))]
#[case("unique", Some(SettingKey::Unique))]
#[case("t", None)]
#[case("zz", None)]
fn test_setting_from_arg(#[case] alias: &str, #[case] expected: Option<SettingKey>) {
    assert_eq!(setting_from_arg(alias), expected);
}

#[rstest]
#[case(OperatorClass::Assign, SyntaxKind::COLON, true)]
#[case(OperatorClass::Assign, SyntaxKind::BANG_EQ, false)]
#[case(OperatorClass::Assert, SyntaxKind::EQ, true)]
#[case(OperatorClass::Assert, SyntaxKind::BANG_EQ, false)]
#[case(OperatorClass::Assert, SyntaxKind::GT, false)]
#[case(OperatorClass::All, SyntaxKind::LT_EQ, true)]
#[case(OperatorClass::All, SyntaxKind::WORD, false)]
fn test_operator_class_allows(
    #[case] class: OperatorClass,
    #[case] op: SyntaxKind,
    #[case] expected: bool,
) {
    assert_eq!(class.allows(op), expected);
}

#[test]
fn test_operator_spellings_agree_with_allows() {
    for class in [OperatorClass::Assign, OperatorClass::Assert, OperatorClass::All] {
        for spelling in class.operators() {
            let kinds: Vec<_> = scrycards::parser::tokenize(spelling)
                .into_iter()
                .map(|t| t.kind)
                .collect();
            assert_eq!(kinds.len(), 1, "{spelling} is not one token");
            assert!(class.allows(kinds[0]), "{class:?} rejects {spelling}");
        }
    }
}
