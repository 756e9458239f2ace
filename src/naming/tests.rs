#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn test_to_pascal_case() {
    assert_eq!(to_pascal_case("order item"), "OrderItem");
    assert_eq!(to_pascal_case("order-item"), "OrderItem");
    assert_eq!(to_pascal_case("order_item"), "OrderItem");
    assert_eq!(to_pascal_case("single"), "Single");
    assert_eq!(to_pascal_case(""), "");
}

#[test]
fn test_to_pascal_case_preserves_existing_casing() {
    // Already-Pascal input has no separators and passes through whole.
    assert_eq!(to_pascal_case("OrderItem"), "OrderItem");
    assert_eq!(to_pascal_case("orderItem"), "OrderItem");
}

#[test]
fn test_to_pascal_case_edge_cases() {
    assert_eq!(to_pascal_case("_leading_underscore"), "LeadingUnderscore");
    assert_eq!(to_pascal_case("trailing-hyphen-"), "TrailingHyphen");
    assert_eq!(to_pascal_case("multiple   spaces"), "MultipleSpaces");
    assert_eq!(to_pascal_case("mixed -_ separators"), "MixedSeparators");
}

#[test]
fn test_to_camel_case() {
    assert_eq!(to_camel_case("order item"), "orderItem");
    assert_eq!(to_camel_case("OrderItem"), "orderItem");
    assert_eq!(to_camel_case("single"), "single");
}

#[test]
fn test_to_camel_case_falls_back_to_lowered_input() {
    // No words at all: camel falls back to the lowercased raw input.
    assert_eq!(to_camel_case("---"), "---");
}

#[test]
fn test_to_kebab_case() {
    assert_eq!(to_kebab_case("OrderItem"), "order-item");
    assert_eq!(to_kebab_case("orderItem"), "order-item");
    assert_eq!(to_kebab_case("order item"), "order-item");
    assert_eq!(to_kebab_case("order_item"), "order-item");
    assert_eq!(to_kebab_case("order-item"), "order-item");
    assert_eq!(to_kebab_case("grupo de captura"), "grupo-de-captura");
}

#[test]
fn test_to_kebab_case_digit_boundaries() {
    assert_eq!(to_kebab_case("v2Report"), "v2-report");
    assert_eq!(to_kebab_case("userV2"), "user-v2");
}

#[test]
fn test_to_kebab_case_idempotent() {
    for input in ["OrderItem", "order item", "grupoDeCaptura", "a_b-c d"] {
        let once = to_kebab_case(input);
        assert_eq!(to_kebab_case(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn test_pascal_kebab_round_trip() {
    for input in ["order item", "OrderItem", "audit-log", "user profile page"] {
        let pascal = to_pascal_case(input);
        assert_eq!(
            to_pascal_case(&to_kebab_case(&pascal)),
            pascal,
            "round trip failed for {input:?}"
        );
    }
}

#[test]
fn test_first_char_casing() {
    for input in ["order item", "OrderItem", "x", "Fila"] {
        let pascal = to_pascal_case(input);
        let camel = to_camel_case(input);
        assert!(pascal.chars().next().unwrap().is_uppercase());
        assert!(camel.chars().next().unwrap().is_lowercase());
    }
}

#[test]
fn test_canonical_forms_agree() {
    // The three spellings of the same name normalize identically.
    for input in ["order item", "OrderItem", "order-item"] {
        assert_eq!(to_pascal_case(input), "OrderItem");
        assert_eq!(to_camel_case(input), "orderItem");
        assert_eq!(to_kebab_case(input), "order-item");
    }
}

#[test]
fn test_module_name_parse() {
    let name = ModuleName::parse("  order item  ").unwrap();
    assert_eq!(name.raw(), "order item");
    assert_eq!(name.pascal(), "OrderItem");
    assert_eq!(name.camel(), "orderItem");
    assert_eq!(name.kebab(), "order-item");
    assert_eq!(name.module_ident(), "OrderItemModule");
}

#[test]
fn test_module_name_rejects_empty() {
    assert_eq!(ModuleName::parse(""), Err(InvalidName::Empty));
    assert_eq!(ModuleName::parse("   "), Err(InvalidName::Empty));
}

#[test]
fn test_module_name_rejects_separator_only_input() {
    match ModuleName::parse("-_-") {
        Err(InvalidName::NoWords { input }) => assert_eq!(input, "-_-"),
        other => panic!("expected NoWords, got {other:?}"),
    }
}

#[test]
fn test_views_are_deterministic() {
    let a = ModuleName::parse("grupo de captura").unwrap();
    let b = ModuleName::parse("grupo de captura").unwrap();
    assert_eq!(a, b);
}
