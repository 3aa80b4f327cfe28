//! Integration tests for the CSS selector builder facade and ordering rules.

use kata_selector::{
    Combinator, Part, Selector, SelectorError, by_attribute, by_class, by_element, by_id,
    by_pseudo_class, by_pseudo_element, combine,
};

// Facade tests: each creation entry point seeds the right syntax.

#[test]
fn test_by_element_seeds_verbatim() {
    assert_eq!(by_element("div").as_str(), "div");
}

#[test]
fn test_by_id_seeds_hash() {
    assert_eq!(by_id("main").as_str(), "#main");
}

#[test]
fn test_by_class_seeds_dot() {
    assert_eq!(by_class("container").as_str(), ".container");
}

#[test]
fn test_by_attribute_seeds_brackets() {
    assert_eq!(by_attribute("href").as_str(), "[href]");
}

#[test]
fn test_by_pseudo_class_seeds_colon() {
    assert_eq!(by_pseudo_class("focus").as_str(), ":focus");
}

#[test]
fn test_by_pseudo_element_seeds_double_colon() {
    assert_eq!(by_pseudo_element("before").as_str(), "::before");
}

// Chaining tests: valid orderings concatenate with no separators.

#[test]
fn test_id_then_repeated_classes() {
    let selector = by_id("main")
        .class("container")
        .and_then(|s| s.class("editable"))
        .unwrap();
    assert_eq!(selector.as_str(), "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let selector = by_element("a")
        .attribute(r#"href$=".png""#)
        .and_then(|s| s.pseudo_class("focus"))
        .unwrap();
    assert_eq!(selector.as_str(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_full_category_chain() {
    let selector = by_element("input")
        .id("name")
        .and_then(|s| s.class("field"))
        .and_then(|s| s.attribute("type=text"))
        .and_then(|s| s.pseudo_class("enabled"))
        .and_then(|s| s.pseudo_element("placeholder"))
        .unwrap();
    assert_eq!(
        selector.as_str(),
        "input#name.field[type=text]:enabled::placeholder"
    );
}

#[test]
fn test_repeated_attributes_and_pseudo_classes() {
    let selector = by_element("a")
        .attribute("href")
        .and_then(|s| s.attribute("target=_blank"))
        .and_then(|s| s.pseudo_class("link"))
        .and_then(|s| s.pseudo_class("first-child"))
        .unwrap();
    assert_eq!(selector.as_str(), "a[href][target=_blank]:link:first-child");
}

#[test]
fn test_same_rank_repeats_allowed_after_skipping_categories() {
    // Categories may be skipped entirely; ordering only forbids going back.
    let selector = by_class("btn").pseudo_element("after").unwrap();
    assert_eq!(selector.as_str(), ".btn::after");
}

#[test]
fn test_stringify_is_pure_and_repeatable() {
    let selector = by_element("div").class("box").unwrap();
    assert_eq!(selector.as_str(), "div.box");
    assert_eq!(selector.as_str(), "div.box");
    assert_eq!(selector.to_string(), "div.box");
}

// Duplicate rejection: element, id, and pseudo-element are singletons.

#[test]
fn test_second_element_rejected() {
    let err = by_element("div").element("span").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Duplicate {
            part: Part::Element
        }
    );
}

#[test]
fn test_second_id_rejected() {
    let err = by_id("main").id("second").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate { part: Part::Id });
}

#[test]
fn test_second_pseudo_element_rejected() {
    let err = by_pseudo_element("before").pseudo_element("after").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Duplicate {
            part: Part::PseudoElement
        }
    );
}

// Ordering rejection: a part may never follow a later-category part.

#[test]
fn test_id_after_class_rejected() {
    let err = by_class("a").id("b").unwrap_err();
    assert_eq!(err, SelectorError::OutOfOrder { part: Part::Id });
}

#[test]
fn test_element_after_id_rejected() {
    let err = by_id("main").element("div").unwrap_err();
    assert_eq!(err, SelectorError::OutOfOrder { part: Part::Element });
}

#[test]
fn test_class_after_attribute_rejected() {
    let err = by_attribute("href").class("nav").unwrap_err();
    assert_eq!(err, SelectorError::OutOfOrder { part: Part::Class });
}

#[test]
fn test_attribute_after_pseudo_class_rejected() {
    let err = by_pseudo_class("hover").attribute("href").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            part: Part::Attribute
        }
    );
}

#[test]
fn test_pseudo_class_after_pseudo_element_rejected() {
    let err = by_pseudo_element("before").pseudo_class("hover").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            part: Part::PseudoClass
        }
    );
}

// Combining: no ordering state carries over, nesting composes left to right.

#[test]
fn test_combine_next_sibling() {
    let left = by_element("div").id("main").unwrap();
    let right = by_element("table").id("data").unwrap();
    let combined = combine(&left, Combinator::NextSibling, &right);
    assert_eq!(combined.as_str(), "div#main + table#data");
}

#[test]
fn test_combine_child() {
    let combined = combine(&by_element("ul"), Combinator::Child, &by_element("li"));
    assert_eq!(combined.as_str(), "ul > li");
}

#[test]
fn test_combine_subsequent_sibling() {
    let combined = combine(
        &by_element("h1"),
        Combinator::SubsequentSibling,
        &by_element("p"),
    );
    assert_eq!(combined.as_str(), "h1 ~ p");
}

#[test]
fn test_combine_descendant_uses_whitespace_token() {
    // The descendant token is itself a space, so the joined form carries it
    // between the two separating spaces. Whitespace runs collapse in CSS.
    let combined = combine(&by_element("div"), Combinator::Descendant, &by_element("p"));
    assert_eq!(combined.as_str(), "div   p");
}

#[test]
fn test_combine_does_not_mutate_operands() {
    let left = by_element("div");
    let right = by_element("p");
    let _combined = combine(&left, Combinator::Child, &right);
    assert_eq!(left.as_str(), "div");
    assert_eq!(right.as_str(), "p");
}

#[test]
fn test_nested_combinations_compose_left_to_right() {
    let inner = combine(&by_element("div"), Combinator::Child, &by_element("ul"));
    let outer = combine(&inner, Combinator::NextSibling, &by_class("note"));
    assert_eq!(outer.as_str(), "div > ul + .note");
}

#[test]
fn test_combined_selector_accepts_further_parts() {
    // Combining resets the ordering state, so the combined text may keep
    // growing; this mirrors the builder's overwrite-then-continue lifecycle.
    let combined = combine(&by_element("ul"), Combinator::Child, &by_element("li"));
    let extended = combined.class("active").unwrap();
    assert_eq!(extended.as_str(), "ul > li.active");
}

#[test]
fn test_empty_selector_stringifies_empty() {
    assert_eq!(Selector::new().as_str(), "");
}
