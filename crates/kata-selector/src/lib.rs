//! CSS selector string builder.
//!
//! Builds compound selector strings following the simple-selector ordering
//! conventions of [Selectors Level 4](https://www.w3.org/TR/selectors-4/):
//! an optional type selector first, then an optional ID selector, then any
//! number of class, attribute, and pseudo-class selectors, then an optional
//! pseudo-element.
//!
//! This is a *builder*, not a parser: each call appends one already-formed
//! part verbatim (wrapped in its own syntax), and the builder only enforces
//! the category ordering and the at-most-once rule for element, ID, and
//! pseudo-element parts. Values are opaque to the builder and are never
//! validated against the CSS grammar.
//!
//! # Example
//!
//! ```
//! use kata_selector::{by_element, combine, Combinator};
//!
//! let left = by_element("div").id("main")?;
//! let right = by_element("table").id("data")?;
//! let selector = combine(&left, Combinator::NextSibling, &right);
//! assert_eq!(selector.as_str(), "div#main + table#data");
//! # Ok::<(), kata_selector::SelectorError>(())
//! ```

use std::fmt;

use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// The six selector-part categories, in the order they must appear.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// "If it contains a type selector or universal selector, that selector
/// must come first in the sequence. Only one type selector or universal
/// selector is allowed in the sequence."
///
/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
/// "Only one pseudo-element may appear per complex selector."
///
/// Variant order matches the required ordering, so [`Part::rank`] is simply
/// the variant's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Part {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// Appended verbatim: `div`, `a`, `table`.
    Element,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// Appended as `#value`.
    Id,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// Appended as `.value`; repeatable.
    Class,
    /// [§ 6.4 Attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// Appended as `[value]`; repeatable.
    Attribute,
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// Appended as `:value`; repeatable.
    PseudoClass,
    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// Appended as `::value`.
    PseudoElement,
}

impl Part {
    /// Position of this category in the required ordering, 0 through 5.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// `Display` renders the combinator's token character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// Token: whitespace (` `).
    Descendant,
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// Token: `>`.
    Child,
    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// Token: `+`.
    NextSibling,
    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// Token: `~`.
    SubsequentSibling,
}

impl Combinator {
    /// The punctuation token for this combinator.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Errors reported when a part cannot be appended.
///
/// Both kinds are programming errors in selector construction: there is no
/// recovery path, and callers should abort building that selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A part was appended after a part of a later category.
    #[error(
        "{part} selector out of order: parts must appear in the order \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The category of the rejected part.
        part: Part,
    },

    /// A second element, ID, or pseudo-element part was appended.
    #[error("duplicate {part} selector: element, id, and pseudo-element may each occur at most once")]
    Duplicate {
        /// The category of the rejected part.
        part: Part,
    },
}

/// A CSS selector under construction.
///
/// Parts are appended through the chainable methods, each of which consumes
/// the builder and returns it on success. Validation happens before any
/// mutation, so a rejected call never leaves a partially-updated builder
/// behind (the `Err` carries no builder to continue with).
///
/// An empty selector renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// The selector text accumulated so far.
    text: String,
    /// Whether a type selector has been appended.
    has_element: bool,
    /// Whether a pseudo-element has been appended.
    has_pseudo_element: bool,
    /// Highest category rank appended so far (element does not raise it).
    rank: u8,
}

impl Selector {
    /// Create an empty selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            has_element: false,
            has_pseudo_element: false,
            rank: 0,
        }
    }

    /// Append a type selector, verbatim.
    ///
    /// [§ 4.2](https://www.w3.org/TR/selectors-4/#compound) "If it contains
    /// a type selector or universal selector, that selector must come first
    /// in the sequence."
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later-category part has already
    /// been appended; [`SelectorError::Duplicate`] if a type selector has.
    pub fn element(mut self, value: &str) -> Result<Self, SelectorError> {
        self.check_order(Part::Element)?;
        if self.has_element {
            return Err(SelectorError::Duplicate {
                part: Part::Element,
            });
        }
        self.push(Part::Element, value);
        Ok(self)
    }

    /// Append an ID selector as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a class, attribute, pseudo-class, or
    /// pseudo-element part has already been appended;
    /// [`SelectorError::Duplicate`] if an ID has.
    pub fn id(mut self, value: &str) -> Result<Self, SelectorError> {
        self.check_order(Part::Id)?;
        if self.rank == Part::Id.rank() {
            return Err(SelectorError::Duplicate { part: Part::Id });
        }
        self.push(Part::Id, value);
        Ok(self)
    }

    /// Append a class selector as `.value`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if an attribute, pseudo-class, or
    /// pseudo-element part has already been appended.
    pub fn class(mut self, value: &str) -> Result<Self, SelectorError> {
        self.check_order(Part::Class)?;
        self.push(Part::Class, value);
        Ok(self)
    }

    /// Append an attribute selector as `[value]`. Repeatable.
    ///
    /// The value is the full bracket content, e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-class or pseudo-element
    /// part has already been appended.
    pub fn attribute(mut self, value: &str) -> Result<Self, SelectorError> {
        self.check_order(Part::Attribute)?;
        self.push(Part::Attribute, value);
        Ok(self)
    }

    /// Append a pseudo-class selector as `:value`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-element has already been
    /// appended.
    pub fn pseudo_class(mut self, value: &str) -> Result<Self, SelectorError> {
        self.check_order(Part::PseudoClass)?;
        self.push(Part::PseudoClass, value);
        Ok(self)
    }

    /// Append a pseudo-element selector as `::value`.
    ///
    /// Pseudo-elements are the last category, so ordering can never reject
    /// this call; only duplication can.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element has already been
    /// appended. The builder state is not touched on rejection.
    pub fn pseudo_element(mut self, value: &str) -> Result<Self, SelectorError> {
        if self.has_pseudo_element {
            return Err(SelectorError::Duplicate {
                part: Part::PseudoElement,
            });
        }
        self.push(Part::PseudoElement, value);
        Ok(self)
    }

    /// The selector text built so far.
    ///
    /// Pure and idempotent; an empty builder yields `""`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Reject `part` if a later-category part has already been appended.
    fn check_order(&self, part: Part) -> Result<(), SelectorError> {
        if self.rank > part.rank() {
            return Err(SelectorError::OutOfOrder { part });
        }
        Ok(())
    }

    /// Append `value` wrapped in `part`'s syntax and record the category.
    /// Callers have already validated ordering and duplication.
    fn push(&mut self, part: Part, value: &str) {
        match part {
            Part::Element => {
                self.text.push_str(value);
                self.has_element = true;
            }
            Part::Id => {
                self.text.push('#');
                self.text.push_str(value);
            }
            Part::Class => {
                self.text.push('.');
                self.text.push_str(value);
            }
            Part::Attribute => {
                self.text.push('[');
                self.text.push_str(value);
                self.text.push(']');
            }
            Part::PseudoClass => {
                self.text.push(':');
                self.text.push_str(value);
            }
            Part::PseudoElement => {
                self.text.push_str("::");
                self.text.push_str(value);
                self.has_pseudo_element = true;
            }
        }
        self.rank = self.rank.max(part.rank());
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Create a selector seeded with the given part.
fn seeded(part: Part, value: &str) -> Selector {
    let mut selector = Selector::new();
    selector.push(part, value);
    selector
}

/// Start a selector with a type selector: `by_element("div")` → `div`.
#[must_use]
pub fn by_element(value: &str) -> Selector {
    seeded(Part::Element, value)
}

/// Start a selector with an ID selector: `by_id("main")` → `#main`.
#[must_use]
pub fn by_id(value: &str) -> Selector {
    seeded(Part::Id, value)
}

/// Start a selector with a class selector: `by_class("nav")` → `.nav`.
#[must_use]
pub fn by_class(value: &str) -> Selector {
    seeded(Part::Class, value)
}

/// Start a selector with an attribute selector: `by_attribute("href")` → `[href]`.
#[must_use]
pub fn by_attribute(value: &str) -> Selector {
    seeded(Part::Attribute, value)
}

/// Start a selector with a pseudo-class: `by_pseudo_class("focus")` → `:focus`.
#[must_use]
pub fn by_pseudo_class(value: &str) -> Selector {
    seeded(Part::PseudoClass, value)
}

/// Start a selector with a pseudo-element: `by_pseudo_element("before")` → `::before`.
#[must_use]
pub fn by_pseudo_element(value: &str) -> Selector {
    seeded(Part::PseudoElement, value)
}

/// Join two finished selectors with a combinator.
///
/// [§ 16](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The result is exactly `"<left> <token> <right>"`. Neither operand is
/// mutated, and no ordering or duplicate checks apply to the combined text.
/// The returned selector starts with a fresh ordering state, so further
/// parts may still be appended to it.
#[must_use]
pub fn combine(left: &Selector, combinator: Combinator, right: &Selector) -> Selector {
    Selector {
        text: format!("{left} {combinator} {right}"),
        ..Selector::new()
    }
}
