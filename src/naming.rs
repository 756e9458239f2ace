//! # Name Casing Module
//!
//! Derives the three canonical casing views used across a NestJS project
//! from a free-form module name:
//!
//! - **Pascal** (`OrderItem`) for class identifiers (`OrderItemModule`)
//! - **camel** (`orderItem`) for member identifiers (`orderItemService`)
//! - **kebab** (`order-item`) for file names, directory names, route tokens
//!
//! All three are pure functions of the input string; re-deriving from the
//! same input always yields the same views. [`ModuleName`] bundles the
//! views for one scaffolding run and rejects unusable input up front.

use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(test)]
mod tests;

/// Boundary between a run of characters and an `Upper+lower` word start
/// (e.g. the `rI` in `OrderItem`).
#[allow(clippy::expect_used)]
static BOUNDARY_UPPER_LOWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.)([A-Z][a-z]+)").expect("valid boundary regex")
});

/// Boundary between a lowercase letter or digit and an uppercase letter
/// (e.g. the `dI` in `orderId`).
#[allow(clippy::expect_used)]
static BOUNDARY_LOWER_UPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z0-9])([A-Z])").expect("valid boundary regex")
});

/// Runs of explicit separators (whitespace, underscores, hyphens).
#[allow(clippy::expect_used)]
static SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s_\-]+").expect("valid separator regex")
});

/// Error returned when a module name cannot produce usable identifiers
///
/// Raised before any filesystem interaction occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidName {
    /// Input was empty or whitespace-only
    Empty,
    /// Input contained no word characters at all (e.g. `"---"`), so no
    /// identifier can be derived from it
    NoWords {
        /// The rejected input string
        input: String,
    },
}

impl std::fmt::Display for InvalidName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidName::Empty => write!(f, "module name cannot be empty"),
            InvalidName::NoWords { input } => {
                write!(
                    f,
                    "module name '{input}' contains no usable word characters"
                )
            }
        }
    }
}

impl std::error::Error for InvalidName {}

/// Convert a free-form name to PascalCase
///
/// Splits on runs of whitespace, hyphens, and underscores, uppercases each
/// word's first character, and concatenates. The tail of each word keeps
/// its original characters, so an already-Pascal input passes through
/// unchanged.
///
/// # Example
///
/// ```
/// use nestgen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("order item"), "OrderItem");
/// assert_eq!(to_pascal_case("order-item"), "OrderItem");
/// assert_eq!(to_pascal_case("OrderItem"), "OrderItem");
/// ```
pub fn to_pascal_case(input: &str) -> String {
    input
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Convert a free-form name to camelCase
///
/// Derived from the Pascal form with the first character lowercased. An
/// input with no words at all falls back to the lowercased raw input.
pub fn to_camel_case(input: &str) -> String {
    let pascal = to_pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => input.to_lowercase(),
    }
}

/// Convert a free-form name to kebab-case
///
/// Inserts a hyphen at Pascal/camel word boundaries, normalizes runs of
/// explicit separators to single hyphens, and lowercases the result, so
/// `"OrderItem"`, `"order item"`, and `"order-item"` all map to
/// `"order-item"`. Idempotent: applying it twice equals applying it once.
pub fn to_kebab_case(input: &str) -> String {
    let s = BOUNDARY_UPPER_LOWER.replace_all(input, "$1-$2");
    let s = BOUNDARY_LOWER_UPPER.replace_all(&s, "$1-$2");
    let s = SEPARATORS.replace_all(&s, "-");
    s.to_lowercase().trim_matches('-').to_string()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The three casing views of one module name
///
/// Constructed once per scaffolding run and immutable thereafter. All
/// views are derived eagerly so later stages cannot observe inconsistent
/// forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName {
    raw: String,
    pascal: String,
    camel: String,
    kebab: String,
}

impl ModuleName {
    /// Parse and validate a free-form module name
    ///
    /// # Errors
    ///
    /// Returns [`InvalidName`] for empty/whitespace-only input, or for
    /// input with no word characters to build an identifier from.
    pub fn parse(input: &str) -> Result<Self, InvalidName> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(InvalidName::Empty);
        }
        let pascal = to_pascal_case(raw);
        if pascal.is_empty() {
            return Err(InvalidName::NoWords {
                input: raw.to_string(),
            });
        }
        Ok(ModuleName {
            raw: raw.to_string(),
            pascal,
            camel: to_camel_case(raw),
            kebab: to_kebab_case(raw),
        })
    }

    /// The trimmed input the views were derived from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// PascalCase view, e.g. `OrderItem`
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// camelCase view, e.g. `orderItem`
    pub fn camel(&self) -> &str {
        &self.camel
    }

    /// kebab-case view, e.g. `order-item`
    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    /// The class identifier registered in the composition root,
    /// e.g. `OrderItemModule`
    pub fn module_ident(&self) -> String {
        format!("{}Module", self.pascal)
    }
}
