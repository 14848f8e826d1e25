//! Product field validation.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    sync::LazyLock,
};

use regex::Regex;
use thiserror::Error;

use crate::domain::products::models::NewProduct;

/// Three lowercase segments joined by hyphens, e.g. `abc-def-ghi`.
pub const SKU_PATTERN: &str = "[a-z]+-[a-z]+-[a-z]+";

#[expect(
    clippy::expect_used,
    reason = "the pattern is a compile-time constant and is covered by tests"
)]
static SKU_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SKU_PATTERN).expect("SKU pattern must compile"));

/// A single rule broken by a product payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every rule broken by a product payload, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(Violation {
            field,
            message: message.into(),
        });
    }

    /// Names of the offending fields.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|violation| violation.field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }

            Display::fmt(violation, f)?;
            first = false;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("validation failed: {0}")]
    Failed(Violations),
}

/// Check every field rule, collecting all violations rather than stopping at
/// the first.
///
/// # Errors
///
/// Returns [`ValidationError::Failed`] listing each broken rule.
pub fn validate(product: &NewProduct) -> Result<(), ValidationError> {
    let mut violations = Violations::default();

    if product.name.trim().is_empty() {
        violations.push("name", "is required");
    }

    if product.price.is_nan() || product.price <= 0.0 {
        violations.push("price", "must be greater than 0");
    }

    if product.sku.is_empty() {
        violations.push("sku", "is required");
    } else if !is_valid_sku(&product.sku) {
        violations.push("sku", format!("must contain exactly one match of {SKU_PATTERN}"));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Failed(violations))
    }
}

/// A SKU is valid when the pattern matches exactly once across the whole value.
#[must_use]
pub fn is_valid_sku(sku: &str) -> bool {
    SKU_REGEX.find_iter(sku).count() == 1
}
