//! Product validation schema.
//!
//! The contract every product must satisfy before it reaches storage:
//! a name of 1-200 characters, a strictly positive finite price, a
//! non-negative stock count (defaulting to 0 when absent) and a category
//! reference. The loader funnels each candidate insert through
//! [`ProductDraft::validate`]; any other layer constructing products from
//! external input is expected to do the same.

use crate::errors::{Error, Result};

/// Maximum length of a product name, in characters.
pub const NAME_MAX_CHARS: usize = 200;

/// Raw product input before validation. `price` and `stock` are optional
/// because the JSON records may omit them; `category_id` is structurally
/// required since a draft is only built once the category resolved.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    /// Product name as given in the input
    pub name: String,
    /// Unit price, required
    pub price: Option<f64>,
    /// Units in stock, defaults to 0
    pub stock: Option<i64>,
    /// Resolved category identifier
    pub category_id: i64,
}

/// A validated product ready to be staged for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Product name, 1-200 characters
    pub name: String,
    /// Unit price, strictly positive and finite
    pub price: f64,
    /// Units in stock, never negative
    pub stock: i64,
    /// Category identifier the product belongs to
    pub category_id: i64,
}

impl ProductDraft {
    /// Checks the draft against the schema and normalizes it.
    ///
    /// # Errors
    /// Returns `Error::Validation` if:
    /// - the name is empty or longer than 200 characters
    /// - the price is absent, not finite, or not strictly positive
    /// - the stock is negative
    pub fn validate(self) -> Result<NewProduct> {
        let name_chars = self.name.chars().count();
        if name_chars == 0 || name_chars > NAME_MAX_CHARS {
            return Err(Error::Validation {
                message: format!(
                    "product name must be 1-{NAME_MAX_CHARS} characters, got {name_chars}"
                ),
            });
        }

        let Some(price) = self.price else {
            return Err(Error::Validation {
                message: "product price is required".to_string(),
            });
        };
        if !price.is_finite() {
            return Err(Error::Validation {
                message: format!("product price must be a finite number, got {price}"),
            });
        }
        if price <= 0.0 {
            return Err(Error::Validation {
                message: format!("product price must be greater than 0, got {price}"),
            });
        }

        let stock = self.stock.unwrap_or(0);
        if stock < 0 {
            return Err(Error::Validation {
                message: format!("product stock must be >= 0, got {stock}"),
            });
        }

        Ok(NewProduct {
            name: self.name,
            price,
            stock,
            category_id: self.category_id,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn draft(name: &str, price: Option<f64>, stock: Option<i64>) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            stock,
            category_id: 1,
        }
    }

    #[test]
    fn test_valid_draft_passes_and_defaults_stock() {
        let product = draft("Dune", Some(15.5), None).validate().unwrap();
        assert_eq!(product.name, "Dune");
        assert_eq!(product.price, 15.5);
        assert_eq!(product.stock, 0);
        assert_eq!(product.category_id, 1);
    }

    #[test]
    fn test_explicit_stock_is_kept() {
        let product = draft("Dune", Some(15.5), Some(10)).validate().unwrap();
        assert_eq!(product.stock, 10);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = draft("", Some(1.0), None).validate();
        assert!(matches!(result, Err(Error::Validation { message: _ })));
    }

    #[test]
    fn test_name_length_boundary() {
        // Exactly 200 characters is fine, 201 is not
        let ok = "x".repeat(200);
        assert!(draft(&ok, Some(1.0), None).validate().is_ok());

        let too_long = "x".repeat(201);
        let result = draft(&too_long, Some(1.0), None).validate();
        assert!(matches!(result, Err(Error::Validation { message: _ })));
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // 200 multi-byte characters are still within bounds
        let name = "ß".repeat(200);
        assert!(draft(&name, Some(1.0), None).validate().is_ok());
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let result = draft("Dune", None, None).validate();
        assert!(matches!(result, Err(Error::Validation { message: _ })));
    }

    #[test]
    fn test_zero_and_negative_prices_are_rejected() {
        assert!(draft("Dune", Some(0.0), None).validate().is_err());
        assert!(draft("Dune", Some(-3.5), None).validate().is_err());
    }

    #[test]
    fn test_non_finite_prices_are_rejected() {
        assert!(draft("Dune", Some(f64::NAN), None).validate().is_err());
        assert!(draft("Dune", Some(f64::INFINITY), None).validate().is_err());
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let result = draft("Dune", Some(1.0), Some(-1)).validate();
        assert!(matches!(result, Err(Error::Validation { message: _ })));
    }
}
