//! Sellers.json document validation
//!
//! Validates an already-parsed JSON document against the sellers.json
//! disclosure schema, collecting every violation rather than stopping at
//! the first.
//!
//! ## Rule set
//! 1. **Presence/type**: required and optional string fields, array fields
//! 2. **Predicates**: `version` must coerce to a non-negative number;
//!    `is_confidential` must be exactly 0 or 1
//! 3. **Cross-field**: a seller must carry a `name` unless flagged confidential

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use crate::error::{Result, SellersJsonError};
use crate::model::SellerType;

/// A single schema violation found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Stable machine-readable rule code
    pub code: &'static str,
    /// Dotted locator of the offending field (e.g. "sellers.2.name")
    pub path: String,
    /// Human-readable description of the violation
    pub message: String,
}

/// Validate a sellers.json document, collecting every violation.
///
/// The document may have any shape; validation never fails and never panics.
/// Errors come back in a fixed order: document fields first (`contact_email`,
/// `contact_address`, `version`, `identifiers`, then each seller field by
/// index), the per-seller confidentiality rule next, and a missing `sellers`
/// sequence last. Returns an empty vector when the document is valid.
pub fn validate(document: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    optional_string(document.get("contact_email"), "contact_email", &mut errors);
    optional_string(document.get("contact_address"), "contact_address", &mut errors);
    check_version(document, &mut errors);
    check_identifiers(document, &mut errors);
    check_sellers(document, &mut errors);
    check_confidential_names(document, &mut errors);

    if matches!(document.get("sellers"), None | Some(Value::Null)) {
        errors.push(ValidationError {
            code: "REQUIRED",
            path: "sellers".to_string(),
            message: "sellers is required".to_string(),
        });
    }

    debug!(errors = errors.len(), "validated sellers.json document");
    errors
}

/// Validate a document, failing fast on the first violation.
///
/// Returns `Ok(())` for a valid document. For an invalid one, only the first
/// collected error is surfaced as [`SellersJsonError::Assertion`]; the rest
/// are discarded.
pub fn assert_valid(document: &Value) -> Result<()> {
    match validate(document).into_iter().next() {
        None => Ok(()),
        Some(first) => {
            warn!(path = %first.path, "sellers.json assertion failed");
            Err(SellersJsonError::Assertion {
                message: first.message,
            })
        }
    }
}

fn required_string(value: Option<&Value>, path: &str, errors: &mut Vec<ValidationError>) {
    match value {
        Some(Value::String(s)) if !s.is_empty() => {}
        Some(Value::String(_)) | Some(Value::Null) | None => errors.push(ValidationError {
            code: "REQUIRED",
            path: path.to_string(),
            message: format!("{} is required", path),
        }),
        Some(_) => errors.push(ValidationError {
            code: "TYPE",
            path: path.to_string(),
            message: format!("{} must be a string", path),
        }),
    }
}

fn optional_string(value: Option<&Value>, path: &str, errors: &mut Vec<ValidationError>) {
    match value {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(_) => errors.push(ValidationError {
            code: "TYPE",
            path: path.to_string(),
            message: format!("{} must be a string", path),
        }),
    }
}

// Coercion follows JavaScript Number(): leading/trailing whitespace is
// ignored and "inf"/"Infinity" parse. NaN and negatives fail; zero passes.
fn check_version(document: &Value, errors: &mut Vec<ValidationError>) {
    let ok = match document.get("version") {
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(|n| !n.is_nan() && n >= 0.0)
            .unwrap_or(false),
        _ => false,
    };
    if !ok {
        errors.push(ValidationError {
            code: "POSITIVE_NUMBER",
            path: "version".to_string(),
            message: "version must be a positive number".to_string(),
        });
    }
}

fn check_identifiers(document: &Value, errors: &mut Vec<ValidationError>) {
    let identifiers = match document.get("identifiers") {
        None | Some(Value::Null) => return,
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(ValidationError {
                code: "TYPE",
                path: "identifiers".to_string(),
                message: "identifiers must be an array".to_string(),
            });
            return;
        }
    };

    for (i, identifier) in identifiers.iter().enumerate() {
        required_string(
            identifier.get("name"),
            &format!("identifiers.{}.name", i),
            errors,
        );
        required_string(
            identifier.get("value"),
            &format!("identifiers.{}.value", i),
            errors,
        );
    }
}

fn check_sellers(document: &Value, errors: &mut Vec<ValidationError>) {
    let sellers = match document.get("sellers") {
        None | Some(Value::Null) => return,
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(ValidationError {
                code: "TYPE",
                path: "sellers".to_string(),
                message: "sellers must be an array".to_string(),
            });
            return;
        }
    };

    for (i, seller) in sellers.iter().enumerate() {
        required_string(
            seller.get("seller_id"),
            &format!("sellers.{}.seller_id", i),
            errors,
        );
        check_is_confidential(seller, i, errors);
        check_seller_type(seller, i, errors);
        optional_string(seller.get("name"), &format!("sellers.{}.name", i), errors);
        optional_string(seller.get("domain"), &format!("sellers.{}.domain", i), errors);
        optional_string(seller.get("comment"), &format!("sellers.{}.comment", i), errors);
    }
}

// The flag is optional, but once the key is written it must be exactly the
// number 0 or 1. "1", true, and null all fail.
fn check_is_confidential(seller: &Value, index: usize, errors: &mut Vec<ValidationError>) {
    let Some(value) = seller.get("is_confidential") else {
        return;
    };
    let ok = matches!(
        value,
        Value::Number(n) if n.as_f64() == Some(0.0) || n.as_f64() == Some(1.0)
    );
    if !ok {
        let path = format!("sellers.{}.is_confidential", index);
        let message = format!("{} must be either 0 or 1", path);
        errors.push(ValidationError {
            code: "BOOL_BIN",
            path,
            message,
        });
    }
}

fn check_seller_type(seller: &Value, index: usize, errors: &mut Vec<ValidationError>) {
    let path = format!("sellers.{}.seller_type", index);
    match seller.get("seller_type") {
        Some(Value::String(s)) if !s.is_empty() => {
            if s.parse::<SellerType>().is_err() {
                let valid = SellerType::all()
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                let message = format!("{} must be one of {}", path, valid);
                errors.push(ValidationError {
                    code: "SELLER_TYPE",
                    path,
                    message,
                });
            }
        }
        Some(Value::String(_)) | Some(Value::Null) | None => {
            let message = format!("{} is required", path);
            errors.push(ValidationError {
                code: "REQUIRED",
                path,
                message,
            });
        }
        Some(_) => {
            let message = format!("{} must be a string", path);
            errors.push(ValidationError {
                code: "TYPE",
                path,
                message,
            });
        }
    }
}

// Runs independently of the per-field checks above, so a seller with a bad
// confidentiality flag and no name collects an error from both.
fn check_confidential_names(document: &Value, errors: &mut Vec<ValidationError>) {
    let Some(Value::Array(sellers)) = document.get("sellers") else {
        return;
    };

    for (i, seller) in sellers.iter().enumerate() {
        let confidential = seller.get("is_confidential").and_then(Value::as_f64) == Some(1.0);
        if !confidential && !is_truthy(seller.get("name")) {
            let path = format!("sellers.{}.name", i);
            let message = format!("{} cannot be empty when is_confidential is not set to 1", path);
            errors.push(ValidationError {
                code: "CONFIDENTIAL_NAME",
                path,
                message,
            });
        }
    }
}

// JavaScript truthiness: null, false, numeric zero, and "" are falsy;
// arrays and objects are always truthy.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
