//! Sellers.json Document Validator
//!
//! Validates sellers.json-style advertising disclosure documents against a
//! fixed schema and reports structural errors with dotted field paths.
//!
//! ## Features
//!
//! - **Collect-all validation**: `validate` walks the whole document and
//!   returns every violation, never stopping at the first
//! - **Fail-fast assertion**: `assert_valid` surfaces only the first
//!   violation as an error
//! - **Typed model**: build documents from [`SellersJson`], [`Seller`], and
//!   [`Identifier`] and validate them in place
//! - **Closed seller-type set**: [`SellerType`] models the accepted
//!   `seller_type` values, matched case-insensitively
//!
//! Documents arrive as already-parsed [`serde_json::Value`]s; loading and
//! parsing the JSON text is the caller's concern.

pub mod error;
pub mod model;
pub mod validator;

pub use error::{Result, SellersJsonError};
pub use model::{Identifier, Seller, SellerType, SellersJson};
pub use validator::{assert_valid, validate, ValidationError};
