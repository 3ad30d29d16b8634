//! Typed sellers.json document structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::error::SellersJsonError;
use crate::validator::{self, ValidationError};

/// Relationship between the advertising system and the seller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SellerType {
    /// Sells inventory it owns directly
    Direct,
    /// Owns the sites or apps the inventory comes from
    Publisher,
    /// Resells inventory on behalf of other sellers
    Intermediary,
    /// Purchases inventory from publishers and resells it
    Reseller,
    /// Acts as both publisher and intermediary
    Both,
}

impl SellerType {
    /// Canonical upper-case form used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SellerType::Direct => "DIRECT",
            SellerType::Publisher => "PUBLISHER",
            SellerType::Intermediary => "INTERMEDIARY",
            SellerType::Reseller => "RESELLER",
            SellerType::Both => "BOTH",
        }
    }

    /// All accepted seller types
    pub fn all() -> &'static [SellerType] {
        &[
            SellerType::Direct,
            SellerType::Publisher,
            SellerType::Intermediary,
            SellerType::Reseller,
            SellerType::Both,
        ]
    }
}

impl fmt::Display for SellerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SellerType {
    type Err = SellersJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DIRECT" => Ok(SellerType::Direct),
            "PUBLISHER" => Ok(SellerType::Publisher),
            "INTERMEDIARY" => Ok(SellerType::Intermediary),
            "RESELLER" => Ok(SellerType::Reseller),
            "BOTH" => Ok(SellerType::Both),
            _ => Err(SellersJsonError::UnknownSellerType(s.to_string())),
        }
    }
}

// Deserializes through FromStr so lower- and mixed-case wire values load.
impl<'de> Deserialize<'de> for SellerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An identifier associated with the publisher (e.g. a registry or TAG ID)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    /// Name of the identifier system
    pub name: String,
    /// The identifier value
    pub value: String,
}

impl Identifier {
    /// Create a new identifier
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single seller entry in the disclosure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Unique identifier for the seller within the advertising system
    pub seller_id: String,
    /// 1 if the seller's identity is withheld, 0 or absent otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_confidential: Option<u8>,
    /// Relationship of the seller to the advertising system
    pub seller_type: SellerType,
    /// Legal name of the seller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Business domain of the seller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Free-form comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Seller {
    /// Create a new seller entry
    pub fn new(seller_id: impl Into<String>, seller_type: SellerType) -> Self {
        Self {
            seller_id: seller_id.into(),
            is_confidential: None,
            seller_type,
            name: None,
            domain: None,
            comment: None,
        }
    }

    /// Create a named seller entry
    pub fn with_name(
        seller_id: impl Into<String>,
        seller_type: SellerType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            seller_id: seller_id.into(),
            is_confidential: None,
            seller_type,
            name: Some(name.into()),
            domain: None,
            comment: None,
        }
    }

    /// Create a confidential seller entry, which may omit the name
    pub fn confidential(seller_id: impl Into<String>, seller_type: SellerType) -> Self {
        Self {
            seller_id: seller_id.into(),
            is_confidential: Some(1),
            seller_type,
            name: None,
            domain: None,
            comment: None,
        }
    }

    /// Set the business domain
    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain = Some(domain.into());
    }

    /// Set the free-form comment
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = Some(comment.into());
    }
}

/// A complete sellers.json disclosure document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellersJson {
    /// Contact email for inquiries about this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Postal contact address for inquiries about this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    /// Version of the disclosure schema
    pub version: String,
    /// External identifiers associated with the publisher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<Identifier>>,
    /// All sellers paid for inventory via the advertising system
    pub sellers: Vec<Seller>,
}

impl SellersJson {
    /// Create a new document with the given version and sellers
    pub fn new(version: impl Into<String>, sellers: Vec<Seller>) -> Self {
        Self {
            contact_email: None,
            contact_address: None,
            version: version.into(),
            identifiers: None,
            sellers,
        }
    }

    /// Set the contact email
    pub fn set_contact_email(&mut self, email: impl Into<String>) {
        self.contact_email = Some(email.into());
    }

    /// Set the contact address
    pub fn set_contact_address(&mut self, address: impl Into<String>) {
        self.contact_address = Some(address.into());
    }

    /// Append an identifier
    pub fn add_identifier(&mut self, identifier: Identifier) {
        self.identifiers.get_or_insert_with(Vec::new).push(identifier);
    }

    /// Validate this document against the sellers.json schema rules
    pub fn validate(&self) -> Result<Vec<ValidationError>, SellersJsonError> {
        let value = serde_json::to_value(self)?;
        Ok(validator::validate(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seller_type_as_str_roundtrip() {
        for seller_type in SellerType::all() {
            assert_eq!(
                seller_type.as_str().parse::<SellerType>().unwrap(),
                *seller_type
            );
        }
    }

    #[test]
    fn test_seller_type_case_insensitive() {
        assert_eq!("direct".parse::<SellerType>().unwrap(), SellerType::Direct);
        assert_eq!("Publisher".parse::<SellerType>().unwrap(), SellerType::Publisher);
        assert_eq!("BOTH".parse::<SellerType>().unwrap(), SellerType::Both);
    }

    #[test]
    fn test_seller_type_unknown() {
        assert!("FOO".parse::<SellerType>().is_err());
        assert!("".parse::<SellerType>().is_err());
    }

    #[test]
    fn test_seller_type_display_matches_as_str() {
        for seller_type in SellerType::all() {
            assert_eq!(seller_type.to_string(), seller_type.as_str());
        }
    }

    #[test]
    fn test_seller_type_serde() {
        let value = serde_json::to_value(SellerType::Intermediary).unwrap();
        assert_eq!(value, json!("INTERMEDIARY"));

        let parsed: SellerType = serde_json::from_value(json!("reseller")).unwrap();
        assert_eq!(parsed, SellerType::Reseller);
    }

    #[test]
    fn test_seller_serialization_skips_unset_fields() {
        let seller = Seller::new("42", SellerType::Direct);
        let value = serde_json::to_value(&seller).unwrap();
        assert_eq!(value, json!({"seller_id": "42", "seller_type": "DIRECT"}));
    }

    #[test]
    fn test_document_roundtrip() {
        let mut doc = SellersJson::new(
            "1.0",
            vec![
                Seller::with_name("1", SellerType::Direct, "Alice Media"),
                Seller::confidential("2", SellerType::Both),
            ],
        );
        doc.set_contact_email("ads@example.com");
        doc.add_identifier(Identifier::new("TAG-ID", "28374"));

        let value = serde_json::to_value(&doc).unwrap();
        let back: SellersJson = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_valid_document_produces_no_findings() {
        let doc = SellersJson::new(
            "1.0",
            vec![Seller::with_name("1", SellerType::Publisher, "Alice Media")],
        );
        assert!(doc.validate().unwrap().is_empty());
    }

    #[test]
    fn test_model_version_still_coerced() {
        let doc = SellersJson::new(
            "abc",
            vec![Seller::with_name("1", SellerType::Direct, "Alice Media")],
        );
        let errors = doc.validate().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "version must be a positive number");
    }

    #[test]
    fn test_model_still_catches_cross_field() {
        let doc = SellersJson::new("1.0", vec![Seller::new("1", SellerType::Direct)]);
        let errors = doc.validate().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "sellers.0.name");
    }
}
