//! NDA input fields and the placeholder tokens they fill.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder token for the client name.
pub const CLIENT_NAME_TOKEN: &str = "<<Client Name>>";

/// Placeholder token for the company name.
pub const COMPANY_NAME_TOKEN: &str = "<<Company Name>>";

/// Placeholder token for the address.
pub const ADDRESS_TOKEN: &str = "<<Address>>";

/// Placeholder token for the designation.
pub const DESIGNATION_TOKEN: &str = "<<Designation>>";

/// Placeholder token for the agreement date.
pub const DATE_TOKEN: &str = "<<Date>>";

/// Mapping from literal placeholder token to replacement value.
///
/// Tokens are exact substrings with no nesting and no escaping; insertion
/// order is irrelevant.
pub type PlaceholderMap = HashMap<String, String>;

/// The five inputs an NDA is generated from.
///
/// Equality is derived so a session can detect changed inputs and drop
/// stale artifact paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NdaFields {
    /// Client (signing party) name
    pub client_name: String,

    /// Company name
    pub company_name: String,

    /// Client address
    pub address: String,

    /// Client designation (job title)
    pub designation: String,

    /// Agreement date
    pub date: NaiveDate,
}

impl NdaFields {
    /// Create fields for the given client and date.
    pub fn new(
        client_name: impl Into<String>,
        company_name: impl Into<String>,
        address: impl Into<String>,
        designation: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            company_name: company_name.into(),
            address: address.into(),
            designation: designation.into(),
            date,
        }
    }

    /// Build the placeholder map for these fields.
    ///
    /// The date is rendered as `DD-MM-YYYY` in the document body, which is
    /// a different format from the one used in file names.
    pub fn placeholders(&self) -> PlaceholderMap {
        let mut map = PlaceholderMap::new();
        map.insert(CLIENT_NAME_TOKEN.into(), self.client_name.clone());
        map.insert(COMPANY_NAME_TOKEN.into(), self.company_name.clone());
        map.insert(ADDRESS_TOKEN.into(), self.address.clone());
        map.insert(DESIGNATION_TOKEN.into(), self.designation.clone());
        map.insert(DATE_TOKEN.into(), self.date.format("%d-%m-%Y").to_string());
        map
    }

    /// Base output name, without extension: `NDA Agreement - {client} {DD Mon YYYY}`.
    ///
    /// Deterministic: the same client and date always derive the same name,
    /// so regeneration overwrites the previous artifacts.
    pub fn base_file_name(&self) -> String {
        format!(
            "NDA Agreement - {} {}",
            self.client_name,
            self.date.format("%d %b %Y")
        )
    }

    /// File name of the generated Word document.
    pub fn document_file_name(&self) -> String {
        format!("{}.docx", self.base_file_name())
    }

    /// File name of the converted PDF.
    pub fn pdf_file_name(&self) -> String {
        format!("{}.pdf", self.base_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NdaFields {
        NdaFields::new(
            "Jane Doe",
            "Acme Corp",
            "1 Main St",
            "Director",
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        )
    }

    #[test]
    fn test_placeholder_map_contents() {
        let map = sample().placeholders();
        assert_eq!(map.len(), 5);
        assert_eq!(map.get(CLIENT_NAME_TOKEN).unwrap(), "Jane Doe");
        assert_eq!(map.get(COMPANY_NAME_TOKEN).unwrap(), "Acme Corp");
        assert_eq!(map.get(ADDRESS_TOKEN).unwrap(), "1 Main St");
        assert_eq!(map.get(DESIGNATION_TOKEN).unwrap(), "Director");
    }

    #[test]
    fn test_body_date_format() {
        let map = sample().placeholders();
        assert_eq!(map.get(DATE_TOKEN).unwrap(), "05-03-2024");
    }

    #[test]
    fn test_file_name_determinism() {
        let fields = sample();
        assert_eq!(
            fields.document_file_name(),
            "NDA Agreement - Jane Doe 05 Mar 2024.docx"
        );
        assert_eq!(
            fields.pdf_file_name(),
            "NDA Agreement - Jane Doe 05 Mar 2024.pdf"
        );
        // Same inputs, same names
        assert_eq!(fields.document_file_name(), sample().document_file_name());
    }

    #[test]
    fn test_fields_equality() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);

        b.client_name = "John Doe".into();
        assert_ne!(a, b);
    }
}
