use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{LeadError, Result};
use crate::model::RawRow;

const NAME_ALIASES: &[&str] = &[
    "full name",
    "full_name",
    "fullname",
    "name",
    "lead name",
    "customer name",
    "contact name",
];

const EMAIL_ALIASES: &[&str] = &[
    "email address",
    "email",
    "e-mail",
    "email_address",
    "mail",
    "email id",
];

const MOBILE_ALIASES: &[&str] = &[
    "mobile number",
    "mobile",
    "mobile_number",
    "phone number",
    "phone",
    "phone_number",
    "mobile no",
    "contact number",
    "whatsapp number",
    "cell",
];

/// Accepted column headers for each lead field, in priority order.
///
/// Deserializes from `{"name": [...], "email": [...], "mobile": [...]}`; any
/// omitted field keeps its built-in list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AliasTable {
    pub name: Vec<String>,
    pub email: Vec<String>,
    pub mobile: Vec<String>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self {
            name: to_owned(NAME_ALIASES),
            email: to_owned(EMAIL_ALIASES),
            mobile: to_owned(MOBILE_ALIASES),
        }
    }
}

impl AliasTable {
    /// Loads an alias table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let table: AliasTable = serde_json::from_str(&data)?;
        table.validate()?;
        debug!(
            name = table.name.len(),
            email = table.email.len(),
            mobile = table.mobile.len(),
            "loaded alias table"
        );
        Ok(table)
    }

    /// Rejects tables that could never produce a lead.
    pub fn validate(&self) -> Result<()> {
        if self.mobile.iter().all(|alias| normalize(alias).is_empty()) {
            return Err(LeadError::InvalidAliases(
                "at least one mobile alias is required".into(),
            ));
        }
        Ok(())
    }
}

/// Finds the header of `row` matching the first alias that is present.
///
/// Headers and aliases are compared lower-cased and trimmed; the header is
/// returned exactly as it appears in the row.
pub fn resolve_key<'r, S: AsRef<str>>(row: &'r RawRow, aliases: &[S]) -> Option<&'r str> {
    let keys: Vec<(&str, String)> = row.keys().map(|key| (key, normalize(key))).collect();

    aliases.iter().find_map(|alias| {
        let alias = normalize(alias.as_ref());
        keys.iter()
            .find(|(_, normalized)| *normalized == alias)
            .map(|(original, _)| *original)
    })
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn to_owned(aliases: &[&str]) -> Vec<String> {
    aliases.iter().map(|alias| alias.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(keys: &[&str]) -> RawRow {
        keys.iter().map(|key| (*key, "x")).collect()
    }

    #[test]
    fn returns_original_key_for_case_and_whitespace_variants() {
        let aliases = ["email"];
        for key in [" Email ", "EMAIL", "email", "\tEmAiL"] {
            let row = row(&["Name", key]);
            assert_eq!(resolve_key(&row, &aliases), Some(key));
        }
    }

    #[test]
    fn alias_priority_beats_column_order() {
        let row = row(&["Phone", "Mobile Number"]);
        assert_eq!(resolve_key(&row, &["mobile number", "phone"]), Some("Mobile Number"));
    }

    #[test]
    fn first_matching_column_wins_within_one_alias() {
        let row = row(&["phone", " PHONE"]);
        assert_eq!(resolve_key(&row, &["phone"]), Some("phone"));
    }

    #[test]
    fn aliases_are_normalized_too() {
        let row = row(&["e-mail"]);
        assert_eq!(resolve_key(&row, &["  E-Mail "]), Some("e-mail"));
    }

    #[test]
    fn missing_alias_yields_none() {
        let row = row(&["City", "Campaign"]);
        assert_eq!(resolve_key(&row, &AliasTable::default().mobile), None);
    }

    #[test]
    fn defaults_cover_export_headers() {
        let table = AliasTable::default();
        let row = row(&["Full Name", "Email Address", "Mobile Number"]);
        assert_eq!(resolve_key(&row, &table.name), Some("Full Name"));
        assert_eq!(resolve_key(&row, &table.email), Some("Email Address"));
        assert_eq!(resolve_key(&row, &table.mobile), Some("Mobile Number"));
    }

    #[test]
    fn partial_config_keeps_default_lists() {
        let table: AliasTable = serde_json::from_str(r#"{"mobile": ["tel"]}"#).unwrap();
        assert_eq!(table.mobile, vec!["tel".to_string()]);
        assert_eq!(table.name, AliasTable::default().name);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn load_reads_json_file() {
        let temp_dir = tempfile::tempdir().expect("temporary directory");
        let path = temp_dir.path().join("aliases.json");
        fs::write(&path, r#"{"name": ["Customer"], "mobile": ["Contact"]}"#)
            .expect("config written");

        let table = AliasTable::load(&path).expect("config loaded");
        let row = row(&["CUSTOMER", "contact "]);
        assert_eq!(resolve_key(&row, &table.name), Some("CUSTOMER"));
        assert_eq!(resolve_key(&row, &table.mobile), Some("contact "));
        assert_eq!(table.email, AliasTable::default().email);
    }

    #[test]
    fn empty_mobile_aliases_are_rejected() {
        let table: AliasTable = serde_json::from_str(r#"{"mobile": [" "]}"#).unwrap();
        assert!(matches!(table.validate(), Err(LeadError::InvalidAliases(_))));
    }
}
