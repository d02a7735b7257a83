//! Value collection
//!
//! Maps each discovered placeholder name to a replacement string. The
//! `date` field (any case) is filled automatically with today's date and
//! never prompted; everything else is asked once on the terminal, trimmed,
//! with empty input accepted.

use std::collections::BTreeMap;

use chrono::Local;
use dialoguer::Input;

use crate::error::CovergenResult;

/// Date format used for the auto-filled field and artifact names
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolved placeholder-name → value mapping for one fill pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSet(BTreeMap<String, String>);

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First non-empty value among the given keys, in order.
    /// Used to derive the company string for the artifact name.
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.is_empty())
    }
}

/// Value for a field that is filled without prompting, if any
pub fn auto_value(name: &str) -> Option<String> {
    if name.eq_ignore_ascii_case("date") {
        Some(Local::now().format(DATE_FORMAT).to_string())
    } else {
        None
    }
}

/// Prompt for every placeholder value, one pass, no re-prompting.
/// Auto-filled fields are echoed instead of asked.
pub fn collect_values(placeholders: &[String]) -> CovergenResult<ValueSet> {
    let mut values = ValueSet::new();

    println!("\nEnter values for each field:");
    println!("{}", "-".repeat(40));

    for name in placeholders {
        if let Some(value) = auto_value(name) {
            println!("  {name}: {value} (auto)");
            values.insert(name, value);
            continue;
        }

        let input: String = Input::new()
            .with_prompt(format!("  {name}"))
            .allow_empty(true)
            .interact_text()?;
        values.insert(name, input.trim().to_string());
    }

    Ok(values)
}
