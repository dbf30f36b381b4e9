//! In-memory secret store
//!
//! Maps account names to code generators, built by parsing the
//! plaintext INI-style document. Every entry is a validated
//! `CodeGenerator`; no raw map mutation is exposed.

mod ini;

use crate::error::{OathstoreError, OtpError, Result, StoreError};
use crate::oath::generator::{CodeGenerator, DEFAULT_DIGITS};
use crate::types::{Base32Secret, OtpCode};
use std::collections::BTreeMap;
use tracing::debug;

/// The one property every section must carry: the Base32 secret
const KEY_PROPERTY: &str = "key";

pub struct SecretStore {
    entries: BTreeMap<String, CodeGenerator>,
    digits: u32,
}

impl SecretStore {
    pub fn new() -> Self {
        Self::with_digits(DEFAULT_DIGITS)
    }

    /// A store whose generators produce codes of the given width
    pub fn with_digits(digits: u32) -> Self {
        Self {
            entries: BTreeMap::new(),
            digits,
        }
    }

    /// Parse `text` and replace the store contents with its entries
    ///
    /// Each section name becomes an account; each section must carry a
    /// `key` property holding the Base32 secret. Unknown properties are
    /// ignored; a repeated section name is last-wins. The replacement is
    /// atomic: the new mapping is built completely before it is swapped
    /// in, so a failed load leaves the previous entries untouched.
    pub fn load(&mut self, text: &str) -> Result<()> {
        let sections = ini::parse(text)?;
        let mut entries = BTreeMap::new();

        for section in sections {
            let ini::Section { name, properties } = section;

            let secret = match properties.get(KEY_PROPERTY) {
                Some(Some(value)) => Base32Secret::new(value.clone()),
                Some(None) => {
                    return Err(StoreError::ConfigParseError {
                        section: name,
                        reason: "`key` property has no value".to_string(),
                    }
                    .into())
                }
                None => {
                    return Err(StoreError::ConfigParseError {
                        section: name,
                        reason: "missing `key` property".to_string(),
                    }
                    .into())
                }
            };

            let generator =
                CodeGenerator::new(&secret, None, self.digits).map_err(|source| match source {
                    OtpError::InvalidSecretEncoding => OathstoreError::Store(StoreError::InvalidSecret {
                        section: name.clone(),
                        source,
                    }),
                    other => OathstoreError::Otp(other),
                })?;

            entries.insert(name, generator);
        }

        debug!("Loaded {} account(s) into secret store", entries.len());
        self.entries = entries;
        Ok(())
    }

    pub fn get(&self, account: &str) -> Option<&CodeGenerator> {
        self.entries.get(account)
    }

    /// Generate the current code for `account`
    ///
    /// An unknown account is a normal `Ok(None)` result, not an error.
    pub fn generate_code(&self, account: &str) -> Result<Option<OtpCode>> {
        match self.entries.get(account) {
            Some(generator) => Ok(Some(generator.generate_code()?)),
            None => Ok(None),
        }
    }

    /// Generate the code for `account` at an explicit counter value
    pub fn generate_code_at(&self, account: &str, counter: u64) -> Option<OtpCode> {
        self.entries.get(account).map(|g| g.generate_at(counter))
    }

    /// Account names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SecretStore {
    fn default() -> Self {
        Self::new()
    }
}
