//! Minimal INI-style parser for the plaintext secret store document
//!
//! Supports exactly the subset the store format needs: `[section]`
//! headers, `name = value` and `name: value` properties, bare property
//! names without a value, and `#`/`;` comment lines. Property names are
//! lowercased; duplicate sections and properties are last-wins.

use crate::error::StoreError;
use std::collections::HashMap;

pub(crate) struct Section {
    pub name: String,
    /// Property name → value; `None` for a bare name without a value
    pub properties: HashMap<String, Option<String>>,
}

pub(crate) fn parse(text: &str) -> Result<Vec<Section>, StoreError> {
    let mut sections: Vec<Section> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let line_number = index + 1;

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') {
            let name = line
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or(StoreError::MalformedHeader { line: line_number })?;

            sections.push(Section {
                name: name.to_string(),
                properties: HashMap::new(),
            });
            continue;
        }

        let section = sections
            .last_mut()
            .ok_or(StoreError::OrphanProperty { line: line_number })?;

        let (name, value) = split_property(line);
        if name.is_empty() {
            return Err(StoreError::ConfigParseError {
                section: section.name.clone(),
                reason: format!("property without a name at line {}", line_number),
            });
        }

        section.properties.insert(name.to_lowercase(), value);
    }

    Ok(sections)
}

/// Split a property line at the first `=` or `:` delimiter
///
/// A line without a delimiter is a bare property with no value.
fn split_property(line: &str) -> (String, Option<String>) {
    match line.find(|c| c == '=' || c == ':') {
        Some(pos) => (
            line[..pos].trim().to_string(),
            Some(line[pos + 1..].trim().to_string()),
        ),
        None => (line.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_and_properties() {
        let sections = parse("[alpha]\nkey = AAAA\n[beta]\nkey: BBBB\n").unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "alpha");
        assert_eq!(
            sections[0].properties.get("key"),
            Some(&Some("AAAA".to_string()))
        );
        assert_eq!(
            sections[1].properties.get("key"),
            Some(&Some("BBBB".to_string()))
        );
    }

    #[test]
    fn test_property_names_are_lowercased() {
        let sections = parse("[a]\nKEY = AAAA\n").unwrap();
        assert!(sections[0].properties.contains_key("key"));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let text = "# leading comment\n\n[a]\n; section comment\nkey = AAAA\n\n";
        let sections = parse(text).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].properties.len(), 1);
    }

    #[test]
    fn test_bare_property_has_no_value() {
        let sections = parse("[a]\nkey = AAAA\nlegacy-flag\n").unwrap();
        assert_eq!(sections[0].properties.get("legacy-flag"), Some(&None));
    }

    #[test]
    fn test_empty_value_is_not_bare() {
        let sections = parse("[a]\nkey =\n").unwrap();
        assert_eq!(sections[0].properties.get("key"), Some(&Some(String::new())));
    }

    #[test]
    fn test_duplicate_property_last_wins() {
        let sections = parse("[a]\nkey = FIRST\nkey = SECOND\n").unwrap();
        assert_eq!(
            sections[0].properties.get("key"),
            Some(&Some("SECOND".to_string()))
        );
    }

    #[test]
    fn test_property_before_section_rejected() {
        let result = parse("key = AAAA\n[a]\n");
        assert!(matches!(result, Err(StoreError::OrphanProperty { line: 1 })));
    }

    #[test]
    fn test_unclosed_header_rejected() {
        let result = parse("[a\nkey = AAAA\n");
        assert!(matches!(result, Err(StoreError::MalformedHeader { line: 1 })));
    }

    #[test]
    fn test_empty_section_name_rejected() {
        let result = parse("[  ]\n");
        assert!(matches!(result, Err(StoreError::MalformedHeader { line: 1 })));
    }

    #[test]
    fn test_value_may_contain_delimiters() {
        let sections = parse("[a]\nkey = AB=CD:EF\n").unwrap();
        assert_eq!(
            sections[0].properties.get("key"),
            Some(&Some("AB=CD:EF".to_string()))
        );
    }
}
