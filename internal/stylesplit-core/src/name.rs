use std::collections::HashMap;

use crate::Config;

/// Filesystem-safe form of a raw section title: lowercased, the trailing
/// "component" word removed, every run of non-alphanumeric characters
/// collapsed to a single hyphen.
pub fn normalize(raw_name: &str) -> String {
    let lower = raw_name.to_lowercase();
    let lower = match lower.trim_end().strip_suffix("component") {
        Some(rest) if rest.ends_with(char::is_whitespace) => rest,
        _ => lower.as_str(),
    };

    let mut name = String::with_capacity(lower.len());
    for c in lower.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c);
        } else if !name.ends_with('-') {
            name.push('-');
        }
    }

    name.trim_matches('-').to_owned()
}

/// Title-case a raw name the way the generated banners expect: a letter
/// following a non-letter is uppercased, every other letter lowercased.
pub fn title_case(raw_name: &str) -> String {
    let mut out = String::with_capacity(raw_name.len());
    let mut prev_is_letter = false;
    for c in raw_name.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Decides output filenames segment by segment, in source order.
///
/// Duplicate normalized names are disambiguated by occurrence count through
/// the configured rename rules: the second and later occurrences of a name
/// with a rule take the renamed form. Repeats without a rule keep the
/// original name and overwrite, as the historical migration did.
pub struct NameAllocator<'c> {
    config: &'c Config,
    seen: HashMap<String, usize>,
}

impl<'c> NameAllocator<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            seen: HashMap::new(),
        }
    }

    /// The filename (without extension) for a raw section title, or `None`
    /// when the section is filtered out.
    pub fn allocate(&mut self, raw_name: &str) -> Option<String> {
        if self
            .config
            .skip_titles
            .iter()
            .any(|marker| raw_name.contains(marker.as_str()))
        {
            return None;
        }

        let name = normalize(raw_name);
        if name.is_empty() || self.config.skip_names.iter().any(|skip| *skip == name) {
            return None;
        }

        let count = self.seen.entry(name.clone()).or_insert(0);
        *count += 1;

        if *count > 1 {
            if let Some(renamed) = self.config.duplicate_renames.get(&name) {
                return Some(renamed.clone());
            }
        }

        Some(name)
    }
}
