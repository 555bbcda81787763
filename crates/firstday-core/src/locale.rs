use std::fmt;

use regex::Regex;
use tracing::debug;

const LOCALE_ENV_VARS: &[&str] = &["LC_TIME", "LC_ALL", "LANG"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag(String);

impl LocaleTag {
    pub fn new(raw: &str) -> Option<Self> {
        let cleaned = clean_tag(raw)?;
        if !is_well_formed(&cleaned) {
            return None;
        }
        Some(LocaleTag(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    pub fn region(&self) -> Option<&str> {
        self.0.split('-').skip(1).find(|subtag| {
            (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
                || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()))
        })
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn detect() -> Option<LocaleTag> {
    for var in LOCALE_ENV_VARS {
        let Ok(raw) = std::env::var(var) else {
            continue;
        };
        if raw.trim().is_empty() {
            continue;
        }
        match LocaleTag::new(&raw) {
            Some(tag) => {
                debug!(source = var, locale = %tag, "detected environment locale");
                return Some(tag);
            }
            None => {
                debug!(source = var, value = %raw, "ignoring unusable locale value");
            }
        }
    }

    debug!("no locale available from environment");
    None
}

// Strips the codeset suffix and maps underscores, e.g. "en_US.UTF-8"
// becomes "en-US". The C and POSIX pseudo-locales carry no region data.
fn clean_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let base = trimmed.split('.').next().unwrap_or(trimmed);
    let cleaned = base.replace('_', "-");
    if cleaned.is_empty()
        || cleaned.eq_ignore_ascii_case("c")
        || cleaned.eq_ignore_ascii_case("posix")
    {
        return None;
    }
    Some(cleaned)
}

fn is_well_formed(tag: &str) -> bool {
    let Ok(tag_re) = Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$") else {
        return false;
    };
    tag_re.is_match(tag)
}
