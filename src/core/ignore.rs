use std::collections::HashSet;

use anyhow::Context;
use regex::RegexSet;

/// Directory names skipped unless `--all` is given.
pub const DEFAULT_IGNORE: [&str; 6] = [
    "node_modules",
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    "env",
];

/// Entry names excluded at every depth.
///
/// Plain names match by exact equality. Names containing `*` or `?` are
/// treated as globs over the whole name and compiled into one `RegexSet`.
#[derive(Clone, Debug, Default)]
pub struct IgnoreSet {
    exact_matches: HashSet<String>,
    regex_set: Option<RegexSet>,
}

impl IgnoreSet {
    pub fn new<'a, I>(patterns: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut exact_matches = HashSet::new();
        let mut regex_patterns = Vec::new();

        for pattern in patterns {
            let p = pattern.trim();
            if p.is_empty() {
                continue;
            }

            if p.contains('*') || p.contains('?') {
                regex_patterns.push(glob_to_regex(p));
            } else {
                exact_matches.insert(p.to_owned());
            }
        }

        let regex_set = if regex_patterns.is_empty() {
            None
        } else {
            Some(
                RegexSet::new(&regex_patterns)
                    .with_context(|| format!("invalid ignore pattern in {regex_patterns:?}"))?,
            )
        };

        Ok(Self {
            exact_matches,
            regex_set,
        })
    }

    pub fn defaults() -> Self {
        Self {
            exact_matches: DEFAULT_IGNORE.iter().map(|name| (*name).to_owned()).collect(),
            regex_set: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.exact_matches.is_empty() && self.regex_set.is_none()
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        if self.exact_matches.contains(name) {
            return true;
        }

        match &self.regex_set {
            Some(regex_set) => regex_set.is_match(name),
            None => false,
        }
    }
}

/// `*` matches any run of characters, `?` exactly one; everything else is literal.
fn glob_to_regex(pattern: &str) -> String {
    let mut regex_pattern = String::with_capacity(pattern.len() * 2 + 2);
    regex_pattern.push('^');

    for c in pattern.chars() {
        match c {
            '*' => regex_pattern.push_str(".*"),
            '?' => regex_pattern.push('.'),
            _ => regex_pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    regex_pattern.push('$');
    regex_pattern
}
