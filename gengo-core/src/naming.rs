//! Snake-case to camel-case conversion for Go identifiers.
//!
//! Go spells initialisms with a uniform case (`UserID`, not `UserId`), so
//! segments found in the abbreviation table are upper-cased as a whole
//! instead of being title-cased.

/// Initialisms recognized by [`Caser::default`].
///
/// Entries are lowercase; lookups are case-insensitive.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "acl", "api", "ascii", "cpi", "cpu", "css", "dns", "eof", "gif", "guid", "html", "http",
    "https", "id", "ip", "json", "lhs", "qps", "ram", "rhs", "rpc", "sla", "smtp", "sql", "ssh",
    "tcp", "tls", "ttl", "udp", "ui", "uid", "uri", "url", "utf8", "uuid", "vm", "xml", "xmpp",
    "xsrf", "xss",
];

/// Snake-case to camel-case converter backed by an abbreviation table.
///
/// # Example
///
/// ```
/// use gengo_core::Caser;
///
/// let caser = Caser::default().with_abbreviation("sku");
/// assert_eq!(caser.upper_camel("item_sku"), "ItemSKU");
/// assert_eq!(caser.lower_camel("user_id"), "userID");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caser {
    abbreviations: Vec<String>,
}

impl Caser {
    /// Create a caser with an empty abbreviation table.
    pub fn empty() -> Self {
        Self {
            abbreviations: Vec::new(),
        }
    }

    /// Add an abbreviation. Stored lowercase; duplicates are ignored.
    pub fn with_abbreviation(mut self, abbr: impl AsRef<str>) -> Self {
        let abbr = abbr.as_ref().to_lowercase();
        if !abbr.is_empty() && !self.abbreviations.contains(&abbr) {
            self.abbreviations.push(abbr);
        }
        self
    }

    /// Add several abbreviations.
    pub fn with_abbreviations<I, S>(self, abbrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        abbrs
            .into_iter()
            .fold(self, |caser, abbr| caser.with_abbreviation(abbr))
    }

    /// Check whether a segment is a known abbreviation, ignoring case.
    pub fn is_abbreviation(&self, segment: &str) -> bool {
        self.abbreviations
            .iter()
            .any(|abbr| abbr.eq_ignore_ascii_case(segment))
    }

    /// Convert to UpperCamel, e.g. `"user_id"` -> `"UserID"`.
    ///
    /// Empty segments produced by leading, trailing or repeated underscores
    /// are dropped.
    pub fn upper_camel(&self, s: &str) -> String {
        s.split('_').map(|seg| self.segment(seg)).collect()
    }

    /// Convert to lowerCamel, e.g. `"user_id"` -> `"userID"`.
    ///
    /// The first segment is kept exactly as given.
    pub fn lower_camel(&self, s: &str) -> String {
        let mut segments = s.split('_');
        let mut out = segments.next().unwrap_or_default().to_string();
        for seg in segments {
            out.push_str(&self.segment(seg));
        }
        out
    }

    fn segment(&self, seg: &str) -> String {
        if seg.is_empty() {
            String::new()
        } else if self.is_abbreviation(seg) {
            seg.to_uppercase()
        } else {
            title(seg)
        }
    }
}

impl Default for Caser {
    fn default() -> Self {
        Self::empty().with_abbreviations(DEFAULT_ABBREVIATIONS)
    }
}

/// Upper-case the first character, leave the rest untouched.
fn title(seg: &str) -> String {
    let mut chars = seg.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert to UpperCamel using the default abbreviation table.
pub fn to_upper_camel(s: &str) -> String {
    Caser::default().upper_camel(s)
}

/// Convert to lowerCamel using the default abbreviation table.
pub fn to_lower_camel(s: &str) -> String {
    Caser::default().lower_camel(s)
}
