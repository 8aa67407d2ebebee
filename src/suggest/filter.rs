use memchr::memmem::Finder;

/// Literal, case-sensitive containment test built from the text after `@`
///
/// The typed text is never interpreted as a pattern, so `.`, `*`, `(` and
/// friends only ever match themselves.
pub struct DomainFilter<'a> {
    finder: Finder<'a>,
}

impl<'a> DomainFilter<'a> {
    pub fn new(needle: &'a str) -> Self {
        Self {
            finder: Finder::new(needle.as_bytes()),
        }
    }

    /// Text typed after the first `@`, if there is one
    pub fn from_value(value: &'a str) -> Option<Self> {
        value.find('@').map(|pos| Self::new(&value[pos + 1..]))
    }

    pub fn needle(&self) -> &[u8] {
        self.finder.needle()
    }

    pub fn matches(&self, domain: &str) -> bool {
        self.finder.find(domain.as_bytes()).is_some()
    }
}
