//! Static route classification.
//!
//! The routing layer hands the gate a table of path-prefix rules; the gate
//! only ever asks "what does path P require". The table is built once at
//! startup and read-only afterwards.

/// Access level a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Forwarded with no identity; handlers must not assume one is present.
    Public,
    /// Any verified identity.
    Authenticated,
    /// Verified identity with the ADMIN role.
    AdminOnly,
}

/// Prefix-rule table. The longest matching prefix wins; paths matching no
/// rule default to `Authenticated`, so forgetting to list a new route can
/// only ever over-protect it.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Rules sorted longest-prefix-first.
    rules: Vec<(String, AccessPolicy)>,
}

impl RoutePolicy {
    pub fn new<I, P>(rules: I) -> Self
    where
        I: IntoIterator<Item = (P, AccessPolicy)>,
        P: Into<String>,
    {
        let mut rules: Vec<(String, AccessPolicy)> = rules
            .into_iter()
            .map(|(prefix, policy)| (prefix.into(), policy))
            .collect();
        rules.sort_by_key(|(prefix, _)| std::cmp::Reverse(prefix.len()));
        Self { rules }
    }

    pub fn classify(&self, path: &str) -> AccessPolicy {
        self.rules
            .iter()
            .find(|(prefix, _)| Self::prefix_matches(prefix, path))
            .map(|(_, policy)| *policy)
            .unwrap_or(AccessPolicy::Authenticated)
    }

    /// A prefix matches whole path segments only: `/api/auth` covers
    /// `/api/auth` and `/api/auth/signin`, not `/api/authority`.
    fn prefix_matches(prefix: &str, path: &str) -> bool {
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}
