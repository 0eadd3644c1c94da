use ferrous_blacklist_domain::{Blacklist, LookupKey, LookupVerdict};
use std::sync::Arc;
use tracing::debug;

/// Classifies request paths against a bound, read-only blacklist.
pub struct LookupHostUseCase {
    blacklist: Arc<Blacklist>,
}

impl LookupHostUseCase {
    pub fn new(blacklist: Arc<Blacklist>) -> Self {
        Self { blacklist }
    }

    pub fn execute(&self, path: &str) -> LookupVerdict {
        let Some(key) = LookupKey::from_path(path) else {
            return LookupVerdict::BadRequest;
        };

        let verdict = if self.blacklist.contains(key.as_str()) {
            LookupVerdict::Blacklisted
        } else {
            LookupVerdict::Allowed
        };

        debug!(host = key.as_str(), verdict = %verdict, "Lookup");
        verdict
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }
}
