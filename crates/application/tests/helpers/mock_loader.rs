#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_blacklist_application::ports::BlacklistLoader;
use ferrous_blacklist_domain::DomainError;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockBlacklistLoader {
    result: Result<String, DomainError>,
    calls: AtomicUsize,
}

impl MockBlacklistLoader {
    pub fn with_text(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlacklistLoader for MockBlacklistLoader {
    async fn load_text(&self) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
