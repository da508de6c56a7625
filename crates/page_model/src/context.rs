//! Identity of the observed page.

use serde::{Deserialize, Serialize};

/// Where the monitored page lives and what is rendering it.
///
/// Attached to every outbound report so the analytics backend can segment
/// by page and client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    /// Full URL of the observed page.
    pub url: String,
    /// User agent string of the rendering client.
    pub user_agent: String,
}

impl PageContext {
    /// Create a context for the given URL with an unknown user agent.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: String::new(),
        }
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = PageContext::new("https://example.com/donate").with_user_agent("test-agent");
        assert_eq!(ctx.url, "https://example.com/donate");
        assert_eq!(ctx.user_agent, "test-agent");
    }

    #[test]
    fn test_context_default() {
        let ctx = PageContext::default();
        assert_eq!(ctx.url, "about:blank");
        assert!(ctx.user_agent.is_empty());
    }
}
