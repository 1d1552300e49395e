/// Prompt API endpoints exposed by the proxy and forwarded to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Generate,
    Refine,
    Health,
}

/// Path prefix under which the proxy mounts every endpoint.
pub const PROXY_PREFIX: &str = "/api";

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Generate, Endpoint::Refine, Endpoint::Health];

    /// Path segment shared by the proxy route and the backend route.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Generate => "generate-prompt",
            Endpoint::Refine => "reprompt",
            Endpoint::Health => "health",
        }
    }

    /// Route mounted on the proxy, e.g. `/api/generate-prompt`.
    pub fn proxy_route(&self) -> String {
        format!("{}/{}", PROXY_PREFIX, self.path())
    }

    /// Join this endpoint onto a base URL, tolerating a trailing slash on the base.
    pub fn url_on(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path())
    }

    /// Message reported when an upstream failure carries no usable error field.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Endpoint::Generate => "Failed to generate prompt",
            Endpoint::Refine => "Failed to refine prompt",
            Endpoint::Health => "Backend health check failed",
        }
    }
}
