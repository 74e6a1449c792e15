use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const CAPABILITIES_HEADER: &str = "x-feed-capabilities";
pub const REQUEST_ORIGIN_HEADER: &str = "x-request-origin";

/// What the requesting client can render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCapabilities {
    pub supports_ordered_delivery: bool,
    pub supports_reply_surfacing: bool,
}

impl ClientCapabilities {
    pub fn legacy() -> Self {
        Self::default()
    }

    pub fn engagement_only() -> Self {
        Self {
            supports_ordered_delivery: true,
            supports_reply_surfacing: false,
        }
    }

    pub fn reply_aware() -> Self {
        Self {
            supports_ordered_delivery: true,
            supports_reply_surfacing: true,
        }
    }

    /// Derive capabilities from request headers.
    ///
    /// `x-feed-capabilities: ordered, replies` lists tokens; the web origin
    /// always gets both.
    pub fn from_headers<'h, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = (&'h str, &'h str)>,
    {
        let mut caps = Self::default();

        for (name, value) in headers {
            if name.eq_ignore_ascii_case(CAPABILITIES_HEADER) {
                for token in value.split(',').map(str::trim) {
                    if token.eq_ignore_ascii_case("ordered") {
                        caps.supports_ordered_delivery = true;
                    } else if token.eq_ignore_ascii_case("replies") {
                        caps.supports_reply_surfacing = true;
                    }
                }
            } else if name.eq_ignore_ascii_case(REQUEST_ORIGIN_HEADER)
                && value.trim().eq_ignore_ascii_case("web")
            {
                return Self::reply_aware();
            }
        }

        caps
    }
}

/// Whole-algorithm variant, chosen once per call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingMode {
    /// Exclusion plus a popular / remaining split
    LoggedOut,
    /// Exclusion only, input order preserved
    Legacy,
    /// Full cascade including reply-gated rules
    ReplyAware,
    /// Full cascade without reply-gated rules
    EngagementOnly,
}

impl OrderingMode {
    pub fn select(viewer_id: Option<Uuid>, client: ClientCapabilities) -> Self {
        match viewer_id {
            None => OrderingMode::LoggedOut,
            Some(_) if !client.supports_ordered_delivery => OrderingMode::Legacy,
            Some(_) if client.supports_reply_surfacing => OrderingMode::ReplyAware,
            Some(_) => OrderingMode::EngagementOnly,
        }
    }

    pub fn requires_viewer(&self) -> bool {
        !matches!(self, OrderingMode::LoggedOut)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingMode::LoggedOut => "logged_out",
            OrderingMode::Legacy => "legacy",
            OrderingMode::ReplyAware => "reply_aware",
            OrderingMode::EngagementOnly => "engagement_only",
        }
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call request metadata resolved by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRequest {
    pub viewer_id: Option<Uuid>,
    pub client: ClientCapabilities,
}

impl RankRequest {
    pub fn logged_out() -> Self {
        Self {
            viewer_id: None,
            client: ClientCapabilities::default(),
        }
    }

    pub fn for_viewer(viewer_id: Uuid, client: ClientCapabilities) -> Self {
        Self {
            viewer_id: Some(viewer_id),
            client,
        }
    }

    pub fn mode(&self) -> OrderingMode {
        OrderingMode::select(self.viewer_id, self.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection() {
        let viewer = Some(Uuid::new_v4());

        assert_eq!(
            OrderingMode::select(None, ClientCapabilities::reply_aware()),
            OrderingMode::LoggedOut
        );
        assert_eq!(
            OrderingMode::select(viewer, ClientCapabilities::legacy()),
            OrderingMode::Legacy
        );
        assert_eq!(
            OrderingMode::select(viewer, ClientCapabilities::engagement_only()),
            OrderingMode::EngagementOnly
        );
        assert_eq!(
            OrderingMode::select(viewer, ClientCapabilities::reply_aware()),
            OrderingMode::ReplyAware
        );
    }

    #[test]
    fn test_replies_without_ordering_is_legacy() {
        let caps = ClientCapabilities {
            supports_ordered_delivery: false,
            supports_reply_surfacing: true,
        };
        assert_eq!(
            OrderingMode::select(Some(Uuid::new_v4()), caps),
            OrderingMode::Legacy
        );
    }

    #[test]
    fn test_capabilities_from_headers() {
        let caps = ClientCapabilities::from_headers([("X-Feed-Capabilities", " Ordered , replies")]);
        assert_eq!(caps, ClientCapabilities::reply_aware());

        let caps = ClientCapabilities::from_headers([("x-feed-capabilities", "ordered,unknown")]);
        assert_eq!(caps, ClientCapabilities::engagement_only());

        let caps = ClientCapabilities::from_headers([("user-agent", "nova-ios/1.0")]);
        assert_eq!(caps, ClientCapabilities::legacy());
    }

    #[test]
    fn test_web_origin_gets_reply_surfacing() {
        let caps = ClientCapabilities::from_headers([
            ("x-feed-capabilities", ""),
            ("x-request-origin", "WEB"),
        ]);
        assert_eq!(caps, ClientCapabilities::reply_aware());
    }

    #[test]
    fn test_requires_viewer() {
        assert!(!OrderingMode::LoggedOut.requires_viewer());
        assert!(OrderingMode::Legacy.requires_viewer());
        assert!(OrderingMode::ReplyAware.requires_viewer());
        assert!(OrderingMode::EngagementOnly.requires_viewer());
    }
}
