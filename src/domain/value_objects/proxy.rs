//! Repository proxy value object

/// Proxy resolved for a particular repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyInfo {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Hosts that bypass the proxy, `|` or `,` separated, `*` wildcards allowed
    pub non_proxy_hosts: Option<String>,
}

impl ProxyInfo {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            port,
            username: None,
            password: None,
            non_proxy_hosts: None,
        }
    }

    /// Returns true if `host` is listed in the non-proxy hosts
    pub fn bypasses(&self, host: &str) -> bool {
        let Some(patterns) = self.non_proxy_hosts.as_deref() else {
            return false;
        };
        patterns
            .split(['|', ','])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .any(|pattern| wildcard_match(&pattern.to_lowercase(), &host.to_lowercase()))
    }
}

/// Glob match supporting `*` only
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();
    if parts.len() == 1 {
        return pattern == text;
    }

    let mut rest = text;
    let first = parts[0];
    if !rest.starts_with(first) {
        return false;
    }
    rest = &rest[first.len()..];

    let last = parts[parts.len() - 1];
    for middle in &parts[1..parts.len() - 1] {
        match rest.find(middle) {
            Some(idx) => rest = &rest[idx + middle.len()..],
            None => return false,
        }
    }
    rest.len() >= last.len() && rest.ends_with(last)
}
