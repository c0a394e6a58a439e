// src/core/affiliate.rs
//
// Best-effort affiliate tagging. A link whose host contains a known retailer
// pattern gets that retailer's tracking parameter, unless it already has a
// non-empty one. Everything else (unknown hosts, unparsable links) is
// returned exactly as given.

use url::Url;

use crate::config::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffiliateRule {
    /// Lower-case substring matched against the URL host
    pub host_contains: String,
    /// Query parameter carrying the tracking value
    pub param: String,
    pub value: String,
}

impl AffiliateRule {
    pub fn new(host_contains: &str, param: &str, value: &str) -> Self {
        Self {
            host_contains: lc!(host_contains),
            param: s!(param),
            value: s!(value),
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(AMAZON_HOST, AMAZON_PARAM, AMAZON_PLACEHOLDER),
            Self::new(FLIPKART_HOST, FLIPKART_PARAM, FLIPKART_PLACEHOLDER),
        ]
    }

    fn matches_host(&self, host: &str) -> bool {
        host.contains(&self.host_contains)
    }
}

/// Rewrite `url` with the first matching rule. Never fails.
pub fn attach_affiliate(url: &str, rules: &[AffiliateRule]) -> String {
    if url.trim().is_empty() {
        return s!(url);
    }
    let Ok(mut parsed) = Url::parse(url) else {
        logd!("Affiliate: Unparsable link left as-is: {}", url);
        return s!(url);
    };

    let host = parsed.host_str().map(|h| h.to_ascii_lowercase()).unwrap_or_default();
    let Some(rule) = rules.iter().find(|r| r.matches_host(&host)) else {
        return s!(url);
    };

    // First occurrence decides, an empty value counts as missing.
    let tagged = parsed
        .query_pairs()
        .find(|(k, _)| *k == rule.param)
        .map(|(_, v)| !v.is_empty())
        .unwrap_or(false);
    if tagged {
        return s!(url);
    }

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(k, _)| *k != rule.param)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    {
        let mut pairs = parsed.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(kept);
        pairs.append_pair(&rule.param, &rule.value);
    }
    parsed.to_string()
}
