//! Share-link construction.
//!
//! Builds the three outbound share URLs (tweet intent, facebook sharer,
//! mailto) from the configured campaign URL and copy, with percent-encoded
//! query parameters.

use url::Url;

use crate::config::CampaignConfig;
use crate::Result;

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

/// Share targets offered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareProvider {
    Twitter,
    Facebook,
    Email,
}

impl ShareProvider {
    pub fn label(&self) -> &'static str {
        match self {
            ShareProvider::Twitter => "Twitter",
            ShareProvider::Facebook => "Facebook",
            ShareProvider::Email => "Email",
        }
    }
}

/// Pre-built share URLs for the campaign page.
#[derive(Debug, Clone)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub email: String,
}

impl ShareLinks {
    /// Build all provider links from the campaign configuration.
    pub fn build(campaign: &CampaignConfig) -> Result<Self> {
        let mut twitter = Url::parse(TWEET_INTENT)?;
        twitter
            .query_pairs_mut()
            .append_pair("text", &campaign.tweet_text)
            .append_pair("url", &campaign.url);

        let mut facebook = Url::parse(FACEBOOK_SHARER)?;
        facebook.query_pairs_mut().append_pair("u", &campaign.url);

        let body = format!(
            "Hi,\n\nI wanted to share something important with you. Millions of \
             lives are at stake, but we can help.\n\nCheck out this page to learn \
             more: {}\n\nI'm pledging 1% of my income to high-impact charities. \
             Would you consider joining me?\n\nBest wishes",
            campaign.url
        );
        let mut email = Url::parse("mailto:")?;
        email
            .query_pairs_mut()
            .append_pair("subject", &campaign.email_subject)
            .append_pair("body", &body);

        Ok(Self {
            twitter: twitter.to_string(),
            facebook: facebook.to_string(),
            email: email.to_string(),
        })
    }

    pub fn for_provider(&self, provider: ShareProvider) -> &str {
        match provider {
            ShareProvider::Twitter => &self.twitter,
            ShareProvider::Facebook => &self.facebook,
            ShareProvider::Email => &self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign() -> CampaignConfig {
        CampaignConfig {
            url: "https://onepercent.example.org/pledge".to_string(),
            ..CampaignConfig::default()
        }
    }

    #[test]
    fn test_twitter_link_encodes_url() {
        let links = ShareLinks::build(&campaign()).unwrap();
        assert!(links.twitter.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(links.twitter.contains("url=https%3A%2F%2Fonepercent.example.org%2Fpledge"));
    }

    #[test]
    fn test_facebook_link() {
        let links = ShareLinks::build(&campaign()).unwrap();
        assert!(links
            .facebook
            .starts_with("https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2F"));
    }

    #[test]
    fn test_email_link_encodes_body() {
        let links = ShareLinks::build(&campaign()).unwrap();
        assert!(links.email.starts_with("mailto:?subject="));
        // Newlines in the body must be percent-encoded
        assert!(links.email.contains("%0A"));
        assert!(links.email.contains("body="));
    }

    #[test]
    fn test_provider_lookup() {
        let links = ShareLinks::build(&campaign()).unwrap();
        assert_eq!(links.for_provider(ShareProvider::Twitter), links.twitter);
        assert_eq!(links.for_provider(ShareProvider::Email), links.email);
    }
}
