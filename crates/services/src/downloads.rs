use std::env;

use campus_core::model::{DownloadLink, Platform};
use tracing::warn;

/// Download links for every supported platform, read from configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadCatalog {
    links: Vec<DownloadLink>,
}

impl Default for DownloadCatalog {
    fn default() -> Self {
        Self {
            links: Platform::ALL
                .into_iter()
                .map(DownloadLink::coming_soon)
                .collect(),
        }
    }
}

impl DownloadCatalog {
    /// Reads `CAMPUS_DOWNLOAD_<PLATFORM>_URL` and `CAMPUS_DOWNLOAD_<PLATFORM>_COMING_SOON`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Malformed URLs are logged and
    /// the platform stays "coming soon".
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let links = Platform::ALL
            .into_iter()
            .map(|platform| {
                let token = platform.env_token();
                let url = lookup(&format!("CAMPUS_DOWNLOAD_{token}_URL"));
                let coming_soon = lookup(&format!("CAMPUS_DOWNLOAD_{token}_COMING_SOON"))
                    .and_then(|raw| parse_flag(&raw));
                DownloadLink::new(platform, url.as_deref(), coming_soon).unwrap_or_else(|err| {
                    warn!(error = %err, "ignoring download link");
                    DownloadLink::coming_soon(platform)
                })
            })
            .collect();
        Self { links }
    }

    #[must_use]
    pub fn links(&self) -> &[DownloadLink] {
        &self.links
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
