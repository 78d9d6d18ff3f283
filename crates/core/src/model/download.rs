use std::fmt;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DownloadLinkError {
    #[error("invalid download URL for {platform}: {raw}")]
    InvalidUrl { platform: Platform, raw: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
    Windows,
    MacOs,
}

impl Platform {
    pub const ALL: [Self; 4] = [Self::Android, Self::Ios, Self::Windows, Self::MacOs];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
        }
    }

    /// Upper-case token used in environment variable names.
    #[must_use]
    pub const fn env_token(self) -> &'static str {
        match self {
            Self::Android => "ANDROID",
            Self::Ios => "IOS",
            Self::Windows => "WINDOWS",
            Self::MacOs => "MACOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadAvailability {
    Available(Url),
    ComingSoon,
}

/// A configured download entry.
///
/// `coming_soon` defaults to true: a link is only offered when the flag is
/// explicitly `false` and a URL is configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadLink {
    platform: Platform,
    url: Option<Url>,
    coming_soon: Option<bool>,
}

impl DownloadLink {
    /// Build a link from raw configuration values.
    ///
    /// # Errors
    ///
    /// Returns `DownloadLinkError::InvalidUrl` if a non-blank URL does not parse.
    pub fn new(
        platform: Platform,
        url: Option<&str>,
        coming_soon: Option<bool>,
    ) -> Result<Self, DownloadLinkError> {
        let url = url
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                Url::parse(raw).map_err(|_| DownloadLinkError::InvalidUrl {
                    platform,
                    raw: raw.to_string(),
                })
            })
            .transpose()?;
        Ok(Self {
            platform,
            url,
            coming_soon,
        })
    }

    #[must_use]
    pub fn coming_soon(platform: Platform) -> Self {
        Self {
            platform,
            url: None,
            coming_soon: None,
        }
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn availability(&self) -> DownloadAvailability {
        match (self.coming_soon, self.url.as_ref()) {
            (Some(false), Some(url)) => DownloadAvailability::Available(url.clone()),
            _ => DownloadAvailability::ComingSoon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://downloads.example.org/campus.apk";

    #[test]
    fn url_without_explicit_flag_is_coming_soon() {
        let link = DownloadLink::new(Platform::Android, Some(URL), None).unwrap();
        assert_eq!(link.availability(), DownloadAvailability::ComingSoon);
    }

    #[test]
    fn explicit_false_with_url_is_available() {
        let link = DownloadLink::new(Platform::Android, Some(URL), Some(false)).unwrap();
        assert_eq!(
            link.availability(),
            DownloadAvailability::Available(Url::parse(URL).unwrap())
        );
    }

    #[test]
    fn explicit_false_without_url_is_coming_soon() {
        let link = DownloadLink::new(Platform::Ios, Some("   "), Some(false)).unwrap();
        assert_eq!(link.availability(), DownloadAvailability::ComingSoon);
    }

    #[test]
    fn explicit_true_wins_over_url() {
        let link = DownloadLink::new(Platform::Windows, Some(URL), Some(true)).unwrap();
        assert_eq!(link.availability(), DownloadAvailability::ComingSoon);
    }

    #[test]
    fn rejects_malformed_urls() {
        let err = DownloadLink::new(Platform::MacOs, Some("not a url"), Some(false)).unwrap_err();
        assert!(matches!(err, DownloadLinkError::InvalidUrl { platform: Platform::MacOs, .. }));
    }
}
