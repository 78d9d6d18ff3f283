use campus_core::model::{DownloadAvailability, DownloadLink};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadCardVm {
    pub platform_label: &'static str,
    /// `None` renders the "coming soon" badge instead of a link.
    pub href: Option<String>,
}

impl From<&DownloadLink> for DownloadCardVm {
    fn from(link: &DownloadLink) -> Self {
        Self {
            platform_label: link.platform().label(),
            href: match link.availability() {
                DownloadAvailability::Available(url) => Some(url.to_string()),
                DownloadAvailability::ComingSoon => None,
            },
        }
    }
}

#[must_use]
pub fn map_download_cards(links: &[DownloadLink]) -> Vec<DownloadCardVm> {
    links.iter().map(DownloadCardVm::from).collect()
}
