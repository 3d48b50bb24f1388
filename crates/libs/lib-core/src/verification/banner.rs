//! Banner copy: title by trust, description by panel variant.

use super::text;
use super::trust::TrustStatus;
use super::PanelVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    pub description: &'static str,
}

impl Banner {
    pub fn lookup(trust: TrustStatus, variant: PanelVariant) -> Self {
        let title = match trust {
            TrustStatus::Unverified => text::TITLE_UNVERIFIED,
            TrustStatus::Verified => text::TITLE_VERIFIED,
        };
        let description = match variant {
            PanelVariant::UnverifiedSupport => text::DESCRIPTION,
            PanelVariant::Legacy => text::LEGACY_DESCRIPTION,
        };

        Self { title, description }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_combinations() {
        let cases = [
            (TrustStatus::Unverified, PanelVariant::UnverifiedSupport, text::TITLE_UNVERIFIED, text::DESCRIPTION),
            (TrustStatus::Unverified, PanelVariant::Legacy, text::TITLE_UNVERIFIED, text::LEGACY_DESCRIPTION),
            (TrustStatus::Verified, PanelVariant::UnverifiedSupport, text::TITLE_VERIFIED, text::DESCRIPTION),
            (TrustStatus::Verified, PanelVariant::Legacy, text::TITLE_VERIFIED, text::LEGACY_DESCRIPTION),
        ];

        for (trust, variant, title, description) in cases {
            let banner = Banner::lookup(trust, variant);
            assert_eq!(banner.title, title);
            assert_eq!(banner.description, description);
        }
    }
}
