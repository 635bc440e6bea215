//! Display strings for the preview panel and status badges.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use crate::net::types::ApprovalStatus;

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Fa,
}

impl Locale {
    /// Parse a language tag such as `fa-IR`; anything unknown is English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("fa") { Self::Fa } else { Self::En }
    }

    /// Language tag for the `lang` attribute.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fa => "fa",
        }
    }

    #[must_use]
    pub fn not_specified(self) -> &'static str {
        match self {
            Self::En => "Not specified",
            Self::Fa => "تعیین نشده",
        }
    }

    #[must_use]
    pub fn currency(self) -> &'static str {
        match self {
            Self::En => "Toman",
            Self::Fa => "تومان",
        }
    }

    #[must_use]
    pub fn months(self) -> &'static str {
        match self {
            Self::En => "months",
            Self::Fa => "ماه",
        }
    }

    #[must_use]
    pub fn yes_no(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::En, true) => "Yes",
            (Self::En, false) => "No",
            (Self::Fa, true) => "بله",
            (Self::Fa, false) => "خیر",
        }
    }

    #[must_use]
    pub fn status_label(self, status: ApprovalStatus) -> &'static str {
        match (self, status) {
            (Self::En, ApprovalStatus::Pending) => "Pending",
            (Self::En, ApprovalStatus::Approved) => "Approved",
            (Self::En, ApprovalStatus::Rejected) => "Rejected",
            (Self::Fa, ApprovalStatus::Pending) => "در انتظار بررسی",
            (Self::Fa, ApprovalStatus::Approved) => "تایید شده",
            (Self::Fa, ApprovalStatus::Rejected) => "رد شده",
        }
    }

    /// Text direction for the `dir` attribute.
    #[must_use]
    pub fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Fa => "rtl",
        }
    }
}
