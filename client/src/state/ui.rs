//! Local UI chrome state (editor tabs, locale).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the product record so switching tabs
//! can never touch form data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::locale::Locale;

/// UI state for the admin chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub locale: Locale,
    pub product_tab: ProductTab,
}

impl UiState {
    /// Activate an editor tab. Returns `true` if the selection changed.
    pub fn select_tab(&mut self, tab: ProductTab) -> bool {
        if self.product_tab == tab {
            return false;
        }
        self.product_tab = tab;
        true
    }
}

/// Sections of the product editor, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductTab {
    #[default]
    Pricing,
    Inventory,
    Shipping,
    Warranty,
}

impl ProductTab {
    pub const ALL: [Self; 4] = [Self::Pricing, Self::Inventory, Self::Shipping, Self::Warranty];

    /// Position within [`ProductTab::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pricing => "Pricing",
            Self::Inventory => "Inventory",
            Self::Shipping => "Shipping",
            Self::Warranty => "Warranty",
        }
    }

    /// Width of the active-tab indicator as a percentage of the bar.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn indicator_width_percent() -> f64 {
        100.0 / Self::ALL.len() as f64
    }

    /// Horizontal offset of the indicator, proportional to the tab index.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn indicator_offset_percent(self) -> f64 {
        self.index() as f64 * Self::indicator_width_percent()
    }
}
