use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_opens_pricing_in_english() {
    let state = UiState::default();
    assert_eq!(state.product_tab, ProductTab::Pricing);
    assert_eq!(state.locale, Locale::En);
}

#[test]
fn select_tab_reports_changes() {
    let mut state = UiState::default();
    assert!(!state.select_tab(ProductTab::Pricing));
    assert!(state.select_tab(ProductTab::Shipping));
    assert_eq!(state.product_tab, ProductTab::Shipping);
}

// =============================================================
// ProductTab
// =============================================================

#[test]
fn product_tab_indices_follow_display_order() {
    let indices: Vec<_> = ProductTab::ALL.iter().map(|t| t.index()).collect();
    assert_eq!(indices, [0, 1, 2, 3]);
}

#[test]
fn indicator_offset_is_proportional_to_index() {
    assert_eq!(ProductTab::indicator_width_percent(), 25.0);
    assert_eq!(ProductTab::Pricing.indicator_offset_percent(), 0.0);
    assert_eq!(ProductTab::Inventory.indicator_offset_percent(), 25.0);
    assert_eq!(ProductTab::Shipping.indicator_offset_percent(), 50.0);
    assert_eq!(ProductTab::Warranty.indicator_offset_percent(), 75.0);
}

#[test]
fn product_tab_labels_are_distinct() {
    for (i, a) in ProductTab::ALL.iter().enumerate() {
        for (j, b) in ProductTab::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
