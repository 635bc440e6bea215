use super::*;

#[test]
fn indicator_style_offsets_by_tab_index() {
    assert_eq!(indicator_style(ProductTab::Pricing), "width: 25%; inset-inline-start: 0%;");
    assert_eq!(indicator_style(ProductTab::Shipping), "width: 25%; inset-inline-start: 50%;");
}
