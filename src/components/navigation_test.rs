use super::*;

#[test]
fn nav_items_cover_every_page_section() {
    let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
    assert_eq!(
        labels,
        ["Home", "About", "Services", "Team", "Publications", "Contact"]
    );
}

#[test]
fn nav_items_link_to_in_page_anchors() {
    for item in NAV_ITEMS {
        assert!(
            item.href.starts_with('#'),
            "{} must be an in-page anchor, got {}",
            item.label,
            item.href
        );
        assert!(item.href.len() > 1);
    }
}
