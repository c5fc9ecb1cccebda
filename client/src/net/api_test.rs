use super::*;

#[test]
fn fetch_failed_message_includes_endpoint_and_status() {
    assert_eq!(fetch_failed_message(CATEGORIES_ENDPOINT, 503), "GET /api/categories failed: 503");
}

#[test]
fn endpoints_live_under_api_prefix() {
    for endpoint in [CATEGORIES_ENDPOINT, MENU_ITEMS_ENDPOINT, PAYMENT_METHODS_ENDPOINT, SITE_SETTINGS_ENDPOINT] {
        assert!(endpoint.starts_with("/api/"), "{endpoint}");
    }
}
