use super::*;

fn settings(name: &str, logo: Option<&str>) -> SiteSettings {
    SiteSettings {
        site_name: name.to_owned(),
        site_logo: logo.map(str::to_owned),
        ..SiteSettings::default()
    }
}

#[test]
fn brand_name_uses_configured_name() {
    assert_eq!(brand_name(Some(&settings("Coin Bank", None))), "Coin Bank");
}

#[test]
fn brand_name_falls_back_when_missing_or_blank() {
    assert_eq!(brand_name(None), DEFAULT_SITE_NAME);
    assert_eq!(brand_name(Some(&settings("  ", None))), DEFAULT_SITE_NAME);
}

#[test]
fn brand_logo_falls_back_to_bundled_logo() {
    assert_eq!(brand_logo(None), LOGO_PATH);
    assert_eq!(brand_logo(Some(&settings("x", Some("")))), LOGO_PATH);
    assert_eq!(brand_logo(Some(&settings("x", Some("https://cdn.example/logo.png")))), "https://cdn.example/logo.png");
}
