use super::*;

#[test]
fn defaults_match_shipped_markup() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.theme.storage_key, "color-theme");
    assert_eq!(cfg.theme.toggle, "#theme-toggle");
    assert_eq!(cfg.menu.container, ".menu");
    assert!((cfg.menu.desktop_breakpoint_px - 768.0).abs() < f64::EPSILON);
    assert!((cfg.menu.close_time_scale - 1.2).abs() < f64::EPSILON);
    assert_eq!(cfg.menu.reveal_delay_ms, 500);
    assert_eq!(cfg.counter.step_ms, 20);
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(r##"{"menu": {"desktopBreakpointPx": 1024, "openTrigger": "#burger"}}"##).unwrap();
    assert!((cfg.menu.desktop_breakpoint_px - 1024.0).abs() < f64::EPSILON);
    assert_eq!(cfg.menu.open_trigger, "#burger");
    assert_eq!(cfg.menu.close_trigger, ".menu-close");
    assert_eq!(cfg.theme, ThemeConfig::default());
}

#[test]
fn theme_storage_key_override() {
    let cfg = SiteConfig::from_json(r#"{"theme": {"storageKey": "site-theme"}}"#).unwrap();
    assert_eq!(cfg.theme.storage_key, "site-theme");
    assert_eq!(cfg.theme.dark_icon, "#theme-toggle-dark-icon");
}

#[test]
fn malformed_json_is_config_error() {
    let err = SiteConfig::from_json("{menu:").unwrap_err();
    assert!(matches!(err, BindError::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = SiteConfig::from_json(r#"{"counter": {"stepMs": "fast"}}"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid site config"));
}

#[test]
fn default_accordion_variants() {
    let cfg = SiteConfig::default();
    let items: Vec<_> = cfg.accordions.iter().map(|a| a.items.as_str()).collect();
    assert_eq!(items, [".accordion-item", ".accordion-itemV4", ".accordion-itemV5"]);
    assert_eq!(cfg.accordions[1].state_attribute.as_deref(), Some("data-active"));
    assert_eq!(cfg.accordions[1].open_body_margin_px, Some(20.0));
    assert_eq!(cfg.accordions[2].open_border, None);
}

#[test]
fn accordion_list_override_replaces_variants() {
    let cfg = SiteConfig::from_json(r#"{"accordions": [{"items": ".faq", "openPaddingPx": null}]}"#).unwrap();
    assert_eq!(cfg.accordions.len(), 1);
    assert_eq!(cfg.accordions[0].items, ".faq");
    assert_eq!(cfg.accordions[0].header, ".accordion-header");
    assert_eq!(cfg.accordions[0].open_padding_px, None);
}

#[test]
fn team_and_showcase_defaults() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.team.tabs, ".tab-member");
    assert_eq!(cfg.team.swap_delay_ms, 300);
    assert_eq!(cfg.team.settle_delay_ms, 400);
    assert_eq!(cfg.showcase.video, "#hero-show-case-video");
}
