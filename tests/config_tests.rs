// Host-side tests for start-up configuration and the bilingual copy tables.

use site_web::config::{data_attribute_name, ParticleParams, SiteConfig, OVERRIDE_KEYS};
use site_web::constants::*;
use site_web::error::ConfigError;
use site_web::i18n::{coded_word, service_number, tagline_options, text, Language, CLIENTS, SERVICES};
use site_web::scroll::ScrollState;
use std::collections::HashSet;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_sane() {
    assert!(SCROLL_EASE > 0.0 && SCROLL_EASE < 1.0);
    assert!(POINTER_DAMPING > 0.0 && POINTER_DAMPING < 1.0);
    assert!(PARTICLE_PEAK_FRACTION > 0.0 && PARTICLE_PEAK_FRACTION < 1.0);
    assert!(PARTICLE_MAX_SIZE_PX > 0.0);
    assert!(ACCORDION_MAX_HEIGHT_PX > 0.0);
    assert!(CURSOR_INNER_LAG_MS < CURSOR_OUTER_LAG_MS);
    assert!(CURSOR_SIZE_IDLE_PX < CURSOR_SIZE_HOVER_PX);
    assert!(ParticleParams::default().validate().is_ok());
}

#[test]
fn presets_switch_particle_timing() {
    let mut cfg = SiteConfig::default();
    assert_eq!(cfg.apply_override("particlePreset", "long-trail"), Ok(true));
    assert_eq!(cfg.particles.lifespan_ms, 18_000.0);
    assert_eq!(cfg.apply_override("particlePreset", "quick-bloom"), Ok(true));
    assert_eq!(cfg.particles.lifespan_ms, 3_000.0);
    assert_eq!(cfg.particles.peak_fraction, 0.10);
    assert_eq!(
        cfg.apply_override("particlePreset", "fireworks"),
        Err(ConfigError::UnknownPreset("fireworks".into()))
    );
    assert_eq!(cfg.particles, ParticleParams::quick_bloom());
}

#[test]
fn breakpoint_override_changes_layout_switch() {
    let mut cfg = SiteConfig::default();
    assert!(!cfg.is_narrow(1000.0));
    assert_eq!(cfg.apply_override("mobileBreakpoint", "1024"), Ok(true));
    assert!(cfg.is_narrow(1000.0));
}

#[test]
fn invalid_lifespan_is_rolled_back() {
    let mut cfg = SiteConfig::default();
    let err = cfg.apply_override("particleLifespan", "0").unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { key: "particleLifespan", .. }));
    assert_eq!(cfg.particles.lifespan_ms, PARTICLE_LIFESPAN_MS);
}

#[test]
fn scroll_ease_outside_unit_interval_is_refused() {
    for raw in ["0", "NaN", "2.5", "-0.1", "inf"] {
        let mut cfg = SiteConfig::default();
        let err = cfg.apply_override("scrollEase", raw).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "scrollEase", .. }), "{raw}");
        assert_eq!(cfg, SiteConfig::default(), "{raw} left the config untouched");
    }

    // whatever gets through still converges on the target
    let mut cfg = SiteConfig::default();
    assert_eq!(cfg.apply_override("scrollEase", "1"), Ok(true));
    let mut scroll = ScrollState::new(cfg.scroll);
    scroll.set_target(1000.0);
    for _ in 0..500 {
        scroll.tick();
    }
    assert!(scroll.is_settled());
}

#[test]
fn non_finite_and_negative_overrides_are_refused() {
    let cases = [
        ("mobileBreakpoint", "NaN"),
        ("mobileBreakpoint", "-1"),
        ("headerRevealZone", "-50"),
        ("revealDuration", "0"),
        ("deckAutoplay", "NaN"),
        ("particlePeak", "inf"),
    ];
    for (key, raw) in cases {
        let mut cfg = SiteConfig::default();
        assert!(cfg.apply_override(key, raw).is_err(), "{key}={raw}");
        assert_eq!(cfg, SiteConfig::default(), "{key}={raw}");
    }

    let mut cfg = SiteConfig::default();
    assert!(cfg.apply_override("mobileBreakpoint", "NaN").is_err());
    assert!(cfg.is_narrow(300.0));
}

#[test]
fn every_override_key_is_recognised() {
    for key in OVERRIDE_KEYS {
        let mut cfg = SiteConfig::default();
        let raw = if key == "particlePreset" { "default" } else { "0.5" };
        assert_eq!(cfg.apply_override(key, raw), Ok(true), "{key}");
        assert!(data_attribute_name(key).starts_with("data-"));
    }
}

#[test]
fn both_languages_have_every_string() {
    for key in ["navServices", "learnMore", "ideaValidationError", "ideaServiceError", "modalClose"] {
        let en = text(key, Language::En).unwrap();
        let es = text(key, Language::Es).unwrap();
        assert!(!en.is_empty() && !es.is_empty(), "{key}");
    }
    assert_eq!(text("learnMore", Language::Es), Some("Saber Más"));
    assert_eq!(text("noSuchKey", Language::En), None);
}

#[test]
fn language_toggle_and_labels() {
    assert_eq!(Language::default(), Language::En);
    assert_eq!(Language::En.toggled(), Language::Es);
    assert_eq!(Language::Es.switch_label(), "EN");
    assert_eq!(Language::from_code(" ES "), Some(Language::Es));
    assert_eq!(coded_word(Language::Es), "codificados");
    assert_eq!(tagline_options(Language::En).len(), 3);
}

#[test]
fn content_tables_are_well_formed() {
    let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), SERVICES.len());
    assert_eq!(SERVICES[0].id, "seo-digital-strategy");
    assert_eq!(service_number(0), "(001)");
    assert_eq!(service_number(11), "(012)");
    assert_eq!(CLIENTS.len(), 3);
}
