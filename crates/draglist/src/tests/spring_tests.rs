use super::*;

#[test]
fn no_override_resolves_to_documented_defaults() {
    let resolved = SpringConfig::resolve(None);
    assert_eq!(resolved.damping, 20.0);
    assert_eq!(resolved.mass, 0.2);
    assert_eq!(resolved.stiffness, 100.0);
    assert!(!resolved.overshoot_clamping);
    assert_eq!(resolved.rest_speed_threshold, 0.2);
    assert_eq!(resolved.rest_displacement_threshold, 0.2);
    assert_eq!(resolved, SpringConfig::default());
}

#[test]
fn empty_override_matches_defaults() {
    let overrides = SpringOverride::new();
    assert!(overrides.is_empty());
    assert_eq!(SpringConfig::resolve(Some(&overrides)), SpringConfig::DEFAULT);
}

#[test]
fn partial_override_only_touches_supplied_field() {
    let overrides = SpringOverride::new().damping(35.0);
    let resolved = SpringConfig::resolve(Some(&overrides));

    assert_eq!(resolved.damping, 35.0);
    assert_eq!(
        resolved,
        SpringConfig {
            damping: 35.0,
            ..SpringConfig::DEFAULT
        }
    );
}

#[test]
fn full_override_replaces_everything() {
    let target = SpringConfig {
        damping: 5.0,
        mass: 1.0,
        stiffness: 300.0,
        overshoot_clamping: true,
        rest_speed_threshold: 0.01,
        rest_displacement_threshold: 0.02,
    };
    let overrides = SpringOverride::from(target);
    assert_eq!(SpringConfig::resolve(Some(&overrides)), target);
}

#[test]
fn merged_layers_on_existing_record() {
    let base = SpringConfig::DEFAULT.merged(&SpringOverride::new().mass(1.0));
    let layered = base.merged(&SpringOverride::new().overshoot_clamping(true));
    assert_eq!(layered.mass, 1.0);
    assert!(layered.overshoot_clamping);
    assert_eq!(layered.stiffness, SpringConfig::DEFAULT.stiffness);
}
