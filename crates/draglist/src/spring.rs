//! Spring parameters used by drag animations.
//!
//! The list resolves a full [`SpringConfig`] on every render from the
//! documented defaults and whatever the caller overrode in
//! [`SpringOverride`]. Drag code reads the resolved record on each
//! animation step.

/// Fully populated spring coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Friction coefficient. Higher values settle faster.
    pub damping: f32,
    /// Mass of the animated row.
    pub mass: f32,
    /// Spring constant. Higher values pull harder toward the target.
    pub stiffness: f32,
    /// Stop at the target instead of bouncing past it.
    pub overshoot_clamping: bool,
    /// Speed below which the spring is considered at rest.
    pub rest_speed_threshold: f32,
    /// Distance from the target below which the spring is considered at rest.
    pub rest_displacement_threshold: f32,
}

impl SpringConfig {
    pub const DEFAULT: SpringConfig = SpringConfig {
        damping: 20.0,
        mass: 0.2,
        stiffness: 100.0,
        overshoot_clamping: false,
        rest_speed_threshold: 0.2,
        rest_displacement_threshold: 0.2,
    };

    /// Defaults merged with `overrides`.
    pub fn resolve(overrides: Option<&SpringOverride>) -> Self {
        match overrides {
            Some(overrides) => Self::DEFAULT.merged(overrides),
            None => Self::DEFAULT,
        }
    }

    /// Replace every field that `overrides` supplies.
    pub fn merged(self, overrides: &SpringOverride) -> Self {
        Self {
            damping: overrides.damping.unwrap_or(self.damping),
            mass: overrides.mass.unwrap_or(self.mass),
            stiffness: overrides.stiffness.unwrap_or(self.stiffness),
            overshoot_clamping: overrides
                .overshoot_clamping
                .unwrap_or(self.overshoot_clamping),
            rest_speed_threshold: overrides
                .rest_speed_threshold
                .unwrap_or(self.rest_speed_threshold),
            rest_displacement_threshold: overrides
                .rest_displacement_threshold
                .unwrap_or(self.rest_displacement_threshold),
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Caller-supplied spring fields. Unset fields fall back to defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringOverride {
    pub damping: Option<f32>,
    pub mass: Option<f32>,
    pub stiffness: Option<f32>,
    pub overshoot_clamping: Option<bool>,
    pub rest_speed_threshold: Option<f32>,
    pub rest_displacement_threshold: Option<f32>,
}

impl SpringOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn damping(mut self, damping: f32) -> Self {
        self.damping = Some(damping);
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = Some(stiffness);
        self
    }

    pub fn overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = Some(clamp);
        self
    }

    pub fn rest_speed_threshold(mut self, threshold: f32) -> Self {
        self.rest_speed_threshold = Some(threshold);
        self
    }

    pub fn rest_displacement_threshold(mut self, threshold: f32) -> Self {
        self.rest_displacement_threshold = Some(threshold);
        self
    }

    /// True when no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<SpringConfig> for SpringOverride {
    fn from(config: SpringConfig) -> Self {
        Self {
            damping: Some(config.damping),
            mass: Some(config.mass),
            stiffness: Some(config.stiffness),
            overshoot_clamping: Some(config.overshoot_clamping),
            rest_speed_threshold: Some(config.rest_speed_threshold),
            rest_displacement_threshold: Some(config.rest_displacement_threshold),
        }
    }
}

#[cfg(test)]
#[path = "tests/spring_tests.rs"]
mod tests;
