//! Krumhansl-Schmuckler key profiles
//!
//! Probe-tone ratings for how well each of the 12 pitch classes fits a major
//! or minor key with tonic C. Profiles for other tonics are the same values
//! rotated; the detector rotates the observed histogram instead.

use super::pitch_class::Scale;

/// Major-key profile, tonic at index 0
pub const KRUMHANSL_MAJOR: [f64; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor-key profile, tonic at index 0
pub const KRUMHANSL_MINOR: [f64; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];

/// Reference profiles for key correlation
#[derive(Debug, Clone)]
pub struct KeyTemplates {
    /// Major profile (tonic at index 0)
    pub major: [f64; 12],

    /// Minor profile (tonic at index 0)
    pub minor: [f64; 12],
}

impl KeyTemplates {
    /// Templates with the Krumhansl-Schmuckler profiles
    pub fn new() -> Self {
        Self {
            major: KRUMHANSL_MAJOR,
            minor: KRUMHANSL_MINOR,
        }
    }

    /// Profile for a scale
    pub fn profile(&self, scale: Scale) -> &[f64; 12] {
        match scale {
            Scale::Major => &self.major,
            Scale::Minor => &self.minor,
        }
    }
}

impl Default for KeyTemplates {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tonic_is_strongest() {
        let templates = KeyTemplates::new();
        for scale in [Scale::Major, Scale::Minor] {
            let profile = templates.profile(scale);
            let max = profile.iter().cloned().fold(f64::MIN, f64::max);
            assert_eq!(profile[0], max);
        }
    }

    #[test]
    fn test_minor_third_favoured_in_minor() {
        let templates = KeyTemplates::new();
        assert!(templates.minor[3] > templates.minor[4]);
        assert!(templates.major[4] > templates.major[3]);
    }
}
