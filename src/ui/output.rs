//! Output verbosity.

use crate::config::OutputSetting;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status messages plus storage details.
    Verbose,
    /// Status messages.
    #[default]
    Normal,
    /// Only requested data and errors.
    Quiet,
}

impl From<OutputSetting> for OutputMode {
    fn from(setting: OutputSetting) -> Self {
        match setting {
            OutputSetting::Verbose => Self::Verbose,
            OutputSetting::Normal => Self::Normal,
            OutputSetting::Quiet => Self::Quiet,
        }
    }
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows storage details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_setting() {
        assert_eq!(OutputMode::from(OutputSetting::Quiet), OutputMode::Quiet);
        assert_eq!(OutputMode::from(OutputSetting::Normal), OutputMode::Normal);
    }

    #[test]
    fn output_mode_visibility() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());

        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
    }

    #[test]
    fn output_mode_default_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
