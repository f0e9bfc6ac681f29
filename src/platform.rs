//! Runtime identification
//!
//! Identifiers follow the conventional runtime names: anything starting with
//! `java` is a JVM host, `cli` is the managed runtime input injection is not
//! available on, everything else is a desktop operating system.

use std::fmt;

use crate::backend::host_robot::host_robot_attached;
use crate::config::{Config, PLATFORM_ENV};

/// Runtime family the library is running in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Hosted inside a JVM, which always provides `java.awt.Robot`
    Jvm,
    /// Managed runtime without an input injection facility
    ManagedRuntime,
    /// Native desktop OS, identified by name
    Desktop(String),
}

impl Platform {
    /// Classify a runtime identifier string. Matching is exact: callers
    /// trim user input before classifying.
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier.starts_with("java") {
            Platform::Jvm
        } else if identifier == "cli" {
            Platform::ManagedRuntime
        } else {
            Platform::Desktop(identifier.to_string())
        }
    }

    /// Detect the current runtime.
    ///
    /// Precedence: config override, `ROBOT_MOUSE_PLATFORM`, an attached host
    /// robot (meaning a JVM loaded us), then the compile-time OS name.
    pub fn detect(config: &Config) -> Self {
        if let Some(identifier) = &config.platform_override {
            return Self::from_identifier(identifier.trim());
        }

        if let Ok(identifier) = std::env::var(PLATFORM_ENV) {
            if !identifier.trim().is_empty() {
                return Self::from_identifier(identifier.trim());
            }
        }

        if host_robot_attached() {
            return Platform::Jvm;
        }

        Platform::Desktop(std::env::consts::OS.to_string())
    }

    /// Identifier string for display
    pub fn identifier(&self) -> &str {
        match self {
            Platform::Jvm => "java",
            Platform::ManagedRuntime => "cli",
            Platform::Desktop(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    #[rstest]
    #[case("java", Platform::Jvm)]
    #[case("java1.8.0_292", Platform::Jvm)]
    #[case("cli", Platform::ManagedRuntime)]
    #[case("linux", Platform::Desktop("linux".into()))]
    #[case("win32", Platform::Desktop("win32".into()))]
    #[case("clix", Platform::Desktop("clix".into()))]
    #[case(" java", Platform::Desktop(" java".into()))]
    fn identifiers_are_classified(#[case] identifier: &str, #[case] expected: Platform) {
        assert_eq!(Platform::from_identifier(identifier), expected);
    }

    #[test]
    #[serial]
    fn override_wins_over_environment() {
        std::env::set_var(PLATFORM_ENV, "cli");
        let platform = Platform::detect(&Config::default().with_platform("java"));
        std::env::remove_var(PLATFORM_ENV);

        assert_eq!(platform, Platform::Jvm);
    }

    #[test]
    #[serial]
    fn environment_variable_is_used_without_override() {
        std::env::set_var(PLATFORM_ENV, "cli");
        let platform = Platform::detect(&Config::default());
        std::env::remove_var(PLATFORM_ENV);

        assert_eq!(platform, Platform::ManagedRuntime);
    }

    // Nothing in the unit test binary attaches a host robot.
    #[test]
    #[serial]
    fn falls_back_to_compile_time_os() {
        std::env::remove_var(PLATFORM_ENV);

        assert_eq!(
            Platform::detect(&Config::default()),
            Platform::Desktop(std::env::consts::OS.into())
        );
    }

    #[test]
    #[serial]
    fn padded_environment_value_is_trimmed() {
        std::env::set_var(PLATFORM_ENV, "  cli ");
        let platform = Platform::detect(&Config::default());
        std::env::remove_var(PLATFORM_ENV);

        assert_eq!(platform, Platform::ManagedRuntime);
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(Platform::Jvm.to_string(), "java");
        assert_eq!(Platform::Desktop("darwin".into()).to_string(), "darwin");
    }
}
