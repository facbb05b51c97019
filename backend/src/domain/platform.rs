//! Deployment platform flag gating destructive operator endpoints.

/// Operator/development mode switch.
///
/// Destructive administrative operations (mass user deletion via the reset
/// endpoint) are permitted only in [`Platform::Dev`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Development mode: destructive admin operations are allowed.
    Dev,
    /// Production: destructive admin operations respond 403.
    #[default]
    Prod,
}

impl Platform {
    /// Interpret the `PLATFORM` environment value. Only the exact string
    /// `"dev"` enables development mode; anything else is production.
    pub fn from_env_value(value: &str) -> Self {
        if value == "dev" { Self::Dev } else { Self::Prod }
    }

    /// Whether destructive operator endpoints are allowed.
    pub fn is_dev(self) -> bool {
        matches!(self, Self::Dev)
    }
}
