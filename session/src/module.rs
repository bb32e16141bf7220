//! Institute modules and their bootstrap profiles.

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

use std::fmt;
use std::str::FromStr;

use crate::bootstrap::BootstrapConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleProfile {
    Academic,
    Administrative,
    Technology,
    Evaluation,
    Marketing,
    Strategic,
    Support,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown module `{0}`")]
pub struct UnknownModule(pub String);

impl ModuleProfile {
    pub const ALL: [Self; 7] = [
        Self::Academic,
        Self::Administrative,
        Self::Technology,
        Self::Evaluation,
        Self::Marketing,
        Self::Strategic,
        Self::Support,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Administrative => "administrative",
            Self::Technology => "technology",
            Self::Evaluation => "evaluation",
            Self::Marketing => "marketing",
            Self::Strategic => "strategic",
            Self::Support => "support",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Administrative => "Administrative",
            Self::Technology => "Technology",
            Self::Evaluation => "Evaluation",
            Self::Marketing => "Marketing",
            Self::Strategic => "Strategic",
            Self::Support => "Support",
        }
    }

    /// Role assumed when a handoff carries none. Modules where every
    /// signed-in user acts as a learner default to `student`.
    #[must_use]
    pub fn fallback_role(self) -> &'static str {
        match self {
            Self::Academic | Self::Evaluation => "student",
            _ => "guest",
        }
    }

    #[must_use]
    pub fn token_fields(self) -> [&'static str; 2] {
        match self {
            Self::Evaluation | Self::Strategic => ["access_token", "token"],
            _ => ["token", "access_token"],
        }
    }

    #[must_use]
    pub fn home_route(self) -> String {
        format!("/{}", self.slug())
    }

    #[must_use]
    pub fn login_route(self) -> String {
        format!("/{}/login", self.slug())
    }

    #[must_use]
    pub fn bootstrap_config(self) -> BootstrapConfig {
        BootstrapConfig {
            token_fields: self.token_fields().iter().map(|f| (*f).to_owned()).collect(),
            fallback_role: self.fallback_role().to_owned(),
            ..BootstrapConfig::default()
        }
    }
}

impl fmt::Display for ModuleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ModuleProfile {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownModule(s.to_owned()))
    }
}
