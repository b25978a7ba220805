//! Role enumerations for viewers and professionals.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The side of the marketplace a derived worklist is rendered for.
///
/// The same purchase produces different task titles and action links
/// depending on who is looking at it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// The coach or nutritionist delivering the service
    #[default]
    Professional,

    /// The client who bought the service
    Client,
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "professional" => Ok(UserRole::Professional),
            "client" => Ok(UserRole::Client),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

impl UserRole {
    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Professional => "professional",
            UserRole::Client => "client",
        }
    }
}

/// The service category a catalog feature belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfessionalRole {
    /// Nutrition coaching features
    Nutritionist,

    /// Physical training features
    Trainer,
}

impl FromStr for ProfessionalRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nutritionist" => Ok(ProfessionalRole::Nutritionist),
            "trainer" => Ok(ProfessionalRole::Trainer),
            _ => Err(format!("Invalid professional role: {s}")),
        }
    }
}

impl ProfessionalRole {
    /// Convert to the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfessionalRole::Nutritionist => "nutritionist",
            ProfessionalRole::Trainer => "trainer",
        }
    }
}
