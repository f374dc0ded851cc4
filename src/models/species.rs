use serde::{Deserialize, Serialize};
use std::fmt;

/// The species the field sensors are trained to recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Aphids,
    Caterpillars,
    Beetles,
    Whiteflies,
    Thrips,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::Aphids,
        Species::Caterpillars,
        Species::Beetles,
        Species::Whiteflies,
        Species::Thrips,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Aphids => "aphids",
            Species::Caterpillars => "caterpillars",
            Species::Beetles => "beetles",
            Species::Whiteflies => "whiteflies",
            Species::Thrips => "thrips",
        }
    }

    /// Capitalized form for table output ("Aphids").
    pub fn label(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// Helper: convert input code from CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "aphids" => Some(Species::Aphids),
            "caterpillars" => Some(Species::Caterpillars),
            "beetles" => Some(Species::Beetles),
            "whiteflies" => Some(Species::Whiteflies),
            "thrips" => Some(Species::Thrips),
            _ => None,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
