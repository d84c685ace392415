use std::{fmt, str::FromStr};

use serde::Deserialize;

/// One generated module: a set of root classes rendered into one document
/// per dialect.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Module name, used in output file names
    pub name: String,

    /// Root classes, one intrinsic element each
    pub roots: Vec<String>,

    /// Properties dropped from the exported dialect
    #[serde(default)]
    pub exclude: Vec<Exclusion>,

    /// Registration scaffold appended to the exported dialect
    pub scaffold: Option<ScaffoldConfig>,
}

/// Registration scaffold settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScaffoldConfig {
    /// Package the element is imported from
    pub package: String,
    /// Exported class name registered as an element
    pub export: String,
}

/// A `"ClassAttributes.property"` exclusion entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Exclusion {
    pub class_name: String,
    pub property: String,
}

impl FromStr for Exclusion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((class_name, property))
                if !class_name.is_empty() && !property.is_empty() && !property.contains('.') =>
            {
                Ok(Self {
                    class_name: class_name.to_string(),
                    property: property.to_string(),
                })
            }
            _ => Err(format!(
                "invalid exclusion '{}', expected 'ClassAttributes.property'",
                s
            )),
        }
    }
}

impl TryFrom<String> for Exclusion {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class_name, self.property)
    }
}
