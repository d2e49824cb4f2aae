//! Validator configuration.

use serde::{Deserialize, Serialize};

pub const BPMN_NAMESPACE: &str = "http://www.omg.org/spec/BPMN/20100524/MODEL";
pub const PLATFORM_NAMESPACE: &str = "http://periscope.dev/schema/bpmn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorOptions {
    /// Namespace of the standard BPMN 2.0 model elements.
    pub bpmn_namespace: String,
    /// Namespace of platform extension elements and attributes.
    pub platform_namespace: String,
    /// Ask the caller boundary to treat warnings as failures. The validation
    /// levels ignore this flag.
    pub strict: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        ValidatorOptions {
            bpmn_namespace: BPMN_NAMESPACE.into(),
            platform_namespace: PLATFORM_NAMESPACE.into(),
            strict: false,
        }
    }
}

impl ValidatorOptions {
    pub fn strict() -> Self {
        ValidatorOptions {
            strict: true,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
