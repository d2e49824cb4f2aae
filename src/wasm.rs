//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::{Level, ValidationIssue, codes};
use crate::options::ValidatorOptions;
use crate::result::ValidationResult;
use crate::validate;

/// Validate BPMN XML with default options.
/// Returns the serialized `ValidationResult`.
#[wasm_bindgen]
pub fn validate_bpmn(xml: &str) -> JsValue {
    let result = validate_with_options(xml, &ValidatorOptions::default());
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Validate BPMN XML with a JSON options blob (see `ValidatorOptions`).
/// Returns the serialized `ValidationResult`.
#[wasm_bindgen]
pub fn validate_bpmn_with_options(xml: &str, options_json: &str) -> JsValue {
    let result = validate_with_options_inner(xml, options_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_with_options_inner(xml: &str, options_json: &str) -> ValidationResult {
    match ValidatorOptions::from_json(options_json) {
        Ok(options) => validate_with_options(xml, &options),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.add(
                ValidationIssue::error(
                    Level::Load,
                    codes::INVALID_OPTIONS,
                    format!("Failed to parse validator options JSON: {}", e),
                )
                .with_suggestion("Pass a JSON object such as {\"strict\": true}"),
            );
            result
        }
    }
}

/// Strict mode is a caller policy; this boundary is where it gets applied.
fn validate_with_options(xml: &str, options: &ValidatorOptions) -> ValidationResult {
    let result = validate::validate_str(xml, options);
    if options.strict {
        result.apply_strict()
    } else {
        result
    }
}
