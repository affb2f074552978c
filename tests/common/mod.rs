pub mod fixtures;

use partial_response::{FieldSet, filter_value};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses `selector` and filters `value` case-sensitively.
pub fn select(selector: &str, value: &Value) -> Result<Value, Box<dyn std::error::Error>> {
    let fields = FieldSet::try_parse(selector)?;
    Ok(filter_value(value, Some(&fields), false))
}
