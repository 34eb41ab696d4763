//! Case-conversion filters available to every template.
//!
//! Terraform identifiers and Helm value keys cannot contain dashes, so
//! templates write `{{ app_name | snake_case }}` there.

use std::collections::HashMap;

use heck::{ToKebabCase, ToShoutySnakeCase, ToSnakeCase};
use tera::{Result, Value};

pub(crate) fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("snake_case filter expects a string"))?;
    Ok(Value::String(s.to_snake_case()))
}

pub(crate) fn kebab_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("kebab_case filter expects a string"))?;
    Ok(Value::String(s.to_kebab_case()))
}

pub(crate) fn env_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("env_case filter expects a string"))?;
    Ok(Value::String(s.to_shouty_snake_case()))
}
