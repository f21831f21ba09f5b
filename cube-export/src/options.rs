use cube_model::OffsetZSource;
use serde::Deserialize;

use crate::java_identifier;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOptions {
    /// Emitted class is `Model{model_name}`.
    pub model_name: String,
    pub package: Option<String>,
    pub offset_z: OffsetZSource,
    /// Emit sampled animation tables as well as the static pose.
    pub animated: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            model_name: "Custom".to_string(),
            package: None,
            offset_z: OffsetZSource::default(),
            animated: false,
        }
    }
}

impl ExportOptions {
    pub fn class_name(&self) -> String {
        format!("Model{}", java_identifier(&self.model_name))
    }
}
