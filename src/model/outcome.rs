use serde::{Deserialize, Serialize};

/// Result reported back to Ansible on success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResult {
    pub changed: bool,
    pub stdout_lines: Vec<String>,
}

impl ModuleResult {
    pub fn unchanged() -> Self {
        Self::default()
    }
}

/// Result reported back to Ansible when the run failed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    pub failed: bool,
    pub changed: bool,
    pub msg: serde_json::Value,
}

impl FailureReport {
    pub fn new(msg: serde_json::Value) -> Self {
        Self {
            failed: true,
            changed: false,
            msg,
        }
    }
}
