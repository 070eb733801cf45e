use serde::{Deserialize, Serialize};

/// How the binary converter treats values wider than its 64-bit accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    /// Keep the low 64 bits and carry on.
    #[default]
    Wrap,
    /// Fail with `BinaryError::Overflow`.
    Reject,
}

impl std::str::FromStr for OverflowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(OverflowMode::Wrap),
            "reject" => Ok(OverflowMode::Reject),
            other => Err(format!("unknown overflow mode: {other} (expected wrap|reject)")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub binary: BinaryConfig,

    #[serde(default)]
    pub vm: VmConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BinaryConfig {
    #[serde(default)]
    pub overflow: OverflowMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VmConfig {
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,
}

fn default_max_steps() -> u64 {
    10_000
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}
