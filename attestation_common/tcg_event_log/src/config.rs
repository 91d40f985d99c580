/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use serde::Deserialize;
use std::path::PathBuf;
use crate::error::EventLogError;

pub(crate) const MAX_BYTES_PER_LINE: usize = 64;

fn default_bytes_per_line() -> usize {
    16
}

fn default_show_ascii() -> bool {
    true
}

/// Layout of hex dumps produced when rendering event log entries
///
/// # Example
/// ```
/// use tcg_event_log::DumpConfig;
///
/// let config = DumpConfig::from_yaml_str("bytes_per_line: 8").unwrap();
/// assert_eq!(config.bytes_per_line, 8);
/// assert!(config.show_ascii);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DumpConfig {
    #[serde(default = "default_bytes_per_line")]
    pub bytes_per_line: usize,
    #[serde(default = "default_show_ascii")]
    pub show_ascii: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            bytes_per_line: default_bytes_per_line(),
            show_ascii: default_show_ascii(),
        }
    }
}

impl DumpConfig {
    /// Load dump settings from a YAML file
    ///
    /// # Errors
    /// * `EventLogError::ConfigError` - The file cannot be read, parsed or holds invalid values
    pub fn from_yaml(path: impl Into<PathBuf>) -> Result<Self, EventLogError> {
        let path = path.into();
        let config_str = std::fs::read_to_string(&path)
            .map_err(|e| EventLogError::ConfigError(
                format!("Failed to read {}: {}", path.display(), e)
            ))?;
        Self::from_yaml_str(&config_str)
    }

    pub fn from_yaml_str(config_str: &str) -> Result<Self, EventLogError> {
        let config: DumpConfig = serde_yaml::from_str(config_str)
            .map_err(|e| EventLogError::ConfigError(format!("Failed to parse dump config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EventLogError> {
        if self.bytes_per_line == 0 || self.bytes_per_line > MAX_BYTES_PER_LINE {
            return Err(EventLogError::ConfigError(
                format!("bytes_per_line must be between 1 and {}, got {}",
                    MAX_BYTES_PER_LINE, self.bytes_per_line)
            ));
        }
        Ok(())
    }
}
