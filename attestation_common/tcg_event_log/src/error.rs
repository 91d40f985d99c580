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

use thiserror::Error;

/// Errors raised by the event log model.
///
/// The record accessors used by log readers never fail; these values come from the
/// strict `try_*` accessors, digest validation, algorithm name parsing and configuration loading.
#[derive(Error, Debug)]
pub enum EventLogError {
    #[error("Input error: {0}")]
    InputError(String),

    #[error("Malformed CEL content: {0}")]
    MalformedContent(String),

    #[error("Record {0} has neither a PCR nor an NV index locator")]
    MissingLocator(u64),

    #[error("Config error: {0}")]
    ConfigError(String),
}
