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

use std::fmt;
use crate::algorithm::AlgorithmId;
use crate::error::EventLogError;

/// A single measurement: digest algorithm and hash bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcgDigest {
    pub alg_id: AlgorithmId,
    pub hash: Vec<u8>,
}

impl TcgDigest {
    pub fn new(alg_id: AlgorithmId, hash: Vec<u8>) -> Self {
        Self { alg_id, hash }
    }

    /// Check the hash length against the canonical size of the algorithm
    ///
    /// Records are built without this check; callers that need a well-formed digest list
    /// run it themselves.
    ///
    /// # Errors
    /// * `EventLogError::InputError` - The algorithm is not a hash algorithm or the length differs
    pub fn validate(&self) -> Result<(), EventLogError> {
        let expected = self.alg_id.digest_size()
            .ok_or_else(|| EventLogError::InputError(
                format!("Algorithm {} has no digest size", self.alg_id)
            ))?;

        if self.hash.len() != expected {
            return Err(EventLogError::InputError(
                format!("Digest size mismatch for {}: expected {} bytes, got {}",
                    self.alg_id, expected, self.hash.len())
            ));
        }
        Ok(())
    }
}

impl fmt::Display for TcgDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.alg_id, hex::encode(&self.hash))
    }
}
