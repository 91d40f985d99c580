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

//! TPM hash algorithm identifiers (TPM_ALG_ID).

use std::fmt;
use std::str::FromStr;
use crate::error::EventLogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    Error,
    Rsa,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Sm3,
    Ecdsa,
    Unknown(u16),
}

impl From<u16> for AlgorithmId {
    fn from(value: u16) -> Self {
        match value {
            0x0000 => AlgorithmId::Error,
            0x0001 => AlgorithmId::Rsa,
            0x0004 => AlgorithmId::Sha1,
            0x000B => AlgorithmId::Sha256,
            0x000C => AlgorithmId::Sha384,
            0x000D => AlgorithmId::Sha512,
            0x0012 => AlgorithmId::Sm3,
            0x0018 => AlgorithmId::Ecdsa,
            other => AlgorithmId::Unknown(other),
        }
    }
}

impl AlgorithmId {
    /// Default digest algorithm used when none is configured
    pub fn default_tpm_alg() -> Self {
        AlgorithmId::Sha384
    }

    /// Raw TPM_ALG_ID value
    pub fn value(&self) -> u16 {
        match self {
            AlgorithmId::Error => 0x0000,
            AlgorithmId::Rsa => 0x0001,
            AlgorithmId::Sha1 => 0x0004,
            AlgorithmId::Sha256 => 0x000B,
            AlgorithmId::Sha384 => 0x000C,
            AlgorithmId::Sha512 => 0x000D,
            AlgorithmId::Sm3 => 0x0012,
            AlgorithmId::Ecdsa => 0x0018,
            AlgorithmId::Unknown(value) => *value,
        }
    }

    /// Canonical digest length in bytes, `None` for identifiers that are not hash algorithms
    pub fn digest_size(&self) -> Option<usize> {
        match self {
            AlgorithmId::Sha1 => Some(20),
            AlgorithmId::Sha256 => Some(32),
            AlgorithmId::Sha384 => Some(48),
            AlgorithmId::Sha512 => Some(64),
            AlgorithmId::Sm3 => Some(32),
            _ => None,
        }
    }
}

impl FromStr for AlgorithmId {
    type Err = EventLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1" => Ok(AlgorithmId::Sha1),
            "sha256" => Ok(AlgorithmId::Sha256),
            "sha384" => Ok(AlgorithmId::Sha384),
            "sha512" => Ok(AlgorithmId::Sha512),
            "sm3" => Ok(AlgorithmId::Sm3),
            _ => Err(EventLogError::InputError(format!("Unsupported algorithm: {}", s))),
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmId::Error => write!(f, "TPM_ALG_ERROR"),
            AlgorithmId::Rsa => write!(f, "TPM_ALG_RSA"),
            AlgorithmId::Sha1 => write!(f, "TPM_ALG_SHA1"),
            AlgorithmId::Sha256 => write!(f, "TPM_ALG_SHA256"),
            AlgorithmId::Sha384 => write!(f, "TPM_ALG_SHA384"),
            AlgorithmId::Sha512 => write!(f, "TPM_ALG_SHA512"),
            AlgorithmId::Sm3 => write!(f, "TPM_ALG_SM3_256"),
            AlgorithmId::Ecdsa => write!(f, "TPM_ALG_ECDSA"),
            AlgorithmId::Unknown(value) => write!(f, "UNKNOWN_0x{:04X}", value),
        }
    }
}
