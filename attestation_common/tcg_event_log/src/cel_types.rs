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

//! Canonical Event Log tag namespaces
//!
//! CEL reuses small integers across sibling namespaces: tag 0 is `CEL_SEQNUM` at the
//! record level, `IMA_TEMPLATE_NAME` under IMA template content and `PCCLIENT_STD_TYPE`
//! under PC Client content. Each namespace gets its own type here so a tag is never
//! interpreted without knowing its parent.

use std::fmt;
use crate::error::EventLogError;

/// Top level CEL record tags, also used as the content kind of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CelType {
    Seqnum = 0x00000000,
    Pcr = 0x00000001,
    NvIndex = 0x00000002,
    Digests = 0x00000003,
    Mgt = 0x00000004,
    PcClientStd = 0x00000005,
    ImaTemplate = 0x00000007,
    ImaTlv = 0x00000008,
}

impl CelType {
    pub fn code(&self) -> u32 {
        *self as u32
    }
}

impl TryFrom<u32> for CelType {
    type Error = EventLogError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0x00000000 => Ok(Self::Seqnum),
            0x00000001 => Ok(Self::Pcr),
            0x00000002 => Ok(Self::NvIndex),
            0x00000003 => Ok(Self::Digests),
            0x00000004 => Ok(Self::Mgt),
            0x00000005 => Ok(Self::PcClientStd),
            0x00000007 => Ok(Self::ImaTemplate),
            0x00000008 => Ok(Self::ImaTlv),
            _ => Err(EventLogError::InputError(format!("Unknown CEL type: 0x{:X}", value))),
        }
    }
}

impl fmt::Display for CelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seqnum => write!(f, "CEL_SEQNUM"),
            Self::Pcr => write!(f, "CEL_PCR"),
            Self::NvIndex => write!(f, "CEL_NV_INDEX"),
            Self::Digests => write!(f, "CEL_DIGESTS"),
            Self::Mgt => write!(f, "CEL_MGT"),
            Self::PcClientStd => write!(f, "CEL_PCCLIENT_STD"),
            Self::ImaTemplate => write!(f, "CEL_IMA_TEMPLATE"),
            Self::ImaTlv => write!(f, "CEL_IMA_TLV"),
        }
    }
}

/// Management content tags (CEL_MGT). Several names share a value because they
/// live at different nesting levels.
pub mod mgt {
    pub const CEL_MGT_TYPE: u32 = 0;
    pub const CEL_MGT_DATA: u32 = 1;
    pub const CEL_MGT_CEL_VERSION: u32 = 1;
    pub const CEL_MGT_CEL_VERSION_MAJOR: u32 = 0;
    pub const CEL_MGT_CEL_VERSION_MINOR: u32 = 1;
    pub const CEL_MGT_FIRMWARE_END: u32 = 2;
    pub const CEL_MGT_CEL_TIMESTAMP: u32 = 80;
    pub const CEL_MGT_STATE_TRANS: u32 = 81;
    pub const CEL_MGT_STATE_TRANS_SUSPEND: u32 = 0;
    pub const CEL_MGT_STATE_TRANS_HIBERNATE: u32 = 1;
    pub const CEL_MGT_STATE_TRANS_KEXEC: u32 = 2;
}

/// IMA_TLV content tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ImaTlvTag {
    Path = 0,
    DataHash = 1,
    DataSig = 2,
    Owner = 3,
    Group = 4,
    Mode = 5,
    Timestamp = 6,
    Label = 7,
}

impl fmt::Display for ImaTlvTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path => write!(f, "IMA_TLV_PATH"),
            Self::DataHash => write!(f, "IMA_TLV_DATAHASH"),
            Self::DataSig => write!(f, "IMA_TLV_DATASIG"),
            Self::Owner => write!(f, "IMA_TLV_OWNER"),
            Self::Group => write!(f, "IMA_TLV_GROUP"),
            Self::Mode => write!(f, "IMA_TLV_MODE"),
            Self::Timestamp => write!(f, "IMA_TLV_TIMESTAMP"),
            Self::Label => write!(f, "IMA_TLV_LABEL"),
        }
    }
}

/// IMA_TEMPLATE content tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ImaTemplateTag {
    Name = 0,
    Data = 1,
}

impl fmt::Display for ImaTemplateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "IMA_TEMPLATE_NAME"),
            Self::Data => write!(f, "IMA_TEMPLATE_DATA"),
        }
    }
}

/// PCCLIENT_STD content tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PcClientStdTag {
    Type = 0,
    Content = 1,
}

impl fmt::Display for PcClientStdTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => write!(f, "PCCLIENT_STD_TYPE"),
            Self::Content => write!(f, "PCCLIENT_STD_CONTENT"),
        }
    }
}

/// Namespace a content child belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    ImaTemplate,
    PcClientStd,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImaTemplate => write!(f, "ImaTemplate"),
            Self::PcClientStd => write!(f, "PcClientStd"),
        }
    }
}

/// Encoding of a formatted event log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcgEventFormat {
    PcClient,
    CelTlv,
    CelJson,
    CelCbor,
}

impl fmt::Display for TcgEventFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PcClient => write!(f, "tcg_pcclient"),
            Self::CelTlv => write!(f, "tcg_cel_tlv"),
            Self::CelJson => write!(f, "tcg_cel_json"),
            Self::CelCbor => write!(f, "tcg_cel_cbor"),
        }
    }
}
