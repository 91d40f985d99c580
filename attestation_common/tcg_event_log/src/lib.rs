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

//! TCG event log model
//!
//! Represents TPM and IMA measurement log entries for attestation: crypto agile TCG2
//! entries, the legacy SHA-1 header entry and Canonical Event Log (CEL) records in TLV form.
//! All entries are immutable values read through `FormattedTcgEvent`.
//!
//! Main features include:
//! - Building CEL TLV records from measured data (`TcgTpmCelEventTlv::new`)
//! - Typed IMA template and PC Client content
//! - Deriving event type, register index and digests uniformly for every encoding
//! - Text dumps with a configurable hex and ASCII layout

pub mod algorithm;
pub mod binary_blob;
pub mod cel_event;
pub mod cel_types;
pub mod config;
pub mod content;
pub mod digest;
pub mod error;
pub mod event_type;
pub mod formatted_event;
pub mod tlv;

pub use algorithm::AlgorithmId;
pub use binary_blob::BinaryBlob;
pub use cel_event::{CelLocator, TcgTpmCelEventTlv};
pub use cel_types::{
    mgt, CelType, ContentType, ImaTemplateTag, ImaTlvTag, PcClientStdTag, TcgEventFormat,
};
pub use config::DumpConfig;
pub use content::{CelContent, ImaTemplateContent, PcClientStdContent, TpmsEventContent};
pub use digest::TcgDigest;
pub use error::EventLogError;
pub use event_type::EventType;
pub use formatted_event::{
    is_cel_event, FormattedTcgEvent, TcgImrEvent, TcgPcClientImrEvent, PCCLIENT_DIGEST_SIZE,
};
pub use tlv::{ContentTlv, ImaTemplateField, PcClientStdField, Tlv, TlvValue};
