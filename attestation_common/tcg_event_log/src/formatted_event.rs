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

//! Formatted event log entries
//!
//! Log readers see every entry through `FormattedTcgEvent`, whatever encoding it came
//! from: crypto agile TCG2 entries (`TcgImrEvent`), the legacy SHA-1 only header entry
//! (`TcgPcClientImrEvent`) and Canonical Event Log records (`TcgTpmCelEventTlv`).

use log::info;
use crate::binary_blob::BinaryBlob;
use crate::cel_types::TcgEventFormat;
use crate::config::DumpConfig;
use crate::digest::TcgDigest;
use crate::event_type::EventType;

pub const PCCLIENT_DIGEST_SIZE: usize = 20;

/// Operations shared by all event log entry encodings
pub trait FormattedTcgEvent {
    /// Render the entry as text using the given dump layout
    fn render_with(&self, config: &DumpConfig) -> String;

    fn format_type(&self) -> TcgEventFormat;

    fn imr_index(&self) -> u32;

    fn event_type(&self) -> EventType;

    fn digests(&self) -> Vec<TcgDigest>;

    fn render(&self) -> String {
        self.render_with(&DumpConfig::default())
    }

    /// Write the rendered entry to the log at INFO level
    fn dump(&self) {
        for line in self.render().lines() {
            info!("{}", line);
        }
    }
}

/// True for every Canonical Event Log encoding, whichever concrete type carries it
pub fn is_cel_event(event: &dyn FormattedTcgEvent) -> bool {
    matches!(
        event.format_type(),
        TcgEventFormat::CelTlv | TcgEventFormat::CelJson | TcgEventFormat::CelCbor
    )
}

pub(crate) fn push_blob(lines: &mut Vec<String>, data: &[u8], config: &DumpConfig) {
    let rendered = BinaryBlob::new(data, 0).render(config);
    lines.extend(rendered.lines().map(String::from));
}

pub(crate) fn push_digests<'a>(
    lines: &mut Vec<String>,
    digests: impl Iterator<Item = (u16, String, &'a [u8])>,
    config: &DumpConfig,
) {
    for (count, (alg_value, alg_name, hash)) in digests.enumerate() {
        lines.push(format!("{:<18}: {} ({})", format!("Algorithm_id[{}]", count), alg_value, alg_name));
        lines.push(format!("Digest[{}]:", count));
        push_blob(lines, hash, config);
    }
}

/// Size field of an entry, saturating at `u32::MAX` for oversized events
fn event_size(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Crypto agile (TCG2) event log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcgImrEvent {
    pub imr_index: u32,
    pub event_type: EventType,
    pub digests: Vec<TcgDigest>,
    pub event_size: u32,
    pub event: Vec<u8>,
}

impl TcgImrEvent {
    pub fn new(imr_index: u32, event_type: EventType, digests: Vec<TcgDigest>, event: Vec<u8>) -> Self {
        Self {
            imr_index,
            event_type,
            digests,
            event_size: event_size(event.len()),
            event,
        }
    }
}

impl FormattedTcgEvent for TcgImrEvent {
    fn render_with(&self, config: &DumpConfig) -> String {
        let mut lines = vec![
            "----------------------------------Event Log Entry---------------------------------".to_string(),
            format!("IMR               : {}", self.imr_index),
            format!("Type              : 0x{:X} ({})", self.event_type.code(), self.event_type),
        ];
        push_digests(
            &mut lines,
            self.digests.iter().map(|d| (d.alg_id.value(), d.alg_id.to_string(), d.hash.as_slice())),
            config,
        );
        lines.push("Event:".to_string());
        push_blob(&mut lines, &self.event, config);
        lines.join("\n")
    }

    fn format_type(&self) -> TcgEventFormat {
        TcgEventFormat::PcClient
    }

    fn imr_index(&self) -> u32 {
        self.imr_index
    }

    fn event_type(&self) -> EventType {
        self.event_type
    }

    fn digests(&self) -> Vec<TcgDigest> {
        self.digests.clone()
    }
}

/// Legacy TCG 1.2 entry with a single SHA-1 sized digest
///
/// Used for the specification ID header at the start of a TCG2 log. The digest is kept in
/// its own field and is not reported through `digests()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcgPcClientImrEvent {
    pub imr_index: u32,
    pub event_type: EventType,
    pub digest: [u8; PCCLIENT_DIGEST_SIZE],
    pub event_data_size: u32,
    pub event: Vec<u8>,
}

impl TcgPcClientImrEvent {
    pub fn new(imr_index: u32, event_type: EventType, digest: [u8; PCCLIENT_DIGEST_SIZE], event: Vec<u8>) -> Self {
        Self {
            imr_index,
            event_type,
            digest,
            event_data_size: event_size(event.len()),
            event,
        }
    }

    pub fn digest(&self) -> &[u8; PCCLIENT_DIGEST_SIZE] {
        &self.digest
    }
}

impl FormattedTcgEvent for TcgPcClientImrEvent {
    fn render_with(&self, config: &DumpConfig) -> String {
        let mut lines = vec![
            "--------------------Header Specification ID Event--------------------------".to_string(),
            format!("IMR               : {}", self.imr_index),
            format!("Type              : 0x{:X} ({})", self.event_type.code(), self.event_type),
            "Digest:".to_string(),
        ];
        push_blob(&mut lines, &self.digest, config);
        lines.push("Event:".to_string());
        push_blob(&mut lines, &self.event, config);
        lines.join("\n")
    }

    fn format_type(&self) -> TcgEventFormat {
        TcgEventFormat::PcClient
    }

    fn imr_index(&self) -> u32 {
        self.imr_index
    }

    fn event_type(&self) -> EventType {
        self.event_type
    }

    fn digests(&self) -> Vec<TcgDigest> {
        Vec::new()
    }
}
