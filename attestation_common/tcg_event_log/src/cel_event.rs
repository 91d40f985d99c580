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

//! Canonical Event Log record, TLV encoding
//!
//! A record is the ordered set of top level nodes `CEL_SEQNUM`, `CEL_PCR` or
//! `CEL_NV_INDEX`, `CEL_DIGESTS` and one content node. The event type a verifier needs
//! is not stored in the record; it is derived from the content kind on read.

use std::fmt;
use log::{debug, warn};
use crate::algorithm::AlgorithmId;
use crate::cel_types::{CelType, TcgEventFormat};
use crate::config::DumpConfig;
use crate::content::{CelContent, TpmsEventContent};
use crate::digest::TcgDigest;
use crate::error::EventLogError;
use crate::event_type::EventType;
use crate::formatted_event::{push_digests, FormattedTcgEvent};
use crate::tlv::{ContentTlv, Tlv};

/// Register a record is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelLocator {
    Pcr(u32),
    NvIndex(u32),
}

impl CelLocator {
    pub fn index(&self) -> u32 {
        match self {
            CelLocator::Pcr(index) | CelLocator::NvIndex(index) => *index,
        }
    }

    pub fn to_tlv(&self) -> Tlv {
        match self {
            CelLocator::Pcr(index) => Tlv::int(CelType::Pcr.code(), *index as u64),
            CelLocator::NvIndex(index) => Tlv::int(CelType::NvIndex.code(), *index as u64),
        }
    }
}

impl fmt::Display for CelLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CelLocator::Pcr(index) => write!(f, "PCR {}", index),
            CelLocator::NvIndex(index) => write!(f, "NV index {}", index),
        }
    }
}

/// CEL record in TLV form
///
/// Immutable once built. `new` is the writer side entry point, `from_parts` lets a log
/// decoder assemble a record whose locator may be missing from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcgTpmCelEventTlv {
    rec_num: Tlv,
    digests: Tlv,
    content: CelContent,
    locator: Option<CelLocator>,
}

impl TcgTpmCelEventTlv {
    /// Build a record from freshly measured data
    ///
    /// Nothing is validated: record number, indices and digest lengths are taken as given.
    /// Digests keep their input order.
    ///
    /// # Example
    /// ```
    /// use tcg_event_log::{
    ///     AlgorithmId, CelLocator, CelType, EventType, FormattedTcgEvent,
    ///     PcClientStdContent, TcgDigest, TcgTpmCelEventTlv,
    /// };
    ///
    /// let digests = vec![TcgDigest::new(AlgorithmId::Sha256, vec![0xAA; 32])];
    /// let content = PcClientStdContent::new(EventType::EvSeparator, vec![0xFF; 4]);
    /// let event = TcgTpmCelEventTlv::new(7, &digests, CelLocator::Pcr(4), CelType::PcClientStd, &content);
    ///
    /// assert_eq!(event.imr_index(), 4);
    /// assert_eq!(event.event_type(), EventType::EvSeparator);
    /// assert_eq!(event.digests(), digests);
    /// ```
    pub fn new(
        rec_num: u64,
        digests: &[TcgDigest],
        locator: CelLocator,
        content_type: CelType,
        content: &dyn TpmsEventContent,
    ) -> Self {
        debug!("Building CEL record {}: {}, content {}, {} digest(s)",
            rec_num, locator, content_type, digests.len());
        Self::from_parts(rec_num, digests, Some(locator), CelContent::from_event(content_type, content))
    }

    pub fn from_parts(
        rec_num: u64,
        digests: &[TcgDigest],
        locator: Option<CelLocator>,
        content: CelContent,
    ) -> Self {
        let digest_nodes: Vec<Tlv> = digests
            .iter()
            .map(|d| Tlv::bytes(d.alg_id.value() as u32, d.hash.clone()))
            .collect();

        Self {
            rec_num: Tlv::int(CelType::Seqnum.code(), rec_num),
            digests: Tlv::nodes(CelType::Digests.code(), digest_nodes),
            content,
            locator,
        }
    }

    pub fn rec_num(&self) -> u64 {
        self.rec_num.as_int().unwrap_or_default()
    }

    pub fn locator(&self) -> Option<CelLocator> {
        self.locator
    }

    pub fn content(&self) -> &CelContent {
        &self.content
    }

    pub fn digests_tlv(&self) -> &Tlv {
        &self.digests
    }

    /// Top level nodes in record order
    pub fn to_tlv(&self) -> Vec<Tlv> {
        let mut nodes = vec![self.rec_num.clone()];
        if let Some(locator) = &self.locator {
            nodes.push(locator.to_tlv());
        }
        nodes.push(self.digests.clone());
        nodes.push(self.content.to_tlv());
        nodes
    }

    /// Event type derived from the content
    ///
    /// IMA template content has no TCG event type and maps to `IMA_MEASUREMENT_EVENT`.
    /// Other content must carry both children, the descriptor at position 0 holding the type.
    ///
    /// # Errors
    /// * `EventLogError::MalformedContent` - The content is under populated or has no descriptor
    pub fn try_event_type(&self) -> Result<EventType, EventLogError> {
        if self.content.content_type == CelType::ImaTemplate {
            return Ok(EventType::ImaMeasurementEvent);
        }

        if self.content.children.len() < 2 {
            return Err(EventLogError::MalformedContent(format!(
                "record {}: {} content has {} child(ren), expected 2",
                self.rec_num(), self.content.content_type, self.content.children.len()
            )));
        }

        self.content.children
            .first()
            .and_then(ContentTlv::event_type)
            .ok_or_else(|| EventLogError::MalformedContent(format!(
                "record {}: {} content has no event type descriptor",
                self.rec_num(), self.content.content_type
            )))
    }

    /// # Errors
    /// * `EventLogError::MissingLocator` - Neither a PCR nor an NV index was decoded
    pub fn try_imr_index(&self) -> Result<u32, EventLogError> {
        self.locator
            .map(|locator| locator.index())
            .ok_or_else(|| EventLogError::MissingLocator(self.rec_num()))
    }
}

impl FormattedTcgEvent for TcgTpmCelEventTlv {
    fn render_with(&self, config: &DumpConfig) -> String {
        let mut lines = vec![
            "-----------------------------Canonical Event Log Entry----------------------------".to_string(),
            "Encoding          : TLV".to_string(),
            format!("Rec Num           : {}", self.rec_num()),
        ];
        match self.locator {
            Some(CelLocator::Pcr(index)) => lines.push(format!("IMR               : {}", index)),
            Some(CelLocator::NvIndex(index)) => lines.push(format!("NvIndex           : {}", index)),
            None => {}
        }
        lines.push(format!(
            "Type              : 0x{:X} ({})",
            self.content.content_type.code(), self.content.content_type
        ));

        lines.push("Digests:".to_string());
        push_digests(
            &mut lines,
            self.digests.children().iter().filter_map(|tlv| {
                let alg_id = AlgorithmId::from(tlv.tag as u16);
                tlv.as_bytes().map(|hash| (alg_id.value(), alg_id.to_string(), hash))
            }),
            config,
        );

        lines.push("Contents:".to_string());
        for (count, child) in self.content.children.iter().enumerate() {
            lines.push(child.describe(count));
        }
        lines.join("\n")
    }

    fn format_type(&self) -> TcgEventFormat {
        TcgEventFormat::CelTlv
    }

    fn imr_index(&self) -> u32 {
        self.try_imr_index().unwrap_or_else(|e| {
            warn!("{}, reporting IMR 0", e);
            0
        })
    }

    fn event_type(&self) -> EventType {
        self.try_event_type().unwrap_or_else(|e| {
            warn!("{}, reporting {}", e, EventType::EvNoAction);
            EventType::EvNoAction
        })
    }

    fn digests(&self) -> Vec<TcgDigest> {
        self.digests
            .children()
            .iter()
            .filter_map(|tlv| {
                tlv.as_bytes()
                    .map(|hash| TcgDigest::new(AlgorithmId::from(tlv.tag as u16), hash.to_vec()))
            })
            .collect()
    }
}
