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

//! Event content carried by a CEL record
//!
//! Each content kind lays out its fields as two ordered children: position 0 is the
//! descriptor, position 1 the payload. Readers index by position, so the order is fixed.

use crate::cel_types::CelType;
use crate::tlv::{ContentTlv, ImaTemplateField, PcClientStdField, Tlv};
use crate::event_type::EventType;

/// Event content that can be laid out as CEL content children
pub trait TpmsEventContent {
    fn to_tlv(&self) -> Vec<ContentTlv>;
}

/// IMA template entry: template name and raw template data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImaTemplateContent {
    pub name: String,
    pub data: Vec<u8>,
}

impl ImaTemplateContent {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self { name: name.into(), data }
    }
}

impl TpmsEventContent for ImaTemplateContent {
    fn to_tlv(&self) -> Vec<ContentTlv> {
        vec![
            ContentTlv::ImaTemplate(ImaTemplateField::Name(self.name.clone())),
            ContentTlv::ImaTemplate(ImaTemplateField::Data(self.data.clone())),
        ]
    }
}

/// PC Client event: TCG event type and raw event data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcClientStdContent {
    pub event_type: EventType,
    pub data: Vec<u8>,
}

impl PcClientStdContent {
    pub fn new(event_type: EventType, data: Vec<u8>) -> Self {
        Self { event_type, data }
    }
}

impl TpmsEventContent for PcClientStdContent {
    fn to_tlv(&self) -> Vec<ContentTlv> {
        vec![
            ContentTlv::PcClientStd(PcClientStdField::Type(self.event_type)),
            ContentTlv::PcClientStd(PcClientStdField::Content(self.data.clone())),
        ]
    }
}

/// Content node of a CEL record: the content kind tag and its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CelContent {
    pub content_type: CelType,
    pub children: Vec<ContentTlv>,
}

impl CelContent {
    pub fn from_event(content_type: CelType, content: &dyn TpmsEventContent) -> Self {
        Self {
            content_type,
            children: content.to_tlv(),
        }
    }

    /// Content assembled from individually decoded children
    pub fn from_children(content_type: CelType, children: Vec<ContentTlv>) -> Self {
        Self { content_type, children }
    }

    pub fn to_tlv(&self) -> Tlv {
        Tlv::nodes(
            self.content_type.code(),
            self.children.iter().map(ContentTlv::to_tlv).collect(),
        )
    }
}
