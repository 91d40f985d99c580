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

//! TLV node model
//!
//! `Tlv` is the generic, self-describing view of a CEL tree: a numeric tag and exactly one
//! payload. Content children are held as `ContentTlv`, a union per content kind, so the
//! tag number, the namespace marker and the payload kind always agree. `ContentTlv::to_tlv`
//! projects them back onto the generic view for tree walkers.

use crate::cel_types::{ContentType, ImaTemplateTag, PcClientStdTag};
use crate::event_type::EventType;

/// Payload of a TLV node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlvValue {
    String(String),
    Int(u64),
    Bytes(Vec<u8>),
    EventType(EventType),
    Nodes(Vec<Tlv>),
}

/// Generic TLV node
///
/// `content_type` is only set on content children. Their tag has to be read in that
/// namespace, never on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    pub tag: u32,
    pub value: TlvValue,
    pub content_type: Option<ContentType>,
}

impl Tlv {
    pub fn new(tag: u32, value: TlvValue) -> Self {
        Self { tag, value, content_type: None }
    }

    pub fn int(tag: u32, value: u64) -> Self {
        Self::new(tag, TlvValue::Int(value))
    }

    pub fn bytes(tag: u32, value: Vec<u8>) -> Self {
        Self::new(tag, TlvValue::Bytes(value))
    }

    pub fn nodes(tag: u32, children: Vec<Tlv>) -> Self {
        Self::new(tag, TlvValue::Nodes(children))
    }

    pub fn as_int(&self) -> Option<u64> {
        match &self.value {
            TlvValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.value {
            TlvValue::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            TlvValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_event_type(&self) -> Option<EventType> {
        match &self.value {
            TlvValue::EventType(v) => Some(*v),
            _ => None,
        }
    }

    /// Child nodes, empty for leaf payloads
    pub fn children(&self) -> &[Tlv] {
        match &self.value {
            TlvValue::Nodes(v) => v,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImaTemplateField {
    Name(String),
    Data(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PcClientStdField {
    Type(EventType),
    Content(Vec<u8>),
}

/// A child of a CEL content node, typed by the content kind it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentTlv {
    ImaTemplate(ImaTemplateField),
    PcClientStd(PcClientStdField),
}

impl ContentTlv {
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentTlv::ImaTemplate(_) => ContentType::ImaTemplate,
            ContentTlv::PcClientStd(_) => ContentType::PcClientStd,
        }
    }

    /// Tag number within the content kind's namespace
    pub fn tag(&self) -> u32 {
        match self {
            ContentTlv::ImaTemplate(ImaTemplateField::Name(_)) => ImaTemplateTag::Name as u32,
            ContentTlv::ImaTemplate(ImaTemplateField::Data(_)) => ImaTemplateTag::Data as u32,
            ContentTlv::PcClientStd(PcClientStdField::Type(_)) => PcClientStdTag::Type as u32,
            ContentTlv::PcClientStd(PcClientStdField::Content(_)) => PcClientStdTag::Content as u32,
        }
    }

    /// Event type carried by a PC Client descriptor child
    pub fn event_type(&self) -> Option<EventType> {
        match self {
            ContentTlv::PcClientStd(PcClientStdField::Type(event_type)) => Some(*event_type),
            _ => None,
        }
    }

    pub fn to_tlv(&self) -> Tlv {
        let value = match self {
            ContentTlv::ImaTemplate(ImaTemplateField::Name(name)) => TlvValue::String(name.clone()),
            ContentTlv::ImaTemplate(ImaTemplateField::Data(data)) => TlvValue::Bytes(data.clone()),
            ContentTlv::PcClientStd(PcClientStdField::Type(event_type)) => TlvValue::EventType(*event_type),
            ContentTlv::PcClientStd(PcClientStdField::Content(data)) => TlvValue::Bytes(data.clone()),
        };
        Tlv {
            tag: self.tag(),
            value,
            content_type: Some(self.content_type()),
        }
    }

    /// `<index>: <TAG_NAME> = <value>` line used by record dumps
    pub(crate) fn describe(&self, index: usize) -> String {
        match self {
            ContentTlv::ImaTemplate(ImaTemplateField::Name(name)) =>
                format!("{}: {} = {}", index, ImaTemplateTag::Name, name),
            ContentTlv::ImaTemplate(ImaTemplateField::Data(data)) =>
                format!("{}: {} = {}", index, ImaTemplateTag::Data, hex::encode(data)),
            ContentTlv::PcClientStd(PcClientStdField::Type(event_type)) =>
                format!("{}: {} = {}", index, PcClientStdTag::Type, event_type),
            ContentTlv::PcClientStd(PcClientStdField::Content(data)) =>
                format!("{}: {} = {}", index, PcClientStdTag::Content, hex::encode(data)),
        }
    }
}
