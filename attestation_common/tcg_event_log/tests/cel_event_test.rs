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

use tcg_event_log::{
    AlgorithmId, CelContent, CelLocator, CelType, ContentTlv, EventLogError, EventType,
    FormattedTcgEvent, ImaTemplateContent, ImaTemplateField, PcClientStdContent,
    PcClientStdField, TcgDigest, TcgEventFormat, TcgTpmCelEventTlv, TlvValue,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn separator_event() -> TcgTpmCelEventTlv {
    let digests = vec![TcgDigest::new(AlgorithmId::Sha256, vec![0xAA; 32])];
    let content = PcClientStdContent::new(EventType::EvSeparator, vec![0xFF, 0xFF, 0xFF, 0xFF]);
    TcgTpmCelEventTlv::new(7, &digests, CelLocator::Pcr(4), CelType::PcClientStd, &content)
}

// Test Objective: Build a PCR anchored PC Client record and read it back
// Expected Result: IMR index, digests and event type match the build inputs
#[test]
fn test_pcr_anchored_record() {
    init_logger();
    let event = separator_event();

    assert_eq!(event.rec_num(), 7);
    assert_eq!(event.imr_index(), 4);
    assert_eq!(event.locator(), Some(CelLocator::Pcr(4)));
    assert_eq!(event.digests(), vec![TcgDigest::new(AlgorithmId::Sha256, vec![0xAA; 32])]);
    assert_eq!(event.event_type(), EventType::EvSeparator);
    assert_eq!(event.format_type(), TcgEventFormat::CelTlv);
}

// Test Objective: Verify digests keep order and content, including unknown algorithms
// Expected Result: digests() returns exactly the input list
#[test]
fn test_digest_round_trip_preserves_order() {
    let digests = vec![
        TcgDigest::new(AlgorithmId::Sha384, vec![0x01; 48]),
        TcgDigest::new(AlgorithmId::Sha1, vec![0x02; 20]),
        TcgDigest::new(AlgorithmId::Unknown(0x0027), vec![0x03, 0x04]),
        TcgDigest::new(AlgorithmId::Sha256, vec![]),
        TcgDigest::new(AlgorithmId::Sha1, vec![0x05; 20]),
    ];
    let content = PcClientStdContent::new(EventType::EvAction, b"Calling EFI Application".to_vec());
    let event = TcgTpmCelEventTlv::new(1, &digests, CelLocator::Pcr(0), CelType::PcClientStd, &content);

    assert_eq!(event.digests(), digests);

    let tags: Vec<u32> = event.digests_tlv().children().iter().map(|tlv| tlv.tag).collect();
    assert_eq!(tags, vec![0x000C, 0x0004, 0x0027, 0x000B, 0x0004]);
    assert_eq!(event.digests_tlv().tag, CelType::Digests.code());
}

// Test Objective: Verify an empty digest list is accepted
// Expected Result: The record reports no digests
#[test]
fn test_empty_digest_list() {
    let content = PcClientStdContent::new(EventType::EvSeparator, vec![0; 4]);
    let event = TcgTpmCelEventTlv::new(0, &[], CelLocator::Pcr(7), CelType::PcClientStd, &content);

    assert!(event.digests().is_empty());
    assert!(event.digests_tlv().children().is_empty());
}

// Test Objective: IMA template content synthesizes the event type
// Expected Result: IMA_MEASUREMENT_EVENT whatever the template name and data are
#[test]
fn test_ima_template_event_type() {
    let digests = vec![TcgDigest::new(AlgorithmId::Sha1, vec![0x11; 20])];
    for (name, data) in [("ima-ng", vec![0x5A; 16]), ("", vec![]), ("ima-sig", vec![0x00; 3])] {
        let content = ImaTemplateContent::new(name, data);
        let event = TcgTpmCelEventTlv::new(3, &digests, CelLocator::Pcr(10), CelType::ImaTemplate, &content);
        assert_eq!(event.event_type(), EventType::ImaMeasurementEvent);
        assert_eq!(event.try_event_type().unwrap(), EventType::ImaMeasurementEvent);
    }
}

// Test Objective: The IMA content kind wins over whatever children the content holds
// Expected Result: IMA_MEASUREMENT_EVENT even with PC Client children
#[test]
fn test_ima_content_kind_overrides_children() {
    let content = PcClientStdContent::new(EventType::EvSeparator, vec![0xFF; 4]);
    let event = TcgTpmCelEventTlv::new(3, &[], CelLocator::Pcr(10), CelType::ImaTemplate, &content);

    assert_eq!(event.event_type(), EventType::ImaMeasurementEvent);
}

// Test Objective: Verify NV index anchored records
// Expected Result: imr_index() reports the NV index and to_tlv() emits CEL_NV_INDEX only
#[test]
fn test_nv_index_locator() {
    let content = PcClientStdContent::new(EventType::EvEventTag, vec![1, 2, 3]);
    let event = TcgTpmCelEventTlv::new(9, &[], CelLocator::NvIndex(0x0150_0001), CelType::PcClientStd, &content);

    assert_eq!(event.imr_index(), 0x0150_0001);
    assert_eq!(event.locator(), Some(CelLocator::NvIndex(0x0150_0001)));

    let tags: Vec<u32> = event.to_tlv().iter().map(|tlv| tlv.tag).collect();
    assert_eq!(tags, vec![
        CelType::Seqnum.code(),
        CelType::NvIndex.code(),
        CelType::Digests.code(),
        CelType::PcClientStd.code(),
    ]);
}

// Test Objective: PCR 0 is a real locator, distinct from a missing one
// Expected Result: try_imr_index() succeeds with 0
#[test]
fn test_pcr_zero_is_present() {
    let content = PcClientStdContent::new(EventType::EvPostCode, vec![]);
    let event = TcgTpmCelEventTlv::new(0, &[], CelLocator::Pcr(0), CelType::PcClientStd, &content);

    assert_eq!(event.try_imr_index().unwrap(), 0);
    assert_eq!(event.to_tlv()[1].tag, CelType::Pcr.code());
    assert_eq!(event.to_tlv()[1].as_int(), Some(0));
}

// Test Objective: A decoded record without a locator falls back to IMR 0
// Expected Result: imr_index() returns 0 and try_imr_index() reports MissingLocator
#[test]
fn test_missing_locator_defaults_to_zero() {
    init_logger();
    let content = CelContent::from_event(
        CelType::PcClientStd,
        &PcClientStdContent::new(EventType::EvSeparator, vec![0; 4]),
    );
    let event = TcgTpmCelEventTlv::from_parts(42, &[], None, content);

    assert_eq!(event.imr_index(), 0);
    assert!(matches!(event.try_imr_index(), Err(EventLogError::MissingLocator(42))));
    assert_eq!(event.to_tlv().len(), 3);
}

// Test Objective: Under populated content falls back to EV_NO_ACTION
// Expected Result: event_type() is EV_NO_ACTION and try_event_type() reports MalformedContent
#[test]
fn test_short_content_defaults_to_no_action() {
    init_logger();
    let content = CelContent::from_children(
        CelType::PcClientStd,
        vec![ContentTlv::PcClientStd(PcClientStdField::Type(EventType::EvSeparator))],
    );
    let event = TcgTpmCelEventTlv::from_parts(5, &[], Some(CelLocator::Pcr(1)), content);

    assert_eq!(event.event_type(), EventType::EvNoAction);
    assert!(matches!(event.try_event_type(), Err(EventLogError::MalformedContent(_))));

    let empty = TcgTpmCelEventTlv::from_parts(
        6, &[], Some(CelLocator::Pcr(1)), CelContent::from_children(CelType::PcClientStd, vec![]),
    );
    assert_eq!(empty.event_type(), EventType::EvNoAction);
}

// Test Objective: Two children without a PC Client descriptor cannot yield an event type
// Expected Result: EV_NO_ACTION
#[test]
fn test_content_without_descriptor_defaults_to_no_action() {
    let content = ImaTemplateContent::new("ima-ng", vec![1, 2, 3]);
    let event = TcgTpmCelEventTlv::new(8, &[], CelLocator::Pcr(10), CelType::PcClientStd, &content);

    assert_eq!(event.event_type(), EventType::EvNoAction);
    assert!(event.try_event_type().is_err());
}

// Test Objective: Unknown event type codes survive the content round trip
// Expected Result: The raw code is reported back
#[test]
fn test_unknown_event_type_preserved() {
    let content = PcClientStdContent::new(EventType::from(0x8000_0FFFu32), vec![]);
    let event = TcgTpmCelEventTlv::new(2, &[], CelLocator::Pcr(1), CelType::PcClientStd, &content);

    assert_eq!(event.event_type(), EventType::Unknown(0x8000_0FFF));
    assert_eq!(event.event_type().code(), 0x8000_0FFF);
}

// Test Objective: Verify the content node layout of a built record
// Expected Result: Content tag is the content kind, children are descriptor then payload
#[test]
fn test_content_node_layout() {
    let event = separator_event();
    let content = event.content();

    assert_eq!(content.content_type, CelType::PcClientStd);
    assert_eq!(content.children, vec![
        ContentTlv::PcClientStd(PcClientStdField::Type(EventType::EvSeparator)),
        ContentTlv::PcClientStd(PcClientStdField::Content(vec![0xFF; 4])),
    ]);

    let nodes = event.to_tlv();
    assert_eq!(nodes[0].as_int(), Some(7));
    let content_node = &nodes[3];
    assert_eq!(content_node.tag, CelType::PcClientStd.code());
    assert_eq!(content_node.children()[0].value, TlvValue::EventType(EventType::EvSeparator));
    assert_eq!(content_node.children()[1].value, TlvValue::Bytes(vec![0xFF; 4]));
}

// Test Objective: Verify the text dump of a PC Client record
// Expected Result: Header, locator, content type, digests and contents are all rendered
#[test]
fn test_render_pc_client_record() {
    let text = separator_event().render();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "-----------------------------Canonical Event Log Entry----------------------------");
    assert_eq!(lines[1], "Encoding          : TLV");
    assert_eq!(lines[2], "Rec Num           : 7");
    assert_eq!(lines[3], "IMR               : 4");
    assert_eq!(lines[4], "Type              : 0x5 (CEL_PCCLIENT_STD)");
    assert_eq!(lines[5], "Digests:");
    assert_eq!(lines[6], "Algorithm_id[0]   : 11 (TPM_ALG_SHA256)");
    assert_eq!(lines[7], "Digest[0]:");
    assert!(lines[8].starts_with("00000000  AA AA"));
    assert!(lines[9].starts_with("00000010  AA AA"));
    assert_eq!(lines[10], "Contents:");
    assert_eq!(lines[11], "0: PCCLIENT_STD_TYPE = EV_SEPARATOR");
    assert_eq!(lines[12], "1: PCCLIENT_STD_CONTENT = ffffffff");
    assert_eq!(lines.len(), 13);
}

// Test Objective: Verify the text dump of an NV anchored IMA record
// Expected Result: NvIndex line instead of IMR, template name and data rendered by tag
#[test]
fn test_render_ima_record() {
    let content = ImaTemplateContent::new("ima-ng", vec![0xDE, 0xAD]);
    let event = TcgTpmCelEventTlv::new(1, &[], CelLocator::NvIndex(3), CelType::ImaTemplate, &content);
    let text = event.render();

    assert!(text.contains("NvIndex           : 3"));
    assert!(!text.contains("IMR               :"));
    assert!(text.contains("Type              : 0x7 (CEL_IMA_TEMPLATE)"));
    assert!(text.contains("0: IMA_TEMPLATE_NAME = ima-ng"));
    assert!(text.contains("1: IMA_TEMPLATE_DATA = dead"));
    assert_eq!(
        event.content().children[0],
        ContentTlv::ImaTemplate(ImaTemplateField::Name("ima-ng".to_string()))
    );
}

// Test Objective: Rendering is deterministic
// Expected Result: Two renders of equal records are identical
#[test]
fn test_render_is_deterministic() {
    assert_eq!(separator_event().render(), separator_event().render());
    separator_event().dump();
}
