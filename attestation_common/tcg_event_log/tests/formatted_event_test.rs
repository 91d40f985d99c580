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
    is_cel_event, AlgorithmId, CelLocator, CelType, DumpConfig, EventType, FormattedTcgEvent,
    ImaTemplateContent, TcgDigest, TcgEventFormat, TcgImrEvent, TcgPcClientImrEvent,
    TcgTpmCelEventTlv,
};

fn spec_id_header() -> TcgPcClientImrEvent {
    let mut event = b"Spec ID Event03\0".to_vec();
    event.extend_from_slice(&[0x00; 8]);
    TcgPcClientImrEvent::new(0, EventType::EvNoAction, [0u8; 20], event)
}

fn tcg2_entry() -> TcgImrEvent {
    TcgImrEvent::new(
        7,
        EventType::EvEfiVariableDriverConfig,
        vec![
            TcgDigest::new(AlgorithmId::Sha256, vec![0x3D; 32]),
            TcgDigest::new(AlgorithmId::Sha384, vec![0x4E; 48]),
        ],
        b"SecureBoot".to_vec(),
    )
}

fn cel_entry() -> TcgTpmCelEventTlv {
    let content = ImaTemplateContent::new("ima-ng", vec![0x01; 16]);
    TcgTpmCelEventTlv::new(
        11,
        &[TcgDigest::new(AlgorithmId::Sha384, vec![0x5F; 48])],
        CelLocator::Pcr(10),
        CelType::ImaTemplate,
        &content,
    )
}

// Test Objective: The legacy fixed digest entry exposes no multi digest list
// Expected Result: digests() is empty while the fixed digest stays reachable
#[test]
fn test_pcclient_entry_has_no_digest_list() {
    let mut digest = [0u8; 20];
    digest[0] = 0xAB;
    digest[19] = 0xCD;
    let event = TcgPcClientImrEvent::new(0, EventType::EvSCrtmVersion, digest, vec![0x31, 0x00]);

    assert!(event.digests().is_empty());
    assert_eq!(event.digest(), &digest);
    assert_eq!(event.imr_index(), 0);
    assert_eq!(event.event_type(), EventType::EvSCrtmVersion);
    assert_eq!(event.event_data_size, 2);
    assert_eq!(event.format_type(), TcgEventFormat::PcClient);
}

// Test Objective: Crypto agile entries report their stored fields verbatim
// Expected Result: Digests, index and event type equal the constructor inputs
#[test]
fn test_tcg2_entry_accessors() {
    let event = tcg2_entry();

    assert_eq!(event.imr_index(), 7);
    assert_eq!(event.event_type(), EventType::EvEfiVariableDriverConfig);
    assert_eq!(event.digests().len(), 2);
    assert_eq!(event.digests()[1].alg_id, AlgorithmId::Sha384);
    assert_eq!(event.event_size, 10);
    assert_eq!(event.format_type(), TcgEventFormat::PcClient);
}

// Test Objective: Classify entries by format kind
// Expected Result: Only the CEL record is a CEL event
#[test]
fn test_is_cel_event() {
    assert!(is_cel_event(&cel_entry()));
    assert!(!is_cel_event(&tcg2_entry()));
    assert!(!is_cel_event(&spec_id_header()));
}

// Test Objective: Consume a mixed log through the shared trait only
// Expected Result: Every entry answers the same operations
#[test]
fn test_mixed_log_through_trait_objects() {
    let log: Vec<Box<dyn FormattedTcgEvent>> = vec![
        Box::new(spec_id_header()),
        Box::new(tcg2_entry()),
        Box::new(cel_entry()),
    ];

    let indices: Vec<u32> = log.iter().map(|e| e.imr_index()).collect();
    assert_eq!(indices, vec![0, 7, 10]);

    let types: Vec<EventType> = log.iter().map(|e| e.event_type()).collect();
    assert_eq!(types, vec![
        EventType::EvNoAction,
        EventType::EvEfiVariableDriverConfig,
        EventType::ImaMeasurementEvent,
    ]);

    let digest_counts: Vec<usize> = log.iter().map(|e| e.digests().len()).collect();
    assert_eq!(digest_counts, vec![0, 2, 1]);

    let cel_count = log.iter().map(|e| e.as_ref()).filter(|e| is_cel_event(*e)).count();
    assert_eq!(cel_count, 1);
}

// Test Objective: Verify the text dump of a crypto agile entry
// Expected Result: Index, type, each digest and the event blob are rendered in order
#[test]
fn test_render_tcg2_entry() {
    let text = tcg2_entry().render();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "----------------------------------Event Log Entry---------------------------------");
    assert_eq!(lines[1], "IMR               : 7");
    assert_eq!(lines[2], "Type              : 0x80000001 (EV_EFI_VARIABLE_DRIVER_CONFIG)");
    assert_eq!(lines[3], "Algorithm_id[0]   : 11 (TPM_ALG_SHA256)");
    assert_eq!(lines[4], "Digest[0]:");
    assert_eq!(lines[7], "Algorithm_id[1]   : 12 (TPM_ALG_SHA384)");
    assert_eq!(lines[8], "Digest[1]:");
    assert_eq!(lines[12], "Event:");
    assert!(lines[13].starts_with("00000000  53 65 63 75 72 65 42 6F 6F 74"));
    assert!(lines[13].ends_with("SecureBoot"));
    assert_eq!(lines.len(), 14);
}

// Test Objective: Verify the text dump of the legacy header entry
// Expected Result: The fixed digest and event data are dumped
#[test]
fn test_render_pcclient_entry() {
    let config = DumpConfig { bytes_per_line: 32, show_ascii: false };
    let text = spec_id_header().render_with(&config);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "--------------------Header Specification ID Event--------------------------");
    assert_eq!(lines[1], "IMR               : 0");
    assert_eq!(lines[2], "Type              : 0x3 (EV_NO_ACTION)");
    assert_eq!(lines[3], "Digest:");
    assert_eq!(lines[4], format!("00000000  {}", vec!["00"; 20].join(" ")));
    assert_eq!(lines[5], "Event:");
    assert!(lines[6].starts_with("00000000  53 70 65 63"));
    assert_eq!(lines.len(), 7);
}
