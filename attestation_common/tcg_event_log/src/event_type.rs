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

//! TCG event type codes
//!
//! Covers the PC Client Platform Firmware Profile event types, the EFI specific event
//! types and the synthetic code used for IMA records wrapped into a canonical event log.
//! Codes that are not defined here are kept verbatim in `EventType::Unknown`, so a log
//! produced against a newer specification still round-trips.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    EvPrebootCert,
    EvPostCode,
    EvUnused,
    EvNoAction,
    EvSeparator,
    EvAction,
    EvEventTag,
    EvSCrtmContents,
    EvSCrtmVersion,
    EvCpuMicrocode,
    EvPlatformConfigFlags,
    EvTableOfDevices,
    EvCompactHash,
    EvIpl,
    EvIplPartitionData,
    EvNonhostCode,
    EvNonhostConfig,
    EvNonhostInfo,
    EvOmitBootDeviceEvents,
    EvPostCode2,
    // IMA records carry no TCG event type, this one is synthesized for them
    ImaMeasurementEvent,

    // EFI specific event types
    EvEfiEventBase,
    EvEfiVariableDriverConfig,
    EvEfiVariableBoot,
    EvEfiBootServicesApplication,
    EvEfiBootServicesDriver,
    EvEfiRuntimeServicesDriver,
    EvEfiGptEvent,
    EvEfiAction,
    EvEfiPlatformFirmwareBlob,
    EvEfiHandoffTables,
    EvEfiPlatformFirmwareBlob2,
    EvEfiHandoffTables2,
    EvEfiVariableBoot2,
    EvEfiGptEvent2,
    EvEfiHcrtmEvent,
    EvEfiVariableAuthority,
    EvEfiSpdmFirmwareBlob,
    EvEfiSpdmFirmwareConfig,
    EvEfiSpdmDevicePolicy,
    EvEfiSpdmDeviceAuthority,
    Unknown(u32),
}

impl From<u32> for EventType {
    fn from(value: u32) -> Self {
        match value {
            0x00000000 => Self::EvPrebootCert,
            0x00000001 => Self::EvPostCode,
            0x00000002 => Self::EvUnused,
            0x00000003 => Self::EvNoAction,
            0x00000004 => Self::EvSeparator,
            0x00000005 => Self::EvAction,
            0x00000006 => Self::EvEventTag,
            0x00000007 => Self::EvSCrtmContents,
            0x00000008 => Self::EvSCrtmVersion,
            0x00000009 => Self::EvCpuMicrocode,
            0x0000000A => Self::EvPlatformConfigFlags,
            0x0000000B => Self::EvTableOfDevices,
            0x0000000C => Self::EvCompactHash,
            0x0000000D => Self::EvIpl,
            0x0000000E => Self::EvIplPartitionData,
            0x0000000F => Self::EvNonhostCode,
            0x00000010 => Self::EvNonhostConfig,
            0x00000011 => Self::EvNonhostInfo,
            0x00000012 => Self::EvOmitBootDeviceEvents,
            0x00000013 => Self::EvPostCode2,
            0x00000014 => Self::ImaMeasurementEvent,
            0x80000000 => Self::EvEfiEventBase,
            0x80000001 => Self::EvEfiVariableDriverConfig,
            0x80000002 => Self::EvEfiVariableBoot,
            0x80000003 => Self::EvEfiBootServicesApplication,
            0x80000004 => Self::EvEfiBootServicesDriver,
            0x80000005 => Self::EvEfiRuntimeServicesDriver,
            0x80000006 => Self::EvEfiGptEvent,
            0x80000007 => Self::EvEfiAction,
            0x80000008 => Self::EvEfiPlatformFirmwareBlob,
            0x80000009 => Self::EvEfiHandoffTables,
            0x8000000A => Self::EvEfiPlatformFirmwareBlob2,
            0x8000000B => Self::EvEfiHandoffTables2,
            0x8000000C => Self::EvEfiVariableBoot2,
            0x8000000D => Self::EvEfiGptEvent2,
            0x80000010 => Self::EvEfiHcrtmEvent,
            0x800000E0 => Self::EvEfiVariableAuthority,
            0x800000E1 => Self::EvEfiSpdmFirmwareBlob,
            0x800000E2 => Self::EvEfiSpdmFirmwareConfig,
            0x800000E3 => Self::EvEfiSpdmDevicePolicy,
            0x800000E4 => Self::EvEfiSpdmDeviceAuthority,
            other => Self::Unknown(other),
        }
    }
}

impl EventType {
    /// Raw 32-bit event type code
    pub fn code(&self) -> u32 {
        match self {
            Self::EvPrebootCert => 0x00000000,
            Self::EvPostCode => 0x00000001,
            Self::EvUnused => 0x00000002,
            Self::EvNoAction => 0x00000003,
            Self::EvSeparator => 0x00000004,
            Self::EvAction => 0x00000005,
            Self::EvEventTag => 0x00000006,
            Self::EvSCrtmContents => 0x00000007,
            Self::EvSCrtmVersion => 0x00000008,
            Self::EvCpuMicrocode => 0x00000009,
            Self::EvPlatformConfigFlags => 0x0000000A,
            Self::EvTableOfDevices => 0x0000000B,
            Self::EvCompactHash => 0x0000000C,
            Self::EvIpl => 0x0000000D,
            Self::EvIplPartitionData => 0x0000000E,
            Self::EvNonhostCode => 0x0000000F,
            Self::EvNonhostConfig => 0x00000010,
            Self::EvNonhostInfo => 0x00000011,
            Self::EvOmitBootDeviceEvents => 0x00000012,
            Self::EvPostCode2 => 0x00000013,
            Self::ImaMeasurementEvent => 0x00000014,
            Self::EvEfiEventBase => 0x80000000,
            Self::EvEfiVariableDriverConfig => 0x80000001,
            Self::EvEfiVariableBoot => 0x80000002,
            Self::EvEfiBootServicesApplication => 0x80000003,
            Self::EvEfiBootServicesDriver => 0x80000004,
            Self::EvEfiRuntimeServicesDriver => 0x80000005,
            Self::EvEfiGptEvent => 0x80000006,
            Self::EvEfiAction => 0x80000007,
            Self::EvEfiPlatformFirmwareBlob => 0x80000008,
            Self::EvEfiHandoffTables => 0x80000009,
            Self::EvEfiPlatformFirmwareBlob2 => 0x8000000A,
            Self::EvEfiHandoffTables2 => 0x8000000B,
            Self::EvEfiVariableBoot2 => 0x8000000C,
            Self::EvEfiGptEvent2 => 0x8000000D,
            Self::EvEfiHcrtmEvent => 0x80000010,
            Self::EvEfiVariableAuthority => 0x800000E0,
            Self::EvEfiSpdmFirmwareBlob => 0x800000E1,
            Self::EvEfiSpdmFirmwareConfig => 0x800000E2,
            Self::EvEfiSpdmDevicePolicy => 0x800000E3,
            Self::EvEfiSpdmDeviceAuthority => 0x800000E4,
            Self::Unknown(value) => *value,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvPrebootCert => write!(f, "EV_PREBOOT_CERT"),
            Self::EvPostCode => write!(f, "EV_POST_CODE"),
            Self::EvUnused => write!(f, "EV_UNUSED"),
            Self::EvNoAction => write!(f, "EV_NO_ACTION"),
            Self::EvSeparator => write!(f, "EV_SEPARATOR"),
            Self::EvAction => write!(f, "EV_ACTION"),
            Self::EvEventTag => write!(f, "EV_EVENT_TAG"),
            Self::EvSCrtmContents => write!(f, "EV_S_CRTM_CONTENTS"),
            Self::EvSCrtmVersion => write!(f, "EV_S_CRTM_VERSION"),
            Self::EvCpuMicrocode => write!(f, "EV_CPU_MICROCODE"),
            Self::EvPlatformConfigFlags => write!(f, "EV_PLATFORM_CONFIG_FLAGS"),
            Self::EvTableOfDevices => write!(f, "EV_TABLE_OF_DEVICES"),
            Self::EvCompactHash => write!(f, "EV_COMPACT_HASH"),
            Self::EvIpl => write!(f, "EV_IPL"),
            Self::EvIplPartitionData => write!(f, "EV_IPL_PARTITION_DATA"),
            Self::EvNonhostCode => write!(f, "EV_NONHOST_CODE"),
            Self::EvNonhostConfig => write!(f, "EV_NONHOST_CONFIG"),
            Self::EvNonhostInfo => write!(f, "EV_NONHOST_INFO"),
            Self::EvOmitBootDeviceEvents => write!(f, "EV_OMIT_BOOT_DEVICE_EVENTS"),
            Self::EvPostCode2 => write!(f, "EV_POST_CODE2"),
            Self::ImaMeasurementEvent => write!(f, "IMA_MEASUREMENT_EVENT"),
            Self::EvEfiEventBase => write!(f, "EV_EFI_EVENT_BASE"),
            Self::EvEfiVariableDriverConfig => write!(f, "EV_EFI_VARIABLE_DRIVER_CONFIG"),
            Self::EvEfiVariableBoot => write!(f, "EV_EFI_VARIABLE_BOOT"),
            Self::EvEfiBootServicesApplication => write!(f, "EV_EFI_BOOT_SERVICES_APPLICATION"),
            Self::EvEfiBootServicesDriver => write!(f, "EV_EFI_BOOT_SERVICES_DRIVER"),
            Self::EvEfiRuntimeServicesDriver => write!(f, "EV_EFI_RUNTIME_SERVICES_DRIVER"),
            Self::EvEfiGptEvent => write!(f, "EV_EFI_GPT_EVENT"),
            Self::EvEfiAction => write!(f, "EV_EFI_ACTION"),
            Self::EvEfiPlatformFirmwareBlob => write!(f, "EV_EFI_PLATFORM_FIRMWARE_BLOB"),
            Self::EvEfiHandoffTables => write!(f, "EV_EFI_HANDOFF_TABLES"),
            Self::EvEfiPlatformFirmwareBlob2 => write!(f, "EV_EFI_PLATFORM_FIRMWARE_BLOB2"),
            Self::EvEfiHandoffTables2 => write!(f, "EV_EFI_HANDOFF_TABLES2"),
            Self::EvEfiVariableBoot2 => write!(f, "EV_EFI_VARIABLE_BOOT2"),
            Self::EvEfiGptEvent2 => write!(f, "EV_EFI_GPT_EVENT2"),
            Self::EvEfiHcrtmEvent => write!(f, "EV_EFI_HCRTM_EVENT"),
            Self::EvEfiVariableAuthority => write!(f, "EV_EFI_VARIABLE_AUTHORITY"),
            Self::EvEfiSpdmFirmwareBlob => write!(f, "EV_EFI_SPDM_FIRMWARE_BLOB"),
            Self::EvEfiSpdmFirmwareConfig => write!(f, "EV_EFI_SPDM_FIRMWARE_CONFIG"),
            Self::EvEfiSpdmDevicePolicy => write!(f, "EV_EFI_SPDM_DEVICE_POLICY"),
            Self::EvEfiSpdmDeviceAuthority => write!(f, "EV_EFI_SPDM_DEVICE_AUTHORITY"),
            Self::Unknown(_) => write!(f, "UNKNOWN"),
        }
    }
}
