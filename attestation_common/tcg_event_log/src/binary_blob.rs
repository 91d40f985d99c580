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

//! Hex and ASCII dump of binary blobs, used by every event renderer.

use log::info;
use crate::config::{DumpConfig, MAX_BYTES_PER_LINE};

/// Borrowed byte blob with the address its first byte is displayed at
pub struct BinaryBlob<'a> {
    data: &'a [u8],
    base: u64,
}

impl<'a> BinaryBlob<'a> {
    pub fn new(data: &'a [u8], base: u64) -> Self {
        Self { data, base }
    }

    /// Render the blob as `OFFSET  HEX BYTES  ASCII` lines
    ///
    /// Non printable bytes are shown as `.` in the ASCII column. An empty blob renders
    /// as an empty string. The line width is clamped to the range `validate` accepts.
    pub fn render(&self, config: &DumpConfig) -> String {
        let width = config.bytes_per_line.clamp(1, MAX_BYTES_PER_LINE);
        let hex_width = width * 3 - 1;

        self.data
            .chunks(width)
            .enumerate()
            .map(|(i, chunk)| {
                let offset = self.base + (i * width) as u64;
                let hex_part = chunk
                    .iter()
                    .map(|b| format!("{:02X}", b))
                    .collect::<Vec<String>>()
                    .join(" ");
                if config.show_ascii {
                    let ascii: String = chunk
                        .iter()
                        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
                        .collect();
                    format!("{:08X}  {:<hex_width$}  {}", offset, hex_part, ascii, hex_width = hex_width)
                } else {
                    format!("{:08X}  {}", offset, hex_part)
                }
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn dump(&self, config: &DumpConfig) {
        for line in self.render(config).lines() {
            info!("{}", line);
        }
    }
}
