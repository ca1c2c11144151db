//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Session configuration

use std::time::Duration;

/// Network virtual terminal session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NvtConfig {
    /// Terminal type advertised through the TERMINAL-TYPE option
    pub terminal_type: String,

    /// Terminal width in columns, advertised through NAWS
    pub terminal_width: u16,

    /// Terminal height in rows, advertised through NAWS
    pub terminal_height: u16,

    /// Connection timeout used by [`crate::NetworkVirtualTerminal::connect`]
    pub connect_timeout: Duration,

    /// Deadline for a single transport read (None blocks indefinitely)
    pub read_timeout: Option<Duration>,

    /// Capacity reserved for each transport read
    pub read_buffer_size: usize,
}

impl Default for NvtConfig {
    fn default() -> Self {
        Self {
            terminal_type: "XTERM".to_string(),
            terminal_width: 80,
            terminal_height: 24,
            connect_timeout: Duration::from_secs(10),
            read_timeout: None,
            read_buffer_size: 4096,
        }
    }
}

impl NvtConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the terminal type
    pub fn with_terminal_type(mut self, terminal_type: impl Into<String>) -> Self {
        self.terminal_type = terminal_type.into();
        self
    }

    /// Set the terminal size
    ///
    /// NAWS payloads are sent without IAC doubling, so a dimension whose high or low byte is
    /// `0xFF` is rejected by strict peers.
    pub fn with_terminal_size(mut self, width: u16, height: u16) -> Self {
        self.terminal_width = width;
        self.terminal_height = height;
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the read timeout
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the read buffer size
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size.max(1);
        self
    }
}
