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

use crate::consts;

/// How application bytes outside escape sequences become characters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextEncoding {
    /// 7-bit ASCII; bytes above 0x7F become `?`
    #[default]
    Ascii,
    /// ISO-8859-1, one byte per character
    Latin1,
    /// UTF-8, decoded incrementally; malformed input becomes U+FFFD
    Utf8,
}

/// Escape sequence decoder settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnsiConfig {
    /// Honour XON/XOFF flow control in the incoming stream
    pub xon_xoff: bool,
    /// Character encoding of plain text
    pub encoding: TextEncoding,
    /// Longest escape sequence buffered before it is abandoned.
    /// Values below [`consts::MIN_SEQUENCE_LENGTH`] are raised to it.
    pub max_sequence_length: usize,
}

impl AnsiConfig {
    /// Default settings: XON/XOFF on, ASCII text.
    pub fn new() -> AnsiConfig {
        AnsiConfig::default()
    }

    /// Set XON/XOFF handling
    pub fn with_xon_xoff(mut self, enabled: bool) -> AnsiConfig {
        self.xon_xoff = enabled;
        self
    }

    /// Set the text encoding
    pub fn with_encoding(mut self, encoding: TextEncoding) -> AnsiConfig {
        self.encoding = encoding;
        self
    }

    /// Set the sequence length limit
    pub fn with_max_sequence_length(mut self, length: usize) -> AnsiConfig {
        self.max_sequence_length = length.max(consts::MIN_SEQUENCE_LENGTH);
        self
    }

    /// Effective sequence length limit, never below the shortest long form sequence.
    pub fn sequence_limit(&self) -> usize {
        self.max_sequence_length.max(consts::MIN_SEQUENCE_LENGTH)
    }
}

impl Default for AnsiConfig {
    fn default() -> Self {
        AnsiConfig {
            xon_xoff: true,
            encoding: TextEncoding::Ascii,
            max_sequence_length: consts::MAX_SEQUENCE_LENGTH,
        }
    }
}
