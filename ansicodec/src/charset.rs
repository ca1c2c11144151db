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

//! Incremental byte to character decoding for plain text.

use crate::TextEncoding;

const REPLACEMENT: char = '\u{FFFD}';

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum State {
    #[default]
    Ground,
    Utf8 {
        expected: u8,
        accumulated: u32,
    },
}

/// Converts plain-text bytes to characters, keeping partial UTF-8 sequences across calls.
#[derive(Clone, Debug, Default)]
pub struct CharDecoder {
    encoding: TextEncoding,
    state: State,
}

impl CharDecoder {
    /// Decoder for `encoding`.
    pub fn new(encoding: TextEncoding) -> CharDecoder {
        CharDecoder {
            encoding,
            state: State::Ground,
        }
    }

    /// Feed one byte. At most two characters come out: a replacement for an interrupted
    /// UTF-8 sequence followed by the character the byte starts.
    pub fn push(&mut self, byte: u8) -> [Option<char>; 2] {
        match self.encoding {
            TextEncoding::Ascii if byte.is_ascii() => [Some(char::from(byte)), None],
            TextEncoding::Ascii => [Some('?'), None],
            TextEncoding::Latin1 => [Some(char::from(byte)), None],
            TextEncoding::Utf8 => self.push_utf8(byte),
        }
    }

    /// True when a multi-byte character is partially decoded.
    pub fn is_pending(&self) -> bool {
        self.state != State::Ground
    }

    /// Abandon a partially decoded character, returning its replacement.
    pub fn interrupt(&mut self) -> Option<char> {
        if self.is_pending() {
            self.state = State::Ground;
            Some(REPLACEMENT)
        } else {
            None
        }
    }

    fn push_utf8(&mut self, byte: u8) -> [Option<char>; 2] {
        match self.state {
            State::Ground => [self.start(byte), None],
            State::Utf8 {
                expected,
                accumulated,
            } => {
                if byte & 0xC0 != 0x80 {
                    self.state = State::Ground;
                    return [Some(REPLACEMENT), self.start(byte)];
                }
                let accumulated = accumulated | (u32::from(byte & 0x3F) << ((expected - 1) * 6));
                if expected == 1 {
                    self.state = State::Ground;
                    [Some(char::from_u32(accumulated).unwrap_or(REPLACEMENT)), None]
                } else {
                    self.state = State::Utf8 {
                        expected: expected - 1,
                        accumulated,
                    };
                    [None, None]
                }
            }
        }
    }

    fn start(&mut self, byte: u8) -> Option<char> {
        let (expected, accumulated) = match byte {
            0x00..=0x7F => return Some(char::from(byte)),
            0xC0..=0xDF => (1, u32::from(byte & 0x1F) << 6),
            0xE0..=0xEF => (2, u32::from(byte & 0x0F) << 12),
            0xF0..=0xF7 => (3, u32::from(byte & 0x07) << 18),
            _ => return Some(REPLACEMENT),
        };
        self.state = State::Utf8 {
            expected,
            accumulated,
        };
        None
    }
}
