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

//! Accumulation of escape sequence bytes until a final byte arrives.

use crate::{CommandDispatcher, consts};
use bytes::{Buf, BytesMut};

/// Where the decoder is relative to an escape sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BufferState {
    /// Bytes are plain text
    #[default]
    Normal,
    /// An `ESC` was seen and the sequence is not complete yet
    Accumulating,
}

/// Outcome of a completion check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Scan {
    /// More bytes are needed; the buffer is kept as is.
    Incomplete,
    /// A complete sequence occupies the first `length` bytes.
    ///
    /// When `command` is `ESC` the sequence was cut short by a new introducer, which is
    /// not part of `length`.
    Sequence {
        /// Final byte
        command: u8,
        /// Text between the introducer and the final byte
        parameter: String,
        /// Bytes to drop from the front of the buffer
        length: usize,
    },
}

/// Bytes of the escape sequence being received. The first byte, when present, is `ESC`.
#[derive(Clone, Debug, Default)]
pub struct EscapeSequenceBuffer {
    bytes: BytesMut,
}

impl EscapeSequenceBuffer {
    /// An empty buffer.
    pub fn new() -> EscapeSequenceBuffer {
        EscapeSequenceBuffer::default()
    }

    /// Current state.
    pub fn state(&self) -> BufferState {
        if self.bytes.is_empty() {
            BufferState::Normal
        } else {
            BufferState::Accumulating
        }
    }

    /// Buffered byte count.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when no sequence is in progress.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Buffered bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append one byte.
    pub fn push(&mut self, byte: u8) {
        self.bytes.extend_from_slice(&[byte]);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Drop the first `length` bytes.
    pub fn consume(&mut self, length: usize) {
        self.bytes.advance(length.min(self.bytes.len()));
    }

    /// Remove and return the first byte when it is plain text rather than an introducer.
    pub fn take_plain(&mut self) -> Option<u8> {
        match self.bytes.first() {
            Some(&byte) if byte != consts::ESC => {
                self.bytes.advance(1);
                Some(byte)
            }
            _ => None,
        }
    }

    /// Check whether the buffer holds a complete sequence.
    ///
    /// `ESC [` starts the long form, whose parameter runs until the first byte `dispatcher`
    /// does not accept. A `"` opens or closes a quoted span in which every byte is
    /// accepted. Any other second byte is itself the command of a short form sequence.
    pub fn scan<D: CommandDispatcher + ?Sized>(&self, dispatcher: &D) -> Scan {
        let bytes = self.as_bytes();
        if bytes.len() < 2 {
            return Scan::Incomplete;
        }
        if bytes[1] != consts::CSI {
            let command = bytes[1];
            return Scan::Sequence {
                command,
                parameter: String::new(),
                length: if command == consts::ESC { 1 } else { 2 },
            };
        }

        let mut quoted = false;
        let mut end = 2;
        while end < bytes.len() {
            let byte = bytes[end];
            if byte == consts::QUOTE {
                quoted = !quoted;
            } else if !quoted && !dispatcher.is_valid_parameter_character(byte) {
                break;
            }
            end += 1;
        }
        if end == bytes.len() {
            return Scan::Incomplete;
        }

        let command = bytes[end];
        Scan::Sequence {
            command,
            parameter: String::from_utf8_lossy(&bytes[2..end]).into_owned(),
            length: if command == consts::ESC { end } else { end + 1 },
        }
    }
}
