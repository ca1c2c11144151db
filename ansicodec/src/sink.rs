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

//! Collaborators the decoder reports to.

use crate::{CursorPosition, DecodeError, TerminalOperation};
use bytes::Bytes;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

/// Receives decoded text and operations in stream order.
pub trait TerminalSink {
    /// A displayable character.
    fn on_character(&mut self, character: char);

    /// A decoded escape sequence.
    fn on_operation(&mut self, operation: &TerminalOperation);

    /// A sequence was rejected. Only called when the decoder is fed through
    /// [`nvterm_telnetcodec::ByteSink`], where there is no caller to return the error to.
    fn on_decode_error(&mut self, error: &DecodeError) {
        warn!("{}", error);
    }
}

/// Answers cursor position queries. A decoder has at most one.
pub trait CursorPositionSource {
    /// Current zero-based cursor position.
    fn cursor_position(&self) -> CursorPosition;
}

/// Carries reply bytes back toward the remote host.
pub trait OutputSink {
    /// Send `data`.
    fn write(&mut self, data: Bytes);
}

/// Typed message form of [`TerminalSink`] callbacks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TerminalEvent {
    /// A displayable character
    Character(char),
    /// A decoded operation
    Operation(TerminalOperation),
    /// A rejected sequence
    DecodeError(DecodeError),
}

/// Events sent after the receiver is dropped are discarded.
impl TerminalSink for UnboundedSender<TerminalEvent> {
    fn on_character(&mut self, character: char) {
        let _ = self.send(TerminalEvent::Character(character));
    }

    fn on_operation(&mut self, operation: &TerminalOperation) {
        let _ = self.send(TerminalEvent::Operation(operation.clone()));
    }

    fn on_decode_error(&mut self, error: &DecodeError) {
        let _ = self.send(TerminalEvent::DecodeError(error.clone()));
    }
}

impl TerminalSink for Vec<TerminalEvent> {
    fn on_character(&mut self, character: char) {
        self.push(TerminalEvent::Character(character));
    }

    fn on_operation(&mut self, operation: &TerminalOperation) {
        self.push(TerminalEvent::Operation(operation.clone()));
    }

    fn on_decode_error(&mut self, error: &DecodeError) {
        self.push(TerminalEvent::DecodeError(error.clone()));
    }
}

impl<S: TerminalSink> TerminalSink for Arc<Mutex<S>> {
    fn on_character(&mut self, character: char) {
        if let Ok(mut sink) = self.lock() {
            sink.on_character(character);
        }
    }

    fn on_operation(&mut self, operation: &TerminalOperation) {
        if let Ok(mut sink) = self.lock() {
            sink.on_operation(operation);
        }
    }

    fn on_decode_error(&mut self, error: &DecodeError) {
        if let Ok(mut sink) = self.lock() {
            sink.on_decode_error(error);
        }
    }
}

impl CursorPositionSource for CursorPosition {
    fn cursor_position(&self) -> CursorPosition {
        *self
    }
}

impl<S: CursorPositionSource> CursorPositionSource for Arc<Mutex<S>> {
    fn cursor_position(&self) -> CursorPosition {
        self.lock()
            .map(|source| source.cursor_position())
            .unwrap_or_default()
    }
}

impl OutputSink for UnboundedSender<Bytes> {
    fn write(&mut self, data: Bytes) {
        let _ = self.send(data);
    }
}

impl<F: FnMut(Bytes)> OutputSink for F {
    fn write(&mut self, data: Bytes) {
        self(data);
    }
}

impl OutputSink for Vec<Bytes> {
    fn write(&mut self, data: Bytes) {
        self.push(data);
    }
}

impl<S: OutputSink> OutputSink for Arc<Mutex<S>> {
    fn write(&mut self, data: Bytes) {
        if let Ok(mut sink) = self.lock() {
            sink.write(data);
        }
    }
}
