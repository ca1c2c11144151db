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

//! The decoder tying buffer, dispatcher, text decoding and flow control together.

use crate::{
    AnsiConfig, AnsiDispatcher, BufferState, CharDecoder, CommandDispatcher, CursorPositionSource,
    DecodeError, EscapeSequenceBuffer, FlowControlLatch, GraphicAttributes, OutputSink, Scan,
    TerminalOperation, TerminalSink, consts,
};
use bytes::Bytes;
use nvterm_telnetcodec::ByteSink;
use tracing::{debug, trace, warn};

/// Escape sequence decoder for the terminal side of a session.
///
/// Bytes go in one at a time or in slices of any size. Plain text reaches every
/// [`TerminalSink`] as characters, complete sequences reach them as [`TerminalOperation`]s,
/// and both keep the order of the incoming stream. Status queries are answered through
/// the [`OutputSink`], which XON/XOFF can hold back.
pub struct AnsiDecoder<D = AnsiDispatcher> {
    config: AnsiConfig,
    dispatcher: D,
    buffer: EscapeSequenceBuffer,
    text: CharDecoder,
    latch: FlowControlLatch,
    attributes: GraphicAttributes,
    sinks: Vec<Box<dyn TerminalSink + Send>>,
    cursor_source: Option<Box<dyn CursorPositionSource + Send>>,
    output: Option<Box<dyn OutputSink + Send>>,
}

impl AnsiDecoder {
    /// Decoder for the ANSI command set.
    ///
    /// # Example
    /// ```
    /// use nvterm_ansicodec::{AnsiConfig, AnsiDecoder};
    ///
    /// let mut decoder = AnsiDecoder::new(AnsiConfig::default());
    /// decoder.input(b"\x1b[2J").unwrap();
    /// ```
    pub fn new(config: AnsiConfig) -> AnsiDecoder {
        AnsiDecoder::with_dispatcher(AnsiDispatcher::new(), config)
    }
}

impl Default for AnsiDecoder {
    fn default() -> Self {
        AnsiDecoder::new(AnsiConfig::default())
    }
}

impl<D: CommandDispatcher> AnsiDecoder<D> {
    /// Decoder interpreting sequences with `dispatcher`.
    pub fn with_dispatcher(dispatcher: D, config: AnsiConfig) -> AnsiDecoder<D> {
        AnsiDecoder {
            text: CharDecoder::new(config.encoding),
            config,
            dispatcher,
            buffer: EscapeSequenceBuffer::new(),
            latch: FlowControlLatch::new(),
            attributes: GraphicAttributes::default(),
            sinks: Vec::new(),
            cursor_source: None,
            output: None,
        }
    }

    /// Active settings.
    pub fn config(&self) -> &AnsiConfig {
        &self.config
    }

    /// Add a sink. Sinks are notified in registration order.
    pub fn subscribe(&mut self, sink: impl TerminalSink + Send + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Set the responder for cursor position queries, replacing any previous one.
    pub fn set_cursor_source(&mut self, source: impl CursorPositionSource + Send + 'static) {
        self.cursor_source = Some(Box::new(source));
    }

    /// Set where replies are written, replacing any previous output.
    pub fn set_output(&mut self, output: impl OutputSink + Send + 'static) {
        self.output = Some(Box::new(output));
    }

    /// Renditions applied so far.
    pub fn attributes(&self) -> &GraphicAttributes {
        &self.attributes
    }

    /// Whether a sequence is being accumulated.
    pub fn state(&self) -> BufferState {
        self.buffer.state()
    }

    /// XON/XOFF state of the output path.
    pub fn flow_control(&self) -> &FlowControlLatch {
        &self.latch
    }

    /// Decode `data`.
    ///
    /// Every byte is processed even when a sequence is rejected. Each rejected sequence
    /// is returned, in stream order.
    pub fn input(&mut self, data: &[u8]) -> Result<(), Vec<DecodeError>> {
        let mut errors = Vec::new();
        for byte in data {
            self.feed(*byte, &mut errors);
        }
        into_result(errors)
    }

    /// Decode one byte.
    pub fn input_byte(&mut self, byte: u8) -> Result<(), Vec<DecodeError>> {
        let mut errors = Vec::new();
        self.feed(byte, &mut errors);
        into_result(errors)
    }

    /// Write `data` to the output, subject to flow control.
    pub fn send(&mut self, data: Bytes) {
        if let Some(chunk) = self.latch.submit(data) {
            self.emit(chunk);
        }
    }

    /// Abandon a partial sequence.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    fn feed(&mut self, byte: u8, errors: &mut Vec<DecodeError>) {
        if self.config.xon_xoff {
            match byte {
                consts::XOFF => {
                    debug!("XOFF received, holding output");
                    self.latch.pause();
                    return;
                }
                consts::XON => {
                    let held = self.latch.resume();
                    debug!("XON received, releasing {} held replies", held.len());
                    for chunk in held {
                        self.emit(chunk);
                    }
                    return;
                }
                _ => {}
            }
        }
        if self.buffer.is_empty() {
            if byte != consts::ESC {
                self.character(byte);
                return;
            }
            if let Some(replacement) = self.text.interrupt() {
                self.notify_character(replacement);
            }
        }
        self.buffer.push(byte);
        self.process_buffer(errors);
    }

    fn process_buffer(&mut self, errors: &mut Vec<DecodeError>) {
        let limit = self.config.sequence_limit();
        loop {
            match self.buffer.scan(&self.dispatcher) {
                Scan::Incomplete => {
                    if self.buffer.len() >= limit {
                        errors.push(DecodeError::SequenceTooLong {
                            length: self.buffer.len(),
                            max: limit,
                        });
                        self.buffer.clear();
                    }
                    break;
                }
                Scan::Sequence {
                    command,
                    parameter,
                    length,
                } => {
                    self.buffer.consume(length);
                    trace!("Sequence {:?} {:?}", char::from(command), parameter);
                    let decoded = if command == consts::ESC {
                        Err(DecodeError::invalid_command(command, &parameter))
                    } else {
                        self.dispatcher.dispatch(command, &parameter)
                    };
                    match decoded {
                        Ok(operation) => self.perform(&operation),
                        Err(error) => errors.push(error),
                    }
                    while let Some(byte) = self.buffer.take_plain() {
                        self.character(byte);
                    }
                    if self.buffer.is_empty() {
                        break;
                    }
                }
            }
        }
    }

    fn perform(&mut self, operation: &TerminalOperation) {
        match operation {
            TerminalOperation::ReportCursorPosition => {
                let position = match &self.cursor_source {
                    Some(source) => source.cursor_position(),
                    None => {
                        debug!("No cursor position source, reporting the home position");
                        Default::default()
                    }
                };
                let reply = format!("\x1b[{};{}R", position.row + 1, position.col + 1);
                self.send(Bytes::from(reply));
            }
            TerminalOperation::ReportDeviceStatus => self.send(Bytes::from_static(b"\x1b[0n")),
            TerminalOperation::SetGraphicRendition(renditions) => {
                self.attributes.apply_all(renditions);
            }
            _ => {}
        }
        for sink in &mut self.sinks {
            sink.on_operation(operation);
        }
    }

    fn character(&mut self, byte: u8) {
        for character in self.text.push(byte).into_iter().flatten() {
            self.notify_character(character);
        }
    }

    fn notify_character(&mut self, character: char) {
        for sink in &mut self.sinks {
            sink.on_character(character);
        }
    }

    fn emit(&mut self, chunk: Bytes) {
        match &mut self.output {
            Some(output) => output.write(chunk),
            None => debug!("No output registered, dropping {} reply bytes", chunk.len()),
        }
    }
}

fn into_result(errors: Vec<DecodeError>) -> Result<(), Vec<DecodeError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Feeding the decoder from a telnet session. Rejected sequences go to
/// [`TerminalSink::on_decode_error`].
impl<D: CommandDispatcher> ByteSink for AnsiDecoder<D> {
    fn byte_received(&mut self, byte: u8) {
        let mut errors = Vec::new();
        self.feed(byte, &mut errors);
        for error in &errors {
            if self.sinks.is_empty() {
                warn!("{}", error);
            }
            for sink in &mut self.sinks {
                sink.on_decode_error(error);
            }
        }
    }
}
