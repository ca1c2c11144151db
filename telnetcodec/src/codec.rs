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

use crate::{
    CommandParser, OptionRegistry, TelnetCommand, TelnetError, TelnetEvent, TelnetNegotiator,
    consts,
};
use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DecoderState {
    #[default]
    NormalData,
    InterpretAsCommand,
    Command,
}

/// Network virtual terminal framing as a `tokio_util` codec.
///
/// Decoding yields unescaped application bytes and protocol events. Negotiation responses
/// are not written by the decoder; they collect in the pending output queue and are
/// serialized by [`TelnetCodec::flush_pending`].
///
/// Encoding a [`TelnetCommand`] writes its raw wire form, while encoding data bytes
/// doubles every `0xFF`.
#[derive(Clone, Debug, Default)]
pub struct TelnetCodec {
    decoder_state: DecoderState,
    parser: CommandParser,
    negotiator: TelnetNegotiator,
}

impl TelnetCodec {
    /// Creates a new `TelnetCodec` over the default option registry.
    ///
    /// # Example
    /// ```
    /// use nvterm_telnetcodec::TelnetCodec;
    ///
    /// let codec = TelnetCodec::new();
    /// ```
    pub fn new() -> TelnetCodec {
        TelnetCodec::default()
    }

    /// Creates a codec negotiating against `registry`.
    pub fn with_registry(registry: OptionRegistry) -> TelnetCodec {
        TelnetCodec {
            decoder_state: DecoderState::NormalData,
            parser: CommandParser::new(),
            negotiator: TelnetNegotiator::new(registry),
        }
    }

    /// Option state of this session.
    pub fn registry(&self) -> &OptionRegistry {
        self.negotiator.registry()
    }

    /// Negotiation layer of this session.
    pub fn negotiator(&self) -> &TelnetNegotiator {
        &self.negotiator
    }

    /// True when the decoder is between commands.
    pub fn is_idle(&self) -> bool {
        self.decoder_state == DecoderState::NormalData
    }

    /// Queue a locally initiated command.
    pub fn request(&mut self, command: TelnetCommand) {
        self.negotiator.request(command);
    }

    /// Write every queued command into `dst`, returning how many were written.
    pub fn flush_pending(&mut self, dst: &mut BytesMut) -> usize {
        self.negotiator.flush_into(dst)
    }

    /// Append `data` to `dst` with every `0xFF` doubled.
    pub fn escape_data(data: &[u8], dst: &mut BytesMut) {
        dst.reserve(data.len());
        for chunk in data.split_inclusive(|byte| *byte == consts::IAC) {
            dst.extend_from_slice(chunk);
            if chunk.last() == Some(&consts::IAC) {
                dst.put_u8(consts::IAC);
            }
        }
    }
}

impl Decoder for TelnetCodec {
    type Item = TelnetEvent;
    type Error = TelnetError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match self.decoder_state {
                DecoderState::NormalData => {
                    if !src.has_remaining() {
                        return Ok(None);
                    }
                    match src.get_u8() {
                        consts::IAC => self.decoder_state = DecoderState::InterpretAsCommand,
                        byte => return Ok(Some(TelnetEvent::Data(byte))),
                    }
                }
                DecoderState::InterpretAsCommand => {
                    let Some(&next) = src.first() else {
                        return Ok(None);
                    };
                    if next == consts::IAC {
                        src.advance(1);
                        self.decoder_state = DecoderState::NormalData;
                        return Ok(Some(TelnetEvent::Data(consts::IAC)));
                    }
                    self.decoder_state = DecoderState::Command;
                }
                DecoderState::Command => match self.parser.parse_incoming(src) {
                    Ok(Some(unit)) => {
                        self.decoder_state = DecoderState::NormalData;
                        if let Some(event) = self.negotiator.process(unit) {
                            return Ok(Some(event));
                        }
                    }
                    Ok(None) => return Ok(None),
                    Err(error) => {
                        warn!("Telnet decode failed: {}", error);
                        self.decoder_state = DecoderState::NormalData;
                        return Err(error);
                    }
                },
            }
        }
    }
}

impl Encoder<TelnetCommand> for TelnetCodec {
    type Error = TelnetError;

    fn encode(&mut self, item: TelnetCommand, dst: &mut BytesMut) -> Result<(), Self::Error> {
        item.encode(dst);
        Ok(())
    }
}

impl Encoder<u8> for TelnetCodec {
    type Error = TelnetError;

    fn encode(&mut self, item: u8, dst: &mut BytesMut) -> Result<(), Self::Error> {
        TelnetCodec::escape_data(&[item], dst);
        Ok(())
    }
}

impl Encoder<&[u8]> for TelnetCodec {
    type Error = TelnetError;

    fn encode(&mut self, item: &[u8], dst: &mut BytesMut) -> Result<(), Self::Error> {
        TelnetCodec::escape_data(item, dst);
        Ok(())
    }
}
