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

//! Resumable parser for the bytes of one command unit following IAC.

use crate::{CommandUnit, ProtocolError, TelnetCommand, TelnetOption, TelnetResult, consts};
use bytes::{Buf, Bytes, BytesMut};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ParserState {
    /// Expecting the command-type byte
    #[default]
    CommandType,
    /// Expecting the option byte of a DO/DONT/WILL/WONT
    OptionCode(u8),
    /// Expecting the option byte of an SB
    SubnegotiationOption,
    /// Collecting payload bytes
    Subnegotiation(TelnetOption),
    /// Saw IAC inside a payload
    SubnegotiationIac(TelnetOption),
}

/// Parses one Telnet command unit from the bytes that follow an IAC.
///
/// The parser may be fed across any number of buffers: when a buffer runs out mid-command
/// it returns `Ok(None)` and keeps its position, so a later call with more bytes completes
/// the same unit.
#[derive(Clone, Debug, Default)]
pub struct CommandParser {
    state: ParserState,
    payload: BytesMut,
}

impl CommandParser {
    /// Parser waiting for a command-type byte.
    pub fn new() -> CommandParser {
        CommandParser::default()
    }

    /// True when no command is partially parsed.
    pub fn is_idle(&self) -> bool {
        self.state == ParserState::CommandType
    }

    /// Discard any partial command.
    pub fn reset(&mut self) {
        self.state = ParserState::CommandType;
        self.payload.clear();
    }

    /// Consume the bytes belonging to one command from `src`.
    ///
    /// Only the bytes of the command are consumed; anything after it stays in `src`.
    pub fn parse_incoming(&mut self, src: &mut BytesMut) -> TelnetResult<Option<CommandUnit>> {
        while src.has_remaining() {
            let byte = src.get_u8();
            let step = self.step(byte);
            match step {
                Ok(Some(command)) => {
                    self.reset();
                    return Ok(Some(CommandUnit::incoming(command)));
                }
                Ok(None) => {}
                Err(error) => {
                    self.reset();
                    return Err(error.into());
                }
            }
        }
        Ok(None)
    }

    fn step(&mut self, byte: u8) -> Result<Option<TelnetCommand>, ProtocolError> {
        match (self.state, byte) {
            (ParserState::CommandType, consts::DO | consts::DONT | consts::WILL | consts::WONT) => {
                self.state = ParserState::OptionCode(byte);
                Ok(None)
            }
            (ParserState::CommandType, consts::SB) => {
                self.state = ParserState::SubnegotiationOption;
                Ok(None)
            }
            (ParserState::CommandType, code) => match TelnetCommand::signal(code) {
                Some(signal) => Ok(Some(signal)),
                None => Err(ProtocolError::UnknownCommand(code)),
            },
            (ParserState::OptionCode(verb), code) => {
                let option = TelnetOption::from_u8(code);
                Ok(Some(match verb {
                    consts::DO => TelnetCommand::Do(option),
                    consts::DONT => TelnetCommand::Dont(option),
                    consts::WILL => TelnetCommand::Will(option),
                    _ => TelnetCommand::Wont(option),
                }))
            }
            (ParserState::SubnegotiationOption, code) => {
                self.state = ParserState::Subnegotiation(TelnetOption::from_u8(code));
                Ok(None)
            }
            (ParserState::Subnegotiation(option), consts::IAC) => {
                self.state = ParserState::SubnegotiationIac(option);
                Ok(None)
            }
            (ParserState::Subnegotiation(option), data) => self.push_payload(option, data),
            (ParserState::SubnegotiationIac(option), consts::IAC) => {
                self.state = ParserState::Subnegotiation(option);
                self.push_payload(option, consts::IAC)
            }
            (ParserState::SubnegotiationIac(option), consts::SE) => {
                let payload: Bytes = self.payload.split().freeze();
                Ok(Some(TelnetCommand::Subnegotiate { option, payload }))
            }
            (ParserState::SubnegotiationIac(option), other) => {
                Err(ProtocolError::MalformedSubnegotiation {
                    option,
                    byte: other,
                })
            }
        }
    }

    fn push_payload(
        &mut self,
        option: TelnetOption,
        byte: u8,
    ) -> Result<Option<TelnetCommand>, ProtocolError> {
        if self.payload.len() >= consts::MAX_SUBNEGOTIATION_LENGTH {
            return Err(ProtocolError::SubnegotiationTooLong {
                option,
                max: consts::MAX_SUBNEGOTIATION_LENGTH,
            });
        }
        self.payload.extend_from_slice(&[byte]);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandFlow, TelnetError};

    fn parse(bytes: &[u8]) -> (TelnetResult<Option<CommandUnit>>, BytesMut) {
        let mut parser = CommandParser::new();
        let mut src = BytesMut::from(bytes);
        let result = parser.parse_incoming(&mut src);
        (result, src)
    }

    // ===== Negotiation Verbs =====

    #[test]
    fn verb_consumes_exactly_one_option_byte() {
        let (result, rest) = parse(&[consts::DO, 0x01, b'x', b'y']);
        let unit = result.unwrap().unwrap();
        assert_eq!(unit.flow, CommandFlow::Incoming);
        assert_eq!(unit.command, TelnetCommand::Do(TelnetOption::Echo));
        assert_eq!(rest.as_ref(), b"xy");
    }

    #[test]
    fn every_verb_maps_to_its_command() {
        let cases = [
            (consts::DO, TelnetCommand::Do(TelnetOption::Echo)),
            (consts::DONT, TelnetCommand::Dont(TelnetOption::Echo)),
            (consts::WILL, TelnetCommand::Will(TelnetOption::Echo)),
            (consts::WONT, TelnetCommand::Wont(TelnetOption::Echo)),
        ];
        for (verb, expected) in cases {
            let (result, _) = parse(&[verb, consts::option::ECHO]);
            assert_eq!(result.unwrap().unwrap().command, expected);
        }
    }

    #[test]
    fn verb_split_across_buffers() {
        let mut parser = CommandParser::new();
        let mut first = BytesMut::from(&[consts::WILL][..]);
        assert_eq!(parser.parse_incoming(&mut first).unwrap(), None);
        assert!(!parser.is_idle());

        let mut second = BytesMut::from(&[consts::option::SGA][..]);
        let unit = parser.parse_incoming(&mut second).unwrap().unwrap();
        assert_eq!(unit.command, TelnetCommand::Will(TelnetOption::SuppressGoAhead));
        assert!(parser.is_idle());
    }

    // ===== Subnegotiation =====

    #[test]
    fn subnegotiation_payload_runs_to_iac_se() {
        let (result, rest) = parse(&[
            consts::SB,
            consts::option::TTYPE,
            consts::SEND,
            consts::IAC,
            consts::SE,
            b'!',
        ]);
        assert_eq!(
            result.unwrap().unwrap().command,
            TelnetCommand::Subnegotiate {
                option: TelnetOption::TerminalType,
                payload: Bytes::from_static(&[consts::SEND]),
            }
        );
        assert_eq!(rest.as_ref(), b"!");
    }

    #[test]
    fn doubled_iac_inside_payload_is_literal() {
        let (result, _) = parse(&[
            consts::SB,
            consts::option::NAWS,
            0x00,
            0xFF,
            0xFF,
            0x00,
            0x18,
            consts::IAC,
            consts::SE,
        ]);
        match result.unwrap().unwrap().command {
            TelnetCommand::Subnegotiate { payload, .. } => {
                assert_eq!(payload.as_ref(), &[0x00, 0xFF, 0x00, 0x18]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn payload_split_byte_by_byte() {
        let wire = [
            consts::SB,
            consts::option::TTYPE,
            consts::IS,
            b'V',
            b'T',
            consts::IAC,
            consts::SE,
        ];
        let mut parser = CommandParser::new();
        let mut found = None;
        for (index, byte) in wire.iter().enumerate() {
            let mut src = BytesMut::from(&[*byte][..]);
            let result = parser.parse_incoming(&mut src).unwrap();
            if index + 1 < wire.len() {
                assert_eq!(result, None);
            } else {
                found = result;
            }
        }
        assert_eq!(
            found.unwrap().command,
            TelnetCommand::Subnegotiate {
                option: TelnetOption::TerminalType,
                payload: Bytes::from_static(b"\x00VT"),
            }
        );
    }

    #[test]
    fn stray_iac_in_payload_is_fatal() {
        let (result, _) = parse(&[consts::SB, consts::option::TTYPE, consts::IAC, 0x07]);
        assert_eq!(
            result.unwrap_err(),
            TelnetError::Protocol(ProtocolError::MalformedSubnegotiation {
                option: TelnetOption::TerminalType,
                byte: 0x07,
            })
        );
    }

    #[test]
    fn oversized_payload_is_fatal() {
        let mut wire = vec![consts::SB, consts::option::TTYPE];
        wire.extend(std::iter::repeat_n(b'a', consts::MAX_SUBNEGOTIATION_LENGTH + 1));
        let (result, _) = parse(&wire);
        assert!(matches!(
            result,
            Err(TelnetError::Protocol(ProtocolError::SubnegotiationTooLong { .. }))
        ));
    }

    // ===== Signals and Errors =====

    #[test]
    fn signals_complete_immediately() {
        let (result, rest) = parse(&[consts::AYT, b'z']);
        assert_eq!(result.unwrap().unwrap().command, TelnetCommand::AreYouThere);
        assert_eq!(rest.as_ref(), b"z");
    }

    #[test]
    fn unknown_command_type_is_fatal() {
        for code in [0x42, consts::SE, consts::IS, consts::SEND] {
            let mut parser = CommandParser::new();
            let mut src = BytesMut::from(&[code][..]);
            assert_eq!(
                parser.parse_incoming(&mut src).unwrap_err(),
                TelnetError::Protocol(ProtocolError::UnknownCommand(code))
            );
            assert!(parser.is_idle());
        }
    }
}
