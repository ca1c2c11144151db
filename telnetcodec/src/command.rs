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

use crate::{TelnetOption, consts};
use bytes::{BufMut, Bytes, BytesMut};

/// A single Telnet command: a negotiation verb, a subnegotiation block, or a signal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TelnetCommand {
    /// `IAC DO <opt>`
    Do(TelnetOption),
    /// `IAC DONT <opt>`
    Dont(TelnetOption),
    /// `IAC WILL <opt>`
    Will(TelnetOption),
    /// `IAC WONT <opt>`
    Wont(TelnetOption),
    /// `IAC SB <opt> <payload> IAC SE`
    Subnegotiate {
        /// Option being subnegotiated
        option: TelnetOption,
        /// Raw payload, usually starting with IS or SEND
        payload: Bytes,
    },
    /// `IAC NOP`
    NoOperation,
    /// `IAC DM`
    DataMark,
    /// `IAC BRK`
    Break,
    /// `IAC IP`
    InterruptProcess,
    /// `IAC AO`
    AbortOutput,
    /// `IAC AYT`
    AreYouThere,
    /// `IAC EC`
    EraseCharacter,
    /// `IAC EL`
    EraseLine,
    /// `IAC GA`
    GoAhead,
}

impl TelnetCommand {
    /// The command-type byte that follows IAC.
    pub fn code(&self) -> u8 {
        match self {
            TelnetCommand::Do(_) => consts::DO,
            TelnetCommand::Dont(_) => consts::DONT,
            TelnetCommand::Will(_) => consts::WILL,
            TelnetCommand::Wont(_) => consts::WONT,
            TelnetCommand::Subnegotiate { .. } => consts::SB,
            TelnetCommand::NoOperation => consts::NOP,
            TelnetCommand::DataMark => consts::DM,
            TelnetCommand::Break => consts::BRK,
            TelnetCommand::InterruptProcess => consts::IP,
            TelnetCommand::AbortOutput => consts::AO,
            TelnetCommand::AreYouThere => consts::AYT,
            TelnetCommand::EraseCharacter => consts::EC,
            TelnetCommand::EraseLine => consts::EL,
            TelnetCommand::GoAhead => consts::GA,
        }
    }

    /// Signal for a command-type byte that carries no operands.
    pub fn signal(code: u8) -> Option<TelnetCommand> {
        match code {
            consts::NOP => Some(TelnetCommand::NoOperation),
            consts::DM => Some(TelnetCommand::DataMark),
            consts::BRK => Some(TelnetCommand::Break),
            consts::IP => Some(TelnetCommand::InterruptProcess),
            consts::AO => Some(TelnetCommand::AbortOutput),
            consts::AYT => Some(TelnetCommand::AreYouThere),
            consts::EC => Some(TelnetCommand::EraseCharacter),
            consts::EL => Some(TelnetCommand::EraseLine),
            consts::GA => Some(TelnetCommand::GoAhead),
            _ => None,
        }
    }

    /// Option referenced by this command, if any.
    pub fn option(&self) -> Option<TelnetOption> {
        match self {
            TelnetCommand::Do(option)
            | TelnetCommand::Dont(option)
            | TelnetCommand::Will(option)
            | TelnetCommand::Wont(option)
            | TelnetCommand::Subnegotiate { option, .. } => Some(*option),
            _ => None,
        }
    }

    /// Number of bytes [`TelnetCommand::encode`] writes.
    pub fn encoded_len(&self) -> usize {
        match self {
            TelnetCommand::Do(_)
            | TelnetCommand::Dont(_)
            | TelnetCommand::Will(_)
            | TelnetCommand::Wont(_) => 3,
            TelnetCommand::Subnegotiate { payload, .. } => 5 + payload.len(),
            _ => 2,
        }
    }

    /// Append the wire form. Subnegotiation payloads are written verbatim.
    pub fn encode(&self, dst: &mut BytesMut) {
        dst.reserve(self.encoded_len());
        dst.put_u8(consts::IAC);
        dst.put_u8(self.code());
        match self {
            TelnetCommand::Do(option)
            | TelnetCommand::Dont(option)
            | TelnetCommand::Will(option)
            | TelnetCommand::Wont(option) => dst.put_u8(option.to_u8()),
            TelnetCommand::Subnegotiate { option, payload } => {
                dst.put_u8(option.to_u8());
                dst.extend_from_slice(payload);
                dst.put_u8(consts::IAC);
                dst.put_u8(consts::SE);
            }
            _ => {}
        }
    }

    /// Encode into a fresh buffer.
    pub fn to_bytes(&self) -> Bytes {
        let mut dst = BytesMut::with_capacity(self.encoded_len());
        self.encode(&mut dst);
        dst.freeze()
    }
}

impl std::fmt::Display for TelnetCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelnetCommand::Do(option) => write!(f, "DO {option}"),
            TelnetCommand::Dont(option) => write!(f, "DONT {option}"),
            TelnetCommand::Will(option) => write!(f, "WILL {option}"),
            TelnetCommand::Wont(option) => write!(f, "WONT {option}"),
            TelnetCommand::Subnegotiate { option, payload } => {
                write!(f, "SB {option} ({} bytes)", payload.len())
            }
            TelnetCommand::NoOperation => write!(f, "NOP"),
            TelnetCommand::DataMark => write!(f, "DM"),
            TelnetCommand::Break => write!(f, "BRK"),
            TelnetCommand::InterruptProcess => write!(f, "IP"),
            TelnetCommand::AbortOutput => write!(f, "AO"),
            TelnetCommand::AreYouThere => write!(f, "AYT"),
            TelnetCommand::EraseCharacter => write!(f, "EC"),
            TelnetCommand::EraseLine => write!(f, "EL"),
            TelnetCommand::GoAhead => write!(f, "GA"),
        }
    }
}

/// Which end produced a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandFlow {
    /// Received from the remote host
    Incoming,
    /// Generated locally, bound for the remote host
    Outgoing,
}

/// A command together with its direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandUnit {
    /// Direction
    pub flow: CommandFlow,
    /// Command
    pub command: TelnetCommand,
}

impl CommandUnit {
    /// Command received from the remote host.
    pub fn incoming(command: TelnetCommand) -> CommandUnit {
        CommandUnit {
            flow: CommandFlow::Incoming,
            command,
        }
    }

    /// Command bound for the remote host.
    pub fn outgoing(command: TelnetCommand) -> CommandUnit {
        CommandUnit {
            flow: CommandFlow::Outgoing,
            command,
        }
    }
}
