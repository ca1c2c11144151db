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

use crate::TelnetOption;
use std::time::Duration;
use thiserror::Error;

/// Result Type for Telnet Operations
pub type TelnetResult<T> = Result<T, TelnetError>;

/// Framing errors that leave the byte stream in an unknown position.
///
/// None of these can be recovered locally: the decode path of the session must stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A byte following IAC is not a Telnet command.
    #[error("Unknown telnet command {0:#04X}")]
    UnknownCommand(u8),

    /// IAC inside a subnegotiation was followed by something other than IAC or SE.
    #[error("Malformed subnegotiation for {option}: IAC followed by {byte:#04X}")]
    MalformedSubnegotiation {
        /// Option being subnegotiated
        option: TelnetOption,
        /// Byte that followed the embedded IAC
        byte: u8,
    },

    /// A subnegotiation payload grew past the permitted size without IAC SE.
    #[error("Subnegotiation for {option} exceeds {max} bytes")]
    SubnegotiationTooLong {
        /// Option being subnegotiated
        option: TelnetOption,
        /// Maximum accepted payload length
        max: usize,
    },
}

/// Failures of the underlying byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Read or write failed.
    #[error("I/O error during {operation}: {kind}")]
    Io {
        /// Kind of the underlying I/O error
        kind: std::io::ErrorKind,
        /// Operation that failed
        operation: &'static str,
    },

    /// The read deadline expired before any byte arrived.
    #[error("Read timed out after {0:?}")]
    Timeout(Duration),

    /// The session already stopped after a protocol error.
    #[error("Decode path closed after a protocol error")]
    Closed,
}

impl TransportError {
    /// Wrap an I/O error raised by `operation`.
    pub fn io(operation: &'static str, error: &std::io::Error) -> TransportError {
        TransportError::Io {
            kind: error.kind(),
            operation,
        }
    }
}

/// Errors surfaced by the Telnet layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelnetError {
    /// Protocol framing error
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Transport error
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl TelnetError {
    /// True when the error is a read deadline expiry.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TelnetError::Transport(TransportError::Timeout(_)))
    }
}

/// Required by the `tokio_util` codec traits, which funnel transport failures through the
/// codec's error type.
impl From<std::io::Error> for TelnetError {
    fn from(error: std::io::Error) -> Self {
        TelnetError::Transport(TransportError::io("codec", &error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_bytes() {
        assert_eq!(
            ProtocolError::UnknownCommand(0x42).to_string(),
            "Unknown telnet command 0x42"
        );
        let err = TelnetError::from(ProtocolError::MalformedSubnegotiation {
            option: TelnetOption::TerminalType,
            byte: 0x07,
        });
        assert_eq!(
            err.to_string(),
            "Protocol error: Malformed subnegotiation for TERMINAL-TYPE(0x18): IAC followed by 0x07"
        );
    }

    #[test]
    fn timeout_is_distinct_from_io() {
        let timeout = TelnetError::from(TransportError::Timeout(Duration::from_secs(1)));
        assert!(timeout.is_timeout());
        let eof = TelnetError::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(!eof.is_timeout());
    }
}
