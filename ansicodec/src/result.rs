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

//! Error types for the ansicodec crate.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`DecodeError`].
pub type DecodeResult<T> = Result<T, DecodeError>;

/// A complete escape sequence could not be turned into a terminal operation.
///
/// Decode errors never desynchronize the stream: the offending sequence is dropped
/// and decoding continues with the next byte.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    /// The final byte names no supported command.
    #[error("Invalid command {:02X} '{}', parameter = \"{parameter}\"", .command, char::from(*.command))]
    InvalidCommand {
        /// Final byte of the sequence
        command: u8,
        /// Raw parameter text
        parameter: String,
    },

    /// The command exists but rejects this parameter text.
    #[error("Invalid parameter for command {:02X} '{}', parameter = \"{parameter}\"", .command, char::from(*.command))]
    InvalidParameter {
        /// Final byte of the sequence
        command: u8,
        /// Raw parameter text
        parameter: String,
    },

    /// No final byte arrived within the configured length.
    #[error("Escape sequence of {length} bytes exceeds the {max} byte limit")]
    SequenceTooLong {
        /// Bytes buffered when the sequence was abandoned
        length: usize,
        /// Configured limit
        max: usize,
    },
}

impl DecodeError {
    /// Unsupported final byte.
    pub fn invalid_command(command: u8, parameter: &str) -> DecodeError {
        DecodeError::InvalidCommand {
            command,
            parameter: parameter.to_string(),
        }
    }

    /// Unsupported parameter for a known command.
    pub fn invalid_parameter(command: u8, parameter: &str) -> DecodeError {
        DecodeError::InvalidParameter {
            command,
            parameter: parameter.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DecodeError;

    #[test]
    fn messages_show_command_and_parameter() {
        assert_eq!(
            DecodeError::invalid_command(b'z', "99").to_string(),
            "Invalid command 7A 'z', parameter = \"99\""
        );
        assert_eq!(
            DecodeError::invalid_parameter(b'h', "?1049").to_string(),
            "Invalid parameter for command 68 'h', parameter = \"?1049\""
        );
    }
}
