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

//! Turning a complete escape sequence into a terminal operation.

use crate::{
    AnsiMode, ClearDirection, CursorDirection, CursorPosition, DecodeError, DecodeResult,
    GraphicRendition, TerminalOperation, consts,
};

/// Interprets completed escape sequences for one terminal dialect.
pub trait CommandDispatcher {
    /// Decode `command` with its raw `parameter` text.
    fn dispatch(&self, command: u8, parameter: &str) -> DecodeResult<TerminalOperation>;

    /// Bytes that may appear between the introducer and the final byte.
    fn is_valid_parameter_character(&self, byte: u8) -> bool {
        byte.is_ascii_digit() || matches!(byte, b';' | b'?' | consts::QUOTE)
    }
}

/// Parse a numeric parameter, falling back to `default` when it is empty, zero or not a
/// number.
pub fn decode_int(value: &str, default: usize) -> usize {
    let trimmed = value.trim_start_matches('0');
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse().unwrap_or(default)
}

/// ANSI X3.64 / VT100 command set.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiDispatcher;

impl AnsiDispatcher {
    /// Create the dispatcher.
    pub fn new() -> AnsiDispatcher {
        AnsiDispatcher
    }

    /// `row;col`, both one-based. A lone value is the row with column 1; it does not home
    /// the cursor.
    fn cursor_position(parameter: &str) -> TerminalOperation {
        let (row, col) = parameter.split_once(';').unwrap_or((parameter, ""));
        TerminalOperation::MoveCursorTo(CursorPosition::new(
            decode_int(col, 1) - 1,
            decode_int(row, 1) - 1,
        ))
    }

    fn clear(command: u8, parameter: &str) -> DecodeResult<ClearDirection> {
        ClearDirection::from_code(decode_int(parameter, 0))
            .ok_or_else(|| DecodeError::invalid_parameter(command, parameter))
    }

    fn renditions(parameter: &str) -> DecodeResult<Vec<GraphicRendition>> {
        parameter
            .split(';')
            .map(|code| {
                GraphicRendition::from_code(decode_int(code, 0))
                    .ok_or_else(|| DecodeError::invalid_parameter(b'm', parameter))
            })
            .collect()
    }
}

impl CommandDispatcher for AnsiDispatcher {
    fn dispatch(&self, command: u8, parameter: &str) -> DecodeResult<TerminalOperation> {
        let movement = |direction| TerminalOperation::MoveCursor {
            direction,
            amount: decode_int(parameter, 1),
        };
        let invalid_parameter = || DecodeError::invalid_parameter(command, parameter);

        Ok(match command {
            b'A' => movement(CursorDirection::Up),
            b'B' => movement(CursorDirection::Down),
            b'C' => movement(CursorDirection::Forward),
            b'D' => movement(CursorDirection::Backward),
            b'E' => TerminalOperation::MoveCursorToBeginningOfLineBelow(decode_int(parameter, 1)),
            b'F' => TerminalOperation::MoveCursorToBeginningOfLineAbove(decode_int(parameter, 1)),
            b'G' => TerminalOperation::MoveCursorToColumn(decode_int(parameter, 1) - 1),
            b'H' | b'f' => AnsiDispatcher::cursor_position(parameter),
            b'J' => TerminalOperation::ClearScreen(AnsiDispatcher::clear(command, parameter)?),
            b'K' => TerminalOperation::ClearLine(AnsiDispatcher::clear(command, parameter)?),
            b'S' => TerminalOperation::ScrollPageUpwards(decode_int(parameter, 1)),
            b'T' => TerminalOperation::ScrollPageDownwards(decode_int(parameter, 1)),
            b'm' => TerminalOperation::SetGraphicRendition(AnsiDispatcher::renditions(parameter)?),
            b'n' => match parameter {
                "5" => TerminalOperation::ReportDeviceStatus,
                "6" => TerminalOperation::ReportCursorPosition,
                _ => return Err(invalid_parameter()),
            },
            b's' => TerminalOperation::SaveCursor,
            b'u' => TerminalOperation::RestoreCursor,
            b'h' => TerminalOperation::ModeChanged(AnsiMode::set(parameter).ok_or_else(invalid_parameter)?),
            b'l' => {
                TerminalOperation::ModeChanged(AnsiMode::reset(parameter).ok_or_else(invalid_parameter)?)
            }
            b'>' => TerminalOperation::ModeChanged(AnsiMode::NumericKeypad),
            b'=' => TerminalOperation::ModeChanged(AnsiMode::AlternateKeypad),
            _ => return Err(DecodeError::invalid_command(command, parameter)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn dispatch(command: u8, parameter: &str) -> DecodeResult<TerminalOperation> {
        AnsiDispatcher::new().dispatch(command, parameter)
    }

    // ===== Integer Parameters =====

    #[test]
    fn decode_int_defaults() {
        assert_eq!(decode_int("", 1), 1);
        assert_eq!(decode_int("0", 1), 1);
        assert_eq!(decode_int("007", 1), 7);
        assert_eq!(decode_int("?5", 3), 3);
        assert_eq!(decode_int("99999999999999999999999", 1), 1);
    }

    // ===== Cursor =====

    #[test]
    fn relative_movement_defaults_to_one() {
        assert_eq!(
            dispatch(b'A', "").unwrap(),
            TerminalOperation::MoveCursor {
                direction: CursorDirection::Up,
                amount: 1
            }
        );
        assert_eq!(
            dispatch(b'D', "12").unwrap(),
            TerminalOperation::MoveCursor {
                direction: CursorDirection::Backward,
                amount: 12
            }
        );
        assert_eq!(
            dispatch(b'E', "").unwrap(),
            TerminalOperation::MoveCursorToBeginningOfLineBelow(1)
        );
        assert_eq!(dispatch(b'G', "10").unwrap(), TerminalOperation::MoveCursorToColumn(9));
    }

    #[test]
    fn absolute_position_is_zero_based() {
        let cases = [
            ("", CursorPosition::new(0, 0)),
            (";", CursorPosition::new(0, 0)),
            ("31;5", CursorPosition::new(4, 30)),
            ("5", CursorPosition::new(0, 4)),
            (";7", CursorPosition::new(6, 0)),
            ("0;0", CursorPosition::new(0, 0)),
        ];
        for (parameter, position) in cases {
            assert_eq!(
                dispatch(b'H', parameter).unwrap(),
                TerminalOperation::MoveCursorTo(position),
                "parameter {parameter:?}"
            );
        }
        assert_eq!(
            dispatch(b'f', "2;3").unwrap(),
            TerminalOperation::MoveCursorTo(CursorPosition::new(2, 1))
        );
    }

    // ===== Erase and Scroll =====

    #[test]
    fn clear_directions() {
        assert_eq!(
            dispatch(b'J', "").unwrap(),
            TerminalOperation::ClearScreen(ClearDirection::Forward)
        );
        assert_eq!(
            dispatch(b'J', "2").unwrap(),
            TerminalOperation::ClearScreen(ClearDirection::Both)
        );
        assert_eq!(
            dispatch(b'K', "1").unwrap(),
            TerminalOperation::ClearLine(ClearDirection::Backward)
        );
        assert_eq!(
            dispatch(b'J', "3").unwrap_err(),
            DecodeError::invalid_parameter(b'J', "3")
        );
    }

    #[test]
    fn scrolling() {
        assert_eq!(dispatch(b'S', "").unwrap(), TerminalOperation::ScrollPageUpwards(1));
        assert_eq!(dispatch(b'T', "4").unwrap(), TerminalOperation::ScrollPageDownwards(4));
    }

    // ===== Rendition =====

    #[test]
    fn rendition_lists_keep_order() {
        assert_eq!(
            dispatch(b'm', "1;31;;44").unwrap(),
            TerminalOperation::SetGraphicRendition(vec![
                GraphicRendition::Bold,
                GraphicRendition::Foreground(Color::Red),
                GraphicRendition::Reset,
                GraphicRendition::Background(Color::Blue),
            ])
        );
        assert_eq!(
            dispatch(b'm', "").unwrap(),
            TerminalOperation::SetGraphicRendition(vec![GraphicRendition::Reset])
        );
    }

    #[test]
    fn unknown_rendition_code_is_rejected() {
        assert_eq!(
            dispatch(b'm', "1;38;5;200").unwrap_err(),
            DecodeError::invalid_parameter(b'm', "1;38;5;200")
        );
    }

    // ===== Modes and Queries =====

    #[test]
    fn mode_tables() {
        assert_eq!(
            dispatch(b'h', "?25").unwrap(),
            TerminalOperation::ModeChanged(AnsiMode::ShowCursor)
        );
        assert_eq!(
            dispatch(b'l', "?25").unwrap(),
            TerminalOperation::ModeChanged(AnsiMode::HideCursor)
        );
        assert_eq!(dispatch(b'h', "").unwrap(), TerminalOperation::ModeChanged(AnsiMode::Ansi));
        assert_eq!(dispatch(b'l', "?2").unwrap(), TerminalOperation::ModeChanged(AnsiMode::Vt52));
        assert_eq!(
            dispatch(b'h', "?2").unwrap_err(),
            DecodeError::invalid_parameter(b'h', "?2")
        );
        assert_eq!(
            dispatch(b'l', "").unwrap_err(),
            DecodeError::invalid_parameter(b'l', "")
        );
        assert_eq!(
            dispatch(b'=', "").unwrap(),
            TerminalOperation::ModeChanged(AnsiMode::AlternateKeypad)
        );
    }

    #[test]
    fn status_queries() {
        assert_eq!(dispatch(b'n', "6").unwrap(), TerminalOperation::ReportCursorPosition);
        assert_eq!(dispatch(b'n', "5").unwrap(), TerminalOperation::ReportDeviceStatus);
        assert_eq!(
            dispatch(b'n', "").unwrap_err(),
            DecodeError::invalid_parameter(b'n', "")
        );
    }

    #[test]
    fn unknown_command_is_reported_verbatim() {
        assert_eq!(
            dispatch(b'z', "99").unwrap_err(),
            DecodeError::InvalidCommand {
                command: b'z',
                parameter: "99".to_string()
            }
        );
    }

    #[test]
    fn parameter_characters() {
        let dispatcher = AnsiDispatcher::new();
        for byte in b"0123456789;?\"" {
            assert!(dispatcher.is_valid_parameter_character(*byte));
        }
        for byte in b"mHJ[ \x1B" {
            assert!(!dispatcher.is_valid_parameter_character(*byte));
        }
    }
}
