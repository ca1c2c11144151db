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

//! Abstract terminal operations produced by the dispatcher.

use crate::GraphicRendition;

/// A zero-based cursor position.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct CursorPosition {
    /// Column, starting at 0
    pub col: usize,
    /// Row, starting at 0
    pub row: usize,
}

impl CursorPosition {
    /// Position at `col`, `row`.
    pub const fn new(col: usize, row: usize) -> CursorPosition {
        CursorPosition { col, row }
    }
}

/// Relative cursor movement direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CursorDirection {
    /// `CUU`
    Up,
    /// `CUD`
    Down,
    /// `CUF`
    Forward,
    /// `CUB`
    Backward,
}

/// Extent of a screen or line erase.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ClearDirection {
    /// From the cursor to the end
    Forward,
    /// From the beginning to the cursor
    Backward,
    /// Everything
    Both,
}

impl ClearDirection {
    /// Map the `J`/`K` parameter value.
    pub const fn from_code(code: usize) -> Option<ClearDirection> {
        match code {
            0 => Some(ClearDirection::Forward),
            1 => Some(ClearDirection::Backward),
            2 => Some(ClearDirection::Both),
            _ => None,
        }
    }
}

/// Terminal modes switched by `h`, `l`, `=` and `>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AnsiMode {
    /// `h` with no parameter
    Ansi,
    /// `?2l`
    Vt52,
    /// `20h`
    NewLine,
    /// `20l`
    LineFeed,
    /// `?1h`
    CursorKeyToApplication,
    /// `?1l`
    CursorKeyToCursor,
    /// `?3h`
    Columns132,
    /// `?3l`
    Columns80,
    /// `?4h`
    SmoothScrolling,
    /// `?4l`
    JumpScrolling,
    /// `?5h`
    ReverseVideo,
    /// `?5l`
    NormalVideo,
    /// `?6h`
    OriginIsRelative,
    /// `?6l`
    OriginIsAbsolute,
    /// `?7h`
    LineWrap,
    /// `?7l`
    DisableLineWrap,
    /// `?8h`
    AutoRepeat,
    /// `?8l`
    DisableAutoRepeat,
    /// `?9h`
    Interlacing,
    /// `?9l`
    DisableInterlacing,
    /// `?25h`
    ShowCursor,
    /// `?25l`
    HideCursor,
    /// `ESC >`
    NumericKeypad,
    /// `ESC =`
    AlternateKeypad,
}

impl AnsiMode {
    /// Mode selected by `h` with `parameter`.
    pub fn set(parameter: &str) -> Option<AnsiMode> {
        Some(match parameter {
            "" => AnsiMode::Ansi,
            "20" => AnsiMode::NewLine,
            "?1" => AnsiMode::CursorKeyToApplication,
            "?3" => AnsiMode::Columns132,
            "?4" => AnsiMode::SmoothScrolling,
            "?5" => AnsiMode::ReverseVideo,
            "?6" => AnsiMode::OriginIsRelative,
            "?7" => AnsiMode::LineWrap,
            "?8" => AnsiMode::AutoRepeat,
            "?9" => AnsiMode::Interlacing,
            "?25" => AnsiMode::ShowCursor,
            _ => return None,
        })
    }

    /// Mode selected by `l` with `parameter`.
    pub fn reset(parameter: &str) -> Option<AnsiMode> {
        Some(match parameter {
            "20" => AnsiMode::LineFeed,
            "?1" => AnsiMode::CursorKeyToCursor,
            "?2" => AnsiMode::Vt52,
            "?3" => AnsiMode::Columns80,
            "?4" => AnsiMode::JumpScrolling,
            "?5" => AnsiMode::NormalVideo,
            "?6" => AnsiMode::OriginIsAbsolute,
            "?7" => AnsiMode::DisableLineWrap,
            "?8" => AnsiMode::DisableAutoRepeat,
            "?9" => AnsiMode::DisableInterlacing,
            "?25" => AnsiMode::HideCursor,
            _ => return None,
        })
    }
}

/// One decoded terminal command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TerminalOperation {
    /// Move the cursor `amount` cells in `direction`.
    MoveCursor {
        /// Direction of travel
        direction: CursorDirection,
        /// Number of cells
        amount: usize,
    },
    /// Move to the first column, `lines` rows down.
    MoveCursorToBeginningOfLineBelow(usize),
    /// Move to the first column, `lines` rows up.
    MoveCursorToBeginningOfLineAbove(usize),
    /// Move to a zero-based column on the current row.
    MoveCursorToColumn(usize),
    /// Move to a zero-based position.
    MoveCursorTo(CursorPosition),
    /// Erase part of the screen.
    ClearScreen(ClearDirection),
    /// Erase part of the current line.
    ClearLine(ClearDirection),
    /// Scroll the page up by `lines`.
    ScrollPageUpwards(usize),
    /// Scroll the page down by `lines`.
    ScrollPageDownwards(usize),
    /// Apply renditions in order.
    SetGraphicRendition(Vec<GraphicRendition>),
    /// Switch a terminal mode.
    ModeChanged(AnsiMode),
    /// Remember the cursor position.
    SaveCursor,
    /// Return to the remembered cursor position.
    RestoreCursor,
    /// The host asked where the cursor is (`6n`).
    ReportCursorPosition,
    /// The host asked for the terminal status (`5n`).
    ReportDeviceStatus,
}
