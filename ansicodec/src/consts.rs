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

/// Escape
pub const ESC: u8 = 0x1B;

/// Second byte of a Control Sequence Introducer (`ESC [`).
pub const CSI: u8 = b'[';

/// Resume transmission (DC1)
pub const XON: u8 = 0x11;

/// Pause transmission (DC3)
pub const XOFF: u8 = 0x13;

/// Opens and closes a quoted span inside a parameter list.
pub const QUOTE: u8 = b'"';

/// Maximum length of a buffered escape sequence in bytes.
///
/// A sequence that reaches this length without a final byte is abandoned and the
/// buffer is cleared.
pub const MAX_SEQUENCE_LENGTH: usize = 256;

/// Shortest limit accepted for [`MAX_SEQUENCE_LENGTH`] overrides: `ESC [` plus a final byte.
pub const MIN_SEQUENCE_LENGTH: usize = 3;

/// Replies held while output is paused by XOFF. Further replies are dropped.
pub const MAX_HELD_REPLIES: usize = 64;
