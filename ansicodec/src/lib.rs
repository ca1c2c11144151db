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

//! # nvterm ANSI escape sequence decoding
//!
//! Turns the application data of a telnet session into characters and abstract
//! [`TerminalOperation`]s for a screen model to apply.
//!
//! ```text
//! bytes ─► XON/XOFF filter ─► EscapeSequenceBuffer ─► CommandDispatcher ─► TerminalSink
//!                  │                  │
//!                  │                  └─► CharDecoder ─► TerminalSink
//!                  └─► FlowControlLatch ─► OutputSink (status replies)
//! ```
//!
//! [`AnsiDecoder`] implements [`ByteSink`], so it can be subscribed directly to a
//! [`NetworkVirtualTerminal`](nvterm_telnetcodec::NetworkVirtualTerminal).

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod buffer;
mod charset;
mod config;
pub mod consts;
mod decoder;
mod dispatcher;
mod flow;
mod operation;
mod rendition;
mod result;
mod sink;

pub use self::buffer::{BufferState, EscapeSequenceBuffer, Scan};
pub use self::charset::CharDecoder;
pub use self::config::{AnsiConfig, TextEncoding};
pub use self::decoder::AnsiDecoder;
pub use self::dispatcher::{AnsiDispatcher, CommandDispatcher, decode_int};
pub use self::flow::FlowControlLatch;
pub use self::operation::{
    AnsiMode, ClearDirection, CursorDirection, CursorPosition, TerminalOperation,
};
pub use self::rendition::{Blink, Color, GraphicAttributes, GraphicRendition, Underline};
pub use self::result::{DecodeError, DecodeResult};
pub use self::sink::{CursorPositionSource, OutputSink, TerminalEvent, TerminalSink};
pub use nvterm_telnetcodec::ByteSink;
