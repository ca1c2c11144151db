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

//! # nvterm Telnet Network Virtual Terminal
//!
//! This crate implements the Telnet (RFC 854) side of a terminal session: IAC escaping,
//! command parsing, option negotiation against a per-session [`OptionRegistry`], and an
//! asynchronous byte pump, [`NetworkVirtualTerminal`], that hands the application one data
//! byte at a time.
//!
//! ## Layers
//!
//! - [`CommandParser`] reassembles one command unit from bytes that may arrive in any
//!   number of pieces.
//! - [`TelnetNegotiator`] applies command units to the option registry and queues the
//!   responses in order.
//! - [`TelnetCodec`] combines both behind the `tokio_util` [`Decoder`](tokio_util::codec::Decoder)
//!   and [`Encoder`](tokio_util::codec::Encoder) traits.
//! - [`NetworkVirtualTerminal`] drives the codec over any tokio transport, flushing queued
//!   responses only once received input is exhausted, and notifies every registered
//!   [`ByteSink`] of each application byte.
//!
//! ## Negotiation
//!
//! | Received   | Option desired      | Option not desired |
//! |------------|---------------------|--------------------|
//! | `DO x`     | enable, send `WILL` | send `WONT`        |
//! | `WILL x`   | enable, send `DO`   | send `DONT`        |
//! | `DONT x`   | send `WONT`         | send `WONT`        |
//! | `WONT x`   | send `DONT`         | send `DONT`        |

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

mod codec;
mod command;
mod config;
pub mod consts;
mod event;
mod negotiation;
mod nvt;
mod options;
mod parser;
mod registry;
mod result;
mod sink;

pub use self::codec::TelnetCodec;
pub use self::command::{CommandFlow, CommandUnit, TelnetCommand};
pub use self::config::NvtConfig;
pub use self::event::TelnetEvent;
pub use self::negotiation::TelnetNegotiator;
pub use self::nvt::NetworkVirtualTerminal;
pub use self::options::TelnetOption;
pub use self::parser::CommandParser;
pub use self::registry::{OptionEntry, OptionRegistry, SubnegotiationContract};
pub use self::result::{ProtocolError, TelnetError, TelnetResult, TransportError};
pub use self::sink::ByteSink;
