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

//! Option negotiation and the pending output queue.

use crate::{
    CommandFlow, CommandUnit, OptionRegistry, SubnegotiationContract, TelnetCommand, TelnetEvent,
    TelnetOption, consts,
};
use bytes::{BufMut, Bytes, BytesMut};
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

/// Applies command units to a session's option registry.
///
/// Every incoming negotiation command is answered exactly once. Responses, and any command
/// the application initiates, wait in the pending output queue until the owner flushes it.
#[derive(Clone, Debug)]
pub struct TelnetNegotiator {
    registry: OptionRegistry,
    pending: VecDeque<TelnetCommand>,
}

impl TelnetNegotiator {
    /// Negotiator over the given registry.
    pub fn new(registry: OptionRegistry) -> TelnetNegotiator {
        TelnetNegotiator {
            registry,
            pending: VecDeque::new(),
        }
    }

    /// Current option state.
    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Commands waiting to be written, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &TelnetCommand> {
        self.pending.iter()
    }

    /// True when nothing waits to be written.
    pub fn is_drained(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queue a locally initiated command.
    pub fn request(&mut self, command: TelnetCommand) {
        self.process(CommandUnit::outgoing(command));
    }

    /// Apply a command unit.
    ///
    /// Incoming commands update option state and queue their response. Outgoing commands
    /// update option state and are queued. Returns the state change the unit caused, if any.
    pub fn process(&mut self, unit: CommandUnit) -> Option<TelnetEvent> {
        match unit.flow {
            CommandFlow::Incoming => self.process_incoming(unit.command),
            CommandFlow::Outgoing => {
                self.apply_outgoing(&unit.command);
                trace!("Queueing {}", unit.command);
                self.pending.push_back(unit.command);
                None
            }
        }
    }

    /// Serialize every pending command into `dst` in queue order and clear the queue.
    ///
    /// Returns the number of commands written.
    pub fn flush_into(&mut self, dst: &mut BytesMut) -> usize {
        let count = self.pending.len();
        for command in self.pending.drain(..) {
            command.encode(dst);
        }
        count
    }

    fn process_incoming(&mut self, command: TelnetCommand) -> Option<TelnetEvent> {
        trace!("Received {}", command);
        match command {
            TelnetCommand::Do(option) => {
                if self.registry.is_desired(option) {
                    let newly = self.enable(option);
                    self.respond(TelnetCommand::Will(option));
                    self.announce(option);
                    newly.then_some(TelnetEvent::OptionEnabled(option))
                } else {
                    debug!("Refusing DO {}", option);
                    self.respond(TelnetCommand::Wont(option));
                    None
                }
            }
            TelnetCommand::Will(option) => {
                if self.registry.is_desired(option) {
                    let newly = self.enable(option);
                    self.respond(TelnetCommand::Do(option));
                    newly.then_some(TelnetEvent::OptionEnabled(option))
                } else {
                    debug!("Refusing WILL {}", option);
                    self.respond(TelnetCommand::Dont(option));
                    None
                }
            }
            TelnetCommand::Dont(option) => {
                self.respond(TelnetCommand::Wont(option));
                None
            }
            TelnetCommand::Wont(option) => {
                self.respond(TelnetCommand::Dont(option));
                None
            }
            TelnetCommand::Subnegotiate { option, payload } => {
                self.process_subnegotiation(option, &payload)
            }
            signal => {
                debug!("Signal {}", signal);
                Some(TelnetEvent::Signal(signal))
            }
        }
    }

    fn process_subnegotiation(&mut self, option: TelnetOption, payload: &[u8]) -> Option<TelnetEvent> {
        let Some(entry) = self.registry.get(option) else {
            warn!("Ignoring subnegotiation for unsupported option {}", option);
            return None;
        };
        if !entry.is_enabled() {
            warn!("Ignoring subnegotiation for {} before it is enabled", option);
            return None;
        }
        let was_active = entry.is_active();
        let reply = match (entry.contract(), payload.first()) {
            (SubnegotiationContract::ReplyOnSend, None | Some(&consts::SEND)) => {
                let value = entry.proposed_value().cloned().unwrap_or_default();
                let mut reply = BytesMut::with_capacity(value.len() + 1);
                reply.put_u8(consts::IS);
                reply.extend_from_slice(&value);
                Some(reply.freeze())
            }
            _ => None,
        };

        self.registry.set_active(option);
        if let Some(payload) = reply {
            self.respond(TelnetCommand::Subnegotiate { option, payload });
        }
        (!was_active).then_some(TelnetEvent::OptionActive(option))
    }

    /// Push the proposed value of an announce-on-enable option after it is accepted.
    fn announce(&mut self, option: TelnetOption) {
        let value: Option<Bytes> = self
            .registry
            .get(option)
            .filter(|entry| entry.contract() == SubnegotiationContract::AnnounceOnEnable)
            .and_then(|entry| entry.proposed_value().cloned());
        if let Some(payload) = value {
            self.respond(TelnetCommand::Subnegotiate { option, payload });
        }
    }

    fn respond(&mut self, command: TelnetCommand) {
        self.process(CommandUnit::outgoing(command));
    }

    fn apply_outgoing(&mut self, command: &TelnetCommand) {
        match command {
            TelnetCommand::Do(option) | TelnetCommand::Will(option) => {
                if self.registry.is_desired(*option) {
                    self.enable(*option);
                }
            }
            TelnetCommand::Subnegotiate { option, .. } => {
                self.registry.set_active(*option);
            }
            _ => {}
        }
    }

    /// Returns true if the option was not enabled before.
    fn enable(&mut self, option: TelnetOption) -> bool {
        let was_enabled = self
            .registry
            .get(option)
            .is_some_and(|entry| entry.is_enabled());
        if self.registry.set_enabled(option) && !was_enabled {
            debug!("Enabled {}", option);
            return true;
        }
        false
    }
}

impl Default for TelnetNegotiator {
    fn default() -> Self {
        TelnetNegotiator::new(OptionRegistry::default())
    }
}
