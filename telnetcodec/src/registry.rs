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

//! Per-session option registry.
//!
//! The registry records, for every option the local end supports, the value it proposes
//! during subnegotiation and how far negotiation has progressed. Options absent from the
//! registry are never desired and are always refused.

use crate::{NvtConfig, TelnetOption};
use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;
use std::collections::BTreeMap;
use tracing::warn;

/// How an option exchanges its value once enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubnegotiationContract {
    /// No payload is exchanged; an incoming SB only marks the option active.
    #[default]
    None,
    /// Answer `SB <opt> SEND` with `SB <opt> IS <proposed value>`.
    ReplyOnSend,
    /// Send `SB <opt> <proposed value>` unprompted as soon as the peer sends DO.
    AnnounceOnEnable,
}

/// Negotiation state for a single supported option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    option: TelnetOption,
    proposed_value: Option<Bytes>,
    contract: SubnegotiationContract,
    enabled: bool,
    active: bool,
}

impl OptionEntry {
    /// Supported option with nothing to advertise.
    pub fn new(option: TelnetOption) -> OptionEntry {
        OptionEntry {
            option,
            proposed_value: None,
            contract: SubnegotiationContract::None,
            enabled: false,
            active: false,
        }
    }

    /// Attach the value advertised during subnegotiation.
    pub fn with_value(mut self, value: impl Into<Bytes>) -> OptionEntry {
        self.proposed_value = Some(value.into());
        self
    }

    /// Set the subnegotiation contract.
    pub fn with_contract(mut self, contract: SubnegotiationContract) -> OptionEntry {
        self.contract = contract;
        self
    }

    /// Option identity
    pub fn option(&self) -> TelnetOption {
        self.option
    }

    /// Bytes the local end advertises for this option
    pub fn proposed_value(&self) -> Option<&Bytes> {
        self.proposed_value.as_ref()
    }

    /// Subnegotiation contract
    pub fn contract(&self) -> SubnegotiationContract {
        self.contract
    }

    /// Both ends agreed to use the option
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Subnegotiation, if any, has completed
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Default option preference.
struct Preference {
    option: TelnetOption,
    value: Option<&'static [u8]>,
    contract: SubnegotiationContract,
}

/// Options every session supports unless constructed otherwise.
static DEFAULT_PREFERENCES: &[Preference] = &[
    Preference {
        option: TelnetOption::Echo,
        value: None,
        contract: SubnegotiationContract::None,
    },
    Preference {
        option: TelnetOption::SuppressGoAhead,
        value: None,
        contract: SubnegotiationContract::None,
    },
    Preference {
        option: TelnetOption::TerminalType,
        value: Some(b"XTERM"),
        contract: SubnegotiationContract::ReplyOnSend,
    },
    Preference {
        option: TelnetOption::WindowSize,
        value: Some(&[0x00, 0x50, 0x00, 0x18]),
        contract: SubnegotiationContract::AnnounceOnEnable,
    },
];

/// Option registry owned by one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRegistry {
    entries: BTreeMap<u8, OptionEntry>,
}

impl OptionRegistry {
    /// A registry that desires nothing and refuses every option.
    pub fn empty() -> OptionRegistry {
        OptionRegistry {
            entries: BTreeMap::new(),
        }
    }

    /// Build the default registry with the terminal type and window size taken from `config`.
    pub fn from_config(config: &NvtConfig) -> OptionRegistry {
        let mut window = [0u8; 4];
        BigEndian::write_u16(&mut window[..2], config.terminal_width);
        BigEndian::write_u16(&mut window[2..], config.terminal_height);

        let mut registry = OptionRegistry::default();
        registry.register(
            OptionEntry::new(TelnetOption::TerminalType)
                .with_value(config.terminal_type.clone().into_bytes())
                .with_contract(SubnegotiationContract::ReplyOnSend),
        );
        registry.register(
            OptionEntry::new(TelnetOption::WindowSize)
                .with_value(window.to_vec())
                .with_contract(SubnegotiationContract::AnnounceOnEnable),
        );
        registry
    }

    /// Add a supported option, or replace the entry already registered for it.
    pub fn register(&mut self, entry: OptionEntry) -> Option<OptionEntry> {
        self.entries.insert(entry.option.to_u8(), entry)
    }

    /// Builder form of [`OptionRegistry::register`].
    pub fn with_option(mut self, entry: OptionEntry) -> OptionRegistry {
        self.register(entry);
        self
    }

    /// Whether the local end wants to use `option`.
    pub fn is_desired(&self, option: TelnetOption) -> bool {
        self.entries.contains_key(&option.to_u8())
    }

    /// Look up the entry for `option`.
    pub fn get(&self, option: TelnetOption) -> Option<&OptionEntry> {
        self.entries.get(&option.to_u8())
    }

    /// Mark `option` enabled. Returns false if the option is not registered.
    pub fn set_enabled(&mut self, option: TelnetOption) -> bool {
        match self.entries.get_mut(&option.to_u8()) {
            Some(entry) => {
                entry.enabled = true;
                true
            }
            None => false,
        }
    }

    /// Mark `option` active. Returns false, leaving the entry untouched, if the option is
    /// not registered or not yet enabled.
    pub fn set_active(&mut self, option: TelnetOption) -> bool {
        match self.entries.get_mut(&option.to_u8()) {
            Some(entry) if entry.enabled => {
                entry.active = true;
                true
            }
            Some(_) => {
                warn!("Refusing to activate {} before it is enabled", option);
                false
            }
            None => false,
        }
    }

    /// Registered entries in option-code order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionEntry> {
        self.entries.values()
    }
}

impl Default for OptionRegistry {
    fn default() -> Self {
        let entries = DEFAULT_PREFERENCES
            .iter()
            .map(|preference| {
                let mut entry =
                    OptionEntry::new(preference.option).with_contract(preference.contract);
                if let Some(value) = preference.value {
                    entry = entry.with_value(Bytes::from_static(value));
                }
                (preference.option.to_u8(), entry)
            })
            .collect();
        OptionRegistry { entries }
    }
}
