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

use crate::{TelnetCommand, TelnetOption};

/// Something the decoder recognised in the incoming stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TelnetEvent {
    /// One byte of application data, already unescaped
    Data(u8),
    /// A signal command such as NOP, BRK or AYT
    Signal(TelnetCommand),
    /// The option became enabled
    OptionEnabled(TelnetOption),
    /// The option completed subnegotiation
    OptionActive(TelnetOption),
}
