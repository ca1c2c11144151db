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

//! Telnet option identities.

macro_rules! telnet_options {
    ($($(#[doc = $doc:literal])* $code:literal => $variant:ident, $name:literal;)+) => {
        /// A Telnet option number with a symbolic name for every assigned code.
        ///
        /// Codes with no assigned meaning are carried as [`TelnetOption::Unknown`] so that
        /// every byte value round-trips through this type.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TelnetOption {
            $($(#[doc = $doc])* $variant,)+
            /// Unassigned option code
            Unknown(u8),
        }

        impl TelnetOption {
            /// Maps a wire byte to its option.
            pub const fn from_u8(byte: u8) -> TelnetOption {
                match byte {
                    $($code => TelnetOption::$variant,)+
                    other => TelnetOption::Unknown(other),
                }
            }

            /// The wire byte for this option.
            pub const fn to_u8(self) -> u8 {
                match self {
                    $(TelnetOption::$variant => $code,)+
                    TelnetOption::Unknown(byte) => byte,
                }
            }

            /// Human readable option name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(TelnetOption::$variant => $name,)+
                    TelnetOption::Unknown(_) => "UNKNOWN",
                }
            }
        }
    };
}

telnet_options! {
    /// Binary Transmission [RFC856]
    0x00 => TransmitBinary, "BINARY";
    /// Echo [RFC857]
    0x01 => Echo, "ECHO";
    /// Reconnection
    0x02 => Reconnection, "RCP";
    /// Suppress Go Ahead [RFC858]
    0x03 => SuppressGoAhead, "SGA";
    /// Negotiate Approximate Message Size
    0x04 => ApproxMessageSize, "NAMS";
    /// Status [RFC859]
    0x05 => Status, "STATUS";
    /// Timing Mark [RFC860]
    0x06 => TimingMark, "TM";
    /// Remote Controlled Transmission and Echo [RFC726]
    0x07 => RemoteControlledEcho, "RCTE";
    /// Output Line Width
    0x08 => OutputLineWidth, "NAOL";
    /// Output Page Size
    0x09 => OutputPageSize, "NAOP";
    /// Output Carriage-Return Disposition [RFC652]
    0x0A => CarriageReturnDisposition, "NAOCRD";
    /// Output Horizontal Tab Stops [RFC653]
    0x0B => HorizontalTabStops, "NAOHTS";
    /// Output Horizontal Tab Disposition [RFC654]
    0x0C => HorizontalTabDisposition, "NAOHTD";
    /// Output Formfeed Disposition [RFC655]
    0x0D => FormfeedDisposition, "NAOFFD";
    /// Output Vertical Tabstops [RFC656]
    0x0E => VerticalTabStops, "NAOVTS";
    /// Output Vertical Tab Disposition [RFC657]
    0x0F => VerticalTabDisposition, "NAOVTD";
    /// Output Linefeed Disposition [RFC658]
    0x10 => LinefeedDisposition, "NAOLFD";
    /// Extended ASCII [RFC698]
    0x11 => ExtendedAscii, "XASCII";
    /// Logout [RFC727]
    0x12 => Logout, "LOGOUT";
    /// Byte Macro [RFC735]
    0x13 => ByteMacro, "BM";
    /// Data Entry Terminal [RFC1043]
    0x14 => DataEntryTerminal, "DET";
    /// SUPDUP [RFC736]
    0x15 => Supdup, "SUPDUP";
    /// SUPDUP Output [RFC749]
    0x16 => SupdupOutput, "SUPDUP-OUTPUT";
    /// Send Location [RFC779]
    0x17 => SendLocation, "SEND-LOCATION";
    /// Terminal Type [RFC1091]
    0x18 => TerminalType, "TERMINAL-TYPE";
    /// End of Record [RFC885]
    0x19 => EndOfRecord, "EOR";
    /// TACACS User Identification [RFC927]
    0x1A => TacacsUserId, "TUID";
    /// Output Marking [RFC933]
    0x1B => OutputMarking, "OUTMRK";
    /// Terminal Location Number [RFC946]
    0x1C => TerminalLocation, "TTYLOC";
    /// Telnet 3270 Regime [RFC1041]
    0x1D => Regime3270, "3270-REGIME";
    /// X.3 PAD [RFC1053]
    0x1E => X3Pad, "X.3-PAD";
    /// Negotiate About Window Size [RFC1073]
    0x1F => WindowSize, "NAWS";
    /// Terminal Speed [RFC1079]
    0x20 => TerminalSpeed, "TERMINAL-SPEED";
    /// Remote Flow Control [RFC1372]
    0x21 => RemoteFlowControl, "TOGGLE-FLOW-CONTROL";
    /// Linemode [RFC1184]
    0x22 => Linemode, "LINEMODE";
    /// X Display Location [RFC1096]
    0x23 => XDisplayLocation, "X-DISPLAY-LOCATION";
    /// Environment Option [RFC1408]
    0x24 => Environment, "ENVIRON";
    /// Authentication [RFC2941]
    0x25 => Authentication, "AUTHENTICATION";
    /// Encryption [RFC2946]
    0x26 => Encryption, "ENCRYPT";
    /// New Environment [RFC1572]
    0x27 => NewEnvironment, "NEW-ENVIRON";
    /// TN3270E [RFC2355]
    0x28 => Tn3270e, "TN3270E";
    /// XAUTH
    0x29 => XAuth, "XAUTH";
    /// Charset [RFC2066]
    0x2A => Charset, "CHARSET";
    /// Telnet Remote Serial Port
    0x2B => RemoteSerialPort, "RSP";
    /// Com Port Control [RFC2217]
    0x2C => ComPortControl, "COM-PORT-OPTION";
    /// Telnet Suppress Local Echo
    0x2D => SuppressLocalEcho, "SUPPRESS-LOCAL-ECHO";
    /// Telnet Start TLS
    0x2E => StartTls, "START-TLS";
    /// Kermit [RFC2840]
    0x2F => Kermit, "KERMIT";
    /// Send URL
    0x30 => SendUrl, "SEND-URL";
    /// Forward X
    0x31 => ForwardX, "FORWARD_X";
    /// Telnet Option Pragma Logon
    0x8A => PragmaLogon, "PRAGMA-LOGON";
    /// Telnet Option SSPI Logon
    0x8B => SspiLogon, "SSPI-LOGON";
    /// Telnet Option Pragma Heartbeat
    0x8C => PragmaHeartbeat, "PRAGMA-HEARTBEAT";
    /// Extended Options List [RFC861]
    0xFF => ExtendedOptionsList, "EXOPL";
}

impl std::fmt::Display for TelnetOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelnetOption::Unknown(byte) => write!(f, "UNKNOWN({byte:#04X})"),
            option => write!(f, "{}({:#04X})", option.name(), option.to_u8()),
        }
    }
}

impl From<u8> for TelnetOption {
    fn from(byte: u8) -> Self {
        TelnetOption::from_u8(byte)
    }
}

impl From<TelnetOption> for u8 {
    fn from(option: TelnetOption) -> Self {
        option.to_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::TelnetOption;

    #[test]
    fn every_byte_round_trips() {
        for byte in 0..=u8::MAX {
            assert_eq!(TelnetOption::from_u8(byte).to_u8(), byte);
        }
    }

    #[test]
    fn named_options_map_to_their_codes() {
        assert_eq!(TelnetOption::from(0x01), TelnetOption::Echo);
        assert_eq!(TelnetOption::from(0x18), TelnetOption::TerminalType);
        assert_eq!(TelnetOption::from(0x1F), TelnetOption::WindowSize);
        assert_eq!(u8::from(TelnetOption::SuppressGoAhead), 0x03);
        assert_eq!(TelnetOption::from(0x64), TelnetOption::Unknown(0x64));
    }

    #[test]
    fn display_includes_name_and_code() {
        assert_eq!(TelnetOption::Echo.to_string(), "ECHO(0x01)");
        assert_eq!(TelnetOption::Unknown(0x99).to_string(), "UNKNOWN(0x99)");
    }
}
