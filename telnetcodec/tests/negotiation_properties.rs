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

use bytes::BytesMut;
use nvterm_telnetcodec::{
    CommandUnit, OptionRegistry, TelnetCodec, TelnetCommand, TelnetEvent, TelnetNegotiator,
    TelnetOption,
};
use proptest::prelude::*;
use tokio_util::codec::Decoder;

fn undesired_option() -> impl Strategy<Value = TelnetOption> {
    any::<u8>()
        .prop_map(TelnetOption::from_u8)
        .prop_filter("registered by default", |option| {
            !OptionRegistry::default().is_desired(*option)
        })
}

fn desired_option() -> impl Strategy<Value = TelnetOption> {
    prop::sample::select(vec![
        TelnetOption::Echo,
        TelnetOption::SuppressGoAhead,
        TelnetOption::TerminalType,
        TelnetOption::WindowSize,
    ])
}

fn flushed(negotiator: &mut TelnetNegotiator) -> Vec<u8> {
    let mut dst = BytesMut::new();
    negotiator.flush_into(&mut dst);
    dst.to_vec()
}

/// Application bytes mixed with escaped IACs and negotiation commands.
fn telnet_stream() -> impl Strategy<Value = Vec<u8>> {
    let piece = prop_oneof![
        any::<u8>().prop_filter("not IAC", |b| *b != 0xFF).prop_map(|b| vec![b]),
        Just(vec![0xFF, 0xFF]),
        (prop::sample::select(vec![0xFBu8, 0xFC, 0xFD, 0xFE]), any::<u8>())
            .prop_map(|(verb, option)| vec![0xFF, verb, option]),
        Just(vec![0xFF, 0xFA, 0x18, 0x01, 0xFF, 0xF0]),
        Just(vec![0xFF, 0xF1]),
    ];
    prop::collection::vec(piece, 0..40).prop_map(|pieces| pieces.concat())
}

fn decode_in_chunks(stream: &[u8], chunk: usize) -> (Vec<TelnetEvent>, Vec<u8>) {
    let mut codec = TelnetCodec::new();
    let mut events = Vec::new();
    for piece in stream.chunks(chunk) {
        let mut src = BytesMut::from(piece);
        while let Some(event) = codec.decode(&mut src).unwrap() {
            events.push(event);
        }
    }
    let mut out = BytesMut::new();
    codec.flush_pending(&mut out);
    (events, out.to_vec())
}

proptest! {
    #[test]
    fn undesired_do_gets_exactly_one_wont(option in undesired_option()) {
        let mut negotiator = TelnetNegotiator::default();
        negotiator.process(CommandUnit::incoming(TelnetCommand::Do(option)));
        prop_assert_eq!(flushed(&mut negotiator), vec![0xFF, 0xFC, option.to_u8()]);
        prop_assert_eq!(negotiator.registry(), &OptionRegistry::default());
    }

    #[test]
    fn undesired_will_gets_exactly_one_dont(option in undesired_option()) {
        let mut negotiator = TelnetNegotiator::default();
        negotiator.process(CommandUnit::incoming(TelnetCommand::Will(option)));
        prop_assert_eq!(flushed(&mut negotiator), vec![0xFF, 0xFE, option.to_u8()]);
        prop_assert_eq!(negotiator.registry(), &OptionRegistry::default());
    }

    #[test]
    fn desired_do_enables_and_answers_will(option in desired_option()) {
        let mut negotiator = TelnetNegotiator::default();
        negotiator.process(CommandUnit::incoming(TelnetCommand::Do(option)));
        let out = flushed(&mut negotiator);
        prop_assert_eq!(&out[..3], &[0xFF, 0xFB, option.to_u8()]);
        prop_assert!(negotiator.registry().get(option).unwrap().is_enabled());
    }

    #[test]
    fn desired_will_enables_and_answers_do(option in desired_option()) {
        let mut negotiator = TelnetNegotiator::default();
        negotiator.process(CommandUnit::incoming(TelnetCommand::Will(option)));
        prop_assert_eq!(flushed(&mut negotiator), vec![0xFF, 0xFD, option.to_u8()]);
        prop_assert!(negotiator.registry().get(option).unwrap().is_enabled());
    }

    #[test]
    fn decoding_is_independent_of_fragmentation(stream in telnet_stream(), chunk in 1usize..16) {
        let whole = decode_in_chunks(&stream, stream.len().max(1));
        let split = decode_in_chunks(&stream, chunk);
        prop_assert_eq!(whole, split);
    }

    #[test]
    fn escaped_data_decodes_to_itself(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut wire = BytesMut::new();
        TelnetCodec::escape_data(&data, &mut wire);
        let mut codec = TelnetCodec::new();
        let mut decoded = Vec::new();
        while let Some(event) = codec.decode(&mut wire).unwrap() {
            match event {
                TelnetEvent::Data(byte) => decoded.push(byte),
                other => prop_assert!(false, "unexpected event {:?}", other),
            }
        }
        prop_assert_eq!(decoded, data);
    }
}
