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

use bytes::Bytes;
use nvterm_ansicodec::{
    AnsiConfig, AnsiDecoder, CursorPosition, DecodeError, GraphicAttributes, TerminalEvent,
    TextEncoding,
};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

/// Plain text, control sequences, status queries and deliberately broken sequences.
fn terminal_stream() -> impl Strategy<Value = Vec<u8>> {
    let piece = prop_oneof![
        "[a-zA-Z0-9 .,]{1,8}".prop_map(String::into_bytes),
        Just("é€".as_bytes().to_vec()),
        (1usize..40, 1usize..80).prop_map(|(row, col)| format!("\x1b[{row};{col}H").into_bytes()),
        prop::sample::select(vec!["0", "1", "31", "1;44", "4;92", ""])
            .prop_map(|codes| format!("\x1b[{codes}m").into_bytes()),
        prop::sample::select(vec!["A", "2B", "J", "1K", "?25l", "6n", "5n", "99z", "7J"])
            .prop_map(|tail| format!("\x1b[{tail}").into_bytes()),
        Just(b"\x1b=".to_vec()),
        Just(b"\x1b[12".to_vec()),
        Just(vec![0x13]),
        Just(vec![0x11]),
    ];
    prop::collection::vec(piece, 0..30).prop_map(|pieces| pieces.concat())
}

struct Outcome {
    events: Vec<TerminalEvent>,
    errors: Vec<DecodeError>,
    replies: Vec<Bytes>,
    attributes: GraphicAttributes,
}

fn decode(chunks: &[&[u8]]) -> Outcome {
    let events = Arc::new(Mutex::new(Vec::<TerminalEvent>::new()));
    let replies = Arc::new(Mutex::new(Vec::<Bytes>::new()));
    let mut decoder = AnsiDecoder::new(AnsiConfig::new().with_encoding(TextEncoding::Utf8));
    decoder.subscribe(Arc::clone(&events));
    decoder.set_output(Arc::clone(&replies));
    decoder.set_cursor_source(CursorPosition::new(3, 7));
    let mut errors = Vec::new();
    for chunk in chunks {
        if let Err(rejected) = decoder.input(chunk) {
            errors.extend(rejected);
        }
    }
    let attributes = *decoder.attributes();
    let events = events.lock().unwrap().clone();
    let replies = replies.lock().unwrap().clone();
    Outcome {
        events,
        errors,
        replies,
        attributes,
    }
}

proptest! {
    #[test]
    fn split_delivery_matches_single_delivery(
        stream in terminal_stream(),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let whole = decode(&[stream.as_slice()]);

        let mut points: Vec<usize> = cuts.iter().map(|cut| cut.index(stream.len() + 1)).collect();
        points.sort_unstable();
        let mut chunks = Vec::new();
        let mut start = 0;
        for point in points {
            chunks.push(&stream[start..point]);
            start = point;
        }
        chunks.push(&stream[start..]);
        let split = decode(&chunks);

        prop_assert_eq!(whole.events, split.events);
        prop_assert_eq!(whole.errors, split.errors);
        prop_assert_eq!(whole.replies.concat(), split.replies.concat());
        prop_assert_eq!(whole.attributes, split.attributes);
    }

    #[test]
    fn plain_text_passes_through(text in "[ -~]{0,64}") {
        let outcome = decode(&[text.as_bytes()]);
        let decoded: String = outcome
            .events
            .iter()
            .filter_map(|event| match event {
                TerminalEvent::Character(character) => Some(*character),
                _ => None,
            })
            .collect();
        prop_assert_eq!(decoded, text);
    }
}
