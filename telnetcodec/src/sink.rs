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

use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedSender;

/// Receives every application byte the pump produces, in arrival order.
pub trait ByteSink {
    /// Called once per decoded application byte.
    fn byte_received(&mut self, byte: u8);
}

impl ByteSink for Vec<u8> {
    fn byte_received(&mut self, byte: u8) {
        self.push(byte);
    }
}

/// Bytes sent after the receiver is dropped are discarded.
impl ByteSink for UnboundedSender<u8> {
    fn byte_received(&mut self, byte: u8) {
        let _ = self.send(byte);
    }
}

impl<S: ByteSink> ByteSink for Arc<Mutex<S>> {
    fn byte_received(&mut self, byte: u8) {
        if let Ok(mut sink) = self.lock() {
            sink.byte_received(byte);
        }
    }
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    fn byte_received(&mut self, byte: u8) {
        (**self).byte_received(byte);
    }
}
