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

//! XON/XOFF gating of replies sent back to the host.

use crate::consts;
use bytes::Bytes;
use tracing::warn;

/// XON/XOFF gate on outgoing replies.
///
/// While paused, chunks are held in arrival order; resuming releases them all at once.
/// At most [`consts::MAX_HELD_REPLIES`] chunks are held; later ones are dropped.
#[derive(Clone, Debug, Default)]
pub struct FlowControlLatch {
    paused: bool,
    held: Vec<Bytes>,
}

impl FlowControlLatch {
    /// An open latch.
    pub fn new() -> FlowControlLatch {
        FlowControlLatch::default()
    }

    /// True while output is held back.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of chunks waiting for resume.
    pub fn held(&self) -> usize {
        self.held.len()
    }

    /// Stop releasing output.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Open the latch and return everything held, oldest first.
    pub fn resume(&mut self) -> Vec<Bytes> {
        self.paused = false;
        std::mem::take(&mut self.held)
    }

    /// Pass `chunk` through, or hold it while paused.
    pub fn submit(&mut self, chunk: Bytes) -> Option<Bytes> {
        if self.paused {
            if self.held.len() < consts::MAX_HELD_REPLIES {
                self.held.push(chunk);
            } else {
                warn!(
                    "Output paused with {} replies held, dropping {} bytes",
                    self.held.len(),
                    chunk.len()
                );
            }
            None
        } else {
            Some(chunk)
        }
    }
}
