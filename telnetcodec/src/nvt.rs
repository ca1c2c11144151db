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

//! The network virtual terminal byte pump.

use crate::{
    ByteSink, NvtConfig, OptionRegistry, TelnetCodec, TelnetCommand, TelnetError, TelnetEvent,
    TelnetResult, TransportError, consts,
};
use bytes::BytesMut;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio_util::codec::Decoder;
use tracing::{debug, instrument, trace, warn};

/// A Telnet session over a byte transport.
///
/// The pump hands the application one data byte at a time. Commands found in the stream
/// are negotiated as they are read; the responses are written only once all input already
/// received has been processed, so writes never interleave with a half-read command.
pub struct NetworkVirtualTerminal<T> {
    transport: T,
    codec: TelnetCodec,
    read_buffer: BytesMut,
    write_buffer: BytesMut,
    read_timeout: Option<Duration>,
    read_buffer_size: usize,
    sinks: Vec<Box<dyn ByteSink + Send>>,
    failed: bool,
}

impl NetworkVirtualTerminal<TcpStream> {
    /// Open a TCP connection and wrap it in a session.
    pub async fn connect(addr: impl ToSocketAddrs, config: NvtConfig) -> TelnetResult<Self> {
        let stream = tokio::time::timeout(config.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| TransportError::Timeout(config.connect_timeout))?
            .map_err(|error| TransportError::io("connect", &error))?;
        Ok(NetworkVirtualTerminal::new(stream, &config))
    }
}

impl<T> NetworkVirtualTerminal<T>
where
    T: AsyncRead + AsyncWrite + Unpin,
{
    /// Session over `transport` with a registry built from `config`.
    pub fn new(transport: T, config: &NvtConfig) -> Self {
        NetworkVirtualTerminal::with_registry(transport, OptionRegistry::from_config(config), config)
    }

    /// Session over `transport` negotiating against `registry`.
    pub fn with_registry(transport: T, registry: OptionRegistry, config: &NvtConfig) -> Self {
        NetworkVirtualTerminal {
            transport,
            codec: TelnetCodec::with_registry(registry),
            read_buffer: BytesMut::with_capacity(config.read_buffer_size),
            write_buffer: BytesMut::new(),
            read_timeout: config.read_timeout,
            read_buffer_size: config.read_buffer_size.max(1),
            sinks: Vec::new(),
            failed: false,
        }
    }

    /// Register a sink notified of every application byte. Sinks run in registration order.
    pub fn subscribe(&mut self, sink: impl ByteSink + Send + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Option state of this session.
    pub fn registry(&self) -> &OptionRegistry {
        self.codec.registry()
    }

    /// Change the read deadline.
    pub fn set_read_timeout(&mut self, timeout: Option<Duration>) {
        self.read_timeout = timeout;
    }

    /// The underlying transport.
    pub fn get_ref(&self) -> &T {
        &self.transport
    }

    /// Consume the session, returning the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Wait for the next application byte. Returns `None` once the transport is closed.
    ///
    /// A read deadline expiry returns [`TransportError::Timeout`] and keeps any partially
    /// read command, so the call can simply be retried. A protocol error ends the session:
    /// later calls fail with [`TransportError::Closed`].
    #[instrument(skip_all)]
    pub async fn next_application_byte(&mut self) -> TelnetResult<Option<u8>> {
        if self.failed {
            return Err(TransportError::Closed.into());
        }
        loop {
            if let Some(byte) = self.decode_buffered()? {
                return Ok(Some(byte));
            }
            self.flush().await?;
            if !self.fill().await? {
                if !self.codec.is_idle() {
                    warn!("Transport closed in the middle of a telnet command");
                }
                return Ok(None);
            }
        }
    }

    /// Decode every byte already received without waiting on the transport.
    pub fn read_available(&mut self) -> TelnetResult<Vec<u8>> {
        if self.failed {
            return Err(TransportError::Closed.into());
        }
        let mut data = Vec::new();
        while let Some(byte) = self.decode_buffered()? {
            data.push(byte);
        }
        Ok(data)
    }

    /// Queue a locally initiated command. It is written with the next flush.
    pub fn send_command(&mut self, command: TelnetCommand) {
        self.codec.request(command);
    }

    /// Write protocol-level bytes exactly as given.
    pub async fn write_raw(&mut self, bytes: &[u8]) -> TelnetResult<()> {
        self.write_buffer.extend_from_slice(bytes);
        self.write_out().await
    }

    /// Write application data, doubling every `0xFF`.
    pub async fn write_data(&mut self, data: &[u8]) -> TelnetResult<()> {
        TelnetCodec::escape_data(data, &mut self.write_buffer);
        self.write_out().await
    }

    /// Write application text.
    pub async fn write_str(&mut self, text: &str) -> TelnetResult<()> {
        self.write_data(text.as_bytes()).await
    }

    /// Write application text followed by CR LF.
    pub async fn write_line(&mut self, text: &str) -> TelnetResult<()> {
        TelnetCodec::escape_data(text.as_bytes(), &mut self.write_buffer);
        self.write_buffer.extend_from_slice(&[consts::CR, consts::LF]);
        self.write_out().await
    }

    /// Write every pending command in queue order.
    pub async fn flush(&mut self) -> TelnetResult<()> {
        let count = self.codec.flush_pending(&mut self.write_buffer);
        if count > 0 {
            debug!("Flushing {} queued telnet commands", count);
        }
        self.write_out().await
    }

    /// Flush pending commands and shut down the write half of the transport.
    pub async fn shutdown(&mut self) -> TelnetResult<()> {
        self.flush().await?;
        self.transport
            .shutdown()
            .await
            .map_err(|error| TransportError::io("shutdown", &error).into())
    }

    fn decode_buffered(&mut self) -> TelnetResult<Option<u8>> {
        while !self.read_buffer.is_empty() {
            match self.codec.decode(&mut self.read_buffer) {
                Ok(Some(TelnetEvent::Data(byte))) => {
                    for sink in &mut self.sinks {
                        sink.byte_received(byte);
                    }
                    return Ok(Some(byte));
                }
                Ok(Some(event)) => trace!("Telnet event {:?}", event),
                Ok(None) => break,
                Err(error) => {
                    self.failed = true;
                    return Err(error);
                }
            }
        }
        Ok(None)
    }

    /// Read more input. Returns false at end of stream.
    async fn fill(&mut self) -> TelnetResult<bool> {
        self.read_buffer.reserve(self.read_buffer_size);
        let read = self.transport.read_buf(&mut self.read_buffer);
        let result = match self.read_timeout {
            Some(limit) => match tokio::time::timeout(limit, read).await {
                Ok(result) => result,
                Err(_) => return Err(TransportError::Timeout(limit).into()),
            },
            None => read.await,
        };
        let count = result.map_err(|error| TelnetError::from(TransportError::io("read", &error)))?;
        trace!("Read {} bytes", count);
        Ok(count > 0)
    }

    async fn write_out(&mut self) -> TelnetResult<()> {
        if self.write_buffer.is_empty() {
            return Ok(());
        }
        let data = self.write_buffer.split();
        self.transport
            .write_all(&data)
            .await
            .map_err(|error| TransportError::io("write", &error))?;
        self.transport
            .flush()
            .await
            .map_err(|error| TransportError::io("flush", &error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TelnetOption;
    use tokio::io::duplex;

    #[tokio::test]
    async fn responses_wait_until_input_is_drained() {
        let (client, mut server) = duplex(256);
        let mut nvt = NetworkVirtualTerminal::new(client, &NvtConfig::default());

        server.write_all(&[b'a', 0xFF, 0xFD, 0x01, b'b']).await.unwrap();
        assert_eq!(nvt.next_application_byte().await.unwrap(), Some(b'a'));
        assert_eq!(nvt.next_application_byte().await.unwrap(), Some(b'b'));
        assert!(nvt.codec.negotiator().pending().count() == 1);

        server.write_all(b"c").await.unwrap();
        assert_eq!(nvt.next_application_byte().await.unwrap(), Some(b'c'));

        let mut reply = [0u8; 3];
        server.read_exact(&mut reply).await.unwrap();
        assert_eq!(reply, [0xFF, 0xFB, 0x01]);
        assert!(nvt.registry().get(TelnetOption::Echo).unwrap().is_enabled());
    }

    #[tokio::test]
    async fn closed_transport_yields_none() {
        let (client, server) = duplex(16);
        let mut nvt = NetworkVirtualTerminal::new(client, &NvtConfig::default());
        drop(server);
        assert_eq!(nvt.next_application_byte().await.unwrap(), None);
    }
}
