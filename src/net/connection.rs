use super::*;
use crate::wire::Record;
use bytes::Bytes;
use bytes::BytesMut;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Bytes asked of the stream per read.
const CHUNK: usize = 1024;

/// A duplex byte stream with exact-size reads over arbitrary chunking.
///
/// The stream may coalesce several records into one read or split one
/// record across many; `receive_exact` keeps whatever it over-reads for the
/// next call. Owned by exactly one task for its whole life.
#[derive(Debug)]
pub struct Connection<S = TcpStream> {
    stream: Option<S>,
    buffer: BytesMut,
    timeout: Duration,
}

impl Connection<TcpStream> {
    /// Opens an outbound connection within `timeout`, which also becomes
    /// the default read timeout.
    pub async fn connect(addr: SocketAddr, timeout: Duration) -> Result<Self, ConnectError> {
        match tokio::time::timeout(timeout, TcpStream::connect(addr)).await {
            Err(_) => Err(ConnectError::Timeout(addr)),
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::ConnectionRefused => {
                Err(ConnectError::Refused(addr))
            }
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::TimedOut => {
                Err(ConnectError::Timeout(addr))
            }
            Ok(Err(e)) => Err(ConnectError::Io(addr, e)),
            Ok(Ok(stream)) => Ok(Self::new(stream, timeout))
                .inspect(|_| log::debug!("[connection] connected to {}", addr)),
        }
    }
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, timeout: Duration) -> Self {
        Self {
            stream: Some(stream),
            buffer: BytesMut::with_capacity(CHUNK),
            timeout,
        }
    }
    /// Replaces the default read timeout, e.g. after a slower connect.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
    pub fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    /// Exactly `n` bytes under the default timeout.
    pub async fn receive_exact(&mut self, n: usize) -> Result<Bytes, Disconnect> {
        self.receive_within(n, self.timeout).await
    }

    /// Exactly `n` bytes, or a disconnect if the stream ends or `timeout`
    /// passes first. Surplus bytes stay buffered.
    pub async fn receive_within(&mut self, n: usize, timeout: Duration) -> Result<Bytes, Disconnect> {
        let buffer = &mut self.buffer;
        let stream = self.stream.as_mut().ok_or(Disconnect::Closed)?;
        let fill = async {
            while buffer.len() < n {
                buffer.reserve(CHUNK);
                match stream.read_buf(buffer).await? {
                    0 => return Err(Disconnect::Closed),
                    k => log::trace!("[connection] read {} bytes ({} buffered)", k, buffer.len()),
                }
            }
            Ok::<(), Disconnect>(())
        };
        tokio::time::timeout(timeout, fill)
            .await
            .map_err(|_| Disconnect::Timeout)??;
        Ok(self.buffer.split_to(n).freeze())
    }

    /// Writes every byte, retrying partial writes, under the default timeout.
    pub async fn send_all(&mut self, bytes: &[u8]) -> Result<(), Disconnect> {
        let stream = self.stream.as_mut().ok_or(Disconnect::Closed)?;
        let write = async {
            stream.write_all(bytes).await?;
            stream.flush().await
        };
        tokio::time::timeout(self.timeout, write)
            .await
            .map_err(|_| Disconnect::Timeout)?
            .map_err(Disconnect::from)
    }

    /// Next record under the default timeout.
    pub async fn recv<R: Record>(&mut self) -> Result<R, Disconnect> {
        self.recv_within(self.timeout).await
    }

    /// Reads exactly `R::SIZE` bytes and decodes them as a whole.
    pub async fn recv_within<R: Record>(&mut self, timeout: Duration) -> Result<R, Disconnect> {
        let bytes = self.receive_within(R::SIZE, timeout).await?;
        R::decode(&bytes).map_err(Disconnect::Malformed)
    }

    pub async fn send<R: Record>(&mut self, record: &R) -> Result<(), Disconnect> {
        self.send_all(&record.encode()).await
    }

    /// Shuts the stream down. Safe to call repeatedly; every later read or
    /// write fails with [`Disconnect::Closed`].
    pub async fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            let _ = stream.shutdown().await;
            self.buffer.clear();
        }
    }
}
