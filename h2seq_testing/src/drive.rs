//! Replay a serialized [`FrameSequence`] into a server under test.
//!
//! The server function receives the server half of a `tokio::io::duplex`
//! pair. The sequence is written to the client half, the client half is
//! shut down, and everything the server writes back is collected.

use std::{any::Any, io};

use bytes::Bytes;
use futures::FutureExt as _;
use h2seq::FrameSequence;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt, DuplexStream, duplex};

const DEFAULT_CAPACITY: usize = 4096;

/// Serialize `sequence` and write it to `writer`.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidData`] if a frame fails to encode, or any
/// error raised by `writer`.
pub async fn write_sequence<W>(writer: &mut W, sequence: &FrameSequence<'_>) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let bytes = encode(sequence)?;
    writer.write_all(&bytes).await
}

/// Drive `server_fn` with `sequence` over a duplex stream of the default
/// capacity and return the server's output.
///
/// # Errors
///
/// Returns an error if the sequence fails to encode, the transport fails,
/// or the server panics (the message starts with `"server task failed"`).
///
/// ```rust
/// use h2seq::FrameSequence;
/// use h2seq_testing::drive_with_sequence;
/// use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
///
/// async fn echo(mut server: DuplexStream) {
///     let mut input = Vec::new();
///     let _ = server.read_to_end(&mut input).await;
///     let _ = server.write_all(&input).await;
/// }
///
/// # async fn demo() -> std::io::Result<()> {
/// let mut seq = FrameSequence::new();
/// seq.ping(1);
/// let out = drive_with_sequence(echo, &seq).await?;
/// assert_eq!(out.len(), 17);
/// # Ok(())
/// # }
/// ```
pub async fn drive_with_sequence<F, Fut>(server_fn: F, sequence: &FrameSequence<'_>) -> io::Result<Vec<u8>>
where
    F: FnOnce(DuplexStream) -> Fut,
    Fut: std::future::Future<Output = ()> + Send,
{
    drive_with_sequence_with_capacity(server_fn, sequence, DEFAULT_CAPACITY).await
}

/// Drive `server_fn` with `sequence` using a duplex buffer of `capacity`
/// bytes.
///
/// # Errors
///
/// See [`drive_with_sequence`].
pub async fn drive_with_sequence_with_capacity<F, Fut>(
    server_fn: F,
    sequence: &FrameSequence<'_>,
    capacity: usize,
) -> io::Result<Vec<u8>>
where
    F: FnOnce(DuplexStream) -> Fut,
    Fut: std::future::Future<Output = ()> + Send,
{
    let input = encode(sequence)?;
    drive_internal(server_fn, input, capacity).await
}

fn encode(sequence: &FrameSequence<'_>) -> io::Result<Bytes> {
    sequence.serialize().map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("frame sequence encode failed: {err}"),
        )
    })
}

async fn drive_internal<F, Fut>(server_fn: F, input: Bytes, capacity: usize) -> io::Result<Vec<u8>>
where
    F: FnOnce(DuplexStream) -> Fut,
    Fut: std::future::Future<Output = ()> + Send,
{
    let (mut client, server) = duplex(capacity);

    let server_fut = async {
        let result = std::panic::AssertUnwindSafe(server_fn(server))
            .catch_unwind()
            .await;
        match result {
            Ok(()) => Ok(()),
            Err(panic) => {
                let panic_msg = panic_message(panic.as_ref());
                tracing::error!(panic = %panic_msg, "server task panicked");
                Err(io::Error::other(format!("server task failed: {panic_msg}")))
            }
        }
    };

    let client_fut = async {
        client.write_all(&input).await?;
        client.shutdown().await?;

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).await?;
        io::Result::Ok(buf)
    };

    let ((), buf) = tokio::try_join!(server_fut, client_fut)?;
    Ok(buf)
}

/// Text of a panic payload raised with a string message, or a placeholder.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
