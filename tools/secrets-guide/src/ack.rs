//! Acknowledgment wait before exit.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Blocks until one line arrives on the reader, then returns.
///
/// Any content satisfies the wait, including an empty line. EOF counts too,
/// so piped invocations terminate instead of hanging. There is no timeout
/// and no cancellation path.
pub async fn wait_for_ack<R>(input: R) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(input);
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(())
}
