use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::mpsc::UnboundedSender,
};
use tracing::{debug, error, instrument, trace};

// ============================================================================
// Console I/O Task
// ============================================================================

// Message from console I/O task to server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleToServer {
    Line(String),
    Closed,
}

// Forward stdin lines to the server loop until stdin closes or the server goes away.
#[instrument(skip(to_server))]
pub async fn console_io_task(to_server: UnboundedSender<ConsoleToServer>) {
    forward_console_lines(BufReader::new(tokio::io::stdin()), &to_server).await;
}

// Send each line from `reader` to the server, then a final `Closed` once input ends.
pub async fn forward_console_lines<R>(reader: R, to_server: &UnboundedSender<ConsoleToServer>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                trace!(line = %line, "console input");
                if to_server.send(ConsoleToServer::Line(line)).is_err() {
                    debug!("server loop gone, stopping console reader");
                    return;
                }
            }
            Ok(None) => {
                debug!("console input closed");
                break;
            }
            Err(e) => {
                error!("error reading console: {}", e);
                break;
            }
        }
    }

    if to_server.send(ConsoleToServer::Closed).is_err() {
        debug!("server loop gone before console close was delivered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test]
    async fn test_lines_then_closed() {
        let (to_server, mut from_console) = unbounded_channel();
        forward_console_lines(&b"status\nthirdperson 1\n"[..], &to_server).await;

        assert_eq!(from_console.try_recv(), Ok(ConsoleToServer::Line("status".to_string())));
        assert_eq!(
            from_console.try_recv(),
            Ok(ConsoleToServer::Line("thirdperson 1".to_string()))
        );
        assert_eq!(from_console.try_recv(), Ok(ConsoleToServer::Closed));
    }

    #[tokio::test]
    async fn test_empty_input_with_server_gone() {
        let (to_server, from_console) = unbounded_channel();
        drop(from_console);
        // Nothing to deliver and nobody listening; returns without panicking
        forward_console_lines(&b""[..], &to_server).await;
        assert!(to_server.is_closed());
    }
}
