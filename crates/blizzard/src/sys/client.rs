use blizzard_core::protocol::{Command, SOCKET_PATH};
use std::io::Write;
use std::os::unix::net::UnixStream;

pub fn send_command(command: Command) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to blizzard at {}: {}. Is it running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", command)?;
    Ok(())
}
