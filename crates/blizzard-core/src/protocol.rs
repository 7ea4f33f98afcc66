use strum::{Display, EnumString};

pub const SOCKET_PATH: &str = "/tmp/blizzard.sock";

/// Line-based commands accepted by a running indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Command {
    Show,
    Stop,
}

impl Command {
    pub fn parse_line(line: &str) -> Option<Self> {
        line.trim().parse().ok()
    }
}
