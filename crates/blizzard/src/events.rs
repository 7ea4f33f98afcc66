use blizzard_core::protocol::Command;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Show,
    Stop,
    ConfigReload,
}

impl From<Command> for AppEvent {
    fn from(command: Command) -> Self {
        match command {
            Command::Show => AppEvent::Show,
            Command::Stop => AppEvent::Stop,
        }
    }
}
