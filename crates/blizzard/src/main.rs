use blizzard::config;
use blizzard::gui::app::AppModel;
use blizzard::gui::view;
use blizzard::sys::{client, runtime};
use blizzard_core::protocol::Command;
use clap::{Parser, Subcommand};
use relm4::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "blizzard", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// (Re)start the rings of a running indicator
    Show,
    /// Stop the rings of a running indicator
    Stop,
    /// Write the default config file and print its path
    WriteConfig,
    /// Render a single frame to a PNG file
    Snapshot {
        path: PathBuf,

        /// Time since the animation started, in milliseconds
        #[arg(short = 't', long, default_value_t = 0)]
        at: u64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Show) => client::send_command(Command::Show),
        Some(Commands::Stop) => client::send_command(Command::Stop),
        Some(Commands::WriteConfig) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        Some(Commands::Snapshot { path, at }) => {
            let config = config::load_or_default();
            view::write_snapshot(
                &path,
                config.width,
                config.height,
                config.density,
                Duration::from_millis(at),
            )
        }
        None => {
            run();
            Ok(())
        }
    }
}

fn run() {
    let config = config::load_or_default();
    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx);

    // arguments belong to clap, not to GTK
    let app = RelmApp::new("work.nich.blizzard").with_args(Vec::new());
    app.run::<AppModel>((config, rx));
}
