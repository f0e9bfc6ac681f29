//! Robot Mouse - run a single mouse keyword from the command line

use clap::{Parser, Subcommand};
use robot_mouse::{Config, MouseError, PointerDevice};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "robot-mouse", version, about = "Drive the mouse of the local machine")]
struct Cli {
    /// Runtime identifier to use instead of detecting it
    #[arg(long, global = true)]
    platform: Option<String>,

    /// Screenshot directory (accepted for compatibility)
    #[arg(long, global = true)]
    screenshot_directory: Option<PathBuf>,

    /// Delay between button press and release in milliseconds
    #[arg(long, global = true)]
    press_release_delay: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Click at the current position
    Click,
    /// Click at the specified position
    ClickAt { x: i32, y: i32 },
    /// Right-click at the current position
    RightClick,
    /// Right-click at the specified position
    RightClickAt { x: i32, y: i32 },
    /// Move the pointer to the specified position
    MoveMouseAt { x: i32, y: i32 },
    /// Print the detected platform and bound backend
    Backend,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(platform) = &self.platform {
            config = config.with_platform(platform.clone());
        }
        if let Some(dir) = &self.screenshot_directory {
            config = config.with_screenshot_directory(dir.clone());
        }
        if let Some(delay) = self.press_release_delay {
            config = config.with_press_release_delay(delay);
        }
        config
    }
}

fn run(cli: &Cli, config: Config) -> Result<(), MouseError> {
    let device = PointerDevice::new(config);

    match cli.command {
        Command::Click => device.click(),
        Command::ClickAt { x, y } => device.click_at(x, y),
        Command::RightClick => device.right_click(),
        Command::RightClickAt { x, y } => device.right_click_at(x, y),
        Command::MoveMouseAt { x, y } => device.move_to(x, y),
        Command::Backend => {
            if let Some(platform) = device.platform() {
                println!("platform: {}", platform);
            }
            println!("backend: {}", device.backend_kind());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Robot Mouse starting...");
    let config = cli.config();

    if let Err(e) = run(&cli, config) {
        error!("{}", e);
        std::process::exit(1);
    }
}
