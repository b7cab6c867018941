use std::error::Error;

use clap::{Parser, Subcommand};
use eframe::{egui::ViewportBuilder, run_native};
use roosty_alarms::{bootstrap, config::Config, AlarmView};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// write the default config file
    Init {
        #[clap(long, short)]
        force: bool,
    },
    /// print where the config file lives
    ConfigPath,
}

fn main() -> Result<(), Box<dyn Error>> {
    // log to file before anything else can fail
    simple_file_logger::init_logger!("roosty_alarms")?;

    let args = Args::parse();
    let config_path = Config::config_path()?;
    match args.command {
        Some(Command::Init { force }) => {
            if force || !config_path.exists() {
                Config::new().save(&config_path)?;
                log::info!("wrote default config to {}", config_path.display());
            } else {
                eprintln!(
                    "config already exists at {}, use --force to overwrite it",
                    config_path.display()
                );
            }
            return Ok(());
        }
        Some(Command::ConfigPath) => {
            println!("{}", config_path.display());
            return Ok(());
        }
        None => {}
    }

    let config = Config::load_or_default(&config_path)?;
    let title = format!("Roosty Alarms {}", config.mount_target);
    let app = bootstrap(config)?;

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_title(title.clone()),
        ..Default::default()
    };
    run_native(
        &title,
        native_options,
        Box::new(|_| Ok(Box::new(AlarmView::new(app)))),
    )
    .map_err(|e| e.into())
}
