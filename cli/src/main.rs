use clap::Parser;
use std::process::ExitCode;
use wintheme::ThemeRegistry;
use wintheme_cli::cli::{Cli, Command};
use wintheme_cli::{commands, config, logger};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut app_config = config::load_config(cli.config.as_deref())?;
    logger::setup_logger(app_config.logging(), cli.verbose)?;

    if let Some(dir) = cli.themes_dir {
        app_config.registry_mut().themes_dir = Some(dir);
    }
    if let Some(theme) = cli.theme {
        app_config.registry_mut().window_theme = theme;
    }
    let load_registry = || ThemeRegistry::load(app_config.registry());

    match cli.command.unwrap_or(Command::List) {
        Command::List => print!("{}", commands::render_list(&load_registry())),
        Command::Show { name: None } => {
            let registry = load_registry();
            print!("{}", commands::render_theme(&registry.active_theme()));
        }
        Command::Show { name: Some(name) } => match load_registry().theme(&name) {
            Some(theme) => print!("{}", commands::render_theme(&theme)),
            None => {
                eprintln!("Unknown window theme: {name}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Check { file } => {
            let result = commands::check_file(&file);
            print!("{}", commands::render_check(&file, &result));
            if result.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
