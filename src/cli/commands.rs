use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Demo};
use crate::cli::error::CliResult;
use crate::config::Settings;
use crate::demo;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let demos: Vec<Demo> = match cli.only {
        Some(only) => vec![only],
        None => Demo::ALL.to_vec(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out, &settings, &demos)?;
    out.flush()?;
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.render {
        settings.render_tree = true;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}
