//! Command handlers

use crate::cli::{Cli, Commands};
use crate::logging::init_logging;
use crate::output::{output_comuna, output_comunas};
use chrono::Local;
use comuna_app::{open_comuna_repo, Config};
use comuna_domain::{parse_date, validate_date, ComunaRepository};
use comuna_infra::FileComunaRepository;
use comuna_types::{Comuna, LoadPolicy, OutputFormat, Result};
use log::{debug, warn};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let _logger = init_logging(cli.verbose)?;

    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.data_file.is_some() {
        config.data_file = cli.data_file.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Add {
            id,
            zone,
            population,
            name,
            code,
            date,
        } => {
            let registration_date = match date {
                Some(text) => parse_date(&text)?,
                None => Local::now().date_naive(),
            };
            let comuna = Comuna::new(id, zone, population, name, code, registration_date);
            open_repo(&config)?.add_comuna(comuna.clone());
            output_comuna(output_format, Some(&comuna), "")
        }

        Commands::List => output_comunas(output_format, &open_repo(&config)?.find_all()),

        Commands::Zone { zone } => {
            output_comunas(output_format, &open_repo(&config)?.find_by_zone(&zone))
        }

        Commands::Id { id } => {
            let comuna = open_repo(&config)?.require_by_id(id)?;
            output_comuna(output_format, Some(&comuna), "")
        }

        Commands::Name { name } => output_comuna(
            output_format,
            open_repo(&config)?.find_by_name(&name).as_ref(),
            &format!("No comuna named '{}'", name),
        ),

        Commands::Demo => cmd_demo(&mut open_repo(&config)?, output_format),

        Commands::Config {
            show,
            set_data_file,
            set_on_malformed,
            set_output,
            reset,
        } => cmd_config(show, set_data_file, set_on_malformed, set_output, reset),
    }
}

fn open_repo(config: &Config) -> Result<FileComunaRepository> {
    debug!("Opening store {}", config.store_path().display());
    open_comuna_repo(config)
}

/// Sample session against the real store
fn cmd_demo(repo: &mut impl ComunaRepository, output_format: OutputFormat) -> Result<()> {
    repo.add_comuna(Comuna::new(
        1,
        "Norte",
        10000,
        "Los Colores",
        1,
        Local::now().date_naive(),
    ));

    println!("Comunas in zone Norte:");
    output_comunas(output_format, &repo.find_by_zone("Norte"))?;

    println!("\nComuna with id 1:");
    output_comuna(
        output_format,
        repo.find_by_id(1).as_ref(),
        "Requested comuna not found",
    )?;

    println!("\nComuna named 'Comuna Nueva':");
    output_comuna(
        output_format,
        repo.find_by_name("Comuna Nueva").as_ref(),
        "Requested comuna not found",
    )?;

    if let Err(e) = repo.require_by_id(999) {
        warn!("{}", e);
    }

    if let Err(e) = validate_date(-1999, -1, -2) {
        warn!("{}", e);
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_data_file: Option<PathBuf>,
    set_on_malformed: Option<LoadPolicy>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_data_file {
        config.data_file = Some(path);
        modified = true;
    }

    if let Some(policy) = set_on_malformed {
        config.on_malformed = policy;
        modified = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
