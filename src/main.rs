//! Headless command-line driver for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_simulator::{
    build_simulator,
    config::{CliOverrides, Settings},
    game_of_life::{create_example_patterns, io::is_pattern_file, load_pattern_from_file, save_pattern_to_file},
    telemetry::init_logging,
    utils::{ColorOutput, GridFormatter},
    Simulator,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

#[derive(Parser)]
#[command(name = "life")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance a board for a number of generations and save the result
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board width for an empty board (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Board height for an empty board (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Saved board (.gols) or pattern (.txt) to start from (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to save the final board (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every generation
        #[arg(long)]
        show_evolution: bool,
    },

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print a saved board or pattern with statistics
    Show {
        /// Saved board (.gols) or pattern (.txt)
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            config,
            width,
            height,
            generations,
            input,
            output,
            show_evolution,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                generations,
                input,
                output,
                show_evolution,
            };
            run_command(&config, &overrides)
        }
        Commands::Setup { directory, force } => {
            init_logging("info")?;
            setup_command(&directory, force)
        }
        Commands::Show { file } => {
            init_logging("info")?;
            show_command(&file)
        }
    }
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let config_found = config_path.exists();
    let mut settings = if config_found {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Settings::default()
    };
    init_logging(&settings.logging.level)?;
    if !config_found {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
    }

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    debug!(?settings, "Effective configuration");

    let mut sim = build_simulator(&settings).context("Failed to build starting board")?;
    let generations = settings.simulation.generations;

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Running {} generation(s) on a {}x{} board",
            generations,
            sim.width(),
            sim.height()
        ))
    );

    if settings.output.show_evolution {
        print_generation(&sim);
    }

    let start_time = Instant::now();
    for _ in 0..generations {
        sim.advance();
        if settings.output.show_evolution {
            print_generation(&sim);
        }
    }
    let elapsed = start_time.elapsed();

    if !settings.output.show_evolution {
        println!("{}", GridFormatter::format_grid_compact(sim.grid()));
    }
    println!("{}", GridFormatter::format_statistics(&sim));

    let state_file = &settings.output.state_file;
    if is_pattern_file(state_file) {
        save_pattern_to_file(sim.grid(), state_file)?;
    } else {
        sim.save_to_file(state_file)?;
    }

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Finished in {:.3}s, board saved to {}",
            elapsed.as_secs_f64(),
            state_file.display()
        ))
    );

    Ok(())
}

fn print_generation(sim: &Simulator) {
    println!("Generation {}:", sim.generation());
    println!("{}", GridFormatter::format_grid_compact(sim.grid()));
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");
    let output_dir = directory.join("output");

    for dir in [&config_dir, &patterns_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    let glider_config = {
        let mut settings = Settings::default();
        settings.simulation.generations = 20;
        settings.input.initial_state = Some(PathBuf::from("input/patterns/glider.txt"));
        settings.output.state_file = PathBuf::from("output/glider.gols");
        settings.output.show_evolution = true;
        settings
    };
    glider_config.to_file(config_dir.join("glider.yaml"))?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own patterns to {}", patterns_dir.display());
    println!("3. Run: life run --config config/glider.yaml");

    Ok(())
}

fn show_command(file: &Path) -> Result<()> {
    let sim = if is_pattern_file(file) {
        Simulator::from_grid(load_pattern_from_file(file)?)
    } else {
        let mut sim = Simulator::new(1, 1)?;
        sim.load_from_file(file)?;
        sim
    };

    println!("{}", GridFormatter::format_grid_with_coords(sim.grid()));
    println!("{}", GridFormatter::format_statistics(&sim));

    Ok(())
}
