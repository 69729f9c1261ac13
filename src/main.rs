use anyhow::{Context, Result};
use scaffold::cli::commands::DockerCommand;
use scaffold::cli::output::{print_report, style, CHECK, ROCKET};
use scaffold::cli::{Cli, Command};
use scaffold::docker::{DockerScaffold, EmbeddedTemplates, ProjectPaths, ScaffoldConfig};
use scaffold::execution::{PipelineOutcome, TerminalPrompt};
use scaffold::telemetry;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Docker(cmd) => run_docker(cmd, cli.verbose)?,
    }

    Ok(())
}

fn run_docker(cmd: &DockerCommand, verbose: bool) -> Result<()> {
    let paths = ProjectPaths::resolve(cmd.dir.clone())
        .context("Failed to resolve project directory")?;

    println!(
        "{} Scaffolding Docker into {}",
        ROCKET,
        style(paths.base.display()).bold()
    );

    let config = ScaffoldConfig {
        paths,
        force: cmd.force,
        verbose,
    };
    let docker = DockerScaffold::new(config, EmbeddedTemplates);

    let (outcome, report) = match docker.run(TerminalPrompt) {
        Ok(run) => run,
        Err(e) => {
            fail(&e.to_string(), e.exit_code());
        }
    };

    if verbose {
        print_report(&report)?;
    }

    match outcome {
        PipelineOutcome::Completed => {
            println!(
                "\n{} {} {}",
                CHECK,
                style("docker").bold(),
                style("set up successfully").green()
            );
            Ok(())
        }
        PipelineOutcome::Aborted(cause) => {
            fail(&cause.to_string(), cause.exit_code());
        }
    }
}

/// Report the abort cause and terminate with its exit code
fn fail(message: &str, code: i32) -> ! {
    let argv: Vec<String> = std::env::args().collect();
    telemetry::report_error(&argv, message);
    eprintln!("{}", style(message).red());
    std::process::exit(code);
}
