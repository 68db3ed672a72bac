//! CLI entrypoint for Token Ideator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use clap::{CommandFactory, Parser};
use ideator_application::{
    CheckUniquenessUseCase, GenerateBrandingInput, GenerateBrandingUseCase, GenerationLogger,
    GenerationParams, LookupTokenUseCase, NoGenerationLogger, NoTrendingTopics, OfflineRegistry,
    TokenRegistry, TrendingTopics,
};
use ideator_domain::{
    OutputFormat, analyze_idea, generate_alternatives, rng_from_seed, trending_ideas,
};
use ideator_infrastructure::{
    CoinGeckoRegistry, ConfigLoader, FileConfig, JsonlGenerationLogger, RedditTrendingTopics,
};
use ideator_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting Token Ideator");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        println!();
        println!("{}", toml::to_string_pretty(&file_config)?);
        return Ok(());
    }

    let issues = file_config.validate();
    for issue in &issues {
        warn!("{}", issue);
        eprintln!("{}", issue);
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        file_config.output.format,
        file_config.output.color,
        cli.quiet,
    );
    if !output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut params = file_config.generation_params();
    if cli.seed.is_some() {
        params = params.with_seed(cli.seed);
    }

    // Ctrl-C aborts pending network calls; their fallbacks are used
    let cancellation = CancellationToken::new();
    {
        let token = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });
    }

    // === Dependency Injection ===
    let offline = cli.offline || !command.uses_network();
    let registry = build_registry(&file_config, offline)?;

    match command {
        Command::Generate { idea } => {
            let trends = build_trends(&file_config, offline)?;
            let logger = build_generation_logger(&file_config);
            run_generate(
                idea.join(" "),
                registry,
                trends,
                logger,
                params,
                cancellation,
                output,
            )
            .await?;
        }
        Command::Check { name, symbol } => {
            let use_case = CheckUniquenessUseCase::new(registry, params.registry_timeout)
                .with_cancellation(cancellation);
            let verdict = use_case.execute(&name, &symbol).await?;
            print_result(output.format, &verdict, || {
                ConsoleFormatter::format_verdict(&name, &symbol, &verdict)
            });
        }
        Command::Metadata { symbol } => {
            let use_case = LookupTokenUseCase::new(registry, params.registry_timeout)
                .with_cancellation(cancellation);
            let metadata = use_case.metadata(&symbol).await?;
            print_result(output.format, &metadata, || {
                ConsoleFormatter::format_metadata(&symbol, &metadata)
            });
        }
        Command::Suggest { name, symbol } => {
            let use_case = LookupTokenUseCase::new(registry, params.registry_timeout)
                .with_cancellation(cancellation);
            let suggestions = use_case.suggest_symbols(&name, &symbol).await?;
            print_result(output.format, &suggestions, || {
                ConsoleFormatter::format_suggestions(&suggestions)
            });
        }
        Command::Alternatives { count } => {
            let mut rng = rng_from_seed(params.seed);
            let alternatives = generate_alternatives(count, &mut rng)?;
            print_result(output.format, &alternatives, || {
                ConsoleFormatter::format_alternatives(&alternatives)
            });
        }
        Command::Trends { year } => {
            let year = match year {
                Some(year) => year,
                None => u16::try_from(chrono::Utc::now().year())
                    .context("current year does not fit in u16")?,
            };
            let ideas = trending_ideas(year);
            print_result(output.format, &ideas, || {
                ConsoleFormatter::format_trending(&ideas)
            });
        }
        Command::Analyze { idea } => {
            let mut rng = rng_from_seed(params.seed);
            let analysis = analyze_idea(&idea.join(" "), &mut rng);
            print_result(output.format, &analysis, || {
                ConsoleFormatter::format_analysis(&analysis)
            });
        }
    }

    Ok(())
}

async fn run_generate(
    idea: String,
    registry: Arc<dyn TokenRegistry>,
    trends: Arc<dyn TrendingTopics>,
    logger: Arc<dyn GenerationLogger>,
    params: GenerationParams,
    cancellation: CancellationToken,
    output: OutputConfig,
) -> Result<()> {
    let use_case = GenerateBrandingUseCase::new(registry, trends, params)
        .with_generation_logger(logger)
        .with_cancellation(cancellation);
    let input = GenerateBrandingInput::new(idea);

    // Execute with or without progress reporting
    let result = if output.show_progress {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    } else {
        use_case.execute(input).await
    };

    let generated = match result {
        Ok(generated) => generated,
        Err(e) if e.is_input_error() => bail!("{}", e),
        Err(e) => return Err(e).context("generation failed"),
    };

    println!("{}", ConsoleFormatter.render(&generated, output.format));
    Ok(())
}

fn print_result<T, F>(format: OutputFormat, value: &T, console: F)
where
    T: serde::Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::json(value)),
        OutputFormat::Full | OutputFormat::Summary => print!("{}", console()),
    }
}

fn build_registry(config: &FileConfig, offline: bool) -> Result<Arc<dyn TokenRegistry>> {
    if offline {
        return Ok(Arc::new(OfflineRegistry));
    }
    let registry = CoinGeckoRegistry::new(
        config.registry.base_url.clone(),
        Duration::from_secs(config.registry.timeout_seconds),
    )?;
    Ok(Arc::new(registry))
}

fn build_trends(config: &FileConfig, offline: bool) -> Result<Arc<dyn TrendingTopics>> {
    if offline || !config.trends.enabled {
        return Ok(Arc::new(NoTrendingTopics));
    }
    let trends = RedditTrendingTopics::new(
        config.trends.url.clone(),
        Duration::from_secs(config.trends.timeout_seconds),
    )?;
    Ok(Arc::new(trends))
}

fn build_generation_logger(config: &FileConfig) -> Arc<dyn GenerationLogger> {
    match config
        .logging
        .generation_log
        .as_ref()
        .and_then(JsonlGenerationLogger::open)
    {
        Some(logger) => {
            info!("Appending generations to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoGenerationLogger),
    }
}

/// Initialize logging based on verbosity level, optionally mirrored to a
/// daily-rolling file.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "token-ideator.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
