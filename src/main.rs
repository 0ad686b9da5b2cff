//! CLI entry point for `mailforge`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use mailforge::builder::MessageBuilder;
use mailforge::config::{self, Config};
use mailforge::export::factory::{factory_for, ExporterFactory};
use mailforge::export::quality::Quality;

#[derive(Parser)]
#[command(name = "mailforge", version, about = "Compose messages and run export pipelines")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a message with the fluent builder and print it
    Compose {
        /// Sender address
        #[arg(long = "from", value_name = "ADDR")]
        from: Option<String>,

        /// Primary recipient (repeatable)
        #[arg(long = "to", value_name = "ADDR")]
        to: Vec<String>,

        /// Carbon-copy recipient (repeatable)
        #[arg(long, value_name = "ADDR")]
        cc: Vec<String>,

        /// Blind-copy recipient (repeatable)
        #[arg(long, value_name = "ADDR")]
        bcc: Vec<String>,

        /// Subject line
        #[arg(short, long)]
        subject: Option<String>,

        /// Body text
        #[arg(short, long)]
        body: Option<String>,

        /// Attachment path (repeatable)
        #[arg(short, long = "attach", value_name = "FILE")]
        attachments: Vec<PathBuf>,

        /// Print the message as JSON instead of rendered text
        #[arg(long)]
        json: bool,
    },
    /// Select an export pipeline by quality tier and run it
    Export {
        /// Quality tier: low, high, master (prompts when omitted)
        #[arg(short, long)]
        quality: Option<String>,

        /// Destination directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::load_config();

    // Configure logging: stderr + optional log file
    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    match cli.command {
        Commands::Compose {
            from,
            to,
            cc,
            bcc,
            subject,
            body,
            attachments,
            json,
        } => cmd_compose(&config, from, to, cc, bcc, subject, body, attachments, json),
        Commands::Export { quality, output } => cmd_export(&config, quality.as_deref(), output),
        Commands::Completions { shell } => cmd_completions(shell),
        Commands::Manpage => cmd_manpage(),
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // Try to set up file logging
    let log_dir = config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "mailforge.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Build a message from the CLI arguments and print it.
///
/// Arguments left unset fall back to the configured sender and then to the
/// built-in demonstration values, so a bare `mailforge compose` shows the
/// full builder chain in action.
#[allow(clippy::too_many_arguments)]
fn cmd_compose(
    config: &Config,
    from: Option<String>,
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
    subject: Option<String>,
    body: Option<String>,
    attachments: Vec<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let sender = from.unwrap_or_else(|| {
        if config.compose.default_sender.is_empty() {
            "example@intelligencia.com".to_string()
        } else {
            config.compose.default_sender.clone()
        }
    });
    let to = if to.is_empty() {
        vec!["sender@sendmail.com".to_string()]
    } else {
        to
    };
    let cc = if cc.is_empty() {
        vec!["copied-sender@sendmail.com".to_string()]
    } else {
        cc
    };
    let subject =
        subject.unwrap_or_else(|| "Pretty dope builder pattern example".to_string());
    let body = body.unwrap_or_else(|| "The builder pattern magic is inside".to_string());
    let attachments = if attachments.is_empty() {
        vec![PathBuf::from("somefile.py")]
    } else {
        attachments
    };

    let mut builder = MessageBuilder::new()
        .sender(sender)
        .subject(subject)
        .body(body);
    for addr in to {
        builder = builder.to(addr);
    }
    for addr in cc {
        builder = builder.cc(addr);
    }
    for addr in bcc {
        builder = builder.bcc(addr);
    }
    for path in attachments {
        builder = builder.attachment(path);
    }
    let message = builder.build();

    tracing::info!(
        to = message.to.len(),
        cc = message.cc.len(),
        attachments = message.attachments.len(),
        "Composed message"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&message)?);
    } else {
        println!("Message successfully sent:");
        println!("{}", "-".repeat(24));
        print!("{}", message.render());
    }

    Ok(())
}

/// Resolve a quality tier, obtain its factory, and run both exporters.
fn cmd_export(
    config: &Config,
    quality: Option<&str>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let quality = match quality {
        // An explicit flag that fails to parse is a hard error; only the
        // interactive prompt retries.
        Some(tier) => tier.parse::<Quality>()?,
        None => match config.export.default_quality {
            Some(q) => q,
            None => prompt_quality()?,
        },
    };

    let destination = output.unwrap_or_else(|| config.export.default_output_dir.clone());

    let factory = factory_for(quality);
    run_export(factory.as_ref(), &destination);

    Ok(())
}

/// Prompt on stdin until a known quality tier is entered.
fn prompt_quality() -> anyhow::Result<Quality> {
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter desired output quality (low, high, master): ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed before a quality tier was entered");
        }
        match line.trim().parse::<Quality>() {
            Ok(quality) => return Ok(quality),
            Err(e) => println!("{e}."),
        }
    }
}

/// Run prepare and export for both exporters of a factory.
fn run_export(factory: &dyn ExporterFactory, destination: &std::path::Path) {
    let video = factory.video_exporter();
    let audio = factory.audio_exporter();

    tracing::info!(
        quality = %factory.quality(),
        video = video.codec(),
        audio = audio.codec(),
        "Selected export pipeline"
    );

    println!("{}", video.prepare_export("placeholder_for_type"));
    println!("{}", audio.prepare_export("placeholder_for_type"));
    println!("{}", video.do_export(destination));
    println!("{}", audio.do_export(destination));
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "mailforge", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}
