use std::io::{self, Write};

use clap::{ArgAction, Parser};
use fibonacci_sequence::{GeneratorConfig, Sequence, SequenceLength};
use tracing::info;

/// Print Fibonacci sequences, one per line.
#[derive(Debug, Parser)]
#[command(name = "fibseq", version, about)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Refuse lengths above this value
    #[arg(long, env = "FIBSEQ_MAX_LENGTH")]
    max_length: Option<usize>,

    /// Sequence lengths to generate (each at least 2)
    #[arg(default_values = ["2", "5", "10"])]
    lengths: Vec<SequenceLength>,
}

impl Cli {
    fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.config();
        info!(?config, count = self.lengths.len(), "generating sequences");

        write_sequences(&self.lengths, &config, &mut io::stdout().lock())
    }

    fn config(&self) -> GeneratorConfig {
        self.max_length
            .map_or_else(GeneratorConfig::default, |max| {
                GeneratorConfig::default().with_max_length(max)
            })
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Writes each sequence on its own line, stopping at the first failure.
fn write_sequences(
    lengths: &[SequenceLength],
    config: &GeneratorConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for &length in lengths {
        let sequence = Sequence::generate_with(length, config)?;
        writeln!(out, "{sequence}")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
