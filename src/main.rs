use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use fxrate::core::log::init_logging;
use fxrate::{ConvertRequest, Wiring};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currency codes
    Convert {
        /// Currency code to convert from (e.g. "USD")
        from: String,

        /// Currency code to convert to (e.g. "EUR")
        to: String,

        /// Amount to convert
        #[arg(short, long, default_value_t = 1.0)]
        amount: f64,

        /// How the converter obtains its HTTP transport
        #[arg(short, long, value_enum, default_value = "injected")]
        wiring: WiringArg,
    },
    /// Create default configuration
    Setup,
}

#[derive(Clone, Copy, ValueEnum)]
enum WiringArg {
    /// Constructor injection
    Injected,
    /// Service-locator resolution
    Located,
}

impl From<WiringArg> for Wiring {
    fn from(arg: WiringArg) -> Wiring {
        match arg {
            WiringArg::Injected => Wiring::Injected,
            WiringArg::Located => Wiring::Located,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxrate::cli::setup::setup(),
        Some(Commands::Convert {
            from,
            to,
            amount,
            wiring,
        }) => {
            let request = ConvertRequest {
                from,
                to,
                wiring: wiring.into(),
            };
            match fxrate::run_convert(&request, cli.config_path.as_deref()).await {
                Ok(rate) => {
                    fxrate::cli::convert::render_conversion(
                        &request.from,
                        &request.to,
                        amount,
                        rate,
                    );
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
