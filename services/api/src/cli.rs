use crate::demo::{run_demo, run_rank, run_slots, RankArgs, SlotsArgs};
use crate::server;
use algoseat::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AlgoSeat",
    about = "Rank school applicants and manage enrollment slots from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the applicant ranking table
    Rank(RankArgs),
    /// Print slot utilization for the roster
    Slots(SlotsArgs),
    /// Walk through the administrator dashboard with the sample roster
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load the roster from a CSV export instead of the sample data
    #[arg(long)]
    pub(crate) roster: Option<std::path::PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Rank(args) => run_rank(args),
        Command::Slots(args) => run_slots(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["algoseat-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_rank_options() {
        let cli = Cli::try_parse_from(["algoseat-api", "rank", "--roster", "roster.csv", "--limit", "5"])
            .expect("parses");
        match cli.command {
            Some(Command::Rank(args)) => {
                assert_eq!(args.limit, Some(5));
                assert_eq!(
                    args.roster.as_deref(),
                    Some(std::path::Path::new("roster.csv"))
                );
            }
            other => panic!("expected rank command, got {other:?}"),
        }
    }

    #[test]
    fn parses_slot_capacity_override() {
        let cli = Cli::try_parse_from(["algoseat-api", "slots", "--total-slots", "12"]).expect("parses");
        assert!(matches!(
            cli.command,
            Some(Command::Slots(SlotsArgs {
                total_slots: Some(12),
                ..
            }))
        ));
    }
}
