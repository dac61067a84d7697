use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_report_command, handle_session_command, handle_theme_command, ReportCommands,
    SessionCommands, ThemeAction,
};
use fintrack::config::AppContext;
use fintrack::logging;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Balances, trends, spending and budget status from a finance snapshot",
    long_about = "fintrack reads a snapshot of accounts, transactions and budgets \
                  exported from the finance tracker API and derives summaries from it: \
                  net worth, monthly trends, spending by category and budget consumption."
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// Sign in, sign out or show the stored session
    #[command(subcommand)]
    Session(SessionCommands),

    /// Show or change the color theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let mut ctx = AppContext::init()?;

    match cli.command {
        Some(Commands::Report(cmd)) => {
            handle_report_command(&ctx.settings, cmd)?;
        }
        Some(Commands::Session(cmd)) => {
            handle_session_command(&mut ctx, cmd)?;
        }
        Some(Commands::Theme { action }) => {
            handle_theme_command(&mut ctx, action)?;
        }
        Some(Commands::Config) => {
            let settings = &ctx.settings;
            println!("fintrack Configuration");
            println!("======================");
            println!("Config directory: {}", ctx.paths.base_dir().display());
            println!("Settings file:    {}", ctx.paths.settings_file().display());
            println!("Session file:     {}", ctx.paths.session_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Trend bucketing:     {}", settings.trend_bucketing);
            println!("  Category grouping:   {}", settings.category_grouping);
            println!("  Dashboard window:    {}", settings.dashboard_window);
            println!("  Recent transactions: {}", settings.recent_transactions);
            println!("  Theme:               {}", settings.theme);
            println!();
            println!("Session: {}", ctx.session);
        }
        None => {
            println!("fintrack - finance snapshot reports");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard <snapshot.json>' for an overview.");
        }
    }

    Ok(())
}
