use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use spendpace::cli::{
    handle_budget_command, handle_category_command, handle_dashboard, handle_expense_command,
    handle_goal_command, handle_report_command, reference_instant, BudgetCommands,
    CategoryCommands, CommandContext, ExpenseCommands, GoalCommands, ReportCommands,
};
use spendpace::config::{paths::SpendPacePaths, settings::Settings};
use spendpace::export::OutputFormat;
use spendpace::models::OwnerId;
use spendpace::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "spendpace",
    author = "Kaylee Beyene",
    version,
    about = "Expense tracking with budget pacing",
    long_about = "SpendPace records your expenses and tells you how fast you are \
                  spending your monthly budget, how each category measures up \
                  against its limit, and how close your savings goals are."
)]
struct Cli {
    /// Owner whose records to use (defaults to the configured owner)
    #[arg(long, global = true)]
    owner: Option<String>,

    /// Evaluate as if it were this date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create data directories, settings and default categories
    Init,

    /// Show the spending dashboard
    #[command(alias = "dash")]
    Dashboard {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "spendpace=debug" } else { "spendpace=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = SpendPacePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let now = reference_instant(cli.today.as_deref(), Local::now().naive_local())?;
    let ctx = CommandContext::new(settings, cli.owner.map(OwnerId::from), now);

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing SpendPace at: {}", paths.base_dir().display());
            let mut settings = ctx.settings.clone();
            settings.owner_id = ctx.owner.clone();
            let created = initialize_storage(&paths, &settings)?;
            println!("Initialization complete!");
            if created > 0 {
                println!();
                println!("Default categories have been created:");
                println!("  Food, Transportation, Entertainment, Education, Shopping, Bills, Other");
            }
            println!();
            println!("Run 'spendpace expense add AMOUNT DESCRIPTION -c CATEGORY' to record an expense.");
        }
        Some(Commands::Dashboard { format }) => {
            handle_dashboard(&storage, &ctx, format)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &ctx, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, &ctx, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &ctx, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &ctx, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &ctx, cmd)?;
        }
        Some(Commands::Config) => {
            let settings = &ctx.settings;
            println!("SpendPace Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", if paths.is_initialized() { "yes" } else { "no" });
            println!();
            println!("Settings:");
            println!("  Owner:            {}", ctx.owner);
            println!("  Currency:         {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default budget:   {}", settings.format_money(settings.default_monthly_budget));
            println!("  Trend months:     {}", settings.trend_months);
            println!("  Recent expenses:  {}", settings.recent_expense_count);
        }
        None => {
            println!("SpendPace - expense tracking with budget pacing");
            println!();
            println!("Run 'spendpace init' to get started.");
            println!("Run 'spendpace --help' for usage information.");
        }
    }

    Ok(())
}
