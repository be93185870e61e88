use clap::{Parser, Subcommand};
use regform::{config::AppConfig, db, AppState};

#[derive(Parser)]
#[command(name = "regform-cli")]
#[command(about = "CLI tool for inspecting stored registrations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Registration commands
    Registrations {
        #[command(subcommand)]
        command: RegistrationCommands,
    },
}

#[derive(Subcommand)]
enum RegistrationCommands {
    /// List stored registrations, newest first
    List {
        /// Maximum number of registrations to display
        #[arg(short, long, default_value_t = 100)]
        limit: i64,

        /// Offset for pagination
        #[arg(short = 'o', long, default_value_t = 0)]
        offset: i64,
    },

    /// Show how many registrations are stored
    Count,

    /// Check whether an email address is already registered
    Check {
        /// Email address, compared exactly as typed
        #[arg(short, long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Connect to database
    let pool = db::create_pool(&config.database_url).await?;

    // Run migrations
    db::run_migrations(&pool).await?;

    let registration_service = AppState::new(pool).registration_service;

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Registrations { command } => match command {
            RegistrationCommands::List { limit, offset } => {
                match registration_service
                    .list_registrations(Some(limit), Some(offset))
                    .await
                {
                    Ok(registrations) => {
                        if registrations.is_empty() {
                            println!("No registrations found.");
                        } else {
                            println!(
                                "{:<5} {:<25} {:<25} {:<25}",
                                "ID", "First name", "Last name", "Created (UTC)"
                            );
                            println!("{}", "-".repeat(82));
                            for registration in registrations {
                                println!(
                                    "{:<5} {:<25} {:<25} {:<25}",
                                    registration.id,
                                    registration.first_name,
                                    registration.last_name,
                                    registration.created_utc.format("%Y-%m-%d %H:%M:%S")
                                );
                            }
                        }
                    }
                    Err(err) => {
                        eprintln!("❌ Failed to list registrations: {}", err);
                        std::process::exit(1);
                    }
                }
            }

            RegistrationCommands::Count => match registration_service.count_registrations().await
            {
                Ok(count) => println!("{} registration(s) stored", count),
                Err(err) => {
                    eprintln!("❌ Failed to count registrations: {}", err);
                    std::process::exit(1);
                }
            },

            RegistrationCommands::Check { email } => {
                match registration_service.email_exists(&email).await {
                    Ok(true) => println!("✅ '{}' is registered", email),
                    Ok(false) => println!("ℹ️  '{}' is not registered", email),
                    Err(err) => {
                        eprintln!("❌ Failed to check email: {}", err);
                        std::process::exit(1);
                    }
                }
            }
        },
    }

    Ok(())
}
