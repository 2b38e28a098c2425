use campus_auth::create_access_token;
use campus_cli::render;
use campus_config::{DatabaseConfig, JwtConfig};
use campus_core::access::resolve_user_access;
use campus_core::capabilities::capabilities_for;
use campus_core::department::department_capabilities_for;
use campus_db::{PgDirectory, init_db_pool};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "campus-cli")]
#[command(about = "Campus CLI - Access policy tools for the Campus portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the portal capabilities granted to a role
    Capabilities {
        /// Role identifier (student, teacher, faculty, admin, super_admin, parent, alumni)
        #[arg(short = 'r', long)]
        role: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the department capabilities granted to a membership role
    DepartmentCapabilities {
        /// Membership role (hod, admin, member)
        #[arg(short = 'r', long)]
        role: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the navigation menu visible to a role
    Menu {
        /// Role identifier; omit to preview the anonymous menu
        #[arg(short = 'r', long)]
        role: Option<String>,
    },
    /// Mint a bearer token for local testing
    IssueToken {
        /// Subject user id
        #[arg(short = 'u', long)]
        user_id: Uuid,

        /// Email claim
        #[arg(short = 'e', long)]
        email: String,
    },
    /// Resolve a user's capabilities from the database
    Whoami {
        /// Profile id to resolve
        #[arg(short = 'u', long)]
        user_id: Uuid,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Capabilities { role, json } => handle_capabilities(&role, json),
        Commands::DepartmentCapabilities { role, json } => {
            handle_department_capabilities(&role, json)
        }
        Commands::Menu { role } => println!("{}", render::menu(role.as_deref())),
        Commands::IssueToken { user_id, email } => handle_issue_token(user_id, &email),
        Commands::Whoami { user_id } => handle_whoami(user_id).await,
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_capabilities(role: &str, json: bool) {
    let caps = capabilities_for(Some(role));
    if json {
        print_json(&caps);
    } else {
        println!("{}", render::capabilities(role, &caps));
    }
}

fn handle_department_capabilities(role: &str, json: bool) {
    let caps = department_capabilities_for(Some(role));
    if json {
        print_json(&caps);
    } else {
        println!("{}", render::department_capabilities(role, &caps));
    }
}

fn handle_issue_token(user_id: Uuid, email: &str) {
    let jwt_config = match JwtConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    match create_access_token(user_id, email, &jwt_config) {
        Ok(token) => {
            println!("{}", token);
            eprintln!(
                "✅ Token for {} expires in {} seconds",
                email, jwt_config.access_token_expiry
            );
        }
        Err(e) => {
            eprintln!("❌ Error issuing token: {}", e.error);
            std::process::exit(1);
        }
    }
}

async fn handle_whoami(user_id: Uuid) {
    let pool = match init_db_pool(&DatabaseConfig::from_env()).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let access = resolve_user_access(&PgDirectory::new(pool), Some(user_id)).await;
    match access.role.as_deref() {
        Some(role) => println!("{}", render::capabilities(role, &access.capabilities)),
        None => {
            eprintln!("❌ No role resolved for {}, everything denied", user_id);
            std::process::exit(1);
        }
    }
}
