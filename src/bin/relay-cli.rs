use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Exercise a running Jira relay from the command line", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Connection {
    /// Jira Cloud host, e.g. your-team.atlassian.net
    #[arg(long, env = "JIRA_DOMAIN")]
    domain: String,

    #[arg(long, env = "JIRA_EMAIL")]
    email: String,

    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true)]
    api_token: String,

    #[arg(long, env = "JIRA_PROJECT")]
    project: String,
}

impl Connection {
    fn to_config(&self) -> Value {
        json!({
            "domain": self.domain,
            "email": self.email,
            "apiToken": self.api_token,
            "projectKey": self.project,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay liveness
    Health,
    /// Validate credentials and create permission for a project
    Validate(Connection),
    /// List users assignable in the project
    Users(Connection),
    /// List the project's epics
    Epics(Connection),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::Health => client.get(format!("{}/health", cli.url)).send().await?,
        Commands::Validate(conn) => post(&client, &cli.url, "validate", &conn).await?,
        Commands::Users(conn) => post(&client, &cli.url, "users", &conn).await?,
        Commands::Epics(conn) => post(&client, &cli.url, "issues", &conn).await?,
    };

    print_response(res).await
}

async fn post(
    client: &reqwest::Client,
    base: &str,
    route: &str,
    conn: &Connection,
) -> Result<reqwest::Response, reqwest::Error> {
    client
        .post(format!("{base}/api/jira/{route}"))
        .json(&json!({ "config": conn.to_config() }))
        .send()
        .await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;
    let rendered = serde_json::to_string_pretty(&json)?;

    if status.is_success() {
        println!("{rendered}");
    } else {
        eprintln!("Error: relay returned status {status}");
        eprintln!("{rendered}");
    }
    Ok(())
}
