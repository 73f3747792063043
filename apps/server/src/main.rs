use anyhow::Context;
use clap::{Parser, Subcommand};
use nexglab_auth::{Authenticator, Gate};
use nexglab_config::{load as load_config, AppConfig};
use nexglab_runtime::{telemetry, PortalServices};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "nexglab")]
#[command(about = "NEXGlab portal (serves HTTP by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Run an email through one of the access gates
    CheckEmail {
        email: String,
        /// general, institutional or university
        #[arg(long, default_value = "general")]
        gate: Gate,
    },
    /// Print the paths that require a session
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server().await,
        Commands::CheckEmail { email, gate } => {
            let config = load_config().context("failed to load configuration")?;
            let verdict = check_email(&config, gate, &email)?;
            println!("{verdict}");
            Ok(())
        }
        Commands::Routes => {
            let config = load_config().context("failed to load configuration")?;
            print!("{}", describe_routes(&config));
            Ok(())
        }
    }
}

async fn run_server() -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    info!("starting NEXGlab portal");

    let config = load_config().context("failed to load configuration")?;

    let services = PortalServices::initialise(&config).context("failed to initialise portal")?;

    let address = services.address().to_string();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    axum::serve(listener, services.into_router())
        .with_graceful_shutdown(nexglab_runtime::shutdown_signal())
        .await
        .context("http server error")?;

    info!("portal shut down");
    Ok(())
}

fn check_email(config: &AppConfig, gate: Gate, email: &str) -> anyhow::Result<String> {
    let authenticator = Authenticator::new(config.auth.clone());
    let credential = authenticator
        .admit(gate, email)
        .with_context(|| format!("{gate} gate rejected the address"))?;

    let session = if credential.gate().persists_session() {
        "opens a session"
    } else {
        "no session"
    };
    Ok(format!("accepted by the {gate} gate ({session})"))
}

fn describe_routes(config: &AppConfig) -> String {
    let authenticator = Authenticator::new(config.auth.clone());
    let mut out = String::from("protected paths:\n");
    for matcher in authenticator.protected_paths().matchers() {
        out.push_str(&format!("  {matcher}\n"));
    }
    out.push_str(&format!("redirect without session: {}\n", authenticator.fallback_path()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_email_reports_session_only_for_institutional_gate() {
        let config = AppConfig::default();

        let verdict = check_email(&config, Gate::Institutional, "a@enstp.edu.dz").unwrap();
        assert_eq!(verdict, "accepted by the institutional gate (opens a session)");

        let verdict = check_email(&config, Gate::General, "a@NEXGlab.edu.dz").unwrap();
        assert_eq!(verdict, "accepted by the general gate (no session)");
    }

    #[test]
    fn check_email_rejection_names_the_gate() {
        let error = check_email(&AppConfig::default(), Gate::University, "a@enstp.edu.dz")
            .unwrap_err();
        let message = format!("{error:#}");
        assert!(message.contains("university gate rejected the address"));
        assert!(message.contains(".NEXGlap@enstp.edu.dz"));
    }

    #[test]
    fn describe_routes_lists_matchers_and_fallback() {
        let text = describe_routes(&AppConfig::default());
        assert!(text.contains("  /enstp/ci/*\n"));
        assert!(text.contains("  */tp-geologie*\n"));
        assert!(text.ends_with("redirect without session: /enstp\n"));
    }

    #[test]
    fn cli_parses_gate_names() {
        let cli = Cli::try_parse_from(["nexglab", "check-email", "a@b", "--gate", "institutional"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::CheckEmail { gate: Gate::Institutional, .. })
        ));
        assert!(Cli::try_parse_from(["nexglab", "check-email", "a@b", "--gate", "admin"]).is_err());
    }
}
