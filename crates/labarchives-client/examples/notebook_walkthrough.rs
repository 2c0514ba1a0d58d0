/*
[INPUT]:  Credential from LABARCHIVES_* environment variables, user login
[OUTPUT]: User's default notebook and its top-level tree printed to stdout
[POS]:    Examples - end-to-end call flow demonstration
[UPDATE]: When operation signatures change
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use labarchives_client::{Credential, LabArchivesClient, Node, ROOT_TREE_ID, user_notebooks};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "notebook_walkthrough", about = "Log in and list the default notebook")]
struct Cli {
    #[arg(long = "login", env = "LABARCHIVES_LOGIN")]
    login: String,
    #[arg(long = "password", env = "LABARCHIVES_PASSWORD")]
    password: String,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

/// Example: authenticate a user, find their default notebook, list its top level
#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let credential = Credential::from_env().context("load credential")?;
    let client = LabArchivesClient::new().context("create client")?;
    info!(base_url = %credential.base_url, "client ready");

    let access = client
        .access_info(&credential, &args.login, &args.password)
        .await
        .map_err(|err| anyhow!("login failed: {}", err.error_message()))?;
    let uid = access
        .path(&["users", "id"])
        .and_then(Node::text)
        .context("response has no users/id")?
        .to_string();
    info!(%uid, "logged in");

    let profile = client.user_info_via_id(&credential, &uid, true).await?;
    for notebook in user_notebooks(&profile) {
        let marker = if notebook.is_default { "*" } else { " " };
        println!("{marker} {} ({})", notebook.name, notebook.id);
    }

    let Some(default) = profile.default_notebook() else {
        println!("no default notebook");
        return Ok(());
    };
    let nbid = default
        .get("id")
        .and_then(Node::text)
        .context("default notebook has no id")?;

    let tree = client
        .get_tree_level(&credential, &uid, nbid, ROOT_TREE_ID)
        .await?;
    println!("{}", serde_json::to_string_pretty(&tree)?);

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
