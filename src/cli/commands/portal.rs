use crate::cli::OutputFormat;
use crate::cli::utils::{output_success, output_value, parse_query_pairs};
use crate::client::{PortalClient, SessionService};

fn client(url: &str, token: Option<String>) -> anyhow::Result<PortalClient> {
    let client = PortalClient::new(url)?;
    Ok(match token {
        Some(token) => client.with_token(&token),
        None => client,
    })
}

pub async fn session(url: &str, token: Option<String>, output_format: OutputFormat) -> anyhow::Result<()> {
    let service = SessionService::new(client(url, token)?);

    match service.init().await? {
        Some(user) => output_value(&output_format, &serde_json::to_value(user)?),
        None => output_success(&output_format, "No active session", None),
    }
}

pub async fn login(url: &str, email: &str, password: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let service = SessionService::new(client(url, None)?);
    let user = service.login(email, password).await?;
    let token = service
        .client()
        .token()
        .ok_or_else(|| anyhow::anyhow!("Portal did not set a session cookie"))?;

    output_success(
        &output_format,
        &format!("Logged in as {} ({:?})", user.id, user.role),
        Some(serde_json::json!({ "user": user, "token": token })),
    )?;
    if let OutputFormat::Text = output_format {
        println!("export SILOAM_TOKEN={}", token);
    }
    Ok(())
}

pub async fn get(
    url: &str,
    path: &str,
    query: &[String],
    token: Option<String>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let query = parse_query_pairs(query)?;
    let value = client(url, token)?.get_json(path, &query).await?;
    output_value(&output_format, &value)
}
