use crate::api::KenallApi;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output;

/// Execute whoami command
pub async fn execute(client: &dyn KenallApi, format: OutputFormat) -> Result<String> {
    let response = client.get_whoami().await?;
    output::format_whoami(&response, format)
}
