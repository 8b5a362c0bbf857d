use crate::api::KenallApi;
use crate::cli::args::NormalizeArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output;

/// Execute normalize command
pub async fn execute(
    client: &dyn KenallApi,
    args: &NormalizeArgs,
    format: OutputFormat,
) -> Result<String> {
    let response = client.get_normalize_address(&args.text()).await?;
    output::format_query(&response, format)
}
