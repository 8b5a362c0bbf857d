use crate::api::KenallApi;
use crate::cli::args::CorporationArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output;

/// Execute corporation command
pub async fn execute(
    client: &dyn KenallApi,
    args: &CorporationArgs,
    format: OutputFormat,
) -> Result<String> {
    let response = client.get_corporation(args.corporate_number.trim()).await?;
    output::format_corporation(&response, format)
}
