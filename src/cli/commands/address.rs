use crate::api::KenallApi;
use crate::cli::args::AddressArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output;

/// Execute address command
pub async fn execute(
    client: &dyn KenallApi,
    args: &AddressArgs,
    format: OutputFormat,
) -> Result<String> {
    let response = client.get_address(args.postal_code.trim()).await?;
    output::format_addresses(&response, format)
}
