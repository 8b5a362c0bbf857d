use crate::api::KenallApi;
use crate::cli::args::CityArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output;

/// Execute city command
pub async fn execute(
    client: &dyn KenallApi,
    args: &CityArgs,
    format: OutputFormat,
) -> Result<String> {
    let response = client.get_city(args.prefecture_code.trim()).await?;
    output::format_cities(&response, format)
}
