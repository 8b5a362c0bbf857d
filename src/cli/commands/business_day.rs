use crate::api::KenallApi;
use crate::cli::args::BusinessDayArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output;

/// Execute business-day command
pub async fn execute(
    client: &dyn KenallApi,
    args: &BusinessDayArgs,
    format: OutputFormat,
) -> Result<String> {
    let response = client.get_business_days(args.date).await?;
    output::format_business_day(&response, format)
}
