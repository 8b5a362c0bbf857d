use log::debug;

use crate::api::types::GetHolidaysResponse;
use crate::api::KenallApi;
use crate::cli::args::HolidaysArgs;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output;

/// Execute holidays command
pub async fn execute(
    client: &dyn KenallApi,
    args: &HolidaysArgs,
    format: OutputFormat,
) -> Result<String> {
    let response = fetch(client, args).await?;
    output::format_holidays(&response, format)
}

async fn fetch(client: &dyn KenallApi, args: &HolidaysArgs) -> Result<GetHolidaysResponse> {
    match (args.year, args.from, args.to) {
        (Some(year), _, _) => {
            debug!("Fetching holidays of {}", year);
            client.get_holidays_by_year(year).await
        }
        (None, Some(from), Some(to)) => {
            debug!("Fetching holidays from {} to {}", from, to);
            client.get_holidays_by_period(from, to).await
        }
        _ => client.get_holidays().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::*;
    use crate::error::KenallError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    /// Records which holiday operation was called.
    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn record(&self, call: String) -> Result<GetHolidaysResponse> {
            self.calls.lock().unwrap().push(call);
            Ok(GetHolidaysResponse {
                holidays: vec![Holiday::new(
                    "元日",
                    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                )],
            })
        }
    }

    #[async_trait]
    impl KenallApi for RecordingApi {
        async fn get_address(&self, _: &str) -> Result<GetAddressResponse> {
            Err(KenallError::NotFound)
        }
        async fn get_city(&self, _: &str) -> Result<GetCityResponse> {
            Err(KenallError::NotFound)
        }
        async fn get_corporation(&self, _: &str) -> Result<GetCorporationResponse> {
            Err(KenallError::NotFound)
        }
        async fn get_whoami(&self) -> Result<GetWhoamiResponse> {
            Err(KenallError::NotFound)
        }
        async fn get_holidays(&self) -> Result<GetHolidaysResponse> {
            self.record("all".to_string())
        }
        async fn get_holidays_by_year(&self, year: i32) -> Result<GetHolidaysResponse> {
            self.record(format!("year={}", year))
        }
        async fn get_holidays_by_period(
            &self,
            from: NaiveDate,
            to: NaiveDate,
        ) -> Result<GetHolidaysResponse> {
            self.record(format!("from={}&to={}", from, to))
        }
        async fn get_normalize_address(&self, _: &str) -> Result<GetNormalizeAddressResponse> {
            Err(KenallError::NotFound)
        }
        async fn get_business_days(&self, _: NaiveDate) -> Result<GetBusinessDaysResponse> {
            Err(KenallError::NotFound)
        }
    }

    #[tokio::test]
    async fn test_selects_operation() {
        let api = RecordingApi::default();
        let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();

        let cases = [
            (HolidaysArgs { year: None, from: None, to: None }, "all"),
            (HolidaysArgs { year: Some(2022), from: None, to: None }, "year=2022"),
            (
                HolidaysArgs {
                    year: None,
                    from: Some(date("2022-01-01")),
                    to: Some(date("2022-12-31")),
                },
                "from=2022-01-01&to=2022-12-31",
            ),
        ];

        for (args, expected) in cases {
            let output = execute(&api, &args, OutputFormat::Json).await.unwrap();
            assert!(output.contains("元日"));
            assert_eq!(api.calls.lock().unwrap().last().map(String::as_str), Some(expected));
        }
    }
}
