use chrono::Datelike;
use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use crate::api::deserializers::weekday_text;
use crate::api::types::*;
use crate::api::Resource;
use crate::cli::OutputFormat;
use crate::error::{KenallError, Result};

pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format addresses found for a postal code
    pub fn format_addresses(&self, response: &GetAddressResponse) -> Result<String> {
        let headers = [
            "郵便番号",
            "都道府県",
            "市区町村",
            "町域",
            "小字",
            "事業所",
            "JIS X 0402",
        ];
        let rows = response
            .addresses
            .iter()
            .map(|address| {
                vec![
                    address.postal_code.clone(),
                    address.prefecture.clone(),
                    address.city.clone(),
                    address.town.clone(),
                    or_dash(&address.koaza),
                    or_dash(&address.corporation.name),
                    address.jisx0402.clone(),
                ]
            })
            .collect();

        let summary = summary(
            "📮",
            Resource::PostalCode,
            &response.version,
            response.addresses.len(),
        );
        self.render(response, summary, &headers, rows)
    }

    /// Format cities of a prefecture
    pub fn format_cities(&self, response: &GetCityResponse) -> Result<String> {
        let headers = ["JIS X 0402", "都道府県", "市区町村", "市区町村(カナ)"];
        let rows = response
            .cities
            .iter()
            .map(|city| {
                vec![
                    city.jisx0402.clone(),
                    city.prefecture.clone(),
                    city.city.clone(),
                    city.city_kana.clone(),
                ]
            })
            .collect();

        let summary = summary(
            "🏙",
            Resource::Cities,
            &response.version,
            response.cities.len(),
        );
        self.render(response, summary, &headers, rows)
    }

    /// Format a corporation as field/value pairs
    pub fn format_corporation(&self, response: &GetCorporationResponse) -> Result<String> {
        let corporation = &response.corporation;
        let pairs = [
            ("法人番号", corporation.corporate_number.clone()),
            ("商号又は名称", corporation.name.clone()),
            ("フリガナ", corporation.furigana.clone()),
            ("英語表記", or_dash(&corporation.en_name)),
            ("法人種別", corporation.kind.clone()),
            ("都道府県", corporation.prefecture_name.clone()),
            ("市区町村", corporation.city_name.clone()),
            ("丁目番地等", corporation.street_number.clone()),
            ("郵便番号", corporation.post_code.clone()),
            ("JIS X 0402", corporation.jisx0402.clone()),
            ("法人番号指定年月日", corporation.assignment_date.clone()),
            ("更新年月日", corporation.update_date.clone()),
            ("登記記録の閉鎖等年月日", null_or_dash(&corporation.close_date)),
            ("承継先法人番号", null_or_dash(&corporation.successor_corporate_number)),
        ];

        let summary = format!(
            "\n{} {} {} | Version: {}\n\n",
            "🏢".cyan(),
            Resource::Houjinbangou.display_name(),
            corporation.name.bold(),
            version_text(&response.version).yellow()
        );
        self.render(response, summary, &["項目", "値"], key_value_rows(&pairs))
    }

    /// Format the caller's remote address
    pub fn format_whoami(&self, response: &GetWhoamiResponse) -> Result<String> {
        let address = &response.remote_address;
        let rows = vec![vec![
            address.address_type().to_string(),
            address.to_string(),
            address.network().to_string(),
        ]];

        self.render(
            response,
            format!(
                "\n{} {}\n\n",
                "🌐".cyan(),
                Resource::Whoami.display_name()
            ),
            &["type", "address", "network"],
            rows,
        )
    }

    /// Format a holiday listing
    pub fn format_holidays(&self, response: &GetHolidaysResponse) -> Result<String> {
        let rows = response
            .holidays
            .iter()
            .map(|holiday| {
                vec![
                    holiday.date.to_string(),
                    holiday.day_of_week_text().to_string(),
                    holiday.title.clone(),
                ]
            })
            .collect();

        let summary = format!(
            "\n{} {} | Results: {}\n\n",
            "🎌".cyan(),
            Resource::Holidays.display_name(),
            response.holidays.len().to_string().yellow()
        );
        self.render(response, summary, &["日付", "曜日", "名称"], rows)
    }

    /// Format a normalized address as component/value pairs
    pub fn format_query(&self, response: &GetNormalizeAddressResponse) -> Result<String> {
        let query = &response.query;
        let pairs = [
            ("q", null_or_dash(&query.q)),
            ("t", null_or_dash(&query.t)),
            ("prefecture", null_or_dash(&query.prefecture)),
            ("county", null_or_dash(&query.county)),
            ("city", null_or_dash(&query.city)),
            ("city_ward", null_or_dash(&query.city_ward)),
            ("town", null_or_dash(&query.town)),
            ("kyoto_street", null_or_dash(&query.kyoto_street)),
            ("block_lot_num", null_or_dash(&query.block_lot_num)),
            ("building", null_or_dash(&query.building)),
            ("floor_room", null_or_dash(&query.floor_room)),
        ];

        let summary = format!(
            "\n{} Normalized address | Version: {}\n\n",
            "🧭".cyan(),
            version_text(&response.version).yellow()
        );
        self.render(response, summary, &["component", "value"], key_value_rows(&pairs))
    }

    /// Format a business day check
    pub fn format_business_day(&self, response: &GetBusinessDaysResponse) -> Result<String> {
        let day = &response.business_day;
        let rows = vec![vec![
            day.date.to_string(),
            weekday_text(day.date.weekday()).to_string(),
            day.legal_holiday.to_string(),
        ]];

        self.render(
            response,
            format!(
                "\n{} {}\n\n",
                "📅".cyan(),
                Resource::BusinessDays.display_name()
            ),
            &["date", "weekday", "legal_holiday"],
            rows,
        )
    }

    fn render<T: Serialize>(
        &self,
        value: &T,
        summary: String,
        headers: &[&str],
        rows: Vec<Vec<String>>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(value).map_err(KenallError::Serialization)
            }
            OutputFormat::Csv => to_csv(headers, &rows),
            OutputFormat::Table => {
                let mut result = summary;
                result.push_str(&to_table(headers, rows));
                Ok(result)
            }
        }
    }
}

fn to_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut table = Table::new();

    table.set_header(
        headers
            .iter()
            .map(|header| Cell::new(header).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    for row in rows {
        table.add_row(row.into_iter().map(Cell::new).collect::<Vec<_>>());
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.to_string()
}

fn to_csv(headers: &[&str], rows: &[Vec<String>]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| KenallError::Io(std::io::Error::new(e.error().kind(), e.to_string())))?;

    // Add BOM for Excel compatibility
    let mut result = vec![0xEF, 0xBB, 0xBF];
    result.extend_from_slice(&data);

    Ok(String::from_utf8_lossy(&result).into_owned())
}

fn key_value_rows(pairs: &[(&str, String)]) -> Vec<Vec<String>> {
    pairs
        .iter()
        .map(|(key, value)| vec![key.to_string(), value.clone()])
        .collect()
}

fn summary(icon: &str, resource: Resource, version: &Version, count: usize) -> String {
    format!(
        "\n{} {} | Version: {} | Results: {}\n\n",
        icon.cyan(),
        resource.display_name(),
        version_text(version).yellow(),
        count.to_string().yellow()
    )
}

// Helper functions
fn version_text(version: &Version) -> String {
    if version.is_zero() {
        "-".to_string()
    } else {
        version.to_string()
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn null_or_dash(value: &NullString) -> String {
    value.as_deref().map(or_dash).unwrap_or_else(|| "-".to_string())
}
