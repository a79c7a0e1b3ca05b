use serde_json::{Value, json};
use vnfin_core::{Period, Record};

const YEARS: [i64; 8] = [2023, 2022, 2021, 2020, 2019, 2018, 2017, 2016];
const QUARTERS: [(i64, i64); 8] = [
    (2024, 2),
    (2024, 1),
    (2023, 4),
    (2023, 3),
    (2023, 2),
    (2023, 1),
    (2022, 4),
    (2022, 3),
];

/// Row keyed by ticker and period; `quarter` is only present for quarterly rows.
fn record(symbol: &str, year: i64, quarter: Option<i64>, fields: Value) -> Record {
    let mut row = Record::new();
    row.insert("ticker".into(), json!(symbol));
    row.insert("year".into(), json!(year));
    if let Some(q) = quarter {
        row.insert("quarter".into(), json!(q));
    }
    if let Value::Object(extra) = fields {
        row.extend(extra);
    }
    row
}

/// Stable per-symbol scale so different tickers produce different figures.
fn scale(symbol: &str) -> i64 {
    symbol.bytes().map(i64::from).sum::<i64>() % 97 + 3
}

fn periods(period: &Period) -> Vec<(i64, Option<i64>)> {
    if period.as_str() == Period::QUARTER {
        QUARTERS.iter().map(|&(y, q)| (y, Some(q))).collect()
    } else {
        YEARS.iter().map(|&y| (y, None)).collect()
    }
}

pub fn income_statement(symbol: &str, period: &Period) -> Vec<Record> {
    let k = scale(symbol);
    periods(period)
        .into_iter()
        .enumerate()
        .map(|(i, (year, quarter))| {
            let revenue = k * 1_000 - i64::try_from(i).unwrap_or(0) * 50;
            record(
                symbol,
                year,
                quarter,
                json!({
                    "revenue": revenue,
                    "grossProfit": revenue * 2 / 5,
                    "postTaxProfit": revenue / 6,
                }),
            )
        })
        .collect()
}

pub fn balance_sheet(symbol: &str, period: &Period) -> Vec<Record> {
    let k = scale(symbol);
    periods(period)
        .into_iter()
        .enumerate()
        .map(|(i, (year, quarter))| {
            let asset = k * 4_000 - i64::try_from(i).unwrap_or(0) * 120;
            record(
                symbol,
                year,
                quarter,
                json!({
                    "asset": asset,
                    "debt": asset / 3,
                    "equity": asset - asset / 3,
                }),
            )
        })
        .collect()
}

pub fn cash_flow(symbol: &str, period: &Period) -> Vec<Record> {
    let k = scale(symbol);
    periods(period)
        .into_iter()
        .enumerate()
        .map(|(i, (year, quarter))| {
            let operating = k * 300 - i64::try_from(i).unwrap_or(0) * 10;
            record(
                symbol,
                year,
                quarter,
                json!({
                    "fromSale": operating,
                    "fromInvest": -operating / 2,
                    "fromFinancial": -operating / 4,
                }),
            )
        })
        .collect()
}

/// Rows at index 2 and 5 carry a missing value.
pub fn ratios(symbol: &str, period: &Period) -> Vec<Record> {
    let k = scale(symbol);
    periods(period)
        .into_iter()
        .enumerate()
        .map(|(i, (year, quarter))| {
            let pe = if i == 2 { Value::Null } else { json!(k as f64 / 5.0) };
            let roe = if i == 5 { Value::Null } else { json!(0.18) };
            record(
                symbol,
                year,
                quarter,
                json!({
                    "priceToEarning": pe,
                    "roe": roe,
                }),
            )
        })
        .collect()
}

pub const NEWS_COUNT: usize = 12;

pub fn news(symbol: &str) -> Vec<Record> {
    (0..NEWS_COUNT)
        .map(|i| {
            let mut row = Record::new();
            row.insert("ticker".into(), json!(symbol));
            row.insert(
                "title".into(),
                json!(format!("{symbol} announcement #{}", i + 1)),
            );
            row.insert("source".into(), json!("Mock"));
            row.insert("publishDate".into(), json!(format!("2024-{:02}-15", 12 - i)));
            row
        })
        .collect()
}
