use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct SpendingRecord {
    pub(crate) line: u64,
    pub(crate) category: String,
    pub(crate) amount: f64,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<SpendingRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let row: SpendingRow = record.deserialize(Some(&headers))?;

        records.push(SpendingRecord {
            line,
            category: row.category,
            amount: row.amount,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SpendingRow {
    #[serde(rename = "Category", alias = "category")]
    category: String,
    #[serde(rename = "Amount", alias = "amount")]
    amount: f64,
}
