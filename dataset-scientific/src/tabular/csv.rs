#[cfg(test)]
#[path = "../../tests/unit/tabular/csv_test.rs"]
mod csv_test;

use super::{TabularData, TabularRow};
use csv::{ReaderBuilder, StringRecord, Trim};
use dataset_core::prelude::{DatasetError, DatasetResult, Float};

/// Reads delimited rows. A header with `x`, `y` and, optionally, `demand` columns selects the
/// columns to read, otherwise the first two numeric fields of a row are read as (x, y). Rows with
/// less than two numeric fields are skipped.
pub fn read_csv(content: &str) -> DatasetResult<TabularData> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .delimiter(get_delimiter(content))
        .from_reader(content.as_bytes());

    let mut columns: Option<Columns> = None;
    let mut rows = Vec::new();

    for (record_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|err| DatasetError::parse(format!("cannot read csv record: {err}")))?;

        if record_idx == 0 {
            columns = Columns::from_header(&record);
            if columns.is_some() {
                continue;
            }
        }

        let row = match &columns {
            Some(columns) => columns.read_row(&record),
            None => read_any_row(&record),
        };

        rows.extend(row);
    }

    Ok(TabularData { rows, ..TabularData::default() })
}

struct Columns {
    x: usize,
    y: usize,
    demand: Option<usize>,
}

impl Columns {
    fn from_header(record: &StringRecord) -> Option<Self> {
        let position = |name: &str| record.iter().position(|field| field.eq_ignore_ascii_case(name));

        Some(Self { x: position("x")?, y: position("y")?, demand: position("demand") })
    }

    fn read_row(&self, record: &StringRecord) -> Option<TabularRow> {
        let field = |idx: usize| record.get(idx).and_then(parse_field);

        Some(TabularRow { coordinate: (field(self.x)?, field(self.y)?), demand: self.demand.and_then(field) })
    }
}

fn read_any_row(record: &StringRecord) -> Option<TabularRow> {
    let mut fields = record.iter().filter_map(parse_field);

    Some(TabularRow { coordinate: (fields.next()?, fields.next()?), demand: None })
}

fn parse_field(field: &str) -> Option<Float> {
    field.parse::<Float>().ok().filter(|value| value.is_finite())
}

fn get_delimiter(content: &str) -> u8 {
    let first = content.lines().find(|line| !line.trim().is_empty()).unwrap_or_default();

    [b',', b';', b'\t'].into_iter().find(|delimiter| first.contains(*delimiter as char)).unwrap_or(b',')
}
