#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use super::TsplibHeader;
use crate::common::*;
use dataset_core::prelude::{DatasetResult, Float};
use std::io::{BufRead, BufReader, Read};

/// Keeps data read from TSPLIB95 file. Node ids are kept as they are written in the file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TsplibData {
    /// Header part.
    pub header: TsplibHeader,
    /// Node coordinates in file order.
    pub coordinates: Vec<(String, Coordinate)>,
    /// Node demands in file order.
    pub demands: Vec<(String, Float)>,
    /// Depot node ids.
    pub depots: Vec<String>,
    /// True if coordinate section is present.
    pub has_coordinate_section: bool,
    /// True if demand section is present.
    pub has_demand_section: bool,
}

/// A trait to read tsplib95 data. Please note that it is very basic and lenient implementation of
/// the format: unknown keys and sections are skipped, data rows with not enough
/// fields are ignored, reading stops at `EOF` marker or at the end of input.
pub trait TsplibProblem {
    /// Reads tsplib95 data.
    fn read_tsplib(self) -> DatasetResult<TsplibData>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self) -> DatasetResult<TsplibData> {
        TsplibReader::new(self).read_data()
    }
}

impl TsplibProblem for &str {
    fn read_tsplib(self) -> DatasetResult<TsplibData> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_data()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Header,
    NodeCoord,
    Demand,
    Depot,
    Unsupported,
}

struct TsplibReader<R: Read> {
    reader: BufReader<R>,
    section: Section,
    data: TsplibData,
}

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { reader, section: Section::Header, data: TsplibData::default() }
    }

    fn read_data(mut self) -> DatasetResult<TsplibData> {
        let mut buffer = String::new();
        let mut line_number = 0;

        loop {
            buffer.clear();
            if self.reader.read_line(&mut buffer)? == 0 {
                break;
            }
            line_number += 1;

            let line = buffer.trim();
            if line.is_empty() {
                continue;
            }

            if let Some((key, value)) = read_key_value(line).filter(|(key, _)| self.is_keyword(key)) {
                if key == "EOF" {
                    break;
                }

                self.read_keyword(key, value, line_number)?;
                continue;
            }

            match self.section {
                Section::NodeCoord => self.read_coord_line(line, line_number)?,
                Section::Demand => self.read_demand_line(line, line_number)?,
                Section::Depot => self.read_depot_line(line),
                Section::Header | Section::Unsupported => {}
            }
        }

        Ok(self.data)
    }

    /// Node ids inside data sections may look like keys, so only section markers are accepted there.
    fn is_keyword(&self, key: &str) -> bool {
        match self.section {
            Section::Header | Section::Unsupported => true,
            _ => key == "EOF" || key.ends_with("_SECTION"),
        }
    }

    fn read_keyword(&mut self, key: &str, value: &str, line_number: usize) -> DatasetResult<()> {
        self.section = match key {
            "NODE_COORD_SECTION" => {
                self.data.has_coordinate_section = true;
                Section::NodeCoord
            }
            "DEMAND_SECTION" => {
                self.data.has_demand_section = true;
                Section::Demand
            }
            "DEPOT_SECTION" => Section::Depot,
            key if key.ends_with("_SECTION") => Section::Unsupported,
            key => {
                self.data.header.accept(key, value, line_number)?;
                Section::Header
            }
        };

        Ok(())
    }

    fn read_coord_line(&mut self, line: &str, line_number: usize) -> DatasetResult<()> {
        let data = line.split_whitespace().collect::<Vec<_>>();

        if data.len() >= 3 {
            let coord = (
                parse_float(data[1], line_number, "cannot parse coord.0")?,
                parse_float(data[2], line_number, "cannot parse coord.1")?,
            );
            self.data.coordinates.push((data[0].to_string(), coord));
        }

        Ok(())
    }

    fn read_demand_line(&mut self, line: &str, line_number: usize) -> DatasetResult<()> {
        let data = line.split_whitespace().collect::<Vec<_>>();

        if data.len() >= 2 {
            let demand = parse_float(data[1], line_number, "cannot parse demand")?;
            self.data.demands.push((data[0].to_string(), demand));
        }

        Ok(())
    }

    fn read_depot_line(&mut self, line: &str) {
        match line {
            "-1" => self.section = Section::Header,
            id => self.data.depots.extend(id.split_whitespace().filter(|id| *id != "-1").map(|id| id.to_string())),
        }
    }
}
