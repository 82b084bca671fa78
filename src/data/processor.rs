//! Data Processor Module
//! Projects architecture records into parallel per-dimension series.

use super::loader::ArchitectureRecord;

/// Score dimension plotted as one bar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreDimension {
    Performance,
    Security,
    DevelopmentComplexity,
    Scalability,
}

impl ScoreDimension {
    /// Series order in the chart, independent of record order.
    pub const ALL: [ScoreDimension; 4] = [
        ScoreDimension::Performance,
        ScoreDimension::Security,
        ScoreDimension::DevelopmentComplexity,
        ScoreDimension::Scalability,
    ];

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            ScoreDimension::Performance => "Performance",
            ScoreDimension::Security => "Security",
            ScoreDimension::DevelopmentComplexity => "Dev Complexity",
            ScoreDimension::Scalability => "Scalability",
        }
    }
}

/// Five parallel columns, one row per architecture, in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesTable {
    pub names: Vec<String>,
    pub performance: Vec<u8>,
    pub security: Vec<u8>,
    pub dev_complexity: Vec<u8>,
    pub scalability: Vec<u8>,
}

impl SeriesTable {
    pub fn values(&self, dimension: ScoreDimension) -> &[u8] {
        match dimension {
            ScoreDimension::Performance => &self.performance,
            ScoreDimension::Security => &self.security,
            ScoreDimension::DevelopmentComplexity => &self.dev_complexity,
            ScoreDimension::Scalability => &self.scalability,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Reshapes record sequences into chart-ready columns.
pub struct DataProcessor;

impl DataProcessor {
    /// Split records into parallel columns, preserving record order.
    ///
    /// Callers pass a validated, non-empty record slice.
    pub fn extract_series(records: &[ArchitectureRecord]) -> SeriesTable {
        let mut table = SeriesTable {
            names: Vec::with_capacity(records.len()),
            performance: Vec::with_capacity(records.len()),
            security: Vec::with_capacity(records.len()),
            dev_complexity: Vec::with_capacity(records.len()),
            scalability: Vec::with_capacity(records.len()),
        };

        for record in records {
            table.names.push(record.name.clone());
            table.performance.push(record.performance);
            table.security.push(record.security);
            table.dev_complexity.push(record.development_complexity);
            table.scalability.push(record.scalability);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ArchitectureDataset;

    #[test]
    fn embedded_records_project_to_expected_columns() {
        let dataset = ArchitectureDataset::load_embedded().unwrap();
        let table = DataProcessor::extract_series(dataset.records());

        assert_eq!(table.names, ["Монолитная", "Микроядерная", "Гибридная"]);
        assert_eq!(table.performance, [5, 3, 4]);
        assert_eq!(table.security, [3, 5, 4]);
        assert_eq!(table.dev_complexity, [3, 4, 5]);
        assert_eq!(table.scalability, [2, 5, 4]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn record_order_is_preserved() {
        let records = vec![
            ArchitectureRecord {
                name: "B".to_string(),
                performance: 1,
                security: 2,
                development_complexity: 3,
                scalability: 4,
            },
            ArchitectureRecord {
                name: "A".to_string(),
                performance: 5,
                security: 4,
                development_complexity: 3,
                scalability: 2,
            },
        ];
        let table = DataProcessor::extract_series(&records);

        assert_eq!(table.names, ["B", "A"]);
        assert_eq!(table.values(ScoreDimension::Performance), [1, 5]);
        assert_eq!(table.values(ScoreDimension::Scalability), [4, 2]);
    }

    #[test]
    fn dimension_order_and_labels_are_fixed() {
        let labels: Vec<&str> = ScoreDimension::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            ["Performance", "Security", "Dev Complexity", "Scalability"]
        );
    }
}
