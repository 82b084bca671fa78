//! Architecture Data Loader Module
//! Parses the embedded architecture scores and checks the record invariants.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Lowest score on the comparison scale.
pub const MIN_SCORE: u8 = 1;
/// Highest score on the comparison scale.
pub const MAX_SCORE: u8 = 5;

/// Scores compiled into the binary. Render order is listed order.
pub const EMBEDDED_DATA: &str = r#"{"architectures": [
    {"name": "Монолитная", "performance": 5, "security": 3, "development_complexity": 3, "scalability": 2},
    {"name": "Микроядерная", "performance": 3, "security": 5, "development_complexity": 4, "scalability": 5},
    {"name": "Гибридная", "performance": 4, "security": 4, "development_complexity": 5, "scalability": 4}
]}"#;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to parse architecture data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No architecture records")]
    Empty,
    #[error("Architecture record #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("Duplicate architecture name: {name}")]
    DuplicateName { name: String },
    #[error("{name}: {field} score {value} is outside the 1-5 scale")]
    ScoreOutOfRange {
        name: String,
        field: &'static str,
        value: u8,
    },
}

/// One architecture style and its four qualitative scores.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchitectureRecord {
    pub name: String,
    pub performance: u8,
    pub security: u8,
    pub development_complexity: u8,
    pub scalability: u8,
}

impl ArchitectureRecord {
    fn scores(&self) -> [(&'static str, u8); 4] {
        [
            ("performance", self.performance),
            ("security", self.security),
            ("development_complexity", self.development_complexity),
            ("scalability", self.scalability),
        ]
    }
}

/// Ordered, validated collection of architecture records.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchitectureDataset {
    pub architectures: Vec<ArchitectureRecord>,
}

impl ArchitectureDataset {
    /// Load the dataset compiled into the binary.
    pub fn load_embedded() -> Result<Self, DataError> {
        Self::from_json(EMBEDDED_DATA)
    }

    /// Parse a JSON document of the form `{"architectures": [...]}` and validate it.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check non-empty, unique non-blank names and every score within the scale.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.architectures.is_empty() {
            return Err(DataError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, record) in self.architectures.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(DataError::EmptyName { index });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(DataError::DuplicateName {
                    name: record.name.clone(),
                });
            }
            for (field, value) in record.scores() {
                if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                    return Err(DataError::ScoreOutOfRange {
                        name: record.name.clone(),
                        field,
                        value,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn records(&self) -> &[ArchitectureRecord] {
        &self.architectures
    }

    pub fn len(&self) -> usize {
        self.architectures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.architectures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(name: &str, scores: [i32; 4]) -> String {
        format!(
            r#"{{"name": "{}", "performance": {}, "security": {}, "development_complexity": {}, "scalability": {}}}"#,
            name, scores[0], scores[1], scores[2], scores[3]
        )
    }

    #[test]
    fn embedded_data_loads_in_listed_order() {
        let dataset = ArchitectureDataset::load_embedded().unwrap();
        let names: Vec<&str> = dataset.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Монолитная", "Микроядерная", "Гибридная"]);
        assert_eq!(
            dataset.records()[1],
            ArchitectureRecord {
                name: "Микроядерная".to_string(),
                performance: 3,
                security: 5,
                development_complexity: 4,
                scalability: 5,
            }
        );
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = ArchitectureDataset::from_json(r#"{"architectures": []}"#).unwrap_err();
        assert!(matches!(err, DataError::Empty));
    }

    #[test]
    fn blank_name_is_rejected() {
        let json = format!(r#"{{"architectures": [{}]}}"#, record_json("  ", [1, 2, 3, 4]));
        let err = ArchitectureDataset::from_json(&json).unwrap_err();
        assert!(matches!(err, DataError::EmptyName { index: 0 }));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let json = format!(
            r#"{{"architectures": [{}, {}]}}"#,
            record_json("Exo", [1, 2, 3, 4]),
            record_json("Exo", [4, 3, 2, 1])
        );
        let err = ArchitectureDataset::from_json(&json).unwrap_err();
        assert!(matches!(err, DataError::DuplicateName { name } if name == "Exo"));
    }

    #[test]
    fn score_outside_scale_is_rejected() {
        let json = format!(r#"{{"architectures": [{}]}}"#, record_json("Exo", [1, 2, 6, 4]));
        let err = ArchitectureDataset::from_json(&json).unwrap_err();
        match err {
            DataError::ScoreOutOfRange { name, field, value } => {
                assert_eq!(name, "Exo");
                assert_eq!(field, "development_complexity");
                assert_eq!(value, 6);
            }
            other => panic!("unexpected error: {other}"),
        }

        let json = format!(r#"{{"architectures": [{}]}}"#, record_json("Exo", [0, 2, 3, 4]));
        assert!(matches!(
            ArchitectureDataset::from_json(&json),
            Err(DataError::ScoreOutOfRange { field: "performance", .. })
        ));
    }

    #[test]
    fn malformed_records_fail_to_parse() {
        // missing field
        let missing = r#"{"architectures": [{"name": "Exo", "performance": 1, "security": 2, "scalability": 3}]}"#;
        assert!(matches!(
            ArchitectureDataset::from_json(missing),
            Err(DataError::Json(_))
        ));

        // extra field
        let extra = format!(
            r#"{{"architectures": [{}]}}"#,
            record_json("Exo", [1, 2, 3, 4]).replace('}', r#", "latency": 2}"#)
        );
        assert!(matches!(
            ArchitectureDataset::from_json(&extra),
            Err(DataError::Json(_))
        ));

        // negative score does not fit the scale type
        let negative = format!(r#"{{"architectures": [{}]}}"#, record_json("Exo", [1, -2, 3, 4]));
        assert!(matches!(
            ArchitectureDataset::from_json(&negative),
            Err(DataError::Json(_))
        ));
    }
}
