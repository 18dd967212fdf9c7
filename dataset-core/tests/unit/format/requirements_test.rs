use super::*;
use crate::utils::ErrorKind;
use serde_json::json;

fn create_metadata(format: &str, dimension: usize) -> Metadata {
    let mut metadata = Metadata::default();
    metadata.insert("format".to_string(), json!(format));
    metadata.insert("dimension".to_string(), json!(dimension));
    metadata.insert("has_coordinates".to_string(), json!(true));
    metadata
}

fn create_requirements() -> DatasetRequirements {
    DatasetRequirements {
        format: Some(DatasetFormat::Tsplib),
        min_size: Some(3),
        max_size: Some(1000),
        required_fields: vec!["DIMENSION".to_string()],
        supported_formats: vec![DatasetFormat::Tsplib],
    }
}

#[test]
fn can_accept_matching_dataset() {
    assert_eq!(create_requirements().validate(&create_metadata("tsplib", 4)), Ok(()));
}

parameterized_test! {can_reject_dataset, (format, dimension, expected), {
    let result = create_requirements().validate(&create_metadata(format, dimension));

    assert_eq!(result, Err(DatasetError::validation(expected)));
}}

can_reject_dataset! {
    case01_format: ("csv", 4, "expecting 'tsplib' format, got 'csv'"),
    case02_unknown_format: ("xml", 4, "expecting 'tsplib' format, got none"),
    case03_too_small: ("tsplib", 2, "dataset size 2 is less than 3"),
    case04_too_big: ("tsplib", 1001, "dataset size 1001 is greater than 1000"),
}

#[test]
fn can_reject_missing_required_field() {
    let requirements = DatasetRequirements { required_fields: vec!["capacity".to_string()], ..create_requirements() };

    let result = requirements.validate(&create_metadata("tsplib", 4));

    assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::Validation));
}

#[test]
fn can_reject_unsupported_format() {
    let requirements = DatasetRequirements {
        format: None,
        supported_formats: vec![DatasetFormat::Json, DatasetFormat::Csv],
        ..DatasetRequirements::default()
    };

    let result = requirements.validate(&create_metadata("tsplib", 4));

    assert_eq!(result, Err(DatasetError::validation("dataset format is not one of: json, csv")));
}

#[test]
fn can_reject_size_check_without_size() {
    let requirements = DatasetRequirements { min_size: Some(1), ..DatasetRequirements::default() };

    assert!(requirements.validate(&Metadata::default()).is_err());
    assert_eq!(DatasetRequirements::default().validate(&Metadata::default()), Ok(()));
}

#[test]
fn can_get_dataset_size_from_alternative_keys() {
    let mut metadata = Metadata::default();
    metadata.insert("num_customers".to_string(), json!(31));

    assert_eq!(get_dataset_size(&metadata), Some(31));
}

#[test]
fn can_deserialize_requirements() {
    let requirements: DatasetRequirements = serde_json::from_str(
        r#"{ "format": "tsplib", "minSize": 3, "maxSize": 1000, "requiredFields": ["DIMENSION"], "supportedFormats": ["tsplib"] }"#,
    )
    .unwrap();

    assert_eq!(requirements.min_size, Some(3));
    assert_eq!(requirements.supported_formats, vec![DatasetFormat::Tsplib]);
}
