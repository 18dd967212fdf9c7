use super::*;
use crate::helpers::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn create_square_instance() -> TourInstance {
    read_instance::<TourInstance>(SQUARE_TSPLIB, Some(DatasetFormat::Tsplib), &TourOptions::default())
}

#[test]
fn can_evaluate_square_tour() {
    let instance = create_square_instance();

    assert_eq!(instance.evaluate(&vec![0, 1, 2, 3]), 4.);
}

parameterized_test! {can_evaluate_tour, (tour, expected), {
    let cost = create_square_instance().evaluate(&tour);

    assert!((cost - expected).abs() < 1E-9, "expected {expected}, got {cost}");
}}

can_evaluate_tour! {
    case01_reversed: (vec![3, 2, 1, 0], 4.),
    case02_diagonals: (vec![0, 2, 1, 3], 2. + 2. * 2_f64.sqrt()),
    case03_single: (vec![2], 0.),
    case04_pair: (vec![0, 1], 2.),
}

parameterized_test! {can_return_infinity_for_unscorable_tour, tour, {
    assert_eq!(create_square_instance().evaluate(&tour), Float::INFINITY);
}}

can_return_infinity_for_unscorable_tour! {
    case01_empty: vec![],
    case02_out_of_range: vec![0, 1, 4],
}

#[test]
fn can_return_infinity_for_instance_without_coordinates() {
    let content = "NAME: empty\nTYPE: TSP\nDIMENSION: 3\nEOF";

    let instance = read_instance::<TourInstance>(content, None, &TourOptions::default());

    assert!(instance.distances().is_none());
    assert_eq!(instance.evaluate(&vec![0, 1, 2]), Float::INFINITY);
}

#[test]
fn can_keep_header_when_reading_numeric_rows() {
    let content = "NAME: rows2\nDIMENSION: 2\n0 0\n3 4\n";

    let instance = read_instance::<TourInstance>(content, None, &TourOptions::default());

    assert_eq!(instance.name(), Some("rows2"));
    assert_eq!(instance.dimension(), Some(2));
    assert_eq!(instance.coordinates(), &[(0., 0.), (3., 4.)]);
    assert_eq!(instance.evaluate(&vec![0, 1]), 10.);
}

#[test]
fn can_read_rows_with_explicit_format() {
    let content = "x,y\n0,0\n3,4\n";

    let instance = read_instance::<TourInstance>(content, Some(DatasetFormat::Csv), &TourOptions::default());

    assert_eq!(instance.coordinates(), &[(0., 0.), (3., 4.)]);
    assert_eq!(instance.dimension(), None);
}

#[test]
fn can_use_actual_coordinates_count_when_dimension_differs() {
    let content = "TYPE: TSP\nDIMENSION: 10\nNODE_COORD_SECTION\n1 0 0\n2 3 4\nEOF";

    let instance = read_instance::<TourInstance>(content, Some(DatasetFormat::Tsplib), &TourOptions::default());

    assert_eq!(instance.dimension(), Some(10));
    assert_eq!(instance.size(), 2);
    assert_eq!(instance.distances().map(|distances| distances.size()), Some(2));
    assert_eq!(instance.evaluate(&vec![0, 1]), 10.);
    assert_eq!(instance.evaluate(&vec![0, 1, 2]), Float::INFINITY);
}

parameterized_test! {can_read_instance_of_any_format, (content, format), {
    let instance = read_instance::<TourInstance>(content, format, &TourOptions::default());

    assert_eq!(instance.coordinates(), &SQUARE_COORDINATES);
    assert_eq!(instance.evaluate(&vec![0, 1, 2, 3]), 4.);
}}

can_read_instance_of_any_format! {
    case01_tsplib: (SQUARE_TSPLIB, Some(DatasetFormat::Tsplib)),
    case02_tsplib_sniffed: (SQUARE_TSPLIB, None),
    case03_csv: ("x,y\n0,0\n1,0\n1,1\n0,1\n", Some(DatasetFormat::Csv)),
    case04_json: (r#"{"cities": [[0, 0], [1, 0], [1, 1], [0, 1]]}"#, Some(DatasetFormat::Json)),
    case05_plain_rows: ("0 0\n1 0\n1 1\n0 1\n", None),
}

parameterized_test! {can_validate_tour, (tour, expected), {
    assert_eq!(create_square_instance().is_valid(&tour), expected);
}}

can_validate_tour! {
    case01_permutation: (vec![2, 0, 3, 1], true),
    case02_duplicate: (vec![0, 1, 1, 3], false),
    case03_missing: (vec![0, 1, 2], false),
    case04_out_of_range: (vec![0, 1, 2, 4], false),
    case05_empty: (vec![], false),
}

#[test]
fn can_generate_random_permutation() {
    let instance = create_square_instance();
    let mut random = SmallRng::seed_from_u64(42);

    let tour = instance.random_solution(&mut random).unwrap();

    assert!(instance.is_valid(&tour));
}

#[test]
fn can_reject_random_solution_without_coordinates() {
    let instance = read_instance::<TourInstance>("", None, &TourOptions::default());
    let mut random = SmallRng::seed_from_u64(42);

    let err = instance.random_solution(&mut random).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn can_round_distances_when_requested() {
    let instance =
        read_instance::<TourInstance>(SQUARE_TSPLIB, Some(DatasetFormat::Tsplib), &TourOptions { is_rounded: true });

    assert_eq!(instance.evaluate(&vec![0, 2, 1, 3]), 4.);
}

#[test]
fn can_describe_instance() {
    let instance = create_square_instance();

    let metadata = instance.describe();

    assert_eq!(metadata.get("problem_type"), Some(&json!("tsp")));
    assert_eq!(metadata.get("name"), Some(&json!("square4")));
    assert_eq!(metadata.get("num_cities"), Some(&json!(4)));
    assert_eq!(metadata.get("dimension"), Some(&json!(4)));
    assert_eq!(metadata.get("distance_type"), Some(&json!("EUC_2D")));
    assert_eq!(metadata.get("has_coordinates"), Some(&json!(true)));
    assert_eq!(metadata.get("format"), Some(&json!("tsplib")));
}

#[test]
fn can_use_source_name_when_content_has_none() {
    let metadata = Metadata::default();
    let logger = test_logger();
    let context =
        ParseContext { content: Some("0 0\n1 1\n"), name: Some("points"), metadata: &metadata, format: None, logger: &logger };

    let instance = TourInstance::read(&context, &TourOptions::default()).unwrap();

    assert_eq!(instance.name(), Some("points"));
}
