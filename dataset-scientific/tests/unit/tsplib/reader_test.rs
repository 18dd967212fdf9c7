use super::*;
use crate::helpers::*;
use dataset_core::prelude::ErrorKind;

#[test]
fn can_read_coordinates_in_file_order() {
    let data = SQUARE_TSPLIB.read_tsplib().unwrap();

    assert_eq!(data.header.name.as_deref(), Some("square4"));
    assert_eq!(data.header.dimension, Some(4));
    assert!(data.has_coordinate_section);
    assert!(!data.has_demand_section);
    assert_eq!(
        data.coordinates,
        vec![
            ("1".to_string(), (0., 0.)),
            ("2".to_string(), (1., 0.)),
            ("3".to_string(), (1., 1.)),
            ("4".to_string(), (0., 1.)),
        ]
    );
}

#[test]
fn can_read_from_buf_reader() {
    let data = BufReader::new(get_test_resource("../../data/tsplib/square4.tsp").unwrap()).read_tsplib().unwrap();

    assert_eq!(data.header.comment.as_deref(), Some("Four cities at unit square corners"));
    assert_eq!(data.coordinates.len(), 4);
}

#[test]
fn can_keep_file_order_instead_of_ids() {
    let content = "TYPE: TSP\nDIMENSION: 3\nNODE_COORD_SECTION\n3 3 3\n1 1 1\n2 2 2\nEOF\n";

    let data = content.read_tsplib().unwrap();

    let ids = data.coordinates.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[test]
fn can_stop_at_eof_marker() {
    let content = "DIMENSION: 2\nNODE_COORD_SECTION\n1 0 0\nEOF\n2 1 1\n";

    let data = content.read_tsplib().unwrap();

    assert_eq!(data.coordinates.len(), 1);
}

#[test]
fn can_read_without_eof_marker() {
    let content = "DIMENSION: 2\nNODE_COORD_SECTION\n1 0 0\n2 1 1";

    let data = content.read_tsplib().unwrap();

    assert_eq!(data.coordinates.len(), 2);
}

#[test]
fn can_skip_rows_with_not_enough_tokens() {
    let content = "NODE_COORD_SECTION\n1 0 0\n2 1\n\n3 2 2 extra\nEOF";

    let data = content.read_tsplib().unwrap();

    assert_eq!(data.coordinates, vec![("1".to_string(), (0., 0.)), ("3".to_string(), (2., 2.))]);
}

#[test]
fn can_keep_declared_dimension_when_it_differs() {
    let content = "TYPE: TSP\nDIMENSION: 10\nNODE_COORD_SECTION\n1 0 0\n2 1 1\nEOF";

    let data = content.read_tsplib().unwrap();

    assert_eq!(data.header.dimension, Some(10));
    assert_eq!(data.coordinates.len(), 2);
}

#[test]
fn can_read_capacity_regardless_of_unknown_lines() {
    let content = "some free text\nCAPACITY 100\nVEHICLES: 3\nSERVICE_TIME_SECTION\n1 10\nEOF";

    let data = content.read_tsplib().unwrap();

    assert_eq!(data.header.capacity, Some(100.));
}

#[test]
fn can_read_demands_and_depots() {
    let data = BufReader::new(get_test_resource("../../data/tsplib/example5.vrp").unwrap()).read_tsplib().unwrap();

    assert_eq!(data.header.capacity, Some(100.));
    assert_eq!(data.header.problem_type.as_deref(), Some("CVRP"));
    assert!(data.has_demand_section);
    assert_eq!(data.coordinates.len(), 5);
    assert_eq!(data.demands.iter().map(|(_, demand)| *demand).collect::<Vec<_>>(), vec![0., 40., 30., 50., 20.]);
    assert_eq!(data.depots, vec!["1".to_string()]);
}

#[test]
fn can_read_alphanumeric_ids_inside_data_sections() {
    let content = "NODE_COORD_SECTION\nA 0 0\nB 1 1\nEOF";

    let data = content.read_tsplib().unwrap();

    assert_eq!(data.coordinates.len(), 2);
}

#[test]
fn can_fail_on_malformed_coordinate() {
    let content = "NODE_COORD_SECTION\n1 0 zero\nEOF";

    let err = content.read_tsplib().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.message().contains("at line 2"));
}

#[test]
fn can_read_empty_content() {
    let data = "".read_tsplib().unwrap();

    assert_eq!(data, TsplibData::default());
}
