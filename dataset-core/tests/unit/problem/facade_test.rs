use super::*;
use crate::helpers::*;
use crate::source::SourceConfig;
use crate::utils::{DatasetError, ErrorKind};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;

type TestProblem = DatasetProblem<LinesInstance>;

fn create_local_problem(transport: Arc<TestTransport>, path: &str) -> TestProblem {
    TestProblem::from_file(path, (), &test_environment(transport))
}

#[test]
fn can_resolve_eagerly_without_loading() {
    let transport = Arc::new(TestTransport::default());

    let problem = create_local_problem(transport.clone(), "missing.tsp");

    assert_eq!(problem.state(), ProblemState::Resolved);
    assert_eq!(problem.source_kind(), SourceKind::Local);
    assert_eq!(problem.load_state(), LoadState::NotLoaded);
    assert_eq!(transport.read_calls(), 0);
}

#[test]
fn can_load_content_at_most_once() {
    let transport = Arc::new(TestTransport::default().with_file("square.tsp", SQUARE_TSPLIB));
    let problem = create_local_problem(transport.clone(), "square.tsp");

    assert_eq!(problem.content(), Ok(Some(SQUARE_TSPLIB)));
    assert_eq!(problem.content(), Ok(Some(SQUARE_TSPLIB)));
    assert!(problem.metadata().unwrap().is_empty());
    problem.evaluate(&vec![0, 1]).unwrap();

    assert_eq!(transport.read_calls(), 1);
    assert_eq!(problem.load_state(), LoadState::Loaded);
}

#[test]
fn can_surface_stored_load_failure_lazily() {
    let transport = Arc::new(TestTransport::default());
    let problem = create_local_problem(transport.clone(), "missing.tsp");

    let content_error = problem.content().unwrap_err();
    let metadata_error = problem.metadata().unwrap_err();
    let evaluation_error = problem.evaluate(&vec![0]).unwrap_err();

    assert_eq!(content_error.kind(), ErrorKind::NotFound);
    assert_eq!(metadata_error, content_error);
    assert_eq!(evaluation_error, content_error);
    assert_eq!(problem.is_valid(&vec![0]), Err(content_error.clone()));
    assert_eq!(problem.state(), ProblemState::LoadFailed);
    assert_eq!(problem.load_state(), LoadState::Failed(content_error));
    assert_eq!(transport.read_calls(), 1);
}

#[test]
fn can_reach_ready_state_after_parsing() {
    let transport = Arc::new(TestTransport::default().with_file("square.tsp", SQUARE_TSPLIB));
    let problem = create_local_problem(transport, "square.tsp");

    problem.content().unwrap();
    assert_eq!(problem.state(), ProblemState::Loaded);

    let cost = problem.evaluate(&vec![0, 1, 2, 42]).unwrap();

    assert_eq!(cost, 3.);
    assert_eq!(problem.state(), ProblemState::Ready);
    assert_eq!(problem.instance().unwrap().lines.len(), 10);
    assert_eq!(problem.evaluation_count(), 1);
}

#[test]
fn can_stay_loaded_when_parser_rejects_content() {
    let transport = Arc::new(TestTransport::default().with_file("data.json", r#"{ "cities": [] }"#));
    let problem = create_local_problem(transport, "data.json");

    let error = problem.evaluate(&vec![0]).unwrap_err();

    assert_eq!(error, DatasetError::parse("json is not supported"));
    assert_eq!(problem.state(), ProblemState::Loaded);
    assert_eq!(problem.evaluation_count(), 0);
}

#[test]
fn can_handle_problem_without_dataset() {
    let transport = Arc::new(TestTransport::default());
    let problem = TestProblem::new(ProblemConfig::default(), (), &test_environment(transport.clone()));

    assert!(!problem.has_dataset());
    assert_eq!(problem.source_kind(), SourceKind::None);
    assert_eq!(problem.content(), Ok(None));
    assert_eq!(problem.evaluate(&vec![0, 1]), Ok(Float::INFINITY));
    assert_eq!(problem.state(), ProblemState::Ready);
    assert_eq!(problem.size_info(), Ok(Metadata::default()));
    assert_eq!(transport.get_calls() + transport.read_calls(), 0);
}

#[test]
fn can_use_registry_metadata() {
    let transport = Arc::new(
        TestTransport::default()
            .with_response(
                "https://rastion.com/api/datasets/test-uuid",
                r#"{ "dataset": { "name": "square", "metadata": { "format": "tsplib", "dimension": 4 } } }"#,
            )
            .with_response("https://rastion.com/api/datasets/test-uuid/download", SQUARE_TSPLIB),
    );
    let problem = TestProblem::from_registry("test-uuid", Some("token"), (), &test_environment(transport.clone()));

    let size_info = problem.size_info().unwrap();

    assert_eq!(problem.metadata().unwrap().get("dimension"), Some(&serde_json::json!(4)));
    assert_eq!(size_info.get("content_length"), Some(&serde_json::json!(SQUARE_TSPLIB.len())));
    assert_eq!(size_info.get("line_count"), Some(&serde_json::json!(11)));
    assert_eq!(size_info.get("dimension"), Some(&serde_json::json!(4)));
    assert!(problem.validate_format(DatasetFormat::Tsplib));
    assert_eq!(transport.get_calls(), 2);
}

#[test]
fn can_count_content_length_in_characters() {
    let transport = Arc::new(TestTransport::default().with_file("cities.txt", "NAME: Zürich\nCOMMENT: Malmö"));
    let problem = create_local_problem(transport, "cities.txt");

    let size_info = problem.size_info().unwrap();

    assert_eq!(size_info.get("content_length"), Some(&serde_json::json!(27)));
    assert_eq!(size_info.get("line_count"), Some(&serde_json::json!(2)));
}

#[test]
fn can_validate_format() {
    let transport = Arc::new(TestTransport::default().with_file("square.tsp", SQUARE_TSPLIB));

    let problem = create_local_problem(transport.clone(), "square.tsp");
    let missing = create_local_problem(transport, "missing.tsp");

    assert!(problem.validate_format(DatasetFormat::Tsplib));
    assert!(!problem.validate_format(DatasetFormat::Csv));
    assert!(!missing.validate_format(DatasetFormat::Tsplib));
}

#[test]
fn can_check_requirements_with_parsed_description() {
    let transport = Arc::new(TestTransport::default().with_file("square.tsp", SQUARE_TSPLIB));
    let problem = create_local_problem(transport, "square.tsp");

    let accepted = DatasetRequirements { min_size: Some(3), ..DatasetRequirements::default() };
    let rejected = DatasetRequirements { max_size: Some(5), ..DatasetRequirements::default() };

    assert_eq!(problem.check_requirements(&accepted), Ok(()));
    assert_eq!(problem.check_requirements(&rejected).map_err(|err| err.kind()), Err(ErrorKind::Validation));
}

#[test]
fn can_report_problem_info_without_failing() {
    let transport = Arc::new(TestTransport::default());
    let problem = TestProblem::new(
        ProblemConfig {
            source: SourceConfig { url: Some("https://example.com/missing.tsp".to_string()), ..SourceConfig::default() },
            ..ProblemConfig::default()
        },
        (),
        &test_environment(transport),
    );

    let info = problem.problem_info();

    assert_eq!(info.get("dataset_source"), Some(&serde_json::json!("url")));
    assert_eq!(info.get("has_dataset"), Some(&serde_json::json!(true)));
    assert_eq!(info.get("dataset_metadata"), Some(&serde_json::json!({})));
    assert_eq!(info.get("state"), Some(&serde_json::json!("load_failed")));
    assert!(info.get("dataset_error").and_then(|err| err.as_str()).unwrap().starts_with("network error"));
}

#[test]
fn can_reject_strict_format_mismatch() {
    let transport = Arc::new(TestTransport::default().with_file("square.tsp", SQUARE_TSPLIB));
    let problem = TestProblem::new(
        ProblemConfig {
            source: SourceConfig { local_path: Some("square.tsp".into()), ..SourceConfig::default() },
            format: FormatConfig { format: Some(DatasetFormat::Csv), policy: FormatPolicy::Strict },
            ..ProblemConfig::default()
        },
        (),
        &test_environment(transport),
    );

    assert_eq!(problem.evaluate(&vec![0]).map_err(|err| err.kind()), Err(ErrorKind::Validation));
}

#[test]
fn can_return_unsupported_random_solution_by_default() {
    let transport = Arc::new(TestTransport::default().with_file("square.tsp", SQUARE_TSPLIB));
    let problem = create_local_problem(transport, "square.tsp");
    let mut random = SmallRng::seed_from_u64(0);

    let result = problem.random_solution(&mut random);

    assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::Unsupported));
    assert_eq!(problem.is_valid(&vec![100]), Ok(true));
}

#[test]
fn can_share_problem_between_threads() {
    let transport = Arc::new(TestTransport::default().with_file("square.tsp", SQUARE_TSPLIB));
    let problem = Arc::new(create_local_problem(transport.clone(), "square.tsp"));

    let handles = (0..8)
        .map(|_| {
            let problem = problem.clone();
            std::thread::spawn(move || problem.evaluate(&vec![0, 1, 2]).unwrap())
        })
        .collect::<Vec<_>>();

    let costs = handles.into_iter().map(|handle| handle.join().unwrap()).collect::<Vec<_>>();

    assert!(costs.iter().all(|&cost| cost == 3.));
    assert_eq!(transport.read_calls(), 1);
    assert_eq!(problem.evaluation_count(), 8);
    assert_eq!(problem.state(), ProblemState::Ready);
}
