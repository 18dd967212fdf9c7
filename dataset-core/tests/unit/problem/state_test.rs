use super::*;

parameterized_test! {can_apply_valid_transition, (state, event, expected), {
    assert_eq!(state.next(event), Ok(expected));
}}

can_apply_valid_transition! {
    case01_resolve: (ProblemState::Constructed, ProblemEvent::Resolve, ProblemState::Resolved),
    case02_load_succeeded: (ProblemState::Resolved, ProblemEvent::LoadSucceeded, ProblemState::Loaded),
    case03_load_failed: (ProblemState::Resolved, ProblemEvent::LoadFailed, ProblemState::LoadFailed),
    case04_parse: (ProblemState::Loaded, ProblemEvent::Parse, ProblemState::Parsed),
    case05_complete: (ProblemState::Parsed, ProblemEvent::Complete, ProblemState::Ready),
}

parameterized_test! {can_reject_invalid_transition, (state, event), {
    let result = state.next(event);

    assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::InvalidTransition));
}}

can_reject_invalid_transition! {
    case01_skip_resolve: (ProblemState::Constructed, ProblemEvent::LoadSucceeded),
    case02_parse_failed_load: (ProblemState::LoadFailed, ProblemEvent::Parse),
    case03_reload: (ProblemState::Loaded, ProblemEvent::LoadFailed),
    case04_retry_after_failure: (ProblemState::LoadFailed, ProblemEvent::LoadSucceeded),
    case05_parse_twice: (ProblemState::Ready, ProblemEvent::Parse),
    case06_reset: (ProblemState::Ready, ProblemEvent::Resolve),
}

