#[cfg(test)]
#[path = "../../tests/unit/problem/facade_test.rs"]
mod facade_test;

use super::*;
use crate::format::*;
use crate::loading::*;
use crate::source::{SourceDescriptor, SourceKind};
use crate::utils::{DatasetResult, Environment, Float, InfoLogger};
use rand::RngCore;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

/// Composes source resolution, lazy loading, parsing and evaluation of a problem instance.
///
/// Source kind is resolved eagerly at construction. Content is loaded on first content, metadata
/// or evaluation access, and parsed once on first evaluation access. A load failure never surfaces
/// at construction: it is stored and returned to the caller each time content, metadata or
/// evaluation is requested. There is no retry: construct a new problem to fetch data again.
///
/// Load and parse transitions are guarded, so the same problem can be shared between threads.
pub struct DatasetProblem<I: ProblemInstance> {
    content: LazyContent,
    format: FormatConfig,
    options: I::Options,
    logger: InfoLogger,
    instance: OnceLock<DatasetResult<I>>,
    state: Mutex<ProblemState>,
    evaluations: AtomicUsize,
}

impl<I: ProblemInstance> DatasetProblem<I> {
    /// Creates a new problem from configuration.
    pub fn new(config: ProblemConfig, options: I::Options, environment: &Environment) -> Self {
        Self::with_descriptor(SourceDescriptor::new(config.source), config.loading, config.format, options, environment)
    }

    /// Creates a new problem from already resolved descriptor.
    pub fn with_descriptor(
        descriptor: SourceDescriptor,
        loading: LoaderConfig,
        format: FormatConfig,
        options: I::Options,
        environment: &Environment,
    ) -> Self {
        let problem = Self {
            content: LazyContent::new(descriptor, ContentLoader::new(loading, environment)),
            format,
            options,
            logger: environment.logger.clone(),
            instance: OnceLock::new(),
            state: Mutex::new(ProblemState::Constructed),
            evaluations: AtomicUsize::new(0),
        };

        problem.advance_from(ProblemState::Constructed, ProblemEvent::Resolve);

        problem
    }

    /// Creates a problem which uses registry dataset.
    pub fn from_registry(
        registry_id: &str,
        credential: Option<&str>,
        options: I::Options,
        environment: &Environment,
    ) -> Self {
        let descriptor = SourceDescriptor::from_registry(registry_id, credential);
        Self::with_descriptor(descriptor, LoaderConfig::default(), FormatConfig::default(), options, environment)
    }

    /// Creates a problem which uses external url.
    pub fn from_url(url: &str, options: I::Options, environment: &Environment) -> Self {
        let descriptor = SourceDescriptor::from_url(url);
        Self::with_descriptor(descriptor, LoaderConfig::default(), FormatConfig::default(), options, environment)
    }

    /// Creates a problem which uses local file.
    pub fn from_file(path: impl Into<PathBuf>, options: I::Options, environment: &Environment) -> Self {
        let descriptor = SourceDescriptor::from_file(path);
        Self::with_descriptor(descriptor, LoaderConfig::default(), FormatConfig::default(), options, environment)
    }

    /// Returns source descriptor.
    pub fn descriptor(&self) -> &SourceDescriptor {
        self.content.descriptor()
    }

    /// Returns resolved source kind.
    pub fn source_kind(&self) -> SourceKind {
        self.descriptor().kind()
    }

    /// Returns true if problem has a data source.
    pub fn has_dataset(&self) -> bool {
        self.source_kind() != SourceKind::None
    }

    /// Returns current lifecycle state.
    pub fn state(&self) -> ProblemState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns load state without triggering the load.
    pub fn load_state(&self) -> LoadState {
        self.content.peek().map(|content| content.state().clone()).unwrap_or_default()
    }

    /// Triggers the load if it has not happened yet and returns its outcome.
    pub fn load(&self) -> &LoadedContent {
        let content = self.content.get();
        let event = if content.is_loaded() { ProblemEvent::LoadSucceeded } else { ProblemEvent::LoadFailed };
        self.advance_from(ProblemState::Resolved, event);

        content
    }

    /// Returns raw content or the stored load error.
    pub fn content(&self) -> DatasetResult<Option<&str>> {
        self.load().raw_text()
    }

    /// Returns source provided metadata or the stored load error.
    pub fn metadata(&self) -> DatasetResult<&Metadata> {
        self.load().metadata()
    }

    /// Returns parsed instance or the stored load or parse error.
    pub fn instance(&self) -> DatasetResult<&I> {
        let content = self.load();
        let raw_text = content.raw_text()?;
        let metadata = content.metadata()?;

        self.instance
            .get_or_init(|| {
                let instance = self.read_instance(raw_text, content.name(), metadata);

                if instance.is_ok() {
                    self.advance_from(ProblemState::Loaded, ProblemEvent::Parse);
                    self.advance_from(ProblemState::Parsed, ProblemEvent::Complete);
                }

                instance
            })
            .as_ref()
            .map_err(|err| err.clone())
    }

    /// Evaluates a solution.
    pub fn evaluate(&self, solution: &I::Solution) -> DatasetResult<Float> {
        let instance = self.instance()?;
        self.evaluations.fetch_add(1, Ordering::Relaxed);

        Ok(instance.evaluate(solution))
    }

    /// Checks whether a solution is valid.
    pub fn is_valid(&self, solution: &I::Solution) -> DatasetResult<bool> {
        self.instance().map(|instance| instance.is_valid(solution))
    }

    /// Generates a random solution.
    pub fn random_solution(&self, random: &mut dyn RngCore) -> DatasetResult<I::Solution> {
        self.instance()?.random_solution(random)
    }

    /// Returns amount of evaluated solutions.
    pub fn evaluation_count(&self) -> usize {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Checks whether content matches the expected format. Returns false if there is no content.
    pub fn validate_format(&self, expected: DatasetFormat) -> bool {
        let content = self.load();

        match (content.raw_text(), content.metadata()) {
            (Ok(raw_text), Ok(metadata)) => matches_format(raw_text, metadata, expected),
            _ => false,
        }
    }

    /// Validates dataset against requirements using source metadata merged with the description
    /// of parsed instance. Source metadata takes precedence.
    pub fn check_requirements(&self, requirements: &DatasetRequirements) -> DatasetResult<()> {
        let mut metadata = self.instance()?.describe();
        metadata.extend(self.metadata()?.iter().map(|(key, value)| (key.clone(), value.clone())));

        requirements.validate(&metadata)
    }

    /// Returns information about content size. `content_length` is a count of characters, not bytes.
    pub fn size_info(&self) -> DatasetResult<Metadata> {
        let content = self.load();
        let Some(raw_text) = content.raw_text()? else {
            return Ok(Metadata::default());
        };

        let mut info = Metadata::default();
        info.insert("content_length".to_string(), json!(raw_text.chars().count()));
        info.insert("line_count".to_string(), json!(raw_text.split('\n').count()));

        let metadata = content.metadata()?;
        SIZE_KEYS.iter().filter_map(|key| metadata.get(*key).map(|value| (key, value))).for_each(|(key, value)| {
            info.insert(key.to_string(), value.clone());
        });

        Ok(info)
    }

    /// Returns information about the problem. Never fails: a load error is reported as a field.
    pub fn problem_info(&self) -> Metadata {
        let mut info = Metadata::default();
        info.insert("dataset_source".to_string(), json!(self.source_kind().to_string()));
        info.insert("has_dataset".to_string(), json!(self.has_dataset()));

        let dataset_metadata = if self.has_dataset() {
            match self.metadata() {
                Ok(metadata) => metadata.clone().into_iter().collect(),
                Err(err) => {
                    info.insert("dataset_error".to_string(), json!(err.to_string()));
                    serde_json::Map::new()
                }
            }
        } else {
            serde_json::Map::new()
        };
        info.insert("dataset_metadata".to_string(), Value::Object(dataset_metadata));

        if let Some(Ok(instance)) = self.instance.get() {
            info.insert("instance".to_string(), Value::Object(instance.describe().into_iter().collect()));
        }

        info.insert("evaluation_count".to_string(), json!(self.evaluation_count()));
        info.insert("state".to_string(), json!(self.state().to_string()));

        info
    }

    fn read_instance(&self, raw_text: Option<&str>, name: Option<&str>, metadata: &Metadata) -> DatasetResult<I> {
        let format = match raw_text {
            Some(raw_text) => detect_format(raw_text, metadata, &self.format)?,
            None => None,
        };

        let context = ParseContext { content: raw_text, name, metadata, format, logger: &self.logger };

        I::read(&context, &self.options)
    }

    fn advance_from(&self, expected: ProblemState, event: ProblemEvent) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if *state != expected {
            return;
        }

        match state.next(event) {
            Ok(next) => *state = next,
            Err(err) => (self.logger)(format!("warning: {err}").as_str()),
        }
    }
}
