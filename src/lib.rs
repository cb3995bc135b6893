//! Workspace umbrella crate for wirefix.
//!
//! This crate stitches together text recovery, structural validation and tree
//! normalization so callers can turn raw model output into a canonical
//! wireframe document with a single API entry point. Export to HTML, React
//! and the design-tool form, a canned fallback document, and YAML
//! configuration live here as well.

pub use normalize::{
    ConfigError as NormalizeConfigError, GridLayout, NormalizeConfig, flatten, flatten_with,
    grid_position, normalize, normalize_components, normalize_with, slugify,
};
pub use recover::{
    ConfigError as RecoverConfigError, RecoverConfig, RecoverError, Recovered, RecoveryStrategy,
    recover, recover_with, strip_fences,
};
pub use schema::{Component, ComponentProfile, Document, FieldKey, FlatKind, Page};
pub use validate::{
    ConfigError as ValidateConfigError, ValidateConfig, ValidationResult, validate, validate_with,
};

mod config;
mod export;
mod fallback;

pub use crate::config::{ConfigLoadError, WirefixConfig};
pub use crate::export::{Export, ExportFormat, export, to_html, to_react_jsx};
pub use crate::fallback::{fallback_document, fallback_document_with};

use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};
use tracing::{Level, info, warn};

/// Errors that can occur while processing model output through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Recover(RecoverError),
    RecoverConfig(RecoverConfigError),
    ValidateConfig(ValidateConfigError),
    NormalizeConfig(NormalizeConfigError),
    Export(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Recover(err) => write!(f, "recovery failure: {err}"),
            PipelineError::RecoverConfig(err) => write!(f, "invalid recover config: {err}"),
            PipelineError::ValidateConfig(err) => write!(f, "invalid validate config: {err}"),
            PipelineError::NormalizeConfig(err) => write!(f, "invalid normalize config: {err}"),
            PipelineError::Export(msg) => write!(f, "export failure: {msg}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Recover(err) => Some(err),
            PipelineError::RecoverConfig(err) => Some(err),
            PipelineError::ValidateConfig(err) => Some(err),
            PipelineError::NormalizeConfig(err) => Some(err),
            PipelineError::Export(_) => None,
        }
    }
}

impl From<RecoverError> for PipelineError {
    fn from(value: RecoverError) -> Self {
        PipelineError::Recover(value)
    }
}

impl From<RecoverConfigError> for PipelineError {
    fn from(value: RecoverConfigError) -> Self {
        PipelineError::RecoverConfig(value)
    }
}

impl From<ValidateConfigError> for PipelineError {
    fn from(value: ValidateConfigError) -> Self {
        PipelineError::ValidateConfig(value)
    }
}

impl From<NormalizeConfigError> for PipelineError {
    fn from(value: NormalizeConfigError) -> Self {
        PipelineError::NormalizeConfig(value)
    }
}

impl PipelineError {
    /// True when the caller should serve a fallback document instead of an
    /// error: the model answered, but nothing usable could be salvaged.
    pub fn wants_fallback(&self) -> bool {
        matches!(self, PipelineError::Recover(err) if err.is_retryable())
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedWireframe {
    /// Canonical document, ready for the renderer.
    pub document: Document,
    /// Advisory diagnosis of the recovered payload, taken before normalization.
    pub validation: ValidationResult,
    /// How the payload was recovered; `None` when the caller supplied a value.
    pub strategy: Option<RecoveryStrategy>,
    /// Set when recovery failed and `document` is the canned fallback.
    pub used_fallback: bool,
}

/// Metrics observer for pipeline stages.
pub trait PipelineMetrics: Send + Sync {
    fn record_recover(&self, latency: Duration, result: Result<RecoveryStrategy, RecoverError>);
    fn record_validate(&self, latency: Duration, result: &ValidationResult);
    fn record_normalize(&self, latency: Duration, components: usize);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_recover(self, result: Result<RecoveryStrategy, RecoverError>) {
        self.recorder.record_recover(self.start.elapsed(), result);
    }

    fn record_validate(self, result: &ValidationResult) {
        self.recorder.record_validate(self.start.elapsed(), result);
    }

    fn record_normalize(self, components: usize) {
        self.recorder
            .record_normalize(self.start.elapsed(), components);
    }
}

/// Recover, validate and normalize raw model output with explicit
/// configuration for every stage.
pub fn process_raw_with_configs(
    raw: &str,
    recover_cfg: &RecoverConfig,
    validate_cfg: &ValidateConfig,
    normalize_cfg: &NormalizeConfig,
) -> Result<ProcessedWireframe, PipelineError> {
    recover_cfg.validate()?;

    let span = tracing::span!(Level::INFO, "wirefix.process", raw_len = raw.len());
    let _guard = span.enter();

    let mut recover_metrics = MetricsSpan::start();
    let recovered = match recover_with(raw, recover_cfg) {
        Ok(found) => {
            if let Some(span) = recover_metrics.take() {
                span.record_recover(Ok(found.strategy));
            }
            found
        }
        Err(err) => {
            if let Some(span) = recover_metrics.take() {
                span.record_recover(Err(err.clone()));
            }
            return Err(PipelineError::Recover(err));
        }
    };

    let mut processed = process_value_with_configs(&recovered.value, validate_cfg, normalize_cfg)?;
    processed.strategy = Some(recovered.strategy);
    Ok(processed)
}

/// Recover, validate and normalize raw model output using default configs.
pub fn process_raw(raw: &str) -> Result<ProcessedWireframe, PipelineError> {
    process_raw_with_configs(
        raw,
        &RecoverConfig::default(),
        &ValidateConfig::default(),
        &NormalizeConfig::default(),
    )
}

/// Validate and normalize an already-parsed value.
pub fn process_value_with_configs(
    value: &Value,
    validate_cfg: &ValidateConfig,
    normalize_cfg: &NormalizeConfig,
) -> Result<ProcessedWireframe, PipelineError> {
    validate_cfg.validate()?;
    normalize_cfg.validate()?;

    let validate_metrics = MetricsSpan::start();
    let validation = validate_with(value, validate_cfg);
    if let Some(span) = validate_metrics {
        span.record_validate(&validation);
    }
    if !validation.is_valid {
        info!(
            errors = validation.errors.len(),
            first_error = validation.errors.first().map(String::as_str).unwrap_or(""),
            "process_validation_advisory"
        );
    }

    let normalize_metrics = MetricsSpan::start();
    let document = normalize_with(value, normalize_cfg);
    if let Some(span) = normalize_metrics {
        span.record_normalize(document.component_count());
    }

    Ok(ProcessedWireframe {
        document,
        validation,
        strategy: None,
        used_fallback: false,
    })
}

/// Validate and normalize an already-parsed value using default configs.
/// Infallible because the default configs are valid.
pub fn process_value(value: &Value) -> ProcessedWireframe {
    let validation = validate(value);
    let document = normalize(value);
    ProcessedWireframe {
        document,
        validation,
        strategy: None,
        used_fallback: false,
    }
}

/// Like [`process_raw`], but serves [`fallback_document`] built from
/// `description` when nothing can be recovered. Oversized input still errors.
pub fn process_raw_or_fallback(
    raw: &str,
    description: &str,
) -> Result<ProcessedWireframe, PipelineError> {
    match process_raw(raw) {
        Ok(processed) => Ok(processed),
        Err(err) if err.wants_fallback() => {
            warn!(error = %err, "process_fallback");
            Ok(fallback_wireframe_with(
                description,
                &ValidateConfig::default(),
                &NormalizeConfig::default(),
            ))
        }
        Err(err) => Err(err),
    }
}

/// Build, validate and wrap the fallback document for `description`.
///
/// Reports to the installed [`PipelineMetrics`] like a recovered payload
/// would, so dashboards see fallback traffic in the validate and normalize
/// stages.
pub fn fallback_wireframe_with(
    description: &str,
    validate_cfg: &ValidateConfig,
    normalize_cfg: &NormalizeConfig,
) -> ProcessedWireframe {
    let normalize_metrics = MetricsSpan::start();
    let document = fallback_document_with(description, normalize_cfg);
    if let Some(span) = normalize_metrics {
        span.record_normalize(document.component_count());
    }

    let validate_metrics = MetricsSpan::start();
    let mut wrapped = serde_json::Map::new();
    wrapped.insert(
        validate_cfg.primary_payload_key().to_string(),
        document.to_value(),
    );
    let validation = validate_with(&Value::Object(wrapped), validate_cfg);
    if let Some(span) = validate_metrics {
        span.record_validate(&validation);
    }

    ProcessedWireframe {
        document,
        validation,
        strategy: None,
        used_fallback: true,
    }
}
