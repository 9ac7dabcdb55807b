//! Transport wrapper - configuration, validation and the instrumented
//! decorator.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use http::{Request, Response};
use prometheus::Registry;
use tracing::{dispatcher, warn, Dispatch};

use super::Transport;
use crate::classifier::PathClassifier;
use crate::metrics::{MetricsRecorder, RequestLabels};
use crate::schema::ApiSchema;

/// Status code label recorded when the delegate fails before producing a
/// response. `0` is not a valid HTTP status, so the series is unambiguous,
/// and `request_count` stays equal to the number of attempts.
const NO_RESPONSE_CODE: &str = "0";

/// Configuration for [`TransportWrapper::new`].
///
/// `logger` and `subsystem` are mandatory; the rest default.
#[derive(Clone, Default)]
pub struct TransportWrapperConfig {
    /// Diagnostic sink for best-effort instrumentation errors. Recording
    /// failures are logged here and never surfaced to the caller.
    pub logger: Option<Dispatch>,
    /// Non-empty prefix for the metric names, e.g. `api_outbound` yields
    /// `api_outbound_request_count`.
    pub subsystem: Option<String>,
    /// Registry the metric families are registered into. Defaults to the
    /// process-wide default registry.
    pub registry: Option<Registry>,
    /// Route schema driving path classification. Defaults to
    /// [`ApiSchema::ocm`].
    pub schema: Option<ApiSchema>,
}

/// Error constructing a [`TransportWrapper`].
///
/// Construction either succeeds completely or fails with one of these;
/// there is no partially-built wrapper.
#[derive(Debug)]
pub enum ConfigError {
    /// A required configuration field was not provided.
    Mandatory { field: &'static str },
    /// The route schema could not be compiled into a matcher.
    Schema(anyhow::Error),
    /// The registry rejected one of the metric families, typically because
    /// the same subsystem was already registered into it.
    Registry(prometheus::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Mandatory { field } => {
                write!(f, "{field} parameter is mandatory")
            }
            ConfigError::Schema(err) => {
                write!(f, "can't build route matcher: {err}")
            }
            ConfigError::Registry(err) => {
                write!(f, "can't register request metrics: {err}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Mandatory { .. } => None,
            ConfigError::Schema(err) => Some(err.as_ref()),
            ConfigError::Registry(err) => Some(err),
        }
    }
}

/// Factory for instrumented transports.
///
/// Holds the classifier and recorder built from a validated configuration;
/// [`wrap`](Self::wrap) shares them with every decorator it hands out, so
/// all transports wrapped by the same wrapper feed the same series.
#[derive(Clone)]
pub struct TransportWrapper {
    logger: Dispatch,
    classifier: Arc<PathClassifier>,
    recorder: Arc<MetricsRecorder>,
}

impl TransportWrapper {
    /// Validate `config` and build a wrapper.
    ///
    /// `logger` and `subsystem` are both checked; with several fields
    /// missing the error reports the first one. An empty `subsystem` counts
    /// as missing, since it is the metric name prefix.
    pub fn new(config: TransportWrapperConfig) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        if config.logger.is_none() {
            missing.push("logger");
        }
        if config.subsystem.as_deref().map_or(true, str::is_empty) {
            missing.push("subsystem");
        }
        if let Some(&field) = missing.first() {
            return Err(ConfigError::Mandatory { field });
        }

        let logger = config.logger.unwrap_or_else(Dispatch::none);
        let subsystem = config.subsystem.unwrap_or_default();
        let registry = config
            .registry
            .unwrap_or_else(|| prometheus::default_registry().clone());
        let schema = config.schema.unwrap_or_else(ApiSchema::ocm);

        let classifier = PathClassifier::from_schema(&schema).map_err(ConfigError::Schema)?;
        let recorder =
            MetricsRecorder::new(&subsystem, &registry).map_err(ConfigError::Registry)?;

        Ok(Self {
            logger,
            classifier: Arc::new(classifier),
            recorder: Arc::new(recorder),
        })
    }

    /// Decorate `delegate` with instrumentation. Never fails.
    #[must_use]
    pub fn wrap<T: Transport>(&self, delegate: T) -> InstrumentedTransport<T> {
        InstrumentedTransport {
            delegate,
            logger: self.logger.clone(),
            classifier: Arc::clone(&self.classifier),
            recorder: Arc::clone(&self.recorder),
        }
    }
}

/// A transport decorated with request metrics.
#[derive(Clone)]
pub struct InstrumentedTransport<T> {
    delegate: T,
    logger: Dispatch,
    classifier: Arc<PathClassifier>,
    recorder: Arc<MetricsRecorder>,
}

impl<T: Transport> Transport for InstrumentedTransport<T> {
    /// Execute the request through the delegate, then record one
    /// observation.
    ///
    /// The request is handed to the delegate unmodified and its outcome is
    /// returned unchanged, whatever it is. Elapsed time is measured around
    /// the delegate call alone and recorded even when the call fails; a
    /// failure with no response is recorded under code `0`. Recording
    /// failures are logged through the configured sink and swallowed.
    fn execute(&self, request: Request<Vec<u8>>) -> anyhow::Result<Response<Vec<u8>>> {
        let method = request.method().as_str().to_string();
        let path = request.uri().path().to_string();

        let start = Instant::now();
        let outcome = self.delegate.execute(request);
        let elapsed = start.elapsed();

        let code = match &outcome {
            Ok(response) => response.status().as_u16().to_string(),
            Err(_) => NO_RESPONSE_CODE.to_string(),
        };
        let path_labels = self.classifier.classify(&path);
        let labels = RequestLabels {
            method,
            path: path_labels.path,
            code,
            api_service: path_labels.api_service,
        };

        if let Err(err) = self.recorder.observe(&labels, elapsed.as_secs_f64()) {
            dispatcher::with_default(&self.logger, || {
                warn!(
                    error = %err,
                    method = %labels.method,
                    path = %labels.path,
                    "can't record request metrics"
                );
            });
        }

        outcome
    }
}
