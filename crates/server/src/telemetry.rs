use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_SERVICE_NAME: &str = "court-records";

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("failed to build OTLP exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),
}

fn tls_config(endpoint: &str) -> Option<opentelemetry_otlp::tonic_types::transport::ClientTlsConfig> {
    endpoint.starts_with("https://").then(|| {
        opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots()
    })
}

fn resource(service_name: String, environment: String) -> opentelemetry_sdk::Resource {
    opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build()
}

fn span_exporter(endpoint: &str) -> Result<opentelemetry_otlp::SpanExporter, TelemetryError> {
    let builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint);
    let builder = match tls_config(endpoint) {
        Some(tls) => builder.with_tls_config(tls),
        None => builder,
    };
    Ok(builder.build()?)
}

fn log_exporter(endpoint: &str) -> Result<opentelemetry_otlp::LogExporter, TelemetryError> {
    let builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint);
    let builder = match tls_config(endpoint) {
        Some(tls) => builder.with_tls_config(tls),
        None => builder,
    };
    Ok(builder.build()?)
}

/// Start OTLP export of request spans and `log` records.
///
/// Must run inside the Tokio runtime. Environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address, nothing is
///     exported when it is unset
///   - `OTEL_SERVICE_NAME`: defaults to `court-records`
///   - `DEPLOY_ENV`: defaults to `development`
///
/// Returns whether export was switched on.
pub fn init_telemetry() -> Result<bool, TelemetryError> {
    let _ = dotenvy::dotenv();

    let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
        tracing::info!("telemetry flag on but OTEL_EXPORTER_OTLP_ENDPOINT unset, not exporting");
        return Ok(false);
    };
    let resource = resource(
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),
        std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string()),
    );

    global::set_tracer_provider(
        opentelemetry_sdk::trace::SdkTracerProvider::builder()
            .with_batch_exporter(span_exporter(&endpoint)?)
            .with_resource(resource.clone())
            .build(),
    );

    let logs = log_exporter(&endpoint)?;
    let provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(logs)
            .with_resource(resource)
            .build()
    });
    // tracing events arrive here as `log` records (tracing's `log-always` feature).
    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(provider);
    if log::set_boxed_logger(Box::new(bridge)).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    } else {
        tracing::warn!("a `log` logger is already installed, OTLP log export disabled");
    }

    tracing::info!(%endpoint, version = APP_VERSION, "exporting telemetry");
    Ok(true)
}

fn header_str<'a>(req: &'a Request<Body>, name: &str) -> &'a str {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Span attributes describing an incoming request.
fn request_attributes(req: &Request<Body>) -> Vec<KeyValue> {
    let mut attributes = vec![
        KeyValue::new("http.method", req.method().to_string()),
        KeyValue::new("http.target", req.uri().path().to_string()),
        KeyValue::new("http.user_agent", header_str(req, "user-agent").to_string()),
        KeyValue::new("http.request_id", header_str(req, "x-request-id").to_string()),
    ];
    let content_type = header_str(req, "content-type");
    if !content_type.is_empty() {
        // Multipart content types carry a boundary; only the media type is useful.
        let media_type = content_type.split(';').next().unwrap_or("").trim();
        attributes.push(KeyValue::new("http.request_content_type", media_type.to_string()));
    }
    attributes
}

/// Record the outcome of a request on its span. 5xx marks the span as
/// failed; 4xx only tags it.
fn record_status(cx: &Context, status: axum::http::StatusCode) {
    let span = cx.span();
    span.set_attribute(KeyValue::new("http.status_code", i64::from(status.as_u16())));
    if status.is_server_error() {
        span.set_status(opentelemetry::trace::Status::error(status.to_string()));
    } else if status.is_client_error() {
        span.set_attribute(KeyValue::new("error.type", "client_error"));
    }
}

/// Opens one OpenTelemetry server span per request, named `METHOD /path`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestSpanLayer;

impl<S> Layer<S> for RequestSpanLayer {
    type Service = RequestSpan<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestSpan { inner }
    }
}

#[derive(Clone, Debug)]
pub struct RequestSpan<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestSpan<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(DEFAULT_SERVICE_NAME);
        let span = tracer
            .span_builder(format!("{} {}", req.method(), req.uri().path()))
            .with_kind(SpanKind::Server)
            .with_attributes(request_attributes(&req))
            .start(&tracer);
        let cx = Context::current_with_span(span);

        let future = {
            let _attached = cx.clone().attach();
            self.inner.call(req)
        };

        Box::pin(async move {
            let response = future.await?;
            record_status(&cx, response.status());
            Ok(response)
        })
    }
}
