use std::sync::Arc;

use crate::config::Config;
use crate::decode::DocumentDecoder;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration and the decoder only; no per-request results are kept here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document decoder. Default: PdfTextDecoder.
    pub decoder: Arc<dyn DocumentDecoder>,
}
