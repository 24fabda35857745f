use std::sync::Arc;

use tickerboard_core::{ChartAssembler, CredentialVerifier, SymbolCatalog};

/// Shared read-only server state; all of it is initialized at startup and
/// never mutated across submits.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SymbolCatalog>,
    pub assembler: Arc<ChartAssembler>,
    pub verifier: Arc<dyn CredentialVerifier>,
}
