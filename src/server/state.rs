use std::sync::Arc;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Holds only the product list preloaded at startup, which never changes
/// while the server runs. Uploaded sheets are parsed per request and their
/// product list travels inside the returned page, never through this state.
#[derive(Clone, Default)]
pub struct AppState {
    /// Products preloaded from `--products` / `--sheet-url`.
    pub products: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(products: Vec<String>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }
}
