use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while scanning a function.
#[derive(Debug, Error)]
pub enum Error {
    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("scan aborted by observer at x = {x}")]
    Aborted { x: f64 },
}
