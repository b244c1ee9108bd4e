//! Error types for the terminal component.

/// Error produced by an engine or add-on implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by mounting or driving a terminal instance.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// The container is already attached to another engine instance.
    #[error("container {container} is already attached to instance {owner}")]
    ContainerBusy { container: usize, owner: usize },

    /// The engine constructor failed.
    #[error("failed to create terminal engine: {0}")]
    Create(#[source] BoxError),

    /// The engine could not be opened against the container.
    #[error("failed to open terminal engine in container {container}: {source}")]
    Open {
        container: usize,
        #[source]
        source: BoxError,
    },

    /// An add-on failed to load. Add-ons after `index` were not loaded.
    #[error("failed to load addon #{index}: {source}")]
    Addon {
        index: usize,
        #[source]
        source: BoxError,
    },

    /// No engine instance is currently live.
    #[error("terminal is not mounted")]
    NotMounted,
}
