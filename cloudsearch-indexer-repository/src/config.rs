//! Configuration types for the IndexSubmitter.

/// Largest batch the document endpoint accepts, in bytes.
pub const MAX_BATCH_BYTES: usize = 5 * 1024 * 1024;

/// Configuration for the IndexSubmitter.
#[derive(Debug, Clone)]
pub struct SubmitterConfig {
    /// Maximum number of documents allowed in a single batch.
    /// Set to None to disable the limit.
    pub max_batch_size: Option<usize>,
    /// Maximum serialized size of a batch in bytes.
    pub max_batch_bytes: Option<usize>,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            max_batch_size: Some(1000),
            max_batch_bytes: Some(MAX_BATCH_BYTES),
        }
    }
}

impl SubmitterConfig {
    /// Create a config with no batch limits (use with caution).
    pub fn unlimited() -> Self {
        Self {
            max_batch_size: None,
            max_batch_bytes: None,
        }
    }

    /// Create a config with a custom batch size limit.
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size: Some(max_batch_size),
            ..Self::default()
        }
    }
}
