//! CPU client and its configuration

use crate::algorithm::linalg::{EigenOptions, SqrtmOptions};
use crate::error::{Error, Result};
use crate::profile::{ProfileHook, ProfileRecord};
use std::fmt;
use std::sync::Arc;

/// Configuration options for [`CpuClient`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuClientOptions {
    /// Jacobi eigen-solver options
    pub eigen: EigenOptions,

    /// Square root tolerances
    pub sqrtm: SqrtmOptions,

    /// Minimum output rows before matmul is split across threads (default: 128)
    ///
    /// Only used with the `rayon` feature.
    pub parallel_min_rows: usize,

    /// Minimum rows handed to one rayon task (default: 8)
    pub rayon_min_len: usize,
}

impl Default for CpuClientOptions {
    fn default() -> Self {
        Self {
            eigen: EigenOptions::default(),
            sqrtm: SqrtmOptions::default(),
            parallel_min_rows: 128,
            rayon_min_len: 8,
        }
    }
}

impl CpuClientOptions {
    /// Check every nested option
    pub fn validate(&self) -> Result<()> {
        self.eigen.validate()?;
        self.sqrtm.validate()?;
        if self.rayon_min_len == 0 {
            return Err(Error::invalid_argument(
                "rayon_min_len",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// CPU client for operation dispatch
///
/// Holds configuration only; it owns no matrices and no mutable state, so a
/// single client can be shared freely across threads.
#[derive(Clone, Default)]
pub struct CpuClient {
    options: CpuClientOptions,
    profile_hook: Option<ProfileHook>,
}

impl CpuClient {
    /// Create a client with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with custom options
    ///
    /// Returns `InvalidArgument` if any option is out of range.
    pub fn with_options(options: CpuClientOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            profile_hook: None,
        })
    }

    /// Attach a callback invoked after every matrix function call
    pub fn with_profile_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ProfileRecord) + Send + Sync + 'static,
    {
        self.profile_hook = Some(Arc::new(hook));
        self
    }

    /// Active options
    #[inline]
    pub fn options(&self) -> &CpuClientOptions {
        &self.options
    }

    #[inline]
    pub(crate) fn profile_hook(&self) -> Option<&ProfileHook> {
        self.profile_hook.as_ref()
    }
}

impl fmt::Debug for CpuClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuClient")
            .field("options", &self.options)
            .field("profile_hook", &self.profile_hook.is_some())
            .finish()
    }
}
