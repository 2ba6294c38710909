//! Viewport error types

use thiserror::Error;

/// Viewport-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    /// A responsive value has no entry for the current breakpoint, no
    /// default and no entry at all
    #[error("no applicable responsive value")]
    NoApplicableValue,

    /// A breakpoint id that is not one of `sm`, `md`, `lg`, `xl`, `2xl`
    #[error("unknown breakpoint '{0}'")]
    UnknownBreakpoint(String),
}
