//! Command implementations for the `tabws` CLI.
//!
//! - `session` - opens the file-backed workspace every tab command runs on
//! - `tabs` - tab commands (open, list, close, pin, rename, move)

pub(crate) mod session;
pub(crate) mod tabs;

pub(crate) use session::*;
pub(crate) use tabs::*;
