//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `ui`) so individual components can
//! depend on small focused models. Each model is a plain struct provided to
//! the component tree as an `RwSignal` context.

pub mod session;
pub mod ui;
