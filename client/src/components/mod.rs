//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` gates protected routes on the session store; `shell` owns the
//! layout (including the navigation collapse state) and composes the rest.

pub mod debug_overlay;
pub mod guard;
pub mod nav_rail;
pub mod shell;
pub mod top_bar;
