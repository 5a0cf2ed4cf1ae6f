//! frontend-patcher library
//!
//! Literal substring patching for the bnf-frontend sources: known route
//! fixes for the market intel hooks, types and components, and the FDA
//! endpoints of the API client.
//!
//! Matching is exact text only. Edited files are not checked for syntax;
//! run the frontend build afterwards.

pub mod config;
pub mod error;
pub mod patch;
