//! CLI commands

pub mod fix_routes;
pub mod patch_api_client;
pub mod utils;
