pub mod commands;
pub mod handlers;

pub use commands::command_argument_builder;
pub use handlers::{
    build_config, candidate_source, handle_scan, mode_from_flags, version_line,
    INTERRUPTED_EXIT_CODE,
};
