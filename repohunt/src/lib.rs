pub mod commands;
pub mod handlers;

pub use commands::command_argument_builder;
pub use handlers::{
    build_scrape_options, expand_path, failure_policy, handle_scrape, init_tracing,
    resolve_file_arguments,
};
