//! Scan configuration parsing functionality

mod config_parser;
mod header_parser;
mod section_parser;

// Re-export the parsing functions
pub use config_parser::{classify, decode_config, decode_fixed_config, decode_slew_config};
pub use header_parser::parse_config_head;
pub use section_parser::parse_section;
