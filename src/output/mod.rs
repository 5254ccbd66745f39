pub mod formatter;

pub use formatter::format_output;
