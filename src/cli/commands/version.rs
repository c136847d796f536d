//! Version command implementation

use crate::cli::Output;
use anyhow::Result;

/// Execute the version command
pub fn execute(output: &Output) -> Result<()> {
    output.header(&format!("{} v{}", crate::PKG_NAME, crate::VERSION));
    output.key_value("Description:", crate::PKG_DESCRIPTION, false);
    output.key_value("Authors:", env!("CARGO_PKG_AUTHORS"), false);
    output.blank_line();

    output.category("Build Information");
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );

    // Build timestamp (if available)
    if let Ok(timestamp) = std::env::var("BUILD_TIMESTAMP") {
        output.key_value("Built at:", &timestamp, false);
    }

    output.blank_line();
    output.info(&format!("Run '{} --help' for usage information", crate::PKG_NAME));
    Ok(())
}
