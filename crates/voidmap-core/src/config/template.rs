/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `voidmap init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# voidmap configuration
# Location: ~/.config/voidmap/config.toml

[output]
# Merge edge-adjacent voids that share a side before printing.
# Can also be requested per run with --group.
group = false
# Output format: "text" (one rectangle per line) or "json".
format = "text"

[logging]
# Enable file logging to ~/.config/voidmap/logs/voidmap.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
