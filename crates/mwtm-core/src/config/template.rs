/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `mwtm --init-config` to create a starter config file
/// that users can immediately edit.
pub fn generate_config() -> String {
    r##"# mwtm configuration
# Location: ~/.config/mwtm/config.toml

[placement]
# Distance in pixels from the target monitor's top-left corner
# to the moved window's top-left corner (0 to 1000).
offset_x = 10
offset_y = 10

[logging]
# Minimum level printed to stderr: "debug", "info", "warn", or "error".
# --verbose forces "debug"; RUST_LOG overrides both.
level = "warn"
"##
    .to_string()
}
