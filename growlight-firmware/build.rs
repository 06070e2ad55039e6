//! Build script for growlight-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates growlight.toml at compile time
//! - Generates the `SETTINGS` constant from growlight.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let config = validate_config();
    generate_settings(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate growlight.toml configuration at compile time
fn validate_config() -> toml::Value {
    // Re-run if growlight.toml changes
    println!("cargo:rerun-if-changed=growlight.toml");

    let config_path = Path::new("growlight.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: growlight.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a growlight.toml configuration file.      ║\n\
            ║  Please create one in the growlight-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read growlight.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in growlight.toml                    ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    for section in ["pump", "ui", "board"] {
        match config.get(section) {
            Some(toml::Value::Table(_)) => {}
            Some(_) => errors.push(format!("[{}] must be a table", section)),
            None => errors.push(format!("Missing [{}] section", section)),
        }
    }
    report("Missing required sections in growlight.toml", &errors);

    validate_pump(&config);
    validate_ui(&config);
    validate_board(&config);

    println!("cargo:warning=growlight.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Abort the build listing `errors`, if there are any
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Check that `[section] key` is an integer within `min..=max`
fn check_integer(config: &toml::Value, section: &str, key: &str, min: i64, max: i64, errors: &mut Vec<String>) {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(value)) => {
            if *value < min || *value > max {
                errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            }
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
        None => errors.push(format!("[{}] missing '{}'", section, key)),
    }
}

/// Check that `[section] key` is a boolean
fn check_bool(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Boolean(_)) => {}
        Some(_) => errors.push(format!("[{}] {} must be true or false", section, key)),
        None => errors.push(format!("[{}] missing '{}'", section, key)),
    }
}

/// Validate the irrigation cycle
fn validate_pump(config: &toml::Value) {
    let mut errors = Vec::new();
    check_integer(config, "pump", "run_minutes", 1, 1440, &mut errors);
    check_integer(config, "pump", "wait_minutes", 0, 1440, &mut errors);
    report("Invalid pump configuration", &errors);
}

/// Validate menu behavior
fn validate_ui(config: &toml::Value) {
    let mut errors = Vec::new();
    check_integer(config, "ui", "idle_timeout_ms", 1000, 600_000, &mut errors);
    check_integer(config, "ui", "duration_step_minutes", 1, 1440, &mut errors);
    check_integer(config, "ui", "power_step", 1, 100, &mut errors);
    check_integer(config, "ui", "max_shift_hours", 0, 23, &mut errors);
    check_bool(config, "ui", "invert_encoder", &mut errors);
    report("Invalid ui configuration", &errors);
}

/// Validate board wiring options
fn validate_board(config: &toml::Value) {
    let mut errors = Vec::new();
    check_integer(config, "board", "button_debounce_ms", 1, 500, &mut errors);
    check_bool(config, "board", "pump_active_low", &mut errors);
    report("Invalid board configuration", &errors);
}

fn integer(config: &toml::Value, section: &str, key: &str) -> i64 {
    config[section][key].as_integer().unwrap()
}

fn boolean(config: &toml::Value, section: &str, key: &str) -> bool {
    config[section][key].as_bool().unwrap()
}

/// Write `settings.rs` into OUT_DIR for `src/config.rs` to include
fn generate_settings(config: &toml::Value) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("settings.rs")).unwrap();

    writeln!(f, "// Generated from growlight.toml by build.rs").unwrap();
    writeln!(f, "pub const SETTINGS: Settings = Settings {{").unwrap();
    writeln!(f, "    pump: PumpCycle {{").unwrap();
    writeln!(f, "        run_minutes: {},", integer(config, "pump", "run_minutes")).unwrap();
    writeln!(f, "        wait_minutes: {},", integer(config, "pump", "wait_minutes")).unwrap();
    writeln!(f, "    }},").unwrap();
    writeln!(f, "    ui: UiConfig {{").unwrap();
    writeln!(f, "        idle_timeout_ms: {},", integer(config, "ui", "idle_timeout_ms")).unwrap();
    writeln!(
        f,
        "        duration_step_minutes: {},",
        integer(config, "ui", "duration_step_minutes")
    )
    .unwrap();
    writeln!(f, "        power_step: {},", integer(config, "ui", "power_step")).unwrap();
    writeln!(f, "        max_shift_hours: {},", integer(config, "ui", "max_shift_hours")).unwrap();
    writeln!(f, "        invert_encoder: {},", boolean(config, "ui", "invert_encoder")).unwrap();
    writeln!(f, "    }},").unwrap();
    writeln!(f, "}};").unwrap();
    writeln!(
        f,
        "pub const BUTTON_DEBOUNCE_MS: u64 = {};",
        integer(config, "board", "button_debounce_ms")
    )
    .unwrap();
    writeln!(
        f,
        "pub const PUMP_ACTIVE_LOW: bool = {};",
        boolean(config, "board", "pump_active_low")
    )
    .unwrap();
}
