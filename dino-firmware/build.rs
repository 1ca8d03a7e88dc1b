//! Build script for dino-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time
//! - Generates the board pin map and game tuning from game.toml

use std::collections::BTreeMap;
use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use dino_core::config::{ConfigError, GameConfig};
use serde::Deserialize;

/// Highest RP2040 GPIO number
const MAX_GPIO: u8 = 29;

fn main() {
    setup_linker();
    let config = load_config();
    let (button, game) = validate_config(&config);
    generate_board_config(&config.lcd, button, &game);
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
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GameToml {
    lcd: LcdPins,
    #[serde(default)]
    button: ButtonTable,
    #[serde(default)]
    game: GameTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LcdPins {
    d0: u8,
    d1: u8,
    d2: u8,
    d3: u8,
    d4: u8,
    d5: u8,
    d6: u8,
    d7: u8,
    e: u8,
    rs: u8,
    rw: u8,
}

impl LcdPins {
    fn data(&self) -> [u8; 8] {
        [
            self.d0, self.d1, self.d2, self.d3, self.d4, self.d5, self.d6, self.d7,
        ]
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ButtonKind {
    #[default]
    Bootsel,
    Gpio,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ButtonTable {
    #[serde(default)]
    source: ButtonKind,
    pin: Option<u8>,
    active_low: Option<bool>,
}

/// Resolved button wiring
#[derive(Debug, Clone, Copy)]
enum ButtonWiring {
    Bootsel,
    Gpio { pin: u8, active_low: bool },
}

/// Overrides for `GameConfig`; missing keys keep the defaults
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GameTable {
    jump_cap: Option<u8>,
    steps_per_spawn: Option<u8>,
    spawn_range: Option<u32>,
    frame_delay_ms: Option<u32>,
    session_start_delay_ms: Option<u32>,
    input_poll_ms: Option<u32>,
}

impl GameTable {
    fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(v) = self.jump_cap {
            config.jump_cap = v;
        }
        if let Some(v) = self.steps_per_spawn {
            config.steps_per_spawn = v;
        }
        if let Some(v) = self.spawn_range {
            config.spawn_range = v;
        }
        if let Some(v) = self.frame_delay_ms {
            config.frame_delay_ms = v;
        }
        if let Some(v) = self.session_start_delay_ms {
            config.session_start_delay_ms = v;
        }
        if let Some(v) = self.input_poll_ms {
            config.input_poll_ms = v;
        }
        config
    }
}

/// Read and parse game.toml
fn load_config() -> GameToml {
    // Re-run if game.toml changes
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a game.toml configuration file            ║\n\
            ║  in the dino-firmware directory.                                 ║\n\
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
                ║  ERROR: Failed to read game.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax and structure
    match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid game.toml                                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
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

/// Validate pin assignments and game tuning
///
/// Returns the button wiring and the effective game configuration.
fn validate_config(config: &GameToml) -> (ButtonWiring, GameConfig) {
    let mut errors = Vec::new();

    // Every pin exists and is used once
    let mut pins: BTreeMap<u8, Vec<String>> = BTreeMap::new();
    for (i, pin) in config.lcd.data().iter().enumerate() {
        pins.entry(*pin).or_default().push(format!("lcd.d{}", i));
    }
    pins.entry(config.lcd.e).or_default().push("lcd.e".into());
    pins.entry(config.lcd.rs).or_default().push("lcd.rs".into());
    pins.entry(config.lcd.rw).or_default().push("lcd.rw".into());
    match config.button.source {
        ButtonKind::Gpio => match config.button.pin {
            Some(pin) => pins.entry(pin).or_default().push("button.pin".into()),
            None => errors.push("[button] source = \"gpio\" needs a pin".into()),
        },
        ButtonKind::Bootsel => {
            if config.button.pin.is_some() || config.button.active_low.is_some() {
                errors.push("[button] pin and active_low only apply to source = \"gpio\"".into());
            }
        }
    }

    for (pin, users) in &pins {
        if *pin > MAX_GPIO {
            errors.push(format!("{} = {} is not a GPIO (0-{})", users.join(", "), pin, MAX_GPIO));
        }
        if users.len() > 1 {
            errors.push(format!("GPIO {} assigned twice: {}", pin, users.join(", ")));
        }
    }

    let game = config.game.apply(GameConfig::default());
    if let Err(e) = game.validate() {
        errors.push(
            match e {
                ConfigError::ZeroJumpCap => "[game] jump_cap must be at least 1",
                ConfigError::ZeroStepsPerSpawn => "[game] steps_per_spawn must be at least 1",
                ConfigError::SpawnRangeTooSmall => "[game] spawn_range must be at least 3",
                ConfigError::ZeroFrameDelay => "[game] frame_delay_ms must be at least 1",
            }
            .into(),
        );
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in game.toml                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    let button = match (config.button.source, config.button.pin) {
        (ButtonKind::Gpio, Some(pin)) => ButtonWiring::Gpio {
            pin,
            active_low: config.button.active_low.unwrap_or(true),
        },
        _ => ButtonWiring::Bootsel,
    };

    (button, game)
}

/// Write the pin map and tuning as Rust source into OUT_DIR
fn generate_board_config(lcd: &LcdPins, button: ButtonWiring, game: &GameConfig) {
    let data = lcd.data();
    let mut out = String::new();

    writeln!(out, "// Generated by build.rs from game.toml. Do not edit.").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// LCD data bus GPIOs, D0 first").unwrap();
    writeln!(out, "pub const LCD_DATA_PINS: [u8; 8] = {:?};", data).unwrap();
    writeln!(out, "/// LCD enable GPIO").unwrap();
    writeln!(out, "pub const LCD_ENABLE_PIN: u8 = {};", lcd.e).unwrap();
    writeln!(out, "/// LCD register select GPIO").unwrap();
    writeln!(out, "pub const LCD_RS_PIN: u8 = {};", lcd.rs).unwrap();
    writeln!(out, "/// LCD read/write GPIO").unwrap();
    writeln!(out, "pub const LCD_RW_PIN: u8 = {};", lcd.rw).unwrap();
    let wiring = match button {
        ButtonWiring::Bootsel => "BOOTSEL".to_string(),
        ButtonWiring::Gpio { pin, active_low } => {
            format!("GPIO{} active-{}", pin, if active_low { "low" } else { "high" })
        }
    };
    writeln!(out, "/// Button wiring, for the boot log").unwrap();
    writeln!(out, "pub const BUTTON_WIRING: &str = {:?};", wiring).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "/// Game tuning").unwrap();
    writeln!(out, "pub const GAME_CONFIG: dino_core::config::GameConfig = dino_core::config::GameConfig {{").unwrap();
    writeln!(out, "    jump_cap: {},", game.jump_cap).unwrap();
    writeln!(out, "    steps_per_spawn: {},", game.steps_per_spawn).unwrap();
    writeln!(out, "    spawn_range: {},", game.spawn_range).unwrap();
    writeln!(out, "    frame_delay_ms: {},", game.frame_delay_ms).unwrap();
    writeln!(out, "    session_start_delay_ms: {},", game.session_start_delay_ms).unwrap();
    writeln!(out, "    input_poll_ms: {},", game.input_poll_ms).unwrap();
    writeln!(out, "}};").unwrap();
    writeln!(out).unwrap();

    // Peripheral fields can only be named literally, hence a macro
    let take = |pin: u8| format!("$p.PIN_{}.into()", pin);
    writeln!(out, "/// Move the configured pins out of `Peripherals`").unwrap();
    writeln!(out, "macro_rules! take_board_pins {{").unwrap();
    writeln!(out, "    ($p:ident) => {{").unwrap();
    writeln!(out, "        $crate::board::BoardPins {{").unwrap();
    writeln!(out, "            lcd_data: [").unwrap();
    for pin in data {
        writeln!(out, "                {},", take(pin)).unwrap();
    }
    writeln!(out, "            ],").unwrap();
    writeln!(out, "            lcd_enable: {},", take(lcd.e)).unwrap();
    writeln!(out, "            lcd_rs: {},", take(lcd.rs)).unwrap();
    writeln!(out, "            lcd_rw: {},", take(lcd.rw)).unwrap();
    match button {
        ButtonWiring::Bootsel => {
            writeln!(out, "            button: $crate::board::ButtonPin::Bootsel($p.BOOTSEL),").unwrap();
        }
        ButtonWiring::Gpio { pin, active_low } => {
            writeln!(
                out,
                "            button: $crate::board::ButtonPin::Gpio {{ pin: {}, active_low: {} }},",
                take(pin),
                active_low
            )
            .unwrap();
        }
    }
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }};").unwrap();
    writeln!(out, "}}").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("board_config.rs"), out).unwrap();

    println!("cargo:warning=game.toml validated successfully");
}
