// src/config/consts.rs

// Log shape (BGA archive logs, translated=true)
pub const ROLE_MARKER: &str = r#"["rol_type_tr"],"player_name""#;
pub const LOG_FIELD: &str = "log";
pub const PLAYER_FIELD: &str = "player_name";
pub const ROLE_FIELD: &str = "rol_type";
pub const NOISE_TEMPLATE: &str = "${player_name} selected the ${rol_type_tr}";

// Field extractor delimiters; values are flat and never contain these unescaped
pub const FIELD_QUOTE: char = '"';
pub const FIELD_ASSIGN: char = ':';
pub const BARE_TERMINATORS: [char; 2] = [',', '}'];

// Placeholders inside templated messages
pub const TOKEN_OPEN: char = '{';
pub const TOKEN_CLOSE: char = '}';

// Prefix of player and item names (and amounts) in resolved event text
pub const SIGIL: char = '$';

// Log store
pub const LOG_EXT: &str = "log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "tally";

// Concurrency
pub const WORKERS: usize = 4;
