use super::*;

#[test]
fn test_defaults() {
    let config = PlayConfig::default();
    assert_eq!(config.depth, 3);
    assert_eq!(config.human_color, HumanSide::White);
    assert_eq!(config.max_moves, 200);
}

#[test]
fn test_empty_toml_uses_defaults() {
    assert_eq!(PlayConfig::from_toml_str("").unwrap(), PlayConfig::default());
}

#[test]
fn test_partial_toml() {
    let config = PlayConfig::from_toml_str("depth = 2\nhuman_color = \"black\"\n").unwrap();
    assert_eq!(config.depth, 2);
    assert_eq!(config.human_color, HumanSide::Black);
    assert_eq!(config.max_moves, 200);
}

#[test]
fn test_zero_depth_is_clamped() {
    let config = PlayConfig::from_toml_str("depth = 0").unwrap();
    assert_eq!(config.depth, 1);
}

#[test]
fn test_bad_toml_is_an_error() {
    assert!(PlayConfig::from_toml_str("human_color = \"green\"").is_err());
    assert!(PlayConfig::from_toml_str("depth = \"deep\"").is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let err = PlayConfig::load("/nonexistent/chess.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("chess_cli_config_{}.toml", std::process::id()));
    std::fs::write(&path, "human_color = \"none\"\nmax_moves = 10\n").unwrap();
    let config = PlayConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.human_color, HumanSide::None);
    assert_eq!(config.max_moves, 10);
    assert_eq!(config.depth, 3);
}

#[test]
fn test_human_side_from_str() {
    assert_eq!("White".parse::<HumanSide>().unwrap(), HumanSide::White);
    assert_eq!("b".parse::<HumanSide>().unwrap(), HumanSide::Black);
    assert_eq!("none".parse::<HumanSide>().unwrap(), HumanSide::None);
    assert!("purple".parse::<HumanSide>().is_err());
    assert_eq!(HumanSide::Black.color(), Some(Color::Black));
    assert_eq!(HumanSide::None.color(), None);
}
