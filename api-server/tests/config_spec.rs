use api_server::config::ServerConfig;
use clap::Parser;
use serial_test::serial;

const VARS: [&str; 4] = ["PORT", "BIND_ADDR", "DEBUGG_MODE", "NO_COLOR"];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn given_clean_env_when_parsing_then_defaults_apply() {
    clear_env();

    let config = ServerConfig::try_parse_from(["api-server"]).unwrap();

    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr, "0.0.0.0");
    assert!(config.debug_mode);
    assert!(config.no_color.is_none());
}

#[test]
#[serial]
fn given_env_vars_when_parsing_then_env_values_apply() {
    clear_env();
    std::env::set_var("PORT", "4100");
    std::env::set_var("DEBUGG_MODE", "false");

    let config = ServerConfig::try_parse_from(["api-server"]).unwrap();
    clear_env();

    assert_eq!(config.port, 4100);
    assert!(!config.debug_mode);
    assert!(!config.log_config().enabled);
}

#[test]
#[serial]
fn given_truthy_debug_mode_when_parsing_then_log_enabled() {
    clear_env();
    std::env::set_var("DEBUGG_MODE", "yes");

    let config = ServerConfig::try_parse_from(["api-server"]).unwrap();
    clear_env();

    assert!(config.log_config().enabled);
    assert!(config.log_config().color);
}

#[test]
#[serial]
fn given_no_color_env_when_parsing_then_color_disabled_for_any_value() {
    for value in ["1", "0", "false", "please"] {
        clear_env();
        std::env::set_var("NO_COLOR", value);

        let config = ServerConfig::try_parse_from(["api-server"]);
        clear_env();

        let config = config.expect("NO_COLOR value should never fail parsing");
        assert!(!config.log_config().color, "NO_COLOR={value:?}");
        assert!(config.log_config().enabled);
    }
}
