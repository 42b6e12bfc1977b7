use jotter::config::AppConfig;

#[test]
fn defaults_match_the_documented_surface() {
    let config = AppConfig::default();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.database.host, "localhost");
    assert_eq!(config.database.port, 3306);
    assert_eq!(config.database.database, "cal");
    assert_eq!(config.database.max_connections, 1);
    assert_eq!(config.database.connect_timeout_secs, 30);
}
