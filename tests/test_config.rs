use std::time::Duration;

use tinyhttpd::config::Config;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_config_from_positional_args() {
    let cfg = Config::from_args(args(&["8080", "/srv/www"])).unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.base_path, "/srv/www");
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.max_connections, None);
    assert_eq!(cfg.read_timeout(), None);
    assert!(cfg.expose_error_details);
    assert!(cfg.log_to_file);
}

#[test]
fn test_config_rejects_non_numeric_port() {
    assert!(Config::from_args(args(&["http", "/srv/www"])).is_err());
}

#[test]
fn test_config_rejects_wrong_argument_count() {
    assert!(Config::from_args(args(&[])).is_err());
    assert!(Config::from_args(args(&["1", "2", "3"])).is_err());
}

#[test]
fn test_config_from_yaml_defaults() {
    let cfg = Config::from_yaml("port: 9000\nbase_path: /var/www\n").unwrap();

    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.base_path, "/var/www");
    assert_eq!(cfg.host, "0.0.0.0");
    assert!(cfg.expose_error_details);
}

#[test]
fn test_config_from_yaml_all_fields() {
    let cfg = Config::from_yaml(
        "port: 9000\n\
         base_path: /var/www\n\
         host: 127.0.0.1\n\
         max_connections: 64\n\
         read_timeout_secs: 5\n\
         expose_error_details: false\n\
         log_to_file: false\n",
    )
    .unwrap();

    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.max_connections, Some(64));
    assert_eq!(cfg.read_timeout(), Some(Duration::from_secs(5)));
    assert!(!cfg.expose_error_details);
    assert!(!cfg.log_to_file);
}

#[test]
fn test_config_from_yaml_missing_port() {
    assert!(Config::from_yaml("base_path: /var/www\n").is_err());
}

#[test]
fn test_config_from_single_arg_reads_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("server.yaml");
    std::fs::write(&file, "port: 8081\nbase_path: /srv\n").unwrap();

    let cfg = Config::from_args(vec![file.to_string_lossy().into_owned()]).unwrap();

    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.base_path, "/srv");
}

#[test]
fn test_config_paths_are_concatenated() {
    let cfg = Config::new(80, "/srv/www");

    assert_eq!(cfg.document_path("/index.htm"), "/srv/www/index.htm");
    assert_eq!(cfg.document_path("x"), "/srv/wwwx");
    assert_eq!(cfg.log_file(), "/srv/www/log.txt");
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::new(80, "/srv/www");
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.base_path, cfg2.base_path);
}
