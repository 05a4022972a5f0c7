use std::path::PathBuf;
use wimwsop::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.listen_port, 80);
    assert_eq!(cfg.thread_limit, 8);
    assert_eq!(cfg.document_root, PathBuf::from("/var/www/html"));
}

#[test]
fn test_config_missing_file_falls_back_to_defaults() {
    let cfg = Config::load("/nonexistent/dir/httpd.conf").unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_config_parses_all_keys() {
    let cfg = Config::parse("listen 8080\nthread_limit 4\ndocument_root /srv/www\n");
    assert_eq!(cfg.listen_port, 8080);
    assert_eq!(cfg.thread_limit, 4);
    assert_eq!(cfg.document_root, PathBuf::from("/srv/www"));
}

#[test]
fn test_config_partial_file_keeps_other_defaults() {
    let cfg = Config::parse("listen 3000\n");
    assert_eq!(cfg.listen_port, 3000);
    assert_eq!(cfg.thread_limit, 8);
    assert_eq!(cfg.document_root, PathBuf::from("/var/www/html"));
}

#[test]
fn test_config_unknown_key_is_ignored() {
    let cfg = Config::parse("cpu_limit 4\nlisten 81\n");
    assert_eq!(cfg.listen_port, 81);
    assert_eq!(cfg.thread_limit, 8);
}

#[test]
fn test_config_malformed_lines_are_ignored() {
    let cfg = Config::parse("listen\n\n# comment line\nthread_limit 2\n");
    assert_eq!(cfg.listen_port, 80);
    assert_eq!(cfg.thread_limit, 2);
}

#[test]
fn test_config_bad_values_are_ignored() {
    let cfg = Config::parse("listen eighty\nthread_limit 0\nthread_limit -3\n");
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_config_extra_tokens_and_later_lines_win() {
    let cfg = Config::parse("listen 8000 trailing words\nlisten 9000\n");
    assert_eq!(cfg.listen_port, 9000);
}

#[test]
fn test_config_numeric_document_root_stays_a_path() {
    let cfg = Config::parse("document_root 2024\n");
    assert_eq!(cfg.document_root, PathBuf::from("2024"));
}

#[test]
fn test_config_load_reads_file() {
    let dir = std::env::temp_dir().join(format!("wimwsop-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("httpd.conf");
    std::fs::write(&path, "listen 8081\nthread_limit 16\n").unwrap();

    let cfg = Config::load(&path).unwrap();
    assert_eq!(cfg.listen_port, 8081);
    assert_eq!(cfg.thread_limit, 16);

    std::fs::remove_dir_all(&dir).unwrap();
}
