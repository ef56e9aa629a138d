#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use timedecho_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8000"
  blocking_workerz: 4 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    assert_eq!(cfg.server.blocking_workers, 40);
    assert_eq!(cfg.server.max_sleep_sec, None);
    assert_eq!(cfg.logging.logger, "myapp");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
  blocking_workers: 1
  max_sleep_sec: 5.5
logging:
  logger: "echo"
  level: "debug"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.server.blocking_workers, 1);
    assert_eq!(cfg.server.max_sleep_sec, Some(5.5));
    assert_eq!(cfg.logging.logger, "echo");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_out_of_range_values() {
    for bad in [
        "version: 1\nserver:\n  blocking_workers: 0\n",
        "version: 1\nserver:\n  max_sleep_sec: -1.0\n",
        "version: 1\nserver:\n  max_sleep_sec: .inf\n",
        "version: 1\nserver:\n  listen: \"not-an-addr\"\n",
        "version: 1\nlogging:\n  level: \"loud\"\n",
        "version: 1\nlogging:\n  logger: \"  \"\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "{bad}");
    }
}

#[test]
fn defaults_validate() {
    config::EchoConfig::default().validate().unwrap();
}
