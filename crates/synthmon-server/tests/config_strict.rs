#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use synthmon_core::SynthmonError;
use synthmon_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
sampling:
  tick_mss: 500 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, SynthmonError::Config(_)));
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
}

#[test]
fn defaults_reproduce_reference_constants() {
    let cfg = config::ServerConfig::default();
    cfg.validate().expect("defaults must validate");
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.sampling.tick_ms, 1000);
    assert_eq!(cfg.sampling.queue_capacity, 10);
    assert_eq!(cfg.sampling.value_bound, 10_000_000);
}

#[test]
fn reject_unsupported_version() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, SynthmonError::Config(_)));
}

#[test]
fn reject_out_of_range_sampling() {
    let bad_tick = r#"
version: 1
sampling:
  tick_ms: 5
"#;
    assert!(config::load_from_str(bad_tick).is_err());

    let bad_cap = r#"
version: 1
sampling:
  queue_capacity: 0
"#;
    assert!(config::load_from_str(bad_cap).is_err());

    let bad_bound = r#"
version: 1
sampling:
  value_bound: 0
"#;
    assert!(config::load_from_str(bad_bound).is_err());
}
