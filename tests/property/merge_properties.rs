//! Property-based tests for merge guarantees

use proptest::prelude::*;
use rest_gateway_config::{merge_config, RestApiConfig};

/// Strategy producing an arbitrary configuration source: each field
/// independently set or unset.
fn config_strategy() -> impl Strategy<Value = RestApiConfig> {
    let addr = "[a-z]{1,8}:[0-9]{1,5}";
    (
        prop::option::of(prop::collection::vec(addr, 0..3)),
        prop::option::of("tcp://[a-z]{1,8}:[0-9]{1,5}"),
        prop::option::of(0i64..100_000),
        prop::option::of("[a-z_]{0,12}"),
        prop::option::of("[a-z_:/]{0,16}"),
        prop::option::of("[a-z]{0,8}"),
        prop::option::of("[a-z0-9]{0,8}"),
    )
        .prop_map(
            |(bind, connect, timeout, opentsdb_db, opentsdb_url, opentsdb_username, opentsdb_password)| {
                RestApiConfig {
                    bind,
                    connect,
                    timeout,
                    opentsdb_db,
                    opentsdb_url,
                    opentsdb_username,
                    opentsdb_password,
                }
            },
        )
}

#[test]
fn test_single_source_merge_is_identity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&config_strategy(), |config| {
            assert_eq!(merge_config(&[config.clone()]), config);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_merge_is_idempotent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&config_strategy(), |config| {
            assert_eq!(merge_config(&[config.clone(), config.clone()]), config);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_merge_is_associative_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(config_strategy(), config_strategy(), config_strategy()),
            |(a, b, c)| {
                let flat = merge_config(&[a.clone(), b.clone(), c.clone()]);
                let nested = merge_config(&[a, merge_config(&[b, c])]);
                assert_eq!(flat, nested);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_first_set_source_wins_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(config_strategy(), config_strategy()), |(a, b)| {
            let merged = merge_config(&[a.clone(), b.clone()]);
            assert_eq!(merged.timeout, a.timeout.or(b.timeout));
            assert_eq!(merged.bind, a.bind.clone().or(b.bind.clone()));
            assert_eq!(merged.connect, a.connect.clone().or(b.connect.clone()));
            assert_eq!(
                merged.opentsdb_password,
                a.opentsdb_password.clone().or(b.opentsdb_password.clone())
            );
            Ok(())
        })
        .unwrap();
}
