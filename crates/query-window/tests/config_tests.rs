use std::fs;
use std::time::Duration;

use query_window::config::QueryWindowConfig;
use query_window::domain::schema::{PeriodConfig, SchemaConfig};
use query_window::domain::types::{
    IngesterWindowBound, IngesterWindowRequest, LookbackRequest, ObjectKind,
};
use query_window::error::Error;

#[test]
fn default_config_basics() {
    let cfg = QueryWindowConfig::default();

    assert_eq!(cfg.max_chunk_age(), Duration::from_secs(2 * 60 * 60));
    assert_eq!(cfg.index_resync_interval(), Duration::from_secs(5 * 60));
    assert_eq!(cfg.max_look_back, LookbackRequest::UseDefault);
    assert_eq!(
        cfg.query_ingesters_within,
        IngesterWindowRequest::Window(Duration::from_secs(3 * 60 * 60))
    );
    assert_eq!(cfg.schema.periods.len(), 1);
    assert_eq!(cfg.schema.periods[0].object_kind, ObjectKind::Filesystem);
    cfg.validate().expect("default config is valid");
}

#[test]
fn parses_sentinel_forms() {
    let cfg = QueryWindowConfig::from_json_str(
        r#"{
            "max_chunk_age_seconds": 3600,
            "index_resync_interval_seconds": 300,
            "max_look_back": "unlimited",
            "query_ingesters_within": "disabled",
            "schema": { "periods": [ { "from_day": 0, "object_kind": "filesystem" } ] }
        }"#,
    )
    .expect("parse config");

    assert_eq!(cfg.max_look_back, LookbackRequest::Unlimited);
    assert_eq!(cfg.query_ingesters_within, IngesterWindowRequest::Disabled);
}

#[test]
fn parses_signed_integer_forms() {
    let cfg = QueryWindowConfig::from_json_str(
        r#"{ "max_look_back": -1, "query_ingesters_within": 0 }"#,
    )
    .expect("parse config");
    assert_eq!(cfg.max_look_back, LookbackRequest::Unlimited);
    assert_eq!(cfg.query_ingesters_within, IngesterWindowRequest::Disabled);

    let cfg = QueryWindowConfig::from_json_str(
        r#"{ "max_look_back": 0, "query_ingesters_within": 7200 }"#,
    )
    .expect("parse config");
    assert_eq!(cfg.max_look_back, LookbackRequest::UseDefault);
    assert_eq!(
        cfg.query_ingesters_within,
        IngesterWindowRequest::Window(Duration::from_secs(7200))
    );

    let cfg = QueryWindowConfig::from_json_str(r#"{ "max_look_back": 5400 }"#)
        .expect("parse config");
    assert_eq!(
        cfg.max_look_back,
        LookbackRequest::Explicit(Duration::from_secs(5400))
    );
}

#[test]
fn rejects_bad_sentinels() {
    let err = QueryWindowConfig::from_json_str(r#"{ "max_look_back": "forever" }"#)
        .expect_err("unknown lookback string");
    assert!(matches!(err, Error::Serialization(_)));
    assert!(err.to_string().contains("max_look_back"));

    let err = QueryWindowConfig::from_json_str(r#"{ "query_ingesters_within": -5 }"#)
        .expect_err("negative ingester window");
    assert!(err.to_string().contains("query_ingesters_within"));
}

#[test]
fn validate_rejects_empty_schema() {
    let cfg = QueryWindowConfig {
        schema: SchemaConfig { periods: vec![] },
        ..QueryWindowConfig::default()
    };

    let err = cfg.validate().expect_err("empty schema must be rejected");
    assert!(matches!(err, Error::ConfigInvalid(_)));
    assert!(err.to_string().contains("schema.periods"));
}

#[test]
fn validate_rejects_unordered_periods() {
    let cfg = QueryWindowConfig {
        schema: SchemaConfig {
            periods: vec![
                PeriodConfig {
                    from_day: 100,
                    object_kind: ObjectKind::Filesystem,
                },
                PeriodConfig {
                    from_day: 100,
                    object_kind: ObjectKind::S3,
                },
            ],
        },
        ..QueryWindowConfig::default()
    };

    let err = cfg.validate().expect_err("duplicate start must be rejected");
    assert!(err.to_string().contains("schema.periods[1].from_day"));
}

#[test]
fn json_round_trip_preserves_requests() {
    let cfg = QueryWindowConfig {
        max_look_back: LookbackRequest::Explicit(Duration::from_secs(6 * 60 * 60)),
        query_ingesters_within: IngesterWindowRequest::Disabled,
        ..QueryWindowConfig::default()
    };

    let json = cfg.to_json_pretty().expect("serialize config");
    assert!(json.contains("\"disabled\""));
    let back = QueryWindowConfig::from_json_str(&json).expect("parse config");
    assert_eq!(back, cfg);
}

#[test]
fn load_reads_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("query_window.json");
    fs::write(
        &path,
        r#"{ "max_chunk_age_seconds": 3600, "schema": { "periods": [ { "from_day": 0, "object_kind": "gcs" } ] } }"#,
    )
    .expect("write config");

    let cfg = QueryWindowConfig::load(&path).expect("load config");
    assert_eq!(cfg.max_chunk_age(), Duration::from_secs(3600));
    assert_eq!(cfg.schema.periods[0].object_kind, ObjectKind::Gcs);

    let err = QueryWindowConfig::load(dir.path().join("missing.json"))
        .expect_err("missing file");
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn sub_second_requests_keep_meaning_across_json() {
    let cfg = QueryWindowConfig {
        max_chunk_age_seconds: 2 * 60 * 60,
        index_resync_interval_seconds: 5 * 60,
        max_look_back: LookbackRequest::Explicit(Duration::from_millis(500)),
        query_ingesters_within: IngesterWindowRequest::Window(Duration::from_millis(500)),
        ..QueryWindowConfig::default()
    };
    let err = cfg.resolve().expect_err("500ms lookback is below the floor");
    assert!(matches!(err, Error::LookbackBelowSafetyFloor { .. }));

    let json = cfg.to_json_pretty().expect("serialize config");
    let back = QueryWindowConfig::from_json_str(&json).expect("parse config");

    assert_eq!(
        back.max_look_back,
        LookbackRequest::Explicit(Duration::from_secs(1))
    );
    assert_eq!(
        back.query_ingesters_within,
        IngesterWindowRequest::Window(Duration::from_secs(1))
    );
    let err = back.resolve().expect_err("1s lookback is still below the floor");
    assert!(matches!(err, Error::LookbackBelowSafetyFloor { .. }));

    let resolved = QueryWindowConfig {
        max_look_back: LookbackRequest::UseDefault,
        ..back
    }
    .resolve()
    .expect("resolve");
    assert_eq!(
        resolved.query_ingesters_within,
        IngesterWindowBound::Window(Duration::from_secs(8460))
    );
}

#[test]
fn negative_lookbacks_collapse_to_unlimited() {
    for secs in [-1, -5, i64::MIN] {
        let req = LookbackRequest::from_signed_secs(secs);
        assert_eq!(req, LookbackRequest::Unlimited);
        assert_eq!(req.as_signed_secs(), -1);
    }
}
