use linegraph_rs::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_helper_is_inert_without_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_helper_installs_only_once() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
}
