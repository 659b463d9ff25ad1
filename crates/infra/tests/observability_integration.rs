//! Tracing initialisation
//!
//! Kept in its own test binary: the subscriber is process-global.

use caltally_domain::{CalTallyError, LoggingConfig};
use caltally_infra::init_tracing;

#[test]
fn test_second_initialisation_is_an_error() {
    let config = LoggingConfig { level: "caltally_core=debug".to_string(), json: true };

    init_tracing(&config).expect("first initialisation succeeds");
    tracing::info!("subscriber installed");

    let err = init_tracing(&LoggingConfig::default()).unwrap_err();
    assert!(matches!(err, CalTallyError::Config(msg) if msg.contains("already")));
}
