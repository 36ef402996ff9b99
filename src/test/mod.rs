
use std::sync::Once;

use simplelog::{Config, LevelFilter, TestLogger};

static LOGGING: Once = Once::new();

/// Routes the crate's `log` output through the test harness. Safe to call from every test.
pub(crate) fn init_logging() {
    LOGGING.call_once(|| {
        // Another logger may already be installed by a different test binary setup.
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    });
}
