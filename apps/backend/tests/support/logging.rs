//! Integration-test logging bootstrap.
//!
//! Binaries that install their own global subscriber (log capture) must not
//! pull this module in.

/// Runs once per integration test binary before any test.
#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    backend_test_support::logging::init();
}
