use std::sync::Once;

static INIT: Once = Once::new();

/// Route `log` output through the test harness. `RUST_LOG` overrides the
/// default `debug` level, which shows every table resize.
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("chain_hashmap=debug"),
        )
        .is_test(true)
        .try_init();
    });
}
