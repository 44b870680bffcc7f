/// Initializes the `env_logger` backend for the `log` facade.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
