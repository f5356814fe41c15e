fn main() {
    // Propagate the ESP-IDF toolchain environment to rustc when building the
    // firmware proper; host-only test builds have no IDF environment to forward.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
