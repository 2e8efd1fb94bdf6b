fn main() {
    // Host-target builds (tests, simulation) skip the ESP-IDF build plumbing.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
