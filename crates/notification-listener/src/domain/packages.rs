//! Monitored bank packages

/// Package ids whose notifications are inspected. Everything else is ignored.
pub const MONITORED_PACKAGES: [&str; 4] = [
    // Nubank
    "com.nu.production",
    // Bradesco
    "com.bradesco",
    // Bradesco Next
    "com.bradesco.next",
    // Bradesco, alternate id
    "br.com.bradesco",
];

/// Exact-match membership test. No prefix or substring matching.
pub fn is_monitored_package(package_id: &str) -> bool {
    MONITORED_PACKAGES.contains(&package_id)
}
