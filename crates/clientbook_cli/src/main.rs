//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `clientbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    let model = clientbook_core::ModelManager::default();
    println!("clientbook_core version={}", clientbook_core::core_version());
    println!(
        "clientbook_core empty model persons={}",
        model.filtered_person_list().len()
    );
}
