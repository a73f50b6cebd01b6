//! Build script for the Spotify lyrics relay.
//!
//! Copies the configuration template to the user's local data directory so
//! that a ready-to-edit `.env.example` is available in the location where
//! the application looks for its `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the local data directory.
///
/// # Build Process
///
/// 1. **Dependency Tracking**: Sets up cargo to re-run when the template changes
/// 2. **Path Resolution**: Determines source and destination paths
/// 3. **Directory Creation**: Ensures the target directory structure exists
/// 4. **File Copying**: Copies the template to the local data directory
/// 5. **Error Handling**: Warns on a missing template instead of failing
///
/// # Destination Location
///
/// Templates are copied to the platform-specific local data directory:
/// - Linux: `~/.local/share/lyrelay/.env.example`
/// - macOS: `~/Library/Application Support/lyrelay/.env.example`
/// - Windows: `%LOCALAPPDATA%/lyrelay/.env.example`
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error when directory creation or the
/// copy itself fails. A missing template is a `cargo:warning`, not an error.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("lyrelay");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
