// Rust guideline compliant 2026-02-06

//! Implementation of the `campus init` command.
//!
//! Initializes the `.campus` data directory, the entity JSONL files, the
//! default configuration, and the seeded administrator identity.

use anyhow::Result;
use campus_app::CampusContext;
use campus_core::{Config, Identity};
use std::fs;
use std::path::Path;

/// Default administrator id.
const DEFAULT_ADMIN_ID: &str = "admin";

/// Default administrator credential when none is provided.
const DEFAULT_ADMIN_PASSWORD: &str = "admin@123";

/// Initializes a new Campus data directory.
///
/// # Arguments
///
/// * `root` - Directory the `.campus` data directory is created under
/// * `admin_password` - Optional credential for the seeded administrator
///
/// # Errors
///
/// Returns an error if:
/// - The `.campus` directory or entity files cannot be created
/// - The configuration file cannot be written
/// - The administrator identity cannot be seeded
pub fn execute(root: &Path, admin_password: Option<String>) -> Result<()> {
    let ctx = CampusContext::uninitialized(root);
    let campus_dir = ctx.campus_dir();

    if !campus_dir.exists() {
        fs::create_dir_all(campus_dir)?;
    }

    for store_path in [
        ctx.roster_store()?.path().to_path_buf(),
        ctx.task_store()?.path().to_path_buf(),
        ctx.assignment_store()?.path().to_path_buf(),
        ctx.grade_store()?.path().to_path_buf(),
        ctx.attendance_store()?.path().to_path_buf(),
    ] {
        if !store_path.exists() {
            fs::File::create(&store_path)?;
        }
    }

    if !ctx.config_path().exists() {
        let config = Config::default();
        config.save(campus_dir).map_err(campus_app::AppError::from)?;
    }

    let mut roster = ctx.load_roster()?;
    if roster.is_empty() {
        let password = admin_password.as_deref().unwrap_or(DEFAULT_ADMIN_PASSWORD);
        let admin = Identity::admin(
            DEFAULT_ADMIN_ID.to_string(),
            "Administrator".to_string(),
            password,
        );
        roster.seed_admin(admin).map_err(campus_app::AppError::from)?;
        ctx.save_roster(&roster)?;
        println!("✓ Campus data directory initialized at {}", campus_dir.display());
        println!("  - Seeded administrator '{}'", DEFAULT_ADMIN_ID);
    } else {
        crate::terminal::print_warning(&format!(
            "Campus data directory already initialized at {}",
            campus_dir.display()
        ));
    }
    println!("  - Entity files under {}", campus_dir.display());
    println!("  - Created config.toml");

    Ok(())
}
