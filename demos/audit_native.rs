//! Audit an application installed under the directory given on the command line.
//!
//! ```text
//! RUST_LOG=perm_audit=debug cargo run --example audit_native -- /var/www/shop
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use perm_audit::{AuditError, DirectoryMap, HostOs, NativeFs, PermissionAudit};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    let Some(root) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: audit_native <application root>");
        return ExitCode::from(2);
    };

    match run(root) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "audit failed");
            ExitCode::from(2)
        }
    }
}

fn run(root: PathBuf) -> Result<bool, AuditError> {
    let dirs = DirectoryMap::with_default_layout(&root);
    let mut audit = PermissionAudit::new(&NativeFs, &dirs);
    let report = audit.report()?;

    for path in &report.current_writable {
        println!("writable        {}", path.display());
    }
    for path in &report.missing_writable_paths {
        println!("not writable    {}", path.display());
    }
    for path in &report.unnecessary_writable_directories {
        println!("should be r/o   {}", path.display());
    }

    let cli_ok = audit.check_directory_permission_for_cli_user(&HostOs)?;
    if !cli_ok {
        println!("generated code is not traversable by the current user");
    }

    Ok(report.is_ready_for_installation() && cli_ok)
}
