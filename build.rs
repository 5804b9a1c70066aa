use std::env;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;

fn main() -> Result<(), Box<dyn Error>> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("--version").output()?;
    let rustc_version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let target = env::var("TARGET").unwrap_or_default();

    let dest_path = Path::new(&env::var("OUT_DIR")?).join("build_info.rs");
    let mut f = File::create(dest_path)?;
    writeln!(f, "pub const RUSTC_VERSION: &str = {:?};", rustc_version)?;
    writeln!(f, "pub const TARGET: &str = {:?};", target)?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
