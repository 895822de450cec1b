#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_division_scale(&outdir_path, "default_division_scale.rs")?;
    Ok(())
}

/// Create default_division_scale.rs, containg definition of constant DEFAULT_DIVISION_SCALE
fn write_default_division_scale(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let default_scale = env::var("DECIMATH_DEFAULT_DIVISION_SCALE")
        .map(|s| s.parse::<std::num::NonZeroU32>().expect("$DECIMATH_DEFAULT_DIVISION_SCALE must be an integer > 0"))
        .map(|nz_num| nz_num.into())
        .unwrap_or(14u32);

    let default_scale_rs_path = outdir_path.join(filename);

    let default_scale = format!("pub const DEFAULT_DIVISION_SCALE: u64 = {default_scale};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&default_scale_rs_path) {
        Ok(existing_contents) if existing_contents == default_scale => {},
        _ => {
            let mut default_scale_rs = File::create(&default_scale_rs_path)
                .expect("Could not create default_division_scale.rs");
            write!(default_scale_rs, "{default_scale}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", default_scale_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "DECIMATH_DEFAULT_DIVISION_SCALE");

    Ok(())
}
