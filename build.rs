//! 编译期生成 bash、fish 与 PowerShell 补全脚本到 `OUT_DIR`。

use std::env;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=crates/cli/src/args.rs");
    println!("cargo:rerun-if-changed=crates/cli/src/completions.rs");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?);
    brix_cli::write_completions(&out_dir)?;
    Ok(())
}
