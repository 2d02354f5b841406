use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::Result;
use tempfile::TempDir;

/// 清除会影响运行结果的环境变量后再设置 `envs`
fn command(envs: &[(&str, &str)]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_brix"));
    command
        .env_remove("BRIX_CONFIG_DIR")
        .env_remove("BRIX_WORKDIR")
        .env_remove("BRIX_LOG_LEVEL")
        .env_remove("BRIX_LOG_FORMAT")
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied());
    command
}

fn brix_with_env(workdir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    command(envs)
        .args(args)
        .arg("--workdir")
        .arg(workdir)
        .output()
        .expect("failed to run brix")
}

fn brix(workdir: &Path, args: &[&str]) -> Output {
    brix_with_env(workdir, args, &[])
}

/// 在 `dir` 下写入一个只创建目录的 rust/crate 声明
fn write_mkdir_declaration(dir: &Path) -> Result<()> {
    let decl = dir.join("rust");
    fs::create_dir_all(&decl)?;
    fs::write(
        decl.join("crate.brix.yaml"),
        "commands:\n  - mkdir:\n      destination: \"{{module}}/src\"\n",
    )?;
    Ok(())
}

/// 完整运行：查找声明、渲染模板并输出进度
#[test]
fn test_generates_files_from_declaration() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let decl = temp_dir.path().join("decl/rust");
    fs::create_dir_all(&decl)?;
    fs::write(
        decl.join("crate.brix.yaml"),
        r#"
commands:
  - template:
      source: lib.rs.hbs
      destination: "{{to-case \"kebab\" module}}/src/lib.rs"
  - exec:
      commands: ["echo built {{project}}"]
"#,
    )?;
    fs::write(decl.join("lib.rs.hbs"), "//! {{to-upper module}}\n")?;

    let output = brix(
        temp_dir.path(),
        &["rust", "crate", "shop", "order_items", "-d", "decl"],
    );

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("order-items/src/lib.rs"))?,
        "//! ORDER_ITEMS\n"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("built shop"), "{stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("RUNNING"), "{stderr}");
    assert!(stderr.contains("DONE!"), "{stderr}");
    Ok(())
}

/// 找不到声明文件时以退出码2结束
#[test]
fn test_missing_declaration_exits_with_two() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = brix(
        temp_dir.path(),
        &["java", "controller", "shop", "orders", "--config-dir", "nowhere"],
    );

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Could not find module declaration for 'controller'"),
        "{stderr}"
    );
    Ok(())
}

/// 缺少位置参数属于用法错误
#[test]
fn test_missing_arguments_is_a_usage_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = brix(temp_dir.path(), &["java", "controller"]);
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = brix(temp_dir.path(), &["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("brix "));
    Ok(())
}

/// 未传 `-d` 时使用 BRIX_CONFIG_DIR 环境变量
#[test]
fn test_config_dir_from_env() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_mkdir_declaration(&temp_dir.path().join("decl"))?;

    let output = brix_with_env(
        temp_dir.path(),
        &["rust", "crate", "shop", "billing"],
        &[("BRIX_CONFIG_DIR", "decl")],
    );

    assert!(output.status.success(), "{output:?}");
    assert!(temp_dir.path().join("billing/src").is_dir());
    Ok(())
}

/// BRIX_LOG_LEVEL 与 BRIX_LOG_FORMAT 控制写到stderr的日志
#[test]
fn test_log_level_and_format_from_env() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_mkdir_declaration(&temp_dir.path().join("decl"))?;
    let args = ["rust", "crate", "shop", "billing", "-d", "decl"];

    let output = brix_with_env(temp_dir.path(), &args, &[("BRIX_LOG_LEVEL", "debug")]);
    assert!(output.status.success(), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"), "{stderr}");
    assert!(stderr.contains("运行配置"), "{stderr}");

    let output = brix_with_env(
        temp_dir.path(),
        &args,
        &[("BRIX_LOG_LEVEL", "debug"), ("BRIX_LOG_FORMAT", "json")],
    );
    assert!(output.status.success(), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r#""level":"DEBUG""#), "{stderr}");

    let output = brix(temp_dir.path(), &args);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("运行配置"), "{stderr}");
    Ok(())
}

/// RUST_LOG 优先于命令行日志级别
#[test]
fn test_rust_log_overrides_log_level() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_mkdir_declaration(&temp_dir.path().join("decl"))?;

    let output = brix_with_env(
        temp_dir.path(),
        &["rust", "crate", "shop", "billing", "-d", "decl", "--log-level", "debug"],
        &[("RUST_LOG", "off")],
    );

    assert!(output.status.success(), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("运行配置"), "{stderr}");
    Ok(())
}

/// 相对工作目录基于当前目录解析，向上查找 .config/brix 时不会丢失父目录
#[test]
fn test_relative_workdir_finds_declaration() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_mkdir_declaration(&temp_dir.path().join(".config/brix"))?;
    let project = temp_dir.path().join("workspace/app");
    fs::create_dir_all(&project)?;

    let output = command(&[])
        .env("HOME", temp_dir.path())
        .current_dir(temp_dir.path().join("workspace"))
        .args(["rust", "crate", "shop", "billing", "--workdir", "app"])
        .output()?;

    assert!(output.status.success(), "{output:?}");
    assert!(project.join("billing/src").is_dir());
    Ok(())
}

/// 构建脚本为 bash、fish 和 PowerShell 生成补全脚本
#[test]
fn test_build_generates_completions() -> Result<()> {
    let out_dir = Path::new(env!("OUT_DIR"));
    for name in ["brix.bash", "brix.fish", "_brix.ps1"] {
        let script = fs::read_to_string(out_dir.join(name))?;
        assert!(script.contains("--workdir"), "{name}");
    }
    Ok(())
}
