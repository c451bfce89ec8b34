use std::env;
use std::fs;
use std::path::Path;

/// Copies the workspace `config.toml`, when present, next to the backend
/// binary so `load_config` finds it at run time.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR is target/{profile}/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("backend lives in crates/backend");
    let source = workspace_root.join("config.toml");

    if source.exists() {
        let dest = target_dir.join("config.toml");
        fs::copy(&source, &dest)
            .unwrap_or_else(|e| panic!("failed to copy config.toml: {}", e));
        println!("cargo:warning=copied config.toml to {:?}", dest);
    }
}
