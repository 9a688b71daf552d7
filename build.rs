use std::process::Command;

/// Build-time settings read by `AppConfig::load` through `option_env!`.
const CONFIG_VARS: [&str; 3] = [
    "PORTFOLIO_OWNER_HANDLE",
    "PORTFOLIO_PROFILE_URL",
    "PORTFOLIO_THEME_PROFILE",
];

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let sha = git_head().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=PORTFOLIO_GIT_SHA={sha}");
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
