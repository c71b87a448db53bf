use std::process::Command;

fn main() {
    // Re-run if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git_output(&["rev-parse", "--short", "HEAD"]);

    let commit_date = git_output(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d"]);

    let is_dirty = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .map(|o| !o.stdout.is_empty())
        .unwrap_or(false);

    println!(
        "cargo:rustc-env=GIT_HASH={}{}",
        hash,
        if is_dirty && !hash.is_empty() { "+" } else { "" }
    );
    println!("cargo:rustc-env=GIT_COMMIT_DATE={}", commit_date);
}

fn git_output(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
