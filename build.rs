fn detect_default_strategy() {
    println!("cargo:rerun-if-env-changed=CMDWT_DEFAULT_STRATEGY");

    let strategy = std::env::var("CMDWT_DEFAULT_STRATEGY").unwrap_or_else(|_| "static".to_owned());
    let strategy = strategy.trim().to_ascii_lowercase();
    if strategy != "static" && strategy != "search" {
        panic!("CMDWT_DEFAULT_STRATEGY must be \"static\" or \"search\", got \"{}\"", strategy);
    }
    println!("cargo:rustc-env=CMDWT_BUILD_STRATEGY={}", strategy);
}

fn compile_resources() {
    println!("cargo:rerun-if-changed=assets");

    let version_info_str = env!("CARGO_PKG_VERSION");
    let version_info_ver = format!(
        "{},{},{},0",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR"),
        env!("CARGO_PKG_VERSION_PATCH")
    );
    // Succeeds without doing anything off Windows; a failed compile on Windows stops the build.
    embed_resource::compile(
        "assets/cmdwt.rc",
        &[
            format!("VERSION_INFO_STR=\"{}\"", version_info_str),
            format!("VERSION_INFO_VER={}", version_info_ver)
        ]
    )
    .manifest_optional()
    .unwrap();
}

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=locales");

    detect_default_strategy();
    compile_resources();
}
