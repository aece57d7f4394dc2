fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // footer copyright year
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        chrono::Utc::now().to_rfc3339()
    );
}
