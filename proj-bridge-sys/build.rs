use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=PROJ_NO_PKG_CONFIG");
    println!("cargo:rerun-if-env-changed=PROJ_LIB_DIR");

    // An explicitly named library directory wins over any probing.
    if let Ok(dir) = env::var("PROJ_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
        println!("cargo:rustc-link-lib=proj");
        return;
    }

    // proj_trans and PJ_COORD arrived in PROJ 5; refuse anything older.
    if env::var_os("PROJ_NO_PKG_CONFIG").is_none() {
        let probe = pkg_config::Config::new()
            .atleast_version("5.0.0")
            .probe("proj");
        if probe.is_ok() {
            // pkg-config has emitted the search-path and link directives.
            return;
        }
    }

    // No pkg-config, or told not to use it: fall back to the linker
    // default search path.
    println!("cargo:rustc-link-lib=proj");
}
