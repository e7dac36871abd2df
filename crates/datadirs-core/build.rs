use std::env;

/// Default install prefixes searched when the build does not override them.
const POSIX_DEFAULT_DATADIRS: &str = "/usr/local/share/games/datadirs:/usr/share/games/datadirs";

fn main() {
    // Packagers pick the compiled-in search path with DATADIRS_DATADIR at build
    // time (a delimiter separated list, substituted at runtime like any other
    // source). Windows builds have no sensible fixed prefix.
    let datadirs = env::var("DATADIRS_DATADIR").unwrap_or_else(|_| {
        if env::var_os("CARGO_CFG_WINDOWS").is_some() {
            String::new()
        } else {
            POSIX_DEFAULT_DATADIRS.to_string()
        }
    });

    // Emit this as a compile-time environment variable
    println!("cargo:rustc-env=DATADIRS_COMPILED_DATADIR={datadirs}");

    println!("cargo:rerun-if-env-changed=DATADIRS_DATADIR");
    println!("cargo:rerun-if-changed=build.rs");
}
