use std::env;

fn main() {
    // Boot-time link mode: 0 = remote, 1 = supervised serial, 2 = supervised radio
    match env::var("WHEELBOT_LINK_MODE") {
        Ok(mode) if matches!(mode.as_str(), "0" | "1" | "2") => {
            println!("cargo:rustc-env=WHEELBOT_LINK_MODE={}", mode);
            println!("cargo:warning=Using WHEELBOT_LINK_MODE from environment: {}", mode);
        }
        Ok(mode) => {
            println!("cargo:warning=Ignoring invalid WHEELBOT_LINK_MODE '{}', using 1", mode);
            println!("cargo:rustc-env=WHEELBOT_LINK_MODE=1");
        }
        Err(_) => println!("cargo:rustc-env=WHEELBOT_LINK_MODE=1"),
    }

    println!("cargo:rerun-if-env-changed=WHEELBOT_LINK_MODE");
}
