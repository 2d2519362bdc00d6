fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/royin/default_royin.toml",
        include_str!("src/royin/default_royin.toml"),
    );
    validate_toml(
        "src/ipa/default_ipa.toml",
        include_str!("src/ipa/default_ipa.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
