//! Environment overrides live in their own test binary so that the variables
//! set inside the jail cannot leak into the other config tests.

use std::path::PathBuf;

use apicat_docs::{DeclarationKind, GeneratorConfig, ItemKind};
use figment::Jail;

#[test]
fn environment_overrides_the_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "apicat.config.json",
            r#"{ "parallel": true, "out_file": "a/b.json" }"#,
        )?;
        jail.set_env("APICAT_PARALLEL", "false");
        jail.set_env("APICAT_OUT_FILE", "x/y.json");
        jail.set_env("APICAT_KINDS", "{method=function}");

        let config = GeneratorConfig::load(None).map_err(|error| error.to_string())?;

        assert!(!config.parallel);
        assert_eq!(config.out_file, PathBuf::from("x/y.json"));
        assert_eq!(
            config.kinds.get(DeclarationKind::Method),
            Some(ItemKind::Function)
        );
        assert_eq!(
            config.kinds.get(DeclarationKind::Class),
            Some(ItemKind::Class)
        );
        Ok(())
    });
}

#[test]
fn file_values_survive_without_overrides() {
    Jail::expect_with(|jail| {
        jail.create_file("apicat.config.json", r#"{ "out_file": "a/b.json" }"#)?;

        let config = GeneratorConfig::load(None).map_err(|error| error.to_string())?;

        assert!(config.parallel);
        assert_eq!(config.out_file, PathBuf::from("a/b.json"));
        Ok(())
    });
}
