use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use xmap_config::XmapConfig;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("XMAP_SHOW__FOLDER", "/env/show");

        let config: XmapConfig = XmapConfig::figment().extract()?;
        assert_eq!(config.show.folder, "/env/show");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[show]
folder = "/toml/show"
"#,
        )?;
        jail.set_env("XMAP_SHOW__FOLDER", "/env/show");

        let config: XmapConfig = Figment::from(Serialized::defaults(XmapConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("XMAP_").split("__"))
            .extract()?;

        assert_eq!(config.show.folder, "/env/show");
        Ok(())
    });
}

#[test]
fn output_folder_maps_from_nested_env_key() {
    Jail::expect_with(|jail| {
        jail.set_env("XMAP_OUTPUT__FOLDER", "/env/mappings");

        let config: XmapConfig = Figment::from(Serialized::defaults(XmapConfig::default()))
            .merge(Env::prefixed("XMAP_").split("__"))
            .extract()?;

        assert_eq!(config.output.folder, "/env/mappings");
        Ok(())
    });
}
