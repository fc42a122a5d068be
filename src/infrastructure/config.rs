use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSettings {
    pub path: String,
}

/// Which systems feed which dashboard widget, and the stream names the
/// charts read.
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub chart_systems: Vec<String>,
    #[serde(default)]
    pub pie_systems: Vec<String>,
    pub machine_system: String,
    #[serde(default = "default_chart_stream")]
    pub chart_stream: String,
    #[serde(default = "default_output_stream")]
    pub output_stream: String,
}

fn default_chart_stream() -> String {
    "temperature".to_string()
}

fn default_output_stream() -> String {
    "output".to_string()
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/settings"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
