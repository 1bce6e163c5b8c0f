use tracing_subscriber::EnvFilter;

use spincube::AppConfig;

fn main() -> spincube::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,wgpu=warn")),
        )
        .init();

    let mut config = AppConfig::new();
    if let Some(path) = std::env::var_os("SPINCUBE_SHADER") {
        config = config.shader_path(path);
    }

    spincube::run(config)
}
