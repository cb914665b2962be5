use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// IPL win predictor web form
#[derive(Parser, Debug, Clone)]
#[command(name = "ipl-win-predictor", version, about)]
pub struct Config {
    /// Form listen address
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8501")]
    pub listen_addr: String,

    /// Path to the JSON model artifact, loaded once at startup
    #[arg(long, env = "MODEL_PATH", default_value = "models/ipl_logreg.json")]
    pub model_path: PathBuf,

    /// Directory holding the team logo images
    #[arg(long, env = "ASSETS_DIR", default_value = "assets")]
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!("listen_addr {:?} is not a valid socket address", self.listen_addr);
        }
        if !self.model_path.is_file() {
            anyhow::bail!(
                "model artifact not found at {}. Set MODEL_PATH or --model-path.",
                self.model_path.display()
            );
        }
        Ok(())
    }
}
