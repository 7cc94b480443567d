// src/cli/mod.rs
use clap::Parser;

use crate::core::config::Config;
use crate::models::GenerationMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the web server to
    #[arg(long)]
    pub address: Option<String>,

    /// Web server port
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Password length used by the home page
    #[arg(long, short)]
    pub length: Option<i64>,

    /// Letter case strategy: simple or alternating
    #[arg(long, short)]
    pub mode: Option<GenerationMode>,

    /// Treat non-numeric lengths as zero instead of rejecting them
    #[arg(long)]
    pub lenient: bool,
}

impl Args {
    /// Apply every flag that was given on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(address) = &self.address {
            config.web_address = address.clone();
        }
        if let Some(port) = self.port {
            config.web_port = port;
        }
        if let Some(length) = self.length {
            if length < 0 {
                log::warn!("Ignoring negative --length {}", length);
            } else {
                config.default_password_length = length;
                config.clamp_default_length();
            }
        }
        if let Some(mode) = self.mode {
            config.generation_mode = mode;
        }
        if self.lenient {
            config.lenient_length_parsing = true;
        }
    }
}
