use clap::Parser;
use foodchain_core::domain::common::{FoodchainConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodchain-api", about = "FoodChain HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LLMArgs {
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,
}

impl From<Args> for FoodchainConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
        }
    }
}
