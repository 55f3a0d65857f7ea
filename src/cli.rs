use clap::Parser;

use crate::model::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, RequestParams};

/// Send a single prompt to Claude from the command line.
#[derive(Debug, Parser)]
#[command(name = "prompt-relay", version)]
pub struct Cli {
    /// Your message to Claude
    pub prompt: String,

    /// Claude model to use
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum tokens in response
    #[arg(
        short = 't',
        long,
        default_value_t = DEFAULT_MAX_TOKENS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_tokens: u32,
}

impl Cli {
    pub fn into_params(self) -> RequestParams {
        RequestParams::new(self.prompt)
            .with_model(self.model)
            .with_max_tokens(self.max_tokens)
    }
}
