use anyhow::Result;
use clap::Parser;
use krishi_setu::{Conversation, EngineConfig, LanguageCode, ResponseEngine};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "krishi-chat")]
#[command(about = "Rule-based multilingual farming assistant")]
struct Args {
    /// Message to answer once; starts an interactive chat when omitted
    message: Option<String>,

    /// Response language (en, hi, ta, te, bn, mr, pa, kn, gu, ml)
    #[arg(short, long)]
    lang: Option<String>,

    /// Also print the glossary translation of the reply
    #[arg(short, long)]
    translate: bool,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON knowledge base replacing the built-in crop table
    #[arg(short, long)]
    knowledge_base: Option<PathBuf>,

    /// Pause before each reply, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?.with_overrides(|key| std::env::var(key).ok())?,
        None => EngineConfig::from_env()?,
    };
    if let Some(code) = &args.lang {
        config.default_language = LanguageCode::resolve(code);
    }
    if let Some(path) = args.knowledge_base {
        config.knowledge_base_path = Some(path);
    }
    if let Some(delay) = args.delay_ms {
        config.response_delay_ms = delay;
    }

    let engine = ResponseEngine::from_config(&config)?;
    let delay = Duration::from_millis(config.response_delay_ms);

    match args.message {
        Some(message) => {
            let lang = config.default_language;
            let reply = engine.respond(&message, lang);
            println!("{}", reply);
            if args.translate {
                println!("\n--- {} ({}) ---\n{}", lang.native_name(), lang, engine.translate(&reply, lang));
            }
        }
        None => chat(&engine, config.default_language, delay).await?,
    }

    Ok(())
}

async fn chat(engine: &ResponseEngine, lang: LanguageCode, delay: Duration) -> Result<()> {
    let mut conversation = Conversation::new(lang);
    info!("Interactive chat started in {}", lang);

    println!("{}", conversation.messages()[0].content);
    println!("(commands: /lang <code>, /translate, /clear, /quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line.split_once(' ').map_or((line, ""), |(cmd, rest)| (cmd, rest.trim())) {
            ("/quit", _) | ("/exit", _) => break,
            ("/clear", _) => {
                conversation.clear();
                println!("{}", conversation.messages()[0].content);
            }
            ("/lang", code) => match code.parse::<LanguageCode>() {
                Ok(lang) => {
                    conversation.set_language(lang);
                    println!("{} {}", lang.flag(), lang.native_name());
                }
                Err(e) => warn!("{}", e),
            },
            ("/translate", _) => {
                let Some(id) = conversation.last_bot_message().map(|m| m.id.clone()) else {
                    continue;
                };
                let message = conversation.toggle_translation(engine, &id)?;
                println!("{}", message.display_text());
            }
            _ => {
                if line.is_empty() {
                    continue;
                }
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                if let Some(reply) = conversation.send(engine, line) {
                    println!("\n{}\n", reply.content);
                }
            }
        }
    }

    Ok(())
}
