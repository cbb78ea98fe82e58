mod format;
mod intent;
mod keywords;
mod knowledge;
mod pipeline;
mod resolver;
mod translate;

pub const USER_AGENT: &str = concat!("career-guide/", env!("CARGO_PKG_VERSION"));

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use knowledge::KnowledgeBase;
use pipeline::Reply;
use resolver::AnswerResolver;
use translate::{GoogleTranslateClient, Lang, LangChoice, TranslationGateway};

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Global HTTP client timeout covering DNS + connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Career guidance from a local knowledge base, in English, Hindi, or Marathi.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Knowledge document (JSON)
    #[arg(long, env = "CAREER_GUIDE_KB", default_value = "new.json")]
    kb: PathBuf,

    /// Answer in English only; never call the translation service
    #[arg(long)]
    no_translate: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a single question
    Ask {
        question: String,
        /// Question language: auto, en, hi, or mr
        #[arg(long, value_enum, default_value_t = LangChoice::Auto)]
        lang: LangChoice,
    },
    /// Answer questions read from stdin, one per line, until EOF or "quit"
    Chat {
        #[arg(long, value_enum, default_value_t = LangChoice::Auto)]
        lang: LangChoice,
    },
    /// Show how many entries each knowledge category holds
    Categories,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("career_guide=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let resolver = AnswerResolver::new(KnowledgeBase::load(&cli.kb));

    let gateway = if cli.no_translate {
        TranslationGateway::disabled()
    } else {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(HTTP_TIMEOUT)
            .build()?;
        TranslationGateway::new(GoogleTranslateClient::from_env(http))
    };

    match cli.command {
        Command::Ask { question, lang } => {
            let reply = pipeline::answer(&resolver, &gateway, &question, lang).await;
            print_reply(&reply);
        }
        Command::Chat { lang } => {
            info!("chat session started");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let question = line.trim();
                if matches!(question, "quit" | "exit") {
                    break;
                }
                if question.is_empty() {
                    continue;
                }
                let reply = pipeline::answer(&resolver, &gateway, question, lang).await;
                print_reply(&reply);
                println!();
            }
            info!("chat session ended");
        }
        Command::Categories => {
            if !resolver.knowledge().is_loaded() {
                println!("(knowledge base not loaded)");
            }
            for (category, count) in resolver.knowledge().summary() {
                println!("{category}: {count}");
            }
        }
    }

    Ok(())
}

fn print_reply(reply: &Reply) {
    debug!(
        english = %reply.english_answer,
        question_translated = reply.question_translated,
        "reply ready"
    );
    if reply.lang != Lang::En && !reply.answer_translated {
        warn!(lang = %reply.lang, "translation unavailable, answering in English");
    }
    println!("Answer: {}", reply.text);
}
