use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::Conversation;
use crate::ai::prompt::{WELCOME_MESSAGE, seed_transcript};
use crate::core::AppConfig;
use crate::gemini::GeminiClient;

pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let model = GeminiClient::new(
        &config.gemini_api_hostname,
        &config.gemini_api_key,
        &config.gemini_model,
    )?;
    let mut conversation = Conversation::new(Arc::new(model), seed_transcript());

    let mut rl = DefaultEditor::new()?;
    println!("{}", WELCOME_MESSAGE);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                match conversation.send_message(&line).await {
                    Ok(reply) => println!("{}", reply),
                    Err(err) => println!("Error: {:#}", err),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
