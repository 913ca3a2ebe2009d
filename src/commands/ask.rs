use crate::faq::{FaqBot, Reply};
use crate::io::OutputWriter;
use anyhow::Result;

pub fn run_ask(message: &str, bot: &FaqBot, writer: &mut dyn OutputWriter) -> Result<Reply> {
    let reply = bot.reply(message);
    tracing::debug!(matched = ?reply.matched_keyword, "faq reply");
    writer.write_reply(&reply)?;
    Ok(reply)
}
