//! Interactive chat REPL over a [`ConversationSession`].

use std::io::{self, Write};

use aura_ai::{ConversationSession, Message, Role, SessionEvent, SubmitError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::{drive, shutdown_signal, AppContext};
use crate::persona::{context_mode, persona_from_config};
use crate::{boot, provider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct ChatRepl {
    session: ConversationSession,
    streaming: bool,
}

impl ChatRepl {
    pub fn new(session: ConversationSession, streaming: bool) -> Self {
        Self { session, streaming }
    }

    /// Print the seeded transcript (the persona greeting, if any).
    pub fn greet<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for message in self.session.transcript() {
            self.print_message(&message, out)?;
        }
        Ok(())
    }

    /// Handle one line of input: a slash command or a message to submit.
    pub async fn handle_line<W: Write>(&self, line: &str, out: &mut W) -> io::Result<Flow> {
        match line.trim() {
            "/quit" => return Ok(Flow::Quit),
            "/history" => {
                for message in self.session.transcript() {
                    let stamp = message.timestamp.format("%H:%M:%S");
                    write!(out, "[{stamp}] ")?;
                    self.print_message(&message, out)?;
                }
            }
            "/usage" => {
                let usage = self.session.usage();
                writeln!(
                    out,
                    "tokens: {} in / {} out ({} total) over {} calls",
                    usage.input_tokens,
                    usage.output_tokens,
                    usage.total_tokens(),
                    self.session.provider_calls()
                )?;
            }
            _ => self.submit(line, out).await?,
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    async fn submit<W: Write>(&self, line: &str, out: &mut W) -> io::Result<()> {
        let mut rx = self.session.subscribe();
        let mut streamed = String::new();
        let name = self.session.persona().name.clone();

        let submission = async {
            if self.streaming {
                self.session.submit_streaming(line).await
            } else {
                self.session.submit(line).await
            }
        };

        let result = drive(submission, &mut rx, |event| match event {
            SessionEvent::Chunk(chunk) => {
                if streamed.is_empty() {
                    write!(out, "{name}: ")?;
                }
                streamed.push_str(&chunk);
                write!(out, "{chunk}")?;
                out.flush()
            }
            SessionEvent::MessageAppended(message) if message.role == Role::Assistant => {
                if streamed.is_empty() {
                    writeln!(out, "{name}: {}", message.content)
                } else if message.content == streamed {
                    writeln!(out)
                } else {
                    // Stream broke off; the recorded entry is the fallback.
                    writeln!(out)?;
                    writeln!(out, "{name}: {}", message.content)
                }
            }
            SessionEvent::StatusChanged(status) => {
                debug!(?status, "session status");
                Ok(())
            }
            SessionEvent::MessageAppended(_) => Ok(()),
        })
        .await?;

        match result {
            Ok(()) | Err(SubmitError::InvalidInput) => Ok(()),
            Err(e) => writeln!(out, "! {e}"),
        }
    }

    fn print_message<W: Write>(&self, message: &Message, out: &mut W) -> io::Result<()> {
        match message.role {
            Role::User => writeln!(out, "You: {}", message.content),
            Role::Assistant => writeln!(out, "{}: {}", self.session.persona().name, message.content),
        }
    }
}

/// Boot, then read chat lines from stdin until `/quit`, EOF, or shutdown.
pub async fn run(ctx: &AppContext) -> aura_common::Result<()> {
    let mut out = io::stdout();
    if ctx.boot {
        let mut sequence = boot::BootSequence::new(&ctx.config);
        boot::play(&mut sequence, &mut out).await?;
        ctx.events.publish(aura_common::Event::BootCompleted);
    }

    let config = &ctx.config;
    let session = ConversationSession::new(
        provider::build_generator(&config.ai),
        persona_from_config(config),
    )
    .with_context_mode(context_mode(&config.ai));
    info!(session = %session.id().short(), "chat started");

    let repl = ChatRepl::new(session, config.ai.streaming);
    repl.greet(&mut out)?;

    let mut shutdown = ctx.events.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = shutdown_signal(&mut shutdown) => None,
        };
        let Some(line) = line else { break };
        if repl.handle_line(&line, &mut out).await? == Flow::Quit {
            break;
        }
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use aura_ai::{AiError, ChunkCallback, Generation, PersonaConfig, TextGenerator, TokenUsage};

    use super::*;

    struct Fixed(&'static str);

    #[async_trait]
    impl TextGenerator for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn generate(&self, _prompt: &str) -> Result<Generation, AiError> {
            Ok(Generation {
                text: self.0.to_string(),
                usage: TokenUsage {
                    input_tokens: 10,
                    output_tokens: 4,
                },
            })
        }
    }

    /// Streams two chunks, then fails.
    struct BrokenStream;

    #[async_trait]
    impl TextGenerator for BrokenStream {
        fn name(&self) -> &str {
            "broken"
        }

        async fn generate(&self, _prompt: &str) -> Result<Generation, AiError> {
            Err(AiError::Timeout)
        }

        async fn generate_streaming(
            &self,
            _prompt: &str,
            on_chunk: ChunkCallback,
        ) -> Result<Generation, AiError> {
            on_chunk("Hola ".into());
            on_chunk("Admin".into());
            Err(AiError::NetworkError("reset".into()))
        }
    }

    fn persona() -> PersonaConfig {
        PersonaConfig {
            name: "Aria".into(),
            greeting: "Sistemas listos.".into(),
            fallback_reply: "Interferencia.".into(),
            ..PersonaConfig::default()
        }
    }

    fn repl(generator: impl TextGenerator + 'static, streaming: bool) -> ChatRepl {
        ChatRepl::new(
            ConversationSession::new(Arc::new(generator), persona()),
            streaming,
        )
    }

    async fn send(repl: &ChatRepl, line: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = repl.handle_line(line, &mut out).await.unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn greet_prints_seeded_greeting() {
        let repl = repl(Fixed("OK"), false);
        let mut out = Vec::new();
        repl.greet(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Aria: Sistemas listos.\n");
    }

    #[tokio::test]
    async fn message_prints_reply() {
        let repl = repl(Fixed("Estado: estable"), false);
        let (flow, text) = send(&repl, "Status?").await;
        assert_eq!(flow, Flow::Continue);
        assert_eq!(text, "Aria: Estado: estable\n");
        assert_eq!(repl.session.message_count(), 3);
    }

    #[tokio::test]
    async fn streaming_prints_chunks_once() {
        struct Chunked;

        #[async_trait]
        impl TextGenerator for Chunked {
            fn name(&self) -> &str {
                "chunked"
            }

            async fn generate(&self, _prompt: &str) -> Result<Generation, AiError> {
                Ok(Generation::new("Hola Admin"))
            }

            async fn generate_streaming(
                &self,
                _prompt: &str,
                on_chunk: ChunkCallback,
            ) -> Result<Generation, AiError> {
                on_chunk("Hola ".into());
                on_chunk("Admin".into());
                Ok(Generation::new("Hola Admin"))
            }
        }

        let repl = repl(Chunked, true);
        let (_, text) = send(&repl, "hola").await;
        assert_eq!(text, "Aria: Hola Admin\n");
    }

    #[tokio::test]
    async fn broken_stream_prints_fallback() {
        let repl = repl(BrokenStream, true);
        let (_, text) = send(&repl, "hola").await;
        assert_eq!(text, "Aria: Hola Admin\nAria: Interferencia.\n");
        assert_eq!(repl.session.last_message().unwrap().content, "Interferencia.");
    }

    #[tokio::test]
    async fn blank_line_is_ignored() {
        let repl = repl(Fixed("OK"), false);
        let (flow, text) = send(&repl, "   ").await;
        assert_eq!(flow, Flow::Continue);
        assert!(text.is_empty());
        assert_eq!(repl.session.message_count(), 1);
    }

    #[tokio::test]
    async fn slash_commands() {
        let repl = repl(Fixed("OK"), false);
        send(&repl, "ping").await;

        let (_, history) = send(&repl, "/history").await;
        let lines: Vec<_> = history.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("You: ping"));
        assert!(lines[2].ends_with("Aria: OK"));

        let (_, usage) = send(&repl, "/usage").await;
        assert_eq!(usage, "tokens: 10 in / 4 out (14 total) over 1 calls\n");

        let (flow, _) = send(&repl, " /quit ").await;
        assert_eq!(flow, Flow::Quit);
    }
}
