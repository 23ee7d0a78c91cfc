//! Session state machine — the read-evaluate-print loop.
//!
//! Drives SelectingLanguage → Greeted → Looping → Farewell over any pair of
//! async reader/writer, so tests can script a whole session in memory while
//! `main` wires up stdin/stdout.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::clock::DayPeriod;
use crate::commands::is_quit;
use crate::error::OhceError;
use crate::i18n::{self, Locale};
use crate::text::{is_palindrome, reverse};

const BANNER: &str = "=== Application Console OHCE ===";

/// What one loop iteration decided to do with a line of input.
#[derive(Debug, PartialEq, Eq)]
enum LineOutcome {
    /// Mirror the input; `palindrome` adds the locale's response line.
    Mirror { reply: String, palindrome: bool },
    /// Blank input: print nothing, keep looping.
    Silent,
    /// A quit command: proceed to the farewell.
    Quit,
}

/// Classify a line of input. Pure, so the loop's control flow is visible
/// without threading errors through it.
fn evaluate(line: &str) -> LineOutcome {
    if is_quit(line) {
        LineOutcome::Quit
    } else if line.trim().is_empty() {
        LineOutcome::Silent
    } else {
        LineOutcome::Mirror {
            reply: reverse(line),
            palindrome: is_palindrome(line),
        }
    }
}

/// One console session. Holds the fallback language and an optional
/// preselected language; everything else lives on the loop's stack.
pub struct Session {
    fallback_code: String,
    preselected: Option<String>,
}

impl Session {
    pub fn new(fallback_code: impl Into<String>) -> Self {
        Self {
            fallback_code: fallback_code.into(),
            preselected: None,
        }
    }

    /// Preselect the language, skipping the startup prompt.
    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.preselected = Some(code.into());
        self
    }

    /// Run the session to completion over the given console streams,
    /// ending it on Ctrl-C.
    pub async fn run<R, W>(&self, input: R, output: W) -> Result<(), OhceError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.run_until(input, output, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for interrupt: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Run the session, cutting the loop short when `interrupt` completes.
    pub async fn run_until<R, W, F>(
        &self,
        input: R,
        mut output: W,
        interrupt: F,
    ) -> Result<(), OhceError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        tokio::pin!(interrupt);
        let mut lines = input.lines();

        // SelectingLanguage
        let locale = match &self.preselected {
            Some(code) => self.select(code, &mut output).await?,
            None => {
                let (default_locale, _) =
                    i18n::lookup_or_default(&self.fallback_code, i18n::DEFAULT_CODE);
                output
                    .write_all(default_locale.choose_language.as_bytes())
                    .await?;
                output.flush().await?;
                let code = lines.next_line().await?.unwrap_or_default();
                self.select(&code, &mut output).await?
            }
        };
        info!("session started in language {}", locale.code);

        // Greeted
        write_line(&mut output, BANNER).await?;
        write_line(&mut output, locale.greetings[DayPeriod::current().index()]).await?;
        write_line(&mut output, "").await?;

        // Looping
        loop {
            output.write_all(locale.prompt.as_bytes()).await?;
            output.flush().await?;

            let read = tokio::select! {
                read = lines.next_line() => read,
                _ = &mut interrupt => {
                    // Interrupt goes straight to Terminated: a blank line
                    // acknowledgment, no farewell.
                    info!("Received interrupt, ending session");
                    output.write_all(b"\n").await?;
                    output.flush().await?;
                    return Ok(());
                }
            };

            match read {
                Ok(Some(line)) => match evaluate(&line) {
                    LineOutcome::Quit => break,
                    LineOutcome::Silent => {}
                    LineOutcome::Mirror { reply, palindrome } => {
                        write_line(&mut output, &reply).await?;
                        if palindrome {
                            write_line(&mut output, locale.palindrome_response).await?;
                        }
                    }
                },
                // End of input ends the loop the same way a quit command does.
                Ok(None) => break,
                Err(e) => {
                    warn!("failed to read input line: {e}");
                    write_line(&mut output, &format!("{}: {e}", locale.error)).await?;
                }
            }
        }

        // Farewell — recompute the period, the clock may have moved on.
        write_line(&mut output, locale.farewells[DayPeriod::current().index()]).await?;
        Ok(())
    }

    /// Resolve the chosen language, printing the unsupported-language notice
    /// when it falls back.
    async fn select<W>(&self, code: &str, output: &mut W) -> Result<&'static Locale, OhceError>
    where
        W: AsyncWrite + Unpin,
    {
        let (locale, fell_back) = i18n::lookup_or_default(code, &self.fallback_code);
        if fell_back {
            warn!(
                "unsupported language {:?}, falling back to {}",
                code.trim(),
                locale.code
            );
            write_line(output, locale.unsupported).await?;
        }
        Ok(locale)
    }
}

async fn write_line<W>(output: &mut W, text: &str) -> Result<(), OhceError>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
