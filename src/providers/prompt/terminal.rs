//! Terminal prompt.
//!
//! Prints a numbered menu and reads the answer from a line-oriented input.
//! An empty line, `q`, or end of input cancels; anything else that is not a
//! valid option number asks again.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

use super::traits::{Choice, ChoicePrompt, PromptError, Result};

/// How a line of user input was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Pick(usize),
    Cancel,
    Invalid,
}

fn parse_answer(line: &str, count: usize) -> Answer {
    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Answer::Cancel;
    }
    match line.parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Answer::Pick(n - 1),
        _ => Answer::Invalid,
    }
}

struct Io<R, W> {
    reader: R,
    writer: W,
}

/// [`ChoicePrompt`] that talks to the user through a terminal.
pub struct TerminalPrompt<R, W> {
    io: Mutex<Io<R, W>>,
}

impl TerminalPrompt<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    /// Creates a prompt bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> TerminalPrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a prompt over arbitrary input and output streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new(Io { reader, writer }),
        }
    }

    /// Consumes the prompt and returns its streams.
    pub fn into_inner(self) -> (R, W) {
        let io = self.io.into_inner();
        (io.reader, io.writer)
    }
}

async fn write_str<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .await
        .map_err(|e| PromptError::Io(e.to_string()))?;
    writer
        .flush()
        .await
        .map_err(|e| PromptError::Io(e.to_string()))
}

async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .await
        .map_err(|e| PromptError::Io(e.to_string()))?;
    Ok((read > 0).then_some(line))
}

#[async_trait]
impl<R, W> ChoicePrompt for TerminalPrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn present_choices(&self, title: &str, labels: &[String]) -> Result<Choice> {
        let mut io = self.io.lock().await;
        let Io { reader, writer } = &mut *io;

        let mut menu = format!("{}\n", title);
        for (i, label) in labels.iter().enumerate() {
            menu.push_str(&format!("  {}) {}\n", i + 1, label));
        }
        write_str(writer, &menu).await?;

        loop {
            write_str(writer, "Select an option (empty to cancel): ").await?;
            let Some(line) = read_line(reader).await? else {
                return Ok(Choice::Cancelled);
            };
            match parse_answer(&line, labels.len()) {
                Answer::Pick(index) => return Ok(Choice::Picked(index)),
                Answer::Cancel => return Ok(Choice::Cancelled),
                Answer::Invalid => {
                    write_str(
                        writer,
                        &format!("Please enter a number between 1 and {}.\n", labels.len()),
                    )
                    .await?;
                }
            }
        }
    }

    async fn alert(&self, title: &str, message: &str) -> Result<()> {
        let mut io = self.io.lock().await;
        let Io { reader, writer } = &mut *io;

        write_str(
            writer,
            &format!("{}\n{}\nPress Enter to continue.", title, message),
        )
        .await?;
        read_line(reader).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels() -> Vec<String> {
        vec!["x@foo.com".to_string(), "y@bar.com".to_string()]
    }

    fn prompt(input: &'static str) -> TerminalPrompt<BufReader<&'static [u8]>, Vec<u8>> {
        TerminalPrompt::new(BufReader::new(input.as_bytes()), Vec::new())
    }

    #[test]
    fn parse_answers() {
        assert_eq!(parse_answer("1\n", 2), Answer::Pick(0));
        assert_eq!(parse_answer(" 2 ", 2), Answer::Pick(1));
        assert_eq!(parse_answer("3", 2), Answer::Invalid);
        assert_eq!(parse_answer("0", 2), Answer::Invalid);
        assert_eq!(parse_answer("abc", 2), Answer::Invalid);
        assert_eq!(parse_answer("\n", 2), Answer::Cancel);
        assert_eq!(parse_answer("Q", 2), Answer::Cancel);
    }

    #[tokio::test]
    async fn picks_numbered_option() {
        let prompt = prompt("2\n");
        let choice = prompt
            .present_choices("Choose an account", &labels())
            .await
            .unwrap();
        assert_eq!(choice, Choice::Picked(1));

        let (_, output) = prompt.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Choose an account\n"));
        assert!(output.contains("  1) x@foo.com\n"));
        assert!(output.contains("  2) y@bar.com\n"));
    }

    #[tokio::test]
    async fn asks_again_after_invalid_input() {
        let prompt = prompt("7\nnope\n1\n");
        let choice = prompt.present_choices("t", &labels()).await.unwrap();
        assert_eq!(choice, Choice::Picked(0));

        let (_, output) = prompt.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Please enter a number").count(), 2);
    }

    #[tokio::test]
    async fn empty_line_cancels() {
        let prompt = prompt("\n");
        let choice = prompt.present_choices("t", &labels()).await.unwrap();
        assert_eq!(choice, Choice::Cancelled);
    }

    #[tokio::test]
    async fn end_of_input_cancels() {
        let prompt = prompt("");
        let choice = prompt.present_choices("t", &labels()).await.unwrap();
        assert_eq!(choice, Choice::Cancelled);
    }

    #[tokio::test]
    async fn alert_waits_for_enter() {
        let prompt = prompt("\n");
        prompt
            .alert("No account found", "Add an account first.")
            .await
            .unwrap();

        let (_, output) = prompt.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("No account found"));
        assert!(output.contains("Add an account first."));
    }
}
