//! Line-oriented drafting session on a terminal.
//!
//! Each input line is one command. Commands that change a form echo the recomputed note, so the
//! terminal behaves like the live note panel next to the forms.

use anyhow::{Context, bail};
use pedichart_core::constants::{NOTE_PLACEHOLDER, RESET_LABEL};
use pedichart_core::forms::catalog;
use pedichart_core::{ChartSession, Clipboard, Condition, CopyOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Line that ends a multi-line `edit`.
const EDIT_TERMINATOR: &str = ".";

pub const HELP: &str = "\
commands:
  view <condition>                      open a form
  set <condition> <field> <value...>    set a text field (empty value clears it)
  toggle <condition> <symptom> <code>   toggle a symptom status (++, +, -)
  detail <condition> <symptom> <text>   set the detail next to a symptom
  edit                                  replace the note by hand; end with a line holding only .
  show                                  print the note
  state                                 dump every form as YAML
  copy                                  copy the note to the clipboard
  reset                                 clear every form
  fields [condition]                    list field and symptom names
  help                                  this text
  quit
conditions: appetite|식욕부진, growth|성장, rhinitis|비염";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    View(Condition),
    Set {
        condition: Condition,
        field: String,
        value: String,
    },
    Toggle {
        condition: Condition,
        symptom: String,
        status: String,
    },
    Detail {
        condition: Condition,
        symptom: String,
        detail: String,
    },
    Edit,
    Show,
    State,
    Copy,
    Reset,
    Fields(Option<Condition>),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    let Some((verb, rest)) = split_word(line) else {
        return Ok(None);
    };

    let command = match verb {
        "view" => Command::View(condition_arg(rest)?.0),
        "set" => {
            let (condition, rest) = condition_arg(rest)?;
            let (field, value) = split_word(rest).context("usage: set <condition> <field> <value...>")?;
            Command::Set {
                condition,
                field: field.to_owned(),
                value: value.to_owned(),
            }
        }
        "toggle" => {
            let (condition, rest) = condition_arg(rest)?;
            let (symptom, status) = split_word(rest)
                .filter(|(_, status)| !status.is_empty())
                .context("usage: toggle <condition> <symptom> <code>")?;
            Command::Toggle {
                condition,
                symptom: symptom.to_owned(),
                status: status.to_owned(),
            }
        }
        "detail" => {
            let (condition, rest) = condition_arg(rest)?;
            let (symptom, detail) =
                split_word(rest).context("usage: detail <condition> <symptom> <text...>")?;
            Command::Detail {
                condition,
                symptom: symptom.to_owned(),
                detail: detail.to_owned(),
            }
        }
        "fields" if rest.is_empty() => Command::Fields(None),
        "fields" => Command::Fields(Some(rest.parse()?)),
        "edit" => Command::Edit,
        "show" => Command::Show,
        "state" => Command::State,
        "copy" => Command::Copy,
        "reset" => Command::Reset,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command `{other}`; try `help`"),
    };
    Ok(Some(command))
}

fn split_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest.trim())),
        None => Some((input, "")),
    }
}

fn condition_arg(input: &str) -> anyhow::Result<(Condition, &str)> {
    let (condition, rest) = split_word(input).context("missing condition")?;
    Ok((condition.parse()?, rest))
}

pub struct Repl<C> {
    session: ChartSession<C>,
}

impl<C: Clipboard> Repl<C> {
    pub fn new(session: ChartSession<C>) -> Self {
        Self { session }
    }

    #[cfg(test)]
    fn session(&self) -> &ChartSession<C> {
        &self.session
    }

    /// Read commands until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            let reply = match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => break,
                Ok(Some(Command::Edit)) => {
                    let mut text = Vec::new();
                    while let Some(line) = lines.next_line().await? {
                        if line.trim() == EDIT_TERMINATOR {
                            break;
                        }
                        text.push(line);
                    }
                    self.session.edit_note(text.join("\n"));
                    Ok(self.render_note())
                }
                Ok(Some(command)) => self.execute(command).await,
                Err(e) => Err(e),
            };

            let text = match reply {
                Ok(text) => text,
                Err(e) => format!("error: {e:#}"),
            };
            output.write_all(text.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }

        Ok(())
    }

    async fn execute(&mut self, command: Command) -> anyhow::Result<String> {
        let session = &mut self.session;
        match command {
            Command::View(condition) => {
                session.select(condition);
                Ok(catalog(condition).to_string())
            }
            Command::Set {
                condition,
                field,
                value,
            } => {
                session.set_text(condition, &field, value)?;
                Ok(self.render_note())
            }
            Command::Toggle {
                condition,
                symptom,
                status,
            } => {
                session.toggle_status(condition, &symptom, &status)?;
                Ok(self.render_note())
            }
            Command::Detail {
                condition,
                symptom,
                detail,
            } => {
                session.set_detail(condition, &symptom, detail)?;
                Ok(self.render_note())
            }
            Command::Show | Command::Edit => Ok(self.render_note()),
            Command::State => Ok(session.snapshot_yaml()?),
            Command::Copy => Ok(match session.copy().await {
                CopyOutcome::Copied => session.copy_label().to_string(),
                CopyOutcome::Skipped => NOTE_PLACEHOLDER.to_string(),
                CopyOutcome::Failed => "copy failed".to_string(),
            }),
            Command::Reset => {
                session.reset();
                Ok(self.render_note())
            }
            Command::Fields(condition) => Ok(match condition {
                Some(condition) => catalog(condition).to_string(),
                None => Condition::ALL
                    .into_iter()
                    .map(|c| catalog(c).to_string())
                    .collect::<Vec<_>>()
                    .join("\n"),
            }),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    fn render_note(&self) -> String {
        let note = match self.session.note() {
            "" => NOTE_PLACEHOLDER,
            note => note,
        };
        format!(
            "{note}\n[{}] [{}]",
            self.session.copy_label(),
            RESET_LABEL
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedichart_core::MemoryClipboard;

    async fn run_script(script: &str) -> (Repl<MemoryClipboard>, String) {
        let mut repl = Repl::new(ChartSession::new(MemoryClipboard::new()));
        let mut output = Vec::new();
        repl.run(script.as_bytes(), &mut output).await.expect("run");
        (repl, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn parses_commands_with_free_text() {
        assert_eq!(
            parse_command("set 성장 growthLastYearText  방학 동안 많이 큼 ").expect("parse"),
            Some(Command::Set {
                condition: Condition::Growth,
                field: "growthLastYearText".into(),
                value: "방학 동안 많이 큼".into(),
            })
        );
        assert_eq!(
            parse_command("set growth other").expect("parse"),
            Some(Command::Set {
                condition: Condition::Growth,
                field: "other".into(),
                value: String::new(),
            })
        );
        assert_eq!(
            parse_command("toggle rhinitis nasalCongestion ++").expect("parse"),
            Some(Command::Toggle {
                condition: Condition::Rhinitis,
                symptom: "nasalCongestion".into(),
                status: "++".into(),
            })
        );
        assert_eq!(parse_command("   ").expect("parse"), None);
        assert_eq!(parse_command("fields").expect("parse"), Some(Command::Fields(None)));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(parse_command("undo").is_err());
        assert!(parse_command("view asthma").is_err());
        assert!(parse_command("toggle appetite nausea").is_err());
        assert!(parse_command("set").is_err());
    }

    #[tokio::test]
    async fn field_commands_echo_the_note() {
        let (repl, output) = run_script(
            "set appetite mealAmount 절반\n\
             toggle appetite abdominalPain +\n\
             detail appetite abdominalPain 식후\n",
        )
        .await;

        assert_eq!(
            repl.session().note(),
            "#식욕부진\n-식사량 : 절반\n-동반 증상 : 복통(+, 식후)"
        );
        assert!(output.ends_with("-동반 증상 : 복통(+, 식후)\n[복사] [초기화]\n"));
    }

    #[tokio::test]
    async fn errors_are_reported_and_state_is_kept() {
        let (repl, output) = run_script("set growth height 150\ntoggle growth menarche ++\n").await;

        assert_eq!(repl.session().note(), "");
        assert_eq!(output.lines().filter(|l| l.starts_with("error: ")).count(), 2);
    }

    #[tokio::test]
    async fn edit_reads_until_terminator() {
        let (repl, _) = run_script(
            "set rhinitis findings pale\nedit\n#비염\n직접 작성\n.\nshow\nquit\nset rhinitis other x\n",
        )
        .await;

        assert_eq!(repl.session().note(), "#비염\n직접 작성");
    }

    #[tokio::test]
    async fn copy_and_reset() {
        let (repl, output) =
            run_script("copy\nset growth growthHistory 없음\ncopy\nreset\n").await;

        assert!(output.starts_with(NOTE_PLACEHOLDER));
        assert!(output.contains("복사됨!"));
        assert_eq!(
            repl.session().clipboard().contents().as_deref(),
            Some("#성장\n-성장 관련 진료 : 없음")
        );
        assert_eq!(repl.session().note(), "");
    }
}
