use crate::commands::{
    cd::CdCommand, echo::EchoCommand, exit::ExitCommand, history::HistoryCommand, ls::LsCommand,
    tac::TacCommand, touch::TouchCommand,
};
use crate::context::ShellContext;
use crate::error::ShellError;

/// What a command hands back to the presentation layer.
///
/// `errors` holds per-argument failures of commands that keep going after
/// one argument fails; a failure of the whole command is the `Err` side of
/// [`CommandResult`] instead.
#[derive(Debug, Default)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub errors: Vec<ShellError>,
    pub exit: bool,
}

impl CommandOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }

    pub fn exit() -> Self {
        Self {
            exit: true,
            ..Self::default()
        }
    }
}

pub type CommandResult = Result<CommandOutput, ShellError>;

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> CommandResult;
}

/// The closed set of commands the interpreter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Ls,
    Cd,
    Tac,
    Echo,
    History,
    Touch,
}

impl Builtin {
    pub const ALL: [Builtin; 7] = [
        Builtin::Exit,
        Builtin::Ls,
        Builtin::Cd,
        Builtin::Tac,
        Builtin::Echo,
        Builtin::History,
        Builtin::Touch,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Exit => "exit",
            Builtin::Ls => "ls",
            Builtin::Cd => "cd",
            Builtin::Tac => "tac",
            Builtin::Echo => "echo",
            Builtin::History => "history",
            Builtin::Touch => "touch",
        }
    }

    fn command(self) -> &'static dyn Command {
        match self {
            Builtin::Exit => &ExitCommand,
            Builtin::Ls => &LsCommand,
            Builtin::Cd => &CdCommand,
            Builtin::Tac => &TacCommand,
            Builtin::Echo => &EchoCommand,
            Builtin::History => &HistoryCommand,
            Builtin::Touch => &TouchCommand,
        }
    }

    pub fn execute(self, args: &[String], ctx: &mut ShellContext) -> CommandResult {
        self.command().execute(args, ctx)
    }
}

/// Dispatch an already tokenized line. No tokens is a no-op.
pub fn run_command(tokens: &[String], ctx: &mut ShellContext) -> CommandResult {
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(CommandOutput::empty());
    };
    let builtin =
        Builtin::from_name(verb).ok_or_else(|| ShellError::UnknownCommand(verb.clone()))?;
    tracing::debug!(command = builtin.name(), argc = args.len(), cwd = ctx.cwd(), "dispatch");
    builtin.execute(args, ctx)
}
