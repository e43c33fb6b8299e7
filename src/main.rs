use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vshell::{host_name, CliArgs, CommandResult, Shell, ShellConfig, ShellError};

struct Prompt {
    user: String,
    host: String,
}

impl Prompt {
    fn from_env() -> Self {
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "user".to_string());
        Self {
            user,
            host: host_name(),
        }
    }

    fn render(&self, cwd: &str) -> String {
        format!("{}@{}:{}$ ", self.user, self.host, cwd)
    }
}

fn print_error(msg: impl std::fmt::Display) {
    println!("Error: {}", msg);
}

fn print_result(result: CommandResult) {
    match result {
        Ok(output) => {
            for line in output.lines {
                println!("{}", line);
            }
            for err in output.errors {
                print_error(err);
            }
        }
        Err(err) => print_error(err),
    }
}

fn print_banner(config: &ShellConfig, config_error: Option<&ShellError>, loaded: bool) {
    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("SHELL SETTINGS");
    println!(
        "VFS path: {}",
        config
            .archive_path
            .as_deref()
            .map_or("not set".to_string(), |p| p.display().to_string())
    );
    println!(
        "Startup script: {}",
        config
            .startup_script
            .as_deref()
            .map_or("not set".to_string(), |p| p.display().to_string())
    );
    if let Some(err) = config_error {
        println!("Config read error: {}", err);
    }
    if loaded {
        println!("VFS: loaded successfully");
    }
    println!("{}\n", rule);
}

fn run_startup_script(shell: &mut Shell, script: &Path, prompt: &Prompt) {
    let steps = match shell.run_script(script) {
        Ok(steps) => steps,
        Err(err) => {
            print_error(err);
            return;
        }
    };
    println!("# running startup script: {}", script.display());
    for step in steps {
        println!("{}{}", prompt.render(&step.cwd), step.line);
        match step.result {
            Err(err) => print_error(format!("[line {}] {}", step.line_number, err)),
            ok => print_result(ok),
        }
    }
    println!("# end of startup script\n");
}

fn main() {
    let cli = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let (config, config_error) = ShellConfig::resolve(&cli);
    let prompt = Prompt::from_env();
    let mut shell = Shell::new();

    let mut loaded = false;
    match config.archive_path.as_deref() {
        Some(path) => match shell.load_archive(path) {
            Ok(()) => {
                loaded = true;
                println!("[VFS] loaded: {}", path.display());
            }
            Err(err) => {
                tracing::error!(code = err.code(), "archive load failed");
                print_error(format!("[VFS] load failed: {}", err));
            }
        },
        None => println!("[VFS] no archive path given"),
    }

    print_banner(&config, config_error.as_ref(), loaded);

    if let Some(script) = config.startup_script.as_deref() {
        run_startup_script(&mut shell, script, &prompt);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    while !shell.has_exited() {
        print!("{}", prompt.render(shell.cwd()));
        if stdout.flush().is_err() {
            break;
        }
        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = input.trim_end_matches(['\n', '\r']);
        print_result(shell.execute_line(line));
    }
}
