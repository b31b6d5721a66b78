//! `abook` - CLI for addressbook
//!
//! Runs the interactive address book shell, and offers one-shot commands for
//! managing accounts and configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::{CommandFactory, Parser};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use addressbook::account::{PasswordHash, Username};
use addressbook::cli::{
    AccountCommand, Cli, Command, ConfigCommand, CredentialsArgs, ShellLine, ShellParseError,
};
use addressbook::{init_logging, AccountManager, Config, LogicManager};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;
    config.validate()?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(&config),
        Command::Account(account_cmd) => handle_account(&config, account_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn run_shell(config: &Config) -> anyhow::Result<()> {
    let mut logic = LogicManager::new(config);
    let mut rl = DefaultEditor::new()?;

    println!("Welcome to the address book. Type `help` for commands.");
    loop {
        let prompt = match logic.accounts().current_account() {
            Some(account) => format!("abook({})> ", account.username()),
            None => "abook> ".to_string(),
        };

        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        };

        let command = match ShellLine::parse_line(&line) {
            Ok(shell_line) => {
                if shell_line.command.keep_in_history() {
                    rl.add_history_entry(line.trim())?;
                }
                shell_line.command.into_command()
            }
            Err(e) => Err(e),
        };

        let command = match command {
            Ok(command) => command,
            Err(ShellParseError::Empty) => continue,
            Err(ShellParseError::Clap(e)) => {
                print!("{e}");
                continue;
            }
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match logic.execute(command.as_ref()) {
            Ok(result) => {
                println!("{}", result.feedback());
                if result.show_help {
                    println!("{}", ShellLine::command().render_help());
                }
                if result.exit {
                    break;
                }
            }
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

fn handle_account(config: &Config, cmd: AccountCommand) -> anyhow::Result<()> {
    let mut accounts = AccountManager::new(config);
    match cmd {
        AccountCommand::Register(CredentialsArgs { username, password }) => {
            let username = Username::new(username)?;
            accounts.register(username.clone(), PasswordHash::from_plaintext(&password))?;
            println!("Registered account: {username}");
        }
        AccountCommand::List => {
            if accounts.account_list().is_empty() {
                println!("No accounts registered.");
            }
            for account in accounts.account_list() {
                println!("{}", account.username());
            }
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!(
                    "  Accounts file:      {}",
                    config.storage.accounts_file.display()
                );
                println!("  Data directory:     {}", config.storage.data_dir.display());
                println!(
                    "  Preferences file:   {}",
                    config.storage.preferences_file.display()
                );
                println!(
                    "  Default book:       {}",
                    config.storage.default_address_book_file.display()
                );
                println!();
                println!("[Session]");
                println!(
                    "  Sample data:        {}",
                    config.session.sample_data_on_first_login
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)).and_then(|c| c.validate()) {
                Ok(()) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
