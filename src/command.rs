//! Command line parsing for the contact book
//!
//! Turns one line of user input into a `Command`, checking the argument
//! count. Field formats (phone, birthday) are validated later by the book.

use crate::error::{BookError, BookResult};

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
}

impl Command {
    /// Parse a command line such as `add John 1234567890`
    ///
    /// The command word is case-insensitive; arguments are split on
    /// whitespace.
    pub fn parse(line: &str) -> BookResult<Self> {
        let mut parts = line.split_whitespace();
        let word = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match word.as_str() {
            "hello" => {
                expect_args(&word, &args, 0, "hello")?;
                Command::Hello
            }
            "help" => {
                expect_args(&word, &args, 0, "help")?;
                Command::Help
            }
            "add" => {
                expect_args(&word, &args, 2, "add <name> <phone>")?;
                Command::Add {
                    name: args[0].to_string(),
                    phone: args[1].to_string(),
                }
            }
            "change" => {
                expect_args(&word, &args, 3, "change <name> <old_phone> <new_phone>")?;
                Command::Change {
                    name: args[0].to_string(),
                    old: args[1].to_string(),
                    new: args[2].to_string(),
                }
            }
            "phone" => {
                expect_args(&word, &args, 1, "phone <name>")?;
                Command::Phone {
                    name: args[0].to_string(),
                }
            }
            "remove-phone" => {
                expect_args(&word, &args, 2, "remove-phone <name> <phone>")?;
                Command::RemovePhone {
                    name: args[0].to_string(),
                    phone: args[1].to_string(),
                }
            }
            "delete" => {
                expect_args(&word, &args, 1, "delete <name>")?;
                Command::Delete {
                    name: args[0].to_string(),
                }
            }
            "all" => {
                expect_args(&word, &args, 0, "all")?;
                Command::All
            }
            "add-birthday" => {
                expect_args(&word, &args, 2, "add-birthday <name> <DD.MM.YYYY>")?;
                Command::AddBirthday {
                    name: args[0].to_string(),
                    date: args[1].to_string(),
                }
            }
            "show-birthday" => {
                expect_args(&word, &args, 1, "show-birthday <name>")?;
                Command::ShowBirthday {
                    name: args[0].to_string(),
                }
            }
            "birthdays" => {
                expect_args(&word, &args, 0, "birthdays")?;
                Command::Birthdays
            }
            "close" | "exit" => {
                expect_args(&word, &args, 0, "close | exit")?;
                Command::Exit
            }
            _ => return Err(BookError::UnknownCommand(word)),
        };
        Ok(command)
    }
}

fn expect_args(
    command: &str,
    args: &[&str],
    count: usize,
    usage: &'static str,
) -> BookResult<()> {
    if args.len() != count {
        return Err(BookError::MalformedCommand {
            command: command.to_string(),
            usage,
        });
    }
    Ok(())
}
