use catalog::product::ProductId;
use std::str::FromStr;
use thiserror::Error;

/// One REPL line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Name(String),
    Price(String),
    Submit,
    Edit(ProductId),
    Delete(ProductId),
    New,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a product id")]
    InvalidId(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "name" => Ok(Command::Name(rest.to_string())),
            "price" => Ok(Command::Price(rest.to_string())),
            "submit" => Ok(Command::Submit),
            "edit" => parse_id("edit", rest).map(Command::Edit),
            "delete" | "rm" => parse_id("delete", rest).map(Command::Delete),
            "new" => Ok(Command::New),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<ProductId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("list".parse(), Ok(Command::List));
        assert_eq!("name  Gaming Laptop ".parse(), Ok(Command::Name("Gaming Laptop".into())));
        assert_eq!("price 12.5".parse(), Ok(Command::Price("12.5".into())));
        assert_eq!("EDIT 3".parse(), Ok(Command::Edit(3)));
        assert_eq!("delete 2".parse(), Ok(Command::Delete(2)));
        assert_eq!("name".parse(), Ok(Command::Name(String::new())));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "edit".parse::<Command>(),
            Err(CommandError::MissingArgument("edit"))
        );
        assert_eq!(
            "delete abc".parse::<Command>(),
            Err(CommandError::InvalidId("abc".into()))
        );
        assert!(matches!("frobnicate".parse::<Command>(), Err(CommandError::Unknown(_))));
    }
}
