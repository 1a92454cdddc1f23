//! Numbered menu commands.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One entry of the operator menu, numbered as typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Exit,
    EnrollMember,
    RemoveMember,
    AddProducts,
    CheckOutItems,
    ProcessShipments,
    ChangePrice,
    ProductInfo,
    MemberInfo,
    ListTransactions,
    ListOutstandingOrders,
    ListMembers,
    ListProducts,
    Save,
    Help,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 15] = [
        Command::Exit,
        Command::EnrollMember,
        Command::RemoveMember,
        Command::AddProducts,
        Command::CheckOutItems,
        Command::ProcessShipments,
        Command::ChangePrice,
        Command::ProductInfo,
        Command::MemberInfo,
        Command::ListTransactions,
        Command::ListOutstandingOrders,
        Command::ListMembers,
        Command::ListProducts,
        Command::Save,
        Command::Help,
    ];

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.get(number as usize).copied()
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::EnrollMember => "add a member",
            Command::RemoveMember => "remove a member",
            Command::AddProducts => "add products",
            Command::CheckOutItems => "check out a member's items",
            Command::ProcessShipments => "process shipments",
            Command::ChangePrice => "change the price of a product",
            Command::ProductInfo => "get product information by name",
            Command::MemberInfo => "get member information by name",
            Command::ListTransactions => "print a member's transactions",
            Command::ListOutstandingOrders => "list outstanding orders",
            Command::ListMembers => "list all members",
            Command::ListProducts => "list all products",
            Command::Save => "save data",
            Command::Help => "help",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2} to {}", self.number(), self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("'{0}' is not a command number")]
    NotANumber(String),

    #[error("Enter a number between 0 and {}", Command::ALL.len() - 1)]
    OutOfRange(u32),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: u32 = trimmed
            .parse()
            .map_err(|_| ParseCommandError::NotANumber(trimmed.to_string()))?;
        Command::from_number(number).ok_or(ParseCommandError::OutOfRange(number))
    }
}

/// The menu as printed by the help command.
pub fn help_text() -> String {
    let mut text = String::from("Enter a number between 0 and 14 as explained below:\n");
    for command in Command::ALL {
        text.push_str(&format!("\n{command}"));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_match_menu_order() {
        for (index, command) in Command::ALL.iter().enumerate() {
            assert_eq!(command.number() as usize, index);
            assert_eq!(Command::from_number(index as u32), Some(*command));
        }
        assert_eq!(Command::Save.number(), 13);
    }

    #[test]
    fn test_parse() {
        assert_eq!("4".parse::<Command>(), Ok(Command::CheckOutItems));
        assert_eq!(" 14 ".parse::<Command>(), Ok(Command::Help));
        assert_eq!("15".parse::<Command>(), Err(ParseCommandError::OutOfRange(15)));
        assert!(matches!(
            "four".parse::<Command>(),
            Err(ParseCommandError::NotANumber(_))
        ));
        assert!("-1".parse::<Command>().is_err());
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        assert!(help.contains(" 0 to exit"));
        assert!(help.contains("13 to save data"));
        assert_eq!(help.lines().filter(|l| l.contains(" to ")).count(), 15);
    }
}
