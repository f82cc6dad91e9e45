//! Command definitions for the console
//!
//! Each command can be typed by name or by its menu number.

/// A command that can be executed
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (what user types)
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Menu number
    pub shortcut: &'static str,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    AddTransaction,
    ListTransactions,
    FilterByCategory,
    MonthlyReport,
    ShowTotal,
    ClearLedger,
    ShowSummaries,
    Search,
    Help,
    Exit,
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        name: "add",
        description: "Add a transaction",
        shortcut: "1",
        action: CommandAction::AddTransaction,
    },
    Command {
        name: "list",
        description: "List all transactions",
        shortcut: "2",
        action: CommandAction::ListTransactions,
    },
    Command {
        name: "filter",
        description: "Filter transactions by category",
        shortcut: "3",
        action: CommandAction::FilterByCategory,
    },
    Command {
        name: "report",
        description: "Monthly report",
        shortcut: "4",
        action: CommandAction::MonthlyReport,
    },
    Command {
        name: "total",
        description: "Total of all transactions",
        shortcut: "5",
        action: CommandAction::ShowTotal,
    },
    Command {
        name: "clear",
        description: "Remove every transaction",
        shortcut: "6",
        action: CommandAction::ClearLedger,
    },
    Command {
        name: "summary",
        description: "Income/expense summaries",
        shortcut: "7",
        action: CommandAction::ShowSummaries,
    },
    Command {
        name: "search",
        description: "Search by kind, text, month or dates",
        shortcut: "8",
        action: CommandAction::Search,
    },
    Command {
        name: "help",
        description: "Show this menu",
        shortcut: "?",
        action: CommandAction::Help,
    },
    Command {
        name: "exit",
        description: "Leave Pennywise",
        shortcut: "0",
        action: CommandAction::Exit,
    },
];

/// Find a command by name or menu number, ignoring case
pub fn find_command(input: &str) -> Option<&'static Command> {
    let input = input.trim();
    COMMANDS
        .iter()
        .find(|cmd| cmd.name.eq_ignore_ascii_case(input) || cmd.shortcut == input)
}

/// Menu listing every command
pub fn menu_text() -> String {
    let mut output = String::from("Commands:\n");
    for cmd in COMMANDS {
        output.push_str(&format!(
            "  {:>2}. {:<8} {}\n",
            cmd.shortcut, cmd.name, cmd.description
        ));
    }
    output
}
