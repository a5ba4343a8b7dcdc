//! # Help Text
//!
//! The command overview shown by the `help` command. The experimental
//! section is appended only when experimental functions are enabled.

pub const MAIN: &str = concat!(
    "Commands:\n",
    "* add task [task]: Add a task to the to-do list\n",
    "* list tasks: List all tasks\n",
    "* remove task [number]: Remove a task by number\n",
    "* calc [number op number]: Evaluate a simple calculation\n",
    "* time: Show the current time\n",
    "* date: Show today's date\n",
    "* settings botrule experimentalfunctions true/false: Toggle experimental functions\n",
    "* settings botrule language [deutsch/english]: Set the language\n",
    "* settings botrule list: List current settings\n",
    "* add quote [quote]: Store a quote\n",
    "* list quotes: List all stored quotes\n",
    "* random quote: Show a random quote\n",
);

pub const EXPERIMENTAL: &str = concat!(
    "* currency [amount] [from] to [to]: Convert currencies (experimental)\n",
    "* start quiz: Start a trivia quiz (experimental)\n",
    "* add reminder [time] [message]: Add a reminder (experimental)\n",
);

pub fn render(experimental: bool) -> String {
    if experimental {
        format!("{MAIN}{EXPERIMENTAL}")
    } else {
        MAIN.to_string()
    }
}
