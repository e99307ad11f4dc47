use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notifier")]
#[command(about = "Send and check friend-to-friend notifications", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend URL (overrides NOTIFIER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file (overrides NOTIFIER_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Print raw JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in as a user from the directory (prompts when --user is omitted)
    Login {
        #[arg(long)]
        user: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List the user directory
    Users,

    Friends {
        #[command(subcommand)]
        command: FriendsCommand,
    },

    /// List who you can send to (yourself first, then friends)
    Recipients,

    /// Send a SIMPLE notification (--message) or a MULTI checklist (--title + --item)
    Send {
        /// Recipient user id
        #[arg(long)]
        to: Option<i64>,

        #[arg(short, long, conflicts_with_all = ["title", "items"])]
        message: Option<String>,

        #[arg(long)]
        title: Option<String>,

        /// Checklist line; repeat for more items
        #[arg(long = "item")]
        items: Vec<String>,
    },

    /// Notifications addressed to you (pending only unless --all)
    Inbox {
        #[arg(long)]
        all: bool,
    },

    /// Show one notification with its checklist
    Show { id: i64 },

    /// Mark a notification as checked
    Check {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Toggle one checklist item of a MULTI notification
    Toggle { id: i64, item: i64 },

    /// Notifications you have sent
    Sent,

    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum FriendsCommand {
    List,
    Add { id: String },
    Remove { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Profile and preferences
    Show,
    /// Check notifications without a confirmation prompt
    SkipConfirm { value: Switch },
    /// Change the display name
    Rename { name: String },
    /// Upload a png, jpeg or webp profile image
    Avatar { path: PathBuf },
    /// Go back to the default profile image
    AvatarReset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl From<Switch> for bool {
    fn from(value: Switch) -> Self {
        value == Switch::On
    }
}
