//! Command dispatch for the `notifier` binary.
//!
//! Each command builds the store it needs, runs one operation and prints the
//! result. Text goes to stdout; logs and prompts go to stderr.

use serde::Serialize;
use serde_json::json;
use shared::{format_time, truncate_text, Friend, Notification, NotificationKind, User};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::app::{App, AuthGate, Draft, Inbox, Outgoing, Recipient, SentHistory};
use crate::cli::{Cli, Command, FriendsCommand, SettingsCommand};
use crate::config::Config;
use crate::core::error::{AppError, Result};
use crate::core::session::{Session, SessionStore};
use crate::services::api::ApiClient;

const PREVIEW_CHARS: usize = 60;

/// Resolve configuration from the environment plus CLI overrides.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(url) = &cli.api_url {
        config.api_url = url.clone();
    }
    if let Some(path) = &cli.session_file {
        config.session_file = path.clone();
    }
    config.validate()?;
    Ok(config)
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let gate = AuthGate::new(
        SessionStore::new(config.session_file.clone()),
        ApiClient::new(&config, None),
    );
    let out = Output { json: cli.json };

    match cli.command {
        Command::Login { user } => login(&gate, &out, user).await,

        Command::Logout => {
            let had_session = gate.logout()?;
            if out.json {
                return out.print_json(&json!({ "loggedOut": had_session }));
            }
            if had_session {
                out.line("Logged out.");
            } else {
                out.line("No session was stored.");
            }
            Ok(())
        }

        Command::Users => {
            let users = gate.available_users().await?;
            out.users(&users)
        }

        Command::Whoami => {
            let mut profile = logged_in(&gate)?.profile();
            profile.refresh().await?;
            match profile.me() {
                Some(me) if out.json => out.print_json(me),
                Some(me) => {
                    out.line(&format!("{} (id {})", me.label(), me.id));
                    Ok(())
                }
                None => Err(AppError::NotLoggedIn),
            }
        }

        Command::Friends { command } => {
            let mut friends = logged_in(&gate)?.friends();
            match command {
                FriendsCommand::List => friends.refresh().await?,
                FriendsCommand::Add { id } => {
                    let added = friends.add(&id).await?;
                    out.line(&format!("Added user {}.", added));
                }
                FriendsCommand::Remove { id } => {
                    friends.remove(id).await?;
                    out.line(&format!("Removed user {}.", id));
                }
            }
            out.friends(friends.list())
        }

        Command::Recipients => {
            let recipients = logged_in(&gate)?.friends().recipients().await?;
            out.recipients(&recipients)
        }

        Command::Send {
            to,
            message,
            title,
            items,
        } => {
            let draft = if title.is_some() || !items.is_empty() {
                items
                    .into_iter()
                    .fold(Draft::multi(to, title.unwrap_or_default()), Draft::item)
            } else {
                Draft::simple(to, message.unwrap_or_default())
            };
            let sent = logged_in(&gate)?.composer().send(&draft).await?;
            out.sent_confirmation(&sent)
        }

        Command::Inbox { all } => {
            let mut inbox = logged_in(&gate)?.inbox();
            inbox.refresh().await?;
            if out.json {
                return out.print_json(&inbox.items());
            }
            out.inbox_section("Pending", &inbox, &inbox.pending());
            if all {
                out.inbox_section("Checked", &inbox, &inbox.history());
            }
            Ok(())
        }

        Command::Show { id } => {
            let detail = logged_in(&gate)?.inbox().detail(id).await?;
            out.detail(&detail)
        }

        Command::Check { id, yes } => {
            let mut inbox = logged_in(&gate)?.inbox();
            inbox.load_preferences().await;
            if !yes && inbox.needs_confirmation() {
                let detail = inbox.detail(id).await?;
                let prompt = format!(
                    "Check \"{}\"?",
                    truncate_text(detail.headline(), PREVIEW_CHARS)
                );
                if !confirm(&prompt)? {
                    if out.json {
                        return out.print_json(&json!({ "checked": null, "cancelled": id }));
                    }
                    out.line("Cancelled.");
                    return Ok(());
                }
            }
            inbox.check(id).await?;
            if out.json {
                return out.print_json(&json!({ "checked": id }));
            }
            out.line(&format!("Checked #{}.", id));
            Ok(())
        }

        Command::Toggle { id, item } => {
            let detail = logged_in(&gate)?.inbox().toggle_item(id, item).await?;
            out.detail(&detail)
        }

        Command::Sent => {
            let mut sent = logged_in(&gate)?.sent();
            sent.refresh().await?;
            out.sent(sent.entries())
        }

        Command::Settings { command } => {
            let mut profile = logged_in(&gate)?.profile();
            match command {
                SettingsCommand::Show => profile.refresh().await?,
                SettingsCommand::SkipConfirm { value } => {
                    profile.refresh().await?;
                    profile.set_skip_confirm(value.into()).await?;
                }
                SettingsCommand::Rename { name } => profile.rename(&name).await?,
                SettingsCommand::Avatar { path } => profile.upload_image(&path).await?,
                SettingsCommand::AvatarReset => profile.reset_image().await?,
            }
            out.profile(profile.me(), profile.settings().skip_confirm)
        }
    }
}

/// App bound to the stored session, or [`AppError::NotLoggedIn`].
fn logged_in(gate: &AuthGate) -> Result<App> {
    let session = gate.require()?;
    Ok(App::new(session.clone(), Arc::new(gate.client_for(&session))))
}

async fn login(gate: &AuthGate, out: &Output, user: Option<String>) -> Result<()> {
    let user_id = match user {
        Some(id) => id,
        None => {
            let users = gate.available_users().await?;
            let first = users
                .first()
                .ok_or_else(|| AppError::Validation("The user directory is empty".to_string()))?;
            for u in &users {
                let email = u.email.as_ref().map(|e| format!(" ({})", e));
                eprintln!("  {:>4}  {}{}", u.id, u.label(), email.unwrap_or_default());
            }
            let answer = prompt(&format!("User id [{}]: ", first.id))?;
            if answer.is_empty() {
                first.id.to_string()
            } else {
                answer
            }
        }
    };

    let session: Session = gate.login(&user_id).await?;
    if out.json {
        return out.print_json(&session);
    }
    match &session.user_name {
        Some(name) => out.line(&format!("Logged in as {} (id {}).", name, session.user_id)),
        None => out.line(&format!("Logged in as user {}.", session.user_id)),
    }
    Ok(())
}

fn prompt(question: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", question)
        .and_then(|_| stderr.flush())
        .map_err(|e| AppError::Validation(format!("Cannot prompt: {}", e)))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| AppError::Validation(format!("Cannot read answer: {}", e)))?;
    Ok(line.trim().to_string())
}

fn confirm(question: &str) -> Result<bool> {
    let answer = prompt(&format!("{} [y/N] ", question))?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Text or JSON rendering of command results.
struct Output {
    json: bool,
}

impl Output {
    fn line(&self, text: &str) {
        if !self.json {
            println!("{}", text);
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::UnexpectedResponse(format!("Cannot print JSON: {}", e)))?;
        println!("{}", text);
        Ok(())
    }

    fn users(&self, users: &[User]) -> Result<()> {
        if self.json {
            return self.print_json(users);
        }
        if users.is_empty() {
            println!("No users.");
        }
        for u in users {
            println!("{:>6}  {}", u.id, u.label());
        }
        Ok(())
    }

    fn friends(&self, friends: &[Friend]) -> Result<()> {
        if self.json {
            return self.print_json(friends);
        }
        if friends.is_empty() {
            println!("No friends yet.");
        }
        for f in friends {
            let added = f.created_at.as_deref().map(format_time).unwrap_or_default();
            println!("{:>6}  {:<24} {}", f.friend_user_id, f.label(), added);
        }
        Ok(())
    }

    fn recipients(&self, recipients: &[Recipient]) -> Result<()> {
        if self.json {
            let rows: Vec<_> = recipients
                .iter()
                .map(|r| json!({ "userId": r.user_id, "label": r.label, "self": r.is_self }))
                .collect();
            return self.print_json(&rows);
        }
        for r in recipients {
            println!("{:>6}  {}", r.user_id, r.label);
        }
        Ok(())
    }

    fn inbox_section(&self, heading: &str, inbox: &Inbox, entries: &[&Notification]) {
        println!("{} ({})", heading, entries.len());
        if entries.is_empty() {
            println!("  nothing here");
        }
        for n in entries {
            println!(
                "  {} #{:<5} {:<16} {:<16} {}",
                if n.is_checked() { "[x]" } else { "[ ]" },
                n.id,
                truncate_text(&inbox.sender_name(n), 16),
                format_time(n.created_at.as_deref().unwrap_or_default()),
                summary(n),
            );
        }
    }

    fn sent(&self, entries: &[Notification]) -> Result<()> {
        if self.json {
            return self.print_json(entries);
        }
        if entries.is_empty() {
            println!("Nothing sent yet.");
        }
        for n in entries {
            let state = match SentHistory::delivery_state(n) {
                Some(true) => "checked",
                Some(false) => "pending",
                None => "",
            };
            println!(
                "  #{:<5} to {:<8} {:<16} {:<8} {}",
                n.id,
                n.to_user_id.map(|id| id.to_string()).unwrap_or_default(),
                format_time(n.created_at.as_deref().unwrap_or_default()),
                state,
                summary(n),
            );
        }
        Ok(())
    }

    fn sent_confirmation(&self, sent: &Outgoing) -> Result<()> {
        if self.json {
            return self.print_json(&json!({ "sent": outgoing_json(sent) }));
        }
        match sent {
            Outgoing::Simple { to, .. } => println!("Sent to user {}.", to),
            Outgoing::Multi { to, items, .. } => println!(
                "Sent checklist with {} item(s) to user {}.",
                items.len(),
                to
            ),
        }
        Ok(())
    }

    fn detail(&self, n: &Notification) -> Result<()> {
        if self.json {
            return self.print_json(n);
        }
        let from = n.from_user_id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string());
        let created = format_time(n.created_at.as_deref().unwrap_or_default());
        println!("#{} from user {}  {}", n.id, from, created);
        match n.kind {
            NotificationKind::Simple => println!("{}", n.message.as_deref().unwrap_or_default()),
            NotificationKind::Multi => {
                let (done, total) = n.progress();
                println!("{} ({}/{})", n.title.as_deref().unwrap_or_default(), done, total);
                for item in &n.items {
                    let mark = if item.is_checked() { "[x]" } else { "[ ]" };
                    println!("  {} {:<5} {}", mark, item.id, item.text);
                }
            }
        }
        if let Some(at) = &n.checked_at {
            println!("checked {}", format_time(at));
        }
        Ok(())
    }

    fn profile(&self, me: Option<&User>, skip_confirm: bool) -> Result<()> {
        if self.json {
            return self.print_json(&json!({ "me": me, "skipConfirm": skip_confirm }));
        }
        if let Some(me) = me {
            println!("name          {}", me.label());
            println!("search id     {}", me.search_id.as_deref().unwrap_or("-"));
            println!("avatar        {}", me.profile_image_url.as_deref().unwrap_or("default"));
        }
        println!("skip confirm  {}", if skip_confirm { "on" } else { "off" });
        Ok(())
    }
}

/// What was sent, in the backend's field names.
fn outgoing_json(sent: &Outgoing) -> serde_json::Value {
    match sent {
        Outgoing::Simple { to, message } => json!({
            "kind": NotificationKind::Simple,
            "toUserId": to,
            "message": message
        }),
        Outgoing::Multi { to, title, items } => json!({
            "kind": NotificationKind::Multi,
            "toUserId": to,
            "title": title,
            "items": items
        }),
    }
}

/// One-line description of a notification for list views.
fn summary(n: &Notification) -> String {
    match n.kind {
        NotificationKind::Simple => truncate_text(n.headline(), PREVIEW_CHARS),
        NotificationKind::Multi => {
            let (done, total) = n.progress();
            format!("{} ({}/{})", truncate_text(n.headline(), PREVIEW_CHARS), done, total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fake::{multi, simple};

    #[test]
    fn test_summary() {
        assert_eq!(summary(&simple(1, 2, "call me")), "call me");
        assert_eq!(
            summary(&multi(2, 2, "Groceries", &[(1, "milk"), (2, "eggs")])),
            "Groceries (0/2)"
        );
    }

    #[test]
    fn test_outgoing_json() {
        let simple = Outgoing::Simple {
            to: 2,
            message: "hi".to_string(),
        };
        assert_eq!(
            outgoing_json(&simple),
            json!({ "kind": "SIMPLE", "toUserId": 2, "message": "hi" })
        );

        let multi = Outgoing::Multi {
            to: 3,
            title: "Trip".to_string(),
            items: vec!["passport".to_string()],
        };
        assert_eq!(outgoing_json(&multi)["kind"], "MULTI");
        assert_eq!(outgoing_json(&multi)["items"], json!(["passport"]));
    }

    #[tokio::test]
    async fn test_session_commands_require_login() {
        let dir = tempfile::tempdir().unwrap();
        let session_file = dir.path().join("session.json");
        let cli = <Cli as clap::Parser>::try_parse_from([
            "notifier",
            "--api-url",
            "http://127.0.0.1:9",
            "--session-file",
            session_file.to_str().unwrap(),
            "inbox",
        ])
        .unwrap();

        assert!(matches!(run(cli).await, Err(AppError::NotLoggedIn)));
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = <Cli as clap::Parser>::try_parse_from([
            "notifier",
            "--api-url",
            "https://notify.example.com",
            "--session-file",
            "/tmp/notifier-test.json",
            "logout",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.api_url, "https://notify.example.com");
        assert_eq!(config.session_file, std::path::PathBuf::from("/tmp/notifier-test.json"));
    }

    #[test]
    fn test_cli_rejects_bad_url() {
        let cli =
            <Cli as clap::Parser>::try_parse_from(["notifier", "--api-url", "ftp://x", "logout"])
                .unwrap();
        assert!(matches!(resolve_config(&cli), Err(AppError::Config(_))));
    }
}
