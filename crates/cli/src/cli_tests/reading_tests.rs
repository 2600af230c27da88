// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn chats_search_and_limit() {
    match parse(&["beepctl", "chats", "-s", "family", "--limit", "5"])
        .unwrap()
        .command
    {
        Command::Chats { limit, search } => {
            assert_eq!(limit.limit, 5);
            assert_eq!(search.as_deref(), Some("family"));
        }
        _ => panic!("Expected Chats command"),
    }
}

#[test]
fn messages_with_date_range() {
    match parse(&[
        "beepctl", "messages", "work", "--after", "2d ago", "--before", "today",
    ])
    .unwrap()
    .command
    {
        Command::Messages { chat, limit, dates } => {
            assert_eq!(chat, "work");
            assert_eq!(limit.limit, DEFAULT_LIMIT);
            assert_eq!(dates.after.as_deref(), Some("2d ago"));
            assert_eq!(dates.before.as_deref(), Some("today"));
            assert_eq!(
                dates.describe().as_deref(),
                Some("after: 2d ago, before: today")
            );
        }
        _ => panic!("Expected Messages command"),
    }
}

#[test]
fn messages_requires_chat() {
    assert!(parse(&["beepctl", "messages"]).is_err());
}

#[test]
fn search_collects_filters() {
    match parse(&[
        "beepctl",
        "search",
        "invoice",
        "--chat",
        "work,!abc",
        "--chat",
        "home",
        "--account",
        "slack",
        "--sender",
        "me",
        "--chat-type",
        "dm",
        "--media",
        "image,file",
        "--include-muted",
        "--exclude-low-priority",
        "-l",
        "7",
    ])
    .unwrap()
    .command
    {
        Command::Search(args) => {
            assert_eq!(args.query.as_deref(), Some("invoice"));
            assert_eq!(args.chat, ["work", "!abc", "home"]);
            assert_eq!(args.account, ["slack"]);
            assert_eq!(args.sender.as_deref(), Some("me"));
            assert_eq!(args.chat_type.as_deref(), Some("dm"));
            assert_eq!(args.media, ["image", "file"]);
            assert!(args.include_muted);
            assert!(args.exclude_low_priority);
            assert_eq!(args.limit.limit, 7);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn search_query_is_optional() {
    match parse(&["beepctl", "search", "--after", "1w ago"]).unwrap().command {
        Command::Search(args) => {
            assert_eq!(args.query, None);
            assert_eq!(args.dates.after.as_deref(), Some("1w ago"));
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn contacts_search() {
    match parse(&["beepctl", "contacts", "search", "acct", "ada"])
        .unwrap()
        .command
    {
        Command::Contacts(ContactsCommand::Search { account, query }) => {
            assert_eq!(account, "acct");
            assert_eq!(query, "ada");
        }
        _ => panic!("Expected Contacts search"),
    }
}

#[test]
fn send_rejects_blank_message() {
    assert!(parse(&["beepctl", "send", "work", "   "]).is_err());
}

#[test]
fn send_dry_run_short_flag() {
    match parse(&["beepctl", "send", "work", "hi", "-d"]).unwrap().command {
        Command::Send {
            chat,
            message,
            dry_run,
        } => {
            assert_eq!(chat, "work");
            assert_eq!(message, "hi");
            assert!(dry_run);
        }
        _ => panic!("Expected Send command"),
    }
}

#[test]
fn archive_flags() {
    match parse(&["beepctl", "archive", "work", "-u", "-q"]).unwrap().command {
        Command::Archive {
            chat,
            unarchive,
            quiet,
        } => {
            assert_eq!(chat, "work");
            assert!(unarchive);
            assert!(quiet);
        }
        _ => panic!("Expected Archive command"),
    }
}

#[test]
fn reminders_set_and_clear() {
    match parse(&["beepctl", "reminders", "set", "work", "30m", "-d"])
        .unwrap()
        .command
    {
        Command::Reminders(RemindersCommand::Set {
            chat,
            time,
            dismiss_on_message,
        }) => {
            assert_eq!(chat, "work");
            assert_eq!(time, "30m");
            assert!(dismiss_on_message);
        }
        _ => panic!("Expected Reminders set"),
    }
    assert!(matches!(
        parse(&["beepctl", "reminders", "clear", "work"]).unwrap().command,
        Command::Reminders(RemindersCommand::Clear { .. })
    ));
}

#[test]
fn focus_all_optional() {
    match parse(&["beepctl", "focus"]).unwrap().command {
        Command::Focus {
            chat,
            message,
            draft,
            attachment,
        } => {
            assert!(chat.is_none() && message.is_none());
            assert!(draft.is_none() && attachment.is_none());
        }
        _ => panic!("Expected Focus command"),
    }
    match parse(&["beepctl", "focus", "work", "-m", "m1", "-d", "hey", "-a", "/tmp/x"])
        .unwrap()
        .command
    {
        Command::Focus {
            chat,
            message,
            draft,
            attachment,
        } => {
            assert_eq!(chat.as_deref(), Some("work"));
            assert_eq!(message.as_deref(), Some("m1"));
            assert_eq!(draft.as_deref(), Some("hey"));
            assert_eq!(attachment.as_deref(), Some("/tmp/x"));
        }
        _ => panic!("Expected Focus command"),
    }
}

#[test]
fn download_output_path() {
    match parse(&["beepctl", "download", "mxc://a/b", "-o", "out.png"])
        .unwrap()
        .command
    {
        Command::Download { url, output } => {
            assert_eq!(url, "mxc://a/b");
            assert_eq!(output, Some(PathBuf::from("out.png")));
        }
        _ => panic!("Expected Download command"),
    }
}
