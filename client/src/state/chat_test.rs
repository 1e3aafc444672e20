use super::*;

fn issues_result(issues: &[&str]) -> ComplianceResult {
    ComplianceResult {
        compliant: issues.is_empty(),
        score: 60.0,
        issues: issues.iter().map(|s| (*s).to_owned()).collect(),
        checked_at: None,
    }
}

// =============================================================
// Sending
// =============================================================

#[test]
fn toggle_flips_visibility() {
    let mut state = ChatState::default();
    state.toggle();
    assert!(state.open);
    state.toggle();
    assert!(!state.open);
}

#[test]
fn blank_input_does_nothing() {
    let mut state = ChatState { input: "   ".to_owned(), selected_doc: "d1".to_owned(), ..ChatState::default() };
    assert_eq!(state.prepare_send(), ChatSendOutcome::Empty);
    assert!(state.messages.is_empty());
}

#[test]
fn send_without_document_appends_warning_only() {
    let mut state = ChatState { input: "Is TLS enforced?".to_owned(), ..ChatState::default() };
    assert_eq!(state.prepare_send(), ChatSendOutcome::NoDocument);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::System);
    assert_eq!(state.messages[0].text, NO_DOCUMENT_WARNING);
    assert_eq!(state.input, "Is TLS enforced?");
    assert!(!state.sending);
}

#[test]
fn ready_send_appends_user_message_and_clears_input() {
    let mut state = ChatState { input: " Is TLS enforced? ".to_owned(), selected_doc: "d1".to_owned(), ..ChatState::default() };
    let outcome = state.prepare_send();
    assert_eq!(outcome, ChatSendOutcome::Ready { doc_id: "d1".to_owned(), query: "Is TLS enforced?".to_owned() });
    assert!(state.input.is_empty());
    assert!(state.sending);
    assert_eq!(state.messages.last().map(|m| m.sender), Some(Sender::User));

    // A second send while in flight is ignored.
    state.input = "again".to_owned();
    assert_eq!(state.prepare_send(), ChatSendOutcome::Empty);
}

#[test]
fn reply_is_appended_after_request() {
    let mut state = ChatState { input: "q".to_owned(), selected_doc: "d1".to_owned(), ..ChatState::default() };
    state.prepare_send();
    state.apply_reply(Ok("Yes, at the gateway.".to_owned()));
    let senders: Vec<_> = state.messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::User, Sender::Bot]);
    assert_eq!(state.messages[1].text, "Yes, at the gateway.");
    assert!(!state.sending);
}

#[test]
fn transport_failure_appends_error_bubble() {
    let mut state = ChatState { sending: true, ..ChatState::default() };
    state.apply_reply(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].text, CONNECT_ERROR);
    assert!(!state.sending);
}

#[test]
fn message_ids_are_unique() {
    let a = ChatMessage::new(Sender::Bot, "a");
    let b = ChatMessage::new(Sender::Bot, "a");
    assert_ne!(a.id, b.id);
}

// =============================================================
// Compliance seeding
// =============================================================

#[test]
fn issues_auto_open_and_enumerate_each_issue() {
    let mut state = ChatState::default();
    let result = issues_result(&["HIGH: unencrypted field", "LOW: naming"]);
    assert!(state.seed_from_compliance("d1", "payments.pdf", &result, 1));
    assert!(state.open);
    assert_eq!(state.selected_doc, "d1");
    assert_eq!(state.messages.len(), 1);
    let text = &state.messages[0].text;
    assert!(text.contains("2 issues in \"payments.pdf\""));
    assert!(text.contains("\n1. HIGH: unencrypted field"));
    assert!(text.contains("\n2. LOW: naming"));
}

#[test]
fn zero_issues_seed_single_success_message() {
    let mut state = ChatState::default();
    assert!(state.seed_from_compliance("d1", "ok.pdf", &issues_result(&[]), 1));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].text, NO_ISSUES_MESSAGE);
    assert!(!state.open);
}

#[test]
fn each_result_sequence_seeds_once() {
    let mut state = ChatState::default();
    let result = issues_result(&["MEDIUM: x"]);
    assert!(state.seed_from_compliance("d1", "a", &result, 1));
    assert!(!state.seed_from_compliance("d1", "a", &result, 1));
    assert!(!state.seed_from_compliance("d1", "a", &result, 0));
    assert!(state.seed_from_compliance("d1", "a", &result, 2));
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn summary_uses_singular_for_one_issue() {
    let text = compliance_summary("a.pdf", &["HIGH: x".to_owned()]);
    assert!(text.contains("1 issue in"));
    assert_eq!(split_numbered_sections(&text), BotLayout::Sections {
        intro: Some("⚠️ Compliance check found 1 issue in \"a.pdf\". Ask me how to fix any of them:".to_owned()),
        items: vec!["1. HIGH: x".to_owned()],
    });
}

#[test]
fn seeded_summary_keeps_one_item_per_issue() {
    let mut state = ChatState::default();
    let result = issues_result(&["HIGH: Port 22. Open to the internet", "LOW: missing tags"]);
    assert!(state.seed_from_compliance("d1", "net.pdf", &result, 1));
    let BotLayout::Sections { intro, items } = state.messages[0].layout() else {
        panic!("expected sections");
    };
    assert!(intro.is_some_and(|i| i.contains("2 issues")));
    assert_eq!(items, vec!["1. HIGH: Port 22. Open to the internet".to_owned(), "2. LOW: missing tags".to_owned()]);
}

#[test]
fn plain_messages_derive_layout_from_text() {
    let msg = ChatMessage::new(Sender::Bot, "Steps: 1. Encrypt 2. Rotate");
    assert_eq!(msg.sections, None);
    assert_eq!(msg.layout(), BotLayout::Sections {
        intro: Some("Steps:".to_owned()),
        items: vec!["1. Encrypt".to_owned(), "2. Rotate".to_owned()],
    });
}

// =============================================================
// Numbered sections
// =============================================================

#[test]
fn plain_text_stays_one_block() {
    assert_eq!(split_numbered_sections("  The design uses pi = 3.14 and v2. "), BotLayout::Plain("The design uses pi = 3.14 and v2.".to_owned()));
}

#[test]
fn inline_numbered_sections_split_into_items() {
    let layout = split_numbered_sections("Recommendations: 1. Encrypt the field. 2. Rotate keys. 10. Audit access.");
    assert_eq!(layout, BotLayout::Sections {
        intro: Some("Recommendations:".to_owned()),
        items: vec![
            "1. Encrypt the field.".to_owned(),
            "2. Rotate keys.".to_owned(),
            "10. Audit access.".to_owned(),
        ],
    });
}

#[test]
fn leading_section_has_no_intro() {
    let layout = split_numbered_sections("1. First\n2. Second");
    assert_eq!(layout, BotLayout::Sections { intro: None, items: vec!["1. First".to_owned(), "2. Second".to_owned()] });
}

#[test]
fn digits_glued_to_words_are_not_markers() {
    assert_eq!(split_numbered_sections("Use tls1. Done"), BotLayout::Plain("Use tls1. Done".to_owned()));
}
