use researchai_core::{AskError, ChatRole, DoubtSession, CANNED_REPLIES, GREETING};

#[test]
fn fresh_session_contains_only_the_greeting() {
    let session = DoubtSession::new();

    let messages = session.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, ChatRole::Assistant);
    assert_eq!(messages[0].content, GREETING);
    assert!(!messages[0].id.is_nil());
}

#[test]
fn ask_appends_user_message_then_assistant_reply() {
    let mut session = DoubtSession::new();

    let reply_content = {
        let reply = session.ask("What is entropy?").unwrap();
        assert_eq!(reply.role, ChatRole::Assistant);
        reply.content.clone()
    };

    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, ChatRole::User);
    assert_eq!(messages[1].content, "What is entropy?");
    assert_eq!(messages[2].role, ChatRole::Assistant);
    assert_eq!(messages[2].content, reply_content);
}

#[test]
fn replies_always_come_from_the_canned_pool() {
    let mut session = DoubtSession::new();

    for turn in 0..20 {
        let reply = session.ask(&format!("question {turn}")).unwrap();
        assert!(
            CANNED_REPLIES.contains(&reply.content.as_str()),
            "unexpected reply: {}",
            reply.content
        );
    }

    assert_eq!(session.messages().len(), 1 + 20 * 2);
}

#[test]
fn blank_questions_are_rejected_without_transcript_changes() {
    let mut session = DoubtSession::new();

    for blank in ["", "   ", "\n\t"] {
        assert_eq!(session.ask(blank).unwrap_err(), AskError::BlankQuestion);
    }

    assert_eq!(session.messages().len(), 1);
}

#[test]
fn question_text_is_kept_verbatim() {
    let mut session = DoubtSession::new();

    session.ask("  why is the sky blue?  ").unwrap();

    assert_eq!(session.messages()[1].content, "  why is the sky blue?  ");
}

#[test]
fn messages_are_stamped_in_transcript_order() {
    let mut session = DoubtSession::new();
    session.ask("first").unwrap();
    session.ask("second").unwrap();

    let messages = session.messages();
    for pair in messages.windows(2) {
        assert!(pair[0].sent_at <= pair[1].sent_at);
    }
}
