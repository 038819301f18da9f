// Host-side tests for the hero subtitle typewriter.

use folio_core::typing::*;

#[test]
fn types_one_character_per_step() {
    let input = "Full-Stack Developer";
    let mut tw = Typewriter::new(input);
    assert_eq!(*tw.state(), TypingState::Idle);

    let mut states = Vec::new();
    while let Some(prefix) = tw.advance() {
        states.push(prefix);
    }
    assert_eq!(states.len(), 20);
    for (i, s) in states.iter().enumerate() {
        assert_eq!(s.chars().count(), i + 1);
        assert!(input.starts_with(s.as_str()));
    }
    assert_eq!(states.last().map(String::as_str), Some(input));
    assert_eq!(*tw.state(), TypingState::Done);
}

#[test]
fn done_is_terminal() {
    let mut tw = Typewriter::new("ab");
    assert_eq!(tw.advance().as_deref(), Some("a"));
    assert_eq!(*tw.state(), TypingState::Typing(1));
    assert_eq!(tw.advance().as_deref(), Some("ab"));
    assert_eq!(tw.advance(), None);
    assert_eq!(tw.advance(), None);
    assert_eq!(*tw.state(), TypingState::Done);
}

#[test]
fn empty_text_finishes_immediately() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_empty());
    assert_eq!(tw.advance(), None);
    assert_eq!(*tw.state(), TypingState::Done);
}

#[test]
fn multibyte_characters_are_typed_whole() {
    let mut tw = Typewriter::new("né✓");
    assert_eq!(tw.len(), 3);
    assert_eq!(tw.advance().as_deref(), Some("n"));
    assert_eq!(tw.advance().as_deref(), Some("né"));
    assert_eq!(tw.advance().as_deref(), Some("né✓"));
    assert_eq!(tw.full_text(), "né✓");
}
