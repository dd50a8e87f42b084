use super::*;

#[test]
fn avatar_letter_uppercases_the_first_character() {
    assert_eq!(avatar_letter("ada@example.com"), 'A');
    assert_eq!(avatar_letter("zed@example.com"), 'Z');
}

#[test]
fn avatar_letter_defaults_for_empty_emails() {
    assert_eq!(avatar_letter(""), 'W');
}
