use crate::*;
use rstest::rstest;

#[rstest]
#[case("/account", vec![Screen::Account])]
#[case("/starred", vec![Screen::Account, Screen::Starred])]
#[case("/reviewed", vec![Screen::Account, Screen::Reviewed])]
#[case("/settings", vec![Screen::Account, Screen::Settings])]
#[case("/sign-in", vec![Screen::Account, Screen::SignInSignUp])]
#[case("/sign-up", vec![Screen::Account, Screen::SignInSignUp])]
fn test_account_entries(#[case] link: &str, #[case] expected: Vec<Screen>) {
    let state = parse(link);
    assert_eq!(state.section, Section::Me);
    assert_eq!(state.screens(), expected);
}

#[test]
fn test_sign_up_without_class() {
    let state = parse("sign-up");
    assert_eq!(state.section, Section::Me);
    assert_eq!(state.screens(), vec![Screen::Account, Screen::SignInSignUp]);
    assert!(state.routes[1].params.is_signing_up);
    assert!(!state.routes[0].params.is_signing_up);
}

#[test]
fn test_sign_in_without_class() {
    let state = parse("/sign-in");
    assert!(!state.routes[1].params.is_signing_up);
}

#[test]
fn test_auth_entries_need_the_exact_literal() {
    for link in ["/SIGN-UP", "/Sign-In"] {
        let state = parse(link);
        assert_eq!(state.section, Section::Explore);
        assert_eq!(state.screens(), vec![Screen::University]);
    }
}

#[test]
fn test_starred_class() {
    let state = parse("/starred/UY/CS/101/review?value=5");
    assert_eq!(
        state.screens(),
        vec![
            Screen::Account,
            Screen::Starred,
            Screen::Detail,
            Screen::Review
        ]
    );

    let review = &state.routes[3].params;
    assert_eq!(review.list, Some(ClassList::Starred));
    assert_eq!(review.review.as_ref().and_then(|d| d.value), Rating::new(5));
}

#[test]
fn test_reviewed_class_records_list() {
    let state = parse("/reviewed/UY/CS/101");
    let detail = state.current().unwrap();
    assert_eq!(detail.screen, Screen::Detail);
    assert_eq!(detail.params.list, Some(ClassList::Reviewed));
}

#[test]
fn test_partial_class_under_list_is_ignored() {
    let state = parse("/starred/UY");
    assert_eq!(state.screens(), vec![Screen::Account, Screen::Starred]);
}

#[test]
fn test_account_ignores_further_segments() {
    let state = parse("/settings/UY/CS/101");
    assert_eq!(state.screens(), vec![Screen::Account, Screen::Settings]);
}
