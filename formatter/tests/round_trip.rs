use classlink_common::routes;
use classlink_common::*;
use classlink_formatter::stringify;
use classlink_parser::parse;
use proptest::prelude::*;

/// Encodes, decodes and returns the deepest decoded route.
fn round_trip(section: Section, screen: Screen, params: &ScreenParams) -> (Section, Route) {
    let path = stringify(section, screen, params).unwrap();
    let state = parse(&path);
    let route = state.current().cloned().unwrap();
    (state.section, route)
}

fn expected_params(section: Section, params: &ScreenParams) -> ScreenParams {
    // The link carries one semester for both the screen and the draft.
    let mut expected = params.clone().normalized();
    expected.school = expected.school.map(|s| s.to_uppercase());
    expected.department = expected.department.map(|s| s.to_uppercase());
    expected.number = expected.number.map(|s| s.to_uppercase());
    if section == Section::Me && expected.class_id().is_some() {
        expected.list = Some(expected.list.unwrap_or_default());
    }
    expected
}

#[test]
fn test_every_catalog_screen_round_trips() {
    let class = ClassId::new("uy", "cs", "101");
    let fa23 = Semester::new(Term::Fa, 2023);

    for section in Section::ALL {
        for screen in routes::catalog(section) {
            let mut params = ScreenParams::new().with_semester(fa23);
            if screen.needs_class() || matches!(screen, Screen::School | Screen::Department) {
                params = params.with_class(&class);
            }
            if *screen == Screen::School {
                params.department = None;
                params.number = None;
            }
            if *screen == Screen::Department {
                params.number = None;
            }
            if *screen == Screen::Review {
                params.review = Some(ReviewDraft {
                    difficulty: Rating::new(5),
                    comment: Some("Hard but fair".to_string()),
                    ..Default::default()
                });
            }

            let (decoded_section, route) = round_trip(section, *screen, &params);
            assert_eq!(route.screen, *screen, "{section} / {screen}");
            if *screen != Screen::SignInSignUp {
                assert_eq!(decoded_section, section, "{section} / {screen}");
            }
            assert_eq!(route.params, expected_params(section, &params), "{section} / {screen}");
        }
    }
}

#[test]
fn test_review_with_semester_and_no_draft_round_trips() {
    let params = ScreenParams::for_class(&ClassId::new("UY", "CS", "101"))
        .with_semester(Semester::new(Term::Fa, 2023));

    let (section, route) = round_trip(Section::Explore, Screen::Review, &params);
    assert_eq!(section, Section::Explore);
    assert_eq!(route.screen, Screen::Review);
    assert_eq!(route.params, params);
}

#[test]
fn test_semesters_outside_2000s_round_trip() {
    let class = ClassId::new("UY", "CS", "101");
    for semester in [
        Semester::new(Term::Su, 1999),
        Semester::new(Term::Fa, 2100),
        Semester::new(Term::Ja, 2000),
        Semester::new(Term::Sp, 2099),
    ] {
        let params = ScreenParams::for_class(&class).with_semester(semester);
        let (_, route) = round_trip(Section::Explore, Screen::Detail, &params);
        assert_eq!(route.params.semester, Some(semester));
    }
}

#[test]
fn test_sign_up_round_trip() {
    let params = ScreenParams::new().signing_up(true);
    let path = stringify(Section::Explore, Screen::SignInSignUp, &params).unwrap();
    assert_eq!(path, "sign-up");

    let state = parse(&path);
    assert_eq!(state.section, Section::Me);
    assert_eq!(state.screens(), vec![Screen::Account, Screen::SignInSignUp]);
    assert!(state.current().unwrap().params.is_signing_up);
}

#[test]
fn test_search_query_round_trip() {
    let params = ScreenParams::new().with_query("Intro to Programming?");
    let (section, route) = round_trip(Section::Search, Screen::Search, &params);
    assert_eq!(section, Section::Search);
    assert_eq!(route.params.query.as_deref(), Some("Intro to Programming?"));
}

#[test]
fn test_empty_query_round_trips_as_absent() {
    let params = ScreenParams::new().with_query("");
    let (_, route) = round_trip(Section::Search, Screen::Search, &params);
    assert_eq!(route.params.query, None);
}

fn class_part() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .&_-]{0,7}"
}

fn rating() -> impl Strategy<Value = Option<Rating>> {
    prop::option::of(1u8..=5).prop_map(|value| value.and_then(Rating::new))
}

proptest! {
    #[test]
    fn class_ids_survive_up_to_uppercasing(
        school in class_part(),
        department in class_part(),
        number in class_part(),
    ) {
        let class = ClassId::new(school, department, number);
        let params = ScreenParams::for_class(&class);

        for section in Section::ALL {
            let (_, route) = round_trip(section, Screen::Detail, &params);
            prop_assert_eq!(route.params.class_id(), Some(class.to_uppercase()));
        }
    }

    #[test]
    fn review_drafts_survive(
        enjoyment in rating(),
        difficulty in rating(),
        workload in rating(),
        value in rating(),
        instructor in prop::option::of("[a-zA-Z .'&=?/]{0,16}"),
        comment in prop::option::of("\\PC{0,24}"),
    ) {
        let draft = ReviewDraft {
            enjoyment,
            difficulty,
            workload,
            value,
            instructor,
            comment,
            semester: None,
        };
        let params = ScreenParams::for_class(&ClassId::new("UA", "MATH", "121")).with_review(draft);

        let (_, route) = round_trip(Section::Explore, Screen::Review, &params);
        prop_assert_eq!(route.params, expected_params(Section::Explore, &params));
    }
}
