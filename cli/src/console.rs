use classlink_common::*;

/// Renders a navigation state as the section name followed by one indented
/// line per route.
pub fn render_state(state: &NavigationState) -> String {
    let mut lines = vec![state.section.to_string()];
    lines.extend(state.routes.iter().map(|route| format!("  {}", render_route(route))));
    lines.join("\n")
}

/// `Screen key=value ...`, fields in a fixed order, absent fields skipped.
pub fn render_route(route: &Route) -> String {
    let params = &route.params;
    let mut parts = vec![route.screen.to_string()];

    let class = [
        ("school", &params.school),
        ("department", &params.department),
        ("number", &params.number),
    ];
    for (key, value) in class {
        if let Some(value) = value {
            parts.push(format!("{}={}", key, value));
        }
    }
    if let Some(list) = params.list {
        parts.push(format!("list={}", list.segment()));
    }
    if let Some(semester) = params.semester {
        parts.push(format!("semester={}", semester));
    }
    if let Some(query) = &params.query {
        parts.push(format!("query={:?}", query));
    }
    if route.screen == Screen::SignInSignUp {
        parts.push(format!("signing_up={}", params.is_signing_up));
    }
    if let Some(draft) = &params.review {
        for (key, rating) in draft.ratings() {
            if let Some(rating) = rating {
                parts.push(format!("{}={}", key, rating));
            }
        }
        if let Some(instructor) = &draft.instructor {
            parts.push(format!("instructor={:?}", instructor));
        }
        if let Some(comment) = &draft.comment {
            parts.push(format!("comment={:?}", comment));
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state() {
        let state = NavigationState::new(
            Section::Explore,
            vec![
                Route::bare(Screen::University),
                Route::new(Screen::School, ScreenParams::new().with_school("UY")),
            ],
        );

        assert_eq!(render_state(&state), "Explore\n  University\n  School school=UY");
    }

    #[test]
    fn test_render_review_route() {
        let draft = ReviewDraft {
            enjoyment: Rating::new(4),
            comment: Some("Great \"labs\"".to_string()),
            ..Default::default()
        };
        let params = ScreenParams::for_class(&ClassId::new("UY", "CS", "101"))
            .with_semester(Semester::new(Term::Fa, 2023))
            .with_review(draft);

        assert_eq!(
            render_route(&Route::new(Screen::Review, params)),
            r#"Review school=UY department=CS number=101 semester=fa23 enjoyment=4 comment="Great \"labs\"""#
        );
    }

    #[test]
    fn test_render_sign_in_flag() {
        let route = Route::new(Screen::SignInSignUp, ScreenParams::new().signing_up(true));
        assert_eq!(render_route(&route), "SignInSignUp signing_up=true");
    }
}
