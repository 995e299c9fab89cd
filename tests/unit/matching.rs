//! Unit tests for pattern matching through Route
//!
//! Literal segments, captures, optional groups, defaults and constraints.

#[cfg(test)]
mod matching_tests {
    use crate::common::{assert_param_equals, params};
    use route_tester::{PatternError, Route, RouteDefinition};

    #[test]
    fn test_exact_literal_match() {
        let route = Route::new("list", "users/list").unwrap();

        let matched = route.matches("users/list").unwrap();
        assert!(matched.is_empty());
        assert!(route.matches("users/create").is_none());
    }

    #[test]
    fn test_param_extraction() {
        let route = Route::new("user", "users/<id>").unwrap();

        let matched = route.matches("/users/123").unwrap();
        assert_param_equals(&matched, "id", "123");
    }

    #[test]
    fn test_multiple_params() {
        let route = Route::new("project", "workspace/:workspace_id/project/:project_id").unwrap();

        let matched = route.matches("workspace/123/project/456").unwrap();
        assert_eq!(
            matched,
            params(&[("workspace_id", "123"), ("project_id", "456")])
        );
    }

    #[test]
    fn test_no_match_too_short_or_long() {
        let route = Route::new("profile", "users/<id>/profile").unwrap();
        assert!(route.matches("users/123").is_none());
        assert!(route.matches("users/123/profile/edit").is_none());
    }

    #[test]
    fn test_index_route_empty_pattern() {
        let route = Route::new("home", "").unwrap();
        assert!(route.matches("/").is_some());
        assert!(route.matches("").is_some());
        assert!(route.matches("home").is_none());
    }

    #[test]
    fn test_optional_group_with_defaults() {
        let route = Route::new("blog", "blog(/<id>)")
            .unwrap()
            .defaults([("id", "latest"), ("controller", "blog")]);

        assert_eq!(
            route.matches("blog").unwrap(),
            params(&[("id", "latest"), ("controller", "blog")])
        );
        assert_eq!(
            route.matches("blog/9").unwrap(),
            params(&[("id", "9"), ("controller", "blog")])
        );
    }

    #[test]
    fn test_constraint_sends_url_elsewhere() {
        let route = Route::new("year", "archive/<year>")
            .unwrap()
            .constraint("year", |v| v.len() == 4 && v.parse::<u16>().is_ok())
            .unwrap();

        assert!(route.matches("archive/2024").is_some());
        assert!(route.matches("archive/24").is_none());
        assert!(route.matches("archive/abcd").is_none());
    }

    #[test]
    fn test_constraint_inside_optional_group_falls_back() {
        let route = Route::new("page", "list(/<page>)")
            .unwrap()
            .constraint("page", |v| v.parse::<u32>().is_ok())
            .unwrap();

        assert!(route.matches("list").is_some());
        assert!(route.matches("list/3").is_some());
        // Rejected capture, and skipping the group leaves "/x" unmatched.
        assert!(route.matches("list/x").is_none());
    }

    #[test]
    fn test_case_sensitive_literals() {
        let route = Route::new("about", "About").unwrap();
        assert!(route.matches("About").is_some());
        assert!(route.matches("about").is_none());
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(
            Route::new("bad", "a/(<b>"),
            Err(PatternError::UnbalancedGroup { .. })
        ));
        assert!(matches!(
            Route::new("bad", "<a>/<a>"),
            Err(PatternError::DuplicateParam { name, .. }) if name == "a"
        ));
    }
}
