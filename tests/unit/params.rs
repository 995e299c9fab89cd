//! Unit tests for RouteParams
//!
//! Construction from pairs, merging, and typed access.

#[cfg(test)]
mod params_tests {
    use crate::common::params;
    use route_tester::RouteParams;

    #[test]
    fn test_base_and_override_merge() {
        let base = params(&[("controller", "welcome")]);
        let overrides = params(&[("id", "2")]);

        let merged = RouteParams::merge(&base, &overrides);
        assert_eq!(merged, params(&[("controller", "welcome"), ("id", "2")]));
    }

    #[test]
    fn test_collision_handling() {
        let base = params(&[("id", "old")]);
        let overrides = params(&[("id", "new")]);

        assert_eq!(RouteParams::merge(&base, &overrides).get("id"), Some("new"));
    }

    #[test]
    fn test_empty_params() {
        let empty = RouteParams::new();
        let overrides = params(&[("id", "1")]);

        assert_eq!(RouteParams::merge(&empty, &overrides), overrides);
        assert_eq!(RouteParams::merge(&overrides, &empty), overrides);
    }

    #[test]
    fn test_extend_and_into_iter() {
        let mut p = params(&[("a", "1")]);
        p.extend([("b", "2")]);

        let mut pairs: Vec<_> = p.into_iter().collect();
        pairs.sort();
        assert_eq!(
            pairs,
            [
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_keys() {
        let p = params(&[("x", "1"), ("y", "2")]);
        let mut keys: Vec<_> = p.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["x", "y"]);
    }
}
