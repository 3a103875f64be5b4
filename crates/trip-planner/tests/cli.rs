//! command-line argument and document loading tests

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use std::path::PathBuf;
    use trip_planner::cli::{parse_plan_args, prepare, PlanArgs};
    use trip_planner::config::PlannerConfig;
    use trip_planner::WeightSet;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn configured() -> PlannerConfig {
        PlannerConfig {
            default_weights: WeightSet { culture: 8.0, nature: 2.0, food: 6.0, budget: 3.0, distance: 1.0 },
            ..PlannerConfig::default()
        }
    }

    #[test]
    fn document_preferences_win_over_config() {
        let doc = r#"{"tp_prefs": {"culture": 1, "nature": 2, "food": 3, "budget": 4, "distance": 5}}"#;
        let (_, state) = prepare(doc, configured(), None).unwrap();
        assert_eq!(state.preferences, WeightSet { culture: 1.0, nature: 2.0, food: 3.0, budget: 4.0, distance: 5.0 });
    }

    #[test]
    fn config_weights_apply_without_document_preferences() {
        let (_, state) = prepare("{}", configured(), None).unwrap();
        assert_eq!(state.preferences, configured().default_weights);

        let (_, state) = prepare(r#"{"tp_prefs": null}"#, configured(), None).unwrap();
        assert_eq!(state.preferences, configured().default_weights);
    }

    #[test]
    fn days_flag_overrides_configured_size() {
        let (config, state) = prepare("{}", configured(), NonZeroUsize::new(2)).unwrap();
        assert_eq!(config.itinerary_size.get(), 2);
        assert_eq!(state.plan_itinerary(&config.engine()).unwrap().len(), 2);

        let (config, _) = prepare("{}", configured(), None).unwrap();
        assert_eq!(config.itinerary_size.get(), 3);
    }

    #[test]
    fn bad_document_is_an_error() {
        assert!(prepare("not json", configured(), None).is_err());
    }

    #[test]
    fn plan_args_parse() {
        let parsed = parse_plan_args(&args(&["--data", "trip.json", "--days", "2", "--config", "planner.json"])).unwrap();
        assert_eq!(
            parsed,
            PlanArgs {
                data_path: PathBuf::from("trip.json"),
                config_path: Some(PathBuf::from("planner.json")),
                days: NonZeroUsize::new(2),
            }
        );
    }

    #[test]
    fn days_must_be_a_positive_whole_number() {
        for bad in ["0", "abc", "-1", "2.5"] {
            let err = parse_plan_args(&args(&["--data", "trip.json", "--days", bad])).unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("--days") && msg.contains("positive whole number"), "{bad}: {msg}");
        }
    }

    #[test]
    fn data_flag_is_required() {
        assert!(parse_plan_args(&args(&["--days", "2"])).is_err());
        assert!(parse_plan_args(&args(&["--data"])).is_err());
        assert!(parse_plan_args(&args(&["--data", "trip.json", "--verbose"])).is_err());
    }
}
