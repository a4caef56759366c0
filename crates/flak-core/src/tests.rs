#[cfg(test)]
mod tests {
    use crate::config::FlakConfig;
    use crate::enums::*;
    use crate::error::FlakError;
    use crate::events::{BurstEvent, FlakEvent};
    use crate::state::FlakSnapshot;
    use crate::types::{secs_to_ticks, Position, SimTime};

    // ---- Geometry ----

    #[test]
    fn test_horizontal_range_ignores_altitude() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3000.0, 4000.0, 9000.0);
        assert!((a.horizontal_range_to(&b) - 5000.0).abs() < 1e-9);
        assert!(a.range_to(&b) > 5000.0);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Position::new(0.0, 0.0, 100.0);
        let b = Position::new(9000.0, -300.0, 400.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        let mid = a.lerp(&b, 0.5);
        assert!((mid.x - 4500.0).abs() < 1e-9);
        assert!((mid.y + 150.0).abs() < 1e-9);
        assert!((mid.z - 250.0).abs() < 1e-9);
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_ten_ticks_one_second() {
        let mut time = SimTime::default();
        for _ in 0..10 {
            time.advance();
        }
        assert_eq!(time.tick, 10);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_secs_to_ticks_rounds() {
        assert_eq!(secs_to_ticks(0.0), 0);
        assert_eq!(secs_to_ticks(0.1), 1);
        assert_eq!(secs_to_ticks(1.0), 10);
        assert_eq!(secs_to_ticks(2.54), 25);
        assert_eq!(secs_to_ticks(-3.0), 0);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = FlakConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layer_offsets.len(), 3);
        assert!(config.hold_fire_flag.is_none());
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = FlakConfig::from_json_str(
            r#"{ "density_factor": 250.0, "hold_fire_flag": "HOLD", "layer_offsets": [0.0] }"#,
        )
        .unwrap();
        assert_eq!(config.density_factor, 250.0);
        assert_eq!(config.hold_fire_flag.as_deref(), Some("HOLD"));
        assert_eq!(config.layer_offsets, vec![0.0]);
        assert_eq!(config.interval_secs, FlakConfig::default().interval_secs);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let cases = [
            r#"{ "density_factor": 0.0 }"#,
            r#"{ "interval_secs": -1.0 }"#,
            r#"{ "altitude_bin_size": 0.0 }"#,
            r#"{ "layer_offsets": [] }"#,
            r#"{ "vertical_jitter_m": -5.0 }"#,
        ];
        for json in cases {
            let err = FlakConfig::from_json_str(json).unwrap_err();
            assert!(
                matches!(err, FlakError::InvalidConfig(_)),
                "{json} should be rejected as invalid, got {err:?}"
            );
        }
    }

    #[test]
    fn test_config_malformed_json_is_parse_error() {
        let err = FlakConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, FlakError::ConfigParse(_)));
    }

    // ---- Serde shapes ----

    #[test]
    fn test_altitude_policy_json_shape() {
        let fixed: AltitudePolicy =
            serde_json::from_str(r#"{ "mode": "Fixed", "altitude": 3500.0 }"#).unwrap();
        assert_eq!(fixed, AltitudePolicy::Fixed(3500.0));

        let dynamic: AltitudePolicy = serde_json::from_str(r#"{ "mode": "Dynamic" }"#).unwrap();
        assert_eq!(dynamic, AltitudePolicy::Dynamic);
    }

    #[test]
    fn test_event_tagged_serialization() {
        let event = FlakEvent::Burst(BurstEvent {
            zone: "FLAK-1".into(),
            position: Position::new(1.0, 2.0, 3000.0),
            intensity: 2,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Burst");
        assert_eq!(json["intensity"], 2);

        let back: FlakEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_snapshot_burst_filter() {
        let snapshot = FlakSnapshot {
            events: vec![
                FlakEvent::ZoneEnabled {
                    zone: "A".into(),
                },
                FlakEvent::Burst(BurstEvent {
                    zone: "A".into(),
                    position: Position::default(),
                    intensity: 1,
                }),
                FlakEvent::BurstSuppressed { zone: "A".into() },
            ],
            ..Default::default()
        };
        assert_eq!(snapshot.bursts().count(), 1);
    }
}
