use std::path::PathBuf;

use approx::assert_relative_eq;

use spheresim::simulation::scenario::{hsv_to_rgb, ring_bodies};
use spheresim::{circular_speed, first_non_finite, sphere_volume, BodyRegistry, Scenario, ScenarioConfig, G_SI};

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

const TWO_BODIES: &str = r#"
parameters:
  h0: 0.01
  t_end: 1.0
bodies:
  - position: [0.0, 0.0, 0.0]
    radius: 1.0
    density: 2.0
    solid: true
  - position: [5.0, 0.0, 0.0]
    velocity: [0.0, 1.0, 0.0]
    radius: 0.5
    density: 1.0
    color: [0.1, 0.2, 0.3]
"#;

// ==================================================================================
// Config tests
// ==================================================================================

#[test]
fn config_parses_bodies_and_defaults() {
    let cfg = ScenarioConfig::from_yaml_str(TWO_BODIES).unwrap();
    let params = cfg.parameters.to_parameters();

    assert_eq!(params.G, G_SI);
    assert_eq!(params.h0, 0.01);
    assert_eq!(cfg.bodies.len(), 2);
    assert!(cfg.bodies[0].solid);
    assert!(!cfg.bodies[1].solid);
    assert_eq!(cfg.bodies[0].color(), [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(cfg.bodies[1].color(), [0.1, 0.2, 0.3, 1.0]);
    assert_eq!(cfg.bodies[0].velocity(), spheresim::NVec3::zeros());
}

#[test]
fn config_rejects_non_positive_step() {
    let yaml = TWO_BODIES.replace("h0: 0.01", "h0: 0.0");
    let err = ScenarioConfig::from_yaml_str(&yaml).unwrap_err();
    assert!(err.to_string().contains("h0"), "unexpected error: {err}");
}

#[test]
fn config_rejects_endless_run() {
    let yaml = TWO_BODIES.replace("t_end: 1.0", "t_end: .inf");
    let err = ScenarioConfig::from_yaml_str(&yaml).unwrap_err();
    assert!(err.to_string().contains("t_end"), "unexpected error: {err}");
}

#[test]
fn config_rejects_short_vectors() {
    let yaml = TWO_BODIES.replace("[5.0, 0.0, 0.0]", "[5.0, 0.0]");
    assert!(ScenarioConfig::from_yaml_str(&yaml).is_err());
}

#[test]
fn config_rejects_empty_scenario() {
    let yaml = "parameters:\n  h0: 0.1\n  t_end: 1.0\n";
    assert!(ScenarioConfig::from_yaml_str(yaml).is_err());
}

#[test]
fn config_reports_missing_file() {
    let err = ScenarioConfig::load(&scenario_path("does_not_exist.yaml")).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.yaml"));
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn scenario_spawns_configured_bodies() {
    let scenario = Scenario::build_scenario(ScenarioConfig::from_yaml_str(TWO_BODIES).unwrap());

    assert_eq!(scenario.registry.len(), 2);
    assert_eq!(scenario.step_count(), 100);

    let ids = scenario.registry.ids();
    let second = scenario.registry.get(ids[1]).unwrap();
    assert_eq!(second.velocity.y, 1.0);
    assert_eq!(second.radius, 0.5);
}

#[test]
fn ring_satellites_start_on_circular_orbits() {
    let yaml = r#"
parameters:
  h0: 0.01
  t_end: 1.0
ring:
  count: 6
  altitude: 10.0
  central: { radius: 10.0, density: 1.0e10 }
  satellite: { radius: 1.0, density: 1.0 }
"#;
    let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
    let bodies = ring_bodies(cfg.ring.as_ref().unwrap(), G_SI);

    assert_eq!(bodies.len(), 7);
    assert!(bodies.iter().all(|b| b.is_solid));

    let m = sphere_volume(10.0) * 1.0e10;
    let speed = circular_speed(G_SI, m, 20.0);

    for b in &bodies[1..] {
        assert_relative_eq!(b.position.norm(), 20.0, max_relative = 1e-12);
        assert_relative_eq!(b.velocity.norm(), speed, max_relative = 1e-12);
        assert!(b.position.dot(&b.velocity).abs() < 1e-9);
        assert!(b.position.cross(&b.velocity).z > 0.0, "ring should turn counter-clockwise");
    }
}

#[test]
fn ramped_ring_scales_speeds() {
    let cfg = ScenarioConfig::load(&scenario_path("three_body.yaml")).unwrap();
    let ring = cfg.ring.as_ref().unwrap();
    let bodies = ring_bodies(ring, cfg.parameters.to_parameters().G);

    assert_eq!(bodies[1].velocity.norm(), 0.0);
    assert!(bodies[2].velocity.norm() < bodies[ring.count].velocity.norm());
}

#[test]
fn hue_wheel_primaries() {
    assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), [0.0, 1.0, 0.0, 1.0]);
    assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), [0.0, 0.0, 1.0, 1.0]);
    assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(hsv_to_rgb(90.0, 0.0, 0.5), [0.5, 0.5, 0.5, 1.0]);
}

// ==================================================================================
// Full-run tests
// ==================================================================================

#[test]
fn head_on_scenario_conserves_momentum() {
    let cfg = ScenarioConfig::load(&scenario_path("head_on.yaml")).unwrap();
    let mut scenario = Scenario::build_scenario(cfg);

    let p0 = scenario.total_momentum();
    let mut contacts = 0;
    for _ in 0..scenario.step_count() {
        contacts += scenario.simulation.step(&mut scenario.registry).contacts.len();
        assert_eq!(first_non_finite(&scenario.registry), None);
    }
    let p1 = scenario.total_momentum();

    assert!(contacts > 0, "the two solid spheres should meet");
    assert_relative_eq!(p0, p1, epsilon = 1e-9);
}

#[test]
fn three_body_scenario_stays_finite() {
    let cfg = ScenarioConfig::load(&scenario_path("three_body.yaml")).unwrap();
    let mut scenario = Scenario::build_scenario(cfg);
    assert_eq!(scenario.registry.len(), 16);

    for _ in 0..600 {
        scenario.simulation.step(&mut scenario.registry);
    }

    assert_eq!(first_non_finite(&scenario.registry), None);
    assert_eq!(scenario.positions().len(), 16);
}
