use drilling_dashboard::data::reading::{DEPTH_STEP_RANGE, RPM_RANGE, TORQUE_RANGE};
use drilling_dashboard::{RandomSensor, Simulation};

#[test]
fn time_matches_tick_and_length_grows_by_one() {
    let mut sim = Simulation::new(RandomSensor::from_seed(1));
    for t in 1..=60u32 {
        let outcome = sim.tick();
        assert_eq!(outcome.reading.time, t);
        assert_eq!(sim.log().len(), t as usize);
        assert_eq!(sim.log().get(t), Some(&outcome.reading));
    }
}

#[test]
fn depth_strictly_increases_by_one_to_four() {
    for seed in 0..20u64 {
        let mut sim = Simulation::new(RandomSensor::from_seed(seed));
        let mut prev_depth = 0;
        for _ in 0..60 {
            let r = sim.tick().reading;
            let step = r.depth - prev_depth;
            assert!(
                DEPTH_STEP_RANGE.contains(&step),
                "seed {seed}, tick {}: depth step {step} out of range",
                r.time
            );
            prev_depth = r.depth;
        }
    }
}

#[test]
fn rpm_and_torque_stay_in_range() {
    for seed in 0..20u64 {
        let mut sim = Simulation::new(RandomSensor::from_seed(seed));
        for _ in 0..60 {
            let r = sim.tick().reading;
            assert!(RPM_RANGE.contains(&r.rpm), "rpm {} out of range", r.rpm);
            assert!(TORQUE_RANGE.contains(&r.torque), "torque {} out of range", r.torque);
        }
    }
}

#[test]
fn unseeded_source_respects_ranges() {
    let mut sim = Simulation::new(RandomSensor::from_entropy());
    for _ in 0..60 {
        let r = sim.tick().reading;
        assert!(RPM_RANGE.contains(&r.rpm));
        assert!(TORQUE_RANGE.contains(&r.torque));
    }
    assert_eq!(sim.log().len(), 60);
}
