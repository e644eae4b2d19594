use drilling_dashboard::data::reading::Channel;
use drilling_dashboard::{
    channel_dashboard, DashboardCommand, DashboardError, Simulation, SimulationConfig,
};

fn recorded_run(seed: u64) -> Vec<DashboardCommand> {
    let cfg = SimulationConfig::immediate().with_seed(seed);
    let mut commands: Vec<DashboardCommand> = Vec::new();
    Simulation::from_config(&cfg)
        .run(&mut commands, &cfg)
        .unwrap();
    commands
}

#[test]
fn each_tick_replaces_chart_then_status_then_export_last() {
    let commands = recorded_run(11);
    assert_eq!(commands.len(), 60 * 2 + 1);
    for (i, pair) in commands[..120].chunks(2).enumerate() {
        let tick = i as u32 + 1;
        match pair {
            [DashboardCommand::ReplaceChart(chart), DashboardCommand::ReplaceStatus(status)] => {
                assert_eq!(chart.len(), tick as usize);
                assert_eq!(status.time, tick);
            }
            other => panic!("unexpected commands at tick {tick}: {other:?}"),
        }
    }
    assert!(matches!(commands[120], DashboardCommand::OfferExport(_)));
}

#[test]
fn every_chart_carries_full_history() {
    let commands = recorded_run(5);
    let charts: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            DashboardCommand::ReplaceChart(chart) => Some(chart),
            _ => None,
        })
        .collect();
    let last = charts.last().unwrap();
    for chart in &charts {
        for &channel in Channel::ALL {
            let series = chart.series(channel).unwrap();
            let full = last.series(channel).unwrap();
            // Earlier charts are prefixes of the final one.
            assert_eq!(series.points.as_slice(), &full.points[..series.points.len()]);
            assert_eq!(series.points.first().map(|p| p.x), Some(1.0));
        }
    }
}

#[test]
fn same_seed_gives_identical_export() {
    let cfg = SimulationConfig::immediate().with_seed(2024);
    let a = Simulation::from_config(&cfg)
        .run(&mut Vec::<DashboardCommand>::new(), &cfg)
        .unwrap();
    let b = Simulation::from_config(&cfg)
        .run(&mut Vec::<DashboardCommand>::new(), &cfg)
        .unwrap();
    assert_eq!(a.bytes, b.bytes);
    assert_eq!(a.row_count(), 60);
}

#[test]
fn offered_export_matches_returned_artifact() {
    let cfg = SimulationConfig::immediate().with_seed(9);
    let mut commands: Vec<DashboardCommand> = Vec::new();
    let artifact = Simulation::from_config(&cfg)
        .run(&mut commands, &cfg)
        .unwrap();
    assert_eq!(
        commands.last(),
        Some(&DashboardCommand::OfferExport(artifact))
    );
}

#[test]
fn run_stops_when_window_is_gone() {
    let cfg = SimulationConfig::immediate().with_seed(1);
    let (mut sink, rx) = channel_dashboard();
    drop(rx);
    let mut sim = Simulation::from_config(&cfg);
    let err = sim.run(&mut sink, &cfg).unwrap_err();
    assert!(matches!(err, DashboardError::SinkClosed));
    // The first tick was taken before the send failed.
    assert_eq!(sim.log().len(), 1);
}

#[test]
fn short_delay_is_honoured() {
    let cfg = SimulationConfig {
        tick_count: 3,
        tick_delay: std::time::Duration::from_millis(5),
        seed: Some(0),
    };
    let started = std::time::Instant::now();
    let artifact = Simulation::from_config(&cfg)
        .run(&mut Vec::<DashboardCommand>::new(), &cfg)
        .unwrap();
    assert!(started.elapsed() >= std::time::Duration::from_millis(15));
    assert_eq!(artifact.row_count(), 3);
}
