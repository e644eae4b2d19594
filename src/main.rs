use drilling_dashboard::{
    channel_dashboard, run_dashboard, DashboardConfig, DashboardError, Simulation,
};
use log::{error, info};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = DashboardConfig::default();
    let sim_cfg = cfg.simulation;
    let (mut sink, rx) = channel_dashboard();

    // Producer: the simulation loop owns its state and paces itself.
    std::thread::spawn(move || {
        let mut sim = Simulation::from_config(&sim_cfg);
        match sim.run(&mut sink, &sim_cfg) {
            Ok(artifact) => info!(
                "export ready: {} ({} bytes)",
                artifact.file_name,
                artifact.bytes.len()
            ),
            Err(DashboardError::SinkClosed) => info!("dashboard closed before the run finished"),
            Err(e) => error!("simulation stopped: {e}"),
        }
    });

    run_dashboard(rx, cfg)
}
