use spheresim::{bench_step, first_non_finite, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML, relative paths resolve against the crate's scenarios/ dir
    #[arg(short, long, default_value = "three_body.yaml")]
    file: PathBuf,

    /// Number of steps to run instead of t_end / h0
    #[arg(long)]
    steps: Option<u64>,

    /// Log momentum and energy every N steps
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Run the step benchmark and exit
    #[arg(long)]
    bench: bool,
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

// load here to keep main clean
fn load_scenario(file: &Path) -> Result<ScenarioConfig> {
    let config_path = if file.is_absolute() || file.exists() {
        file.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file)
    };
    ScenarioConfig::load(&config_path)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args.file)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg);

    let steps = args.steps.unwrap_or_else(|| scenario.step_count());
    let report_every = args.report_every.max(1);

    let p0 = scenario.total_momentum();
    let e0 = scenario.kinetic_energy();
    let mut total_contacts = 0usize;

    for step in 1..=steps {
        let report = scenario.simulation.step(&mut scenario.registry);
        total_contacts += report.contacts.len();

        for contact in &report.contacts {
            debug!(step, a = %contact.a, b = %contact.b, solid = contact.solid, "bodies collided");
        }

        if let Some(id) = first_non_finite(&scenario.registry) {
            warn!(step, body = %id, "non-finite body state, stopping");
            break;
        }

        if step % report_every == 0 || step == steps {
            let p = scenario.total_momentum();
            let e = scenario.kinetic_energy();
            info!(
                step,
                t = scenario.simulation.time(),
                contacts = report.contacts.len(),
                momentum_drift = (p - p0).norm(),
                kinetic = e,
                kinetic_change = e - e0,
                "progress"
            );
        }
    }

    info!(
        steps = scenario.simulation.steps(),
        t = scenario.simulation.time(),
        total_contacts,
        "done"
    );

    Ok(())
}
