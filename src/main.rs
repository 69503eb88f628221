use stardrift::cli::args;
use stardrift::io::{OutputWriter, TerminalIO};
use stardrift::models::catalog::Catalog;
use stardrift::models::config::VesselConfig;
use stardrift::services::gazetteer::Access;
use stardrift::ui::presenters::{SensorPresenter, VesselPresenter};
use stardrift::{GameEngine, GameResult};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: args::Args) -> GameResult<()> {
    let catalog = Catalog::load(&args.catalog)?;
    let mut config = match &args.config {
        Some(path) => VesselConfig::load(path)?,
        None => VesselConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut engine = GameEngine::new(&args.name, catalog, &config)?;
    let mut output = TerminalIO;

    let at = engine.vessel().position();
    let found = engine.deploy_sensor();
    SensorPresenter::show_deployment(at, found.as_deref(), &mut output);

    output.writeln("");
    VesselPresenter::show_status(engine.vessel(), engine.catalog(), &mut output);
    output.writeln("");
    output.writeln(&engine.celestial_map_report());
    output.writeln("");

    let access = if args.qe {
        Access::QualityEngineer
    } else {
        Access::Player
    };
    output.writeln(&engine.gazetteer_report(access, args.discoveries));
    Ok(())
}
