use clap::Parser;
use rescue_search::{
    config::{ConfigError, ProblemKind, SearchConfig, Verbosity},
    search::{
        heuristics::UnsupportedHeuristic,
        problem_formulations::{MultiSurvivorProblem, PositionSearchProblem},
        validate, DistanceMetric, GraphSearch, Heuristic, HeuristicName, PlanError,
        SearchEngineName, SearchProblem, SearchResult,
    },
    world::{Layout, LayoutError},
};
use std::{path::PathBuf, process::ExitCode};
use thiserror::Error;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Plan a rescue route through a grid layout.
struct Cli {
    #[arg(help = "The layout file")]
    layout: PathBuf,
    #[arg(
        help = "A TOML file with default settings, overridden by any flag given here",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The problem to solve on the layout",
        short = 'p',
        long = "problem",
        id = "PROBLEM"
    )]
    problem: Option<ProblemKind>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    engine: Option<SearchEngineName>,
    #[arg(
        value_enum,
        help = "The heuristic, only used by A*",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic: Option<HeuristicName>,
    #[arg(
        value_enum,
        help = "The distance metric of the survivor heuristic, chosen from the \
        terrain if not given",
        long = "metric",
        id = "METRIC"
    )]
    metric: Option<DistanceMetric>,
    #[arg(help = "Stop after this many expansions", long = "max-expansions")]
    max_expansions: Option<usize>,
    #[arg(help = "Stop after this many seconds", long = "time-limit")]
    time_limit: Option<f64>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

impl Cli {
    /// The config file with every flag that was given applied on top.
    fn config(&self) -> Result<SearchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_path(path)?,
            None => SearchConfig::default(),
        };
        if let Some(problem) = self.problem {
            config.problem = problem;
        }
        if let Some(engine) = self.engine {
            config.engine = engine;
        }
        if self.heuristic.is_some() {
            config.heuristic = self.heuristic;
        }
        if self.metric.is_some() {
            config.metric = self.metric;
        }
        if self.max_expansions.is_some() {
            config.max_expansions = self.max_expansions;
        }
        if self.time_limit.is_some() {
            config.time_limit = self.time_limit;
        }
        if let Some(verbosity) = self.verbosity {
            config.verbosity = verbosity;
        }
        Ok(config)
    }
}

#[derive(Debug, Error)]
enum PlannerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Heuristic(#[from] UnsupportedHeuristic),
    #[error("search returned an invalid plan: {0}")]
    InvalidPlan(#[from] PlanError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let level: tracing::Level = config.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match plan(&cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a plan was found.
fn plan(cli: &Cli, config: &SearchConfig) -> Result<bool, PlannerError> {
    let layout = Layout::from_path(&cli.layout)?;
    info!(
        width = layout.map.width(),
        height = layout.map.height(),
        survivors = layout.survivors.len(),
        "loaded layout"
    );
    let engine = config.engine.create(config.limits()?);

    match config.problem {
        ProblemKind::Position => {
            let mut problem = PositionSearchProblem::from_layout(&layout)?;
            let mut heuristic = config
                .heuristic()
                .create_point_goal::<PositionSearchProblem>()?;
            run(&mut problem, heuristic.as_mut(), engine)
        }
        ProblemKind::Survivors => {
            let metric = config
                .metric
                .unwrap_or_else(|| DistanceMetric::preferred_for(&layout.map));
            info!(?metric);
            let mut problem = MultiSurvivorProblem::from_layout(&layout);
            let mut heuristic = config
                .heuristic()
                .create_multi_goal::<MultiSurvivorProblem>(metric)?;
            run(&mut problem, heuristic.as_mut(), engine)
        }
    }
}

fn run<P: SearchProblem>(
    problem: &mut P,
    heuristic: &mut dyn Heuristic<P>,
    engine: GraphSearch,
) -> Result<bool, PlannerError> {
    let (result, statistics) = engine.search(problem, heuristic);
    match result {
        SearchResult::Success(plan) => {
            let cost = validate(problem, &plan)?;
            info!("plan is valid");
            println!("Plan found:");
            for action in &plan {
                println!("{:?}", action);
            }
            println!("Plan length: {}", plan.len());
            println!("Plan cost: {}", cost);
            println!("Expanded nodes: {}", statistics.expanded_nodes());
            Ok(true)
        }
        result => {
            info!("no plan found");
            println!("No plan found: {:?}", result);
            Ok(false)
        }
    }
}
