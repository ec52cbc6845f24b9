//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::svg_chart::{render_chart, ChartInputs};
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::config_validation::{
    validate_chart_config, validate_data_config, validate_indicator_config,
    validate_simulation_config,
};
use crate::domain::error::TrendsimError;
use crate::domain::indicator::{compute_indicators, IndicatorConfig};
use crate::domain::metrics::SummaryMetrics;
use crate::domain::simulation::{run_simulation, SimulationConfig, SimulationInputs};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "trendsim", about = "Trend-following crossover backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the crossover simulation over the configured symbols
    Simulate {
        #[arg(short, long)]
        config: PathBuf,
        /// Simulate a single symbol instead of the configured list
        #[arg(long)]
        symbol: Option<String>,
        /// Directory for trade logs (overrides [report] output_dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Validate configuration and echo resolved parameters only
        #[arg(long)]
        dry_run: bool,
    },
    /// List symbols available in the data directory
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show data range for symbol(s)
    Info {
        #[arg(long)]
        symbol: Option<String>,
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Simulate {
            config,
            symbol,
            output_dir,
            dry_run,
        } => {
            if dry_run {
                run_dry_run(&config)
            } else {
                run_simulate(&config, symbol.as_deref(), output_dir.as_deref())
            }
        }
        Command::ListSymbols { config } => run_list_symbols(&config),
        Command::Info { symbol, config } => run_info(symbol.as_deref(), &config),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TrendsimError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn validate_all(config: &dyn ConfigPort) -> Result<(), TrendsimError> {
    validate_data_config(config)?;
    validate_simulation_config(config)?;
    validate_indicator_config(config)?;
    validate_chart_config(config)?;
    Ok(())
}

pub fn build_simulation_config(config: &dyn ConfigPort) -> SimulationConfig {
    SimulationConfig {
        initial_cash: config.get_double("simulation", "initial_cash", 10_000.0),
        buy_fraction: config.get_double("simulation", "buy_fraction", 0.2),
        sell_fraction: config.get_double("simulation", "sell_fraction", 0.2),
    }
}

pub fn build_indicator_config(config: &dyn ConfigPort) -> IndicatorConfig {
    let defaults = IndicatorConfig::default();
    IndicatorConfig {
        sma_window: config.get_int("indicators", "sma_window", defaults.sma_window as i64)
            as usize,
        ema_alpha: config.get_double("indicators", "ema_alpha", defaults.ema_alpha),
        macd_fast: config.get_int("indicators", "macd_fast", defaults.macd_fast as i64) as usize,
        macd_slow: config.get_int("indicators", "macd_slow", defaults.macd_slow as i64) as usize,
        macd_signal: config.get_int("indicators", "macd_signal", defaults.macd_signal as i64)
            as usize,
    }
}

pub fn resolve_symbols(symbol_override: Option<&str>, config: &dyn ConfigPort) -> Vec<String> {
    if let Some(s) = symbol_override {
        return vec![s.to_uppercase()];
    }

    if let Some(symbols_str) = config.get_string("simulation", "symbols") {
        return symbols_str
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
    }

    vec![]
}

fn run_simulate(
    config_path: &Path,
    symbol_override: Option<&str>,
    output_override: Option<&Path>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_all(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let symbols = resolve_symbols(symbol_override, &adapter);
    if symbols.is_empty() {
        eprintln!("error: no symbols configured");
        return ExitCode::from(2);
    }

    let data_path = adapter
        .get_string("data", "path")
        .unwrap_or_default();
    let data_port = CsvAdapter::new(PathBuf::from(data_path));
    let report_port = TextReportAdapter::new();

    let sim_config = build_simulation_config(&adapter);
    let ind_config = build_indicator_config(&adapter);
    let sim_window = adapter.get_int("simulation", "window", 365) as usize;
    let chart_window = adapter.get_int("chart", "window", 1000) as usize;

    let report_dir = output_override.map(Path::to_path_buf).unwrap_or_else(|| {
        PathBuf::from(
            adapter
                .get_string("report", "output_dir")
                .unwrap_or_else(|| "reports".to_string()),
        )
    });
    let charts_enabled = adapter.get_bool("chart", "enabled", true);
    let chart_dir = PathBuf::from(
        adapter
            .get_string("chart", "output_dir")
            .unwrap_or_else(|| "charts".to_string()),
    );

    if let Err(e) = fs::create_dir_all(&report_dir) {
        eprintln!("error: failed to create {}: {e}", report_dir.display());
        return ExitCode::from(1);
    }
    if charts_enabled {
        if let Err(e) = fs::create_dir_all(&chart_dir) {
            eprintln!("error: failed to create {}: {e}", chart_dir.display());
            return ExitCode::from(1);
        }
    }

    eprintln!(
        "Simulating {} symbols over the last {} days",
        symbols.len(),
        sim_window,
    );

    let mut processed = 0usize;
    // One symbol's failure never aborts the rest of the run.
    for symbol in &symbols {
        match process_symbol(
            &data_port,
            &report_port,
            symbol,
            &sim_config,
            &ind_config,
            sim_window,
            chart_window,
            &report_dir,
            charts_enabled.then_some(chart_dir.as_path()),
        ) {
            Ok(summary) => {
                eprintln!(
                    "{}: final net worth ${:.2} ({:+.2}%), {} trades",
                    symbol,
                    summary.final_net_worth,
                    summary.total_return * 100.0,
                    summary.trade_count,
                );
                processed += 1;
            }
            Err(e) => {
                eprintln!("warning: skipping {} ({})", symbol, e);
            }
        }
    }

    if processed == 0 {
        eprintln!("error: no symbols processed successfully");
        return ExitCode::from(5);
    }

    if charts_enabled {
        eprintln!(
            "\nProcessed {} of {} symbols; reports in {}, charts in {}",
            processed,
            symbols.len(),
            report_dir.display(),
            chart_dir.display(),
        );
    } else {
        eprintln!(
            "\nProcessed {} of {} symbols; reports in {}",
            processed,
            symbols.len(),
            report_dir.display(),
        );
    }
    ExitCode::SUCCESS
}

struct SymbolSummary {
    final_net_worth: f64,
    total_return: f64,
    trade_count: usize,
}

#[allow(clippy::too_many_arguments)]
fn process_symbol(
    data_port: &dyn DataPort,
    report_port: &dyn ReportPort,
    symbol: &str,
    sim_config: &SimulationConfig,
    ind_config: &IndicatorConfig,
    sim_window: usize,
    chart_window: usize,
    report_dir: &Path,
    chart_dir: Option<&Path>,
) -> Result<SymbolSummary, TrendsimError> {
    let series = data_port.fetch_series(symbol)?;
    series.validate()?;

    let closes = series.closes();
    let dates = series.dates();
    let indicators = compute_indicators(&closes, ind_config)?;

    // Indicators run over the full history; the simulation replays only the
    // trailing window, with window-relative day indices.
    let start = series.tail_start(sim_window);
    let inputs = SimulationInputs {
        symbol,
        dates: &dates[start..],
        prices: &closes[start..],
        macd_line: &indicators.macd.line[start..],
        signal_line: &indicators.macd.signal[start..],
        ema: &indicators.ema[start..],
        sma: &indicators.sma[start..],
    };

    let result = run_simulation(&inputs, sim_config)?;
    let metrics = SummaryMetrics::compute(&result);

    let report_path = report_dir.join(format!("{}.txt", symbol));
    report_port.write(&result, &metrics, &report_path)?;

    if let Some(chart_dir) = chart_dir {
        let chart_start = series.tail_start(chart_window);
        let chart = render_chart(&ChartInputs {
            symbol,
            prices: &closes[chart_start..],
            sma: &indicators.sma[chart_start..],
            ema: &indicators.ema[chart_start..],
            macd_line: &indicators.macd.line[chart_start..],
            macd_signal: &indicators.macd.signal[chart_start..],
            histogram: &indicators.macd.histogram[chart_start..],
        });
        fs::write(chart_dir.join(format!("{}.svg", symbol)), chart)?;
    }

    Ok(SymbolSummary {
        final_net_worth: result.final_net_worth,
        total_return: metrics.total_return,
        trade_count: result.trades.len(),
    })
}

pub fn run_dry_run(config_path: &Path) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_all(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    eprintln!("Config validated successfully");

    let sim_config = build_simulation_config(&adapter);
    let ind_config = build_indicator_config(&adapter);
    let symbols = resolve_symbols(None, &adapter);

    eprintln!("\nSimulation parameters:");
    eprintln!("  initial_cash:  {}", sim_config.initial_cash);
    eprintln!("  window:        {}", adapter.get_int("simulation", "window", 365));
    eprintln!("  buy_fraction:  {}", sim_config.buy_fraction);
    eprintln!("  sell_fraction: {}", sim_config.sell_fraction);

    eprintln!("\nIndicators:");
    eprintln!("  SMA({})", ind_config.sma_window);
    eprintln!("  EMA(alpha={})", ind_config.ema_alpha);
    eprintln!(
        "  MACD({},{},{})",
        ind_config.macd_fast, ind_config.macd_slow, ind_config.macd_signal
    );

    eprintln!("\nSymbols: {}", symbols.join(", "));

    eprintln!("\nDry run complete: configuration is valid");
    ExitCode::SUCCESS
}

fn run_list_symbols(config_path: &Path) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_data_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let data_path = adapter.get_string("data", "path").unwrap_or_default();
    let data_port = CsvAdapter::new(PathBuf::from(data_path));

    let symbols = match data_port.list_symbols() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if symbols.is_empty() {
        eprintln!("No symbols found");
    } else {
        for symbol in &symbols {
            println!("{}", symbol);
        }
        eprintln!("{} symbols found", symbols.len());
    }
    ExitCode::SUCCESS
}

fn run_info(symbol_override: Option<&str>, config_path: &Path) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_data_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let data_path = adapter.get_string("data", "path").unwrap_or_default();
    let data_port = CsvAdapter::new(PathBuf::from(data_path));

    let symbols = resolve_symbols(symbol_override, &adapter);
    if symbols.is_empty() {
        eprintln!("error: no symbols configured");
        return ExitCode::from(2);
    }

    for symbol in &symbols {
        match data_port.data_range(symbol) {
            Ok(Some((min_date, max_date, count))) => {
                println!("{}: {} days, {} to {}", symbol, count, min_date, max_date);
            }
            Ok(None) => {
                eprintln!("{}: no data found", symbol);
            }
            Err(e) => {
                eprintln!("error querying {}: {}", symbol, e);
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn resolve_symbols_override_wins() {
        let config = make_config("[simulation]\nsymbols = AAPL,MSFT\n");
        let symbols = resolve_symbols(Some("tsla"), &config);
        assert_eq!(symbols, vec!["TSLA"]);
    }

    #[test]
    fn resolve_symbols_splits_and_uppercases() {
        let config = make_config("[simulation]\nsymbols = aapl, msft , goog\n");
        let symbols = resolve_symbols(None, &config);
        assert_eq!(symbols, vec!["AAPL", "MSFT", "GOOG"]);
    }

    #[test]
    fn resolve_symbols_skips_empty_tokens() {
        let config = make_config("[simulation]\nsymbols = AAPL,,MSFT,\n");
        let symbols = resolve_symbols(None, &config);
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn resolve_symbols_empty_without_config() {
        let config = make_config("[simulation]\n");
        assert!(resolve_symbols(None, &config).is_empty());
    }

    #[test]
    fn build_simulation_config_defaults() {
        let config = make_config("[simulation]\nsymbols = AAPL\n");
        let sim = build_simulation_config(&config);
        assert_eq!(sim, SimulationConfig::default());
    }

    #[test]
    fn build_simulation_config_reads_values() {
        let config = make_config(
            "[simulation]\nsymbols = AAPL\ninitial_cash = 50000\nbuy_fraction = 0.1\nsell_fraction = 0.3\n",
        );
        let sim = build_simulation_config(&config);
        assert!((sim.initial_cash - 50_000.0).abs() < f64::EPSILON);
        assert!((sim.buy_fraction - 0.1).abs() < f64::EPSILON);
        assert!((sim.sell_fraction - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn build_indicator_config_defaults() {
        let config = make_config("[indicators]\n");
        let ind = build_indicator_config(&config);
        assert_eq!(ind, IndicatorConfig::default());
    }

    #[test]
    fn build_indicator_config_reads_values() {
        let config = make_config(
            "[indicators]\nsma_window = 50\nema_alpha = 0.2\nmacd_fast = 5\nmacd_slow = 35\nmacd_signal = 5\n",
        );
        let ind = build_indicator_config(&config);
        assert_eq!(ind.sma_window, 50);
        assert!((ind.ema_alpha - 0.2).abs() < f64::EPSILON);
        assert_eq!(ind.macd_fast, 5);
        assert_eq!(ind.macd_slow, 35);
        assert_eq!(ind.macd_signal, 5);
    }
}
