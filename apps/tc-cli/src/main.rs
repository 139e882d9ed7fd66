use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tc_assess::{
    AnswerSheet, AssessError, GradeReport, Mode, QuestionBank, SessionConfig, SessionController,
    builtin_bank,
};
use tc_calc::{
    CalcError, EnthalpyEstimate, LineItem, MixBody, ReactionStep, from_bond_energies,
    from_formation_enthalpies, heat, mix, molar_enthalpy_kj, moles, parse_equation,
    solution_heat, validate,
};
use tc_core::{TcError, convert_named, round_to};
use tc_data::{ReferenceData, StandardReference, find_hess_problem, hess_problems};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] TcError),

    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Assess(#[from] AssessError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "tc")]
#[command(about = "Thermochemistry calculator and assessment grader", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an energy value between J, kJ, cal and kcal
    Convert {
        value: f64,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Sensible heat q = m·c·ΔT
    Heat {
        /// Mass in grams (total solution mass with --solution)
        #[arg(long)]
        mass: f64,
        /// Temperature change in °C
        #[arg(long, allow_hyphen_values = true)]
        delta_t: f64,
        /// Specific heat in J/(g·°C)
        #[arg(long, conflicts_with_all = ["substance", "solution"])]
        c: Option<f64>,
        /// Look up the specific heat by substance name
        #[arg(long, conflicts_with = "solution")]
        substance: Option<String>,
        /// Treat the sample as dilute aqueous solution (c = 4.18, |ΔT|)
        #[arg(long)]
        solution: bool,
        /// Mass of the reacting sample in grams, for a per-mole result
        #[arg(long, requires = "molar_mass")]
        sample_mass: Option<f64>,
        /// Molar mass of the reacting sample in g/mol
        #[arg(long, requires = "sample_mass")]
        molar_mass: Option<f64>,
    },
    /// Final temperature of two bodies mixed without heat loss
    Mix {
        #[arg(long)]
        m1: f64,
        #[arg(long)]
        c1: f64,
        #[arg(long, allow_hyphen_values = true)]
        t1: f64,
        #[arg(long)]
        m2: f64,
        #[arg(long)]
        c2: f64,
        #[arg(long, allow_hyphen_values = true)]
        t2: f64,
    },
    /// Check an equation's shape and list its terms
    Equation { text: String },
    /// ΔH of reaction from tabulated formation enthalpies
    Formation {
        /// Equation with phase suffixes, e.g. "CH4(g) + 2O2(g) -> CO2(g) + 2H2O(l)"
        text: String,
    },
    /// ΔH of reaction from average bond energies
    Bonds {
        /// Bond broken as BOND:COUNT or BOND:COUNT:ENERGY (repeatable)
        #[arg(long, required = true)]
        broken: Vec<String>,
        /// Bond formed as BOND:COUNT or BOND:COUNT:ENERGY (repeatable)
        #[arg(long, required = true)]
        formed: Vec<String>,
    },
    /// Work a Hess's-law problem; lists the problems when no key is given
    Hess {
        /// Problem key (guided, practice, challenge)
        key: Option<String>,
        /// Reverse step N, 1-based (repeatable)
        #[arg(long)]
        flip: Vec<usize>,
        /// Scale step N by K, written N=K (repeatable)
        #[arg(long)]
        scale: Vec<String>,
        /// Use only these steps, 1-based (repeatable; default all)
        #[arg(long)]
        only: Vec<usize>,
    },
    /// Look up reference data
    Lookup {
        #[arg(value_enum)]
        table: Table,
        query: String,
    },
    /// Show or export a question bank
    Bank {
        /// Bank file (YAML or JSON); defaults to the built-in bank
        #[arg(long)]
        bank: Option<PathBuf>,
        /// Write the bank to this path (YAML or JSON by extension)
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Run a session over an answers file and print the grade report
    Grade {
        /// Answers file mapping item id to answer (YAML or JSON)
        answers: PathBuf,
        /// Bank file (YAML or JSON); defaults to the built-in bank
        #[arg(long)]
        bank: Option<PathBuf>,
        /// Session config file (YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Seconds to let the countdown run before submitting
        #[arg(long, default_value_t = 0)]
        elapsed: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Table {
    Formation,
    Bond,
    SpecificHeat,
    Combustion,
    Latent,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Practice,
    Exam,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Practice => Mode::Practice,
            ModeArg::Exam => Mode::Exam,
        }
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Convert { value, from, to } => cmd_convert(value, &from, &to, json),
        Commands::Heat {
            mass,
            delta_t,
            c,
            substance,
            solution,
            sample_mass,
            molar_mass,
        } => cmd_heat(
            mass,
            delta_t,
            HeatSource::from_args(c, substance, solution)?,
            sample_mass.zip(molar_mass),
            json,
        ),
        Commands::Mix {
            m1,
            c1,
            t1,
            m2,
            c2,
            t2,
        } => cmd_mix(MixBody::new(m1, c1, t1), MixBody::new(m2, c2, t2), json),
        Commands::Equation { text } => cmd_equation(&text, json),
        Commands::Formation { text } => cmd_formation(&text, json),
        Commands::Bonds { broken, formed } => cmd_bonds(&broken, &formed, json),
        Commands::Hess {
            key,
            flip,
            scale,
            only,
        } => cmd_hess(key.as_deref(), &flip, &scale, &only, json),
        Commands::Lookup { table, query } => cmd_lookup(table, &query, json),
        Commands::Bank { bank, export } => cmd_bank(bank.as_deref(), export.as_deref(), json),
        Commands::Grade {
            answers,
            bank,
            config,
            mode,
            elapsed,
        } => cmd_grade(
            &answers,
            bank.as_deref(),
            config.as_deref(),
            mode.map(Mode::from),
            elapsed,
            json,
        ),
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn cmd_convert(value: f64, from: &str, to: &str, json: bool) -> CliResult<()> {
    let quantity = convert_named(value, from, to)?;
    if json {
        return print_json(&quantity);
    }
    println!("{value} {from} = {quantity}");
    Ok(())
}

enum HeatSource {
    Given(f64),
    Substance(String),
    Solution,
}

impl HeatSource {
    fn from_args(c: Option<f64>, substance: Option<String>, solution: bool) -> CliResult<Self> {
        match (c, substance, solution) {
            (_, _, true) => Ok(HeatSource::Solution),
            (Some(c), _, _) => Ok(HeatSource::Given(c)),
            (None, Some(name), _) => Ok(HeatSource::Substance(name)),
            (None, None, false) => Err(CliError::InvalidArgument(
                "one of --c, --substance or --solution is required".to_string(),
            )),
        }
    }
}

#[derive(Serialize)]
struct HeatReport {
    specific_heat: f64,
    #[serde(flatten)]
    q: tc_calc::HeatResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    molar_enthalpy_kj: Option<f64>,
}

fn cmd_heat(
    mass: f64,
    delta_t: f64,
    source: HeatSource,
    sample: Option<(f64, f64)>,
    json: bool,
) -> CliResult<()> {
    let (specific_heat, q) = match source {
        HeatSource::Given(c) => (c, heat(mass, c, delta_t)?),
        HeatSource::Substance(name) => {
            let c = StandardReference::shared()
                .specific_heat(&name)
                .ok_or_else(|| CliError::NotFound(format!("specific heat for '{name}'")))?;
            (c, heat(mass, c, delta_t)?)
        }
        HeatSource::Solution => (tc_calc::WATER_SPECIFIC_HEAT, solution_heat(mass, delta_t)?),
    };

    let molar_enthalpy_kj = match sample {
        Some((sample_mass, molar_mass)) => {
            let mol = moles(sample_mass, molar_mass)?;
            Some(molar_enthalpy_kj(q.q_j_raw, mol)?)
        }
        None => None,
    };

    let report = HeatReport {
        specific_heat,
        q,
        molar_enthalpy_kj,
    };
    if json {
        return print_json(&report);
    }

    println!("c = {specific_heat} J/(g·°C)");
    println!("q = {} J", q.q_j);
    println!("  = {} kJ", q.q_kj);
    println!("  = {} cal", q.q_cal);
    println!("  = {} kcal", q.q_kcal);
    if let Some(per_mol) = molar_enthalpy_kj {
        println!("q per mole = {} kJ/mol", round_to(per_mol, 2));
    }
    Ok(())
}

fn cmd_mix(first: MixBody, second: MixBody, json: bool) -> CliResult<()> {
    let outcome = mix(first, second)?;
    if json {
        return print_json(&outcome);
    }
    println!("T_final = {} °C", round_to(outcome.t_final_c, 2));
    println!("q1 = {} J", round_to(outcome.q_first_j, 2));
    println!("q2 = {} J", round_to(outcome.q_second_j, 2));
    Ok(())
}

fn cmd_equation(text: &str, json: bool) -> CliResult<()> {
    let check = validate(text);
    if !check.valid {
        if json {
            return print_json(&check);
        }
        let reason = check.issue.map(|i| i.describe()).unwrap_or("invalid");
        println!("✗ {reason}");
        return Ok(());
    }

    let parsed = parse_equation(text)?;
    if json {
        return print_json(&parsed);
    }
    println!("✓ Equation shape is valid ({})", parsed.arrow.token());
    println!("Reactants:");
    for c in &parsed.reactants {
        println!("  {} × {}", c.coefficient, c.formula);
    }
    println!("Products:");
    for c in &parsed.products {
        println!("  {} × {}", c.coefficient, c.formula);
    }
    Ok(())
}

fn print_estimate(estimate: &EnthalpyEstimate, json: bool) -> CliResult<()> {
    if json {
        return print_json(estimate);
    }
    match estimate.breakdown {
        tc_calc::Breakdown::Formation {
            sum_products,
            sum_reactants,
        } => {
            println!("Σ products  = {} kJ", round_to(sum_products, 2));
            println!("Σ reactants = {} kJ", round_to(sum_reactants, 2));
        }
        tc_calc::Breakdown::BondEnergy {
            energy_broken,
            energy_formed,
        } => {
            println!("Bonds broken = {} kJ", round_to(energy_broken, 2));
            println!("Bonds formed = {} kJ", round_to(energy_formed, 2));
        }
    }
    println!(
        "ΔH = {} kJ ({:?})",
        round_to(estimate.delta_h, 2),
        estimate.kind
    );
    Ok(())
}

fn cmd_formation(text: &str, json: bool) -> CliResult<()> {
    let data = StandardReference::shared();
    let parsed = parse_equation(text)?;
    let items = |terms: &[tc_calc::ParsedCompound]| -> Vec<LineItem> {
        terms
            .iter()
            .map(|c| data.formation_item(&c.formula, c.coefficient))
            .collect()
    };
    let estimate = from_formation_enthalpies(&items(&parsed.products), &items(&parsed.reactants))?;
    print_estimate(&estimate, json)
}

/// `BOND:COUNT` or `BOND:COUNT:ENERGY`. Without an energy the table is used.
fn parse_bond_arg(arg: &str) -> CliResult<LineItem> {
    let bad = || CliError::InvalidArgument(format!("bond '{arg}' (expected BOND:COUNT[:ENERGY])"));
    let mut parts = arg.split(':');
    let bond = parts.next().filter(|b| !b.is_empty()).ok_or_else(bad)?;
    let count: f64 = parts
        .next()
        .and_then(|c| c.trim().parse().ok())
        .ok_or_else(bad)?;
    let energy = match parts.next() {
        Some(e) => Some(e.trim().parse::<f64>().map_err(|_| bad())?),
        None => StandardReference::shared().bond_energy(bond),
    };
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok(LineItem::partial(bond, Some(count), energy))
}

fn cmd_bonds(broken: &[String], formed: &[String], json: bool) -> CliResult<()> {
    let broken = broken
        .iter()
        .map(|b| parse_bond_arg(b))
        .collect::<CliResult<Vec<_>>>()?;
    let formed = formed
        .iter()
        .map(|b| parse_bond_arg(b))
        .collect::<CliResult<Vec<_>>>()?;
    let estimate = from_bond_energies(&broken, &formed)?;
    print_estimate(&estimate, json)
}

fn step_mut(steps: &mut [ReactionStep], number: usize) -> CliResult<&mut ReactionStep> {
    let len = steps.len();
    number
        .checked_sub(1)
        .and_then(|i| steps.get_mut(i))
        .ok_or_else(|| CliError::InvalidArgument(format!("step {number} (problem has {len})")))
}

fn cmd_hess(
    key: Option<&str>,
    flips: &[usize],
    scales: &[String],
    only: &[usize],
    json: bool,
) -> CliResult<()> {
    let Some(key) = key else {
        if json {
            return print_json(&hess_problems());
        }
        for p in hess_problems() {
            println!("{:<10} {}  [{}]", p.key, p.title, p.target_equation);
        }
        return Ok(());
    };

    let problem =
        find_hess_problem(key).ok_or_else(|| CliError::NotFound(format!("Hess problem '{key}'")))?;
    let mut steps = problem.steps()?;

    for arg in scales {
        let (number, factor) = arg
            .split_once('=')
            .and_then(|(n, k)| {
                Some((n.trim().parse::<usize>().ok()?, k.trim().parse::<f64>().ok()?))
            })
            .ok_or_else(|| CliError::InvalidArgument(format!("scale '{arg}' (expected N=K)")))?;
        step_mut(&mut steps, number)?.scale(factor)?;
    }
    for &number in flips {
        step_mut(&mut steps, number)?.flip();
    }

    let chosen = if only.is_empty() {
        steps
    } else {
        let mut chosen = Vec::with_capacity(only.len());
        for &number in only {
            chosen.push(step_mut(&mut steps, number)?.clone());
        }
        chosen
    };

    let outcome = problem.check(&chosen)?;
    if json {
        return print_json(&outcome);
    }

    println!("{}", problem.title);
    println!("Target: {}  ΔH = {} kJ", problem.target_equation, problem.target_delta_h);
    for step in &chosen {
        let direction = if step.is_reversed() { "reversed" } else { "forward" };
        println!(
            "  {} ×{} {}: {} kJ",
            step.label(),
            step.coefficient(),
            direction,
            round_to(step.effective_delta_h(), 2)
        );
    }
    println!("Total: {} kJ", round_to(outcome.total, 2));
    if outcome.matched {
        println!("✓ Matches the target");
    } else {
        println!("✗ Does not match. Hint: {}", problem.hint);
    }
    Ok(())
}

fn cmd_lookup(table: Table, query: &str, json: bool) -> CliResult<()> {
    let data = StandardReference::shared();
    let missing = || CliError::NotFound(format!("'{query}'"));

    match table {
        Table::Formation => {
            let hf = data.formation_enthalpy(query).ok_or_else(missing)?;
            if json {
                return print_json(&hf);
            }
            println!("ΔHf°({query}) = {hf} kJ/mol");
        }
        Table::Bond => {
            let e = data.bond_energy(query).ok_or_else(missing)?;
            if json {
                return print_json(&e);
            }
            println!("E({query}) = {e} kJ/mol");
        }
        Table::SpecificHeat => {
            let entry = data.specific_heat_entry(query).ok_or_else(missing)?;
            if json {
                return print_json(entry);
            }
            println!("{}: c = {} J/(g·°C)", entry.substance, entry.c);
        }
        Table::Combustion => {
            let entry = data.combustion_enthalpy(query).ok_or_else(missing)?;
            if json {
                return print_json(entry);
            }
            println!("{} ({}): ΔHc° = {} kJ/mol", entry.name, entry.formula, entry.hc);
        }
        Table::Latent => {
            let entry = data.latent_heat(query).ok_or_else(missing)?;
            if json {
                return print_json(entry);
            }
            println!(
                "{} ({}): ΔHfus = {} kJ/mol, ΔHvap = {} kJ/mol",
                entry.name, entry.substance, entry.h_fus, entry.h_vap
            );
        }
    }
    Ok(())
}

fn load_bank(path: Option<&Path>) -> CliResult<QuestionBank> {
    let bank = match path {
        Some(p) if is_json(p) => tc_assess::load_json(p)?,
        Some(p) => tc_assess::load_yaml(p)?,
        None => builtin_bank(),
    };
    Ok(bank)
}

fn cmd_bank(path: Option<&Path>, export: Option<&Path>, json: bool) -> CliResult<()> {
    let bank = load_bank(path)?;

    if let Some(out) = export {
        if is_json(out) {
            tc_assess::save_json(out, &bank)?;
        } else {
            tc_assess::save_yaml(out, &bank)?;
        }
        println!("✓ Wrote {} items to {}", bank.items.len(), out.display());
        return Ok(());
    }

    if json {
        return print_json(&bank);
    }
    println!("{} ({} items)", bank.title, bank.items.len());
    for item in &bank.items {
        println!(
            "  #{:<3} {:<14} {:<12} {}",
            item.id,
            format!("{:?}", item.kind()),
            format!("{:?}", item.difficulty),
            item.topic.label()
        );
    }
    Ok(())
}

fn load_answers(path: &Path) -> CliResult<AnswerSheet> {
    let content = std::fs::read_to_string(path)?;
    let answers = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(answers)
}

fn load_config(path: Option<&Path>) -> CliResult<SessionConfig> {
    let config = match path {
        Some(p) if is_json(p) => tc_assess::load_config_json(p)?,
        Some(p) => tc_assess::load_config_yaml(p)?,
        None => SessionConfig::default(),
    };
    Ok(config)
}

fn cmd_grade(
    answers_path: &Path,
    bank_path: Option<&Path>,
    config_path: Option<&Path>,
    mode: Option<Mode>,
    elapsed: u32,
    json: bool,
) -> CliResult<()> {
    let bank = load_bank(bank_path)?;
    let config = load_config(config_path)?;
    let answers = load_answers(answers_path)?;
    let mode = mode.unwrap_or(config.default_mode);
    tracing::debug!(answers = answers.len(), ?mode, "grading answers file");

    let mut session = SessionController::new(bank, config)?;
    session.start(mode)?;
    for (item_id, answer) in answers {
        session.answer(item_id, answer)?;
    }
    session.advance(elapsed)?;
    session.submit()?;

    let report = session.report().ok_or_else(|| {
        CliError::InvalidArgument("session did not reach submission".to_string())
    })?;
    if json {
        return print_json(&report);
    }
    print_report(&report, session.bank());
    Ok(())
}

fn print_report(report: &GradeReport, bank: &QuestionBank) {
    println!(
        "Score: {} ({} of {} correct)",
        report.score, report.correct, report.total
    );
    println!("Badge: {}", report.tier.label());
    println!("Topics:");
    for (topic, tally) in &report.topics {
        println!(
            "  {:<22} {:>3}% ({}/{})",
            topic.label(),
            tally.percent(),
            tally.correct,
            tally.total
        );
    }
    println!("Items:");
    for outcome in &report.outcomes {
        let mark = if outcome.correct { "✓" } else { "✗" };
        let note = if outcome.answered { "" } else { " (unanswered)" };
        println!("  {mark} #{}{note}", outcome.id);
        if outcome.correct {
            continue;
        }
        if let Some(item) = bank.item(outcome.id).filter(|i| !i.explanation.is_empty()) {
            println!("      {}", item.explanation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_args() {
        let item = parse_bond_arg("C-H:4").unwrap();
        assert_eq!(item.coefficient, Some(4.0));
        assert_eq!(item.value, Some(413.0));

        let item = parse_bond_arg("C=O:2:745").unwrap();
        assert_eq!(item.value, Some(745.0));

        let item = parse_bond_arg("Xe-F:4").unwrap();
        assert_eq!(item.value, None);

        assert!(parse_bond_arg("C-H").is_err());
        assert!(parse_bond_arg(":4").is_err());
        assert!(parse_bond_arg("C-H:4:1:2").is_err());
    }

    #[test]
    fn heat_source_selection() {
        assert!(matches!(
            HeatSource::from_args(None, None, true).unwrap(),
            HeatSource::Solution
        ));
        assert!(matches!(
            HeatSource::from_args(Some(0.9), None, false).unwrap(),
            HeatSource::Given(_)
        ));
        assert!(HeatSource::from_args(None, None, false).is_err());
    }

    #[test]
    fn json_paths() {
        assert!(is_json(Path::new("bank.JSON")));
        assert!(!is_json(Path::new("bank.yaml")));
        assert!(!is_json(Path::new("answers")));
    }

    #[test]
    fn cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();

        let cli = Cli::try_parse_from(["tc", "--json", "hess", "practice", "--flip", "2"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Hess { .. }));

        let cli = Cli::try_parse_from([
            "tc", "heat", "--mass", "100", "--delta-t", "-5", "--c", "4.18",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Heat { .. }));
    }
}
