use crate::cli::EngineArgs;
use crate::infra::{build_engine, load_cli_config};
use chrono::{Local, NaiveDate};
use clap::Args;
use retirement_engine::error::AppError;
use retirement_engine::simulation::{
    BonusLeaveCredit, CareerFlags, CreditRegime, CreditedDuration, CreditedPeriod, Gender,
    ServantRole, SimulationOutcome, SimulationRequest, CUTOFF_DATE,
};
use serde_json::json;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Args, Debug, Default)]
pub(crate) struct SimulateArgs {
    /// JSON file holding a single simulation request; other profile flags are ignored when set
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Servant role (PEBPM, EEBPM, ASPM, AAPM, AGPM)
    #[arg(long, value_parser = ServantRole::from_str)]
    pub(crate) role: Option<ServantRole>,
    /// Gender (male or female)
    #[arg(long, value_parser = Gender::from_str)]
    pub(crate) gender: Option<Gender>,
    /// Birth date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) birth_date: Option<NaiveDate>,
    /// PMMG admission date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) admission_date: Option<NaiveDate>,
    /// Simulation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) simulation_date: Option<NaiveDate>,
    /// Declared classroom regency, in whole years
    #[arg(long, default_value_t = 0)]
    pub(crate) regency_years: u32,
    /// Entered public service until 31/12/2003
    #[arg(long)]
    pub(crate) entered_until_2003: bool,
    /// Entered public service between 01/01/2004 and 15/09/2020
    #[arg(long)]
    pub(crate) entered_2004_to_2020: bool,
    /// Has ten years of public service
    #[arg(long)]
    pub(crate) ten_years_public_service: bool,
    /// Has five years in the current position
    #[arg(long)]
    pub(crate) five_years_in_position: bool,
    /// Print the outcome as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Simulation date applied to every sample servant (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) simulation_date: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

pub(crate) fn run_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let config = load_cli_config(args.engine.day_count_policy)?;
    let engine = build_engine(&config);

    let request = match &args.input {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            serde_json::from_reader(reader).map_err(io::Error::from)?
        }
        None => request_from_flags(&args, Local::now().date_naive()),
    };

    let outcome = engine.evaluate_request(request)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let payload = json!({ "outcome": outcome, "memory": outcome.memory() });
        serde_json::to_writer_pretty(&mut out, &payload).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_outcome(&outcome, &mut out)?;
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = load_cli_config(args.engine.day_count_policy)?;
    let engine = build_engine(&config);
    let simulation_date = args
        .simulation_date
        .unwrap_or_else(|| Local::now().date_naive());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "PMMG retirement demo | data da simulação {} | convenção {}",
        simulation_date.format("%d/%m/%Y"),
        engine.policy()
    )?;

    for (title, request) in sample_servants(simulation_date) {
        writeln!(out, "\n=== {title} ===")?;
        match engine.evaluate_request(request) {
            Ok(outcome) => render_outcome(&outcome, &mut out)?,
            Err(err) => writeln!(out, "Simulação rejeitada: {err}")?,
        }
    }

    Ok(())
}

fn request_from_flags(args: &SimulateArgs, today: NaiveDate) -> SimulationRequest {
    SimulationRequest {
        role: args.role,
        gender: args.gender,
        simulation_date: Some(args.simulation_date.unwrap_or(today)),
        birth_date: args.birth_date,
        admission_date: args.admission_date,
        career_flags: CareerFlags {
            entered_until_2003: args.entered_until_2003,
            entered_2004_to_2020: args.entered_2004_to_2020,
            ten_years_public_service: args.ten_years_public_service,
            five_years_in_position: args.five_years_in_position,
        },
        regency_years: args.regency_years,
        ..SimulationRequest::default()
    }
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

pub(crate) fn sample_servants(simulation_date: NaiveDate) -> Vec<(&'static str, SimulationRequest)> {
    let base = |role, gender, birth, admission| SimulationRequest {
        role: Some(role),
        gender: Some(gender),
        simulation_date: Some(simulation_date),
        birth_date: birth,
        admission_date: admission,
        ..SimulationRequest::default()
    };

    let mut assistant = base(
        ServantRole::Aspm,
        Gender::Male,
        ymd(1970, 1, 1),
        ymd(1995, 1, 1),
    );
    assistant.career_flags.entered_until_2003 = true;

    let mut teacher = base(
        ServantRole::Pebpm,
        Gender::Female,
        ymd(1960, 3, 10),
        ymd(1990, 2, 1),
    );
    teacher.regency_years = 26;
    teacher.career_flags = CareerFlags {
        entered_until_2003: true,
        entered_2004_to_2020: false,
        ten_years_public_service: true,
        five_years_in_position: true,
    };

    let mut analyst = base(
        ServantRole::Agpm,
        Gender::Male,
        ymd(1962, 8, 20),
        ymd(2008, 3, 3),
    );
    analyst.career_flags.entered_2004_to_2020 = true;
    analyst.credited_periods.push(CreditedPeriod {
        duration: CreditedDuration::Explicit { years: 17, days: 0 },
        before_cutoff: true,
        counts_toward_regency: false,
        regime: Some(CreditRegime::Rgps),
        origin: "Iniciativa privada".to_string(),
        function: "Contador".to_string(),
    });
    analyst.bonus_leave_credits.push(BonusLeaveCredit {
        days: 365,
        before_cutoff: true,
    });

    let veteran = base(
        ServantRole::Aapm,
        Gender::Male,
        ymd(1950, 6, 10),
        ymd(1980, 3, 1),
    );

    vec![
        ("Assistente administrativo em transição", assistant),
        ("Professora com regência", teacher),
        ("Analista com averbação e férias-prêmio", analyst),
        ("Auxiliar próximo da compulsória", veteran),
    ]
}

pub(crate) fn render_outcome<W: Write>(outcome: &SimulationOutcome, out: &mut W) -> io::Result<()> {
    let memory = outcome.memory();
    let times = &outcome.aggregated_times;

    writeln!(
        out,
        "Servidor: {} | Sexo: {} | Data: {} | Convenção: {}",
        outcome.role.label(),
        outcome.gender.label(),
        outcome.simulation_date.format("%d/%m/%Y"),
        outcome.day_count_policy
    )?;

    writeln!(out, "\nTempos apurados")?;
    writeln!(out, "  Idade: {} ({} dias)", memory.age, memory.age_days)?;
    writeln!(
        out,
        "  Tempo efetivo (PMMG): {} ({} dias)",
        memory.service, memory.service_days
    )?;
    writeln!(out, "  (+) Averbações: {} dias", times.credited_days)?;
    writeln!(out, "  (+) Férias-prêmio em dobro: {} dias", times.bonus_days)?;
    writeln!(out, "  (-) Descontos: {} dias", times.deducted_days)?;
    writeln!(
        out,
        "  Tempo líquido: {} ({} dias)",
        memory.contribution, memory.contribution_days
    )?;

    writeln!(out, "\nPontuação")?;
    writeln!(
        out,
        "  {} pts + {} d | saldo de {} dias para o próximo ponto",
        memory.score_points, memory.score_balance_days, memory.days_to_next_point
    )?;

    writeln!(out, "\nPedágio ({})", outcome.toll.mode.label())?;
    writeln!(out, "  Meta: {} dias", outcome.toll.target_days)?;
    writeln!(
        out,
        "  (-) Tempo em {}: {}",
        CUTOFF_DATE.format("%d/%m/%Y"),
        memory.time_at_cutoff
    )?;
    writeln!(out, "  (=) Saldo no corte: {}", memory.missing_at_cutoff)?;
    writeln!(out, "  (+) Pedágio: {}", memory.toll)?;
    writeln!(out, "  Total a cumprir: {}", memory.required_time)?;
    writeln!(
        out,
        "  Pedágio ({}): {} dias",
        outcome.full_toll.mode.label(),
        outcome.full_toll.toll_days
    )?;
    writeln!(out, "  Data prevista: {}", memory.projected_eligibility_date)?;
    writeln!(out, "  Compulsória em: {}", memory.compulsory_date)?;

    writeln!(out, "\nDetalhamento por regra")?;
    for verdict in &outcome.verdicts {
        let status = if verdict.satisfied {
            "Satisfeito"
        } else {
            "Incompleto"
        };
        writeln!(out, "  [{status}] {}", verdict.name)?;
        for requirement in &verdict.requirements {
            let mark = if requirement.satisfied { "ok" } else { "x" };
            writeln!(
                out,
                "    {mark:>2} {}: exigido {} | apurado {}",
                requirement.label, requirement.expected, requirement.actual
            )?;
        }
    }

    writeln!(out, "\n{}", memory.verdict)
}
