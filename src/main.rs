use clap::Parser;
use ice_planner::utils::currency::format_currency;
use ice_planner::utils::{logger, validation::Validate};
use ice_planner::{
    AppConfig, CliConfig, Command, CostPlan, FieldId, JsonPlanStore, PlannerError, PlannerSession,
    Result,
};

fn resolve_field(name: &str) -> Result<FieldId> {
    FieldId::from_wire_key(name).ok_or_else(|| PlannerError::UnknownField {
        name: name.to_string(),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting ice-planner CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 組合並驗證配置
    let config = match AppConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 開啟儲存與規劃會話
    let store = JsonPlanStore::new(config.data_dir.clone());
    let mut session = match PlannerSession::open(store) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("❌ Failed to open planner session: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &mut session, &config) {
        tracing::error!("❌ Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(
    command: Command,
    session: &mut PlannerSession<JsonPlanStore>,
    config: &AppConfig,
) -> Result<()> {
    match command {
        Command::Show => {
            print_breakdown(session.plan());
        }
        Command::Set { field, value } => match field.as_str() {
            "teamName" => {
                session.set_team_name(&value)?;
                println!("✅ teamName = {}", value);
            }
            "logoUrl" => {
                session.set_logo_url(&value)?;
                println!("✅ logoUrl = {}", value);
            }
            name => {
                let id = resolve_field(name)?;
                session.set_value(id, id.parse_raw(&value))?;
                println!("✅ {} = {}", name, session.plan().field(id).value());
            }
        },
        Command::Inc { field } => {
            let id = resolve_field(&field)?;
            session.increment(id)?;
            println!("✅ {} = {}", field, session.plan().field(id).value());
        }
        Command::Dec { field } => {
            let id = resolve_field(&field)?;
            session.decrement(id)?;
            println!("✅ {} = {}", field, session.plan().field(id).value());
        }
        Command::Share => {
            let url = session.share_url(&config.share_base_url)?;
            println!("🔗 {}", url);
        }
        Command::Import { url } => {
            session.import_share_url(&url)?;
            println!("✅ Plan imported from share link");
            print_breakdown(session.plan());
        }
        Command::Reset => {
            session.reset()?;
            println!("✅ Reset to defaults, saved plan cleared");
        }
    }

    Ok(())
}

fn print_breakdown(plan: &CostPlan) {
    let summary = plan.summary();
    let fee_percentage = plan.field(FieldId::FeePercentage).value();

    println!("🏒 {}", plan.team_name());
    if !plan.logo_url().is_empty() {
        println!("   {}", plan.logo_url());
    }
    println!(
        "   Players: {}",
        plan.field(FieldId::NumberOfPlayers).value()
    );
    println!();
    row("Ice Time", plan.ice_total());
    row("Coaches", plan.field(FieldId::CoachCost).value());
    row("Jerseys", plan.jersey_total());
    row("Subtotal", summary.subtotal);
    row(&format!("Fees ({}%)", fee_percentage), summary.total_fees);
    row("Cost Per Player", summary.cost_per_player);
    println!();
    println!("💰 Total Team Cost: ${}", format_currency(summary.total_cost));
}

fn row(label: &str, amount: f64) {
    println!("  {:<18} ${:>12}", label, format_currency(amount));
}
