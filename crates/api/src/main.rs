//! SalonLite - salon appointment client
//!
//! Main entry point for the terminal client.

use std::env;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use salonlite_core::forms::{login_failure_message, CustomerForm, LoginForm, SavedServiceForm};
use salonlite_core::RangePreset;
use salonlite_domain::{SalonError, TechId};
use salonlite_infra::config;
use salonlite_lib::render;
use salonlite_lib::utils::logging::init_tracing;
use salonlite_lib::{context, AppContext};

const USAGE: &str = "\
usage: salonlite <command> [args]

  board [YYYY-MM-DD]                     appointment board for a day
  book <tech-id> <YYYY-MM-DD> <HH:MM> <customer-id> <service-code>
  calendar <tech-id> [YYYY-MM]           technician availability
  toggle <tech-id> <YYYY-MM-DD>          flip one day
  open-all <tech-id>                     every date available
  close-all <tech-id>                    every date unavailable
  history <tech-id>                      technician service history
  dashboard [today|week|month|year]
  customers [search]
  technicians [search]
  services [search]
  add-customer <first> <last> [phone] [email]
  add-service <code> <name> <price> <duration-minutes>

Credentials are read from SALONLITE_USERNAME and SALONLITE_PASSWORD.";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file before reading config
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("loading configuration")?;
    init_tracing(&config.logging).context("initialising logging")?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        println!("{USAGE}");
        return Ok(());
    };
    if matches!(command.as_str(), "help" | "-h" | "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    let ctx = AppContext::new_with_config(config)?;
    sign_in(&ctx).await?;

    let outcome = run(&ctx, command, rest).await;

    if let Err(err) = salonlite_lib::sign_out(&ctx).await {
        tracing::warn!(error = %err, "logout failed");
    }
    outcome
}

async fn sign_in(ctx: &AppContext) -> Result<()> {
    let form = LoginForm {
        username: env::var("SALONLITE_USERNAME").unwrap_or_default(),
        password: env::var("SALONLITE_PASSWORD").unwrap_or_default(),
    };
    match salonlite_lib::sign_in(ctx, &form).await {
        Ok(_) => Ok(()),
        Err(SalonError::Validation(message)) => bail!("{message}"),
        Err(err) => bail!("{}", login_failure_message(&err)),
    }
}

async fn run(ctx: &AppContext, command: &str, args: &[String]) -> Result<()> {
    let today = context::today();
    let arg = |index: usize| args.get(index).map(String::as_str);

    match command {
        "board" => {
            let date = arg(0).map(parse_date).transpose()?.unwrap_or(today);
            let snapshot = salonlite_lib::load_board(ctx, date).await?;
            let now = (date == today).then(|| Local::now().time());
            print!("{}", render::render_board(&snapshot, &ctx.geometry(), now));
        }
        "book" => {
            let [tech, date, start, customer, code] = args else {
                bail!("book needs <tech-id> <date> <HH:MM> <customer-id> <service-code>");
            };
            let tech_id = parse_id(tech)?;
            let date = parse_date(date)?;
            let start = NaiveTime::parse_from_str(start, "%H:%M")
                .with_context(|| format!("invalid time {start:?}, expected HH:MM"))?;

            salonlite_lib::load_board(ctx, date).await?;
            let catalog = ctx.directory.saved_services().await?;
            let mut form = salonlite_lib::book_from_cell(ctx, tech_id, start)?;
            form.customer_id = Some(parse_id(customer)?);
            form.set_service_code(0, code, &catalog);

            let saved = salonlite_lib::save_appointment(ctx, &form).await?;
            println!("Booked appointment {} on {} ({})", saved.id, saved.date, form.total_text());
        }
        "calendar" => {
            let tech_id = parse_id(arg(0).context("calendar needs <tech-id>")?)?;
            let month = arg(1).map(parse_month).transpose()?.unwrap_or(today);
            let calendar = salonlite_lib::load_calendar(ctx, tech_id, month, today).await?;
            print!("{}", render::render_calendar(&calendar));
        }
        "toggle" => {
            let tech_id = parse_id(arg(0).context("toggle needs <tech-id>")?)?;
            let date = parse_date(arg(1).context("toggle needs <YYYY-MM-DD>")?)?;
            let availability = salonlite_lib::toggle_day(ctx, tech_id, date).await?;
            let state = if availability.is_available() { "available" } else { "unavailable" };
            println!("{date}: {state}");
        }
        "open-all" | "close-all" => {
            let tech_id = parse_id(arg(0).with_context(|| format!("{command} needs <tech-id>"))?)?;
            if command == "open-all" {
                salonlite_lib::open_all_dates(ctx, tech_id).await?;
            } else {
                salonlite_lib::close_all_dates(ctx, tech_id).await?;
            }
            let calendar = salonlite_lib::load_calendar(ctx, tech_id, today, today).await?;
            print!("{}", render::render_calendar(&calendar));
        }
        "history" => {
            let tech_id = parse_id(arg(0).context("history needs <tech-id>")?)?;
            let mut view = salonlite_lib::technician_history(ctx, tech_id, today).await?;
            let ids: Vec<_> = view.previous.iter().chain(&view.upcoming).map(|a| a.id).collect();
            for id in ids {
                view.toggle(id);
            }
            print!("{}", render::render_history(&view));
        }
        "dashboard" => {
            let preset = match arg(0) {
                Some(raw) => raw
                    .parse::<RangePreset>()
                    .map_err(|_| anyhow::anyhow!("unknown range {raw:?}"))?,
                None => RangePreset::default(),
            };
            let (range, display) = salonlite_lib::load_dashboard(ctx, preset, today).await?;
            print!("{}", render::render_dashboard(preset, &range, &display));
        }
        "customers" => {
            let view = salonlite_lib::list_customers(ctx, &args.join(" ")).await?;
            print!("{}", render::render_customers(&view));
        }
        "technicians" => {
            let view = salonlite_lib::list_technicians(ctx, &args.join(" ")).await?;
            print!("{}", render::render_technicians(&view));
        }
        "services" => {
            let view = salonlite_lib::list_saved_services(ctx, &args.join(" ")).await?;
            print!("{}", render::render_saved_services(&view));
        }
        "add-customer" => {
            let mut form = CustomerForm::default();
            form.first_name = arg(0).unwrap_or_default().to_string();
            form.last_name = arg(1).unwrap_or_default().to_string();
            form.email = arg(3).unwrap_or_default().to_string();
            form.set_phone(arg(2).unwrap_or_default());
            let saved = salonlite_lib::save_customer(ctx, None, &form).await?;
            println!("Created customer {} ({})", saved.id, saved.display_name());
        }
        "add-service" => {
            let mut form = SavedServiceForm::default();
            form.code = arg(0).unwrap_or_default().to_string();
            form.name = arg(1).unwrap_or_default().to_string();
            form.set_price(arg(2).unwrap_or_default());
            form.set_duration(arg(3).unwrap_or_default());
            let saved = salonlite_lib::save_saved_service(ctx, &form).await?;
            println!("Created service {} ({})", saved.code, saved.name);
        }
        other => bail!("unknown command {other:?}\n\n{USAGE}"),
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date {raw:?}, expected YYYY-MM-DD"))
}

fn parse_month(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .with_context(|| format!("invalid month {raw:?}, expected YYYY-MM"))
}

fn parse_id(raw: &str) -> Result<TechId> {
    raw.parse().with_context(|| format!("invalid id {raw:?}"))
}
