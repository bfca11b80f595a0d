use anyhow::Result;

use gridstats::api::http::HttpSource;
use gridstats::api::ApiError;
use gridstats::cache::DataHub;
use gridstats::logging::{json_log, obj, v_num, v_str};
use gridstats::model::Driver;
use gridstats::render;
use gridstats::state::{Config, SeasonContext};

enum Command {
    Overview,
    Drivers { query: Option<String> },
    Driver { id: String },
    Races,
    Race { id: String },
    Compare { first: String, second: String },
}

fn usage() -> ! {
    eprintln!(
        "usage: gridstats [--season <year>] <command>\n\
         \n\
         commands:\n\
         \x20 overview                  season snapshot\n\
         \x20 drivers [query]           standings, optionally filtered\n\
         \x20 driver <id>               single driver detail\n\
         \x20 races                     race list\n\
         \x20 race <id>                 single race detail\n\
         \x20 compare <driver> <driver> head-to-head by id or short code"
    );
    std::process::exit(1);
}

fn parse_args(ctx: &mut SeasonContext) -> Command {
    let mut args = std::env::args().skip(1);
    let mut positional: Vec<String> = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--season" {
            match args.next().and_then(|v| v.parse().ok()) {
                Some(season) => ctx.select(season),
                None => usage(),
            }
        } else {
            positional.push(arg);
        }
    }

    let mut rest = positional.into_iter();
    match rest.next().as_deref() {
        Some("overview") => Command::Overview,
        Some("drivers") => Command::Drivers { query: rest.next() },
        Some("driver") => match rest.next() {
            Some(id) => Command::Driver { id },
            None => usage(),
        },
        Some("races") => Command::Races,
        Some("race") => match rest.next() {
            Some(id) => Command::Race { id },
            None => usage(),
        },
        Some("compare") => match (rest.next(), rest.next()) {
            (Some(first), Some(second)) => Command::Compare { first, second },
            _ => usage(),
        },
        _ => usage(),
    }
}

/// Matches a CLI handle against driver id or short code, case-insensitive.
fn find_driver<'a>(drivers: &'a [Driver], handle: &str) -> Option<&'a Driver> {
    let needle = handle.to_lowercase();
    drivers
        .iter()
        .find(|d| d.id.to_lowercase() == needle || d.short_name.to_lowercase() == needle)
}

fn report_error(err: &ApiError) {
    if err.is_not_found() {
        println!("not found");
    } else {
        println!("could not load: {}", err);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let mut ctx = SeasonContext::new(cfg.default_season);
    let command = parse_args(&mut ctx);
    let season = ctx.current();

    json_log(
        "startup",
        obj(&[
            ("api_base", v_str(&cfg.api_base)),
            ("season", v_num(season as f64)),
        ]),
    );

    let source = HttpSource::new(&cfg)?;
    let hub = DataHub::new(Box::new(source), cfg.cache_ttl);

    match command {
        Command::Overview => match hub.overview(season).await {
            Ok(overview) => print!("{}", render::overview_card(&overview, season)),
            Err(err) => report_error(&err),
        },
        Command::Drivers { query } => match hub.drivers(season).await {
            Ok(drivers) => {
                let shown: Vec<Driver> = match query.as_deref() {
                    Some(q) => gridstats::filter::search_drivers(&drivers, q)
                        .into_iter()
                        .cloned()
                        .collect(),
                    None => drivers,
                };
                print!("{}", render::standings_table(&shown));
            }
            Err(err) => report_error(&err),
        },
        Command::Driver { id } => match hub.drivers(season).await {
            Ok(drivers) => match find_driver(&drivers, &id) {
                Some(driver) => {
                    let teammate = drivers
                        .iter()
                        .find(|d| d.team == driver.team && d.id != driver.id);
                    print!("{}", render::driver_detail(driver, teammate));
                }
                None => println!("not found"),
            },
            Err(err) => report_error(&err),
        },
        Command::Races => match hub.races(season).await {
            Ok(races) => print!("{}", render::races_table(&races)),
            Err(err) => report_error(&err),
        },
        Command::Race { id } => match hub.race(&id, season).await {
            Ok(race) => print!("{}", render::race_detail(&race)),
            Err(err) => report_error(&err),
        },
        Command::Compare { first, second } => match hub.drivers(season).await {
            Ok(drivers) => match (find_driver(&drivers, &first), find_driver(&drivers, &second)) {
                (Some(a), Some(b)) => print!("{}", render::comparison(a, b)),
                _ => println!("not found"),
            },
            Err(err) => report_error(&err),
        },
    }

    Ok(())
}
