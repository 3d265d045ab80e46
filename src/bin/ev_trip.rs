use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ev_trip_planner::catalog::{EvModels, IndianCities};
use ev_trip_planner::registry::{HttpStationRegistry, RegistryConfig};
use ev_trip_planner::simulator::SimulateOptions;
use ev_trip_planner::traits::LocationDirectory;
use ev_trip_planner::{PitStopRoute, PlanError, PlannerConfig, TripPlan, TripPlanner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan EV trips and charging stops between Indian cities")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the road distance and insert charging stops.
    Plan {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Vehicle model, e.g. "Tata Nexon EV"
        #[arg(long)]
        model: String,
        /// Current state of charge in percent
        #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u8).range(0..=100))]
        battery: u8,
        #[arg(long, default_value_t = 0.10)]
        safety_margin: f64,
        #[arg(long, default_value_t = 0.80)]
        recharge_target: f64,
        #[arg(long, env = "EV_PRICING_SEED", default_value_t = 42)]
        seed: u64,
    },
    /// Route through the charging station nearest to the start.
    PitStop {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, env = "EV_STATION_REGISTRY_URL", default_value = "http://localhost:5000")]
        registry_url: String,
        /// Skip stations that are currently unavailable
        #[arg(long)]
        available_only: bool,
    },
    /// List known cities.
    Cities,
    /// List known vehicle models.
    Models,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ev_trip_planner=info,ev_trip=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PlanError> {
    match cli.command {
        Command::Plan {
            from,
            to,
            model,
            battery,
            safety_margin,
            recharge_target,
            seed,
        } => {
            let planner = TripPlanner::new(PlannerConfig {
                simulate: SimulateOptions {
                    safety_margin_fraction: safety_margin,
                    recharge_target_fraction: recharge_target,
                    ..SimulateOptions::default()
                },
                pricing_seed: seed,
                ..PlannerConfig::default()
            });
            tracing::info!("planning {from} -> {to} in a {model} at {battery}%");
            let plan = planner.plan_by_names(&IndianCities, &EvModels, &from, &to, &model, battery)?;
            if cli.json {
                print_json(&plan);
            } else {
                print_plan(&plan);
            }
        }
        Command::PitStop {
            from,
            to,
            registry_url,
            available_only,
        } => {
            let registry = HttpStationRegistry::new(RegistryConfig {
                base_url: registry_url,
                ..RegistryConfig::default()
            })?;
            let planner = TripPlanner::new(PlannerConfig {
                available_stations_only: available_only,
                ..PlannerConfig::default()
            });
            let route = planner.pit_stop_by_names(&IndianCities, &registry, &from, &to)?;
            if cli.json {
                print_json(&route);
            } else {
                print_pit_stop(&route);
            }
        }
        Command::Cities => {
            for name in IndianCities.names() {
                println!("{name}");
            }
        }
        Command::Models => {
            for vehicle in EvModels.all() {
                println!("{} ({} km range)", vehicle.model_name, vehicle.max_range_km);
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(body) => println!("{body}"),
        Err(err) => tracing::error!("failed to encode output: {err}"),
    }
}

fn print_plan(plan: &TripPlan) {
    println!("Trip: {} -> {} ({})", plan.source, plan.destination, plan.vehicle_model);
    println!("Total distance: {} km", plan.total_distance_km);
    println!("Est. time: {}", plan.estimated_duration_label);
    println!("Est. cost: ₹{}", plan.estimated_cost);

    if plan.is_non_stop() {
        println!("Non-stop trip: reachable on the current charge.");
        return;
    }

    println!("Charging required ({} stops, {} minutes):", plan.stops.len(), plan.total_charging_minutes);
    for stop in &plan.stops {
        println!(
            "  Stop {}: {} at {} km from start, {} mins, ₹{:.2}/kWh, {} ports open",
            stop.sequence_index,
            stop.station_label,
            stop.cumulative_distance_km,
            stop.estimated_charge_time_minutes,
            stop.price_estimate,
            stop.open_ports
        );
    }
}

fn print_pit_stop(route: &PitStopRoute) {
    println!("Start: {}", route.start.name);
    println!(
        "Charging stop: {} ({}), {:.1} km from start, ₹{}/kWh",
        route.station.name, route.station.address, route.distance_to_station_km, route.station.price
    );
    println!("Destination: {}", route.end.name);
}
