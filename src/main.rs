use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use shatter::ship::ShipIntents;
use shatter::simulation::{SimulationPlugin, SimulationState};
use std::env;
use std::time::Duration;

/// Ticks to run before exiting; `SHATTER_TICKS` overrides the default.
#[derive(Resource)]
struct TickBudget(u64);

/// Headless stand-in for the input layer: sweep the nose around, keep the
/// trigger held, give short thrust bursts and pulse now and then.
fn scripted_pilot_system(mut intents: ResMut<ShipIntents>, sim: Res<SimulationState>) {
    let t = sim.tick_count;
    intents.turn_right = (t / 90) % 2 == 0;
    intents.turn_left = !intents.turn_right && t % 3 == 0;
    intents.thrust = t % 240 < 15;
    intents.brake = t % 240 > 200;
    intents.fire = true;
    intents.gravity_pulse = t % 400 == 399;
}

fn tick_budget_system(
    budget: Res<TickBudget>,
    sim: Res<SimulationState>,
    mut exit: MessageWriter<AppExit>,
) {
    if sim.tick_count >= budget.0 || sim.game_over {
        info!(
            "Finished after {} ticks: score {}, level {}, lives {}",
            sim.tick_count, sim.score, sim.level, sim.lives
        );
        exit.write(AppExit::Success);
    }
}

fn main() {
    let ticks = env::var("SHATTER_TICKS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(600);

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(SimulationPlugin)
        .insert_resource(TickBudget(ticks))
        .add_systems(PreUpdate, scripted_pilot_system)
        .add_systems(Last, tick_budget_system)
        .run();
}
