mod clap;
mod terminal;

use crate::{clap::*, terminal::TerminalUi};
use indexing_console::{HttpApi, IndexingController, PollSchedule};
use log::{info, debug};
use std::{process::ExitCode, time::Duration};
use tokio::time::sleep;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    debug!("Using indexing backend at {}", args.api_url);
    let api = HttpApi::new(&args.api_url);

    match args.command {
        Command::Status => {
            let ui = TerminalUi::new("", "Start indexing");
            let controller = IndexingController::new(api, ui.handles());
            match controller.check_status().await {
                Ok(_) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            }
        }
        Command::Toggle { id, label } => {
            let ui = TerminalUi::new(id, label);
            let controller = IndexingController::new(api, ui.handles());
            match controller.toggle_indexing(&()).await {
                Ok(_) => {
                    info!("Button now reads {:?}", ui.current_label());
                    ExitCode::SUCCESS
                }
                Err(_) => ExitCode::FAILURE,
            }
        }
        Command::Watch { interval, busy_interval } => {
            let schedule = PollSchedule {
                idle: Duration::from_secs(interval),
                busy: Duration::from_secs(busy_interval),
                ..PollSchedule::default()
            };
            let ui = TerminalUi::new("", "Start indexing");
            let controller = IndexingController::new(api, ui.handles());
            loop {
                let last = controller.check_status().await;
                sleep(schedule.next_delay(&last)).await;
            }
        }
    }
}
