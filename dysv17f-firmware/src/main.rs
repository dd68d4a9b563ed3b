//! DY-SV17F demo firmware
//!
//! RP2040 firmware that drives a DY-SV17F MP3 module from six push
//! buttons. The module's RX pin is wired to UART1 TX (GPIO4); the module
//! never answers, so UART1 RX is left unconnected.
//!
//! | GPIO | Button      |
//! |------|-------------|
//! | 10   | Play        |
//! | 11   | Pause       |
//! | 12   | Previous    |
//! | 13   | Next        |
//! | 14   | Volume up   |
//! | 15   | Volume down |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::uart::UartTx;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use dysv17f_driver::{Command, Dysv17f, Equalizer, PlayMode, PlayerConfig, SharedDysv17f};
use dysv17f_hal::LINK_CONFIG;

use crate::tasks::Player;
use crate::uart::RpUartTx;

mod tasks;
mod uart;

/// Settings sent once at startup
const STARTUP_CONFIG: PlayerConfig = PlayerConfig {
    initial_volume: Some(20),
    eq: Some(Equalizer::Normal),
    play_mode: Some(PlayMode::FullCycle),
};

// Shared player (must live forever for task references)
static PLAYER: StaticCell<Player> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("DY-SV17F firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART1 for the MP3 module (9600 8N1, TX only)
    let uart_config = uart::rp_config(&LINK_CONFIG);
    let tx = UartTx::new_blocking(p.UART1, p.PIN_4, uart_config);
    info!("UART1 initialized at {} baud", LINK_CONFIG.baudrate);

    // The module needs a moment after power-up before it accepts commands
    embassy_time::Timer::after_millis(500).await;

    let driver = match Dysv17f::with_config(RpUartTx::new(tx), &STARTUP_CONFIG) {
        Ok(driver) => driver,
        Err(e) => {
            error!("Failed to configure DY-SV17F: {}", e);
            return;
        }
    };
    info!(
        "DY-SV17F configured ({} startup commands)",
        STARTUP_CONFIG.command_count()
    );

    let player: &'static Player = PLAYER.init(SharedDysv17f::new(driver));

    // Spawn button tasks
    spawner
        .spawn(tasks::button_task(Input::new(p.PIN_10, Pull::Up), Command::Play, player))
        .unwrap();
    spawner
        .spawn(tasks::button_task(Input::new(p.PIN_11, Pull::Up), Command::Pause, player))
        .unwrap();
    spawner
        .spawn(tasks::button_task(Input::new(p.PIN_12, Pull::Up), Command::Previous, player))
        .unwrap();
    spawner
        .spawn(tasks::button_task(Input::new(p.PIN_13, Pull::Up), Command::Next, player))
        .unwrap();
    spawner
        .spawn(tasks::button_task(Input::new(p.PIN_14, Pull::Up), Command::VolumeUp, player))
        .unwrap();
    spawner
        .spawn(tasks::button_task(Input::new(p.PIN_15, Pull::Up), Command::VolumeDown, player))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
