//! Push-button tasks
//!
//! Buttons are wired active-low with the internal pull-up enabled.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Timer};

use dysv17f_driver::{Command, SharedDysv17f};

use crate::uart::RpUartTx;

/// Player shared by all button tasks
pub type Player = SharedDysv17f<CriticalSectionRawMutex, RpUartTx>;

/// Debounce delay after a press edge
const DEBOUNCE: Duration = Duration::from_millis(30);

/// Send `command` every time the button is pressed
#[embassy_executor::task(pool_size = 6)]
pub async fn button_task(mut button: Input<'static>, command: Command, player: &'static Player) {
    info!("Button task started for {}", command);

    loop {
        button.wait_for_falling_edge().await;
        Timer::after(DEBOUNCE).await;
        if button.is_high() {
            // Bounce, not a press
            continue;
        }

        match player.send(command) {
            Ok(()) => debug!("Sent {}", command),
            Err(e) => warn!("Failed to send {}: {}", command, e),
        }

        button.wait_for_high().await;
        Timer::after(DEBOUNCE).await;
    }
}
