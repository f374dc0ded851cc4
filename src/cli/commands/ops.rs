use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::controls::DeviceControls;
use crate::ui::messages;
use crate::utils::colors::{RESET, color_for_status};

/// Drive the simulated field devices. The device state is process-local:
/// toggles report what a real controller would do, nothing is persisted.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Ops {
        detection,
        irrigation,
        schedule_spray,
        emergency_spray,
        camera,
        yes,
    } = cmd
    {
        let mut controls = DeviceControls::new();

        let mut acted = false;

        if let Some(value) = detection {
            let active = parse_switch(value)?;
            messages::info(controls.toggle_detection(active));
            println!(
                "   Detection system: {}{}{}",
                color_for_status(controls.detection_active),
                controls.detection_status(),
                RESET
            );
            acted = true;
        }

        if let Some(value) = irrigation {
            let active = parse_switch(value)?;
            messages::info(controls.toggle_irrigation(active));
            acted = true;
        }

        if *schedule_spray {
            messages::info(controls.schedule_spray());
            acted = true;
        }

        if *emergency_spray {
            if *yes || messages::confirm("Initiate emergency spray on all fields") {
                messages::success(controls.emergency_spray());
            } else {
                println!("Aborted. No spray started.");
            }
            acted = true;
        }

        if let Some(number) = camera {
            let cam = controls.toggle_camera(*number)?;
            messages::info(format!(
                "Camera {} ({}) is now {}",
                number,
                cam.name,
                if cam.online { "online" } else { "offline" }
            ));
            acted = true;
        }

        // no flags: print the device panel
        if !acted {
            println!("🎛️  Field devices:\n");
            println!(
                "• Detection:  {}{}{}",
                color_for_status(controls.detection_active),
                controls.detection_status(),
                RESET
            );
            println!(
                "• Irrigation: {}{}{}",
                color_for_status(controls.irrigation_active),
                if controls.irrigation_active {
                    "Active"
                } else {
                    "Inactive"
                },
                RESET
            );
            for (i, cam) in controls.cameras.iter().enumerate() {
                println!(
                    "• Camera {} ({}): {}{}{}",
                    i + 1,
                    cam.name,
                    color_for_status(cam.online),
                    if cam.online { "online" } else { "offline" },
                    RESET
                );
            }
        }
    }

    Ok(())
}

fn parse_switch(value: &str) -> AppResult<bool> {
    match value.to_lowercase().as_str() {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(AppError::InvalidSwitch(other.to_string())),
    }
}
