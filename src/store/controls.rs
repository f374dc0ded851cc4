//! Simulated field-device controls: detection, irrigation, spraying and the
//! camera feeds. Nothing here talks to real hardware and nothing persists;
//! the state lives for one process.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct Camera {
    pub name: String,
    pub online: bool,
}

#[derive(Debug, Clone)]
pub struct DeviceControls {
    pub detection_active: bool,
    pub irrigation_active: bool,
    pub cameras: Vec<Camera>,
}

impl Default for DeviceControls {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceControls {
    pub fn new() -> Self {
        let cameras = ["Field A", "Field B", "Field C"]
            .iter()
            .map(|name| Camera {
                name: name.to_string(),
                online: true,
            })
            .collect();

        Self {
            detection_active: false,
            irrigation_active: false,
            cameras,
        }
    }

    pub fn toggle_detection(&mut self, active: bool) -> &'static str {
        self.detection_active = active;
        if active {
            "Auto-detection started"
        } else {
            "Auto-detection stopped"
        }
    }

    pub fn detection_status(&self) -> &'static str {
        if self.detection_active {
            "Online"
        } else {
            "Offline"
        }
    }

    pub fn toggle_irrigation(&mut self, active: bool) -> &'static str {
        self.irrigation_active = active;
        if active {
            "Irrigation system activated"
        } else {
            "Irrigation system deactivated"
        }
    }

    pub fn schedule_spray(&self) -> &'static str {
        "Spray scheduled for next high-risk detection"
    }

    /// Destructive: callers must confirm with the user first.
    pub fn emergency_spray(&self) -> &'static str {
        "Emergency spray initiated!"
    }

    /// Flip one camera between online and offline. Camera numbers are
    /// 1-based as shown to the user.
    pub fn toggle_camera(&mut self, number: usize) -> AppResult<&Camera> {
        let camera = self
            .cameras
            .get_mut(number.wrapping_sub(1))
            .ok_or(AppError::InvalidCamera(number))?;
        camera.online = !camera.online;
        Ok(camera)
    }
}
