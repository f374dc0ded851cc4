use clap::{Parser, Subcommand};

/// Command-line interface definition for pestwatch
/// CLI dashboard to log and analyze pest detections with SQLite
#[derive(Parser)]
#[command(
    name = "pestwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple pest monitoring CLI: log detections, track trends and control field devices",
    long_about = None
)]
pub struct Cli {
    /// Override storage path (useful for tests or custom storage)
    #[arg(global = true, long = "storage")]
    pub storage: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the storage and configuration
    Init,

    /// Manage the configuration file
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Log in (use admin/admin123 for the demo account)
    Login {
        /// Username
        username: String,

        /// Password
        password: String,
    },

    /// Log out of the current session
    Logout,

    /// Show who is currently logged in
    Whoami,

    /// Register a new account
    Signup {
        #[arg(long, help = "Full name")]
        name: String,

        #[arg(long, help = "Username (must be unique)")]
        username: String,

        #[arg(long, help = "Email address")]
        email: String,

        #[arg(long, help = "Password (at least 6 characters)")]
        password: String,

        #[arg(long = "farm-location", default_value = "", help = "Farm location")]
        farm_location: String,

        #[arg(long, default_value = "", help = "Phone number")]
        phone: String,
    },

    /// Show or update the logged-in user's profile
    Profile {
        #[arg(long, help = "New full name")]
        name: Option<String>,

        #[arg(long, help = "New email address")]
        email: Option<String>,

        #[arg(long, help = "New phone number")]
        phone: Option<String>,

        #[arg(long = "farm-location", help = "New farm location")]
        farm_location: Option<String>,
    },

    /// Reset or change a password
    Password {
        /// Reset the password of the given username to the recovery value
        #[arg(long = "reset", value_name = "USERNAME", help = "Reset password for a username")]
        reset: Option<String>,

        /// Current password (change mode, requires login)
        #[arg(long = "old", help = "Current password")]
        old: Option<String>,

        /// New password (change mode)
        #[arg(long = "new", help = "New password (at least 6 characters)")]
        new: Option<String>,

        /// Confirmation of the new password (change mode)
        #[arg(long = "confirm", help = "Repeat the new password")]
        confirm: Option<String>,
    },

    /// Record a pest observation
    Add {
        /// Species (aphids, caterpillars, beetles, whiteflies, thrips)
        species: String,

        /// Number of pests counted (zero or positive)
        count: i64,

        /// Field location (defaults to the configured location)
        location: Option<String>,
    },

    /// List all recorded observations
    List,

    /// Delete an observation by ID
    Del {
        /// Observation id to delete
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Run one simulated auto-detection and record the result
    Detect,

    /// Show the dashboard (totals, alerts, density, recent activity)
    Dashboard,

    /// Show analysis stats and chart series (species split, 7-day trend)
    Analysis,

    /// Control the simulated field devices
    Ops {
        /// Turn the auto-detection system on or off
        #[arg(long, value_name = "on|off", help = "Toggle auto-detection")]
        detection: Option<String>,

        /// Turn the irrigation system on or off
        #[arg(long, value_name = "on|off", help = "Toggle irrigation")]
        irrigation: Option<String>,

        /// Schedule a spray for the next high-risk detection
        #[arg(long = "schedule-spray", help = "Schedule a spray")]
        schedule_spray: bool,

        /// Start an emergency spray on all fields (asks for confirmation)
        #[arg(long = "emergency-spray", help = "Emergency spray on all fields")]
        emergency_spray: bool,

        /// Toggle a camera feed by number (1-3)
        #[arg(long, value_name = "N", help = "Toggle camera N between online/offline")]
        camera: Option<usize>,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print or manage the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Inspect the storage file
    Storage {
        /// Show storage information (file size, blob contents)
        #[arg(long = "info", help = "Show storage information")]
        info: bool,
    },
}
