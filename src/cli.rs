//! CLI definitions for ShiftDesk.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

/// ShiftDesk CLI.
#[derive(Parser)]
#[command(name = "shiftdesk")]
#[command(about = "Job and shift scheduling for temporary staffing")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Server host, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Server port, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Job management commands
    Job {
        #[command(subcommand)]
        action: JobAction,
    },

    /// Shift management commands
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum JobAction {
    /// Create a job with one shift per day in [start, end)
    Create {
        /// Job ID
        #[arg(long)]
        id: Uuid,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Day after the last shift (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },

    /// Show a job and its shifts
    Show {
        /// Job ID
        job_id: Uuid,
    },

    /// Delete a job and its shifts
    Delete {
        /// Job ID
        job_id: Uuid,
    },
}

#[derive(Subcommand)]
pub(crate) enum ShiftAction {
    /// List shifts of a job or a talent
    List(ShiftFilter),

    /// Book a talent on a shift
    Book {
        /// Shift ID
        shift_id: Uuid,

        /// Talent ID
        talent_id: Uuid,
    },

    /// Cancel a shift of a job
    Cancel {
        /// Job ID
        job_id: Uuid,

        /// Shift ID
        shift_id: Uuid,
    },

    /// Move every shift of a talent to a replacement
    Replace {
        /// Talent giving up the shifts
        talent_id: Uuid,

        /// Talent taking them over
        replacement_id: Uuid,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub(crate) struct ShiftFilter {
    /// Shifts of this job
    #[arg(long)]
    pub job: Option<Uuid>,

    /// Shifts held by this talent
    #[arg(long)]
    pub talent: Option<Uuid>,
}
