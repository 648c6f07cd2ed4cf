//! Enumerations and field types for business task tracking.
//!
//! This module defines the structured data types used to categorise tasks:
//! the owning department, priority level, and completion status.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Business departments that own tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    #[serde(alias = "Claims")]
    Claims,
    #[serde(alias = "Commissions")]
    Commissions,
    #[serde(alias = "Contract Admin")]
    ContractAdmin,
    #[serde(alias = "Cancellations")]
    Cancellations,
}

impl Department {
    /// All departments in display order.
    pub const ALL: [Department; 4] = [
        Department::Claims,
        Department::Commissions,
        Department::ContractAdmin,
        Department::Cancellations,
    ];
}

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[serde(alias = "Low")]
    Low,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "High")]
    High,
    #[serde(alias = "Urgent")]
    Urgent,
}

impl Priority {
    /// All priorities from least to most severe.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];
}

/// Task completion status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "In Progress")]
    InProgress,
    #[serde(alias = "Completed")]
    Completed,
}

impl Status {
    /// All statuses in workflow order.
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];
}
