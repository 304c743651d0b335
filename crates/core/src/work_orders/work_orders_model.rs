//! Work order domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Kind of maintenance a work order represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderType {
    #[default]
    Corrective,
    Preventive,
    Condition,
    Improvement,
}

impl WorkOrderType {
    pub const ALL: [WorkOrderType; 4] = [
        WorkOrderType::Corrective,
        WorkOrderType::Preventive,
        WorkOrderType::Condition,
        WorkOrderType::Improvement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderType::Corrective => "corrective",
            WorkOrderType::Preventive => "preventive",
            WorkOrderType::Condition => "condition",
            WorkOrderType::Improvement => "improvement",
        }
    }
}

impl fmt::Display for WorkOrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkOrderType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                ValidationError::InvalidEnumValue {
                    field: "type",
                    value: s.to_string(),
                }
                .into()
            })
    }
}

/// Lifecycle state of a work order. Set once at creation; never transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    #[default]
    Open,
    InProgress,
    Done,
    Canceled,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 4] = [
        WorkOrderStatus::Open,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Done,
        WorkOrderStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "open",
            WorkOrderStatus::InProgress => "in_progress",
            WorkOrderStatus::Done => "done",
            WorkOrderStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkOrderStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::InvalidEnumValue {
                    field: "status",
                    value: s.to_string(),
                }
                .into()
            })
    }
}

/// Domain model representing a maintenance task against an asset.
///
/// `breakdown_at`, `closed_at`, `downtime_minutes`, `cause` and `solution`
/// are carried as-is; no operation sets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: i64,
    pub asset_id: i64,
    #[serde(rename = "type")]
    pub order_type: WorkOrderType,
    pub status: WorkOrderStatus,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cause: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub solution: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new work order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkOrder {
    pub asset_id: i64,
    #[serde(default, rename = "type")]
    pub order_type: Option<WorkOrderType>,
    #[serde(default)]
    pub status: Option<WorkOrderStatus>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewWorkOrder {
    pub fn new(asset_id: i64, title: impl Into<String>) -> Self {
        Self {
            asset_id,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, order_type: WorkOrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    pub fn with_status(mut self, status: WorkOrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Applies defaults to unset fields: status `open`, type `corrective`.
    pub fn normalize(&mut self) {
        if self.status.is_none() {
            self.status = Some(WorkOrderStatus::default());
        }
        if self.order_type.is_none() {
            self.order_type = Some(WorkOrderType::default());
        }
    }

    /// Validates the new work order data.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Work order title cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
