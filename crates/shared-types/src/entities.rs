//! # Component Entities
//!
//! Closed enums describing what a registered component is and how healthy
//! it currently looks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseEnumError;

/// Kind of a registered component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Top-level application module.
    Module,
    /// A grouping inside a module.
    Submodule,
    /// A routed page.
    Page,
    /// A source file or route handler.
    File,
    /// A visual widget.
    UiVisual,
    /// A troubleshooting guide.
    Troubleshooting,
    /// A known error signature.
    ErrorSignature,
}

impl ComponentType {
    /// All component types in declaration order.
    pub const ALL: [ComponentType; 7] = [
        ComponentType::Module,
        ComponentType::Submodule,
        ComponentType::Page,
        ComponentType::File,
        ComponentType::UiVisual,
        ComponentType::Troubleshooting,
        ComponentType::ErrorSignature,
    ];

    /// Wire name, as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Module => "module",
            ComponentType::Submodule => "submodule",
            ComponentType::Page => "page",
            ComponentType::File => "file",
            ComponentType::UiVisual => "ui_visual",
            ComponentType::Troubleshooting => "troubleshooting",
            ComponentType::ErrorSignature => "error_signature",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "component type",
                value: s.to_string(),
            })
    }
}

/// Health of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Compliant and healthy.
    Green,
    /// Needs attention.
    Yellow,
    /// Invalid or failing.
    Red,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Green => "green",
            HealthStatus::Yellow => "yellow",
            HealthStatus::Red => "red",
        }
    }

    /// Style token used by the dashboard badges.
    pub fn color(&self) -> &'static str {
        match self {
            HealthStatus::Green => "text-green-600 bg-green-50",
            HealthStatus::Yellow => "text-yellow-600 bg-yellow-50",
            HealthStatus::Red => "text-red-600 bg-red-50",
        }
    }

    /// Status glyph.
    pub fn icon(&self) -> &'static str {
        match self {
            HealthStatus::Green => "✅",
            HealthStatus::Yellow => "⚠️",
            HealthStatus::Red => "❌",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(HealthStatus::Green),
            "yellow" => Ok(HealthStatus::Yellow),
            "red" => Ok(HealthStatus::Red),
            _ => Err(ParseEnumError {
                kind: "health status",
                value: s.to_string(),
            }),
        }
    }
}

/// Style token for a health status.
pub fn get_health_color(status: HealthStatus) -> &'static str {
    status.color()
}

/// Glyph for a health status.
pub fn get_health_icon(status: HealthStatus) -> &'static str {
    status.icon()
}
