// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use planar_event_state::wheel::WheelDirection;
use planar_geometry::Matrix2;
use planar_grid::DEFAULT_REFERENCE_SIZE;
use thiserror::Error;

use crate::event::KeyModifiers;

const ZOOM_FACTOR: &str = "zoom_factor";
const ROTATION_STEP: &str = "rotation_step";
const ZOOM_IN_DIRECTION: &str = "zoom_in_direction";
const ROTATE_MODIFIER: &str = "rotate_modifier";
const VISIBLE_MARGIN: &str = "visible_margin";
const GRID_REFERENCE_SIZE: &str = "grid_reference_size";
const INITIAL_ZOOM: &str = "initial_zoom";

/// Interaction and display settings for a [`ViewController`](crate::ViewController).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewConfig {
    /// Isotropic scale applied per wheel tick.
    pub zoom_factor: f64,
    /// Rotation per wheel tick with [`ViewConfig::rotate_modifier`] held,
    /// in radians.
    pub rotation_step: f64,
    /// Wheel direction that zooms in (and rotates counter-clockwise).
    pub zoom_in_direction: WheelDirection,
    /// Modifiers that turn wheel ticks into rotation.
    pub rotate_modifier: KeyModifiers,
    /// Inset from the screen edges, in pixels, for visible-region queries.
    pub visible_margin: f64,
    /// On-screen size, in pixels, a grid cell may reach before the grid
    /// refines.
    pub grid_reference_size: f64,
    /// Pixels per world unit of the initial (and reset) view.
    pub initial_zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_factor: 1.3,
            rotation_step: PI / 16.0,
            zoom_in_direction: WheelDirection::Up,
            rotate_modifier: KeyModifiers::SHIFT,
            visible_margin: 0.0,
            grid_reference_size: DEFAULT_REFERENCE_SIZE,
            initial_zoom: 50.0,
        }
    }
}

/// The type and valid range of a configurable option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptionKind {
    /// A number in `min..=max`.
    Number {
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },
    /// A [`WheelDirection`].
    Direction,
    /// A [`KeyModifiers`] set.
    Modifiers,
}

impl OptionKind {
    fn type_name(self) -> &'static str {
        match self {
            Self::Number { .. } => "number",
            Self::Direction => "wheel direction",
            Self::Modifiers => "modifier set",
        }
    }
}

/// The value of a configurable option.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionValue {
    /// A number.
    Number(f64),
    /// A wheel direction.
    Direction(WheelDirection),
    /// A modifier set.
    Modifiers(KeyModifiers),
}

/// Describes one [`ViewConfig`] field for settings UIs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionSpec {
    /// Field name, as accepted by [`ViewConfig::get`] and [`ViewConfig::set`].
    pub name: &'static str,
    /// Value type and range.
    pub kind: OptionKind,
    /// Default value.
    pub default: OptionValue,
    /// One-line description of what the option changes.
    pub effect: &'static str,
}

impl OptionSpec {
    /// Checks `value` against this option's kind and range.
    pub fn check(&self, value: OptionValue) -> Result<(), ConfigError> {
        match (self.kind, value) {
            (OptionKind::Number { min, max }, OptionValue::Number(v)) => {
                if (min..=max).contains(&v) {
                    Ok(())
                } else {
                    Err(ConfigError::OutOfRange {
                        name: self.name,
                        value: v,
                        min,
                        max,
                    })
                }
            }
            (OptionKind::Direction, OptionValue::Direction(_))
            | (OptionKind::Modifiers, OptionValue::Modifiers(_)) => Ok(()),
            (kind, _) => Err(ConfigError::TypeMismatch {
                name: self.name,
                expected: kind.type_name(),
            }),
        }
    }
}

/// Errors from reading or writing [`ViewConfig`] options by name.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// No option has the requested name.
    #[error("unknown view option")]
    UnknownOption,
    /// The value has the wrong type for the option.
    #[error("option `{name}` expects a {expected}")]
    TypeMismatch {
        /// Option name.
        name: &'static str,
        /// Expected value type.
        expected: &'static str,
    },
    /// The value lies outside the option's range.
    #[error("option `{name}` must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        /// Option name.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },
}

impl ViewConfig {
    /// Every configurable option, in display order.
    pub const OPTIONS: &'static [OptionSpec] = &[
        OptionSpec {
            name: ZOOM_FACTOR,
            kind: OptionKind::Number {
                min: 1e-3,
                max: 100.0,
            },
            default: OptionValue::Number(1.3),
            effect: "scale applied per wheel tick",
        },
        OptionSpec {
            name: ROTATION_STEP,
            kind: OptionKind::Number { min: -PI, max: PI },
            default: OptionValue::Number(PI / 16.0),
            effect: "rotation per wheel tick with the rotate modifier held, in radians",
        },
        OptionSpec {
            name: ZOOM_IN_DIRECTION,
            kind: OptionKind::Direction,
            default: OptionValue::Direction(WheelDirection::Up),
            effect: "wheel direction that zooms in",
        },
        OptionSpec {
            name: ROTATE_MODIFIER,
            kind: OptionKind::Modifiers,
            default: OptionValue::Modifiers(KeyModifiers::SHIFT),
            effect: "modifiers that make the wheel rotate instead of zoom",
        },
        OptionSpec {
            name: VISIBLE_MARGIN,
            kind: OptionKind::Number {
                min: 0.0,
                max: 1e4,
            },
            default: OptionValue::Number(0.0),
            effect: "inset from the screen edges for visible-region queries, in pixels",
        },
        OptionSpec {
            name: GRID_REFERENCE_SIZE,
            kind: OptionKind::Number {
                min: 1.0,
                max: 1e4,
            },
            default: OptionValue::Number(DEFAULT_REFERENCE_SIZE),
            effect: "largest on-screen grid cell before the grid refines, in pixels",
        },
        OptionSpec {
            name: INITIAL_ZOOM,
            kind: OptionKind::Number {
                min: 1e-6,
                max: 1e6,
            },
            default: OptionValue::Number(50.0),
            effect: "pixels per world unit of the initial view",
        },
    ];

    /// Looks up an option's description by name.
    #[must_use]
    pub fn option(name: &str) -> Option<&'static OptionSpec> {
        Self::OPTIONS.iter().find(|spec| spec.name == name)
    }

    /// Reads an option by name.
    pub fn get(&self, name: &str) -> Result<OptionValue, ConfigError> {
        Ok(match name {
            ZOOM_FACTOR => OptionValue::Number(self.zoom_factor),
            ROTATION_STEP => OptionValue::Number(self.rotation_step),
            ZOOM_IN_DIRECTION => OptionValue::Direction(self.zoom_in_direction),
            ROTATE_MODIFIER => OptionValue::Modifiers(self.rotate_modifier),
            VISIBLE_MARGIN => OptionValue::Number(self.visible_margin),
            GRID_REFERENCE_SIZE => OptionValue::Number(self.grid_reference_size),
            INITIAL_ZOOM => OptionValue::Number(self.initial_zoom),
            _ => return Err(ConfigError::UnknownOption),
        })
    }

    /// Writes an option by name, leaving the config unchanged on error.
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<(), ConfigError> {
        let spec = Self::option(name).ok_or(ConfigError::UnknownOption)?;
        spec.check(value)?;
        match (spec.name, value) {
            (ZOOM_FACTOR, OptionValue::Number(v)) => self.zoom_factor = v,
            (ROTATION_STEP, OptionValue::Number(v)) => self.rotation_step = v,
            (ZOOM_IN_DIRECTION, OptionValue::Direction(d)) => self.zoom_in_direction = d,
            (ROTATE_MODIFIER, OptionValue::Modifiers(m)) => self.rotate_modifier = m,
            (VISIBLE_MARGIN, OptionValue::Number(v)) => self.visible_margin = v,
            (GRID_REFERENCE_SIZE, OptionValue::Number(v)) => self.grid_reference_size = v,
            (INITIAL_ZOOM, OptionValue::Number(v)) => self.initial_zoom = v,
            _ => return Err(ConfigError::UnknownOption),
        }
        Ok(())
    }

    /// Checks every field against [`ViewConfig::OPTIONS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::OPTIONS
            .iter()
            .try_for_each(|spec| spec.check(self.get(spec.name)?))
    }

    /// Sets [`ViewConfig::zoom_factor`].
    #[must_use]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    /// Sets [`ViewConfig::rotation_step`].
    #[must_use]
    pub fn with_rotation_step(mut self, rotation_step: f64) -> Self {
        self.rotation_step = rotation_step;
        self
    }

    /// Sets [`ViewConfig::zoom_in_direction`].
    #[must_use]
    pub fn with_zoom_in_direction(mut self, direction: WheelDirection) -> Self {
        self.zoom_in_direction = direction;
        self
    }

    /// Sets [`ViewConfig::rotate_modifier`].
    #[must_use]
    pub fn with_rotate_modifier(mut self, modifiers: KeyModifiers) -> Self {
        self.rotate_modifier = modifiers;
        self
    }

    /// Sets [`ViewConfig::visible_margin`].
    #[must_use]
    pub fn with_visible_margin(mut self, margin: f64) -> Self {
        self.visible_margin = margin;
        self
    }

    /// Sets [`ViewConfig::grid_reference_size`].
    #[must_use]
    pub fn with_grid_reference_size(mut self, size: f64) -> Self {
        self.grid_reference_size = size;
        self
    }

    /// Sets [`ViewConfig::initial_zoom`].
    #[must_use]
    pub fn with_initial_zoom(mut self, zoom: f64) -> Self {
        self.initial_zoom = zoom;
        self
    }

    /// The per-tick zoom increment.
    #[must_use]
    pub fn zoom_matrix(&self) -> Matrix2 {
        Matrix2::scaling(self.zoom_factor, self.zoom_factor)
    }

    /// The per-tick rotation increment.
    #[must_use]
    pub fn rotation_matrix(&self) -> Matrix2 {
        Matrix2::rotation(self.rotation_step)
    }

    /// Whether `modifiers` select rotation rather than zoom.
    ///
    /// An empty [`ViewConfig::rotate_modifier`] disables wheel rotation.
    #[must_use]
    pub fn rotates(&self, modifiers: KeyModifiers) -> bool {
        !self.rotate_modifier.is_empty() && modifiers.contains(self.rotate_modifier)
    }
}
